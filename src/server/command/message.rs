use serenity::async_trait;

use super::{ChannelCommand, CommandContext};
use crate::server::error::AppError;

/// Echo handler for the message channel.
///
/// `announce <text>` re-posts the text with a megaphone, `say <text>` re-posts it verbatim.
/// Other commands in the channel are ignored.
pub struct MessageCommand;

#[async_trait]
impl ChannelCommand for MessageCommand {
    fn name(&self) -> &'static str {
        "message"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<(), AppError> {
        let name = ctx.command.name.as_str();
        if name != "announce" && name != "say" {
            return Ok(());
        }

        let text = ctx.command.arguments.join(" ");
        if text.is_empty() {
            ctx.gateway
                .reply(
                    ctx.message.channel_id,
                    ctx.message.id,
                    &format!("Usage: `{}{} <text>`", ctx.config.prefix, name),
                )
                .await?;
            return Ok(());
        }

        let body = if name == "announce" {
            format!("📢 {}", text)
        } else {
            text
        };

        ctx.gateway
            .send_message(ctx.config.channels.message, &body)
            .await?;
        ctx.log.record(&format!(
            "[CMD] {}{} used by {}",
            ctx.config.prefix, name, ctx.message.author.tag
        ));

        Ok(())
    }
}
