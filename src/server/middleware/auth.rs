use crate::server::{config::Config, error::auth::AuthError, model::message::IncomingMessage};

pub enum Permission {
    /// Message was posted in the channel configured to accept `stop` / `disconnect`.
    StopChannel,
    /// Author holds the configured admin role.
    Admin,
}

/// Proof that a privileged action was authorized.
///
/// Only `AuthGuard::require` and the explicit trusted-caller constructor produce one, so the
/// shutdown sequencer cannot be entered without passing through one of them.
#[derive(Debug)]
pub struct Authorized {
    actor: String,
}

impl Authorized {
    /// Authorization for the local control API, which performs no checks of its own.
    ///
    /// The dashboard is trusted because the API listens on loopback only by default.
    pub(crate) fn local_dashboard() -> Self {
        Self {
            actor: "dashboard".to_string(),
        }
    }

    /// Who initiated the action, as shown in log lines.
    pub fn actor(&self) -> &str {
        &self.actor
    }
}

pub struct AuthGuard<'a> {
    config: &'a Config,
    message: &'a IncomingMessage,
}

impl<'a> AuthGuard<'a> {
    pub fn new(config: &'a Config, message: &'a IncomingMessage) -> Self {
        Self { config, message }
    }

    /// Checks `permissions` in order, stopping at the first one that fails.
    ///
    /// # Returns
    /// - `Ok(Authorized)` - Every permission holds
    /// - `Err(AuthError::WrongChannel)` - Message is outside the stop channel
    /// - `Err(AuthError::MissingRole)` - Author lacks the admin role
    pub fn require(&self, permissions: &[Permission]) -> Result<Authorized, AuthError> {
        let author = &self.message.author;

        for permission in permissions {
            match permission {
                Permission::StopChannel => {
                    if !self
                        .config
                        .stop_channel_scope
                        .permits(&self.config.channels, self.message.channel_id)
                    {
                        return Err(AuthError::WrongChannel {
                            user_id: author.id,
                            channel_id: self.message.channel_id,
                        });
                    }
                }
                Permission::Admin => {
                    if !author.has_role(self.config.admin_role_id) {
                        return Err(AuthError::MissingRole {
                            user_id: author.id,
                            role_id: self.config.admin_role_id,
                        });
                    }
                }
            }
        }

        Ok(Authorized {
            actor: author.tag.clone(),
        })
    }
}
