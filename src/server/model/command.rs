/// A command invocation parsed from message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased first token after the prefix; empty when the text is only the prefix.
    pub name: String,
    pub arguments: Vec<String>,
}

/// Known command kinds the router treats specially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `stop` or `disconnect`
    Stop,
    Help,
    /// Any other non-empty name, left to channel-scoped handlers.
    Other(&'a str),
    /// Text consisting of the prefix alone.
    Empty,
}

impl ParsedCommand {
    /// Parses `content` as a command invocation.
    ///
    /// # Arguments
    /// - `content` - Raw message text
    /// - `prefix` - Configured command prefix
    ///
    /// # Returns
    /// - `Some(ParsedCommand)` - Text starts with the prefix
    /// - `None` - Text does not start with the prefix
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        let mut tokens = rest.split_whitespace();

        let name = tokens.next().map(str::to_lowercase).unwrap_or_default();
        let arguments = tokens.map(str::to_string).collect();

        Some(Self { name, arguments })
    }

    pub fn kind(&self) -> Command<'_> {
        match self.name.as_str() {
            "" => Command::Empty,
            "stop" | "disconnect" => Command::Stop,
            "help" => Command::Help,
            other => Command::Other(other),
        }
    }
}
