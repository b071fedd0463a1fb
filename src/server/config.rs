use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use crate::server::{error::config::ConfigError, util::parse::parse_id};

pub const DEFAULT_PREFIX: &str = "!";
const DEFAULT_API_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILE: &str = "logs/bot.log";
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 3;

/// Channel IDs the bot treats specially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Operational notices (startup, shutdown).
    pub console: u64,
    pub commands: u64,
    /// Dashboard chat relay and the `message` handler.
    pub message: u64,
    pub calculator: u64,
    pub games: u64,
}

impl ChannelConfig {
    /// Name of the sub-command handler that owns `channel_id`, if any.
    ///
    /// Checked in the order calculator, message, games.
    pub fn handler_for(&self, channel_id: u64) -> Option<&'static str> {
        if channel_id == self.calculator {
            Some("calculator")
        } else if channel_id == self.message {
            Some("message")
        } else if channel_id == self.games {
            Some("games")
        } else {
            None
        }
    }
}

/// Which channel accepts the `stop` / `disconnect` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StopChannelScope {
    #[default]
    Commands,
    Console,
    Any,
}

impl StopChannelScope {
    pub fn permits(&self, channels: &ChannelConfig, channel_id: u64) -> bool {
        match self {
            Self::Commands => channel_id == channels.commands,
            Self::Console => channel_id == channels.console,
            Self::Any => true,
        }
    }
}

impl FromStr for StopChannelScope {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "commands" => Ok(Self::Commands),
            "console" => Ok(Self::Console),
            "any" => Ok(Self::Any),
            _ => Err(ConfigError::InvalidValue {
                name: "STOP_CHANNEL_SCOPE".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShutdownConfig {
    /// Delay between a chat `stop` acknowledgment and the disconnect.
    pub grace: Duration,
    /// Delay used by `POST /shutdown`.
    pub api_grace: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_bot_token: String,
    pub prefix: String,
    pub channels: ChannelConfig,
    pub admin_role_id: u64,
    pub stop_channel_scope: StopChannelScope,
    pub shutdown: ShutdownConfig,
    pub api_addr: String,
    pub log_file: PathBuf,
}

/// `config.json` layout used by existing deployments.
#[derive(Deserialize)]
struct FileConfig {
    token: String,
    channels: FileChannels,
    roles: FileRoles,
    #[serde(default)]
    settings: FileSettings,
}

#[derive(Deserialize)]
struct FileChannels {
    console: Snowflake,
    #[serde(alias = "commandes")]
    commands: Snowflake,
    message: Snowflake,
    calculator: Snowflake,
    games: Snowflake,
}

#[derive(Deserialize)]
struct FileRoles {
    admin: Snowflake,
}

#[derive(Deserialize, Default)]
struct FileSettings {
    prefix: Option<String>,
}

/// Discord IDs appear both quoted and bare in hand-written JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snowflake {
    Text(String),
    Number(u64),
}

impl Snowflake {
    fn resolve(&self, name: &str) -> Result<u64, ConfigError> {
        match self {
            Self::Text(value) => parse_id(name, value),
            Self::Number(value) => parse_id(name, &value.to_string()),
        }
    }
}

impl Config {
    /// Loads configuration from `CONFIG_FILE` when set, otherwise from environment variables.
    ///
    /// Ambient settings (API address, log file, shutdown policy) always come from the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        let lookup = |name: &str| std::env::var(name).ok();

        match lookup("CONFIG_FILE") {
            Some(path) => Self::from_json_file(Path::new(&path), lookup),
            None => Self::from_lookup(lookup),
        }
    }

    /// Builds configuration from named settings.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a setting, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required settings present and valid
    /// - `Err(ConfigError)` - A required setting is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));
        let id = |name: &str| required(name).and_then(|value| parse_id(name, &value));

        let channels = ChannelConfig {
            console: id("CONSOLE_CHANNEL_ID")?,
            commands: id("COMMANDS_CHANNEL_ID")?,
            message: id("MESSAGE_CHANNEL_ID")?,
            calculator: id("CALCULATOR_CHANNEL_ID")?,
            games: id("GAMES_CHANNEL_ID")?,
        };

        Self::with_settings(
            required("DISCORD_BOT_TOKEN")?,
            lookup("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            channels,
            id("ADMIN_ROLE_ID")?,
            &lookup,
        )
    }

    /// Reads a `config.json` file and completes it with ambient settings from `lookup`.
    pub fn from_json_file<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&json, lookup)
    }

    pub fn from_json_str<F>(json: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = serde_json::from_str(json)?;

        let channels = ChannelConfig {
            console: file.channels.console.resolve("channels.console")?,
            commands: file.channels.commands.resolve("channels.commands")?,
            message: file.channels.message.resolve("channels.message")?,
            calculator: file.channels.calculator.resolve("channels.calculator")?,
            games: file.channels.games.resolve("channels.games")?,
        };

        Self::with_settings(
            file.token,
            file.settings
                .prefix
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            channels,
            file.roles.admin.resolve("roles.admin")?,
            &lookup,
        )
    }

    fn with_settings<F>(
        discord_bot_token: String,
        prefix: String,
        channels: ChannelConfig,
        admin_role_id: u64,
        lookup: &F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if discord_bot_token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()));
        }

        // An empty prefix would turn every message into a command
        if prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "COMMAND_PREFIX".to_string(),
                value: prefix,
            });
        }

        let stop_channel_scope = match lookup("STOP_CHANNEL_SCOPE") {
            Some(value) => value.parse()?,
            None => StopChannelScope::default(),
        };

        let grace = seconds(lookup, "SHUTDOWN_GRACE_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS));
        let api_grace = seconds(lookup, "API_SHUTDOWN_GRACE_SECS")?.unwrap_or(grace);

        Ok(Self {
            discord_bot_token,
            prefix,
            channels,
            admin_role_id,
            stop_channel_scope,
            shutdown: ShutdownConfig { grace, api_grace },
            api_addr: lookup("API_ADDR").unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
            log_file: lookup("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

fn seconds<F>(lookup: &F, name: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        Err(_) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
    }
}
