use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined unless a `CONFIG_FILE`
    /// is provided. Check `.env.example` for the full list of settings.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A Discord snowflake setting is not a positive integer.
    #[error("Invalid Discord ID for {name}: '{value}'")]
    InvalidId {
        /// Setting the ID was read from
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A non-ID setting holds a value outside its accepted range.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    /// The JSON configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The JSON configuration file does not match the expected layout.
    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}
