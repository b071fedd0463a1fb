use crate::server::error::config::ConfigError;

/// Parses a Discord snowflake from a configuration value
///
/// Snowflakes are non-zero; Serenity's ID types panic on zero, so it is rejected here.
///
/// # Arguments
/// - `name` - Name of the setting, used in the error
/// - `value` - The raw value to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed a non-zero ID
/// - `Err(ConfigError::InvalidId)` - Value is not a positive integer
pub fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
