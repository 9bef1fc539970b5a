//! Form configuration.
//!
//! Initial values the form starts with, plus the upper limits applied to
//! edits of the numeric fields.

use config::ConfigError;
use serde::Deserialize;

/// Initial form values and edit limits.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Initial identifier prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Initial digit width.
    #[serde(default = "default_digit_width")]
    pub digit_width: usize,

    /// Initial start number (the counter starts here too).
    #[serde(default = "default_start_number")]
    pub start_number: i64,

    /// Initial batch size.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// Largest digit width an edit may set.
    #[serde(default = "default_max_digit_width")]
    pub max_digit_width: usize,

    /// Largest batch size an edit may set.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u32,
}

fn default_prefix() -> String {
    "GIET".to_string()
}

const fn default_digit_width() -> usize {
    6
}

const fn default_start_number() -> i64 {
    1
}

const fn default_batch_size() -> u32 {
    5
}

const fn default_max_digit_width() -> usize {
    64
}

const fn default_max_batch_size() -> u32 {
    10_000
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            digit_width: default_digit_width(),
            start_number: default_start_number(),
            batch_size: default_batch_size(),
            max_digit_width: default_max_digit_width(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl FormConfig {
    /// Validate the form configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an initial value is not positive or exceeds its limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digit_width == 0 {
            return Err(ConfigError::Message(
                "form.max_digit_width cannot be 0".to_string(),
            ));
        }
        if self.digit_width == 0 || self.digit_width > self.max_digit_width {
            return Err(ConfigError::Message(format!(
                "form.digit_width must be 1-{}, got {}",
                self.max_digit_width, self.digit_width
            )));
        }
        if self.start_number <= 0 {
            return Err(ConfigError::Message(format!(
                "form.start_number must be positive, got {}",
                self.start_number
            )));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::Message(
                "form.max_batch_size cannot be 0".to_string(),
            ));
        }
        if self.batch_size == 0 || self.batch_size > self.max_batch_size {
            return Err(ConfigError::Message(format!(
                "form.batch_size must be 1-{}, got {}",
                self.max_batch_size, self.batch_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FormConfig::default();
        assert_eq!(config.prefix, "GIET");
        assert_eq!(config.digit_width, 6);
        assert_eq!(config.start_number, 1);
        assert_eq!(config.batch_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = FormConfig {
            digit_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FormConfig {
            start_number: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FormConfig {
            batch_size: 20_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FormConfig {
            digit_width: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
