// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and log the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    match config.validate() {
        Ok(()) => {
            log::info!("Config OK");
            log::info!("    Bulletin URL: {}", config.fetch.url);
            log::info!("    Timeout: {}s", config.fetch.timeout_secs);
            log::info!("    Format: {:?}", config.parser.format);
            log::info!("    Default region: {}", config.parser.default_region);
            Ok(())
        }
        Err(e) => {
            log::error!("Config validation failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_validate() {
        assert!(run_validate(&Config::default()).is_ok());

        let mut config = Config::default();
        config.parser.default_region = " ".to_string();
        assert!(run_validate(&config).is_err());
    }
}
