use std::env;

pub struct Config {
    pub environment: String,
    pub log_level: String,
    pub strip_stage_prefix: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            strip_stage_prefix: env::var("STRIP_STAGE_PREFIX")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            strip_stage_prefix: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases live in one test so they don't race on the process environment.
    #[test]
    fn test_from_env() {
        env::remove_var("ENVIRONMENT");
        env::remove_var("LOG_LEVEL");
        env::remove_var("STRIP_STAGE_PREFIX");

        let config = Config::from_env();
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(config.strip_stage_prefix);

        env::set_var("ENVIRONMENT", "production");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("STRIP_STAGE_PREFIX", "False");

        let config = Config::from_env();
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_level, "debug");
        assert!(!config.strip_stage_prefix);

        env::set_var("STRIP_STAGE_PREFIX", "yes");
        assert!(Config::from_env().strip_stage_prefix);

        env::remove_var("ENVIRONMENT");
        env::remove_var("LOG_LEVEL");
        env::remove_var("STRIP_STAGE_PREFIX");
    }
}
