// src/core/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Breach lookups
    pub hibp_api_url: String,
    pub hibp_timeout: Duration,

    // Password Generation
    pub max_password_amount: usize,

    // Logging
    pub log_level: LevelFilter,

    // Problems found while loading; logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Breach lookups
            hibp_api_url: "https://api.pwnedpasswords.com".to_string(),
            hibp_timeout: Duration::from_secs(5),

            // Password Generation
            max_password_amount: 1000,

            // Logging
            log_level: LevelFilter::Info,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or unparseable keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }
        parse_into(&lookup, "WEB_PORT", &mut config.web_port, &mut config.warnings);

        // Breach lookups
        if let Some(url) = lookup("HIBP_API_URL") {
            config.hibp_api_url = url;
        }
        let mut timeout_secs = config.hibp_timeout.as_secs();
        parse_into(&lookup, "HIBP_TIMEOUT_SECS", &mut timeout_secs, &mut config.warnings);
        config.hibp_timeout = Duration::from_secs(timeout_secs);

        // Password Generation
        parse_into(&lookup, "MAX_PASSWORD_AMOUNT", &mut config.max_password_amount, &mut config.warnings);
        if config.max_password_amount == 0 {
            config.warnings.push("MAX_PASSWORD_AMOUNT must be positive, using 1".to_string());
            config.max_password_amount = 1;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        config
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("⚠️ {}", warning);
        }
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, key)),
        }
    }
}
