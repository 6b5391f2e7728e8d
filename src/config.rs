use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Front-end origin allowed by CORS.
    pub app_base_url: String,
    /// Load the startup announcements, events, programs and businesses.
    pub seed_content: bool,
    pub max_body_bytes: usize,
    // Initial administrator account (optional)
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".into())
                .parse()?,
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            seed_content: flag("SEED_CONTENT", true)?,
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| "65536".into())
                .parse()?,
            admin_username: env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            app_base_url: "http://localhost:5173".into(),
            seed_content: false,
            max_body_bytes: 64 * 1024,
            admin_username: None,
            admin_password: None,
        }
    }
}

fn flag(key: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => parse_flag(&v).ok_or_else(|| anyhow::anyhow!("Invalid boolean for {key}: {v}")),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_boolean_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn default_config_binds_locally_without_seed() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(!config.seed_content);
    }
}
