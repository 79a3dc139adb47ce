use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    /// Operator address every contact message is delivered to
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            mail: MailConfig::from_env()?,
        })
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        let username =
            std::env::var("MAIL_USERNAME").context("Cannot load MAIL_USERNAME env variable")?;

        Ok(Self {
            server: std::env::var("MAIL_SERVER").context("Cannot load MAIL_SERVER env variable")?,
            port: std::env::var("MAIL_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("MAIL_PORT must be a number")?,
            password: std::env::var("MAIL_PASSWORD")
                .context("Cannot load MAIL_PASSWORD env variable")?,
            from: std::env::var("MAIL_FROM").unwrap_or_else(|_| username.clone()),
            recipient: std::env::var("MAIL_RECIPIENT")
                .context("Cannot load MAIL_RECIPIENT env variable")?,
            username,
        })
    }
}
