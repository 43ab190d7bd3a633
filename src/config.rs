use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

/// Payment provider settings, read once at startup so a missing key fails
/// the boot instead of the first checkout. The base URL is overridable so
/// tests never hit the real API.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl StripeConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| anyhow::anyhow!("STRIPE_SECRET_KEY is not set"))?;
        let api_base =
            env::var("STRIPE_API_BASE").unwrap_or_else(|_| "https://api.stripe.com".to_string());
        Ok(Self {
            secret_key,
            api_base,
        })
    }
}
