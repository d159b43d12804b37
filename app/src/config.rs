use std::{env, ops::Deref, str::FromStr, sync::Arc, time::Duration};

use anyhow::{Context, anyhow};

use crate::core::policy::ScorePolicy;

const DEFAULT_DB_URL: &str = "sqlite://daily_quiz.db?mode=rwc";
const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SESSION_LIFETIME_DAYS: u64 = 7;

const SECONDS_PER_DAY: u64 = 60 * 60 * 24;
const MAX_SESSION_LIFETIME_DAYS: u64 = 3650;

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    /// How long a "remember me" session survives without activity.
    pub session_lifetime: Duration,
    pub secure_cookies: bool,
    pub score_policy: ScorePolicy,
    pub require_email: bool,
    pub bcrypt_cost: u32,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            session_lifetime: Duration::from_secs(DEFAULT_SESSION_LIFETIME_DAYS * SECONDS_PER_DAY),
            secure_cookies: false,
            score_policy: ScorePolicy::default(),
            require_email: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let defaults = ConfigInner::default();

        if lookup("SECRET_KEY").is_none() {
            tracing::warn!("SECRET_KEY is not set, falling back to the development key");
        }

        let session_days: u64 = parse_var(&lookup, "SESSION_LIFETIME_DAYS")?
            .unwrap_or(DEFAULT_SESSION_LIFETIME_DAYS);
        if !(1..=MAX_SESSION_LIFETIME_DAYS).contains(&session_days) {
            return Err(anyhow!(
                "SESSION_LIFETIME_DAYS must be between 1 and {MAX_SESSION_LIFETIME_DAYS}"
            ));
        }

        let bcrypt_cost = parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(anyhow!("BCRYPT_COST must be between 4 and 31"));
        }

        let v = ConfigInner {
            db_url: lookup("DATABASE_URL").unwrap_or(defaults.db_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            secret_key: lookup("SECRET_KEY").unwrap_or(defaults.secret_key),
            session_lifetime: Duration::from_secs(session_days * SECONDS_PER_DAY),
            secure_cookies: parse_flag(&lookup, "SESSION_COOKIE_SECURE")?
                .unwrap_or(defaults.secure_cookies),
            score_policy: parse_var(&lookup, "SCORE_POLICY")?.unwrap_or(defaults.score_policy),
            require_email: parse_flag(&lookup, "REQUIRE_EMAIL")?.unwrap_or(defaults.require_email),
            bcrypt_cost,
        };

        Ok(Self(Arc::new(v)))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>())
        .transpose()
        .with_context(|| format!("{key} has an invalid value"))
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<bool>> {
    lookup(key)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(anyhow!("{key} must be a boolean, got {other:?}")),
        })
        .transpose()
}
