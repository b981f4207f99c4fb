use std::num::NonZeroU64;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_HOURLY_RATE: u32 = 10;
const DEFAULT_PAYMENT_INSTRUCTIONS: &str = "Please send the amount above through PayPal \
    (friends & family) and post a screenshot of the completed payment in this thread. \
    A tutor will confirm your spot once the payment has been received.";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Role given to every member on join.
    pub member_role_id: u64,
    /// Role with full access, including `.clearThreads`.
    pub owner_role_id: u64,
    /// Roles allowed to manage sessions.
    pub allowed_role_ids: Vec<u64>,

    /// Price of one session hour, in whole currency units.
    pub hourly_rate: u32,
    pub payment_instructions: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            member_role_id: parse_id("MEMBER_ROLE_ID", &required("MEMBER_ROLE_ID")?)?,
            owner_role_id: parse_id("OWNER_ROLE_ID", &required("OWNER_ROLE_ID")?)?,
            allowed_role_ids: match std::env::var("ALLOWED_ROLE_IDS") {
                Ok(value) => parse_id_list("ALLOWED_ROLE_IDS", &value)?,
                Err(_) => Vec::new(),
            },
            hourly_rate: match std::env::var("HOURLY_RATE") {
                Ok(value) => value.trim().parse::<u32>().map_err(|e| {
                    ConfigError::InvalidEnvVar {
                        name: "HOURLY_RATE".to_string(),
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?,
                Err(_) => DEFAULT_HOURLY_RATE,
            },
            payment_instructions: std::env::var("PAYMENT_INSTRUCTIONS")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_INSTRUCTIONS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<NonZeroU64>()
        .map(NonZeroU64::get)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a comma separated list of role ids, skipping empty entries.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_id(name, part))
        .collect()
}
