use reqwest::Url;
use std::str::FromStr;
use tracing::{info, warn};
use workflowgo_domain::ReminderTimezone;
use workflowgo_utils::create_random_secret;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Seconds between two scans for upcoming interviews
    pub reminder_scan_interval_secs: u64,
    /// Seconds between two purges of reminders for interviews that have passed
    pub reminder_cleanup_interval_secs: u64,
    /// Zone used to interpret the wall-clock date and time of interviews
    pub timezone: ReminderTimezone,
    /// Where reminders are delivered. When not set reminders are only logged.
    pub webhook: Option<WebhookSettings>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookSettings {
    pub url: String,
    /// Sent in the `workflowgo-webhook-key` header so that the receiver can
    /// verify the sender
    pub key: String,
}

impl WebhookSettings {
    pub fn new(url: String, key: String) -> Option<Self> {
        let parsed_url = Url::parse(&url).ok()?;
        let allowed_schemes = ["https", "http"];
        if !allowed_schemes.contains(&parsed_url.scheme()) {
            return None;
        }
        Some(Self { url, key })
    }
}

const WEBHOOK_KEY_LEN: usize = 30;

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000);
        let reminder_scan_interval_secs = parse_positive_env_or("REMINDER_SCAN_INTERVAL_SECS", 60);
        let reminder_cleanup_interval_secs =
            parse_positive_env_or("REMINDER_CLEANUP_INTERVAL_SECS", 60 * 60);

        let timezone = match std::env::var("REMINDER_TIMEZONE") {
            Ok(name) => match ReminderTimezone::parse(&name) {
                Some(tz) => tz,
                None => {
                    warn!(
                        "The given REMINDER_TIMEZONE: {} is not a known timezone, falling back to the server local timezone.",
                        name
                    );
                    ReminderTimezone::Local
                }
            },
            Err(_) => ReminderTimezone::Local,
        };

        let webhook = match std::env::var("REMINDER_WEBHOOK_URL") {
            Ok(url) => {
                let key = match std::env::var("REMINDER_WEBHOOK_KEY") {
                    Ok(key) => key,
                    Err(_) => {
                        let key = create_random_secret(WEBHOOK_KEY_LEN);
                        info!("Did not find REMINDER_WEBHOOK_KEY environment variable. Generated webhook key: {}", key);
                        key
                    }
                };
                let settings = WebhookSettings::new(url.clone(), key);
                if settings.is_none() {
                    warn!(
                        "The given REMINDER_WEBHOOK_URL: {} is not a valid http(s) url, reminders will only be logged.",
                        url
                    );
                }
                settings
            }
            Err(_) => None,
        };

        Self {
            port,
            reminder_scan_interval_secs,
            reminder_cleanup_interval_secs,
            timezone,
            webhook,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T: FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

// Zero would make the job scheduler intervals panic
fn parse_positive_env_or(name: &str, default: u64) -> u64 {
    match parse_env_or(name, default) {
        0 => {
            warn!("{} must be positive, falling back to the default: {}.", name, default);
            default
        }
        value => value,
    }
}
