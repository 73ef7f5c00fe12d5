use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDate};

/// Tehran standard time, the product's home market.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 210;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Offset used to decide what "today" is for the calendar anchor.
    pub utc_offset_minutes: i32,
    /// Pins "today" for demos and reproducible staging runs.
    pub fixed_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            utc_offset_minutes: parse_offset_minutes(
                std::env::var("PLANNER_UTC_OFFSET_MINUTES").ok().as_deref(),
            )?,
            fixed_date: parse_fixed_date(std::env::var("PLANNER_FIXED_DATE").ok().as_deref())?,
        })
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).with_context(|| {
            format!(
                "PLANNER_UTC_OFFSET_MINUTES={} is outside ±24h",
                self.utc_offset_minutes
            )
        })
    }
}

fn parse_offset_minutes(raw: Option<&str>) -> Result<i32> {
    match raw {
        None => Ok(DEFAULT_UTC_OFFSET_MINUTES),
        Some(value) => value
            .trim()
            .parse::<i32>()
            .with_context(|| format!("PLANNER_UTC_OFFSET_MINUTES must be an integer, got '{value}'")),
    }
}

fn parse_fixed_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("PLANNER_FIXED_DATE must be YYYY-MM-DD, got '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_offset(minutes: i32) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            utc_offset_minutes: minutes,
            fixed_date: None,
        }
    }

    #[test]
    fn test_offset_defaults_to_tehran() {
        assert_eq!(parse_offset_minutes(None).unwrap(), 210);
    }

    #[test]
    fn test_offset_parses_negative() {
        assert_eq!(parse_offset_minutes(Some(" -300 ")).unwrap(), -300);
    }

    #[test]
    fn test_offset_rejects_garbage() {
        assert!(parse_offset_minutes(Some("+03:30")).is_err());
    }

    #[test]
    fn test_fixed_date_parsing() {
        assert_eq!(parse_fixed_date(None).unwrap(), None);
        assert_eq!(parse_fixed_date(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_fixed_date(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(parse_fixed_date(Some("29/02/2024")).is_err());
    }

    #[test]
    fn test_utc_offset_bounds() {
        assert_eq!(
            config_with_offset(210).utc_offset().unwrap().local_minus_utc(),
            210 * 60
        );
        assert!(config_with_offset(24 * 60).utc_offset().is_err());
    }
}
