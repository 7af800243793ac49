use crate::calendar::WeekStart;
use crate::error::ConfigError;
use log::LevelFilter;

/// Runtime settings read from the optional `window.ENV` object.
///
/// Each key is accepted in README style (`LOG_LEVEL`) or lower case (`log_level`).
/// Bad values fall back to the default and are kept in `issues` so they can be
/// logged once the logger is up.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppConfig {
    pub log_level: LevelFilter,
    pub seed_demo_notes: bool,
    pub week_start: WeekStart,
    pub issues: Vec<ConfigError>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            seed_demo_notes: true,
            week_start: WeekStart::Sunday,
            issues: vec![],
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        match env {
            Some(env) => Self::from_lookup(|key| {
                let v = js_sys::Reflect::get(&env, &key.into()).ok()?;
                if let Some(s) = v.as_string() {
                    return Some(s);
                }
                v.as_bool().map(|b| b.to_string())
            }),
            None => Self::default(),
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |upper: &str, lower: &str| lookup(upper).or_else(|| lookup(lower));
        let mut cfg = Self::default();

        if let Some(raw) = get("LOG_LEVEL", "log_level") {
            match parse_log_level(&raw) {
                Ok(level) => cfg.log_level = level,
                Err(e) => cfg.issues.push(e),
            }
        }

        if let Some(raw) = get("SEED_DEMO_NOTES", "seed_demo_notes") {
            match parse_bool("SEED_DEMO_NOTES", &raw) {
                Ok(b) => cfg.seed_demo_notes = b,
                Err(e) => cfg.issues.push(e),
            }
        }

        if let Some(raw) = get("WEEK_START", "week_start") {
            match parse_week_start(&raw) {
                Ok(ws) => cfg.week_start = ws,
                Err(e) => cfg.issues.push(e),
            }
        }

        cfg
    }
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidLogLevel(raw.to_string())),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}

fn parse_week_start(raw: &str) -> Result<WeekStart, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sunday" | "sun" => Ok(WeekStart::Sunday),
        "monday" | "mon" => Ok(WeekStart::Monday),
        _ => Err(ConfigError::InvalidWeekStart(raw.to_string())),
    }
}
