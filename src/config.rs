use std::env;
use std::str::FromStr;

use crate::domain::solver_factory::SolverType;

/// Server settings read from the environment (and `.env` through dotenv).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub json_limit: usize,
    pub solver: SolverType,
    pub max_iterations: Option<usize>,
    pub cache_capacity: usize,
    pub max_variables: usize,
    pub max_constraints: usize,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 9000,
            json_limit: 2 * 1024 * 1024, // default 2 MB
            solver: SolverType::Dantzig,
            max_iterations: None,
            cache_capacity: 256,
            max_variables: 5,
            max_constraints: 5,
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();

        let solver = match lookup("SOLVER") {
            Some(raw) => SolverType::from_str(&raw).unwrap_or_else(|| {
                log::warn!("Unknown SOLVER {:?}, using {:?}", raw, defaults.solver);
                defaults.solver
            }),
            None => defaults.solver,
        };

        AppConfig {
            port: parse_or(&lookup, "PORT", defaults.port),
            json_limit: parse_or(&lookup, "JSON_PAYLOAD_LIMIT", defaults.json_limit),
            solver,
            max_iterations: lookup("MAX_ITERATIONS").and_then(|raw| parse_value("MAX_ITERATIONS", &raw)),
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.cache_capacity),
            max_variables: parse_or(&lookup, "MAX_VARIABLES", defaults.max_variables),
            max_constraints: parse_or(&lookup, "MAX_CONSTRAINTS", defaults.max_constraints),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty()),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|raw| parse_value(key, &raw))
        .unwrap_or(default)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        log::warn!("Ignoring unparseable {}={:?}", key, raw);
    }
    parsed
}
