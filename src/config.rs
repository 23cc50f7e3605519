use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Acuity";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory (~/.acuity)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(".acuity")
}

/// Default location of the case database
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("triage.db")
}

/// Environment variables read by [`Config::from_env`]. All carry the
/// `ACUITY_` prefix except `OLLAMA_URL`, which is shared with other
/// Ollama tooling on the host.
pub const ENV_ADDR: &str = "ACUITY_ADDR";
pub const ENV_DB: &str = "ACUITY_DB";
pub const ENV_CATALOGUE: &str = "ACUITY_CATALOGUE";
pub const ENV_SCORER: &str = "ACUITY_SCORER";
pub const ENV_OLLAMA_URL: &str = "OLLAMA_URL";
pub const ENV_MODEL: &str = "ACUITY_MODEL";
pub const ENV_LLM_TIMEOUT_SECS: &str = "ACUITY_LLM_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen address {value}: {reason}")]
    InvalidAddr { value: String, reason: String },

    #[error("Unknown scorer {0:?} (expected weighted or assisted)")]
    InvalidScorer(String),

    #[error("Invalid timeout: {0:?}")]
    InvalidTimeout(String),
}

/// Which scorer handles case intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Weighted,
    Assisted,
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(ScorerKind::Weighted),
            "assisted" => Ok(ScorerKind::Assisted),
            other => Err(ConfigError::InvalidScorer(other.to_string())),
        }
    }
}

/// Runtime configuration, read once at startup from the `ENV_*` variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub catalogue_path: Option<PathBuf>,
    pub scorer: ScorerKind,
    pub ollama_url: String,
    pub model: String,
    pub llm_timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment. Every unset variable
    /// falls back to its default; a set-but-invalid one is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = match std::env::var(ENV_ADDR) {
            Ok(raw) => parse_addr(&raw)?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 8080)),
        };

        let db_path = std::env::var(ENV_DB)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        let catalogue_path = std::env::var(ENV_CATALOGUE).ok().map(PathBuf::from);

        let scorer = match std::env::var(ENV_SCORER) {
            Ok(raw) => ScorerKind::from_str(&raw)?,
            Err(_) => ScorerKind::Weighted,
        };

        let ollama_url = std::env::var(ENV_OLLAMA_URL)
            .unwrap_or_else(|_| "http://localhost:11434".to_string());

        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| "medgemma".to_string());

        let llm_timeout_secs = match std::env::var(ENV_LLM_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => 120,
        };

        Ok(Self {
            addr,
            db_path,
            catalogue_path,
            scorer,
            ollama_url,
            model,
            llm_timeout_secs,
        })
    }
}

fn parse_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let secs: u64 = raw
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(raw.to_string()));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with(".acuity"));
    }

    #[test]
    fn default_db_under_app_data() {
        let db = default_db_path();
        assert!(db.starts_with(app_data_dir()));
        assert!(db.ends_with("triage.db"));
    }

    // Operators script against these names; renaming one is a breaking
    // change, not a refactor.
    #[test]
    fn env_variable_names_are_stable() {
        assert_eq!(ENV_ADDR, "ACUITY_ADDR");
        assert_eq!(ENV_DB, "ACUITY_DB");
        assert_eq!(ENV_CATALOGUE, "ACUITY_CATALOGUE");
        assert_eq!(ENV_SCORER, "ACUITY_SCORER");
        assert_eq!(ENV_OLLAMA_URL, "OLLAMA_URL");
        assert_eq!(ENV_MODEL, "ACUITY_MODEL");
        assert_eq!(ENV_LLM_TIMEOUT_SECS, "ACUITY_LLM_TIMEOUT_SECS");
    }

    #[test]
    fn app_name_is_acuity() {
        assert_eq!(APP_NAME, "Acuity");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn scorer_kind_parses_both_values() {
        assert_eq!(ScorerKind::from_str("weighted").unwrap(), ScorerKind::Weighted);
        assert_eq!(ScorerKind::from_str("assisted").unwrap(), ScorerKind::Assisted);
    }

    #[test]
    fn scorer_kind_rejects_unknown_values() {
        assert!(ScorerKind::from_str("clever").is_err());
        assert!(ScorerKind::from_str("Weighted").is_err());
        assert!(ScorerKind::from_str("").is_err());
    }

    #[test]
    fn addr_parsing() {
        assert_eq!(
            parse_addr("0.0.0.0:9000").unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 9000))
        );
        assert!(matches!(
            parse_addr("not-an-addr"),
            Err(ConfigError::InvalidAddr { .. })
        ));
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("300").unwrap(), 300);
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
