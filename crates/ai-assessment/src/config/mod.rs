use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessments::compliance::{
    ComplianceCatalog, PenaltyPolicy, PenaltyPolicyError, RolePenalty,
};
use crate::assessments::maturity::MaturityModel;
use crate::assessments::CatalogError;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            assessment: AssessmentConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Colored output; only enabled for local development.
    pub ansi: bool,
}

/// Catalog overrides and the penalty policy constants.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    pub compliance_catalog: Option<PathBuf>,
    pub maturity_model: Option<PathBuf>,
    pub penalty: PenaltyPolicy,
}

impl AssessmentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = PenaltyPolicy::default();
        let penalty = PenaltyPolicy {
            provider: RolePenalty {
                rate: env_f64("APP_PENALTY_PROVIDER_RATE", defaults.provider.rate)?,
                cap: env_f64("APP_PENALTY_PROVIDER_CAP", defaults.provider.cap)?,
            },
            deployer: RolePenalty {
                rate: env_f64("APP_PENALTY_DEPLOYER_RATE", defaults.deployer.rate)?,
                cap: env_f64("APP_PENALTY_DEPLOYER_CAP", defaults.deployer.cap)?,
            },
        };
        penalty.validate().map_err(ConfigError::InvalidPenalty)?;

        Ok(Self {
            compliance_catalog: env_path("APP_COMPLIANCE_CATALOG"),
            maturity_model: env_path("APP_MATURITY_MODEL"),
            penalty,
        })
    }

    /// The configured compliance catalog, or the built-in EU AI Act questionnaire.
    pub fn load_compliance_catalog(&self) -> Result<ComplianceCatalog, CatalogError> {
        match &self.compliance_catalog {
            Some(path) => ComplianceCatalog::from_path(path),
            None => ComplianceCatalog::eu_ai_act(),
        }
    }

    pub fn load_maturity_model(&self) -> Result<MaturityModel, CatalogError> {
        match &self.maturity_model {
            Some(path) => MaturityModel::from_path(path),
            None => MaturityModel::ai_maturity(),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn env_f64(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidPenalty(PenaltyPolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { source } => {
                write!(f, "APP_HOST must be an IP address or localhost ({source})")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a decimal number (found '{value}')")
            }
            ConfigError::InvalidPenalty(err) => write!(f, "invalid penalty policy: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPenalty(err) => Some(err),
        }
    }
}

/// Serializes tests in this crate that read or mutate process environment variables.
#[cfg(test)]
pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock, PoisonError};

    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
