pub mod config_error;
pub mod trust_error;

pub use config_error::ConfigError;
pub use trust_error::TrustError;

/// Top-level engine error. Scoring functions themselves never fail —
/// malformed input and resource absence have defined fallbacks — so the
/// only error sources are the trust gates and config loading.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Trust(#[from] TrustError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;
