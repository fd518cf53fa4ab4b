use thiserror::Error;

/// Reasons the morph subsystem refuses to start.
///
/// None of these are fatal to the page: callers log them and leave the
/// decoration disabled.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MorphError {
    #[error("missing dependency: {0}")]
    MissingDependency(String),
    #[error("missing DOM target: #{0}")]
    MissingDomTarget(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MorphError>;
