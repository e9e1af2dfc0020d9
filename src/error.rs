use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignError {
    #[error("cost at ({row}, {col}) must be finite and nonnegative, got {value}")]
    InvalidCost { row: usize, col: usize, value: f64 },
    #[error("pad value must be finite and nonnegative, got {0}")]
    InvalidPad(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {value} (must be finite and >= 0)")]
    InvalidThreshold { field: &'static str, value: f32 },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Event { line: usize, #[source] source: serde_json::Error },
    #[error("read script: {0}")]
    Io(#[from] std::io::Error),
}
