use thiserror::Error;

/// Errors raised while compiling a JSON Schema document into DDL.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("error parsing JSON Schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported reference format: {0}")]
    UnsupportedReference(String),
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),
    #[error("reference depth limit exceeded while resolving {0}, the definitions likely form a cycle")]
    ReferenceDepthExceeded(String),
}

pub type Result<T> = std::result::Result<T, CompileError>;
