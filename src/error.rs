use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoupError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Structural violation: {0}")]
    StructuralViolation(String),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid skeleton: {0}")]
    InvalidSkeleton(String),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SoupError>;
