/// Errors that can occur while configuring or flushing a sketch.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// A scale used as a divisor in the script is zero or not finite.
    InvalidScale { name: &'static str, value: f64 },

    /// The canvas size is not positive.
    InvalidSize { width: i32, height: i32 },

    /// Writing the generated text failed.
    Io(String),
}

impl std::fmt::Display for SketchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SketchError::InvalidScale { name, value } => {
                write!(f, "Invalid {}: {} (must be finite and non-zero)", name, value)
            }
            SketchError::InvalidSize { width, height } => {
                write!(f, "Invalid canvas size: {}x{}", width, height)
            }
            SketchError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for SketchError {}

impl From<std::io::Error> for SketchError {
    fn from(err: std::io::Error) -> Self {
        SketchError::Io(err.to_string())
    }
}

/// Result type for sketch operations.
pub type SketchResult<T> = Result<T, SketchError>;
