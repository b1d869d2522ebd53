use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackerError {
    #[error("Malformed input for {field}: '{value}' is not a non-negative integer")]
    MalformedInput { field: String, value: String },

    #[error("Input ended while waiting for {field}")]
    UnexpectedEof { field: String },

    #[error("Item {index} has weight {weight}, which exceeds the bin capacity {capacity}")]
    ItemTooLarge {
        index: usize,
        weight: u64,
        capacity: u64,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Packing,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PackerError::MalformedInput { .. } | PackerError::UnexpectedEof { .. } => {
                ErrorCategory::Input
            }
            PackerError::ItemTooLarge { .. } => ErrorCategory::Packing,
            PackerError::ConfigError { .. }
            | PackerError::InvalidConfigValueError { .. }
            | PackerError::ConfigParseError(_) => ErrorCategory::Configuration,
            PackerError::IoError(_) | PackerError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Packing | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PackerError::MalformedInput { field, .. } => {
                format!("Enter {} as a whole number without signs or separators", field)
            }
            PackerError::UnexpectedEof { .. } => {
                "Provide the remaining numbers, separated by spaces or newlines".to_string()
            }
            PackerError::ItemTooLarge { capacity, .. } => format!(
                "Use weights no larger than {} or run with --oversize accept to give such items their own bin",
                capacity
            ),
            PackerError::ConfigError { .. } | PackerError::ConfigParseError(_) => {
                "Check that the configuration file exists and is valid TOML".to_string()
            }
            PackerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            PackerError::IoError(_) => "Check that the terminal is readable and writable".to_string(),
            PackerError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PackerError::MalformedInput { field, value } => {
                format!("'{}' is not a valid {}", value, field)
            }
            PackerError::UnexpectedEof { field } => format!("No value given for {}", field),
            PackerError::ItemTooLarge {
                index,
                weight,
                capacity,
            } => format!(
                "Item {} (weight {}) does not fit into a bin of capacity {}",
                index, weight, capacity
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackerError>;
