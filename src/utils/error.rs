use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Failed to write output '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn malformed(message: impl Into<String>) -> Self {
        EtlError::MalformedInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputNotFound { .. }
            | EtlError::SerializationError(_)
            | EtlError::MalformedInput { .. } => ErrorCategory::Input,
            EtlError::IoError(_) | EtlError::OutputWriteError { .. } => ErrorCategory::Output,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入或設定問題：修正後重跑即可
            EtlError::InputNotFound { .. }
            | EtlError::SerializationError(_)
            | EtlError::MalformedInput { .. }
            | EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            // 系統層級 IO 錯誤
            EtlError::IoError(_) | EtlError::OutputWriteError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputNotFound { .. } => {
                "Check the --input path or source.input_path in the config file"
            }
            EtlError::SerializationError(_) => "Make sure the input file is valid GeoJSON",
            EtlError::MalformedInput { .. } => {
                "Make sure the input is a FeatureCollection whose features carry point coordinates"
            }
            EtlError::IoError(_) => "Check file permissions and available disk space",
            EtlError::OutputWriteError { .. } => {
                "Check that the output directory is writable; the output file may be incomplete"
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => format!("Cannot find input file '{}'", path),
            EtlError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            EtlError::MalformedInput { message } => {
                format!("Input does not look like elevator GeoJSON: {}", message)
            }
            EtlError::OutputWriteError { path, .. } => {
                format!("Could not write SQL script to '{}'", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
