use thiserror::Error;

#[derive(Error, Debug)]
pub enum VowelError {
    #[error("No input line available: standard input reached end of stream")]
    InputUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl VowelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VowelError::InputUnavailable => ErrorCategory::Input,
            VowelError::ConfigParseError { .. } | VowelError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            VowelError::IoError(_) | VowelError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定行程退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VowelError::InputUnavailable => {
                "Pipe or type one line of text into standard input, e.g. `echo hello | vowel-count`"
            }
            VowelError::IoError(_) => "Check that standard input and the config file are readable",
            VowelError::SerializationError(_) => "Retry with `--format plain`",
            VowelError::ConfigParseError { .. } => {
                "Make sure the file exists and is valid TOML with optional [counter] and [output] tables"
            }
            VowelError::InvalidConfigValueError { .. } => "Fix the value named above and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VowelError::InputUnavailable => "沒有可讀取的輸入 (no input line was provided)".to_string(),
            VowelError::ConfigParseError { path, .. } => {
                format!("設定檔無法解析 (cannot parse config file '{}')", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VowelError>;
