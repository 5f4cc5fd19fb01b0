use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown section: {name}")]
    UnknownSectionError { name: String },
}

impl TourError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("A file operation failed: {}", e),
            TourError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            TourError::ConfigError { message } => format!("Configuration problem: {}", message),
            TourError::UnknownSectionError { name } => {
                format!("'{}' is not a tour section", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::IoError(_) => "Check that the path exists and is writable",
            TourError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            TourError::ConfigError { .. } => "Review the command-line arguments and config file",
            TourError::UnknownSectionError { .. } => {
                "Valid sections: hello, functions, variables, types, conversions, constants"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
