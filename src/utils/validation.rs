use crate::domain::model::Section;
use crate::utils::error::{Result, TourError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TourError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(TourError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_section_names(names: &[String]) -> Result<()> {
    for name in names {
        name.parse::<Section>()?;
    }
    Ok(())
}
