use typed_builder::TypedBuilder;

use crate::error::{NameError, NameResult};

/// Delimiter used when none is configured, and the one the data string is
/// always written with.
pub const DEFAULT_DELIMITER: char = '.';

/// Masks delimiters and itself inside a component. Not configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// Construction settings shared by both representations.
///
/// ```
/// use nomen::NameConfig;
///
/// let config = NameConfig::builder().delimiter('/').build();
/// assert_eq!(config.delimiter, '/');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct NameConfig {
    #[builder(default = DEFAULT_DELIMITER)]
    pub delimiter: char,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl NameConfig {
    pub fn validate(&self) -> NameResult<()> {
        check_delimiter(self.delimiter)
    }
}

pub(crate) fn check_delimiter(delimiter: char) -> NameResult<()> {
    if delimiter == ESCAPE_CHARACTER {
        return Err(NameError::Configuration(
            "delimiter must differ from the escape character".to_string(),
        ));
    }
    if delimiter.is_control() {
        return Err(NameError::Configuration(format!(
            "delimiter {:?} is a control character",
            delimiter
        )));
    }
    Ok(())
}
