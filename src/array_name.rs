use std::str::FromStr;

use crate::{
    codec,
    contract,
    error::{NameError, NameResult},
    name::{out_of_range, Name, NamePrimitives},
    types::{check_delimiter, NameConfig, DEFAULT_DELIMITER},
};

/// A name stored as a sequence of masked components.
///
/// Not synchronised: sharing one across threads that edit it needs external
/// locking. Use [`crate::ArrayNameValue`] for a freely shareable value.
#[derive(Debug, Clone)]
pub struct ArrayName {
    components: Vec<String>,
    delimiter: char,
}

impl ArrayName {
    /// Builds a name from raw components, masking each of them.
    ///
    /// ```
    /// use nomen::{ArrayName, Name};
    ///
    /// let name = ArrayName::new(["oss", "fau", "de"], '.').unwrap();
    /// assert_eq!(name.as_string(), "oss.fau.de");
    /// ```
    pub fn new<I, S>(components: I, delimiter: char) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_delimiter(delimiter)?;
        let components = components
            .into_iter()
            .map(|c| codec::mask(c.as_ref(), delimiter))
            .collect();
        Self::checked(components, delimiter)
    }

    pub fn with_config<I, S>(components: I, config: &NameConfig) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(components, config.delimiter)
    }

    /// Takes components that are already masked. Anything holding a raw
    /// delimiter or escape character fails the invariant.
    pub fn from_masked<I, S>(components: I, delimiter: char) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_delimiter(delimiter)?;
        Self::checked(components.into_iter().map(Into::into).collect(), delimiter)
    }

    pub fn empty(delimiter: char) -> NameResult<Self> {
        Self::from_masked(Vec::<String>::new(), delimiter)
    }

    fn checked(components: Vec<String>, delimiter: char) -> NameResult<Self> {
        let name = Self {
            components,
            delimiter,
        };
        contract::assert_invariant(&name)?;
        Ok(name)
    }
}

impl Name for ArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn masked_component(&self, i: usize) -> NameResult<String> {
        self.components
            .get(i)
            .cloned()
            .ok_or_else(|| out_of_range(i, self.components.len()))
    }

    fn masked_components(&self) -> Vec<String> {
        self.components.clone()
    }
}

impl NamePrimitives for ArrayName {
    fn do_set_component(&mut self, i: usize, c: &str) {
        self.components[i] = c.to_string();
    }

    fn do_insert(&mut self, i: usize, c: &str) {
        self.components.insert(i, c.to_string());
    }

    fn do_append(&mut self, c: &str) {
        self.components.push(c.to_string());
    }

    fn do_remove(&mut self, i: usize) {
        self.components.remove(i);
    }
}

/// Parses a data string with the default delimiter.
impl FromStr for ArrayName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = codec::canonicalize(s, DEFAULT_DELIMITER);
        Self::from_masked(codec::split(&canonical, DEFAULT_DELIMITER), DEFAULT_DELIMITER)
    }
}

impl_name_traits!(ArrayName);
