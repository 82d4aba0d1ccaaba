use std::str::FromStr;

use crate::{
    codec,
    contract,
    error::{NameError, NameResult},
    name::{out_of_range, Name, NamePrimitives},
    types::{check_delimiter, NameConfig, DEFAULT_DELIMITER},
};

/// A name stored as one masked string plus its component count.
///
/// Every edit splits the string on unescaped delimiters, edits the parts and
/// joins them again. An empty string holds one empty component; only a name
/// whose last component was removed (or [`StringName::empty`]) has none.
#[derive(Debug, Clone)]
pub struct StringName {
    name: String,
    no_components: usize,
    delimiter: char,
}

impl StringName {
    /// Parses a delimited string. Bare delimiters separate components,
    /// `\<delimiter>` and `\\` are kept as escapes and any other escape
    /// character is taken literally.
    ///
    /// ```
    /// use nomen::{Name, StringName};
    ///
    /// let name = StringName::new("a.b\\.c", '.').unwrap();
    /// assert_eq!(name.components(), vec!["a", "b.c"]);
    /// assert_eq!(StringName::new("", '.').unwrap().no_components(), 1);
    /// ```
    pub fn new(source: &str, delimiter: char) -> NameResult<Self> {
        check_delimiter(delimiter)?;
        Self::from_masked(codec::canonicalize(source, delimiter), delimiter)
    }

    pub fn with_config(source: &str, config: &NameConfig) -> NameResult<Self> {
        Self::new(source, config.delimiter)
    }

    /// Takes a string that is already in canonical masked form. Dangling
    /// escape characters fail the invariant.
    pub fn from_masked(source: impl Into<String>, delimiter: char) -> NameResult<Self> {
        check_delimiter(delimiter)?;
        let name = source.into();
        let no_components = codec::split(&name, delimiter).len();
        Self::checked(name, no_components, delimiter)
    }

    /// A name without any component.
    pub fn empty(delimiter: char) -> NameResult<Self> {
        check_delimiter(delimiter)?;
        Self::checked(String::new(), 0, delimiter)
    }

    fn checked(name: String, no_components: usize, delimiter: char) -> NameResult<Self> {
        let name = Self {
            name,
            no_components,
            delimiter,
        };
        contract::assert_invariant(&name)?;
        Ok(name)
    }

    fn parts(&self) -> Vec<String> {
        if self.no_components == 0 {
            return Vec::new();
        }
        codec::split(&self.name, self.delimiter)
    }

    fn edit(&mut self, f: impl FnOnce(&mut Vec<String>)) {
        let mut parts = self.parts();
        f(&mut parts);
        self.name = codec::join(&parts, self.delimiter);
        self.no_components = parts.len();
    }
}

impl Name for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.no_components
    }

    fn masked_component(&self, i: usize) -> NameResult<String> {
        if i >= self.no_components {
            return Err(out_of_range(i, self.no_components));
        }
        Ok(self.parts().swap_remove(i))
    }

    fn masked_components(&self) -> Vec<String> {
        self.parts()
    }

    fn as_data_string(&self) -> String {
        if self.delimiter == DEFAULT_DELIMITER {
            return self.name.clone();
        }
        let parts: Vec<String> = self
            .parts()
            .iter()
            .map(|c| codec::remask(c, self.delimiter, DEFAULT_DELIMITER))
            .collect();
        codec::join(&parts, DEFAULT_DELIMITER)
    }
}

impl NamePrimitives for StringName {
    fn do_set_component(&mut self, i: usize, c: &str) {
        self.edit(|parts| parts[i] = c.to_string());
    }

    fn do_insert(&mut self, i: usize, c: &str) {
        self.edit(|parts| parts.insert(i, c.to_string()));
    }

    fn do_append(&mut self, c: &str) {
        self.edit(|parts| parts.push(c.to_string()));
    }

    fn do_remove(&mut self, i: usize) {
        self.edit(|parts| {
            parts.remove(i);
        });
    }

    fn check_representation(&self) -> Result<(), String> {
        if self.no_components == 0 {
            if !self.name.is_empty() {
                return Err(format!("{:?} stored for a name without components", self.name));
            }
            return Ok(());
        }
        let split = codec::split(&self.name, self.delimiter).len();
        if split != self.no_components {
            return Err(format!(
                "cached count {} disagrees with {} split components",
                self.no_components, split
            ));
        }
        Ok(())
    }
}

/// Parses a data string with the default delimiter.
impl FromStr for StringName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, DEFAULT_DELIMITER)
    }
}

impl_name_traits!(StringName);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MutableName;

    #[test]
    fn splits_on_unescaped_delimiters() {
        let n = StringName::new("oss.cs.fau.de", '.').unwrap();
        assert_eq!(n.no_components(), 4);
        assert_eq!(n.component(1).unwrap(), "cs");

        let n = StringName::new("a\\.b.c", '.').unwrap();
        assert_eq!(n.no_components(), 2);
        assert_eq!(n.masked_component(0).unwrap(), "a\\.b");
        assert_eq!(n.component(0).unwrap(), "a.b");
    }

    #[test]
    fn empty_string_is_one_empty_component() {
        let n = StringName::new("", '.').unwrap();
        assert_eq!(n.no_components(), 1);
        assert!(!n.is_empty());
        assert_eq!(n.component(0).unwrap(), "");
    }

    #[test]
    fn removing_last_component_leaves_empty_name() {
        let mut n = StringName::new("only", '.').unwrap();
        n.remove(0).unwrap();
        assert_eq!(n.no_components(), 0);
        assert!(n.is_empty());
        assert_eq!(n.as_data_string(), "");

        n.append("again").unwrap();
        assert_eq!(n.components(), vec!["again"]);
    }

    #[test]
    fn lone_escapes_are_literal() {
        let n = StringName::new("a\\b.c", '.').unwrap();
        assert_eq!(n.as_data_string(), "a\\\\b.c");
        assert_eq!(n.component(0).unwrap(), "a\\b");
    }

    #[test]
    fn from_masked_rejects_dangling_escape() {
        let err = StringName::from_masked("a\\b.c", '.').unwrap_err();
        assert!(matches!(err, NameError::InvariantViolation(_)));
    }

    #[test]
    fn insert_anywhere_keeps_split_stable() {
        for i in 0..=3 {
            let mut n = StringName::new("a.b.c", '.').unwrap();
            n.insert(i, "x\\.y").unwrap();
            assert_eq!(n.no_components(), 4);
            assert_eq!(n.component(i).unwrap(), "x.y");
            assert_eq!(n.check_representation(), Ok(()));
        }
    }

    #[test]
    fn own_delimiter_is_remasked_for_data_string() {
        let n = StringName::new("a.b/c", '/').unwrap();
        assert_eq!(n.components(), vec!["a.b", "c"]);
        assert_eq!(n.as_string(), "a.b/c");
        assert_eq!(n.as_string_with('.'), "a.b.c");
        assert_eq!(n.as_data_string(), "a\\.b.c");
    }

    #[test]
    fn cached_count_must_match_split() {
        let broken = StringName {
            name: "a.b".to_string(),
            no_components: 3,
            delimiter: '.',
        };
        assert!(broken.check_representation().is_err());
        assert!(matches!(
            contract::assert_invariant(&broken),
            Err(NameError::InvariantViolation(_))
        ));
    }
}
