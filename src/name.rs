use crate::{
    codec,
    error::{NameError, NameResult},
    types::DEFAULT_DELIMITER,
    utils::string_hash,
};

/// Read access to a hierarchical name.
///
/// Components are stored masked for [`Name::delimiter`]. `component` and
/// `components` hand them out unmasked, `masked_component` and
/// `masked_components` in stored form.
///
/// Any type exposing a count and indexed components can take part in
/// equality and concatenation through `&dyn Name`.
pub trait Name {
    fn delimiter(&self) -> char;

    fn no_components(&self) -> usize;

    /// Component `i` as stored, masked for this name's delimiter.
    fn masked_component(&self, i: usize) -> NameResult<String>;

    fn masked_components(&self) -> Vec<String>;

    /// Component `i` with its masking removed.
    fn component(&self, i: usize) -> NameResult<String> {
        let masked = self.masked_component(i)?;
        Ok(codec::unmask(&masked, self.delimiter()))
    }

    fn components(&self) -> Vec<String> {
        let delimiter = self.delimiter();
        self.masked_components()
            .iter()
            .map(|c| codec::unmask(c, delimiter))
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// Human readable form: unmasked components joined by the own delimiter.
    fn as_string(&self) -> String {
        self.as_string_with(self.delimiter())
    }

    fn as_string_with(&self, delimiter: char) -> String {
        codec::join(&self.components(), delimiter)
    }

    /// Canonical masked form joined by [`DEFAULT_DELIMITER`]. Parsing it back
    /// with the default delimiter yields an equal name.
    fn as_data_string(&self) -> String {
        let delimiter = self.delimiter();
        let parts: Vec<String> = self
            .masked_components()
            .iter()
            .map(|c| codec::remask(c, delimiter, DEFAULT_DELIMITER))
            .collect();
        codec::join(&parts, DEFAULT_DELIMITER)
    }

    /// Same unmasked components in the same order. Delimiters and
    /// representations do not matter.
    fn is_equal(&self, other: &dyn Name) -> bool {
        self.no_components() == other.no_components() && self.components() == other.components()
    }

    fn hash_code(&self) -> i32 {
        string_hash(&self.as_data_string())
    }
}

pub(crate) use primitives::NamePrimitives;

mod primitives {
    use super::Name;

    /// Representation specific edits behind the contract checked operations.
    ///
    /// Indices and components reaching these methods have already passed the
    /// preconditions in [`crate::contract`]; implementations may index without
    /// further checks. Kept out of the public API: names are edited through
    /// [`crate::MutableName`] or [`crate::NameValue`] only.
    pub trait NamePrimitives: Name + Clone {
        fn do_set_component(&mut self, i: usize, c: &str);
        fn do_insert(&mut self, i: usize, c: &str);
        fn do_append(&mut self, c: &str);
        fn do_remove(&mut self, i: usize);

        /// Extra consistency rules of the representation, checked together
        /// with the masking invariant.
        fn check_representation(&self) -> Result<(), String> {
            Ok(())
        }
    }
}

pub(crate) fn out_of_range(index: usize, len: usize) -> NameError {
    NameError::IndexOutOfRange { index, len }
}

/// Equality, hashing, `Display` and serde for a concrete name type, all
/// routed through the [`Name`] capability.
macro_rules! impl_name_traits {
    ($ty:ty) => {
        impl<N: $crate::name::Name> PartialEq<N> for $ty {
            fn eq(&self, other: &N) -> bool {
                $crate::name::Name::is_equal(self, other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::name::Name::hash_code(self));
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::name::Name::as_data_string(self))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::name::Name::as_data_string(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let data = <String as serde::Deserialize>::deserialize(deserializer)?;
                data.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
