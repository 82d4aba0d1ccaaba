use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    array_name::ArrayName,
    edit::{self, CopyOnWrite},
    error::{NameError, NameResult},
    name::{Name, NamePrimitives},
    string_name::StringName,
};

/// Immutable name value.
///
/// Every structural operation returns a new value and leaves the receiver
/// as it was. Clones share storage, and a value can be sent to and read from
/// any thread.
///
/// ```
/// use nomen::{ArrayNameValue, Name};
///
/// let base = ArrayNameValue::new(["oss", "fau"], '.').unwrap();
/// let longer = base.append("de").unwrap();
/// assert_eq!(base.no_components(), 2);
/// assert_eq!(longer.as_string(), "oss.fau.de");
/// ```
pub struct NameValue<N> {
    inner: Arc<N>,
}

pub type ArrayNameValue = NameValue<ArrayName>;
pub type StringNameValue = NameValue<StringName>;

impl<N> NameValue<N> {
    pub fn as_inner(&self) -> &N {
        &self.inner
    }

    /// Whether both values share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<N: Clone> NameValue<N> {
    /// Hands out a mutable representation, copying only if the storage is
    /// shared.
    pub fn into_inner(self) -> N {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<N: NamePrimitives> NameValue<N> {
    pub fn replace(&self, i: usize, c: &str) -> NameResult<Self> {
        edit::set_component(CopyOnWrite(self), i, c)
    }

    pub fn insert(&self, i: usize, c: &str) -> NameResult<Self> {
        edit::insert(CopyOnWrite(self), i, c)
    }

    pub fn append(&self, c: &str) -> NameResult<Self> {
        edit::append(CopyOnWrite(self), c)
    }

    pub fn remove(&self, i: usize) -> NameResult<Self> {
        edit::remove(CopyOnWrite(self), i)
    }

    pub fn concat(&self, other: &dyn Name) -> NameResult<Self> {
        edit::concat(CopyOnWrite(self), other)
    }
}

impl NameValue<ArrayName> {
    pub fn new<I, S>(components: I, delimiter: char) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ArrayName::new(components, delimiter).map(Self::from)
    }
}

impl NameValue<StringName> {
    pub fn new(source: &str, delimiter: char) -> NameResult<Self> {
        StringName::new(source, delimiter).map(Self::from)
    }
}

impl<N> From<N> for NameValue<N> {
    fn from(name: N) -> Self {
        Self {
            inner: Arc::new(name),
        }
    }
}

impl<N> Clone for NameValue<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for NameValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NameValue").field(&self.inner).finish()
    }
}

impl<N: Name> Name for NameValue<N> {
    fn delimiter(&self) -> char {
        self.inner.delimiter()
    }

    fn no_components(&self) -> usize {
        self.inner.no_components()
    }

    fn masked_component(&self, i: usize) -> NameResult<String> {
        self.inner.masked_component(i)
    }

    fn masked_components(&self) -> Vec<String> {
        self.inner.masked_components()
    }

    fn component(&self, i: usize) -> NameResult<String> {
        self.inner.component(i)
    }

    fn as_data_string(&self) -> String {
        self.inner.as_data_string()
    }
}

impl<N: Name, M: Name> PartialEq<M> for NameValue<N> {
    fn eq(&self, other: &M) -> bool {
        self.is_equal(other)
    }
}

impl<N: Name> Eq for NameValue<N> {}

impl<N: Name> std::hash::Hash for NameValue<N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<N: Name> fmt::Display for NameValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_data_string())
    }
}

impl<N: FromStr<Err = NameError>> FromStr for NameValue<N> {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<N>().map(Self::from)
    }
}

impl<N: Name> serde::Serialize for NameValue<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_data_string())
    }
}

impl<'de, N: FromStr<Err = NameError>> serde::Deserialize<'de> for NameValue<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = <String as serde::Deserialize>::deserialize(deserializer)?;
        data.parse().map_err(serde::de::Error::custom)
    }
}
