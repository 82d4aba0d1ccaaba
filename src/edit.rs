//! One set of contract checked operations, two ways of applying them.
//!
//! An [`Edit`] decides what an operation acts on: [`InPlace`] mutates the
//! name it borrows, [`CopyOnWrite`] edits a private copy of a
//! [`NameValue`] and hands the copy back as a new value.

use crate::{
    contract,
    error::NameResult,
    name::{Name, NamePrimitives},
    value::NameValue,
};

pub(crate) trait Edit {
    type Target: NamePrimitives;
    type Output;

    fn apply<F>(self, edit: F) -> NameResult<Self::Output>
    where
        F: FnOnce(&mut Self::Target) -> NameResult<()>;
}

pub(crate) struct InPlace<'a, N>(pub &'a mut N);

impl<'a, N: NamePrimitives> Edit for InPlace<'a, N> {
    type Target = N;
    type Output = ();

    fn apply<F>(self, edit: F) -> NameResult<()>
    where
        F: FnOnce(&mut N) -> NameResult<()>,
    {
        edit(self.0)
    }
}

pub(crate) struct CopyOnWrite<'a, N>(pub &'a NameValue<N>);

impl<'a, N: NamePrimitives> Edit for CopyOnWrite<'a, N> {
    type Target = N;
    type Output = NameValue<N>;

    fn apply<F>(self, edit: F) -> NameResult<NameValue<N>>
    where
        F: FnOnce(&mut N) -> NameResult<()>,
    {
        let mut next = self.0.as_inner().clone();
        edit(&mut next)?;
        Ok(NameValue::from(next))
    }
}

pub(crate) fn set_component<E: Edit>(target: E, i: usize, c: &str) -> NameResult<E::Output> {
    target.apply(|name| contract::set_component(name, i, c))
}

pub(crate) fn insert<E: Edit>(target: E, i: usize, c: &str) -> NameResult<E::Output> {
    target.apply(|name| contract::insert(name, i, c))
}

pub(crate) fn append<E: Edit>(target: E, c: &str) -> NameResult<E::Output> {
    target.apply(|name| contract::append(name, c))
}

pub(crate) fn remove<E: Edit>(target: E, i: usize) -> NameResult<E::Output> {
    target.apply(|name| contract::remove(name, i))
}

pub(crate) fn concat<E: Edit>(target: E, other: &dyn Name) -> NameResult<E::Output> {
    target.apply(|name| contract::concat(name, other))
}

/// In place editing for the mutable representations.
///
/// Components passed in must already be masked for the name's delimiter;
/// only constructors mask raw input. These methods are the only way to
/// change a name in place:
///
/// ```compile_fail
/// use nomen::ArrayName;
///
/// let mut name = ArrayName::new(["a"], '.').unwrap();
/// name.do_append("bad.part");
/// ```
///
/// ```compile_fail
/// fn sneak<T: nomen::MutableName>(name: &mut T) {
///     name.do_remove(5);
/// }
/// ```
pub trait MutableName {
    fn set_component(&mut self, i: usize, c: &str) -> NameResult<()>;

    /// Inserts before index `i`; `i == no_components()` appends.
    fn insert(&mut self, i: usize, c: &str) -> NameResult<()>;

    fn append(&mut self, c: &str) -> NameResult<()>;

    fn remove(&mut self, i: usize) -> NameResult<()>;

    fn concat(&mut self, other: &dyn Name) -> NameResult<()>;
}

impl<N: NamePrimitives> MutableName for N {
    fn set_component(&mut self, i: usize, c: &str) -> NameResult<()> {
        crate::edit::set_component(InPlace(self), i, c)
    }

    fn insert(&mut self, i: usize, c: &str) -> NameResult<()> {
        crate::edit::insert(InPlace(self), i, c)
    }

    fn append(&mut self, c: &str) -> NameResult<()> {
        crate::edit::append(InPlace(self), c)
    }

    fn remove(&mut self, i: usize) -> NameResult<()> {
        crate::edit::remove(InPlace(self), i)
    }

    fn concat(&mut self, other: &dyn Name) -> NameResult<()> {
        crate::edit::concat(InPlace(self), other)
    }
}
