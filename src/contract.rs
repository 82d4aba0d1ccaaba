//! Preconditions, postconditions and the masking invariant.
//!
//! Every edit of a name goes through one of the mutators in this module:
//! preconditions are checked first, then the representation primitive runs,
//! then the mutator specific postconditions and finally the invariant.
//! Precondition failures are caller errors; postcondition and invariant
//! failures are reported as [`NameError::InternalConsistency`] and
//! [`NameError::InvariantViolation`] and never swallowed.

use log::{debug, error, trace};

use crate::{
    codec,
    error::{NameError, NameResult},
    name::{out_of_range, Name, NamePrimitives},
};

pub fn assert_valid_index<N: Name + ?Sized>(name: &N, i: usize) -> NameResult<()> {
    let len = name.no_components();
    if i >= len {
        debug!("rejected index {} for name with {} components", i, len);
        return Err(out_of_range(i, len));
    }
    Ok(())
}

/// Like [`assert_valid_index`], but one past the last component is allowed.
pub fn assert_valid_insert_index<N: Name + ?Sized>(name: &N, i: usize) -> NameResult<()> {
    let len = name.no_components();
    if i > len {
        debug!("rejected insert index {} for name with {} components", i, len);
        return Err(NameError::InvalidInsertIndex { index: i, len });
    }
    Ok(())
}

/// Components handed to mutators must already be masked for the name's
/// delimiter.
pub fn assert_valid_component<N: Name + ?Sized>(name: &N, c: &str) -> NameResult<()> {
    if !codec::is_masked(c, name.delimiter()) {
        debug!(
            "rejected component {:?}: not masked for delimiter {:?}",
            c,
            name.delimiter()
        );
        return Err(NameError::InvalidComponent(format!(
            "{:?} contains a raw delimiter or escape character",
            c
        )));
    }
    Ok(())
}

pub fn assert_invariant<N: NamePrimitives>(name: &N) -> NameResult<()> {
    let delimiter = name.delimiter();
    let masked = name.masked_components();

    if masked.len() != name.no_components() {
        return Err(violation(format!(
            "{} components stored but {} reported",
            masked.len(),
            name.no_components()
        )));
    }
    if let Some((i, c)) = masked
        .iter()
        .enumerate()
        .find(|(_, c)| !codec::is_masked(c, delimiter))
    {
        return Err(violation(format!(
            "component {} ({:?}) is not properly masked",
            i, c
        )));
    }

    name.check_representation().map_err(violation)
}

pub fn set_component<N: NamePrimitives>(name: &mut N, i: usize, c: &str) -> NameResult<()> {
    assert_valid_index(&*name, i)?;
    assert_valid_component(&*name, c)?;

    let old_count = name.no_components();

    name.do_set_component(i, c);

    if name.no_components() != old_count {
        return Err(broken("set_component must not change the number of components"));
    }
    if stored(&*name, i)? != c {
        return Err(broken("set_component must store the component at its index"));
    }

    assert_invariant(&*name)?;
    trace!("set component {} to {:?}", i, c);
    Ok(())
}

pub fn insert<N: NamePrimitives>(name: &mut N, i: usize, c: &str) -> NameResult<()> {
    assert_valid_insert_index(&*name, i)?;
    assert_valid_component(&*name, c)?;

    let old_count = name.no_components();

    name.do_insert(i, c);

    if name.no_components() != old_count + 1 {
        return Err(broken("insert must increase the number of components by 1"));
    }
    if stored(&*name, i)? != c {
        return Err(broken("insert must place the component at its index"));
    }

    assert_invariant(&*name)?;
    trace!("inserted {:?} at {}, now {} components", c, i, old_count + 1);
    Ok(())
}

pub fn append<N: NamePrimitives>(name: &mut N, c: &str) -> NameResult<()> {
    assert_valid_component(&*name, c)?;

    let old_count = name.no_components();

    name.do_append(c);

    if name.no_components() != old_count + 1 {
        return Err(broken("append must increase the number of components by 1"));
    }
    if stored(&*name, old_count)? != c {
        return Err(broken("append must place the component at the end"));
    }

    assert_invariant(&*name)?;
    trace!("appended {:?}, now {} components", c, old_count + 1);
    Ok(())
}

pub fn remove<N: NamePrimitives>(name: &mut N, i: usize) -> NameResult<()> {
    assert_valid_index(&*name, i)?;

    let old_count = name.no_components();
    let mut expected = name.masked_components();
    expected.remove(i);

    name.do_remove(i);

    if name.no_components() != old_count - 1 {
        return Err(broken("remove must decrease the number of components by 1"));
    }
    if name.masked_components() != expected {
        return Err(broken("remove must preserve the order of the other components"));
    }

    assert_invariant(&*name)?;
    trace!("removed component {}, now {} components", i, old_count - 1);
    Ok(())
}

/// Appends every component of `other`, re-masked for the receiver's
/// delimiter. Nothing is appended unless all of them are acceptable.
pub fn concat<N: NamePrimitives>(name: &mut N, other: &dyn Name) -> NameResult<()> {
    let delimiter = name.delimiter();
    let incoming: Vec<String> = other
        .components()
        .iter()
        .map(|c| codec::mask(c, delimiter))
        .collect();
    for c in &incoming {
        assert_valid_component(&*name, c)?;
    }

    let old_count = name.no_components();
    let added = other.no_components();

    for c in &incoming {
        name.do_append(c);
    }

    if name.no_components() != old_count + added {
        return Err(broken(
            "concat must increase the number of components by the other's count",
        ));
    }
    if name.masked_components()[old_count..] != incoming[..] {
        return Err(broken("concat must append the other's components in order"));
    }

    assert_invariant(&*name)?;
    trace!("concatenated {} components, now {}", added, old_count + added);
    Ok(())
}

fn stored<N: NamePrimitives>(name: &N, i: usize) -> NameResult<String> {
    name.masked_component(i)
        .map_err(|e| broken(format!("component {} unreadable after edit: {}", i, e)))
}

fn violation(message: impl Into<String>) -> NameError {
    let message = message.into();
    error!("name invariant violated: {}", message);
    NameError::InvariantViolation(message)
}

fn broken(message: impl Into<String>) -> NameError {
    let message = message.into();
    error!("postcondition failed: {}", message);
    NameError::InternalConsistency(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayName;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Bug {
        None,
        InsertIgnored,
        RemoveReorders,
        SetWrongIndex,
        AppendIgnored,
        AppendWrongPlace,
    }

    /// Representation with switchable bugs in its primitives.
    #[derive(Debug, Clone)]
    struct Faulty {
        components: Vec<String>,
        bug: Bug,
    }

    impl Faulty {
        fn new(components: &[&str], bug: Bug) -> Self {
            Self {
                components: components.iter().map(|c| c.to_string()).collect(),
                bug,
            }
        }
    }

    impl Name for Faulty {
        fn delimiter(&self) -> char {
            '.'
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

    impl NamePrimitives for Faulty {
        fn do_set_component(&mut self, i: usize, c: &str) {
            let i = if self.bug == Bug::SetWrongIndex { 0 } else { i };
            self.components[i] = c.to_string();
        }

        fn do_insert(&mut self, i: usize, c: &str) {
            if self.bug != Bug::InsertIgnored {
                self.components.insert(i, c.to_string());
            }
        }

        fn do_append(&mut self, c: &str) {
            match self.bug {
                Bug::AppendIgnored => {}
                Bug::AppendWrongPlace => self.components.insert(0, c.to_string()),
                _ => self.components.push(c.to_string()),
            }
        }

        fn do_remove(&mut self, i: usize) {
            self.components.remove(i);
            if self.bug == Bug::RemoveReorders {
                self.components.reverse();
            }
        }
    }

    #[test]
    fn index_preconditions() {
        let mut n = ArrayName::new(["a"], '.').unwrap();
        assert_eq!(
            set_component(&mut n, 1, "x"),
            Err(NameError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            insert(&mut n, 2, "x"),
            Err(NameError::InvalidInsertIndex { index: 2, len: 1 })
        );
        assert_eq!(
            remove(&mut n, 1),
            Err(NameError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(insert(&mut n, 1, "x").is_ok());
    }

    #[test]
    fn component_precondition() {
        let mut n = ArrayName::new(["a"], '.').unwrap();
        for bad in ["bad.part", "\\", "a\\b", "trailing\\"] {
            assert!(matches!(
                append(&mut n, bad),
                Err(NameError::InvalidComponent(_))
            ));
        }
        assert_eq!(n.no_components(), 1);
        assert!(append(&mut n, "b\\.c").is_ok());
        assert_eq!(n.component(1).unwrap(), "b.c");
    }

    #[test]
    fn invariant_catches_raw_components() {
        let n = Faulty::new(&["ok", "bad.part"], Bug::None);
        assert!(matches!(
            assert_invariant(&n),
            Err(NameError::InvariantViolation(_))
        ));

        let mut n = Faulty::new(&["ok", "bad.part"], Bug::None);
        assert!(matches!(
            set_component(&mut n, 0, "fine"),
            Err(NameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn postconditions_report_broken_primitives() {
        let mut n = Faulty::new(&["a", "b"], Bug::InsertIgnored);
        assert!(matches!(
            insert(&mut n, 1, "x"),
            Err(NameError::InternalConsistency(_))
        ));

        let mut n = Faulty::new(&["a", "b", "c", "d"], Bug::RemoveReorders);
        assert!(matches!(
            remove(&mut n, 1),
            Err(NameError::InternalConsistency(_))
        ));

        let mut n = Faulty::new(&["a", "b"], Bug::SetWrongIndex);
        assert!(matches!(
            set_component(&mut n, 1, "x"),
            Err(NameError::InternalConsistency(_))
        ));
    }

    #[test]
    fn append_postconditions_report_broken_primitives() {
        let mut n = Faulty::new(&["a", "b"], Bug::AppendIgnored);
        assert!(matches!(
            append(&mut n, "x"),
            Err(NameError::InternalConsistency(_))
        ));

        let mut n = Faulty::new(&["a", "b"], Bug::AppendWrongPlace);
        assert!(matches!(
            append(&mut n, "x"),
            Err(NameError::InternalConsistency(_))
        ));
    }

    #[test]
    fn concat_postconditions_report_broken_primitives() {
        let other = ArrayName::new(["x", "y"], '.').unwrap();

        let mut n = Faulty::new(&["a"], Bug::AppendIgnored);
        assert!(matches!(
            concat(&mut n, &other),
            Err(NameError::InternalConsistency(_))
        ));

        let mut n = Faulty::new(&["a"], Bug::AppendWrongPlace);
        assert!(matches!(
            concat(&mut n, &other),
            Err(NameError::InternalConsistency(_))
        ));
    }

    #[test]
    fn concat_remasks_for_own_delimiter() {
        let mut slashed = ArrayName::new(["a"], '/').unwrap();
        let dotted = ArrayName::new(["x/y", "z.w"], '.').unwrap();
        concat(&mut slashed, &dotted).unwrap();
        assert_eq!(slashed.components(), vec!["a", "x/y", "z.w"]);
        assert_eq!(slashed.masked_component(1).unwrap(), "x\\/y");
        assert_eq!(slashed.masked_component(2).unwrap(), "z.w");
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut n = ArrayName::new(["a", "b", "c", "d"], '.').unwrap();
        remove(&mut n, 2).unwrap();
        assert_eq!(n.components(), vec!["a", "b", "d"]);
    }
}
