//! Tests for species resolution with user-defined containers.
//!
//! `LabeledSet` keeps its own type (and label) in every result.
//! `PlainResultSet` redirects results to a plain `HashSet`.

use rstest::rstest;
use set_algebra::capability::{SetLike, is_set};
use set_algebra::prelude::SetAlgebra;
use set_algebra::species::get_species_constructor;
use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::Hash;

// =============================================================================
// LabeledSet: results keep the receiver's type
// =============================================================================

#[derive(Debug, Clone)]
struct LabeledSet<T> {
    label: &'static str,
    inner: HashSet<T>,
}

impl<T: Hash + Eq> LabeledSet<T> {
    fn new(label: &'static str, elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            label,
            inner: elements.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> SetLike for LabeledSet<T> {
    type Element = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;
    type Species<U>
        = LabeledSet<U>
    where
        U: Hash + Eq;

    fn has(&self, element: &T) -> bool {
        self.inner.contains(element)
    }

    fn add(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    fn delete(&mut self, element: &T) -> bool {
        self.inner.remove(element)
    }

    fn size(&self) -> usize {
        self.inner.len()
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    fn species<U>(&self) -> LabeledSet<U>
    where
        U: Hash + Eq,
    {
        LabeledSet {
            label: self.label,
            inner: HashSet::new(),
        }
    }
}

// =============================================================================
// PlainResultSet: results are downcast to HashSet
// =============================================================================

#[derive(Debug)]
struct PlainResultSet<T>(HashSet<T>);

impl<T: Hash + Eq> SetLike for PlainResultSet<T> {
    type Element = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;
    type Species<U>
        = HashSet<U>
    where
        U: Hash + Eq;

    fn has(&self, element: &T) -> bool {
        self.0.contains(element)
    }

    fn add(&mut self, element: T) -> bool {
        self.0.insert(element)
    }

    fn delete(&mut self, element: &T) -> bool {
        self.0.remove(element)
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn species<U>(&self) -> HashSet<U>
    where
        U: Hash + Eq,
    {
        HashSet::new()
    }
}

// =============================================================================
// Species Preservation
// =============================================================================

#[rstest]
fn test_combining_results_keep_wrapper_type() {
    let set = LabeledSet::new("primes", [2, 3, 5]);

    let union: LabeledSet<i32> = set.unite([vec![7]]).unwrap();
    let intersection: LabeledSet<i32> = set.intersect([vec![3, 4]]).unwrap();
    let xor: LabeledSet<i32> = set.xor([vec![5, 6]]).unwrap();
    let difference: LabeledSet<i32> = set.subtract([vec![2]]);

    for result in [&union, &intersection, &xor, &difference] {
        assert_eq!(result.label, "primes");
    }
    assert_eq!(union.inner, HashSet::from([2, 3, 5, 7]));
    assert_eq!(intersection.inner, HashSet::from([3]));
    assert_eq!(xor.inner, HashSet::from([2, 3, 6]));
    assert_eq!(difference.inner, HashSet::from([3, 5]));
}

#[rstest]
fn test_transform_results_keep_wrapper_type() {
    let set = LabeledSet::new("digits", [1, 2, 3]);

    let names: LabeledSet<String> = set.map(|digit, _, _| format!("#{digit}"));
    let odd: LabeledSet<i32> = set.filter(|digit, _, _| digit % 2 == 1);

    assert_eq!(names.label, "digits");
    assert!(names.has(&"#2".to_string()));
    assert_eq!(odd.label, "digits");
    assert_eq!(odd.inner, HashSet::from([1, 3]));
}

#[rstest]
fn test_mutators_keep_receiver_itself() {
    let mut set = LabeledSet::new("mutable", [1]);
    set.add_elements([2, 3]).remove_elements([1]);
    assert_eq!(set.label, "mutable");
    assert_eq!(set.inner, HashSet::from([2, 3]));
}

#[rstest]
fn test_wrapper_is_set_like_at_runtime() {
    let set = LabeledSet::new("probe", ["a"]);
    assert!(is_set(Some(&set)));
}

// =============================================================================
// Species Redirection
// =============================================================================

#[rstest]
fn test_results_redirect_to_base_container() {
    let set = PlainResultSet(HashSet::from([1, 2, 3]));

    let union: HashSet<i32> = set.unite([vec![4]]).unwrap();
    let filtered: HashSet<i32> = set.filter(|value, _, _| *value > 1);
    let mapped: HashSet<bool> = set.map(|value, _, _| *value > 1);

    assert_eq!(union, HashSet::from([1, 2, 3, 4]));
    assert_eq!(filtered, HashSet::from([2, 3]));
    assert_eq!(mapped, HashSet::from([true, false]));
}

#[rstest]
fn test_species_constructor_uses_redirected_type() {
    let set = PlainResultSet(HashSet::from([1, 2]));
    let constructor = get_species_constructor(&set);

    let copy: HashSet<i32> = constructor.copy();
    let snapshot: HashSet<i32> = constructor.snapshot([5, 5, 6]);

    assert_eq!(copy, HashSet::from([1, 2]));
    assert_eq!(snapshot, HashSet::from([5, 6]));
}
