//! ## Summary
//! Cardinality assertion primitives.
//!
//! Each primitive counts the entries of a collection matching an identifier
//! and either succeeds or reports the expected and observed counts. They are
//! pure and total: an empty collection is a valid input.

use super::Cardinality;
use super::violation::{CardinalityError, Identifier};
use crate::rfc::ical::core::{Component, ComponentKind, Property, PropertyKind};

/// A collection that can count its entries by identifier.
pub trait Cardinal<I> {
    /// Returns how many entries match `id`.
    fn count_of(&self, id: I) -> usize;
}

impl Cardinal<PropertyKind> for [Property] {
    fn count_of(&self, id: PropertyKind) -> usize {
        self.iter().filter(|p| p.kind == id).count()
    }
}

impl Cardinal<ComponentKind> for [Component] {
    fn count_of(&self, id: ComponentKind) -> usize {
        self.iter().filter(|c| c.kind == id).count()
    }
}

impl Cardinal<PropertyKind> for Vec<Property> {
    fn count_of(&self, id: PropertyKind) -> usize {
        self.as_slice().count_of(id)
    }
}

impl Cardinal<ComponentKind> for Vec<Component> {
    fn count_of(&self, id: ComponentKind) -> usize {
        self.as_slice().count_of(id)
    }
}

/// Asserts that the number of `id` entries in `collection` satisfies `expected`.
///
/// ## Errors
/// Returns a [`CardinalityError`] carrying the observed count when it does not.
pub fn assert_cardinality<I, C>(
    id: I,
    expected: Cardinality,
    collection: &C,
) -> Result<(), CardinalityError>
where
    I: Copy + Into<Identifier>,
    C: Cardinal<I> + ?Sized,
{
    let actual = collection.count_of(id);
    if expected.admits(actual) {
        Ok(())
    } else {
        Err(CardinalityError {
            identifier: id.into(),
            expected,
            actual,
        })
    }
}

/// Fails if any `id` entry is present.
///
/// ## Errors
/// Returns a [`CardinalityError`] when the count is greater than zero.
pub fn assert_none<I, C>(id: I, collection: &C) -> Result<(), CardinalityError>
where
    I: Copy + Into<Identifier>,
    C: Cardinal<I> + ?Sized,
{
    assert_cardinality(id, Cardinality::None, collection)
}

/// Fails unless exactly one `id` entry is present.
///
/// ## Errors
/// Returns a [`CardinalityError`] when the count is not one.
pub fn assert_one<I, C>(id: I, collection: &C) -> Result<(), CardinalityError>
where
    I: Copy + Into<Identifier>,
    C: Cardinal<I> + ?Sized,
{
    assert_cardinality(id, Cardinality::ExactlyOne, collection)
}

/// Fails if more than one `id` entry is present.
///
/// ## Errors
/// Returns a [`CardinalityError`] when the count is greater than one.
pub fn assert_one_or_less<I, C>(id: I, collection: &C) -> Result<(), CardinalityError>
where
    I: Copy + Into<Identifier>,
    C: Cardinal<I> + ?Sized,
{
    assert_cardinality(id, Cardinality::AtMostOne, collection)
}

/// Fails if no `id` entry is present.
///
/// ## Errors
/// Returns a [`CardinalityError`] when the count is zero.
pub fn assert_one_or_more<I, C>(id: I, collection: &C) -> Result<(), CardinalityError>
where
    I: Copy + Into<Identifier>,
    C: Cardinal<I> + ?Sized,
{
    assert_cardinality(id, Cardinality::AtLeastOne, collection)
}
