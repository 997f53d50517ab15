//! Capability views over a [`Registry`].
//!
//! One registry serves both transaction modes. What a caller may do is decided
//! by the view it is handed, not by a different locking strategy:
//!
//! - [`Reader`] covers lookup and traversal.
//! - [`ReadWriter`] adds create and delete.
//!
//! [`Registry`] implements both by delegating. [`ReadOnly`] also implements
//! both, but its create and delete always fail with [`Error::NotWritable`]
//! and never touch the table.

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    registry::Registry,
    visit::Visit,
};

/// Lookup and traversal of registered buckets.
pub trait Reader<B> {
    /// Returns the bucket registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no bucket has that name.
    fn get(&self, name: &str) -> Result<Arc<B>>;

    /// Calls `visitor` with every registered bucket. See [`Registry::for_each`].
    ///
    /// # Errors
    ///
    /// Returns whatever error the visitor failed with.
    fn for_each<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &Arc<B>) -> Visit<E>;
}

/// Structural changes to the set of registered buckets.
pub trait ReadWriter<B>: Reader<B> {
    /// Returns the bucket under `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWritable`] if this view is read-only.
    fn create(&self, name: &str) -> Result<Arc<B>>;

    /// Removes the bucket under `name`, returning it if one was registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWritable`] if this view is read-only.
    fn delete(&self, name: &str) -> Result<Option<Arc<B>>>;
}

impl<B> Reader<B> for Registry<B> {
    fn get(&self, name: &str) -> Result<Arc<B>> {
        Registry::get(self, name)
    }

    fn for_each<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &Arc<B>) -> Visit<E>,
    {
        Registry::for_each(self, visitor)
    }
}

impl<B> ReadWriter<B> for Registry<B> {
    fn create(&self, name: &str) -> Result<Arc<B>> {
        Ok(self.create_or_get(name))
    }

    fn delete(&self, name: &str) -> Result<Option<Arc<B>>> {
        Ok(Registry::delete(self, name))
    }
}

/// Read-only view of a [`Registry`], handed to read-only transactions.
///
/// Holds nothing but the borrow, so it cannot outlive the registry.
#[derive(Debug)]
pub struct ReadOnly<'r, B> {
    registry: &'r Registry<B>,
}

impl<'r, B> ReadOnly<'r, B> {
    /// Wraps `registry` in a read-only view.
    pub fn new(registry: &'r Registry<B>) -> Self {
        Self { registry }
    }
}

impl<B> Clone for ReadOnly<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for ReadOnly<'_, B> {}

impl<B> Reader<B> for ReadOnly<'_, B> {
    fn get(&self, name: &str) -> Result<Arc<B>> {
        self.registry.get(name)
    }

    fn for_each<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &Arc<B>) -> Visit<E>,
    {
        self.registry.for_each(visitor)
    }
}

impl<B> ReadWriter<B> for ReadOnly<'_, B> {
    fn create(&self, _name: &str) -> Result<Arc<B>> {
        Err(Error::NotWritable)
    }

    fn delete(&self, _name: &str) -> Result<Option<Arc<B>>> {
        Err(Error::NotWritable)
    }
}
