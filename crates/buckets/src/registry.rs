//! The locked name-to-bucket table.
//!
//! A [`Registry`] owns every bucket of a database context. All access goes
//! through a single [`RwLock`]:
//!
//! | Operation                      | Lock mode |
//! |--------------------------------|-----------|
//! | [`get`](Registry::get)         | shared    |
//! | [`for_each`](Registry::for_each) | shared, held for the whole traversal |
//! | [`create_or_get`](Registry::create_or_get) | exclusive |
//! | [`delete`](Registry::delete)   | exclusive |
//!
//! Guards are scoped to each call, so the lock is released on every exit
//! path, early returns and visitor failures included.
//!
//! Shared acquisitions are recursive: a reader never queues behind a waiting
//! writer. A visitor may therefore look buckets up while its traversal holds
//! the lock, even if another thread is already waiting to create or delete.

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{
    error::{Error, Result},
    visit::Visit,
};

/// Default number of table slots reserved up front.
pub const DEFAULT_CAPACITY: usize = 16;

/// Name-to-bucket table guarded by a reader/writer lock.
///
/// The table is the sole owner of registration: a bucket is reachable by name
/// if and only if it is present here. Buckets are handed out as [`Arc`]s, so a
/// caller that keeps a handle past [`delete`](Self::delete) still holds a valid
/// value, but one the registry no longer knows about.
///
/// `B` is opaque to the registry. New buckets come from the constructor given
/// at creation time ([`B::default`](Default::default) for [`Registry::new`]).
pub struct Registry<B> {
    buckets: RwLock<HashMap<String, Arc<B>>>,
    new_bucket: fn() -> B,
}

impl<B: Default> Registry<B> {
    /// Creates an empty registry that builds buckets with `B::default`.
    pub fn new() -> Self {
        Self::with_constructor(B::default)
    }

    /// Creates an empty registry with room for `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_constructor(capacity, B::default)
    }
}

impl<B: Default> Default for Registry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Registry<B> {
    /// Creates an empty registry that builds buckets with `new_bucket`.
    pub fn with_constructor(new_bucket: fn() -> B) -> Self {
        Self::with_capacity_and_constructor(DEFAULT_CAPACITY, new_bucket)
    }

    /// Creates an empty registry with room for `capacity` buckets that builds
    /// buckets with `new_bucket`.
    pub fn with_capacity_and_constructor(capacity: usize, new_bucket: fn() -> B) -> Self {
        Self { buckets: RwLock::new(HashMap::with_capacity(capacity)), new_bucket }
    }

    /// Returns the number of buckets the table can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buckets.read_recursive().capacity()
    }

    /// Returns the bucket registered under `name`.
    ///
    /// Takes the shared lock only, so any number of lookups and traversals can
    /// run together. Waits behind an in-progress create or delete, but not
    /// behind one that is merely queued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no bucket has that name.
    pub fn get(&self, name: &str) -> Result<Arc<B>> {
        self.buckets
            .read_recursive()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound { name: name.to_owned() })
    }

    /// Returns the bucket under `name`, creating an empty one if needed.
    ///
    /// The lookup and the insert happen under one exclusive guard, so racing
    /// callers with the same name all receive the same instance.
    pub fn create_or_get(&self, name: &str) -> Arc<B> {
        let mut buckets = self.buckets.write();
        if let Some(bucket) = buckets.get(name) {
            return Arc::clone(bucket);
        }

        let bucket = Arc::new((self.new_bucket)());
        buckets.insert(name.to_owned(), Arc::clone(&bucket));
        bucket
    }

    /// Removes the bucket under `name`, returning it if one was registered.
    ///
    /// Deleting an unknown name is a no-op. The returned handle is detached:
    /// later lookups of `name` miss, and a subsequent create builds a fresh
    /// bucket.
    pub fn delete(&self, name: &str) -> Option<Arc<B>> {
        self.buckets.write().remove(name)
    }

    /// Calls `visitor` with every registered bucket.
    ///
    /// The shared lock is held for the entire traversal, so no bucket can be
    /// created or deleted while it runs. Order is unspecified and may differ
    /// between calls.
    ///
    /// The visitor decides how to proceed with [`Visit`]:
    /// - [`Visit::Continue`] moves to the next bucket.
    /// - [`Visit::Stop`] ends the traversal and `for_each` returns `Ok(())`.
    /// - [`Visit::Fail`] ends the traversal and its error is returned as is.
    ///
    /// The visitor may call the read operations of this registry. It must not
    /// call [`create_or_get`](Self::create_or_get) or [`delete`](Self::delete):
    /// it runs under the read lock, and a write from inside it deadlocks.
    ///
    /// Writers queued on other threads wait until the traversal returns.
    ///
    /// # Errors
    ///
    /// Returns whatever error the visitor failed with.
    pub fn for_each<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &Arc<B>) -> Visit<E>,
    {
        let buckets = self.buckets.read_recursive();
        for (name, bucket) in buckets.iter() {
            match visitor(name, bucket) {
                Visit::Continue => {},
                Visit::Stop => return Ok(()),
                Visit::Fail(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Returns true if a bucket is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.buckets.read_recursive().contains_key(name)
    }

    /// Returns the number of registered buckets.
    pub fn len(&self) -> usize {
        self.buckets.read_recursive().len()
    }

    /// Returns true if no buckets are registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.read_recursive().is_empty()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.read_recursive().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<B> fmt::Debug for Registry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("buckets", &self.names()).finish()
    }
}
