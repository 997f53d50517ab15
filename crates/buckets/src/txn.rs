//! Transaction-scoped access to a bucket registry.
//!
//! A [`Catalog`] owns the [`Registry`] for one database context. Transactions
//! borrow it and expose it through the capability that matches their mode:
//!
//! - [`ReadTxn::buckets`] returns a [`ReadOnly`] view.
//! - [`WriteTxn::buckets`] returns the registry itself.
//! - [`Txn::buckets`] returns a [`Buckets`] view for code that handles both.
//!
//! Commit and rollback belong to the storage engine; these handles only carry
//! the capability.
//!
//! # Example
//!
//! ```
//! use inferadb_ledger_buckets::{Catalog, Error, ReadWriter, Reader};
//!
//! #[derive(Debug, Default)]
//! struct Bucket;
//!
//! let catalog = Catalog::<Bucket>::new();
//!
//! catalog.update(|txn| txn.buckets().create("users").map(|_| ()))?;
//!
//! catalog.view(|txn| {
//!     assert!(txn.buckets().get("users").is_ok());
//!     assert!(matches!(txn.buckets().create("orders"), Err(Error::NotWritable)));
//!     Ok::<_, Error>(())
//! })?;
//! # Ok::<(), Error>(())
//! ```

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    registry::{DEFAULT_CAPACITY, Registry},
    view::{ReadOnly, ReadWriter, Reader},
    visit::Visit,
};

/// Catalog configuration options.
#[derive(Debug, Clone, bon::Builder)]
pub struct CatalogConfig {
    /// Bucket slots reserved when the registry is created.
    #[builder(default = DEFAULT_CAPACITY)]
    pub initial_capacity: usize,
    /// Refuse write transactions (default false).
    #[builder(default = false)]
    pub read_only: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_CAPACITY, read_only: false }
    }
}

/// Owner of the bucket registry for one database context.
///
/// Thread-safe whenever `B` is: share it behind an [`Arc`] and open
/// transactions from any thread.
#[derive(Debug)]
pub struct Catalog<B> {
    registry: Registry<B>,
    config: CatalogConfig,
}

impl<B: Default> Catalog<B> {
    /// Creates a writable catalog with default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates a catalog with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self::with_constructor(config, B::default)
    }
}

impl<B: Default> Default for Catalog<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Catalog<B> {
    /// Creates a catalog whose registry builds buckets with `new_bucket`.
    pub fn with_constructor(config: CatalogConfig, new_bucket: fn() -> B) -> Self {
        tracing::debug!(
            initial_capacity = config.initial_capacity,
            read_only = config.read_only,
            "Creating bucket catalog"
        );
        let registry = Registry::with_capacity_and_constructor(config.initial_capacity, new_bucket);
        Self { registry, config }
    }

    /// Creates a catalog over an existing registry.
    ///
    /// The registry is already allocated, so `config.initial_capacity` is not
    /// applied. It is replaced with the registry's actual capacity.
    pub fn from_registry(registry: Registry<B>, mut config: CatalogConfig) -> Self {
        config.initial_capacity = registry.capacity();
        tracing::debug!(
            buckets = registry.len(),
            capacity = config.initial_capacity,
            read_only = config.read_only,
            "Creating bucket catalog from registry"
        );
        Self { registry, config }
    }

    /// Returns the catalog configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns true if write transactions are refused.
    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Begins a read-only transaction.
    pub fn read(&self) -> ReadTxn<'_, B> {
        tracing::trace!("Beginning read transaction");
        ReadTxn { registry: &self.registry }
    }

    /// Begins a read-write transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWritable`] if the catalog is configured read-only.
    pub fn write(&self) -> Result<WriteTxn<'_, B>> {
        if self.config.read_only {
            tracing::debug!("Refusing write transaction on read-only catalog");
            return Err(Error::NotWritable);
        }
        tracing::trace!("Beginning write transaction");
        Ok(WriteTxn { registry: &self.registry })
    }

    /// Begins a transaction in the requested mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWritable`] if `writable` is set on a read-only
    /// catalog.
    pub fn begin(&self, writable: bool) -> Result<Txn<'_, B>> {
        if writable { self.write().map(Txn::Write) } else { Ok(Txn::Read(self.read())) }
    }

    /// Runs `f` inside a read-only transaction and returns its result.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    pub fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&ReadTxn<'_, B>) -> Result<T, E>,
    {
        f(&self.read())
    }

    /// Runs `f` inside a read-write transaction and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWritable`] (converted into `E`) if the catalog is
    /// read-only, otherwise whatever `f` returns.
    pub fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<Error>,
        F: FnOnce(&WriteTxn<'_, B>) -> Result<T, E>,
    {
        let txn = self.write()?;
        f(&txn)
    }
}

/// A read-only transaction's access to the registry.
#[derive(Debug)]
pub struct ReadTxn<'c, B> {
    registry: &'c Registry<B>,
}

impl<'c, B> ReadTxn<'c, B> {
    /// Returns the read-only bucket view.
    pub fn buckets(&self) -> ReadOnly<'c, B> {
        ReadOnly::new(self.registry)
    }

    /// Always false.
    pub fn is_writable(&self) -> bool {
        false
    }
}

/// A read-write transaction's access to the registry.
#[derive(Debug)]
pub struct WriteTxn<'c, B> {
    registry: &'c Registry<B>,
}

impl<'c, B> WriteTxn<'c, B> {
    /// Returns the registry with full read-write capability.
    pub fn buckets(&self) -> &'c Registry<B> {
        self.registry
    }

    /// Always true.
    pub fn is_writable(&self) -> bool {
        true
    }
}

/// A transaction in either mode.
#[derive(Debug)]
pub enum Txn<'c, B> {
    /// Read-only transaction.
    Read(ReadTxn<'c, B>),
    /// Read-write transaction.
    Write(WriteTxn<'c, B>),
}

impl<'c, B> Txn<'c, B> {
    /// Returns the bucket view permitted by this transaction's mode.
    pub fn buckets(&self) -> Buckets<'c, B> {
        match self {
            Txn::Read(txn) => Buckets::ReadOnly(txn.buckets()),
            Txn::Write(txn) => Buckets::ReadWrite(txn.buckets()),
        }
    }

    /// Returns true for a read-write transaction.
    pub fn is_writable(&self) -> bool {
        matches!(self, Txn::Write(_))
    }
}

/// Bucket access for a transaction of either mode.
///
/// Dispatches to [`ReadOnly`] or to the [`Registry`] directly, so the mode's
/// policy applies without the caller knowing which one it holds.
#[derive(Debug)]
pub enum Buckets<'c, B> {
    /// Lookup and traversal only.
    ReadOnly(ReadOnly<'c, B>),
    /// Full access.
    ReadWrite(&'c Registry<B>),
}

impl<B> Reader<B> for Buckets<'_, B> {
    fn get(&self, name: &str) -> Result<Arc<B>> {
        match self {
            Buckets::ReadOnly(view) => view.get(name),
            Buckets::ReadWrite(registry) => registry.get(name),
        }
    }

    fn for_each<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &Arc<B>) -> Visit<E>,
    {
        match self {
            Buckets::ReadOnly(view) => view.for_each(visitor),
            Buckets::ReadWrite(registry) => registry.for_each(visitor),
        }
    }
}

impl<B> ReadWriter<B> for Buckets<'_, B> {
    fn create(&self, name: &str) -> Result<Arc<B>> {
        match self {
            Buckets::ReadOnly(view) => view.create(name),
            Buckets::ReadWrite(registry) => Ok(registry.create_or_get(name)),
        }
    }

    fn delete(&self, name: &str) -> Result<Option<Arc<B>>> {
        match self {
            Buckets::ReadOnly(view) => view.delete(name),
            Buckets::ReadWrite(registry) => Ok(registry.delete(name)),
        }
    }
}
