//! inferadb-ledger-buckets: the named bucket registry of an embedded
//! transactional key-value store.
//!
//! A database context keeps its sub-stores ("buckets") in a [`Registry`]: a
//! name-to-bucket table behind one reader/writer lock. Transactions reach the
//! registry through a capability view chosen by their mode.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Transaction Access              │
//! │   (Catalog, ReadTxn, WriteTxn, Txn)         │
//! └────────────────┬────────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────────┐
//! │              Capability Views                │
//! │  (Reader, ReadWriter, ReadOnly, Buckets)    │
//! └────────────────┬────────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────────┐
//! │                 Registry                     │
//! │  (get, create_or_get, delete, for_each)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Bucket contents, persistence, and commit/rollback live in the surrounding
//! storage engine. The registry treats buckets as opaque values.
//!
//! ## Quick Start
//!
//! ```
//! use inferadb_ledger_buckets::{Registry, Visit};
//!
//! #[derive(Debug, Default)]
//! struct Bucket;
//!
//! let registry = Registry::<Bucket>::new();
//! registry.create_or_get("users");
//! registry.create_or_get("orders");
//!
//! let mut first = None;
//! registry.for_each(|name, _| {
//!     first = Some(name.to_string());
//!     Visit::<()>::Stop
//! })
//! .unwrap();
//! assert!(first.is_some());
//!
//! assert!(registry.get("invoices").unwrap_err().is_not_found());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod registry;
pub mod txn;
pub mod view;
pub mod visit;

pub use error::{Error, Result};
pub use registry::{DEFAULT_CAPACITY, Registry};
pub use txn::{Buckets, Catalog, CatalogConfig, ReadTxn, Txn, WriteTxn};
pub use view::{ReadOnly, ReadWriter, Reader};
pub use visit::Visit;
