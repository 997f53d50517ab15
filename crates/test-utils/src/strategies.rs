//! Proptest strategies for bucket registry tests.
//!
//! # Usage
//!
//! ```no_run
//! use inferadb_ledger_test_utils::strategies;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn my_property(ops in strategies::arb_registry_ops(32)) {
//!         // replay ops against a registry and a model
//!     }
//! }
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

/// Generates a bucket name of 1-16 characters matching `[a-z][a-z0-9_]{0,15}`.
pub fn arb_bucket_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Generates a set of up to `max_count` distinct bucket names.
pub fn arb_bucket_names(max_count: usize) -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set(arb_bucket_name(), 0..=max_count)
}

/// A single registry call, for model-based tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOp {
    /// Look up a bucket.
    Get(String),
    /// Create a bucket, or fetch the existing one.
    Create(String),
    /// Remove a bucket.
    Delete(String),
}

/// Generates a [`RegistryOp`] over a small name pool so operations collide.
pub fn arb_registry_op() -> impl Strategy<Value = RegistryOp> {
    let name = prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(str::to_string);
    prop_oneof![
        name.clone().prop_map(RegistryOp::Get),
        name.clone().prop_map(RegistryOp::Create),
        name.prop_map(RegistryOp::Delete),
    ]
}

/// Generates a sequence of 1 to `max_len` registry operations.
pub fn arb_registry_ops(max_len: usize) -> impl Strategy<Value = Vec<RegistryOp>> {
    proptest::collection::vec(arb_registry_op(), 1..=max_len.max(1))
}
