//! Shared test utilities for the bucket registry crates.
//!
//! - [`TestBucket`] - Opaque bucket with an observable identity
//! - [`assert_eventually`] - Poll a condition until it's true or timeout
//! - [`strategies`] - Proptest generators for names and registry operations

#![deny(unsafe_code)]

mod bucket;
pub use bucket::TestBucket;

mod assertions;
pub use assertions::assert_eventually;

pub mod strategies;
