//! Shared foundational types used across the vdiag crates.
//!
//! This crate provides interned identifiers for symbol names resolved by the
//! compiler front end, and the internal error type used to surface
//! programming mistakes as values.

#![warn(missing_docs)]

pub mod ident;
pub mod result;

pub use ident::{Ident, Interner};
pub use result::{InternalError, VdiagResult};
