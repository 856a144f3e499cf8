#![forbid(unsafe_code)]

//! Typed queries over the catalog tables.
//!
//! Every read here filters `deleted = 0`; callers never see soft-deleted rows.
//! Bulk soft-delete helpers return the number of rows they flipped.

pub(in crate::store) mod branches;
pub(in crate::store) mod franchises;
pub(in crate::store) mod products;
