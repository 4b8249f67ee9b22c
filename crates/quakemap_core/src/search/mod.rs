//! Marker filter and free-text search.
//!
//! # Responsibility
//! - Compute show/hide instructions for every stored marker.
//! - Compute the category-independent search result list.
//!
//! # Invariants
//! - Pure over the store: no display calls, no mutation.
//! - Outputs preserve store insertion order.

pub mod filter;
