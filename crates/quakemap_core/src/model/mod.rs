//! Domain model for plotted map markers.
//!
//! # Responsibility
//! - Define the marker record, its category and its geographic position.
//!
//! # Invariants
//! - A marker's identity is its insertion position in the store.
//! - Positions are immutable once a record exists.

pub mod marker;
