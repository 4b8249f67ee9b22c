//! In-memory marker registry.
//!
//! # Responsibility
//! - Hold the ordered marker collection for one session.
//! - Keep per-category counts in lockstep with the collection.
//!
//! # Invariants
//! - Records are append-only; insertion order is iteration order.
//! - `counter[c]` equals the number of stored records with category `c`
//!   after every `add`, successful or not.

pub mod counter;
pub mod marker_store;
