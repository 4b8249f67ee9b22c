//! Session orchestration.
//!
//! # Responsibility
//! - Own one marker store and one display for an application session.
//! - Turn user input events into filter passes applied to the display.
//!
//! # Invariants
//! - No ambient state: every session is explicitly constructed.
//! - Filter outputs reach the display only through the session.

pub mod map_session;
