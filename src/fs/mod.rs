//! Filesystem utilities for latch.
//!
//! Lock records must never be observable in a half-written state, so every
//! store write goes through the atomic-write helper in this module.

mod atomic;

pub use atomic::atomic_write;
