//! Infrastructure for the echodev driver: spin-based mutual exclusion and
//! leveled logging with pluggable sinks.
//!
//! This crate is `no_std` outside of tests and performs no allocation, so it
//! can back driver state that lives in `static` items.

#![cfg_attr(not(test), no_std)]

pub mod log;
pub mod sync;
