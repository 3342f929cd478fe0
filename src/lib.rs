//! Shared plumbing for the two showcase binaries.
//!
//! `lexiquest` and `lumina` are independent applications; they share only
//! the terminal runtime, the config-file helpers, and tracing setup.

pub mod config;
pub mod lexiquest;
pub mod lumina;
pub mod term;
pub mod trace;
