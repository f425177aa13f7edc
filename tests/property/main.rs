//! Property-based tests for container forwarding and lazy reset behavior.
//!
//! Run with: `cargo test --test property`

mod container_forward;
mod lazy_reset;
