//! Trait definitions for Crisp operations.
//!
//! Entity types implement the traits they support, encapsulating the
//! endpoint paths and envelope shapes in the implementations.

mod get;

pub use get::Get;
