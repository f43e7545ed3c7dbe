//! # groot
//!
//! A minimal single-user version-control engine. This crate re-exports
//! [`groot_core`]; the `groot` binary lives in `groot-cli`.

pub use groot_core::*;
