//! The generic storage engine: a typed, file-backed JSON document.
//!
//! Domain modules implement [`DocumentEntity`] for their record type and get
//! whole-document reads, writes and keyed insert/get/modify/remove for free.

pub mod core;

pub use self::core::*;
