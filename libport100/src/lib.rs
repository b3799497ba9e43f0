// libport100/src/lib.rs

//! libport100
//!
//! Pure Rust driver for Sony RC-S380 ("NFC Port-100") readers. The crate
//! speaks the chipset's framed command protocol over a raw bulk transport
//! and uses it to sense FeliCa (Type F) cards.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available without reaching into modules.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
