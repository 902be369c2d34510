//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the fit output bundle (`OlsFit`)
//! - fit quality diagnostics (`FitQuality`)

pub mod types;

pub use types::*;
