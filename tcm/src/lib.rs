//! # TACL Catalogue Manager
//!
//! Builds TACL catalogue files from ordered group files:
//! - Catalogue: de-duplicated work id → group assignment with group precedence
//! - Controller: control file loading and catalogue generation per mapping
//! - Configuration loading for the `tcm` binary

pub mod build_info;
pub mod catalogue;
pub mod config;
pub mod controller;
pub mod error;
pub mod ordered_map;
mod text;

pub use catalogue::{Catalogue, Mapping};
pub use controller::Controller;
pub use error::{Error, Result};
