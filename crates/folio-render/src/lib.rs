//! # folio-render
//!
//! Render layer for folio. Turns loaded sections into patches against the
//! already-rendered page.
//!
//! Includes:
//! - Slot mapping for hero, about, contact and the two grids ([`hydrate()`])
//! - Escaped card markup ([`cards`])
//! - Patch formatting (JSON, Table, HTML)

pub mod cards;
pub mod formatter;
pub mod hydrate;
pub mod patch;

pub use formatter::{format_patches, OutputFormat};
pub use hydrate::hydrate;
pub use patch::{Patch, Target};
