//! `ardvim_core` turns the Arduino IDE keyword table (`keywords.txt`) into
//! the `syn keyword` rules of a vim syntax file.
//!
//! ## Processing Pipeline
//!
//! ```text
//! keywords.txt
//!   → Reader (tab separated lines into KeywordRecords, tracking heading and paragraph)
//!   → Sections (records grouped by paragraph and category)
//!   → Resolver (each section mapped to one syntax group through the disambiguation table)
//!   → Renderer (groups rendered as wrapped `syn keyword` lines)
//!   → Template (`$rules`, `$date` and `$arduino_version` substituted into template.vim)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Optional `ardvim.toml` with path overrides and extra mappings.
//! - [`mappings`] — The built-in disambiguation table and C++ reserved words.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ardvim_core::GenerateOptions;
//! use ardvim_core::generate;
//! use std::path::Path;
//!
//! let options = GenerateOptions::load(Path::new("/opt/arduino")).unwrap();
//! let result = generate(&options).unwrap();
//!
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! print!("{}", result.output);
//! ```

pub use config::*;
pub use error::*;
pub use mappings::*;
pub use project::*;
pub use reader::*;
pub use render::*;
pub use resolver::*;
pub use section::*;
pub use template::*;
pub use version::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod mappings;
mod project;
mod reader;
mod render;
mod resolver;
mod section;
mod template;
mod version;

#[cfg(test)]
mod __fixtures;
