#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Browser bindings for the Vesper interaction helpers.
//!
//! Each helper attaches a `vesper-core` state machine to DOM nodes supplied
//! by the caller, owns its event listeners, and exposes an explicit teardown.
//! Outside the browser the constructors fail with [`error::AttachError`]
//! instead of touching globals.

pub mod datalist;
pub mod error;
pub mod fade;
pub mod navbar;
pub mod theme;
pub mod unsaved;

pub use datalist::Datalist;
pub use error::AttachError;
pub use fade::{FadeOptions, FadeOutcome, HighlightFade, fade_highlight};
pub use navbar::NavbarCollapse;
pub use theme::ThemeController;
pub use unsaved::UnsavedChanges;
pub use vesper_core as core;
