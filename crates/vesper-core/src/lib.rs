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
//! Browser-independent state machines for the Vesper interaction helpers.
//! This crate holds the widget logic and the class-name contract; the DOM
//! bindings live in `vesper-dom`.

pub mod classes;
pub mod datalist;
pub mod error;
pub mod scroll;
pub mod theme;

pub use datalist::{DatalistConfig, DatalistKey, DatalistOption, DatalistState, KeyOutcome, SelectedOption};
pub use error::ConfigError;
pub use scroll::{CollapsePolicy, NavbarPhase};
pub use theme::{ThemeMode, ThemeState};
