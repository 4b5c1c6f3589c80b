#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod banner;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod content;
pub mod platform;
pub mod runtime;
