//! Sealpad demonstration library.
//!
//! Renders the harness's structured results and walks each scheme through
//! an end-to-end exchange on the console. The CLI in `main.rs` picks which
//! demonstration to run.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod demos;
