//! Trilipi renders English text in three Hindi-related forms by forwarding it
//! to a hosted large-language-model API: a Devanagari transliteration of the
//! English sounds, the Hindi translation in Devanagari, and romanized Hindi.

#![deny(unsafe_code)] // No unsafe anywhere in this crate
#![deny(missing_docs)] // Every public item must be documented
#![deny(non_camel_case_types)]
#![deny(unused_must_use)] // Results and Options must be handled explicitly
#![deny(clippy::unwrap_used)] // No unwrap() outside tests
#![deny(clippy::expect_used)] // No expect() outside tests
#![deny(clippy::panic)] // No panic!() in library code
#![deny(clippy::print_stdout)] // Library code logs through tracing

/// HTTP server and API routes.
pub mod server;
/// Startup helpers for the server binary.
pub mod startup;
/// Prompt construction, model invocation, and reply splitting.
pub mod transform;
