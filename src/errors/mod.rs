//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics collected while scanning and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic problems
//! - Short tips shown next to formatted errors

pub mod errors;
