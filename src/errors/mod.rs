//! Error types and error handling for the front end.
//!
//! This module defines the error types surfaced by parsing. It includes:
//!
//! - Error structure with source line information
//! - Specific error variants for failed parse expectations
//! - Error formatting and display functionality

pub mod errors;
