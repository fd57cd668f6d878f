//! Core trait abstractions for the report pipeline.
//!
//! These traits define the interfaces that applications implement
//! to provide extraction, progress reporting, session storage, and
//! spreadsheet serialization.

pub mod extractor;
pub mod store;
pub mod writer;
