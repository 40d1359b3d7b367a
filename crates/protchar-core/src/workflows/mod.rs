//! # Workflows Module
//!
//! The top-level entry points of the library. A workflow computes the full
//! descriptor set for its input and renders the fixed-format text report
//! into a caller-supplied sink, returning the computed descriptors so the
//! caller can hand them to a display or serialization layer as well.

pub mod export;
