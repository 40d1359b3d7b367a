//! # Engine Module
//!
//! Assembles the pure chemistry of [`crate::core`] into descriptor sets and
//! batch aggregates.
//!
//! - **Descriptors** ([`descriptors`]) - Every per-sequence metric gathered
//!   into one value-like `DescriptorSet`
//! - **Aggregation** ([`aggregate`]) - A generic mean reducer over batches
//!   and the `AggregateDescriptors` it produces
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for
//!   long batch runs, kept out of the computation itself
//!
//! Nothing in this layer caches or persists: every call computes its result
//! fresh from the input sequences.

pub mod aggregate;
pub mod descriptors;
pub mod progress;
