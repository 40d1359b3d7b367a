//! # protchar Core Library
//!
//! Sequence-derived physicochemical characterization of protein sequences:
//! net charge as a function of pH, isoelectric point, residue and dipeptide
//! composition, molecular weight, and Kyte-Doolittle hydrophobicity, for a
//! single sequence or a batch, plus a fixed-format text report artifact.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! chemistry pure, the orchestration testable, and the public surface small.
//!
//! - **[`core`]: The Foundation.** Contains the validated sequence model
//!   (`ProteinSequence`), the static residue property tables, and the pure
//!   metric functions (`charge`, `isoelectric`, `composition`, `metrics`).
//!   Everything in this layer is a deterministic function of its input.
//!
//! - **[`engine`]: The Descriptor Core.** Assembles per-sequence metrics into
//!   a `DescriptorSet`, reduces batches into `AggregateDescriptors` through a
//!   generic mean reducer, and carries the progress-reporting plumbing used
//!   by long batch runs.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to compute descriptors and
//!   render the text report into a caller-supplied sink. Display and storage
//!   of the result stay with the caller.

pub mod core;
pub mod engine;
pub mod workflows;
