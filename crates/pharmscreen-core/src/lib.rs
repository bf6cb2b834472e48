//! # PharmScreen Core Library
//!
//! A library for batch drug-target descriptor screening. Given a set of drugs
//! (SMILES strings) and a set of target proteins (amino-acid sequences), it
//! derives a fixed panel of molecular and physicochemical descriptors, scores
//! every drug-protein pairing, and evaluates Lipinski Rule-of-Five compliance.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: the molecular
//!   graph and SMILES parser (`chem`), protein sequence analysis (`seq`), the
//!   input/output record types (`models`), and file I/O for the CSV/FASTA
//!   formats the screen consumes and produces (`io`).
//!
//! - **[`workflows`]: The Public API.** The user-facing entry point. It ties
//!   the `core` primitives together into the complete screening procedure
//!   (descriptor computation, cross-product pairing, interaction scoring,
//!   rule evaluation) with progress reporting for interactive front-ends.

pub mod core;
pub mod workflows;
