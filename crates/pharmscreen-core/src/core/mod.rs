//! # Core Module
//!
//! Stateless building blocks for descriptor screening.
//!
//! ## Architecture
//!
//! - **Small-Molecule Chemistry** ([`chem`]) - SMILES parsing into a molecular
//!   graph and the descriptor panel computed from it (molecular weight, logP,
//!   hydrogen-bonding counts, rotatable bonds, TPSA, Lipinski evaluation)
//! - **Protein Sequence Analysis** ([`seq`]) - Sequence validation and
//!   ProtParam-style physicochemical properties (molecular weight, aromaticity,
//!   instability index, isoelectric point)
//! - **Data Model** ([`models`]) - Input records and the per-pairing output row
//! - **File I/O** ([`io`]) - Readers for the drug CSV and protein FASTA inputs
//!   and the writer for the screening report

pub mod chem;
pub mod io;
pub mod models;
pub mod seq;
