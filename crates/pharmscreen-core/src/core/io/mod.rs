//! File I/O for the formats the screen consumes and produces.
//!
//! - [`drugs`] reads the two-column drug CSV (`Name`, `SMILES`)
//! - [`fasta`] reads the protein FASTA input
//! - [`report`] reads and writes the 16-column screening report CSV

pub mod drugs;
pub mod fasta;
pub mod report;
