//! Protein sequence analysis: validation and ProtParam-style properties.
//!
//! Sequences are validated against the 20 standard amino-acid letters
//! (case-insensitive) before any property is computed; the screening workflow
//! skips proteins that fail validation. Static residue tables live in
//! [`tables`], the property functions in [`properties`].

pub mod properties;
pub mod tables;
