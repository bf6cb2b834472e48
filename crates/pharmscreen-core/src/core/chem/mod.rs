//! Small-molecule chemistry: SMILES parsing and molecular descriptors.
//!
//! The entry point is [`smiles::parse_smiles`], which builds a heavy-atom
//! [`molecule::Molecule`] graph with implicit hydrogens filled in from
//! standard valences. The [`descriptors`] module computes the screening
//! descriptor panel from that graph, and [`lipinski`] evaluates the
//! Rule-of-Five thresholds over a computed panel.

pub mod descriptors;
pub mod element;
pub mod lipinski;
pub mod molecule;
pub mod smiles;
