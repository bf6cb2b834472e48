//! Input records and the per-pairing output row of the screen.

pub mod drug;
pub mod pair;
pub mod protein;
