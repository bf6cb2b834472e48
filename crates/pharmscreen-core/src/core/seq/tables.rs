//! Static residue data for the 20 standard amino acids.
//!
//! All tables are indexed by [`aa_index`] order: A C D E F G H I K L M N P Q
//! R S T V W Y.

/// Map an amino-acid byte (uppercase) to its table index, `None` for
/// non-standard residues.
pub fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// Average free amino-acid masses in Daltons. Peptide-bond formation
/// releases one water per bond, subtracted in the weight computation.
pub const RESIDUE_WEIGHTS: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.03,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

/// Mass of one water molecule, released per peptide bond.
pub const WATER_MASS: f64 = 18.015;

// EMBOSS pKa values for the ionizable groups.
pub const PKA_NTERM: f64 = 9.69;
pub const PKA_CTERM: f64 = 2.34;
pub const PKA_ASP: f64 = 3.65;
pub const PKA_GLU: f64 = 4.25;
pub const PKA_CYS: f64 = 8.18;
pub const PKA_TYR: f64 = 10.07;
pub const PKA_HIS: f64 = 6.00;
pub const PKA_LYS: f64 = 10.53;
pub const PKA_ARG: f64 = 12.48;

/// Guruprasad (1990) dipeptide instability weight values.
/// `DIPEPTIDE_INSTABILITY[first][second]`, both in `aa_index` order.
/// The instability index is `(10 / L) * Σ` of these over consecutive pairs;
/// values above 40 predict an unstable protein.
#[rustfmt::skip]
pub const DIPEPTIDE_INSTABILITY: [[f64; 20]; 20] = [
    //        A       C       D       E       F       G       H       I       K       L       M       N       P       Q       R       S       T       V       W       Y
    /* A */ [ 1.0,   44.94,  -7.49,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0  ],
    /* C */ [ 1.0,    1.0,   20.26,   1.0,    1.0,    1.0,   33.60,   1.0,    1.0,   20.26,  33.60,   1.0,   20.26,  -6.54,   1.0,    1.0,   33.60,  -6.54,  24.68,   1.0  ],
    /* D */ [ 1.0,    1.0,    1.0,    1.0,   -6.54,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,  20.26, -14.03,   1.0,    1.0,    1.0  ],
    /* E */ [ 1.0,   44.94,  20.26,  33.60,   1.0,    1.0,   -6.54,  20.26,   1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   20.26,   1.0,    1.0,  -14.03,   1.0  ],
    /* F */ [ 1.0,    1.0,   13.34,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   33.60 ],
    /* G */ [-7.49,   1.0,    1.0,   -6.54,   1.0,   13.34,   1.0,   -7.49,  -7.49,   1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   13.34,  -7.49 ],
    /* H */ [ 1.0,    1.0,    1.0,    1.0,   -9.37,  -9.37,   1.0,   44.94,  24.68,   1.0,    1.0,   24.68,  -1.88,   1.0,    1.0,    1.0,   -6.54,   1.0,   -1.88,  44.94 ],
    /* I */ [ 1.0,    1.0,    1.0,   44.94,   1.0,    1.0,   13.34,   1.0,   -7.49,  20.26,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0  ],
    /* K */ [ 1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   -7.49,   1.0,   -7.49,  33.60,   1.0,   -6.54,  24.64,  33.60,   1.0,    1.0,   -7.49,   1.0,    1.0  ],
    /* L */ [ 1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,   20.26,  33.60,  20.26,   1.0,    1.0,    1.0,   24.68,   1.0  ],
    /* M */ [13.34,   1.0,    1.0,    1.0,    1.0,    1.0,   58.28,   1.0,    1.0,    1.0,   -1.88,   1.0,   44.94,  -6.54,  -6.54,  44.94,  -1.88,   1.0,    1.0,   24.68 ],
    /* N */ [ 1.0,   -1.88,   1.0,    1.0,  -14.03, -14.03,   1.0,   44.94,  24.68,   1.0,    1.0,    1.0,   -1.88,  -6.54,   1.0,    1.0,   -7.49,   1.0,   -9.37,   1.0  ],
    /* P */ [20.26,  -6.54,  -6.54,  18.38,  20.26,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,   1.0,   20.26,  20.26,  -6.54,  20.26,   1.0,   20.26,  -1.88,   1.0  ],
    /* Q */ [ 1.0,   -6.54,  20.26,  20.26,  -6.54,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   44.94,   1.0,   -6.54,   1.0,   -6.54 ],
    /* R */ [ 1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,  20.26,   1.0,    1.0,    1.0,    1.0,   13.34,  20.26,  20.26,  58.28,  44.94,   1.0,    1.0,   58.28,  -6.54 ],
    /* S */ [ 1.0,   33.60,   1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   44.94,  20.26,  20.26,  20.26,   1.0,    1.0,    1.0,    1.0  ],
    /* T */ [ 1.0,    1.0,    1.0,   20.26,  13.34,  -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,   -6.54,   1.0,    1.0,    1.0,    1.0,  -14.03,   1.0  ],
    /* V */ [ 1.0,    1.0,  -14.03,   1.0,    1.0,   -7.49,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,   -6.54 ],
    /* W */ [-14.03,  1.0,    1.0,    1.0,    1.0,   -9.37,  24.68,   1.0,    1.0,   13.34,  24.68,  13.34,   1.0,    1.0,    1.0,    1.0,  -14.03,  -7.49,   1.0,    1.0  ],
    /* Y */ [24.68,   1.0,   24.68,  -6.54,   1.0,   -7.49,  13.34,   1.0,    1.0,    1.0,   44.94,   1.0,   13.34,   1.0,  -15.91,   1.0,   -7.49,   1.0,   -9.37,  13.34 ],
];
