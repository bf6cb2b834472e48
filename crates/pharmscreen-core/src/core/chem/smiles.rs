//! SMILES parsing into the heavy-atom [`Molecule`] graph.
//!
//! Supports the organic subset, aromatic lowercase forms, bracket atoms
//! (isotope, chirality, hydrogen count, charge, and atom maps), branches,
//! single- and two-digit ring closures, explicit bond symbols, and
//! dot-separated components. Stereo markers are accepted and flattened to
//! single bonds; descriptor computation is connectivity-based.

use super::element::Element;
use super::molecule::{Atom, BondOrder, Molecule};
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmilesError {
    #[error("empty SMILES string")]
    Empty,
    #[error("unrecognized character '{0}'")]
    UnexpectedChar(char),
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("element '{0}' cannot be written as aromatic")]
    NotAromatic(&'static str),
    #[error("unmatched ')'")]
    UnmatchedBranchClose,
    #[error("unclosed '(' at end of input")]
    UnclosedBranch,
    #[error("bond or ring-closure digit with no preceding atom")]
    DanglingBond,
    #[error("ring-closure index {0} opened but never closed")]
    UnclosedRing(u32),
    #[error("ring-closure index {0} closed on its opening atom")]
    SelfRing(u32),
    #[error("unterminated bracket atom")]
    UnterminatedBracket,
    #[error("expected digit after '%'")]
    MissingRingDigit,
}

/// Parse a SMILES string into a finalized molecular graph.
///
/// Any syntactic or chemical-alphabet violation is an error; callers that
/// tolerate invalid input (the screening workflow does) map the error to a
/// missing descriptor set rather than propagating it.
pub fn parse_smiles(input: &str) -> Result<Molecule, SmilesError> {
    let mut parser = Parser::new(input.trim());
    parser.run()?;
    if parser.mol.atom_count() == 0 {
        return Err(SmilesError::Empty);
    }
    let mut mol = parser.mol;
    mol.finalize();
    Ok(mol)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    mol: Molecule,
    current: Option<usize>,
    pending_bond: Option<BondOrder>,
    branch_stack: Vec<Option<usize>>,
    // ring index -> (opening atom, explicit bond at open)
    ring_map: HashMap<u32, (usize, Option<BondOrder>)>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            mol: Molecule::new(),
            current: None,
            pending_bond: None,
            branch_stack: Vec::new(),
            ring_map: HashMap::new(),
        }
    }

    fn run(&mut self) -> Result<(), SmilesError> {
        while let Some(&ch) = self.chars.peek() {
            match ch {
                '-' => self.take_bond(BondOrder::Single),
                '=' => self.take_bond(BondOrder::Double),
                '#' => self.take_bond(BondOrder::Triple),
                ':' => self.take_bond(BondOrder::Aromatic),
                // Stereo bonds carry no connectivity information beyond single.
                '/' | '\\' => self.take_bond(BondOrder::Single),
                '(' => {
                    self.chars.next();
                    self.branch_stack.push(self.current);
                }
                ')' => {
                    self.chars.next();
                    self.current = self
                        .branch_stack
                        .pop()
                        .ok_or(SmilesError::UnmatchedBranchClose)?;
                    self.pending_bond = None;
                }
                '.' => {
                    self.chars.next();
                    self.current = None;
                    self.pending_bond = None;
                }
                '%' => {
                    self.chars.next();
                    let d1 = self.take_digit()?;
                    let d2 = self.take_digit()?;
                    self.close_or_open_ring(d1 * 10 + d2)?;
                }
                '0'..='9' => {
                    self.chars.next();
                    self.close_or_open_ring(ch as u32 - '0' as u32)?;
                }
                '[' => {
                    let atom = self.parse_bracket_atom()?;
                    self.attach(atom);
                }
                _ => {
                    let atom = self.parse_organic_atom()?;
                    self.attach(atom);
                }
            }
        }

        if let Some(&idx) = self.ring_map.keys().next() {
            return Err(SmilesError::UnclosedRing(idx));
        }
        if !self.branch_stack.is_empty() {
            return Err(SmilesError::UnclosedBranch);
        }
        Ok(())
    }

    fn take_bond(&mut self, order: BondOrder) {
        self.chars.next();
        self.pending_bond = Some(order);
    }

    fn take_digit(&mut self) -> Result<u32, SmilesError> {
        match self.chars.next() {
            Some(c) if c.is_ascii_digit() => Ok(c as u32 - '0' as u32),
            _ => Err(SmilesError::MissingRingDigit),
        }
    }

    /// Add a parsed atom to the graph and bond it to the current atom.
    /// Implicit bonds between two aromatic atoms are aromatic, otherwise single.
    fn attach(&mut self, atom: Atom) {
        let new_aromatic = atom.aromatic;
        let idx = self.mol.add_atom(atom);
        if let Some(prev) = self.current {
            let order = self.pending_bond.take().unwrap_or_else(|| {
                if self.mol.atoms[prev].aromatic && new_aromatic {
                    BondOrder::Aromatic
                } else {
                    BondOrder::Single
                }
            });
            self.mol.add_bond(prev, idx, order);
        } else {
            self.pending_bond = None;
        }
        self.current = Some(idx);
    }

    /// Open a ring closure, or close it if the index is already open.
    /// An explicit bond at either end wins; an implicit closure between two
    /// aromatic atoms is aromatic.
    fn close_or_open_ring(&mut self, ring_idx: u32) -> Result<(), SmilesError> {
        let cur = self.current.ok_or(SmilesError::DanglingBond)?;
        let explicit = self.pending_bond.take();

        match self.ring_map.remove(&ring_idx) {
            Some((other, bond_at_open)) => {
                if other == cur {
                    return Err(SmilesError::SelfRing(ring_idx));
                }
                let order = explicit.or(bond_at_open).unwrap_or_else(|| {
                    if self.mol.atoms[other].aromatic && self.mol.atoms[cur].aromatic {
                        BondOrder::Aromatic
                    } else {
                        BondOrder::Single
                    }
                });
                self.mol.add_bond(cur, other, order);
            }
            None => {
                self.ring_map.insert(ring_idx, (cur, explicit));
            }
        }
        Ok(())
    }

    /// Parse `[isotope? symbol chirality? Hcount? charge? :map?]`. Isotope,
    /// chirality, and atom maps are consumed and discarded; hydrogen count and
    /// formal charge are kept, since the descriptor panel depends on them.
    fn parse_bracket_atom(&mut self) -> Result<Atom, SmilesError> {
        self.chars.next(); // '['

        while self.chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.chars.next();
        }

        let first = self.chars.next().ok_or(SmilesError::UnterminatedBracket)?;
        if !first.is_ascii_alphabetic() {
            return Err(SmilesError::UnexpectedChar(first));
        }
        let aromatic = first.is_ascii_lowercase();
        let mut symbol = String::from(first.to_ascii_uppercase());
        // Second letter of two-letter symbols is always lowercase; the 'H' of
        // an H-count is uppercase, so it never gets swallowed here.
        if self.chars.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            symbol.push(self.chars.next().unwrap());
        }

        let element = Element::from_symbol(&symbol)
            .ok_or_else(|| SmilesError::UnknownElement(symbol.clone()))?;
        if aromatic && !element.supports_aromaticity() {
            return Err(SmilesError::NotAromatic(element.symbol()));
        }

        while self.chars.peek() == Some(&'@') {
            self.chars.next();
        }

        let mut hydrogens: u8 = 0;
        if self.chars.peek() == Some(&'H') {
            self.chars.next();
            hydrogens = 1;
            if self.chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                hydrogens = self.chars.next().unwrap() as u8 - b'0';
            }
        }

        let mut charge: i8 = 0;
        if let Some(&(sign @ ('+' | '-'))) = self.chars.peek() {
            self.chars.next();
            let unit: i8 = if sign == '+' { 1 } else { -1 };
            charge = unit;
            if self.chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                charge = unit * (self.chars.next().unwrap() as u8 - b'0') as i8;
            } else {
                while self.chars.peek() == Some(&sign) {
                    self.chars.next();
                    charge += unit;
                }
            }
        }

        if self.chars.peek() == Some(&':') {
            self.chars.next();
            while self.chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.chars.next();
            }
        }

        if self.chars.next() != Some(']') {
            return Err(SmilesError::UnterminatedBracket);
        }

        let mut atom = Atom::new(element, aromatic);
        atom.bracket_hydrogens = Some(hydrogens);
        atom.formal_charge = charge;
        Ok(atom)
    }

    /// Parse a bare organic-subset atom, uppercase or aromatic lowercase.
    fn parse_organic_atom(&mut self) -> Result<Atom, SmilesError> {
        let ch = self.chars.next().ok_or(SmilesError::Empty)?;
        let (element, aromatic) = match ch {
            'C' => {
                if self.chars.peek() == Some(&'l') {
                    self.chars.next();
                    (Element::Chlorine, false)
                } else {
                    (Element::Carbon, false)
                }
            }
            'B' => {
                if self.chars.peek() == Some(&'r') {
                    self.chars.next();
                    (Element::Bromine, false)
                } else {
                    (Element::Boron, false)
                }
            }
            'N' => (Element::Nitrogen, false),
            'O' => (Element::Oxygen, false),
            'P' => (Element::Phosphorus, false),
            'S' => (Element::Sulfur, false),
            'F' => (Element::Fluorine, false),
            'I' => (Element::Iodine, false),
            'b' => (Element::Boron, true),
            'c' => (Element::Carbon, true),
            'n' => (Element::Nitrogen, true),
            'o' => (Element::Oxygen, true),
            'p' => (Element::Phosphorus, true),
            's' => (Element::Sulfur, true),
            other => return Err(SmilesError::UnexpectedChar(other)),
        };
        Ok(Atom::new(element, aromatic))
    }
}
