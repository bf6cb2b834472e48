use super::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Nominal bond order used when summing an atom's valence.
    /// Aromatic bonds count as 1.5, the Kekulé average.
    pub fn valence_contribution(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub formal_charge: i8,
    /// Hydrogen count stated inside a bracket atom. Bracket atoms carry no
    /// implicit hydrogens per the SMILES rules; `None` marks an organic-subset
    /// atom whose hydrogens are filled from the default valence.
    pub bracket_hydrogens: Option<u8>,
    /// Filled during [`Molecule::finalize`]; always 0 for bracket atoms.
    pub implicit_hydrogens: u8,
    /// Whether the atom lies on at least one ring bond. Filled during finalize.
    pub in_ring: bool,
}

impl Atom {
    pub(crate) fn new(element: Element, aromatic: bool) -> Self {
        Self {
            element,
            aromatic,
            formal_charge: 0,
            bracket_hydrogens: None,
            implicit_hydrogens: 0,
            in_ring: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    pub atom_a: usize,
    pub atom_b: usize,
    pub order: BondOrder,
    /// Whether the bond is part of a cycle. Filled during finalize.
    pub in_ring: bool,
}

/// A heavy-atom molecular graph.
///
/// Atoms and bonds are stored by index; `adjacency[i]` lists
/// `(neighbor_atom, bond_index)` pairs for atom `i`. Explicitly written
/// hydrogens (`[H]`) appear as ordinary graph atoms; all other hydrogens are
/// implicit counts on their heavy atom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    pub(crate) fn add_bond(&mut self, a: usize, b: usize, order: BondOrder) {
        let bond_idx = self.bonds.len();
        self.bonds.push(Bond {
            atom_a: a.min(b),
            atom_b: a.max(b),
            order,
            in_ring: false,
        });
        self.adjacency[a].push((b, bond_idx));
        self.adjacency[b].push((a, bond_idx));
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Graph degree of atom `i` (explicit neighbors only).
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    /// Total hydrogens attached to atom `i`: the bracket-stated or implicit
    /// count plus any explicitly drawn hydrogen neighbors.
    pub fn hydrogen_count(&self, i: usize) -> usize {
        let own = self.atoms[i]
            .bracket_hydrogens
            .unwrap_or(self.atoms[i].implicit_hydrogens) as usize;
        let explicit = self.adjacency[i]
            .iter()
            .filter(|&&(n, _)| self.atoms[n].element == Element::Hydrogen)
            .count();
        own + explicit
    }

    /// Sum of nominal bond orders incident to atom `i`.
    fn bond_order_sum(&self, i: usize) -> f64 {
        self.adjacency[i]
            .iter()
            .map(|&(_, b)| self.bonds[b].order.valence_contribution())
            .sum()
    }

    /// Whether atom `i` participates in at least one double bond.
    pub fn has_double_bond(&self, i: usize) -> bool {
        self.adjacency[i]
            .iter()
            .any(|&(_, b)| self.bonds[b].order == BondOrder::Double)
    }

    /// Ring perception plus implicit-hydrogen assignment. Must be called once
    /// after the graph is fully built; the SMILES parser does this before
    /// returning.
    pub(crate) fn finalize(&mut self) {
        self.perceive_rings();
        self.assign_implicit_hydrogens();
    }

    /// Marks every bond that lies on a cycle: a bond is a ring bond iff its
    /// endpoints stay connected when the bond itself is removed.
    fn perceive_rings(&mut self) {
        let ring_flags: Vec<bool> = (0..self.bonds.len())
            .map(|b| self.connected_without_bond(self.bonds[b].atom_a, self.bonds[b].atom_b, b))
            .collect();
        for (bond, on_ring) in self.bonds.iter_mut().zip(&ring_flags) {
            bond.in_ring = *on_ring;
        }
        for i in 0..self.atoms.len() {
            self.atoms[i].in_ring = self.adjacency[i]
                .iter()
                .any(|&(_, b)| self.bonds[b].in_ring);
        }
    }

    fn connected_without_bond(&self, from: usize, to: usize, excluded: usize) -> bool {
        let mut visited = vec![false; self.atoms.len()];
        let mut stack = vec![from];
        visited[from] = true;
        while let Some(u) = stack.pop() {
            if u == to {
                return true;
            }
            for &(v, b) in &self.adjacency[u] {
                if b != excluded && !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        false
    }

    fn assign_implicit_hydrogens(&mut self) {
        for i in 0..self.atoms.len() {
            if self.atoms[i].bracket_hydrogens.is_some() {
                continue;
            }
            let valence = self.atoms[i].element.default_valence() as f64;
            let used = self.bond_order_sum(i).ceil();
            self.atoms[i].implicit_hydrogens = (valence - used).max(0.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(elements: &[Element]) -> Molecule {
        let mut mol = Molecule::new();
        let ids: Vec<usize> = elements
            .iter()
            .map(|&el| mol.add_atom(Atom::new(el, false)))
            .collect();
        for pair in ids.windows(2) {
            mol.add_bond(pair[0], pair[1], BondOrder::Single);
        }
        mol
    }

    #[test]
    fn ethane_fills_terminal_hydrogens() {
        let mut mol = chain(&[Element::Carbon, Element::Carbon]);
        mol.finalize();
        assert_eq!(mol.hydrogen_count(0), 3);
        assert_eq!(mol.hydrogen_count(1), 3);
    }

    #[test]
    fn ethanol_oxygen_gets_one_hydrogen() {
        let mut mol = chain(&[Element::Carbon, Element::Carbon, Element::Oxygen]);
        mol.finalize();
        assert_eq!(mol.hydrogen_count(2), 1);
    }

    #[test]
    fn double_bond_reduces_implicit_hydrogens() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Atom::new(Element::Carbon, false));
        let b = mol.add_atom(Atom::new(Element::Oxygen, false));
        mol.add_bond(a, b, BondOrder::Double);
        mol.finalize();
        assert_eq!(mol.hydrogen_count(a), 2); // formaldehyde
        assert_eq!(mol.hydrogen_count(b), 0);
    }

    #[test]
    fn bracket_atoms_never_gain_implicit_hydrogens() {
        let mut mol = Molecule::new();
        let mut atom = Atom::new(Element::Nitrogen, false);
        atom.bracket_hydrogens = Some(0);
        let a = mol.add_atom(atom);
        mol.finalize();
        assert_eq!(mol.hydrogen_count(a), 0);
    }

    #[test]
    fn ring_bonds_are_detected_in_cyclopropane() {
        let mut mol = chain(&[Element::Carbon, Element::Carbon, Element::Carbon]);
        mol.add_bond(2, 0, BondOrder::Single);
        mol.finalize();
        assert!(mol.bonds.iter().all(|b| b.in_ring));
        assert!(mol.atoms.iter().all(|a| a.in_ring));
    }

    #[test]
    fn chain_bonds_are_not_ring_bonds() {
        let mut mol = chain(&[Element::Carbon, Element::Carbon, Element::Carbon]);
        mol.finalize();
        assert!(mol.bonds.iter().all(|b| !b.in_ring));
        assert!(mol.atoms.iter().all(|a| !a.in_ring));
    }

    #[test]
    fn explicit_hydrogen_neighbor_counts_toward_hydrogens() {
        let mut mol = Molecule::new();
        let c = mol.add_atom(Atom::new(Element::Carbon, false));
        let mut h = Atom::new(Element::Hydrogen, false);
        h.bracket_hydrogens = Some(0);
        let h = mol.add_atom(h);
        mol.add_bond(c, h, BondOrder::Single);
        mol.finalize();
        // 3 implicit + 1 explicit
        assert_eq!(mol.hydrogen_count(c), 4);
    }

    #[test]
    fn aromatic_ring_carbon_keeps_one_hydrogen() {
        // Benzene built by hand: six aromatic carbons in a cycle.
        let mut mol = Molecule::new();
        let ids: Vec<usize> = (0..6)
            .map(|_| mol.add_atom(Atom::new(Element::Carbon, true)))
            .collect();
        for i in 0..6 {
            mol.add_bond(ids[i], ids[(i + 1) % 6], BondOrder::Aromatic);
        }
        mol.finalize();
        for &i in &ids {
            assert_eq!(mol.hydrogen_count(i), 1);
            assert!(mol.atoms[i].in_ring);
        }
    }
}
