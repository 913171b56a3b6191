use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of residue classes in the HP/HPC model.
///
/// Folding quality is determined entirely by which of these classes end up
/// adjacent on the lattice; the model carries no further chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueKind {
    Hydrophobic, // H
    Polar,       // P
    Cysteine,    // C
}

static ONE_LETTER_CODES: Map<char, ResidueKind> = phf_map! {
    'H' => ResidueKind::Hydrophobic,
    'P' => ResidueKind::Polar,
    'C' => ResidueKind::Cysteine,
};

impl ResidueKind {
    pub fn from_code(code: char) -> Option<Self> {
        ONE_LETTER_CODES.get(&code).copied()
    }

    pub fn code(self) -> char {
        match self {
            ResidueKind::Hydrophobic => 'H',
            ResidueKind::Polar => 'P',
            ResidueKind::Cysteine => 'C',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceParseError {
    #[error("Unknown residue code '{code}' at position {position}")]
    UnknownCode { code: char, position: usize },
}

/// The immutable input of a search run: an ordered chain of residue kinds.
///
/// Residues are identified by their chain index; consecutive indices are
/// covalently bonded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    residues: Vec<ResidueKind>,
}

impl Sequence {
    pub fn new(residues: Vec<ResidueKind>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[ResidueKind] {
        &self.residues
    }

    pub fn kind(&self, index: usize) -> Option<ResidueKind> {
        self.residues.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of covalent bonds, which is also the length of any folding of
    /// this sequence.
    pub fn bond_count(&self) -> usize {
        self.residues.len().saturating_sub(1)
    }
}

impl FromStr for Sequence {
    type Err = SequenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut residues = Vec::with_capacity(s.len());
        for (position, code) in s.chars().enumerate() {
            let kind = ResidueKind::from_code(code)
                .ok_or(SequenceParseError::UnknownCode { code, position })?;
            residues.push(kind);
        }
        Ok(Self { residues })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.residues {
            write!(f, "{}", kind.code())?;
        }
        Ok(())
    }
}
