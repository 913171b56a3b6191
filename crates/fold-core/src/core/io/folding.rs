use crate::core::models::residue::Sequence;
use crate::core::models::step::Folding;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoldingRecordError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Folding has {folding} steps but the sequence has {bonds} bonds")]
    LengthMismatch { bonds: usize, folding: usize },
}

/// The `amino,fold` hand-off record of a single folding: one row per
/// residue with the step taken *after* it (0 for the final residue),
/// followed by the score.
#[derive(Debug, Clone)]
pub struct FoldingRecord<'a> {
    pub sequence: &'a Sequence,
    pub folding: &'a Folding,
    pub score: i32,
}

impl<'a> FoldingRecord<'a> {
    pub fn new(sequence: &'a Sequence, folding: &'a Folding, score: i32) -> Self {
        Self {
            sequence,
            folding,
            score,
        }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), FoldingRecordError> {
        if self.folding.len() != self.sequence.bond_count() {
            return Err(FoldingRecordError::LengthMismatch {
                bonds: self.sequence.bond_count(),
                folding: self.folding.len(),
            });
        }

        let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        csv.write_record(["amino", "fold"])?;

        let codes = self.folding.codes();
        for (index, kind) in self.sequence.residues().iter().enumerate() {
            let code = codes.get(index).copied().unwrap_or(0);
            csv.write_record([kind.code().to_string(), code.to_string()])?;
        }
        csv.write_record(["score", &self.score.to_string()])?;
        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), FoldingRecordError> {
        let file = std::fs::File::create(path).map_err(|e| FoldingRecordError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        self.write_csv(file)
    }
}
