use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// Aggregated outcome of a timed experiment, in the shape the result file
/// records it: run metadata plus every score observed within the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRecord {
    pub algorithm: String,
    pub sequence: String,
    pub runtime_seconds: f64,
    pub best_score: Option<i32>,
    pub scores: Vec<i32>,
}

impl ExperimentRecord {
    pub fn total_solutions(&self) -> usize {
        self.scores.len()
    }

    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: i64 = self.scores.iter().map(|&s| i64::from(s)).sum();
        Some(sum as f64 / self.scores.len() as f64)
    }

    /// Writes the tabular result record: a metadata block, a blank
    /// separator row, then one `(index, score)` row per observed score.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

        csv.write_record(["Experiment Info", "Values"])?;
        csv.write_record(["Algorithm", &self.algorithm])?;
        csv.write_record(["Protein", &self.sequence])?;
        csv.write_record(["Final Runtime (s)", &format!("{:.2}", self.runtime_seconds)])?;
        csv.write_record(["Total Solutions", &self.total_solutions().to_string()])?;
        let best = self
            .best_score
            .map_or_else(|| "none".to_string(), |score| score.to_string());
        csv.write_record(["Best Score", &best])?;
        let average = self
            .average_score()
            .map_or_else(|| "none".to_string(), |avg| format!("{:.2}", avg));
        csv.write_record(["Average Score", &average])?;

        csv.write_record([""])?;
        csv.write_record(["Score Index", "Score"])?;
        for (index, score) in self.scores.iter().enumerate() {
            csv.write_record([index.to_string(), score.to_string()])?;
        }

        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let file = std::fs::File::create(path).map_err(|e| ReportError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        self.write_csv(file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record() -> ExperimentRecord {
        ExperimentRecord {
            algorithm: "SimulatedAnnealing".to_string(),
            sequence: "HPHC".to_string(),
            runtime_seconds: 1.234,
            best_score: Some(-6),
            scores: vec![-2, -6, 0],
        }
    }

    #[test]
    fn metadata_block_precedes_score_rows() {
        let mut buffer = Vec::new();
        record().write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Experiment Info,Values");
        assert_eq!(lines[1], "Algorithm,SimulatedAnnealing");
        assert_eq!(lines[2], "Protein,HPHC");
        assert_eq!(lines[3], "Final Runtime (s),1.23");
        assert_eq!(lines[4], "Total Solutions,3");
        assert_eq!(lines[5], "Best Score,-6");
        assert_eq!(lines[6], "Average Score,-2.67");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Score Index,Score");
        assert_eq!(lines[9], "0,-2");
        assert_eq!(lines[10], "1,-6");
        assert_eq!(lines[11], "2,0");
    }

    #[test]
    fn empty_run_records_no_solution() {
        let record = ExperimentRecord {
            algorithm: "RandomSampling".to_string(),
            sequence: "HP".to_string(),
            runtime_seconds: 0.0,
            best_score: None,
            scores: Vec::new(),
        };
        let mut buffer = Vec::new();
        record.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Best Score,none"));
        assert!(text.contains("Average Score,none"));
        assert!(text.contains("Total Solutions,0"));
    }

    #[test]
    fn save_writes_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        record().save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Experiment Info,Values"));
    }
}
