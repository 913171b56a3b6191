use crate::core::models::residue::ResidueKind;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid contact energy '{name} = {value}': contact energies must not be positive")]
    Positive { name: &'static str, value: i32 },
}

/// Pairwise contact energies of the HP/HPC potential.
///
/// A contact is a pair of residues that are unit-adjacent on the lattice but
/// not covalently bonded. Polar residues never contribute, so the table only
/// carries the three hydrophobic/cysteine pairings. Lower is more stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ContactParams {
    pub hydrophobic_hydrophobic: i32,
    pub cysteine_cysteine: i32,
    pub hydrophobic_cysteine: i32,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            hydrophobic_hydrophobic: -1,
            cysteine_cysteine: -5,
            hydrophobic_cysteine: -1,
        }
    }
}

impl ContactParams {
    /// Loads a contact table from a TOML file; omitted keys fall back to the
    /// canonical values.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()
    }

    fn validate(self) -> Result<Self, ParamLoadError> {
        let entries = [
            ("hydrophobic-hydrophobic", self.hydrophobic_hydrophobic),
            ("cysteine-cysteine", self.cysteine_cysteine),
            ("hydrophobic-cysteine", self.hydrophobic_cysteine),
        ];
        for (name, value) in entries {
            if value > 0 {
                return Err(ParamLoadError::Positive { name, value });
            }
        }
        Ok(self)
    }

    /// Contact energy of an unordered residue pair. Symmetric in its
    /// arguments; any pairing that involves a polar residue is zero.
    pub fn contact_energy(&self, a: ResidueKind, b: ResidueKind) -> i32 {
        use ResidueKind::*;
        match (a, b) {
            (Hydrophobic, Hydrophobic) => self.hydrophobic_hydrophobic,
            (Cysteine, Cysteine) => self.cysteine_cysteine,
            (Hydrophobic, Cysteine) | (Cysteine, Hydrophobic) => self.hydrophobic_cysteine,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn canonical_table_matches_the_model() {
        use ResidueKind::*;
        let params = ContactParams::default();
        assert_eq!(params.contact_energy(Hydrophobic, Hydrophobic), -1);
        assert_eq!(params.contact_energy(Cysteine, Cysteine), -5);
        assert_eq!(params.contact_energy(Hydrophobic, Cysteine), -1);
        assert_eq!(params.contact_energy(Polar, Hydrophobic), 0);
        assert_eq!(params.contact_energy(Polar, Polar), 0);
        assert_eq!(params.contact_energy(Polar, Cysteine), 0);
    }

    #[test]
    fn contact_energy_is_symmetric() {
        use ResidueKind::*;
        let params = ContactParams::default();
        for a in [Hydrophobic, Polar, Cysteine] {
            for b in [Hydrophobic, Polar, Cysteine] {
                assert_eq!(params.contact_energy(a, b), params.contact_energy(b, a));
            }
        }
    }

    #[test]
    fn load_succeeds_with_partial_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "cysteine-cysteine = -9").unwrap();

        let params = ContactParams::load(&path).unwrap();
        assert_eq!(params.cysteine_cysteine, -9);
        assert_eq!(params.hydrophobic_hydrophobic, -1);
    }

    #[test]
    fn load_rejects_positive_energies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "hydrophobic-hydrophobic = 3").unwrap();

        let err = ContactParams::load(&path).unwrap_err();
        assert!(matches!(err, ParamLoadError::Positive { value: 3, .. }));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = ContactParams::load(Path::new("/nonexistent/contacts.toml")).unwrap_err();
        assert!(matches!(err, ParamLoadError::Io { .. }));
    }
}
