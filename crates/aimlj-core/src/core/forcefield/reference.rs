use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Lookup symbol used for hydrogens bonded to N, O or S.
pub const POLAR_HYDROGEN_SYMBOL: &str = "X";

/// Calibrated free-atom reference values for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementReference {
    /// Free-atom AIM volume.
    pub v_free: f64,
    /// Free-atom dispersion coefficient.
    pub b_free: f64,
    /// Free-atom radius.
    pub r_free: f64,
}

impl ElementReference {
    pub const fn new(v_free: f64, b_free: f64, r_free: f64) -> Self {
        Self {
            v_free,
            b_free,
            r_free,
        }
    }
}

static FREE_PARAMETERS: phf::Map<&'static str, ElementReference> = phf_map! {
    "H" => ElementReference::new(7.6, 6.5, 1.64),
    "X" => ElementReference::new(7.6, 6.5, 1.0),
    "B" => ElementReference::new(46.7, 99.5, 2.08),
    "C" => ElementReference::new(34.4, 46.6, 2.08),
    "N" => ElementReference::new(25.9, 24.2, 1.72),
    "O" => ElementReference::new(22.1, 15.6, 1.60),
    "F" => ElementReference::new(18.2, 9.5, 1.58),
    "P" => ElementReference::new(84.6, 185.0, 2.07),
    "S" => ElementReference::new(75.2, 134.0, 2.00),
    "Cl" => ElementReference::new(65.1, 94.6, 1.88),
    "Br" => ElementReference::new(95.7, 162.0, 1.96),
    "Si" => ElementReference::new(101.64, 305.0, 2.08),
    "I" => ElementReference::new(153.8, 385.0, 2.04),
};

/// Exponents of the volume-scaling correction applied to every epsilon.
///
/// `epsilon *= alpha * (V / v_free)^beta`. The defaults (1, 0) leave epsilon unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingExponents {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for ScalingExponents {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.0,
        }
    }
}

impl ScalingExponents {
    /// Returns `alpha * volume_ratio^beta`.
    #[inline]
    pub fn factor(&self, volume_ratio: f64) -> f64 {
        self.alpha * volume_ratio.powf(self.beta)
    }
}

/// Element-keyed table of free-atom reference values.
///
/// Keys are case-sensitive element symbols plus the polar-hydrogen pseudo symbol
/// [`POLAR_HYDROGEN_SYMBOL`]. Symbols without a row are not parametrisable.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    entries: BTreeMap<String, ElementReference>,
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self {
            entries: FREE_PARAMETERS
                .entries()
                .map(|(symbol, reference)| (symbol.to_string(), *reference))
                .collect(),
        }
    }
}

impl ReferenceTable {
    /// Creates an empty table. Every atom is unparametrisable against it.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementReference> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Inserts or replaces the row for `symbol`.
    pub fn insert(&mut self, symbol: &str, reference: ElementReference) {
        self.entries.insert(symbol.to_string(), reference);
    }

    /// Replaces only `r_free` of an existing row. Returns `false` if the row does not exist.
    pub fn set_r_free(&mut self, symbol: &str, r_free: f64) -> bool {
        match self.entries.get_mut(symbol) {
            Some(reference) => {
                reference.r_free = r_free;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementReference)> {
        self.entries.iter().map(|(symbol, r)| (symbol.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ReferenceLoadError {
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
    #[error("Invalid reference value for '{symbol}': {field} must be finite and positive, got {value}")]
    InvalidValue {
        symbol: String,
        field: &'static str,
        value: f64,
    },
}

/// On-disk override of the reference table and scaling exponents.
///
/// ```toml
/// alpha = 1.0
/// beta = 0.5
///
/// [elements.C]
/// v_free = 34.4
/// b_free = 46.6
/// r_free = 2.008
/// ```
///
/// Rows listed under `elements` replace (or extend) the table; everything else keeps
/// its current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default)]
    pub elements: BTreeMap<String, ElementReference>,
}

impl ReferenceFile {
    pub fn load(path: &Path) -> Result<Self, ReferenceLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ReferenceLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: Self = toml::from_str(&content).map_err(|e| ReferenceLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        file.validate()?;
        Ok(file)
    }

    /// Captures a table and exponents so they can be written back out as TOML.
    pub fn snapshot(table: &ReferenceTable, exponents: &ScalingExponents) -> Self {
        Self {
            alpha: Some(exponents.alpha),
            beta: Some(exponents.beta),
            elements: table
                .iter()
                .map(|(symbol, reference)| (symbol.to_string(), *reference))
                .collect(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Returns copies of `table` and `exponents` with this file's values laid on top.
    pub fn apply(
        &self,
        table: &ReferenceTable,
        exponents: &ScalingExponents,
    ) -> (ReferenceTable, ScalingExponents) {
        let mut table = table.clone();
        for (symbol, reference) in &self.elements {
            table.insert(symbol, *reference);
        }
        let exponents = ScalingExponents {
            alpha: self.alpha.unwrap_or(exponents.alpha),
            beta: self.beta.unwrap_or(exponents.beta),
        };
        (table, exponents)
    }

    fn validate(&self) -> Result<(), ReferenceLoadError> {
        for (symbol, reference) in &self.elements {
            for (field, value) in [
                ("v_free", reference.v_free),
                ("b_free", reference.b_free),
                ("r_free", reference.r_free),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ReferenceLoadError::InvalidValue {
                        symbol: symbol.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_table_has_thirteen_rows() {
        let table = ReferenceTable::default();
        assert_eq!(table.len(), 13);
        for symbol in ["H", "X", "B", "C", "N", "O", "F", "P", "S", "Cl", "Br", "Si", "I"] {
            assert!(table.contains(symbol), "missing row for {symbol}");
        }
    }

    #[test]
    fn default_table_values_match_calibration() {
        let table = ReferenceTable::default();
        assert_eq!(table.get("C"), Some(&ElementReference::new(34.4, 46.6, 2.08)));
        assert_eq!(table.get("X"), Some(&ElementReference::new(7.6, 6.5, 1.0)));
        assert_eq!(table.get("Si"), Some(&ElementReference::new(101.64, 305.0, 2.08)));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = ReferenceTable::default();
        assert!(table.get("Cl").is_some());
        assert!(table.get("CL").is_none());
        assert!(table.get("cl").is_none());
    }

    #[test]
    fn set_r_free_keeps_volume_and_dispersion() {
        let mut table = ReferenceTable::default();
        assert!(table.set_r_free("N", 1.765));
        assert_eq!(table.get("N"), Some(&ElementReference::new(25.9, 24.2, 1.765)));
        assert!(!table.set_r_free("Xe", 2.0));
    }

    #[test]
    fn default_exponents_are_neutral() {
        let exponents = ScalingExponents::default();
        assert_eq!(exponents.alpha, 1.0);
        assert_eq!(exponents.beta, 0.0);
        assert_eq!(exponents.factor(0.37), 1.0);
        assert_eq!(exponents.factor(4.2), 1.0);
    }

    #[test]
    fn load_applies_rows_and_exponents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rfree.toml");
        fs::write(
            &path,
            r#"
            alpha = 1.0
            beta = 0.5

            [elements.C]
            v_free = 34.4
            b_free = 46.6
            r_free = 2.008

            [elements.Se]
            v_free = 80.0
            b_free = 150.0
            r_free = 2.1
            "#,
        )
        .unwrap();

        let file = ReferenceFile::load(&path).unwrap();
        let (table, exponents) =
            file.apply(&ReferenceTable::default(), &ScalingExponents::default());

        assert_eq!(table.get("C").unwrap().r_free, 2.008);
        assert_eq!(table.get("Se"), Some(&ElementReference::new(80.0, 150.0, 2.1)));
        assert_eq!(table.get("O"), ReferenceTable::default().get("O"));
        assert_eq!(exponents, ScalingExponents { alpha: 1.0, beta: 0.5 });
    }

    #[test]
    fn partial_file_keeps_unspecified_exponent() {
        let file: ReferenceFile = toml::from_str("beta = 0.25").unwrap();
        let (_, exponents) = file.apply(
            &ReferenceTable::default(),
            &ScalingExponents { alpha: 2.0, beta: 0.0 },
        );
        assert_eq!(exponents, ScalingExponents { alpha: 2.0, beta: 0.25 });
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ReferenceFile::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ReferenceLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "gamma = 3.0").unwrap();
        assert!(matches!(
            ReferenceFile::load(&path),
            Err(ReferenceLoadError::Toml { .. })
        ));
    }

    #[test]
    fn load_fails_for_non_positive_volume() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[elements.H]\nv_free = 0.0\nb_free = 6.5\nr_free = 1.6\n",
        )
        .unwrap();
        assert!(matches!(
            ReferenceFile::load(&path),
            Err(ReferenceLoadError::InvalidValue { field: "v_free", .. })
        ));
    }

    #[test]
    fn snapshot_round_trips_through_toml() {
        let table = ReferenceTable::default();
        let exponents = ScalingExponents::default();
        let text = ReferenceFile::snapshot(&table, &exponents)
            .to_toml_string()
            .unwrap();

        let parsed: ReferenceFile = toml::from_str(&text).unwrap();
        let (restored, restored_exponents) =
            parsed.apply(&ReferenceTable::empty(), &ScalingExponents { alpha: 9.0, beta: 9.0 });
        assert_eq!(restored, table);
        assert_eq!(restored_exponents, exponents);
    }
}
