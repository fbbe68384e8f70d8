use super::reference::{POLAR_HYDROGEN_SYMBOL, ReferenceTable, ScalingExponents};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const OPTIMISE_OUTPUT_FILE: &str = "optimise.out";
pub const FINAL_PARAMETERS_MARKER: &str = "Final physical parameters:";

/// Elements whose `r_free` is read from the block, in line order.
pub const OPTIMISED_RADII: [&str; 5] = ["C", "N", "O", "H", POLAR_HYDROGEN_SYMBOL];

const RADIUS_TOKEN: usize = 6;
const EXPONENT_TOKEN: usize = 2;

/// Conventional location of the optimiser output: two directories above `work_dir`.
pub fn optimise_output_path(work_dir: &Path) -> PathBuf {
    work_dir.join("..").join("..").join(OPTIMISE_OUTPUT_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimiseParseError {
    #[error("no line containing '{}' was found", FINAL_PARAMETERS_MARKER)]
    MarkerNotFound,
    #[error("line {line}: expected a numeric r_free for '{element}' in column {}", RADIUS_TOKEN + 1)]
    MalformedRadius { line: usize, element: &'static str },
}

/// Values recovered from the final-parameters block of an optimiser run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimisedParameters {
    /// New `r_free` per element, in [`OPTIMISED_RADII`] order.
    pub radii: [(&'static str, f64); 5],
    /// `alpha`/`beta`, present only if both lines parsed.
    pub exponents: Option<ScalingExponents>,
}

impl OptimisedParameters {
    /// Returns copies of `table` and `exponents` with the optimised values laid on top.
    ///
    /// Only `r_free` changes; `v_free` and `b_free` of each row are kept.
    pub fn apply(
        &self,
        table: &ReferenceTable,
        exponents: &ScalingExponents,
    ) -> (ReferenceTable, ScalingExponents) {
        let mut table = table.clone();
        for (symbol, r_free) in self.radii {
            if !table.set_r_free(symbol, r_free) {
                warn!(
                    "Optimised r_free for '{}' ignored: the reference table has no row for it.",
                    symbol
                );
            }
        }
        (table, self.exponents.unwrap_or(*exponents))
    }
}

/// Parses the final-parameters block of an optimiser output.
///
/// The block starts at the last line containing [`FINAL_PARAMETERS_MARKER`]. Five
/// consecutive lines carry `r_free` for C, N, O, H and X in their seventh
/// whitespace-separated column; they are read directly after the marker, or after one
/// header/separator line if that fails. All five must parse or none are used. The
/// following two lines carry `alpha` and `beta` in their third column; if either is
/// missing or malformed both keep their current values.
pub fn parse_optimise_output(text: &str) -> Result<OptimisedParameters, OptimiseParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let marker = lines
        .iter()
        .rposition(|line| line.contains(FINAL_PARAMETERS_MARKER))
        .ok_or(OptimiseParseError::MarkerNotFound)?;

    let (radii, cursor) = match read_radii(&lines, marker + 1) {
        Ok(radii) => (radii, marker + 6),
        Err(direct) => match read_radii(&lines, marker + 2) {
            Ok(radii) => (radii, marker + 7),
            // Report whichever attempt got further into the block.
            Err(shifted) => return Err(further(direct, shifted)),
        },
    };

    let alpha = lines
        .get(cursor)
        .and_then(|line| numeric_token(line, EXPONENT_TOKEN));
    let beta = lines
        .get(cursor + 1)
        .and_then(|line| numeric_token(line, EXPONENT_TOKEN));
    let exponents = match (alpha, beta) {
        (Some(alpha), Some(beta)) => Some(ScalingExponents { alpha, beta }),
        _ => {
            debug!(
                "No usable alpha/beta after the optimised radii (lines {}-{}); keeping current exponents.",
                cursor + 1,
                cursor + 2
            );
            None
        }
    };

    Ok(OptimisedParameters { radii, exponents })
}

fn read_radii(
    lines: &[&str],
    start: usize,
) -> Result<[(&'static str, f64); 5], OptimiseParseError> {
    let mut radii = [("", 0.0); 5];
    for (offset, (slot, element)) in radii.iter_mut().zip(OPTIMISED_RADII).enumerate() {
        let line = start + offset;
        let r_free = lines
            .get(line)
            .and_then(|text| numeric_token(text, RADIUS_TOKEN))
            .ok_or(OptimiseParseError::MalformedRadius {
                line: line + 1,
                element,
            })?;
        *slot = (element, r_free);
    }
    Ok(radii)
}

fn further(first: OptimiseParseError, second: OptimiseParseError) -> OptimiseParseError {
    let reached = |error: &OptimiseParseError| match error {
        OptimiseParseError::MalformedRadius { line, .. } => *line,
        OptimiseParseError::MarkerNotFound => 0,
    };
    if reached(&second) > reached(&first) {
        second
    } else {
        first
    }
}

fn numeric_token(line: &str, index: usize) -> Option<f64> {
    line.split_whitespace()
        .nth(index)
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::reference::ElementReference;

    const WELL_FORMED: &str = "\
Iteration 12 converged
  Final physical parameters:
  ---------------------------------------------
  C  r_free  VDWS  :  0  =  2.008
  N  r_free  VDWS  :  0  =  1.765
  O  r_free  VDWS  :  0  =  1.499
  H  r_free  VDWS  :  0  =  1.738
  X  r_free  VDWS  :  0  =  1.083
  alpha = 1.2
  beta = 0.5
";

    #[test]
    fn parses_radii_and_exponents_from_well_formed_block() {
        let parsed = parse_optimise_output(WELL_FORMED).unwrap();
        assert_eq!(
            parsed.radii,
            [
                ("C", 2.008),
                ("N", 1.765),
                ("O", 1.499),
                ("H", 1.738),
                ("X", 1.083)
            ]
        );
        assert_eq!(
            parsed.exponents,
            Some(ScalingExponents {
                alpha: 1.2,
                beta: 0.5
            })
        );
    }

    #[test]
    fn block_without_separator_starts_directly_after_marker() {
        let text = WELL_FORMED.replace("  ---------------------------------------------\n", "");
        let parsed = parse_optimise_output(&text).unwrap();
        assert_eq!(parsed.radii[0], ("C", 2.008));
        assert_eq!(parsed.radii[4], ("X", 1.083));
    }

    #[test]
    fn header_line_under_marker_is_skipped() {
        let text = "\
Final physical parameters:
  Parameter  Name  Value
 C  r_free  VDWS  :  0  =  2.1
 N  r_free  VDWS  :  0  =  1.8
 O  r_free  VDWS  :  0  =  1.7
 H  r_free  VDWS  :  0  =  1.5
 X  r_free  VDWS  :  0  =  1.2
 alpha = 1.05
 beta = 0.3
";
        let parsed = parse_optimise_output(text).unwrap();
        assert_eq!(
            parsed.radii,
            [("C", 2.1), ("N", 1.8), ("O", 1.7), ("H", 1.5), ("X", 1.2)]
        );
        assert_eq!(
            parsed.exponents,
            Some(ScalingExponents {
                alpha: 1.05,
                beta: 0.3
            })
        );
    }

    #[test]
    fn malformed_radius_without_separator_names_the_bad_row() {
        let text = WELL_FORMED
            .replace("  ---------------------------------------------\n", "")
            .replace("=  1.499", "=  oops");
        assert_eq!(
            parse_optimise_output(&text),
            Err(OptimiseParseError::MalformedRadius {
                line: 5,
                element: "O"
            })
        );
    }

    #[test]
    fn last_marker_wins() {
        let text = format!(
            "Final physical parameters:\n\n a b c d e f 9.0\n{}",
            WELL_FORMED
        );
        let parsed = parse_optimise_output(&text).unwrap();
        assert_eq!(parsed.radii[0], ("C", 2.008));
    }

    #[test]
    fn missing_marker_is_reported() {
        assert_eq!(
            parse_optimise_output("nothing to see here\n"),
            Err(OptimiseParseError::MarkerNotFound)
        );
    }

    #[test]
    fn malformed_radius_rejects_the_whole_block() {
        let text = WELL_FORMED.replace("=  1.499", "=  oops");
        assert_eq!(
            parse_optimise_output(&text),
            Err(OptimiseParseError::MalformedRadius {
                line: 6,
                element: "O"
            })
        );
    }

    #[test]
    fn truncated_block_rejects_radii() {
        let text = "Final physical parameters:\n---\n C  r_free  VDWS  :  0  =  2.0\n";
        assert!(matches!(
            parse_optimise_output(text),
            Err(OptimiseParseError::MalformedRadius { element: "N", .. })
        ));
    }

    #[test]
    fn malformed_exponents_keep_radii() {
        let text = WELL_FORMED.replace("beta = 0.5", "beta =");
        let parsed = parse_optimise_output(&text).unwrap();
        assert_eq!(parsed.radii[3], ("H", 1.738));
        assert_eq!(parsed.exponents, None);
    }

    #[test]
    fn apply_updates_only_optimised_radii() {
        let defaults = ReferenceTable::default();
        let parsed = parse_optimise_output(WELL_FORMED).unwrap();
        let (table, exponents) = parsed.apply(&defaults, &ScalingExponents::default());

        assert_eq!(table.get("C"), Some(&ElementReference::new(34.4, 46.6, 2.008)));
        assert_eq!(table.get("N"), Some(&ElementReference::new(25.9, 24.2, 1.765)));
        assert_eq!(table.get("O"), Some(&ElementReference::new(22.1, 15.6, 1.499)));
        assert_eq!(table.get("H"), Some(&ElementReference::new(7.6, 6.5, 1.738)));
        assert_eq!(table.get("X"), Some(&ElementReference::new(7.6, 6.5, 1.083)));
        for symbol in ["B", "F", "P", "S", "Cl", "Br", "Si", "I"] {
            assert_eq!(table.get(symbol), defaults.get(symbol), "row {symbol} changed");
        }
        assert_eq!(exponents, ScalingExponents { alpha: 1.2, beta: 0.5 });
    }

    #[test]
    fn optimise_output_path_is_two_levels_up() {
        let path = optimise_output_path(Path::new("/runs/mol/stage"));
        assert_eq!(path, Path::new("/runs/mol/stage/../../optimise.out"));
    }
}
