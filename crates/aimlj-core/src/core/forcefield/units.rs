pub const BOHR_TO_ANGS: f64 = 0.529177;
pub const ANGS_TO_NM: f64 = 0.1;
pub const HA_TO_KCAL_P_MOL: f64 = 627.509391;
pub const KCAL_TO_KJ: f64 = 4.184;

/// Converts `(a_i / b_i)^(1/6)` (Angstrom) into nanometres.
pub const SIGMA_CONVERSION: f64 = ANGS_TO_NM;

/// Converts `b_i^2 / (4 a_i)` (mixed Hartree/Angstrom units) into kJ/mol.
pub const EPSILON_CONVERSION: f64 =
    BOHR_TO_ANGS * BOHR_TO_ANGS * BOHR_TO_ANGS * BOHR_TO_ANGS * BOHR_TO_ANGS * BOHR_TO_ANGS
        * HA_TO_KCAL_P_MOL
        * KCAL_TO_KJ;

/// Scale factors applied to sigma and epsilon in the final synthesis step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pub sigma: f64,
    pub epsilon: f64,
}

impl Default for UnitConversion {
    fn default() -> Self {
        Self {
            sigma: SIGMA_CONVERSION,
            epsilon: EPSILON_CONVERSION,
        }
    }
}

impl UnitConversion {
    /// Leaves sigma and epsilon in the internal units of the model.
    pub const fn identity() -> Self {
        Self {
            sigma: 1.0,
            epsilon: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_conversion_matches_bohr_hartree_kilojoule_chain() {
        let expected = BOHR_TO_ANGS.powi(6) * HA_TO_KCAL_P_MOL * KCAL_TO_KJ;
        assert!((EPSILON_CONVERSION - expected).abs() < 1e-12);
    }

    #[test]
    fn default_and_identity_conversions() {
        let default = UnitConversion::default();
        assert_eq!(default.sigma, 0.1);
        assert_eq!(default.epsilon, EPSILON_CONVERSION);
        assert_eq!(
            UnitConversion::identity(),
            UnitConversion {
                sigma: 1.0,
                epsilon: 1.0
            }
        );
    }
}
