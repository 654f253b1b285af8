//! Questionnaire scoring: the EU AI Act compliance flow and the companion maturity flow.

pub mod compliance;
mod errors;
pub mod import;
pub mod maturity;

pub use errors::{CatalogError, ValidationError};

/// Allowed drift when checking that a set of weights sums to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

pub(crate) fn check_weight_sum<I>(scope: &str, weights: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    for weight in weights {
        if !weight.is_finite() || weight < 0.0 {
            return Err(CatalogError::InvalidWeight {
                scope: scope.to_string(),
                weight,
            });
        }
        total += weight;
    }

    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(CatalogError::WeightSum {
            scope: scope.to_string(),
            total,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_sum_tolerates_float_drift() {
        check_weight_sum("sections", [0.1, 0.2, 0.3, 0.4]).expect("sums to one");
    }

    #[test]
    fn weight_sum_rejects_overshoot() {
        let err = check_weight_sum("sections", [0.5, 0.51]).expect_err("sum above one");
        match err {
            CatalogError::WeightSum { total, .. } => assert!((total - 1.01).abs() < 1e-9),
            other => panic!("expected weight sum error, got {other:?}"),
        }
    }

    #[test]
    fn weight_sum_rejects_negative_weight() {
        let err = check_weight_sum("dimension", [1.2, -0.2]).expect_err("negative weight");
        assert!(matches!(err, CatalogError::InvalidWeight { .. }));
    }
}
