//! Parametric post seismic deformation models
use crate::error::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [PsdModel] describes the relaxation of one topocentric component
/// following an earthquake. Amplitudes are expressed in mm,
/// relaxation times in decimal years.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PsdModel {
    /// Piece-wise linear function: no correction (model #0)
    #[default]
    PiecewiseLinear,
    /// Logarithmic function (model #1)
    Logarithmic { a1: f64, t1: f64 },
    /// Exponential function (model #2)
    Exponential { a1: f64, t1: f64 },
    /// Logarithmic + Exponential functions (model #3)
    LogarithmicExponential { a1: f64, t1: f64, a2: f64, t2: f64 },
    /// Two exponential functions (model #4)
    TwoExponentials { a1: f64, t1: f64, a2: f64, t2: f64 },
}

fn log_term(dt: f64, a: f64, t: f64) -> f64 {
    a * (1.0 + dt / t).ln()
}

fn exp_term(dt: f64, a: f64, t: f64) -> f64 {
    a * (1.0 - (-dt / t).exp())
}

impl PsdModel {
    /// Number of coefficients a model requires
    pub fn nb_coefficients(model: u8) -> Option<usize> {
        match model {
            0 => Some(0),
            1 | 2 => Some(2),
            3 | 4 => Some(4),
            _ => None,
        }
    }
    /// Builds [PsdModel] from its model number and coefficients
    /// (a1, t1, a2, t2). Coefficients that the model does not use are ignored.
    pub fn new(model: u8, coefficients: &[f64]) -> Result<Self, ParsingError> {
        let expected =
            Self::nb_coefficients(model).ok_or(ParsingError::InvalidModel(model.to_string()))?;
        if coefficients.len() < expected {
            return Err(ParsingError::InvalidModel(format!(
                "model #{} expects {} coefficients",
                model, expected
            )));
        }
        let c = coefficients;
        Ok(match model {
            0 => Self::PiecewiseLinear,
            1 => Self::Logarithmic { a1: c[0], t1: c[1] },
            2 => Self::Exponential { a1: c[0], t1: c[1] },
            3 => Self::LogarithmicExponential {
                a1: c[0],
                t1: c[1],
                a2: c[2],
                t2: c[3],
            },
            _ => Self::TwoExponentials {
                a1: c[0],
                t1: c[1],
                a2: c[2],
                t2: c[3],
            },
        })
    }
    /// Model number, as found in PSD catalogs
    pub fn model_number(&self) -> u8 {
        match self {
            Self::PiecewiseLinear => 0,
            Self::Logarithmic { .. } => 1,
            Self::Exponential { .. } => 2,
            Self::LogarithmicExponential { .. } => 3,
            Self::TwoExponentials { .. } => 4,
        }
    }
    /// Correction (mm), `dt` decimal years after the earthquake.
    /// The model is only defined for dt >= 0: callers should not
    /// evaluate it prior the earthquake.
    pub fn correction(&self, dt: f64) -> f64 {
        match *self {
            Self::PiecewiseLinear => 0.0,
            Self::Logarithmic { a1, t1 } => log_term(dt, a1, t1),
            Self::Exponential { a1, t1 } => exp_term(dt, a1, t1),
            Self::LogarithmicExponential { a1, t1, a2, t2 } => {
                log_term(dt, a1, t1) + exp_term(dt, a2, t2)
            },
            Self::TwoExponentials { a1, t1, a2, t2 } => {
                exp_term(dt, a1, t1) + exp_term(dt, a2, t2)
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::PsdModel;
    #[test]
    fn piecewise_linear() {
        let model = PsdModel::new(0, &[10.0, 1.0, 5.0, 2.0]).unwrap();
        assert_eq!(model, PsdModel::PiecewiseLinear);
        for dt in [0.0, 1.0, 12.5] {
            assert_eq!(model.correction(dt), 0.0);
        }
    }
    #[test]
    fn exponential() {
        let model = PsdModel::new(2, &[10.0, 1.0]).unwrap();
        assert!((model.correction(1.0) - 6.3212).abs() < 1.0E-4);
        assert!((model.correction(1.0) - 10.0 * (1.0 - (-1.0_f64).exp())).abs() < 1.0E-12);
        assert_eq!(model.correction(0.0), 0.0);
    }
    #[test]
    fn logarithmic() {
        let model = PsdModel::new(1, &[-192.03, 0.5969]).unwrap();
        let dt = 2.5;
        let expected = -192.03 * (1.0 + dt / 0.5969_f64).ln();
        assert!((model.correction(dt) - expected).abs() < 1.0E-9);
    }
    #[test]
    fn combined_models() {
        let (a1, t1, a2, t2) = (-192.03, 0.5969, -72.74, 0.0799);
        let dt = 1.75_f64;
        let model = PsdModel::new(3, &[a1, t1, a2, t2]).unwrap();
        let expected = a1 * (1.0 + dt / t1).ln() + a2 * (1.0 - (-dt / t2).exp());
        assert!((model.correction(dt) - expected).abs() < 1.0E-9);

        let model = PsdModel::new(4, &[a1, t1, a2, t2]).unwrap();
        let expected = a1 * (1.0 - (-dt / t1).exp()) + a2 * (1.0 - (-dt / t2).exp());
        assert!((model.correction(dt) - expected).abs() < 1.0E-9);
        assert_eq!(model.model_number(), 4);
    }
    #[test]
    fn invalid_models() {
        assert!(PsdModel::new(5, &[1.0, 1.0, 1.0, 1.0]).is_err());
        assert!(PsdModel::new(3, &[1.0, 1.0]).is_err());
        assert!(PsdModel::new(1, &[]).is_err());
    }
}
