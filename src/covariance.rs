//! Compact symmetric 3x3 covariance matrices
//!
//! Only the upper triangle is stored, so symmetry holds by construction.
//! The full matrix is rebuilt on demand.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Matrix3;

/// Number of independent entries in a symmetric 3x3 matrix
pub const COVARIANCE_LEN: usize = 6;

/// Upper triangle (C11, C12, C13, C22, C23, C33) of a symmetric 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Covariance {
    c11: f64,
    c12: f64,
    c13: f64,
    c22: f64,
    c23: f64,
    c33: f64,
}

impl Covariance {
    /// Creates a covariance from its six upper-triangle entries
    pub fn new(c11: f64, c12: f64, c13: f64, c22: f64, c23: f64, c33: f64) -> Self {
        Self {
            c11,
            c12,
            c13,
            c22,
            c23,
            c33,
        }
    }

    /// Creates a covariance from a slice ordered C11, C12, C13, C22, C23, C33.
    ///
    /// Values past the sixth are ignored.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the slice holds fewer than six values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [c11, c12, c13, c22, c23, c33, ..] => Ok(Self::new(*c11, *c12, *c13, *c22, *c23, *c33)),
            _ => Err(Error::OutOfRange {
                expected: COVARIANCE_LEN,
                actual: values.len(),
            }),
        }
    }

    /// Returns the six entries in canonical order
    pub fn values(&self) -> [f64; COVARIANCE_LEN] {
        [self.c11, self.c12, self.c13, self.c22, self.c23, self.c33]
    }

    /// Rebuilds the full symmetric matrix
    pub fn to_matrix(&self) -> Matrix3 {
        [
            [self.c11, self.c12, self.c13],
            [self.c12, self.c22, self.c23],
            [self.c13, self.c23, self.c33],
        ]
    }

    pub fn c11(&self) -> f64 {
        self.c11
    }

    pub fn c12(&self) -> f64 {
        self.c12
    }

    pub fn c13(&self) -> f64 {
        self.c13
    }

    pub fn c22(&self) -> f64 {
        self.c22
    }

    pub fn c23(&self) -> f64 {
        self.c23
    }

    pub fn c33(&self) -> f64 {
        self.c33
    }
}

impl From<[f64; COVARIANCE_LEN]> for Covariance {
    fn from(v: [f64; COVARIANCE_LEN]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

impl TryFrom<&[f64]> for Covariance {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

/// Column-wise layout of a covariance array: one vector per matrix entry,
/// each index-aligned with the source slice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CovarianceColumns {
    pub c11: Vec<f64>,
    pub c12: Vec<f64>,
    pub c13: Vec<f64>,
    pub c22: Vec<f64>,
    pub c23: Vec<f64>,
    pub c33: Vec<f64>,
}

impl CovarianceColumns {
    /// Transposes an array of covariances into six parallel columns
    pub fn from_covariances(covariances: &[Covariance]) -> Self {
        let column = |f: fn(&Covariance) -> f64| covariances.iter().map(f).collect::<Vec<_>>();

        Self {
            c11: column(Covariance::c11),
            c12: column(Covariance::c12),
            c13: column(Covariance::c13),
            c22: column(Covariance::c22),
            c23: column(Covariance::c23),
            c33: column(Covariance::c33),
        }
    }

    /// Number of covariances represented
    pub fn len(&self) -> usize {
        self.c11.len()
    }

    /// Returns whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.c11.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_matrix() {
        let cov = Covariance::new(1.0, 0.0, 0.0, 2.0, 0.0, 3.0);
        assert_eq!(
            cov.to_matrix(),
            [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]
        );
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let cov = Covariance::new(4.0, 0.5, -1.25, 9.0, 2.5, 16.0);
        let m = cov.to_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
        assert_eq!(m[0][1], 0.5);
        assert_eq!(m[0][2], -1.25);
        assert_eq!(m[1][2], 2.5);
    }

    #[test]
    fn test_values_round_trip() {
        let cov = Covariance::new(1.5, -0.1, 0.2, 2.5, 0.3, 3.5);
        let v = cov.values();
        let rebuilt = Covariance::new(v[0], v[1], v[2], v[3], v[4], v[5]);
        assert_eq!(rebuilt.to_matrix(), cov.to_matrix());
        assert_eq!(Covariance::from(v), cov);
    }

    #[test]
    fn test_from_slice() {
        let cov = Covariance::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(cov.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let longer = Covariance::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(longer, cov);
    }

    #[test]
    fn test_from_short_slice_fails() {
        let err = Covariance::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { expected: 6, actual: 3 }));

        let short: &[f64] = &[];
        assert!(Covariance::try_from(short).is_err());
    }

    #[test]
    fn test_columns_preserve_order() {
        let covs = [
            Covariance::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
            Covariance::new(10.0, 20.0, 30.0, 40.0, 50.0, 60.0),
        ];
        let cols = CovarianceColumns::from_covariances(&covs);

        assert_eq!(cols.len(), 2);
        assert_eq!(cols.c11, vec![1.0, 10.0]);
        assert_eq!(cols.c12, vec![2.0, 20.0]);
        assert_eq!(cols.c13, vec![3.0, 30.0]);
        assert_eq!(cols.c22, vec![4.0, 40.0]);
        assert_eq!(cols.c23, vec![5.0, 50.0]);
        assert_eq!(cols.c33, vec![6.0, 60.0]);
    }

    #[test]
    fn test_columns_empty() {
        let cols = CovarianceColumns::from_covariances(&[]);
        assert!(cols.is_empty());
        assert!(cols.c33.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let cov = Covariance::new(1.0, 0.1, 0.2, 2.0, 0.3, 3.0);
        let json = serde_json::to_string(&cov).unwrap();
        assert!(json.contains("\"c12\":0.1"));
        let back: Covariance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cov);
    }
}
