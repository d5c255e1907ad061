//! Degree-2 polynomial regression pipeline
//!
//! Three stages, each fitted on training data only:
//! 1. [`PolynomialFeatures`] expands a scalar `x` into `[x, x²]`
//! 2. [`StandardScaler`] centers each term and scales it to unit variance
//! 3. [`LinearRegression`] fits ordinary least squares with an intercept
//!
//! Standardizing before the solve keeps the normal equations well conditioned
//! when `x²` is orders of magnitude larger than `x`.

use serde::{Deserialize, Serialize};

use super::error::ForecastError;

/// Number of expanded feature terms
const TERMS: usize = 2;

/// Relative tolerance below which the normal equations are treated as singular
const SINGULAR_TOLERANCE: f64 = 1e-12;

type Terms = [f64; TERMS];

/// Expands a scalar feature into its polynomial terms `[x, x²]`
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialFeatures;

impl PolynomialFeatures {
    pub fn expand(&self, x: f64) -> Terms {
        [x, x * x]
    }

    pub fn transform(&self, xs: &[f64]) -> Vec<Terms> {
        xs.iter().map(|&x| self.expand(x)).collect()
    }
}

/// Per-column z-score scaling.
///
/// Uses the population standard deviation. A column with zero variance keeps
/// a scale of 1 so it is only centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Terms,
    scale: Terms,
}

impl StandardScaler {
    pub fn fit(rows: &[Terms]) -> Result<Self, ForecastError> {
        if rows.is_empty() {
            return Err(ForecastError::EmptyTrainingSet);
        }

        let n = rows.len() as f64;
        let mut mean = [0.0; TERMS];
        let mut scale = [1.0; TERMS];

        for col in 0..TERMS {
            mean[col] = rows.iter().map(|r| r[col]).sum::<f64>() / n;
            let variance = rows
                .iter()
                .map(|r| (r[col] - mean[col]).powi(2))
                .sum::<f64>()
                / n;
            let std_dev = variance.sqrt();

            if std_dev > 0.0 {
                scale[col] = std_dev;
            }
        }

        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> Terms {
        self.mean
    }

    pub fn scale(&self) -> Terms {
        self.scale
    }

    pub fn transform_row(&self, row: &Terms) -> Terms {
        let mut out = [0.0; TERMS];
        for col in 0..TERMS {
            out[col] = (row[col] - self.mean[col]) / self.scale[col];
        }
        out
    }

    pub fn transform(&self, rows: &[Terms]) -> Vec<Terms> {
        rows.iter().map(|r| self.transform_row(r)).collect()
    }
}

/// Ordinary least squares with an intercept.
///
/// Rank-deficient systems resolve to the minimum-norm solution instead of
/// failing, so any finite training set yields a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    intercept: f64,
    coefficients: Terms,
}

impl LinearRegression {
    pub fn fit(rows: &[Terms], targets: &[f64]) -> Result<Self, ForecastError> {
        if rows.len() != targets.len() {
            return Err(ForecastError::LengthMismatch {
                features: rows.len(),
                targets: targets.len(),
            });
        }
        if rows.is_empty() {
            return Err(ForecastError::EmptyTrainingSet);
        }

        let n = rows.len() as f64;
        let mut x_mean = [0.0; TERMS];
        for col in 0..TERMS {
            x_mean[col] = rows.iter().map(|r| r[col]).sum::<f64>() / n;
        }
        let y_mean = targets.iter().sum::<f64>() / n;

        // Normal equations on centered data: G b = r
        let mut gram = [[0.0; TERMS]; TERMS];
        let mut rhs = [0.0; TERMS];
        for (row, &y) in rows.iter().zip(targets) {
            let centered = [row[0] - x_mean[0], row[1] - x_mean[1]];
            let y = y - y_mean;
            for i in 0..TERMS {
                rhs[i] += centered[i] * y;
                for j in 0..TERMS {
                    gram[i][j] += centered[i] * centered[j];
                }
            }
        }

        let coefficients = solve_symmetric_2x2(&gram, &rhs);
        let intercept = y_mean - coefficients[0] * x_mean[0] - coefficients[1] * x_mean[1];

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> Terms {
        self.coefficients
    }

    pub fn predict_row(&self, row: &Terms) -> f64 {
        self.intercept + self.coefficients[0] * row[0] + self.coefficients[1] * row[1]
    }
}

/// Solve `G b = r` for a symmetric positive semi-definite 2x2 `G`.
///
/// Falls back to the pseudo-inverse when `G` is singular: for a rank-1 matrix
/// `G⁺ = G / trace(G)²`, and for the zero matrix the solution is zero.
fn solve_symmetric_2x2(gram: &[[f64; TERMS]; TERMS], rhs: &Terms) -> Terms {
    let [[a, b], [_, d]] = *gram;
    let det = a * d - b * b;
    let trace = a + d;

    if trace <= 0.0 {
        return [0.0; TERMS];
    }

    if det > SINGULAR_TOLERANCE * trace * trace {
        return [(d * rhs[0] - b * rhs[1]) / det, (a * rhs[1] - b * rhs[0]) / det];
    }

    let t2 = trace * trace;
    [(a * rhs[0] + b * rhs[1]) / t2, (b * rhs[0] + d * rhs[1]) / t2]
}

/// Expansion, scaling and regression chained into a single fitted model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticPipeline {
    scaler: StandardScaler,
    regression: LinearRegression,
}

impl QuadraticPipeline {
    /// Fit the pipeline to `(x, y)` pairs
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, ForecastError> {
        let expanded = PolynomialFeatures.transform(xs);
        let scaler = StandardScaler::fit(&expanded)?;
        let scaled = scaler.transform(&expanded);
        let regression = LinearRegression::fit(&scaled, ys)?;

        Ok(Self { scaler, regression })
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        let scaled = self.scaler.transform_row(&PolynomialFeatures.expand(x));
        self.regression.predict_row(&scaled)
    }

    pub fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }
}
