//! Textual form of a fitted model.

use std::fmt;

use ndarray::ArrayView1;

use crate::data::RegressionType;

/// Fitted equation, rendered through [`Display`](fmt::Display).
///
/// - linear: `y = b0 + b1(x_1) + ... + bn(x_n)`
/// - quadratic: `y = b0 + b1(x_1) + b2(x_1)² + ... + b2n(x_n)²`
#[derive(Debug, Clone, Copy)]
pub struct Equation<'a> {
    regression_type: RegressionType,
    beta: ArrayView1<'a, f64>,
}

impl<'a> Equation<'a> {
    pub fn new(regression_type: RegressionType, beta: ArrayView1<'a, f64>) -> Self {
        Self {
            regression_type,
            beta,
        }
    }
}

impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.beta.iter();
        let Some(bias) = terms.next() else {
            return write!(f, "y = 0");
        };

        write!(f, "y = {bias}")?;
        for (j, weight) in terms.enumerate() {
            match self.regression_type {
                RegressionType::Linear => write!(f, " + {weight}(x_{})", j + 1)?,
                RegressionType::Quadratic if j % 2 == 0 => {
                    write!(f, " + {weight}(x_{})", j / 2 + 1)?
                }
                RegressionType::Quadratic => write!(f, " + {weight}(x_{})²", j / 2 + 1)?,
            }
        }
        Ok(())
    }
}
