//! Chi-square goodness-of-fit test.
//!
//! The decision tree uses this test as a pre-pruning gate:
//! a split is accepted only if the class counts in its groups
//! differ significantly from the counts expected when the
//! split attribute has no effect on the label.

use crate::constants::{
    MAX_GAMMA_ITERATIONS,
    GAMMA_EPSILON,
    GAMMA_FLOOR,
};
use crate::Id3Error;


const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];


/// Result of a chi-square goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareTest {
    statistic: f64,
    degrees_of_freedom: usize,
    p_value: f64,
}


impl ChiSquareTest {
    /// Runs the test for `observed` against `expected` frequencies.
    ///
    /// The statistic is `Σ (O - E)² / E` and the p-value is
    /// `P(χ²(df) ≥ statistic)`.
    /// Fails if the slices differ in length or are empty,
    /// if `degrees_of_freedom` is zero,
    /// or if an expected frequency is not positive.
    pub fn new(
        observed: &[f64],
        expected: &[f64],
        degrees_of_freedom: usize,
    ) -> Result<Self, Id3Error>
    {
        if observed.len() != expected.len() {
            let reason = format!(
                "{} observed cells against {} expected cells",
                observed.len(),
                expected.len(),
            );
            return Err(Id3Error::InvalidChiSquare { reason });
        }
        if observed.is_empty() {
            let reason = "no cell to compare".to_string();
            return Err(Id3Error::InvalidChiSquare { reason });
        }
        if degrees_of_freedom == 0 {
            let reason = "zero degrees of freedom".to_string();
            return Err(Id3Error::InvalidChiSquare { reason });
        }
        if let Some(e) = expected.iter().find(|e| !(e.is_finite() && **e > 0f64)) {
            let reason = format!("expected frequency {e} is not positive");
            return Err(Id3Error::InvalidChiSquare { reason });
        }
        if let Some(o) = observed.iter().find(|o| !(o.is_finite() && **o >= 0f64)) {
            let reason = format!("observed frequency {o} is negative");
            return Err(Id3Error::InvalidChiSquare { reason });
        }

        let statistic = observed.iter()
            .zip(expected)
            .map(|(o, e)| (o - e).powi(2) / e)
            .sum::<f64>();

        let p_value = upper_regularized_gamma(
            degrees_of_freedom as f64 / 2f64,
            statistic / 2f64,
        );

        Ok(Self { statistic, degrees_of_freedom, p_value, })
    }


    /// Returns the chi-square statistic.
    #[inline]
    pub fn statistic(&self) -> f64 {
        self.statistic
    }


    /// Returns the degrees of freedom.
    #[inline]
    pub fn degrees_of_freedom(&self) -> usize {
        self.degrees_of_freedom
    }


    /// Returns the p-value.
    #[inline]
    pub fn p_value(&self) -> f64 {
        self.p_value
    }


    /// Returns `true` if the null hypothesis is rejected
    /// at significance level `alpha`.
    #[inline]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}


/// `ln Γ(x)` for `x > 0` by the Lanczos approximation.
fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula.
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1f64 - x);
    }

    let x = x - 1f64;
    let series = LANCZOS_COEFFICIENTS[1..].iter()
        .enumerate()
        .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, c)| {
            acc + c / (x + i as f64 + 1f64)
        });
    let t = x + LANCZOS_G + 0.5;

    0.5 * (2f64 * std::f64::consts::PI).ln()
        + (x + 0.5) * t.ln()
        - t
        + series.ln()
}


/// `Q(a, x) = Γ(a, x) / Γ(a)`, the upper regularized gamma function.
fn upper_regularized_gamma(a: f64, x: f64) -> f64 {
    if x <= 0f64 {
        return 1f64;
    }

    let q = if x < a + 1f64 {
        1f64 - lower_gamma_series(a, x)
    } else {
        upper_gamma_continued_fraction(a, x)
    };
    q.clamp(0f64, 1f64)
}


/// `P(a, x)` by its power series. Converges fast for `x < a + 1`.
fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let mut ap = a;
    let mut term = 1f64 / a;
    let mut sum = term;
    for _ in 0..MAX_GAMMA_ITERATIONS {
        ap += 1f64;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * GAMMA_EPSILON {
            break;
        }
    }

    sum * (-x + a * x.ln() - ln_gamma(a)).exp()
}


/// `Q(a, x)` by the modified Lentz continued fraction.
/// Converges fast for `x >= a + 1`.
fn upper_gamma_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1f64 - a;
    let mut c = 1f64 / GAMMA_FLOOR;
    let mut d = 1f64 / b;
    let mut h = d;
    for i in 1..=MAX_GAMMA_ITERATIONS {
        let i = i as f64;
        let an = -i * (i - a);
        b += 2f64;

        d = an * d + b;
        if d.abs() < GAMMA_FLOOR { d = GAMMA_FLOOR; }
        c = b + an / c;
        if c.abs() < GAMMA_FLOOR { c = GAMMA_FLOOR; }

        d = 1f64 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1f64).abs() < GAMMA_EPSILON {
            break;
        }
    }

    (-x + a * x.ln() - ln_gamma(a)).exp() * h
}
