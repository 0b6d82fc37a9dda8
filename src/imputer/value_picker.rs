use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::constants::SIGNIFICANT_PERCENTAGE;


/// Weighted sampler over the values of a categorical attribute.
///
/// The weights are the observed frequencies of the values,
/// kept as percentages of the observed mass
/// (e.g., `A = 10%, B = 20%, D = 70%`).
#[derive(Debug, Clone)]
pub struct ValuePicker {
    values: Vec<String>,
    percentages: Vec<f64>,
    sampler: WeightedIndex<usize>,
}


impl ValuePicker {
    /// Construct a new picker from `(value, count)` pairs.
    /// Returns `None` if every count is zero.
    pub fn new<I, S>(counts: I) -> Option<Self>
        where I: IntoIterator<Item = (S, usize)>,
              S: ToString,
    {
        let (values, counts): (Vec<String>, Vec<usize>) = counts.into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .unzip();

        let total = counts.iter().sum::<usize>();
        if total == 0 {
            return None;
        }

        let percentages = counts.iter()
            .map(|&count| 100f64 * count as f64 / total as f64)
            .collect::<Vec<_>>();
        let sampler = WeightedIndex::new(&counts).ok()?;

        Some(Self { values, percentages, sampler, })
    }


    /// Returns `true` if the most frequent value
    /// holds more than half of the observed mass.
    /// Otherwise, the attribute carries little signal
    /// and the caller may drop it.
    pub fn is_significant(&self) -> bool {
        self.percentages.iter()
            .copied()
            .any(|p| p > SIGNIFICANT_PERCENTAGE)
    }


    /// Draws a value according to the observed frequencies.
    pub fn pick<R>(&self, rng: &mut R) -> &str
        where R: Rng + ?Sized,
    {
        let k = self.sampler.sample(rng);
        &self.values[k]
    }


    /// Returns the most frequent value.
    /// Ties are broken by the order of the values.
    pub fn pick_max(&self) -> &str {
        let (k, _) = self.percentages.iter()
            .enumerate()
            .fold((0, f64::MIN), |(bk, bp), (k, &p)| {
                if p > bp { (k, p) } else { (bk, bp) }
            });
        &self.values[k]
    }


    /// Returns the pairs of a value and its percentage.
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter()
            .map(|value| value.as_str())
            .zip(self.percentages.iter().copied())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn percentages_sum_to_hundred() {
        let picker = ValuePicker::new([("A", 1), ("B", 2), ("D", 7)]).unwrap();
        let total = picker.percentages().map(|(_, p)| p).sum::<f64>();
        assert_abs_diff_eq!(total, 100.0, epsilon = 1e-9);
        assert_eq!(picker.pick_max(), "D");
        assert!(picker.is_significant());
    }

    #[test]
    fn flat_distribution_is_not_significant() {
        let picker = ValuePicker::new([("A", 5), ("B", 5)]).unwrap();
        assert!(!picker.is_significant());

        let picker = ValuePicker::new([("A", 4), ("B", 3), ("C", 3)]).unwrap();
        assert!(!picker.is_significant());
    }

    #[test]
    fn unseen_values_are_never_picked() {
        let picker = ValuePicker::new([("A", 0), ("B", 3), ("C", 0)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!((0..100).all(|_| picker.pick(&mut rng) == "B"));
    }

    #[test]
    fn no_observation() {
        assert!(ValuePicker::new([("A", 0), ("B", 0)]).is_none());
        assert!(ValuePicker::new(Vec::<(String, usize)>::new()).is_none());
    }
}
