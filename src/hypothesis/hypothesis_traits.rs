use crate::{Id3Error, Record};
use crate::constants::MAJORITY_PERCENTAGE;


/// A trait that defines the behavor of classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence that `record` is positive,
    /// as a percentage in `[0, 100]`.
    fn confidence(&self, record: &Record) -> Result<f64, Id3Error>;


    /// Predicts the label of `record`.
    fn predict(&self, record: &Record) -> Result<bool, Id3Error> {
        let conf = self.confidence(record)?;
        Ok(conf > MAJORITY_PERCENTAGE)
    }


    /// Computes the confidence of all `records`.
    fn confidence_all(&self, records: &[Record])
        -> Result<Vec<f64>, Id3Error>
    {
        records.iter()
            .map(|record| self.confidence(record))
            .collect()
    }


    /// Predicts the labels of all `records`.
    fn predict_all(&self, records: &[Record])
        -> Result<Vec<bool>, Id3Error>
    {
        records.iter()
            .map(|record| self.predict(record))
            .collect()
    }
}
