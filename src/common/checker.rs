//! This file defines some functions that checks some pre-conditions
//! E.g., the range of the desired confidence.

use crate::Id3Error;


/// Check whether the desired confidence lies in `[0, 1)`.
#[inline(always)]
pub(crate) fn check_confidence(confidence: f64) -> Result<(), Id3Error> {
    if (0f64..1f64).contains(&confidence) {
        Ok(())
    } else {
        Err(Id3Error::InvalidConfidence { confidence })
    }
}


/// Check whether the ensemble has at least one member.
#[inline(always)]
pub(crate) fn check_ensemble_size(size: usize) -> Result<(), Id3Error> {
    if size > 0 {
        Ok(())
    } else {
        Err(Id3Error::InvalidEnsembleSize { size })
    }
}
