use serde::{Serialize, Deserialize};
use tracing::debug;

use std::fmt;

use crate::{Classifier, Id3Error, Record};


/// The vote of an ensemble on a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vote {
    /// Number of members predicting `true`.
    pub yes: usize,
    /// Number of members predicting `false`.
    pub no: usize,
}


impl Vote {
    /// Returns the majority decision. A tie is `false`.
    #[inline]
    pub fn decision(&self) -> bool {
        self.yes > self.no
    }


    /// Returns the difference between the two vote counts.
    #[inline]
    pub fn margin(&self) -> usize {
        self.yes.abs_diff(self.no)
    }


    /// Returns `true` if the majority won by exactly one vote.
    #[inline]
    pub fn is_low_confidence(&self) -> bool {
        self.margin() == 1
    }
}


impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (yes: {}, no: {})", self.decision(), self.yes, self.no)
    }
}


/// An unweighted majority vote over hypotheses.
/// [`Bagging`](crate::Bagging) returns this struct.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ensemble<H> {
    members: Vec<H>,
}


impl<H> Ensemble<H> {
    /// Construct a new `Ensemble` from given members.
    #[inline]
    pub fn from_members(members: Vec<H>) -> Self {
        Self { members }
    }


    /// Returns the members of this ensemble.
    #[inline]
    pub fn members(&self) -> &[H] {
        &self.members[..]
    }


    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }


    /// Returns `true` if the ensemble has no member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }


    /// Decompose the ensemble into its members.
    #[inline]
    pub fn decompose(self) -> Vec<H> {
        self.members
    }
}


impl<H> Ensemble<H>
    where H: Classifier,
{
    /// Counts the votes of the members on `record`.
    pub fn vote(&self, record: &Record) -> Result<Vote, Id3Error> {
        if self.members.is_empty() {
            return Err(Id3Error::EmptyEnsemble);
        }

        let mut vote = Vote { yes: 0, no: 0 };
        for member in self.members.iter() {
            if member.predict(record)? {
                vote.yes += 1;
            } else {
                vote.no += 1;
            }
        }

        if vote.is_low_confidence() {
            debug!(yes = vote.yes, no = vote.no, "low-confidence vote");
        }
        Ok(vote)
    }
}


impl<H> Classifier for Ensemble<H>
    where H: Classifier,
{
    /// Returns the percentage of members predicting `true`.
    fn confidence(&self, record: &Record) -> Result<f64, Id3Error> {
        let vote = self.vote(record)?;
        Ok(100f64 * vote.yes as f64 / self.members.len() as f64)
    }


    fn predict(&self, record: &Record) -> Result<bool, Id3Error> {
        self.vote(record)
            .map(|vote| vote.decision())
    }
}
