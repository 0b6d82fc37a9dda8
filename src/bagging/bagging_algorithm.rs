use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use tracing::{info, instrument};

use std::fmt;

use crate::common::checker;
use crate::constants::{DEFAULT_BAGGING_SEED, DEFAULT_ENSEMBLE_SIZE};
use crate::{Id3Error, Learner, Sample};
use super::ensemble::Ensemble;


/// Bootstrap aggregation.
///
/// Each member of the ensemble is produced by the given [`Learner`]
/// on a bootstrap resample of the training records:
/// as many records as the sample holds, drawn uniformly with replacement.
/// The resample seeds are drawn from a master generator,
/// so a fixed seed yields the same ensemble
/// regardless of the thread schedule.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// # fn run(sample: Sample) -> Result<(), Id3Error> {
/// let tree = DecisionTreeBuilder::new()
///     .desired_confidence(0.95)
///     .build()?;
///
/// let ensemble = Bagging::init(&sample)
///     .ensemble_size(20)
///     .seed(7)
///     .run(&tree)?;
///
/// let vote = ensemble.vote(&sample.records()[0])?;
/// println!("{vote}");
/// # Ok(())
/// # }
/// ```
pub struct Bagging<'a> {
    sample: &'a Sample,
    ensemble_size: usize,
    seed: u64,
}


impl<'a> Bagging<'a> {
    /// Initialize [`Bagging`] for `sample`.
    /// By default, the parameters are set as follows;
    /// ```text
    /// ensemble_size: DEFAULT_ENSEMBLE_SIZE == 10,
    /// seed: DEFAULT_BAGGING_SEED == 42,
    /// ```
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            ensemble_size: DEFAULT_ENSEMBLE_SIZE,
            seed: DEFAULT_BAGGING_SEED,
        }
    }


    /// Set the number of members.
    pub fn ensemble_size(mut self, size: usize) -> Self {
        self.ensemble_size = size;
        self
    }


    /// Set the seed of the master generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Produces the members in parallel and returns the ensemble.
    /// Fails if the ensemble size is zero,
    /// or if the learner fails on some resample.
    #[instrument(skip_all, fields(ensemble_size = self.ensemble_size, seed = self.seed))]
    pub fn run<L>(&self, learner: &L)
        -> Result<Ensemble<L::Hypothesis>, Id3Error>
        where L: Learner + Sync,
              L::Hypothesis: Send,
    {
        checker::check_ensemble_size(self.ensemble_size)?;

        let n_records = self.sample.records().len();
        if n_records == 0 {
            return Err(Id3Error::EmptyPartition);
        }

        let mut master = ChaCha8Rng::seed_from_u64(self.seed);
        let seeds = (0..self.ensemble_size)
            .map(|_| master.gen::<u64>())
            .collect::<Vec<_>>();

        let members = seeds.into_par_iter()
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let rows = bootstrap_sample(n_records, &mut rng);
                learner.produce(self.sample, &rows[..])
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            learner = learner.name(),
            members = members.len(),
            "built bagging ensemble"
        );
        Ok(Ensemble::from_members(members))
    }
}


/// Draws `n_records` row positions uniformly with replacement.
fn bootstrap_sample<R>(n_records: usize, rng: &mut R) -> Vec<usize>
    where R: Rng + ?Sized,
{
    let uniform = Uniform::from(0..n_records);
    (0..n_records)
        .map(|_| uniform.sample(rng))
        .collect()
}


impl fmt::Display for Bagging<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_records, n_attributes) = self.sample.shape();
        write!(
            f,
            "\
            ----------\n\
            # Bagging\n\n\
            - # of records: {n_records}\n\
            - # of attributes: {n_attributes}\n\
            - Ensemble size: {}\n\
            - Seed: {}\n\
            ----------\
            ",
            self.ensemble_size,
            self.seed,
        )
    }
}
