use fixedbitset::FixedBitSet;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use std::fmt;

use crate::constants::{MAJORITY_PERCENTAGE, ROOT_VALUE};
use crate::{ChiSquareTest, Classifier, Id3Error, Learner, Sample};
use super::dtree_classifier::DecisionTreeClassifier;
use super::splitter::{self, Group};
use super::train_node::TrainNode;


/// The ID3 decision tree algorithm.
///
/// Given a sample of categorical records with boolean labels,
/// [`DecisionTree`] grows a multiway tree by repeatedly splitting
/// on the attribute with the largest information gain.
/// A split is kept only if it is significant under a chi-square test
/// at the desired confidence (pre-pruning).
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// # fn run(sample: Sample) -> Result<(), Id3Error> {
/// let tree = DecisionTreeBuilder::new()
///     .desired_confidence(0.95)
///     .build()?
///     .fit(&sample)?;
///
/// println!("size: {}, depth: {}", tree.size(), tree.depth());
/// for rule in tree.rules() {
///     println!("{rule}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTree {
    desired_confidence: f64,
    parallel_depth: usize,
    min_parallel_partition: usize,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        desired_confidence: f64,
        parallel_depth: usize,
        min_parallel_partition: usize,
    ) -> Self
    {
        Self { desired_confidence, parallel_depth, min_parallel_partition, }
    }


    /// Returns the desired confidence of the chi-square test.
    #[inline]
    pub fn desired_confidence(&self) -> f64 {
        self.desired_confidence
    }


    /// Grows a tree on every record of `sample`.
    pub fn fit(&self, sample: &Sample)
        -> Result<DecisionTreeClassifier, Id3Error>
    {
        let rows = (0..sample.records().len()).collect::<Vec<_>>();
        self.produce(sample, &rows)
    }


    /// Grows the subtree for the records in `rows`.
    ///
    /// `eligible` holds the positions (in `sample.attributes()`)
    /// of the attributes not yet used on the path from the root,
    /// and `value` is the attribute value that leads to this node.
    fn full_tree(
        &self,
        sample: &Sample,
        rows: Vec<usize>,
        eligible: FixedBitSet,
        value: &str,
        depth: usize,
    ) -> Result<TrainNode, Id3Error>
    {
        let total = rows.len();
        if total == 0 {
            return Err(Id3Error::EmptyPartition);
        }

        let records = sample.records();
        let positives = rows.iter()
            .filter(|&&row| records[row].label())
            .count();

        if positives == total {
            let label = format!("{value} => true");
            return Ok(TrainNode::leaf(true, 100f64, label, total));
        }
        if positives == 0 {
            let label = format!("{value} => false");
            return Ok(TrainNode::leaf(false, 0f64, label, total));
        }


        // From here on, the node is a leaf unless a split pays off.
        let confidence = 100f64 * positives as f64 / total as f64;
        let decision = confidence > MAJORITY_PERCENTAGE;
        let majority = || {
            let label = format!("{value} => [p={confidence:.2}] {decision}");
            TrainNode::leaf(decision, confidence, label, total)
        };


        let attributes = sample.attributes();
        let best = splitter::best_attribute(
            attributes, &eligible, records, &rows[..]
        )?;
        let Some((k, gain)) = best else {
            debug!(value, depth, "no attribute improves the partition");
            return Ok(majority());
        };
        let attribute = &attributes[k];


        let groups = splitter::partition(records, &rows[..], attribute)?;
        if groups.len() == 1 {
            debug!(value, attribute = attribute.name(), "single group");
            return Ok(majority());
        }

        if !self.is_significant(&groups[..], positives, total) {
            debug!(
                value,
                attribute = attribute.name(),
                gain,
                "split pruned by the chi-square test"
            );
            return Ok(majority());
        }


        let mut eligible = eligible;
        eligible.set(k, false);

        let grow = |group: Group| -> Result<(String, TrainNode), Id3Error> {
            let child = self.full_tree(
                sample, group.rows, eligible.clone(), &group.value, depth + 1
            )?;
            Ok((group.value, child))
        };

        let parallel = depth < self.parallel_depth
            && total >= self.min_parallel_partition;
        let children = if parallel {
            groups.into_par_iter()
                .map(&grow)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            groups.into_iter()
                .map(&grow)
                .collect::<Result<Vec<_>, _>>()?
        };


        let label = format!("Value={value} => Attribute={}", attribute.name());
        let node = TrainNode::branch(
            attribute.clone(), children, decision, confidence, label, total
        );
        Ok(node)
    }


    /// Returns `true` if splitting into `groups` is significant
    /// at the desired confidence.
    /// A degenerate test counts as not significant.
    fn is_significant(
        &self,
        groups: &[Group],
        positives: usize,
        total: usize,
    ) -> bool
    {
        if self.desired_confidence == 0f64 { return true; }

        let negatives = total - positives;
        let n_cells = 2 * groups.len();
        let mut observed = Vec::with_capacity(n_cells);
        let mut expected = Vec::with_capacity(n_cells);
        for group in groups {
            let size = group.len() as f64;
            observed.push(group.positives as f64);
            observed.push(group.negatives() as f64);
            expected.push(size * positives as f64 / total as f64);
            expected.push(size * negatives as f64 / total as f64);
        }

        let alpha = 1f64 - self.desired_confidence;
        match ChiSquareTest::new(&observed, &expected, groups.len() - 1) {
            Ok(test) => test.is_significant(alpha),
            Err(error) => {
                debug!(%error, "chi-square test treated as not significant");
                false
            },
        }
    }
}


impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "ID3 Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Desired confidence", format!("{}", self.desired_confidence)),
            ("Parallel depth", format!("{}", self.parallel_depth)),
            ("Min parallel partition", format!("{}", self.min_parallel_partition)),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 0. reject row positions outside the sample,
    /// 1. grow an owned `TrainNode` tree, in parallel near the root,
    /// 2. flatten it into the arena of `DecisionTreeClassifier`.
    #[instrument(skip_all, fields(n_records = rows.len()))]
    fn produce(&self, sample: &Sample, rows: &[usize])
        -> Result<Self::Hypothesis, Id3Error>
    {
        let n_records = sample.records().len();
        if let Some(&row) = rows.iter().find(|&&row| row >= n_records) {
            return Err(Id3Error::RowOutOfRange { row, n_records });
        }

        let mut eligible = FixedBitSet::with_capacity(sample.attributes().len());
        eligible.insert_range(..);

        let root = self.full_tree(sample, rows.to_vec(), eligible, ROOT_VALUE, 0)?;
        let tree = DecisionTreeClassifier::from_train_node(root)?;

        let mut training_error = 0_usize;
        for &row in rows {
            let record = &sample.records()[row];
            if tree.predict(record)? != record.label() {
                training_error += 1;
            }
        }
        info!(
            size = tree.size(),
            depth = tree.depth(),
            training_error,
            "grew decision tree"
        );
        Ok(tree)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Desired confidence: {}\n\
            - Parallel depth: {}\n\
            - Min parallel partition: {}\n\
            ----------\
            ",
            self.desired_confidence,
            self.parallel_depth,
            self.min_parallel_partition,
        )
    }
}
