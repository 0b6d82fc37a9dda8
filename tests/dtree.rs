use minitrees::prelude::*;
use minitrees::decision_tree::information_gain;

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;


// Toy example
//
//   A | B | class
//  ---+---+-------
//   x | u |  T
//   x | v |  T
//   y | u |  F
//   y | v |  F
//
// `A` separates the classes (gain 1) and `B` says nothing (gain 0).
fn ab_sample() -> Sample {
    let attributes = vec![
        Attribute::new(0, "A", ["x", "y"]),
        Attribute::new(1, "B", ["u", "v"]),
    ];
    let records = vec![
        Record::new(["x", "u"], true),
        Record::new(["x", "v"], true),
        Record::new(["y", "u"], false),
        Record::new(["y", "v"], false),
    ];
    Sample::new(attributes, records).unwrap()
}


// `label = a0 == "1" && a1 == "1"`, with a noisy third attribute.
fn conjunction_sample(n_records: usize, seed: u64) -> Sample {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let colors = ["r", "g", "b"];
    let attributes = vec![
        Attribute::new(0, "a0", ["0", "1"]),
        Attribute::new(1, "a1", ["0", "1"]),
        Attribute::new(2, "color", colors),
    ];
    let records = (0..n_records)
        .map(|_| {
            let a0 = rng.gen_bool(0.5);
            let a1 = rng.gen_bool(0.5);
            let color = colors[rng.gen_range(0..3)];
            let values = [
                if a0 { "1" } else { "0" },
                if a1 { "1" } else { "0" },
                color,
            ];
            Record::new(values, a0 && a1)
        })
        .collect();
    Sample::new(attributes, records).unwrap()
}


#[cfg(test)]
pub mod dtree_tests {
    use super::*;

    #[test]
    fn gains_of_toy_example() {
        let sample = ab_sample();
        let rows = (0..4).collect::<Vec<_>>();
        let records = sample.records();

        let a = information_gain(records, &rows, &sample.attributes()[0]).unwrap();
        let b = information_gain(records, &rows, &sample.attributes()[1]).unwrap();
        assert_abs_diff_eq!(a, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-12);
    }


    #[test]
    fn toy_example_splits_on_a() {
        let sample = ab_sample();
        let tree = DecisionTreeBuilder::new()
            .desired_confidence(0.0)
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();
        println!("{tree}");

        assert_eq!(tree.size(), 3);
        assert_eq!(tree.depth(), 2);
        match tree.root() {
            minitrees::decision_tree::Node::Branch(branch) => {
                assert_eq!(branch.attribute().name(), "A");
            },
            _ => panic!("the root must split on `A`"),
        }

        let x = Record::new(["x", "v"], false);
        let y = Record::new(["y", "u"], true);
        assert!(tree.predict(&x).unwrap());
        assert!(!tree.predict(&y).unwrap());
    }


    #[test]
    fn uniform_labels_give_a_single_leaf() {
        for label in [true, false] {
            let attributes = vec![Attribute::new(0, "A", ["x", "y", "z"])];
            let records = ["x", "y", "z", "x"].into_iter()
                .map(|v| Record::new([v], label))
                .collect();
            let sample = Sample::new(attributes, records).unwrap();

            for confidence in [0.0, 0.5, 0.95] {
                let tree = DecisionTreeBuilder::new()
                    .desired_confidence(confidence)
                    .build()
                    .unwrap()
                    .fit(&sample)
                    .unwrap();
                assert_eq!(tree.size(), 1);
                assert_eq!(tree.depth(), 1);
                assert!(tree.root().is_leaf());
                assert_eq!(tree.root().decision(), label);
            }
        }
    }


    #[test]
    fn empty_partition_fails() {
        let sample = ab_sample();
        let learner = DecisionTreeBuilder::new().build().unwrap();
        let result = learner.produce(&sample, &[]);
        assert!(matches!(result, Err(Id3Error::EmptyPartition)));

        let attributes = vec![Attribute::new(0, "A", ["x"])];
        let empty = Sample::new(attributes, Vec::new()).unwrap();
        assert!(matches!(learner.fit(&empty), Err(Id3Error::EmptyPartition)));
    }


    #[test]
    fn schema_mismatch_fails() {
        let attributes = vec![
            Attribute::new(0, "A", ["x"]),
            Attribute::new(5, "B", ["u"]),
        ];
        let records = vec![Record::new(["x", "u"], true)];
        let result = Sample::new(attributes, records);
        assert!(matches!(
            result,
            Err(Id3Error::AttributeOutOfRange { index: 5, n_columns: 2, .. })
        ));

        let attributes = vec![Attribute::new(0, "A", ["x"])];
        let records = vec![
            Record::new(["x", "u"], true),
            Record::new(["x"], false),
        ];
        let result = Sample::new(attributes, records);
        assert!(matches!(
            result,
            Err(Id3Error::ColumnCountMismatch { record: 1, expected: 2, got: 1 })
        ));
    }


    #[test]
    fn unseen_value_falls_back_to_majority() {
        let attributes = vec![
            Attribute::new(0, "A", ["x", "y", "z"]),
        ];
        let records = vec![
            Record::new(["x"], true),
            Record::new(["x"], true),
            Record::new(["x"], true),
            Record::new(["y"], false),
        ];
        let sample = Sample::new(attributes, records).unwrap();
        let tree = DecisionTreeBuilder::new()
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();

        assert_eq!(tree.size(), 3);
        let z = Record::new(["z"], false);
        assert!(tree.predict(&z).unwrap());
        assert_abs_diff_eq!(tree.confidence(&z).unwrap(), 75.0);
    }


    #[test]
    fn chi_square_prunes_weak_splits() {
        // x: 3 T / 2 F, y: 2 T / 3 F.
        // chi^2 = 0.4 with one degree of freedom, p ~ 0.527.
        let attributes = vec![Attribute::new(0, "A", ["x", "y"])];
        let labels = [
            ("x", true), ("x", true), ("x", true), ("x", false), ("x", false),
            ("y", true), ("y", true), ("y", false), ("y", false), ("y", false),
        ];
        let records = labels.iter()
            .map(|&(v, y)| Record::new([v], y))
            .collect();
        let sample = Sample::new(attributes, records).unwrap();

        let size_at = |confidence: f64| {
            DecisionTreeBuilder::new()
                .desired_confidence(confidence)
                .build()
                .unwrap()
                .fit(&sample)
                .unwrap()
                .size()
        };

        assert_eq!(size_at(0.0), 3);
        assert_eq!(size_at(0.4), 3);
        assert_eq!(size_at(0.95), 1);
    }


    #[test]
    fn invalid_confidence_is_rejected() {
        for confidence in [-0.1, 1.0, 1.5] {
            let result = DecisionTreeBuilder::new()
                .desired_confidence(confidence)
                .build();
            assert!(matches!(result, Err(Id3Error::InvalidConfidence { .. })));
        }
    }


    #[test]
    fn sequential_and_parallel_growth_agree() {
        let sample = conjunction_sample(400, 1234);

        let sequential = DecisionTreeBuilder::new()
            .parallel_depth(0)
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();
        let parallel = DecisionTreeBuilder::new()
            .parallel_depth(8)
            .min_parallel_partition(1)
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();

        let labels = sample.records()
            .iter()
            .map(|record| record.label())
            .collect::<Vec<_>>();
        assert_eq!(sequential.predict_all(sample.records()).unwrap(), labels);
        assert_eq!(parallel.predict_all(sample.records()).unwrap(), labels);
        assert_eq!(sequential.depth(), 3);
        assert_eq!(parallel.depth(), 3);
    }


    #[test]
    fn bootstrap_rows_may_repeat() {
        let sample = ab_sample();
        let learner = DecisionTreeBuilder::new().build().unwrap();
        let tree = learner.produce(&sample, &[0, 0, 2, 2, 2]).unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.root().n_records(), 5);
    }


    #[test]
    fn rows_outside_the_sample_are_rejected() {
        let sample = ab_sample();
        let learner = DecisionTreeBuilder::new().build().unwrap();
        let result = learner.produce(&sample, &[0, 1, 4]);
        assert!(matches!(
            result,
            Err(Id3Error::RowOutOfRange { row: 4, n_records: 4 })
        ));
    }


    #[test]
    fn attributes_sharing_a_column_are_rejected() {
        let attributes = vec![
            Attribute::new(0, "A", ["x", "y"]),
            Attribute::new(0, "A2", ["x", "y"]),
        ];
        let records = vec![
            Record::new(["x"], true),
            Record::new(["?"], false),
            Record::new(["y"], false),
        ];
        let result = Sample::new(attributes, records);
        assert!(matches!(
            result,
            Err(Id3Error::DuplicateAttributeIndex { index: 0, ref attribute })
                if attribute == "A2"
        ));
    }
}
