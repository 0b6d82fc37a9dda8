use minitrees::prelude::*;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;


fn random_sample(n_records: usize, seed: u64) -> Sample {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let domains = [
        vec!["a", "b"],
        vec!["c", "d", "e"],
        vec!["f", "g", "h", "i"],
    ];
    let attributes = domains.iter()
        .enumerate()
        .map(|(k, domain)| Attribute::new(k, format!("attr{k}"), domain.iter()))
        .collect::<Vec<_>>();
    let records = (0..n_records)
        .map(|_| {
            let values = domains.iter()
                .map(|domain| domain[rng.gen_range(0..domain.len())])
                .collect::<Vec<_>>();
            let label = values[0] == "a" && values[1] != "e" || values[2] == "i";
            let label = if rng.gen_bool(0.1) { !label } else { label };
            Record::new(values, label)
        })
        .collect();
    Sample::new(attributes, records).unwrap()
}


#[cfg(test)]
pub mod rule_tests {
    use super::*;

    #[test]
    fn rules_partition_the_training_records() {
        for confidence in [0.0, 0.9, 0.99] {
            let sample = random_sample(300, 17);
            let tree = DecisionTreeBuilder::new()
                .desired_confidence(confidence)
                .build()
                .unwrap()
                .fit(&sample)
                .unwrap();
            let rules = RuleExtractor::extract(&tree);
            assert_eq!(rules.len(), tree.leaves().count());

            for record in sample.records() {
                let matched = rules.iter()
                    .filter(|rule| rule.matches(record).unwrap())
                    .collect::<Vec<_>>();
                assert_eq!(matched.len(), 1, "{record:?}");
                assert_eq!(matched[0].outcome(), tree.predict(record).unwrap());
            }
        }
    }


    #[test]
    fn toy_example_rules() {
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
        let sample = Sample::new(attributes, records).unwrap();
        let tree = DecisionTreeBuilder::new()
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();

        let mut rules = tree.rules()
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>();
        rules.sort();
        assert_eq!(
            rules,
            vec![
                "if [Attribute A has Value x] then => true",
                "if [Attribute A has Value y] then => false",
            ]
        );
    }


    #[test]
    fn conditions_follow_the_path_from_the_root() {
        let sample = random_sample(300, 23);
        let tree = DecisionTreeBuilder::new()
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();

        let root = match tree.root() {
            minitrees::decision_tree::Node::Branch(branch) => branch.attribute().clone(),
            _ => panic!("the tree must split at the root"),
        };

        for rule in tree.rules() {
            let conditions = rule.conditions();
            assert!(!conditions.is_empty());
            assert_eq!(conditions[0].attribute, root);

            let mut names = conditions.iter()
                .map(|condition| condition.attribute.name())
                .collect::<Vec<_>>();
            let depth = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), depth, "an attribute is tested twice");
        }
    }


    #[test]
    fn single_leaf_tree_has_one_unconditional_rule() {
        let attributes = vec![Attribute::new(0, "A", ["x", "y"])];
        let records = vec![
            Record::new(["x"], false),
            Record::new(["y"], false),
        ];
        let sample = Sample::new(attributes, records).unwrap();
        let tree = DecisionTreeBuilder::new()
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();

        let rules = tree.rules();
        assert_eq!(rules.len(), 1);
        assert!(rules[0].conditions().is_empty());
        assert!(!rules[0].outcome());
        assert_eq!(rules[0].label(), "then => false");
    }
}
