use minitrees::prelude::*;

use polars::prelude::*;


fn weather() -> (DataFrame, Series) {
    let outlook = Series::new(
        "outlook",
        &[Some("sunny"), Some("sunny"), Some("overcast"), None, Some("rain")],
    );
    let windy = Series::new("windy", &["no", "yes", "no", "no", "yes"]);
    let target = Series::new("play", &[-1_i64, -1, 1, 1, -1]);

    let df = DataFrame::new(vec![outlook, windy]).unwrap();
    (df, target)
}


#[cfg(test)]
pub mod dataframe_tests {
    use super::*;

    #[test]
    fn columns_become_categorical_attributes() {
        let (df, target) = weather();
        let sample = Sample::from_dataframe(df, target).unwrap();

        assert_eq!(sample.shape(), (5, 2));
        assert_eq!(sample.n_positive(), 2);

        let outlook = sample.attribute("outlook").unwrap();
        assert_eq!(outlook.index(), 0);
        assert_eq!(outlook.domain(), &["sunny", "overcast", "rain"]);
        assert_eq!(sample.records()[3].value(outlook).unwrap(), "?");

        let windy = sample.attribute("windy").unwrap();
        assert_eq!(windy.domain(), &["no", "yes"]);
        assert!(sample.attribute("humidity").is_none());
    }


    #[test]
    fn null_entries_are_imputed() {
        let (df, target) = weather();
        let mut sample = Sample::from_dataframe(df, target).unwrap();
        let report = Imputer::new().impute(&mut sample).unwrap();

        assert_eq!(report.imputed(), 1);
        let outlook = sample.attribute("outlook").unwrap();
        let value = sample.records()[3].value(outlook).unwrap();
        assert!(outlook.contains(value));
    }


    #[test]
    fn target_length_must_match() {
        let (df, _) = weather();
        let target = Series::new("play", &[1_i64, -1]);
        let result = Sample::from_dataframe(df, target);
        assert!(matches!(
            result,
            Err(Id3Error::TargetLengthMismatch { expected: 5, got: 2 })
        ));
    }


    #[test]
    fn null_target_is_rejected() {
        let (df, _) = weather();
        let target = Series::new("play", &[Some(1_i64), None, Some(1), Some(-1), Some(1)]);
        let result = Sample::from_dataframe(df, target);
        assert!(matches!(result, Err(Id3Error::MissingTarget { row: 1 })));
    }


    #[test]
    fn tree_from_dataframe() {
        let (df, target) = weather();
        let mut sample = Sample::from_dataframe(df, target).unwrap();
        Imputer::new().impute(&mut sample).unwrap();

        let tree = DecisionTreeBuilder::new()
            .build()
            .unwrap()
            .fit(&sample)
            .unwrap();
        println!("{tree}");
        assert!(tree.size() >= 1);
    }
}
