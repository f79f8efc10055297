use miniid3::prelude::*;

use std::collections::HashMap;


fn weather() -> Sample {
    WeatherGenerator::exhaustive().unwrap()
}


fn fitted(sample: &Sample) -> DecisionTree {
    let mut tree = DecisionTreeBuilder::new(sample)
        .features(WEATHER_FEATURES)
        .build()
        .unwrap();
    tree.fit(sample).unwrap();
    tree
}


#[test]
fn outlook_is_the_unique_best_root_split() {
    let sample = weather();
    let idx = (0..36).collect::<Vec<_>>();

    let outlook = information_gain(&sample, &idx, "Outlook").unwrap();
    for other in ["Temperature", "Humidity", "Wind"] {
        let gain = information_gain(&sample, &idx, other).unwrap();
        assert!(outlook > gain + 1e-6, "{other}: {gain} vs Outlook: {outlook}");
    }

    // The order of the candidates does not matter for a unique maximum.
    let (best, _) = best_feature(
        &sample, &idx, &["Wind", "Humidity", "Temperature", "Outlook"]
    ).unwrap().unwrap();
    assert_eq!(best, "Outlook");

    let tree = fitted(&sample);
    match tree.classifier().unwrap().root() {
        Node::Decision { feature, children } => {
            assert_eq!(feature, "Outlook");
            let keys = children.keys().map(String::as_str).collect::<Vec<_>>();
            assert_eq!(keys, vec!["Overcast", "Rain", "Sunny"]);
        },
        Node::Leaf { .. } => panic!("the root must be a decision node"),
    }
}


#[test]
fn predicts_the_weather_rule() {
    let sample = weather();
    let tree = fitted(&sample);

    let yes = tree.predict(&[
        ("Outlook", "Sunny"),
        ("Temperature", "Hot"),
        ("Humidity", "Normal"),
        ("Wind", "Weak"),
    ]).unwrap();
    assert_eq!(yes, "Yes");

    let no = tree.predict(&[
        ("Outlook", "Sunny"),
        ("Temperature", "Hot"),
        ("Humidity", "High"),
        ("Wind", "Weak"),
    ]).unwrap();
    assert_eq!(no, "No");

    let mut row = HashMap::new();
    row.insert("Outlook".to_string(), "Rain".to_string());
    row.insert("Wind".to_string(), "Strong".to_string());
    assert_eq!(tree.predict(&row).unwrap(), "No");

    assert_eq!(tree.classifier().unwrap().accuracy(&sample).unwrap(), 1.0);
}


#[test]
fn renders_the_learned_tree() {
    let sample = weather();
    let tree = fitted(&sample);

    let expected = "\
Outlook
    Overcast
        -> Yes
    Rain
        Wind
            Strong
                -> No
            Weak
                -> Yes
    Sunny
        Humidity
            High
                -> No
            Normal
                -> Yes
";
    assert_eq!(tree.render().unwrap(), expected);

    let classifier = tree.classifier().unwrap();
    assert_eq!(classifier.depth(), 2);
    assert_eq!(classifier.n_leaves(), 5);
}


#[test]
fn unseen_category_is_an_error() {
    let sample = Sample::from_records(
        &["Outlook", "Wind", "Class"],
        &[
            ["Sunny", "Weak", "No"],
            ["Sunny", "Strong", "No"],
            ["Rain", "Weak", "Yes"],
            ["Rain", "Strong", "No"],
        ],
        "Class",
    ).unwrap();
    let mut tree = DecisionTreeBuilder::new(&sample).build().unwrap();
    tree.fit(&sample).unwrap();

    let err = tree.predict(&[("Outlook", "Overcast"), ("Wind", "Weak")])
        .unwrap_err();
    match err {
        Id3Error::UnknownCategory { feature, value } => {
            assert_eq!(feature, "Outlook");
            assert_eq!(value, "Overcast");
        },
        other => panic!("unexpected error: {other}"),
    }

    let err = tree.predict(&[("Wind", "Weak")]).unwrap_err();
    assert!(matches!(err, Id3Error::MissingInstanceValue { .. }));
}


#[test]
fn fitting_twice_grows_the_same_tree() {
    let sample = WeatherGenerator::new(5).n_sample(300).noisy().unwrap();
    let mut tree = DecisionTreeBuilder::new(&sample).build().unwrap();

    let first = tree.fit(&sample).unwrap().clone();
    let second = tree.fit(&sample).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}


#[test]
fn clean_sample_is_learned_perfectly() {
    let sample = WeatherGenerator::default().clean().unwrap();
    let tree = fitted(&sample);
    let classifier = tree.classifier().unwrap();

    assert_eq!(classifier.accuracy(&sample).unwrap(), 1.0);
    let predictions = classifier.predict_all(&sample).unwrap();
    assert_eq!(predictions.as_slice(), sample.target());
}


#[test]
fn unfitted_tree_reports_not_fitted() {
    let sample = weather();
    let tree = DecisionTreeBuilder::new(&sample).build().unwrap();

    assert!(matches!(tree.render(), Err(Id3Error::NotFitted)));
    let err = tree.predict(&[("Outlook", "Sunny")]).unwrap_err();
    assert!(matches!(err, Id3Error::NotFitted));
}


#[test]
fn unknown_candidate_is_rejected() {
    let sample = weather();
    let result = DecisionTreeBuilder::new(&sample)
        .features(["Outlook", "Pressure"])
        .build();
    assert!(matches!(result, Err(Id3Error::UnknownFeature(name)) if name == "Pressure"));
}


#[test]
fn sibling_subtrees_may_split_on_the_same_feature() {
    let sample = Sample::from_records(
        &["Outlook", "Temperature", "Wind", "Class"],
        &[
            ["Overcast", "Mild", "Weak", "Yes"],
            ["Overcast", "Mild", "Strong", "Yes"],
            ["Overcast", "Mild", "Weak", "Yes"],
            ["Overcast", "Mild", "Strong", "Yes"],
            ["Sunny", "Mild", "Weak", "Yes"],
            ["Sunny", "Mild", "Strong", "No"],
            ["Rain", "Mild", "Weak", "No"],
            ["Rain", "Mild", "Strong", "Yes"],
        ],
        "Class",
    ).unwrap();
    let mut tree = DecisionTreeBuilder::new(&sample).build().unwrap();
    let classifier = tree.fit(&sample).unwrap();

    let children = match classifier.root() {
        Node::Decision { feature, children } => {
            assert_eq!(feature, "Outlook");
            children
        },
        Node::Leaf { .. } => panic!("the root must be a decision node"),
    };
    for branch in ["Rain", "Sunny"] {
        match &children[branch] {
            Node::Decision { feature, .. } => assert_eq!(feature, "Wind"),
            Node::Leaf { label } => panic!("{branch} ended in leaf {label}"),
        }
    }
    assert_eq!(classifier.accuracy(&sample).unwrap(), 1.0);
}
