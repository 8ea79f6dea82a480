//! Property-based tests for configuration validation invariants.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use airgate::config::{AircraftClass, load};
use airgate::error::ConfigError;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

const CODES: [&str; 3] = ["S", "M", "L"];

#[derive(Debug, Clone)]
struct GateInput {
    gate_id: String,
    classes: Vec<String>,
    walk_cost: f64,
}

#[derive(Debug, Clone)]
struct DocInput {
    code: String,
    name: String,
    timezone: String,
    resolution: i64,
    buffer: i64,
    defaults: BTreeMap<&'static str, i64>,
    gates: Vec<GateInput>,
    model_id: String,
}

fn padded(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    (inner, "[ \t]{0,2}", "[ \t]{0,2}").prop_map(|(s, pre, post)| format!("{pre}{s}{post}"))
}

fn class_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(CODES.to_vec()).prop_map(|c| c.to_string()),
        1..6,
    )
}

fn gates_strategy() -> impl Strategy<Value = Vec<GateInput>> {
    prop::collection::btree_set("[A-H][0-9]{1,2}", 1..8).prop_flat_map(|ids| {
        let ids: Vec<String> = ids.into_iter().collect();
        let n = ids.len();
        (
            Just(ids).prop_shuffle(),
            prop::collection::vec(class_list(), n),
            prop::collection::vec(0.0f64..1000.0, n),
        )
            .prop_map(|(ids, classes, costs)| {
                ids.into_iter()
                    .zip(classes)
                    .zip(costs)
                    .map(|((gate_id, classes), walk_cost)| GateInput {
                        gate_id,
                        classes,
                        walk_cost,
                    })
                    .collect()
            })
    })
}

fn doc_strategy() -> impl Strategy<Value = DocInput> {
    (
        padded("[A-Z]{3}"),
        padded("[A-Za-z][A-Za-z ]{0,20}[a-z]"),
        padded("[A-Z][a-z]{2,8}/[A-Z][a-z]{2,8}"),
        1i64..=1440,
        0i64..=240,
        prop::collection::btree_map(prop::sample::select(CODES.to_vec()), 0i64..=600, 0..=3),
        gates_strategy(),
        padded("[A-Z]{3}-[A-Z0-9-]{1,12}"),
    )
        .prop_map(
            |(code, name, timezone, resolution, buffer, defaults, gates, model_id)| DocInput {
                code,
                name,
                timezone,
                resolution,
                buffer,
                defaults,
                gates,
                model_id,
            },
        )
}

fn mapping(entries: Vec<(&str, Value)>) -> Value {
    let mut map = Mapping::new();
    for (key, value) in entries {
        map.insert(key.into(), value);
    }
    Value::Mapping(map)
}

fn gate_value(gate: &GateInput) -> Value {
    mapping(vec![
        ("gate_id", gate.gate_id.clone().into()),
        (
            "compatible_classes",
            Value::Sequence(gate.classes.iter().map(|c| Value::from(c.as_str())).collect()),
        ),
        ("walk_cost", gate.walk_cost.into()),
    ])
}

fn build(doc: &DocInput) -> Value {
    let mut defaults = Mapping::new();
    for (class, minutes) in &doc.defaults {
        defaults.insert((*class).into(), (*minutes).into());
    }
    mapping(vec![
        (
            "airport",
            mapping(vec![
                ("code", doc.code.clone().into()),
                ("name", doc.name.clone().into()),
            ]),
        ),
        (
            "time",
            mapping(vec![
                ("timezone", doc.timezone.clone().into()),
                ("resolution_minutes", doc.resolution.into()),
            ]),
        ),
        (
            "turnaround",
            mapping(vec![
                ("buffer_minutes", doc.buffer.into()),
                ("default_turnaround_minutes", Value::Mapping(defaults)),
            ]),
        ),
        (
            "gates",
            Value::Sequence(doc.gates.iter().map(gate_value).collect()),
        ),
        ("export", mapping(vec![("recommended_id", doc.model_id.clone().into())])),
    ])
}

fn canonical(classes: &[String]) -> Vec<AircraftClass> {
    let set: BTreeSet<AircraftClass> = classes
        .iter()
        .filter_map(|c| AircraftClass::from_code(c))
        .collect();
    set.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn valid_documents_round_trip(input in doc_strategy()) {
        let config = load(&build(&input)).expect("generated document should be valid");

        prop_assert_eq!(&config.airport_code, input.code.trim());
        prop_assert_eq!(&config.airport_name, input.name.trim());
        prop_assert_eq!(&config.timezone, input.timezone.trim());
        prop_assert_eq!(&config.model_id, input.model_id.trim());
        prop_assert_eq!(i64::from(config.resolution_minutes), input.resolution);
        prop_assert_eq!(i64::from(config.turnaround.buffer_minutes), input.buffer);
        prop_assert_eq!(
            config.turnaround.default_turnaround_minutes.len(),
            input.defaults.len()
        );
        for (class, minutes) in &config.turnaround.default_turnaround_minutes {
            prop_assert_eq!(i64::from(*minutes), input.defaults[class.code()]);
        }

        prop_assert_eq!(config.gates.len(), input.gates.len());
        for (gate, expected) in config.gates.iter().zip(&input.gates) {
            prop_assert_eq!(&gate.gate_id, &expected.gate_id);
            prop_assert_eq!(&gate.compatible_classes, &canonical(&expected.classes));
            prop_assert!((gate.walk_cost - expected.walk_cost).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn loading_is_deterministic(input in doc_strategy()) {
        let document = build(&input);
        prop_assert_eq!(load(&document).unwrap(), load(&document).unwrap());
    }

    #[test]
    fn gate_ids_are_unique(input in doc_strategy()) {
        let config = load(&build(&input)).unwrap();
        let ids: HashSet<&str> = config.gates.iter().map(|g| g.gate_id.as_str()).collect();
        prop_assert_eq!(ids.len(), config.gates.len());
    }

    #[test]
    fn class_lists_are_sorted_and_order_independent(input in doc_strategy()) {
        let mut reversed = input.clone();
        for gate in &mut reversed.gates {
            gate.classes.reverse();
        }
        let a = load(&build(&input)).unwrap();
        let b = load(&build(&reversed)).unwrap();
        prop_assert_eq!(&a, &b);
        for gate in &a.gates {
            prop_assert!(!gate.compatible_classes.is_empty());
            prop_assert!(gate.compatible_classes.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn unknown_classes_are_rejected(input in doc_strategy(), code in "[A-Za-z]{1,2}") {
        let mut doc = input;
        doc.gates[0].classes.clear();
        doc.gates[0].classes.push(code.clone());

        let result = load(&build(&doc));
        if CODES.contains(&code.as_str()) {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(ConfigError::InvalidEnum { offending, allowed, context, .. }) => {
                    prop_assert_eq!(offending, vec![code]);
                    prop_assert_eq!(allowed, vec!["L", "M", "S"]);
                    prop_assert_eq!(context, "gates[0]");
                }
                other => prop_assert!(false, "expected InvalidEnum, got {:?}", other),
            }
        }
    }

    #[test]
    fn error_messages_are_deterministic(input in doc_strategy(), bad in "[a-z]{1,4}") {
        let mut document = build(&input);
        document["turnaround"]["default_turnaround_minutes"][bad.as_str()] = 5.into();
        let first = load(&document).unwrap_err().to_string();
        let second = load(&document).unwrap_err().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_resolution_rejected(input in doc_strategy(), resolution in -1000i64..=0) {
        let mut doc = input;
        doc.resolution = resolution;
        let is_resolution_range_error = matches!(
            load(&build(&doc)),
            Err(ConfigError::RangeError { ref field, .. }) if field == "time.resolution_minutes"
        );
        prop_assert!(is_resolution_range_error);
    }

    #[test]
    fn negative_buffer_rejected(input in doc_strategy(), buffer in -1000i64..0) {
        let mut doc = input;
        doc.buffer = buffer;
        let is_buffer_range_error = matches!(
            load(&build(&doc)),
            Err(ConfigError::RangeError { ref field, .. }) if field == "turnaround.buffer_minutes"
        );
        prop_assert!(is_buffer_range_error);
    }
}

#[test]
fn boundary_values() {
    let base = DocInput {
        code: "WAW".to_string(),
        name: "Warsaw Chopin".to_string(),
        timezone: "Europe/Warsaw".to_string(),
        resolution: 1,
        buffer: 0,
        defaults: BTreeMap::from([("S", 30)]),
        gates: vec![GateInput {
            gate_id: "A1".to_string(),
            classes: vec!["S".to_string(), "M".to_string()],
            walk_cost: 2.5,
        }],
        model_id: "WAW-RS-6G-v1".to_string(),
    };
    let config = load(&build(&base)).unwrap();
    assert_eq!(config.resolution_minutes, 1);
    assert_eq!(config.turnaround.buffer_minutes, 0);
    assert_eq!(config.gates.len(), 1);
    assert_eq!(
        config.gates[0].compatible_classes,
        vec![AircraftClass::Medium, AircraftClass::Small]
    );

    let mut empty = base;
    empty.gates.clear();
    assert!(matches!(
        load(&build(&empty)),
        Err(ConfigError::RangeError { ref field, .. }) if field == "gates"
    ));
}
