//! Property-based tests for shape values.
//!
//! Shapes are plain data: equality and hashing are structural, builders and
//! direct field assignment produce the same value, and `Display` only shows
//! what is set.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use rustack_sagemaker_model::entry_map::EntryMap;
use rustack_sagemaker_model::types::{ResourceConfig, Tag, TrainingInstanceType, TrainingJobStatus};
use rustack_sagemaker_model::{ModelError, input::CreateTrainingJobInput};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// Strategy: instance types drawn from the closed set
fn arb_instance_type() -> impl Strategy<Value = TrainingInstanceType> {
    prop::sample::select(TrainingInstanceType::VALUES)
        .prop_map(|wire| wire.parse::<TrainingInstanceType>().expect("closed set value"))
}

// Strategy: optional resource configs
fn arb_resource_config() -> impl Strategy<Value = ResourceConfig> {
    (
        prop::option::of(arb_instance_type()),
        prop::option::of(1..=100_i32),
        prop::option::of(1..=16384_i32),
        prop::option::of("[a-z0-9-]{1,20}"),
    )
        .prop_map(|(instance_type, count, volume, key)| ResourceConfig {
            instance_type,
            instance_count: count,
            volume_size_in_gb: volume,
            volume_kms_key_id: key,
        })
}

// Strategy: tag key/value pairs
fn arb_tags() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Za-z][A-Za-z0-9]{0,15}", "[a-z0-9 ]{0,16}"), 0..5)
}

proptest! {
    /// Property: equal shapes hash equally, however they were produced
    #[test]
    fn proptest_equal_shapes_hash_equally(config in arb_resource_config()) {
        let mut builder = ResourceConfig::builder();
        if let Some(instance_type) = config.instance_type.clone() {
            builder = builder.instance_type(instance_type);
        }
        if let Some(count) = config.instance_count {
            builder = builder.instance_count(count);
        }
        if let Some(volume) = config.volume_size_in_gb {
            builder = builder.volume_size_in_gb(volume);
        }
        if let Some(key) = config.volume_kms_key_id.as_deref() {
            builder = builder.volume_kms_key_id(key);
        }
        let built = builder.build();
        prop_assert_eq!(&config, &built);
        prop_assert_eq!(hash_of(&config), hash_of(&built));

        let json = serde_json::to_string(&config).expect("serialize");
        let decoded: ResourceConfig = serde_json::from_str(&json).expect("decode");
        prop_assert_eq!(&config, &decoded);
        prop_assert_eq!(hash_of(&config), hash_of(&decoded));
    }

    /// Property: builder and field assignment produce the same shape
    #[test]
    fn proptest_builder_matches_field_assignment(
        name in "[a-z][a-z0-9-]{0,30}",
        tags in arb_tags(),
        config in arb_resource_config(),
    ) {
        let mut builder = CreateTrainingJobInput::builder()
            .training_job_name(name.as_str())
            .resource_config(config.clone());
        for (key, value) in &tags {
            builder = builder.tags(Tag::builder().key(key.as_str()).value(value.as_str()).build());
        }
        let built = builder.build();

        let assigned = CreateTrainingJobInput {
            training_job_name: Some(name),
            resource_config: Some(config),
            tags: (!tags.is_empty()).then(|| {
                tags.into_iter()
                    .map(|(key, value)| Tag { key: Some(key), value: Some(value) })
                    .collect()
            }),
            ..CreateTrainingJobInput::default()
        };

        prop_assert_eq!(hash_of(&built), hash_of(&assigned));
        prop_assert_eq!(built, assigned);
    }

    /// Property: an unset field never equals a set one, in either direction
    #[test]
    fn proptest_unset_field_differs_from_set(count in any::<i32>()) {
        let unset = ResourceConfig::default();
        let set = ResourceConfig::builder().instance_count(count).build();
        prop_assert_ne!(&unset, &set);
        prop_assert_ne!(&set, &unset);
    }

    /// Property: the first value of a key wins
    #[test]
    fn proptest_duplicate_key_keeps_first_value(
        key in "[a-z_]{1,12}",
        first in "[a-z0-9]{0,8}",
        second in "[a-z0-9]{0,8}",
    ) {
        let mut map = EntryMap::<String>::new();
        map.add_entry(key.as_str(), first.as_str()).expect("first insert");
        let err = map.add_entry(key.as_str(), second).expect_err("duplicate key");
        let is_duplicate = matches!(err, ModelError::DuplicateKey { key: ref k } if *k == key);
        prop_assert!(is_duplicate);
        prop_assert_eq!(map.get(&key), Some(&first));
        prop_assert_eq!(map.len(), 1);
    }

    /// Property: a repeated key on a record keeps the first value
    #[test]
    fn proptest_record_map_keeps_first_value(
        key in "[a-z_]{1,12}",
        first in "[a-z0-9]{0,8}",
        second in "[a-z0-9]{0,8}",
    ) {
        let rejected = CreateTrainingJobInput::builder()
            .training_job_name("job")
            .hyper_parameters(key.as_str(), first.as_str())
            .expect("first entry")
            .hyper_parameters(key.as_str(), second)
            .expect_err("repeated key");
        let is_duplicate =
            matches!(rejected.error(), ModelError::DuplicateKey { key: k } if *k == key);
        prop_assert!(is_duplicate);

        let input = rejected.into_builder().build();
        prop_assert_eq!(input.training_job_name.as_deref(), Some("job"));
        let params = input.hyper_parameters.expect("map kept");
        prop_assert_eq!(params.get(&key), Some(&first));
        prop_assert_eq!(params.len(), 1);
    }

    /// Property: enum values survive symbol -> string -> symbol
    #[test]
    fn proptest_enum_round_trips_through_wire_string(instance_type in arb_instance_type()) {
        let parsed: TrainingInstanceType = instance_type.as_str().parse().expect("known value");
        prop_assert_eq!(&parsed, &instance_type);
        let json = serde_json::to_string(&instance_type).expect("serialize");
        prop_assert_eq!(json, format!("\"{}\"", instance_type.as_str()));
    }
}

#[test]
fn test_should_omit_unset_fields_from_display() {
    let config = ResourceConfig::builder()
        .instance_type(TrainingInstanceType::MlM5Xlarge)
        .volume_size_in_gb(50)
        .build();
    assert_eq!(
        config.to_string(),
        "{InstanceType: ml.m5.xlarge, VolumeSizeInGB: 50}"
    );
    assert_eq!(ResourceConfig::default().to_string(), "{}");
}

#[test]
fn test_should_render_lists_and_maps_in_display() {
    let input = CreateTrainingJobInput::builder()
        .training_job_name("job")
        .hyper_parameters("lr", "0.1")
        .and_then(|b| b.hyper_parameters("epochs", "5"))
        .expect("distinct keys")
        .tags(Tag::builder().key("team").value("ml").build())
        .build();
    assert_eq!(
        input.to_string(),
        "{TrainingJobName: job, HyperParameters: {epochs=5, lr=0.1}, Tags: [{Key: team, Value: ml}]}"
    );
}

#[test]
fn test_should_reset_cleared_map_field() {
    let mut input = CreateTrainingJobInput::builder()
        .hyper_parameters("lr", "0.1")
        .expect("first entry")
        .build();

    if let Some(params) = input.hyper_parameters.as_mut() {
        params.clear();
    }
    assert_eq!(input.hyper_parameters.as_ref().map(EntryMap::len), Some(0));

    input.hyper_parameters = None;
    assert_eq!(input, CreateTrainingJobInput::default());

    input
        .hyper_parameters
        .get_or_insert_with(EntryMap::new)
        .add_entry("lr", "0.2")
        .expect("add after clear");
    assert_eq!(
        input
            .hyper_parameters
            .as_ref()
            .and_then(|m| m.get("lr"))
            .map(String::as_str),
        Some("0.2")
    );
}

#[test]
fn test_should_serialize_wire_names_and_skip_unset() {
    let input = CreateTrainingJobInput::builder()
        .training_job_name("job")
        .resource_config(ResourceConfig::builder().instance_count(2).build())
        .build();
    let json = serde_json::to_value(&input).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "TrainingJobName": "job",
            "ResourceConfig": { "InstanceCount": 2 }
        })
    );
}

#[test]
fn test_should_treat_null_and_missing_fields_alike_on_decode() {
    let with_null: ResourceConfig =
        serde_json::from_str(r#"{"InstanceCount": null}"#).expect("decode null");
    let missing: ResourceConfig = serde_json::from_str("{}").expect("decode empty");
    assert_eq!(with_null, missing);
}

#[test]
fn test_should_reject_repeated_map_key_on_decode() {
    let json = r#"{"TrainingJobName":"j","HyperParameters":{"K":"v1","K":"v2"}}"#;
    let err = serde_json::from_str::<CreateTrainingJobInput>(json).expect_err("repeated key");
    assert!(err.to_string().contains("Duplicated keys (K) are provided."));

    let ok = r#"{"TrainingJobName":"j","HyperParameters":{"K":"v1","L":"v2"}}"#;
    let input: CreateTrainingJobInput = serde_json::from_str(ok).expect("distinct keys");
    assert_eq!(input.hyper_parameters.map(|m| m.len()), Some(2));
}

#[test]
fn test_should_keep_unknown_status_distinct_from_known() {
    let unknown: TrainingJobStatus = serde_json::from_str(r#""InProgress ""#).expect("lenient");
    assert_ne!(unknown, TrainingJobStatus::InProgress);
    assert!(!unknown.is_known());
}
