//! Property tests for the JSON form of builder state

use proptest::prelude::*;
use vidprompt_core::{
    create_builder_state, BuilderState, ParamValue, Parameters, Provenance, ProvenanceEntry,
    Source,
};

fn param_value() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        "[ -~]{0,24}".prop_map(ParamValue::from),
        any::<i64>().prop_map(ParamValue::from),
        (-1.0e6f64..1.0e6).prop_map(ParamValue::from),
        any::<bool>().prop_map(ParamValue::from),
    ]
}

fn source() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::User),
        Just(Source::Preset),
        Just(Source::Intent),
        Just(Source::Generated),
    ]
}

fn provenance_entry() -> impl Strategy<Value = ProvenanceEntry> {
    (
        source(),
        proptest::option::of("[a-z-]{1,12}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(source, origin, modified)| ProvenanceEntry {
            source,
            origin,
            modified,
        })
}

fn builder_state() -> impl Strategy<Value = BuilderState> {
    (
        "\\PC{0,64}",
        "[a-z-]{1,12}",
        proptest::collection::vec(("[a-zA-Z]{1,10}", param_value()), 0..8),
        proptest::option::of("[a-z-]{1,16}"),
        proptest::option::of("[a-z-]{1,16}"),
        proptest::collection::vec(("[a-zA-Z]{1,10}", provenance_entry()), 0..6),
    )
        .prop_map(|(prompt, model, params, preset, intent, prov)| {
            create_builder_state(
                prompt,
                model,
                params.into_iter().collect::<Parameters>(),
                preset,
                intent,
                prov.into_iter().collect::<Provenance>(),
                Some("2025-01-01T00:00:00.000Z".to_string()),
            )
        })
}

proptest! {
    #[test]
    fn json_round_trip(state in builder_state()) {
        let json = serde_json::to_string_pretty(&state).unwrap();
        let parsed = BuilderState::from_json(&json).unwrap();
        prop_assert_eq!(parsed, state);
    }

    #[test]
    fn json_is_stable(state in builder_state()) {
        let first = serde_json::to_string_pretty(&state).unwrap();
        let second = serde_json::to_string_pretty(&state).unwrap();
        prop_assert_eq!(first, second);
    }
}
