//! End-to-end widget flows through the public API.

use vesper_core::{
    DatalistConfig, DatalistKey, DatalistOption, DatalistState, KeyOutcome, SelectedOption,
};

fn options_from_fixture() -> Vec<DatalistOption> {
    serde_json::from_str(
        r#"[
            {"value": "apple", "label": "Apple"},
            {"value": "banana", "label": "Banana"},
            {"value": "cherry", "label": "Cherry"}
        ]"#,
    )
    .expect("fixture parses")
}

#[test]
fn type_navigate_commit_flow() {
    let mut state = DatalistState::new(options_from_fixture(), DatalistConfig::default())
        .expect("fixture is valid");

    state.set_query("an");
    state.open();
    assert_eq!(state.apply_key(DatalistKey::ArrowDown), KeyOutcome::Navigated);
    let outcome = state.apply_key(DatalistKey::Enter);
    assert_eq!(
        outcome,
        KeyOutcome::Committed(SelectedOption {
            value: "banana".to_string(),
            label: "Banana".to_string(),
        })
    );
    assert_eq!(state.value(), Some("banana"));
    assert!(!state.is_open());

    // Reopening after a commit filters by the committed label.
    state.open();
    assert_eq!(state.filtered_len(), 1);
}

#[test]
fn programmatic_selection_round_trip() {
    let mut state = DatalistState::new(options_from_fixture(), DatalistConfig::default())
        .expect("fixture is valid");

    assert!(state.select_value("cherry"));
    assert_eq!(state.value(), Some("cherry"));
    assert_eq!(state.selected_label(), Some("Cherry"));

    state.clear();
    assert_eq!(state.value(), None);
    assert_eq!(state.query(), "");
}
