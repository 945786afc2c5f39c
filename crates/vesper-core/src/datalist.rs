//! State machine for the searchable dropdown ("datalist") widget.
//!
//! # Design
//! - The full option list is immutable after construction; filtering produces
//!   indices into it, so the filtered view is a subsequence by construction.
//! - The highlight is transient keyboard state and never outlives the
//!   filtered view it points into.
//! - Keyboard handling is a single dispatch point ([`DatalistState::apply_key`])
//!   so the DOM layer stays a thin event adapter.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A single selectable entry: unique value key plus display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatalistOption {
    /// Unique key reported to the change callback.
    pub value: String,
    /// Text shown in the input and the option panel.
    pub label: String,
}

impl DatalistOption {
    /// Builds an option from string-ish parts.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static widget configuration supplied at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatalistConfig {
    /// Placeholder text for the query input.
    pub placeholder: String,
    /// Message rendered when no option matches the query.
    pub empty_message: String,
}

impl Default for DatalistConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            empty_message: "No matches".to_string(),
        }
    }
}

/// Payload handed to the change callback when the user commits an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedOption {
    /// Value key of the committed option.
    pub value: String,
    /// Display label of the committed option.
    pub label: String,
}

/// Keys the widget reacts to. Everything else passes through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatalistKey {
    /// Move the highlight down, opening the panel first if needed.
    ArrowDown,
    /// Move the highlight up, opening the panel first if needed.
    ArrowUp,
    /// Commit the highlighted option.
    Enter,
    /// Close the panel without changing the selection.
    Escape,
}

impl DatalistKey {
    /// Maps a DOM `KeyboardEvent.key` value to a handled key, if any.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// What a handled key did, so the DOM layer knows whether to re-render and
/// whether to invoke the change callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The highlight or panel visibility changed.
    Navigated,
    /// An option was committed; the payload goes to the change callback.
    Committed(SelectedOption),
    /// The panel was closed, selection untouched.
    Closed,
    /// Nothing to do (e.g. Enter with no highlight).
    Ignored,
}

/// The widget state machine.
///
/// Invariants: the highlight, when set, is a valid position into the filtered
/// view; a non-`None` selection always names an option present in the full
/// list; the filtered view is recomputed from the full list and the current
/// query on every query change and never mutates the list itself.
#[derive(Clone, Debug)]
pub struct DatalistState {
    options: Vec<DatalistOption>,
    config: DatalistConfig,
    query: String,
    selected: Option<usize>,
    highlighted: Option<usize>,
    filtered: Vec<usize>,
    open: bool,
}

impl DatalistState {
    /// Validates the option list and builds a closed, unfiltered widget.
    ///
    /// # Errors
    ///
    /// Rejects duplicate value keys and empty values or labels, so the
    /// widget can never render two options answering to the same key.
    pub fn new(options: Vec<DatalistOption>, config: DatalistConfig) -> ConfigResult<Self> {
        for (index, option) in options.iter().enumerate() {
            if option.value.is_empty() {
                return Err(ConfigError::EmptyValue { index });
            }
            if option.label.is_empty() {
                return Err(ConfigError::EmptyLabel {
                    value: option.value.clone(),
                });
            }
            if options[..index].iter().any(|seen| seen.value == option.value) {
                return Err(ConfigError::DuplicateValue {
                    value: option.value.clone(),
                });
            }
        }
        let filtered = (0..options.len()).collect();
        Ok(Self {
            options,
            config,
            query: String::new(),
            selected: None,
            highlighted: None,
            filtered,
            open: false,
        })
    }

    /// The widget configuration.
    #[must_use]
    pub const fn config(&self) -> &DatalistConfig {
        &self.config
    }

    /// The full option list, in caller order.
    #[must_use]
    pub fn options(&self) -> &[DatalistOption] {
        &self.options
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query and recomputes the filtered view.
    ///
    /// Matching is a case-insensitive substring test against the label. Any
    /// query change discards the highlight.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        let needle = query.to_lowercase();
        self.filtered = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        self.highlighted = None;
    }

    /// Options currently passing the filter, in list order.
    pub fn filtered(&self) -> impl Iterator<Item = &DatalistOption> {
        self.filtered.iter().map(|&index| &self.options[index])
    }

    /// Number of options passing the filter.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Position of the highlighted option within the filtered view.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted option itself.
    #[must_use]
    pub fn highlighted_option(&self) -> Option<&DatalistOption> {
        self.highlighted.map(|pos| &self.options[self.filtered[pos]])
    }

    /// Whether the option panel is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the option panel.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Hides the option panel and discards the transient highlight.
    pub const fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Current selection key.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|index| self.options[index].value.as_str())
    }

    /// Label of the current selection.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|index| self.options[index].label.as_str())
    }

    /// Programmatically selects the option with the given value key.
    ///
    /// On a match the query becomes the option's label; when no option
    /// answers to the key, the selection and query are cleared instead.
    /// Returns whether a match was found. Does not produce a change-callback
    /// payload: the callback reports user selections only.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = Some(index);
                let label = self.options[index].label.clone();
                self.set_query(&label);
                true
            }
            None => {
                self.selected = None;
                self.set_query("");
                false
            }
        }
    }

    /// Resets the selection and the query.
    pub fn clear(&mut self) {
        self.selected = None;
        self.set_query("");
    }

    /// Moves the highlight one step down, wrapping past the end.
    ///
    /// With the panel closed this opens it first. No-op on an empty filtered
    /// view.
    pub fn highlight_next(&mut self) {
        if self.filtered.is_empty() {
            self.open = true;
            return;
        }
        self.open = true;
        self.highlighted = Some(match self.highlighted {
            Some(pos) if pos + 1 < self.filtered.len() => pos + 1,
            _ => 0,
        });
    }

    /// Moves the highlight one step up, wrapping past the start.
    ///
    /// With the panel closed this opens it first. No-op on an empty filtered
    /// view.
    pub fn highlight_prev(&mut self) {
        if self.filtered.is_empty() {
            self.open = true;
            return;
        }
        self.open = true;
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => self.filtered.len() - 1,
            Some(pos) => pos - 1,
        });
    }

    /// Commits the highlighted option, if any.
    pub fn commit_highlighted(&mut self) -> Option<SelectedOption> {
        self.highlighted.and_then(|pos| self.commit_filtered(pos))
    }

    /// Commits the option at the given position in the filtered view.
    ///
    /// Committing selects the option, echoes its label into the query, and
    /// closes the panel. Returns the payload for the change callback, or
    /// `None` when the position is out of range.
    pub fn commit_filtered(&mut self, pos: usize) -> Option<SelectedOption> {
        let index = *self.filtered.get(pos)?;
        self.selected = Some(index);
        let option = &self.options[index];
        let committed = SelectedOption {
            value: option.value.clone(),
            label: option.label.clone(),
        };
        let label = committed.label.clone();
        self.set_query(&label);
        self.close();
        Some(committed)
    }

    /// Commits the filtered option with the given value key (click path).
    pub fn commit_value(&mut self, value: &str) -> Option<SelectedOption> {
        let pos = self
            .filtered
            .iter()
            .position(|&index| self.options[index].value == value)?;
        self.commit_filtered(pos)
    }

    /// Applies one handled key to the state machine.
    pub fn apply_key(&mut self, key: DatalistKey) -> KeyOutcome {
        match key {
            DatalistKey::ArrowDown => {
                self.highlight_next();
                KeyOutcome::Navigated
            }
            DatalistKey::ArrowUp => {
                self.highlight_prev();
                KeyOutcome::Navigated
            }
            DatalistKey::Enter => self
                .commit_highlighted()
                .map_or(KeyOutcome::Ignored, KeyOutcome::Committed),
            DatalistKey::Escape => {
                if self.open {
                    self.close();
                    KeyOutcome::Closed
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<DatalistOption> {
        vec![
            DatalistOption::new("apple", "Apple"),
            DatalistOption::new("banana", "Banana"),
            DatalistOption::new("cherry", "Cherry"),
        ]
    }

    fn widget() -> DatalistState {
        DatalistState::new(fruits(), DatalistConfig::default()).expect("valid options")
    }

    #[test]
    fn rejects_duplicate_values() {
        let options = vec![
            DatalistOption::new("apple", "Apple"),
            DatalistOption::new("apple", "Apfel"),
        ];
        let err = DatalistState::new(options, DatalistConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateValue {
                value: "apple".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_value_and_label() {
        let err = DatalistState::new(
            vec![DatalistOption::new("", "Apple")],
            DatalistConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyValue { index: 0 });

        let err = DatalistState::new(
            vec![DatalistOption::new("apple", "")],
            DatalistConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyLabel {
                value: "apple".to_string()
            }
        );
    }

    #[test]
    fn options_parse_from_json() {
        let options: Vec<DatalistOption> = serde_json::from_str(
            r#"[{"value":"apple","label":"Apple"},{"value":"banana","label":"Banana"}]"#,
        )
        .expect("well-formed options");
        assert!(DatalistState::new(options, DatalistConfig::default()).is_ok());
    }

    #[test]
    fn filtering_is_case_insensitive_substring() {
        let mut state = widget();
        state.set_query("AN");
        let labels: Vec<_> = state.filtered().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, vec!["Banana"]);
    }

    #[test]
    fn filtered_is_subsequence_of_full_list() {
        let mut state = widget();
        for query in ["", "a", "e", "rr", "zzz"] {
            state.set_query(query);
            let mut cursor = state.options().iter();
            for option in state.filtered() {
                assert!(
                    cursor.any(|full| full == option),
                    "filtered view out of order for query {query:?}"
                );
            }
        }
    }

    #[test]
    fn query_change_resets_highlight() {
        let mut state = widget();
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(0));
        state.set_query("a");
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn select_value_round_trips_known_keys() {
        let mut state = widget();
        assert!(state.select_value("banana"));
        assert_eq!(state.value(), Some("banana"));
        assert_eq!(state.query(), "Banana");

        assert!(!state.select_value("durian"));
        assert_eq!(state.value(), None);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn clear_resets_selection_and_query() {
        let mut state = widget();
        state.select_value("apple");
        state.clear();
        assert_eq!(state.value(), None);
        assert_eq!(state.query(), "");
        assert_eq!(state.filtered_len(), 3);
    }

    #[test]
    fn down_then_enter_commits_filtered_option() {
        let mut state = widget();
        state.set_query("an");
        assert_eq!(state.filtered_len(), 1);

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
        assert_eq!(state.query(), "Banana");
        assert!(!state.is_open());
    }

    #[test]
    fn highlight_wraps_at_both_ends() {
        let mut state = widget();
        state.highlight_next();
        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(2));
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(0));
        state.highlight_prev();
        assert_eq!(state.highlighted(), Some(2));
    }

    #[test]
    fn up_from_rest_highlights_last() {
        let mut state = widget();
        state.highlight_prev();
        assert_eq!(state.highlighted(), Some(2));
        assert!(state.is_open());
    }

    #[test]
    fn highlight_on_empty_filter_is_noop() {
        let mut state = widget();
        state.set_query("zzz");
        state.highlight_next();
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.apply_key(DatalistKey::Enter), KeyOutcome::Ignored);
    }

    #[test]
    fn enter_without_highlight_is_ignored() {
        let mut state = widget();
        state.open();
        assert_eq!(state.apply_key(DatalistKey::Enter), KeyOutcome::Ignored);
        assert_eq!(state.value(), None);
    }

    #[test]
    fn escape_closes_without_touching_selection() {
        let mut state = widget();
        state.select_value("apple");
        state.open();
        state.highlight_next();
        assert_eq!(state.apply_key(DatalistKey::Escape), KeyOutcome::Closed);
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.value(), Some("apple"));

        assert_eq!(state.apply_key(DatalistKey::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn commit_value_only_hits_filtered_options() {
        let mut state = widget();
        state.set_query("an");
        assert!(state.commit_value("apple").is_none());
        let committed = state.commit_value("banana").expect("banana passes filter");
        assert_eq!(committed.value, "banana");
    }

    #[test]
    fn key_names_map_to_handled_keys() {
        assert_eq!(DatalistKey::from_key("ArrowDown"), Some(DatalistKey::ArrowDown));
        assert_eq!(DatalistKey::from_key("Escape"), Some(DatalistKey::Escape));
        assert_eq!(DatalistKey::from_key("Tab"), None);
        assert_eq!(DatalistKey::from_key("a"), None);
    }
}
