//! The class-name contract shared with the Vesper stylesheet.
//!
//! The helpers only ever toggle the names listed here; styling owns what the
//! classes look like. Inventing names beyond this contract breaks the pairing
//! with the CSS.

/// Animated highlight state on a form control.
pub const GRADIENT: &str = "gradient";
/// Transition companion to [`GRADIENT`], present only while fading out.
pub const GRADIENT_FADE: &str = "gradient-fade";
/// Dark theme marker, applied to the document element by default.
pub const DARK: &str = "dark";
/// Collapsed navbar row state.
pub const NAVBAR_CONDENSED: &str = "navbar-condensed";
/// Root container of a datalist widget.
pub const DATALIST: &str = "datalist";
/// Added to the datalist root while the option panel is visible.
pub const DATALIST_OPEN: &str = "datalist-open";
/// The datalist's text input.
pub const DATALIST_INPUT: &str = "datalist-input";
/// The datalist's option panel (`<ul>`).
pub const DATALIST_OPTIONS: &str = "datalist-options";
/// A single option entry inside the panel.
pub const DATALIST_OPTION: &str = "datalist-option";
/// The keyboard-highlighted option entry.
pub const DATALIST_ACTIVE: &str = "datalist-active";
/// Placeholder entry shown when no option matches the query.
pub const DATALIST_EMPTY: &str = "datalist-empty";

/// The highlight/transition class pair used by the gradient fade helper.
///
/// Custom builds of the stylesheet can rename the pair; the defaults match
/// the stock CSS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightClasses {
    /// Class marking the highlighted state.
    pub highlight: String,
    /// Class that triggers the fade-out transition.
    pub fade: String,
}

impl Default for HighlightClasses {
    fn default() -> Self {
        Self {
            highlight: GRADIENT.to_string(),
            fade: GRADIENT_FADE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_matches_contract() {
        let classes = HighlightClasses::default();
        assert_eq!(classes.highlight, GRADIENT);
        assert_eq!(classes.fade, GRADIENT_FADE);
    }
}
