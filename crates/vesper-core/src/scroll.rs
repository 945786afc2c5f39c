//! Navbar collapse policy: when does the row condense.

use crate::error::{ConfigError, ConfigResult};

/// Thresholds controlling when the navbar row condenses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapsePolicy {
    /// Vertical scroll offset (px) past which the row condenses.
    pub offset: f64,
    /// Viewport width (px) below which the row never condenses; the CSS
    /// already compacts narrow viewports on its own.
    pub min_width: f64,
}

impl Default for CollapsePolicy {
    fn default() -> Self {
        Self {
            offset: 64.0,
            min_width: 768.0,
        }
    }
}

impl CollapsePolicy {
    /// Rejects non-finite or negative thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] naming the offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [("offset", self.offset), ("min_width", self.min_width)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidThreshold {
                    field,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }
}

/// Visual state of the navbar row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarPhase {
    /// Full-height row.
    Expanded,
    /// Condensed row, shown once the page scrolls past the offset.
    Condensed,
}

/// Decides the phase for a scroll position and viewport width.
///
/// Condensed once vertical scroll passes the offset; always expanded when the
/// viewport is narrower than `min_width`.
#[must_use]
pub fn phase_for(policy: CollapsePolicy, scroll_y: f64, viewport_width: f64) -> NavbarPhase {
    if viewport_width < policy.min_width {
        return NavbarPhase::Expanded;
    }
    if scroll_y > policy.offset {
        NavbarPhase::Condensed
    } else {
        NavbarPhase::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_validates() {
        assert!(CollapsePolicy::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_thresholds() {
        let nan = CollapsePolicy {
            offset: f64::NAN,
            ..CollapsePolicy::default()
        };
        assert_eq!(
            nan.validate().unwrap_err(),
            ConfigError::InvalidThreshold {
                field: "offset",
                reason: "must be finite",
            }
        );

        let negative = CollapsePolicy {
            min_width: -1.0,
            ..CollapsePolicy::default()
        };
        assert_eq!(
            negative.validate().unwrap_err(),
            ConfigError::InvalidThreshold {
                field: "min_width",
                reason: "must not be negative",
            }
        );
    }

    #[test]
    fn condenses_past_the_offset() {
        let policy = CollapsePolicy::default();
        assert_eq!(phase_for(policy, 0.0, 1024.0), NavbarPhase::Expanded);
        assert_eq!(phase_for(policy, 64.0, 1024.0), NavbarPhase::Expanded);
        assert_eq!(phase_for(policy, 64.5, 1024.0), NavbarPhase::Condensed);
    }

    #[test]
    fn narrow_viewports_stay_expanded() {
        let policy = CollapsePolicy::default();
        assert_eq!(phase_for(policy, 500.0, 480.0), NavbarPhase::Expanded);
        assert_eq!(phase_for(policy, 500.0, 768.0), NavbarPhase::Condensed);
    }
}
