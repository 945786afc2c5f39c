//! Collapses the navbar row once the page scrolls past a threshold.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Element, Window};

use vesper_core::classes::NAVBAR_CONDENSED;
use vesper_core::scroll::{CollapsePolicy, NavbarPhase, phase_for};

use crate::error::{AttachError, AttachResult};

/// Watches window scroll and resize, toggling the condensed class on the
/// navbar element when the phase changes.
pub struct NavbarCollapse {
    element: Element,
    window: Window,
    policy: CollapsePolicy,
    phase: Rc<Cell<NavbarPhase>>,
    listeners: Vec<EventListener>,
}

fn metrics(window: &Window) -> Option<(f64, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let width = window.inner_width().ok()?.as_f64()?;
    Some((scroll_y, width))
}

fn apply_phase(element: &Element, current: &Cell<NavbarPhase>, next: NavbarPhase) {
    if current.get() == next {
        return;
    }
    current.set(next);
    let list = element.class_list();
    let _ = match next {
        NavbarPhase::Condensed => list.add_1(NAVBAR_CONDENSED),
        NavbarPhase::Expanded => list.remove_1(NAVBAR_CONDENSED),
    };
}

impl NavbarCollapse {
    /// Validates the policy, applies the initial phase, and starts listening
    /// to window scroll and resize.
    ///
    /// # Errors
    ///
    /// Fails on an invalid policy or outside a browser page.
    pub fn attach(element: &Element, policy: CollapsePolicy) -> AttachResult<Self> {
        policy.validate()?;
        if !cfg!(target_arch = "wasm32") {
            return Err(AttachError::NoWindow);
        }
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;

        // Start from Expanded so the initial apply can observe a change.
        let _ = element.class_list().remove_1(NAVBAR_CONDENSED);
        let phase = Rc::new(Cell::new(NavbarPhase::Expanded));
        if let Some((scroll_y, width)) = metrics(&window) {
            apply_phase(element, &phase, phase_for(policy, scroll_y, width));
        }

        let handler = |window: Window, element: Element, phase: Rc<Cell<NavbarPhase>>| {
            move |_event: &web_sys::Event| {
                if let Some((scroll_y, width)) = metrics(&window) {
                    apply_phase(&element, &phase, phase_for(policy, scroll_y, width));
                }
            }
        };
        let listeners = vec![
            EventListener::new(
                &window,
                "scroll",
                handler(window.clone(), element.clone(), Rc::clone(&phase)),
            ),
            EventListener::new(
                &window,
                "resize",
                handler(window.clone(), element.clone(), Rc::clone(&phase)),
            ),
        ];

        Ok(Self {
            element: element.clone(),
            window,
            policy,
            phase,
            listeners,
        })
    }

    /// Current phase of the watched element.
    #[must_use]
    pub fn phase(&self) -> NavbarPhase {
        self.phase.get()
    }

    /// The policy the helper was attached with.
    #[must_use]
    pub const fn policy(&self) -> CollapsePolicy {
        self.policy
    }

    /// Re-evaluates the phase from the current scroll position, for callers
    /// that move the scroll position programmatically.
    pub fn refresh(&self) {
        if let Some((scroll_y, width)) = metrics(&self.window) {
            apply_phase(
                &self.element,
                &self.phase,
                phase_for(self.policy, scroll_y, width),
            );
        }
    }

    /// Drops the listeners and leaves the row expanded.
    pub fn detach(mut self) {
        self.listeners.clear();
        let _ = self.element.class_list().remove_1(NAVBAR_CONDENSED);
    }
}
