//! Syncs the dark-mode class with the system preference and an optional
//! toggle control.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, MediaQueryList, MediaQueryListEvent};

use vesper_core::classes::DARK;
use vesper_core::theme::{ThemeMode, ThemeState};

use crate::error::{AttachError, AttachResult};

const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

struct Inner {
    state: ThemeState,
    root: Element,
    checkbox: Option<HtmlInputElement>,
}

fn apply(inner: &Inner) {
    let list = inner.root.class_list();
    let _ = if inner.state.is_dark() {
        list.add_1(DARK)
    } else {
        list.remove_1(DARK)
    };
    if let Some(checkbox) = &inner.checkbox {
        checkbox.set_checked(inner.state.is_dark());
    }
}

/// Owns the dark class on a root element.
///
/// Follows the system color-scheme preference until [`Self::toggle`] or
/// [`Self::set_mode`] pins a manual choice. No persistence: a reload starts
/// from the system preference again.
pub struct ThemeController {
    inner: Rc<RefCell<Inner>>,
    _media_listener: EventListener,
    checkbox_listener: Option<EventListener>,
}

impl ThemeController {
    /// Attaches to the document element.
    ///
    /// # Errors
    ///
    /// Fails outside a browser page or when the color-scheme media query is
    /// unavailable.
    pub fn attach() -> AttachResult<Self> {
        if !cfg!(target_arch = "wasm32") {
            return Err(AttachError::NoWindow);
        }
        let document = web_sys::window()
            .ok_or(AttachError::NoWindow)?
            .document()
            .ok_or(AttachError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or(AttachError::NoDocument)?;
        Self::attach_to(&root)
    }

    /// Attaches to a caller-supplied root element instead of `<html>`.
    ///
    /// # Errors
    ///
    /// Fails outside a browser page or when the color-scheme media query is
    /// unavailable.
    pub fn attach_to(root: &Element) -> AttachResult<Self> {
        if !cfg!(target_arch = "wasm32") {
            return Err(AttachError::NoWindow);
        }
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        let media: MediaQueryList = window
            .match_media(PREFERS_DARK)
            .ok()
            .flatten()
            .ok_or(AttachError::MediaQuery {
                query: PREFERS_DARK,
            })?;

        let inner = Rc::new(RefCell::new(Inner {
            state: ThemeState::from_system(media.matches()),
            root: root.clone(),
            checkbox: None,
        }));
        apply(&inner.borrow());

        let media_listener = EventListener::new(&media, "change", {
            let inner = Rc::clone(&inner);
            move |event| {
                let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let mut inner = inner.borrow_mut();
                if inner.state.system_changed(event.matches()) {
                    apply(&inner);
                }
            }
        });

        Ok(Self {
            inner,
            _media_listener: media_listener,
            checkbox_listener: None,
        })
    }

    /// Binds a checkbox as the toggle control.
    ///
    /// The checked state mirrors dark mode in both directions: the checkbox
    /// is updated on every mode change, and user changes to the checkbox pin
    /// the matching mode. Rebinding replaces any previous control.
    pub fn bind_checkbox(&mut self, checkbox: &HtmlInputElement) {
        {
            let mut inner = self.inner.borrow_mut();
            checkbox.set_checked(inner.state.is_dark());
            inner.checkbox = Some(checkbox.clone());
        }
        self.checkbox_listener = Some(EventListener::new(checkbox, "change", {
            let inner = Rc::clone(&self.inner);
            let checkbox = checkbox.clone();
            move |_event| {
                let mode = if checkbox.checked() {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
                let mut inner = inner.borrow_mut();
                inner.state.set_mode(mode);
                apply(&inner);
            }
        }));
    }

    /// Flips the mode, pinning it as a manual override.
    pub fn toggle(&self) -> ThemeMode {
        let mut inner = self.inner.borrow_mut();
        let mode = inner.state.toggle();
        apply(&inner);
        mode
    }

    /// Sets the mode explicitly, pinning it as a manual override.
    pub fn set_mode(&self, mode: ThemeMode) {
        let mut inner = self.inner.borrow_mut();
        inner.state.set_mode(mode);
        apply(&inner);
    }

    /// Effective mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.inner.borrow().state.mode()
    }

    /// Whether dark mode is in effect.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.inner.borrow().state.is_dark()
    }

    /// Whether the controller still tracks the system preference.
    #[must_use]
    pub fn follows_system(&self) -> bool {
        self.inner.borrow().state.follows_system()
    }

    /// Drops both listeners. The current class and checkbox state are left
    /// in place so the page does not flash.
    pub fn detach(mut self) {
        self.checkbox_listener = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_outside_a_browser_fails_cleanly() {
        assert!(matches!(
            ThemeController::attach(),
            Err(AttachError::NoWindow)
        ));
    }
}
