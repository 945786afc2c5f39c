//! Navigation warning while unsaved edits exist.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::BeforeUnloadEvent;

use crate::error::{AttachError, AttachResult};

/// Arms the browser's navigation confirmation while the dirty flag is set.
///
/// The custom message degrades gracefully: most browsers show their own
/// wording and ignore the supplied text.
pub struct UnsavedChanges {
    dirty: Rc<Cell<bool>>,
    _listener: EventListener,
}

impl UnsavedChanges {
    /// Registers the `beforeunload` listener with the browser's default
    /// confirmation text.
    ///
    /// # Errors
    ///
    /// Fails outside a browser page.
    pub fn attach() -> AttachResult<Self> {
        Self::new(None)
    }

    /// Registers the `beforeunload` listener with a custom message, where
    /// the browser honors one.
    ///
    /// # Errors
    ///
    /// Fails outside a browser page.
    pub fn attach_with_message(message: &str) -> AttachResult<Self> {
        Self::new(Some(message.to_string()))
    }

    fn new(message: Option<String>) -> AttachResult<Self> {
        if !cfg!(target_arch = "wasm32") {
            return Err(AttachError::NoWindow);
        }
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        let dirty = Rc::new(Cell::new(false));

        // beforeunload only blocks navigation when preventDefault is allowed,
        // so the listener must not be passive.
        let options = EventListenerOptions::enable_prevent_default();
        let listener = EventListener::new_with_options(&window, "beforeunload", options, {
            let dirty = Rc::clone(&dirty);
            move |event| {
                if !dirty.get() {
                    return;
                }
                event.prevent_default();
                if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                    event.set_return_value(message.as_deref().unwrap_or(""));
                }
            }
        });

        Ok(Self {
            dirty,
            _listener: listener,
        })
    }

    /// Marks unsaved edits present, arming the confirmation.
    pub fn set_dirty(&self) {
        self.dirty.set(true);
    }

    /// Marks all edits saved, suppressing the confirmation.
    pub fn set_clean(&self) {
        self.dirty.set(false);
    }

    /// Whether unsaved edits are currently flagged.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Removes the listener; no further confirmation fires.
    pub fn destroy(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_outside_a_browser_fails_cleanly() {
        assert!(matches!(
            UnsavedChanges::attach(),
            Err(AttachError::NoWindow)
        ));
    }
}
