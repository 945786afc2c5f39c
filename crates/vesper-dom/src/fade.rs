//! Gradient highlight fade-out with a one-shot completion signal.
//!
//! # Design
//! - The signal resolves exactly once: on the element's own `transitionend`,
//!   on the timeout guard, or immediately when the highlight class is absent.
//! - Dropping the unresolved future detaches the listener and cancels the
//!   guard, leaving the element's classes untouched.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;

use vesper_core::classes::HighlightClasses;

/// Default guard interval, comfortably past the stylesheet's fade duration.
pub const DEFAULT_TIMEOUT_MS: u32 = 1_500;

/// Options for [`fade_highlight`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FadeOptions {
    /// The highlight/transition class pair to toggle.
    pub classes: HighlightClasses,
    /// Guard interval in milliseconds; `None` disables the guard, restoring
    /// the legacy wait-forever behavior.
    pub timeout_ms: Option<u32>,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            classes: HighlightClasses::default(),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// How the fade signal resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeOutcome {
    /// The transition finished and both classes were removed.
    Completed,
    /// The guard fired first; classes were removed anyway.
    TimedOut,
    /// The highlight class was already absent, nothing to fade.
    AlreadyIdle,
}

type SenderSlot = Rc<RefCell<Option<oneshot::Sender<FadeOutcome>>>>;

/// One-shot completion signal returned by [`fade_highlight`].
///
/// Resolves to a [`FadeOutcome`]; drop it to cancel the wait.
pub struct HighlightFade {
    resolved: Option<FadeOutcome>,
    receiver: Option<oneshot::Receiver<FadeOutcome>>,
    _listener: Option<EventListener>,
    _guard: Option<Timeout>,
}

impl HighlightFade {
    const fn immediate(outcome: FadeOutcome) -> Self {
        Self {
            resolved: Some(outcome),
            receiver: None,
            _listener: None,
            _guard: None,
        }
    }
}

impl Future for HighlightFade {
    type Output = FadeOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = this.resolved.take() {
            return Poll::Ready(outcome);
        }
        let Some(receiver) = this.receiver.as_mut() else {
            return Poll::Pending;
        };
        match Pin::new(receiver).poll(cx) {
            // The sender lives in the listener and guard this future owns,
            // so a cancelled channel is unreachable while we are polled.
            Poll::Ready(result) => Poll::Ready(result.unwrap_or(FadeOutcome::TimedOut)),
            Poll::Pending => Poll::Pending,
        }
    }
}

fn settle(element: &Element, classes: &HighlightClasses, slot: &SenderSlot, outcome: FadeOutcome) {
    let Some(sender) = slot.borrow_mut().take() else {
        return;
    };
    let list = element.class_list();
    let _ = list.remove_2(&classes.highlight, &classes.fade);
    let _ = sender.send(outcome);
}

/// Starts fading the highlight class off `element`.
///
/// When the highlight class is present, adds the paired transition class and
/// waits for the element's own `transitionend` (events bubbling up from
/// children are ignored); both classes come off on completion. When the
/// highlight class is already absent, a stale transition class is removed and
/// the signal resolves immediately with [`FadeOutcome::AlreadyIdle`].
#[must_use]
pub fn fade_highlight(element: &Element, options: FadeOptions) -> HighlightFade {
    let FadeOptions { classes, timeout_ms } = options;
    let list = element.class_list();
    if !list.contains(&classes.highlight) {
        let _ = list.remove_1(&classes.fade);
        return HighlightFade::immediate(FadeOutcome::AlreadyIdle);
    }
    let _ = list.add_1(&classes.fade);

    let (sender, receiver) = oneshot::channel();
    let slot: SenderSlot = Rc::new(RefCell::new(Some(sender)));

    let listener = EventListener::new(element, "transitionend", {
        let element = element.clone();
        let classes = classes.clone();
        let slot = Rc::clone(&slot);
        move |event| {
            let on_element = event.target().is_some_and(|target| {
                target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| element.is_same_node(Some(node)))
            });
            if on_element {
                settle(&element, &classes, &slot, FadeOutcome::Completed);
            }
        }
    });

    let guard = timeout_ms.map(|ms| {
        let element = element.clone();
        Timeout::new(ms, move || {
            settle(&element, &classes, &slot, FadeOutcome::TimedOut);
        })
    });

    HighlightFade {
        resolved: None,
        receiver: Some(receiver),
        _listener: Some(listener),
        _guard: guard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_carry_a_live_guard() {
        let options = FadeOptions::default();
        assert_eq!(options.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
        assert_eq!(options.classes, HighlightClasses::default());
    }

    #[test]
    fn immediate_signal_resolves_without_polling_a_channel() {
        let fade = HighlightFade::immediate(FadeOutcome::AlreadyIdle);
        assert_eq!(fade.resolved, Some(FadeOutcome::AlreadyIdle));
        assert!(fade.receiver.is_none());
    }
}
