//! DOM binding for the searchable dropdown.
//!
//! # Design
//! - All widget logic lives in [`vesper_core::datalist`]; this layer only
//!   translates DOM events into state transitions and re-renders the panel.
//! - The markup (input plus `<ul>` panel) is built inside the caller's
//!   container and removed again by [`Datalist::destroy`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use vesper_core::classes::{
    DATALIST, DATALIST_ACTIVE, DATALIST_EMPTY, DATALIST_INPUT, DATALIST_OPEN, DATALIST_OPTION,
    DATALIST_OPTIONS,
};
use vesper_core::datalist::{
    DatalistConfig, DatalistKey, DatalistOption, DatalistState, KeyOutcome, SelectedOption,
};

use crate::error::{AttachError, AttachResult};

struct Widget {
    state: DatalistState,
    document: Document,
    root: Element,
    input: HtmlInputElement,
    panel: Element,
}

fn dom_err(operation: &'static str) -> AttachError {
    AttachError::Dom { operation }
}

fn render(widget: &Widget) {
    let panel = &widget.panel;
    panel.set_inner_html("");

    if widget.state.filtered_len() == 0 {
        let Ok(item) = widget.document.create_element("li") else {
            console::error!("datalist: failed to build the empty-state entry");
            return;
        };
        item.set_class_name(DATALIST_EMPTY);
        item.set_text_content(Some(&widget.state.config().empty_message));
        let _ = panel.append_child(&item);
    } else {
        for (pos, option) in widget.state.filtered().enumerate() {
            let Ok(item) = widget.document.create_element("li") else {
                console::error!("datalist: failed to build an option entry");
                return;
            };
            item.set_class_name(DATALIST_OPTION);
            if widget.state.highlighted() == Some(pos) {
                let _ = item.class_list().add_1(DATALIST_ACTIVE);
            }
            let _ = item.set_attribute("data-value", &option.value);
            let _ = item.set_attribute("role", "option");
            let selected = widget.state.value() == Some(option.value.as_str());
            let _ = item.set_attribute("aria-selected", if selected { "true" } else { "false" });
            item.set_text_content(Some(&option.label));
            let _ = panel.append_child(&item);
        }
    }

    let open = widget.state.is_open();
    let root_classes = widget.root.class_list();
    let _ = if open {
        root_classes.add_1(DATALIST_OPEN)
    } else {
        root_classes.remove_1(DATALIST_OPEN)
    };
    let _ = widget
        .input
        .set_attribute("aria-expanded", if open { "true" } else { "false" });
}

/// The searchable dropdown, attached to a caller-supplied container.
pub struct Datalist {
    widget: Rc<RefCell<Widget>>,
    listeners: Vec<EventListener>,
}

impl Datalist {
    /// Validates the options, builds the widget markup inside `root`, and
    /// wires the input, keyboard, and click listeners.
    ///
    /// `on_change` fires once per user selection (keyboard or click) with the
    /// committed `{value, label}` pair; programmatic [`Self::set_value`] does
    /// not fire it.
    ///
    /// # Errors
    ///
    /// Fails on invalid options, a container outside any document, or a
    /// refused DOM call while building the markup.
    pub fn attach(
        root: &Element,
        options: Vec<DatalistOption>,
        config: DatalistConfig,
        on_change: impl Fn(SelectedOption) + 'static,
    ) -> AttachResult<Self> {
        let state = DatalistState::new(options, config)?;
        let document = root.owner_document().ok_or(AttachError::DetachedNode)?;

        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|_| dom_err("create input"))?
            .dyn_into()
            .map_err(|_| dom_err("create input"))?;
        input.set_type("text");
        input.set_class_name(DATALIST_INPUT);
        input.set_placeholder(&state.config().placeholder);
        input
            .set_attribute("role", "combobox")
            .and_then(|()| input.set_attribute("aria-autocomplete", "list"))
            .and_then(|()| input.set_attribute("aria-expanded", "false"))
            .map_err(|_| dom_err("set input attributes"))?;

        let panel = document
            .create_element("ul")
            .map_err(|_| dom_err("create panel"))?;
        panel.set_class_name(DATALIST_OPTIONS);
        panel
            .set_attribute("role", "listbox")
            .map_err(|_| dom_err("set panel attributes"))?;

        let _ = root.class_list().add_1(DATALIST);
        root.append_child(&input)
            .and_then(|_| root.append_child(&panel))
            .map_err(|_| dom_err("append widget markup"))?;

        let widget = Rc::new(RefCell::new(Widget {
            state,
            document,
            root: root.clone(),
            input: input.clone(),
            panel: panel.clone(),
        }));
        render(&widget.borrow());

        let on_change: Rc<dyn Fn(SelectedOption)> = Rc::new(on_change);
        let listeners = vec![
            Self::input_listener(&input, &widget),
            Self::keydown_listener(&input, &widget, &on_change),
            Self::click_listener(&panel, &widget, &on_change),
        ];

        Ok(Self { widget, listeners })
    }

    fn input_listener(input: &HtmlInputElement, widget: &Rc<RefCell<Widget>>) -> EventListener {
        EventListener::new(input, "input", {
            let widget = Rc::clone(widget);
            move |_event| {
                let widget = &mut *widget.borrow_mut();
                let text = widget.input.value();
                widget.state.set_query(&text);
                widget.state.open();
                render(widget);
            }
        })
    }

    fn keydown_listener(
        input: &HtmlInputElement,
        widget: &Rc<RefCell<Widget>>,
        on_change: &Rc<dyn Fn(SelectedOption)>,
    ) -> EventListener {
        // Non-passive so arrows and Enter can suppress caret movement and
        // form submission.
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(input, "keydown", options, {
            let widget = Rc::clone(widget);
            let on_change = Rc::clone(on_change);
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(key) = DatalistKey::from_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                let committed = {
                    let widget = &mut *widget.borrow_mut();
                    let committed = match widget.state.apply_key(key) {
                        KeyOutcome::Committed(selected) => {
                            widget.input.set_value(&selected.label);
                            Some(selected)
                        }
                        KeyOutcome::Navigated | KeyOutcome::Closed | KeyOutcome::Ignored => None,
                    };
                    render(widget);
                    committed
                };
                if let Some(selected) = committed {
                    on_change(selected);
                }
            }
        })
    }

    fn click_listener(
        panel: &Element,
        widget: &Rc<RefCell<Widget>>,
        on_change: &Rc<dyn Fn(SelectedOption)>,
    ) -> EventListener {
        EventListener::new(panel, "click", {
            let widget = Rc::clone(widget);
            let on_change = Rc::clone(on_change);
            move |event| {
                let Some(target) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Some(item) = target.closest("li[data-value]").ok().flatten() else {
                    return;
                };
                let Some(value) = item.get_attribute("data-value") else {
                    return;
                };
                let committed = {
                    let widget = &mut *widget.borrow_mut();
                    let committed = widget.state.commit_value(&value);
                    if let Some(selected) = &committed {
                        widget.input.set_value(&selected.label);
                    }
                    render(widget);
                    committed
                };
                if let Some(selected) = committed {
                    on_change(selected);
                }
            }
        })
    }

    /// Current selection key.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.widget.borrow().state.value().map(str::to_string)
    }

    /// Selects the option with the given value key, or clears the selection
    /// when no option matches. Returns whether a match was found.
    pub fn set_value(&self, value: &str) -> bool {
        let widget = &mut *self.widget.borrow_mut();
        let matched = widget.state.select_value(value);
        widget.input.set_value(widget.state.query());
        render(widget);
        matched
    }

    /// Resets the selection and the query text.
    pub fn clear(&self) {
        let widget = &mut *self.widget.borrow_mut();
        widget.state.clear();
        widget.input.set_value("");
        render(widget);
    }

    /// Shows the option panel.
    pub fn open(&self) {
        let widget = &mut *self.widget.borrow_mut();
        widget.state.open();
        render(widget);
    }

    /// Hides the option panel.
    pub fn close(&self) {
        let widget = &mut *self.widget.borrow_mut();
        widget.state.close();
        render(widget);
    }

    /// Whether the option panel is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.widget.borrow().state.is_open()
    }

    /// Drops all listeners and removes the widget markup from the container.
    pub fn destroy(mut self) {
        self.listeners.clear();
        let widget = self.widget.borrow();
        widget.input.remove();
        widget.panel.remove();
        let _ = widget.root.class_list().remove_2(DATALIST, DATALIST_OPEN);
    }
}
