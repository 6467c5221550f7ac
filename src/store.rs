//! Todo Store
//!
//! Single owner of the model and the mounted container. Callers never touch
//! the model directly: `dispatch` applies an intent, then renders if the
//! intent asked for it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::Config;
use crate::intent::{self, Effect, Intent};
use crate::models::Model;
use crate::view;

/// Copyable handle to the widget state
#[derive(Clone, Copy)]
pub struct TodoStore {
    model: StoredValue<Model>,
    container: StoredValue<Option<web_sys::Element>, LocalStorage>,
    focus_after_add: bool,
}

impl TodoStore {
    pub fn new(config: &Config) -> Self {
        Self {
            model: StoredValue::new(Model::with_todos(config.todos.clone())),
            container: StoredValue::new_local(None),
            focus_after_add: config.focus_after_add,
        }
    }

    /// Set the element renders are written into
    pub fn attach(&self, container: web_sys::Element) {
        self.container.set_value(Some(container));
    }

    /// Copy of the current model
    pub fn snapshot(&self) -> Model {
        self.model.get_value()
    }

    /// Full re-render of the attached container
    pub fn render(&self) {
        let Some(container) = self.container.get_value() else {
            log::debug!("[TODO] Render skipped, no container attached");
            return;
        };
        // Render from a copy: replacing the DOM can fire focusout on a live
        // label, which dispatches again
        let model = self.snapshot();
        view::render(&container, &model);
    }

    /// Apply `intent`, perform store-level effects (render, input focus) and
    /// return the effects that target the event's own element
    pub fn dispatch(&self, intent: Intent) -> Vec<Effect> {
        log::debug!("[TODO] Dispatch {:?}", intent);
        let Some(outcome) = self.model.try_update_value(|model| intent::apply(model, intent)) else {
            log::warn!("[TODO] Store disposed, intent dropped");
            return Vec::new();
        };
        let effects = match outcome {
            Ok(effects) => effects,
            Err(err) => {
                log::warn!("[INTENT] Ignored: {}", err);
                return Vec::new();
            }
        };

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                Effect::Render => self.render(),
                Effect::FocusInput => {
                    if self.focus_after_add {
                        self.focus_input();
                    }
                }
                other => remaining.push(other),
            }
        }
        remaining
    }

    fn focus_input(&self) {
        let Some(container) = self.container.get_value() else {
            return;
        };
        let input = container
            .query_selector(&format!("#{}", view::TEXT_INPUT_ID))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(input) = input {
            let _ = input.focus();
        }
    }
}
