//! DOM Bindings
//!
//! Delegated listeners on the container. Each event is decoded into an
//! `Intent`, dispatched through the store, and the effects aimed at the
//! event's element are carried out here.

use leptos_delegate::{data_attr, Delegation};
use wasm_bindgen::JsCast;

use crate::intent::{parse_index, Effect, Intent, IntentError, Key, Role, ROUTES};
use crate::store::TodoStore;

/// Bind every route on `container`
pub fn bind(store: TodoStore, container: &web_sys::Element) -> Delegation {
    ROUTES
        .iter()
        .fold(Delegation::new(container), |delegation, &(event_type, role)| {
            delegation.on(event_type, role.selector(), move |ev, el| {
                handle(store, event_type, role, &ev, &el)
            })
        })
}

fn handle(store: TodoStore, event_type: &str, role: Role, ev: &web_sys::Event, el: &web_sys::Element) {
    match decode(event_type, role, ev, el) {
        Ok(intent) => {
            let effects = store.dispatch(intent);
            perform(&effects, ev, el);
        }
        Err(err) => log::warn!("[INTENT] {} dropped: {}", event_type, err),
    }
}

fn key_of(ev: &web_sys::Event) -> Key {
    ev.dyn_ref::<web_sys::KeyboardEvent>()
        .map(|kev| Key::from_key(&kev.key()))
        .unwrap_or(Key::Other)
}

fn index_of(el: &web_sys::Element) -> Result<usize, IntentError> {
    parse_index(data_attr(el, "index"))
}

fn decode(
    event_type: &str,
    role: Role,
    ev: &web_sys::Event,
    el: &web_sys::Element,
) -> Result<Intent, IntentError> {
    let intent = match (event_type, role) {
        ("keyup", Role::TextInput) => match el.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input) => Intent::InputKeyUp {
                value: input.value(),
                key: key_of(ev),
            },
            None => return Err(unrouted(event_type, role)),
        },
        ("change", Role::Checkbox) => match el.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input) => Intent::ToggleCompletion {
                checked: input.checked(),
            },
            None => return Err(unrouted(event_type, role)),
        },
        ("click", Role::DeleteButton) => Intent::Delete {
            index: index_of(el)?,
        },
        ("dblclick", Role::Label) => Intent::EditStart,
        ("input", Role::Label) => Intent::EditInput {
            index: index_of(el)?,
            text: el.text_content().unwrap_or_default(),
        },
        ("focusout", Role::Label) => Intent::EditEnd,
        ("keydown", Role::Label) => Intent::EditKey { key: key_of(ev) },
        _ => return Err(unrouted(event_type, role)),
    };
    Ok(intent)
}

fn unrouted(event_type: &str, role: Role) -> IntentError {
    IntentError::Unrouted {
        event: event_type.to_string(),
        role,
    }
}

fn perform(effects: &[Effect], ev: &web_sys::Event, el: &web_sys::Element) {
    let html_el = el.dyn_ref::<web_sys::HtmlElement>();
    for effect in effects {
        match effect {
            Effect::Uncheck => {
                if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                    input.set_checked(false);
                }
            }
            Effect::Notify(message) => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(message);
                }
            }
            Effect::SetEditable(on) => {
                if let Some(html_el) = html_el {
                    html_el.set_content_editable(if *on { "true" } else { "false" });
                }
            }
            Effect::Focus => {
                if let Some(html_el) = html_el {
                    let _ = html_el.focus();
                }
            }
            Effect::Blur => {
                if let Some(html_el) = html_el {
                    let _ = html_el.blur();
                }
            }
            Effect::PreventDefault => ev.prevent_default(),
            // Handled by the store
            Effect::Render | Effect::FocusInput => {}
        }
    }
}
