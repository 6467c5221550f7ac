//! Intent
//!
//! What a DOM event means for the model. `apply` performs the model
//! transition and returns the effects still owed to the page; the DOM side
//! lives in `bindings`.

use thiserror::Error;

use crate::models::Model;

pub const COMPLETION_NOTICE: &str = "It's an Italian todo. Italians never finish things, like Expo";

/// Elements inside the container that carry handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TextInput,
    Checkbox,
    Label,
    DeleteButton,
}

impl Role {
    /// Selector resolving the acted-on element from an event target
    pub fn selector(self) -> &'static str {
        match self {
            Role::TextInput => "#text",
            Role::Checkbox => "input[type=checkbox]",
            Role::Label => "label[data-index]",
            Role::DeleteButton => "button[data-index]",
        }
    }
}

/// Delegated event types and the element role each one is routed to.
///
/// `focusout` stands in for `blur` (which does not bubble) and `keydown` for
/// `keypress` (which never fires for Escape).
pub const ROUTES: &[(&str, Role)] = &[
    ("keyup", Role::TextInput),
    ("change", Role::Checkbox),
    ("click", Role::DeleteButton),
    ("dblclick", Role::Label),
    ("input", Role::Label),
    ("focusout", Role::Label),
    ("keydown", Role::Label),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    /// From `KeyboardEvent.key`
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// A decoded user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Key released in the text input, with the input's current value
    InputKeyUp { value: String, key: Key },
    /// A checkbox changed
    ToggleCompletion { checked: bool },
    /// Delete button for the row at `index`
    Delete { index: usize },
    /// Double-click on a label
    EditStart,
    /// Label text edited in place
    EditInput { index: usize, text: String },
    /// Label lost focus
    EditEnd,
    /// Key pressed on an editable label
    EditKey { key: Key },
}

/// Page-side work left after the model update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-render the whole container
    Render,
    /// Move focus back to the text input (after a render)
    FocusInput,
    /// Force the event's checkbox back to unchecked
    Uncheck,
    /// Blocking notification
    Notify(&'static str),
    /// Toggle `contentEditable` on the event's label
    SetEditable(bool),
    /// Focus the event's element
    Focus,
    /// Remove focus from the event's element
    Blur,
    PreventDefault,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("index {index} is out of range for {len} items")]
    StaleIndex { index: usize, len: usize },
    #[error("data-index {0:?} is not a valid index")]
    BadIndex(Option<String>),
    #[error("{event} has no handler for {role:?}")]
    Unrouted { event: String, role: Role },
}

/// Parse a `data-index` attribute value
pub fn parse_index(raw: Option<String>) -> Result<usize, IntentError> {
    let parsed = raw.as_deref().and_then(|s| s.trim().parse::<usize>().ok());
    parsed.ok_or(IntentError::BadIndex(raw))
}

fn check_index(model: &Model, index: usize) -> Result<(), IntentError> {
    if index < model.todos.len() {
        Ok(())
    } else {
        Err(IntentError::StaleIndex {
            index,
            len: model.todos.len(),
        })
    }
}

/// Apply an intent to the model.
///
/// A stale index leaves the model untouched and returns `StaleIndex`.
pub fn apply(model: &mut Model, intent: Intent) -> Result<Vec<Effect>, IntentError> {
    let effects = match intent {
        Intent::InputKeyUp { value, key } => {
            model.text = value;
            if key == Key::Enter {
                let added = std::mem::take(&mut model.text);
                log::info!("[INTENT] Added item {}", model.todos.len());
                model.todos.push(added);
                vec![Effect::Render, Effect::FocusInput]
            } else {
                Vec::new()
            }
        }
        Intent::ToggleCompletion { checked } => {
            if checked {
                vec![Effect::Uncheck, Effect::Notify(COMPLETION_NOTICE)]
            } else {
                vec![Effect::Uncheck]
            }
        }
        Intent::Delete { index } => {
            check_index(model, index)?;
            model.todos.remove(index);
            log::info!("[INTENT] Deleted item {}", index);
            vec![Effect::Render]
        }
        Intent::EditStart => vec![Effect::SetEditable(true), Effect::Focus],
        Intent::EditInput { index, text } => {
            check_index(model, index)?;
            model.todos[index] = text;
            Vec::new()
        }
        Intent::EditEnd => vec![Effect::SetEditable(false)],
        Intent::EditKey { key } => match key {
            Key::Enter => vec![Effect::PreventDefault, Effect::Blur],
            Key::Escape => vec![Effect::Blur],
            Key::Other => Vec::new(),
        },
    };
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(todos: &[&str]) -> Model {
        Model::with_todos(todos.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_enter_appends_and_clears_text() {
        let mut m = Model::default();
        let effects = apply(
            &mut m,
            Intent::InputKeyUp {
                value: "buy milk".to_string(),
                key: Key::Enter,
            },
        )
        .unwrap();
        assert_eq!(m.todos, vec!["buy milk".to_string()]);
        assert_eq!(m.text, "");
        assert_eq!(effects, vec![Effect::Render, Effect::FocusInput]);
    }

    #[test]
    fn test_other_keys_only_track_text() {
        let mut m = model(&["a"]);
        let effects = apply(
            &mut m,
            Intent::InputKeyUp {
                value: "buy".to_string(),
                key: Key::Other,
            },
        )
        .unwrap();
        assert_eq!(m.text, "buy");
        assert_eq!(m.todos, vec!["a".to_string()]);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_enter_on_empty_input_still_appends() {
        let mut m = Model::default();
        apply(
            &mut m,
            Intent::InputKeyUp {
                value: String::new(),
                key: Key::Enter,
            },
        )
        .unwrap();
        assert_eq!(m.todos, vec![String::new()]);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut m = model(&["a", "b", "c"]);
        let effects = apply(&mut m, Intent::Delete { index: 0 }).unwrap();
        assert_eq!(m.todos, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(effects, vec![Effect::Render]);
    }

    #[test]
    fn test_stale_delete_is_rejected_without_change() {
        let mut m = model(&["a"]);
        let err = apply(&mut m, Intent::Delete { index: 3 }).unwrap_err();
        assert_eq!(err, IntentError::StaleIndex { index: 3, len: 1 });
        assert_eq!(m.todos, vec!["a".to_string()]);
    }

    #[test]
    fn test_completion_toggle_never_changes_todos() {
        for checked in [true, false] {
            let mut m = model(&["a", "b"]);
            let effects = apply(&mut m, Intent::ToggleCompletion { checked }).unwrap();
            assert_eq!(m, model(&["a", "b"]));
            assert_eq!(effects[0], Effect::Uncheck);
            assert_eq!(
                effects.contains(&Effect::Notify(COMPLETION_NOTICE)),
                checked
            );
        }
    }

    #[test]
    fn test_edit_input_writes_back_without_render() {
        let mut m = model(&["a", "b"]);
        let effects = apply(
            &mut m,
            Intent::EditInput {
                index: 1,
                text: "bee".to_string(),
            },
        )
        .unwrap();
        assert_eq!(m.todos, vec!["a".to_string(), "bee".to_string()]);
        assert!(effects.is_empty());

        let err = apply(
            &mut m,
            Intent::EditInput {
                index: 2,
                text: "x".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, IntentError::StaleIndex { index: 2, len: 2 });
    }

    #[test]
    fn test_edit_lifecycle() {
        let mut m = model(&["a"]);
        assert_eq!(
            apply(&mut m, Intent::EditStart).unwrap(),
            vec![Effect::SetEditable(true), Effect::Focus]
        );
        assert_eq!(
            apply(&mut m, Intent::EditKey { key: Key::Enter }).unwrap(),
            vec![Effect::PreventDefault, Effect::Blur]
        );
        assert_eq!(
            apply(&mut m, Intent::EditKey { key: Key::Escape }).unwrap(),
            vec![Effect::Blur]
        );
        assert!(apply(&mut m, Intent::EditKey { key: Key::Other })
            .unwrap()
            .is_empty());
        assert_eq!(
            apply(&mut m, Intent::EditEnd).unwrap(),
            vec![Effect::SetEditable(false)]
        );
        assert_eq!(m, model(&["a"]));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(Some("2".to_string())), Ok(2));
        assert_eq!(parse_index(Some(" 0 ".to_string())), Ok(0));
        assert_eq!(
            parse_index(Some("-1".to_string())),
            Err(IntentError::BadIndex(Some("-1".to_string())))
        );
        assert_eq!(parse_index(None), Err(IntentError::BadIndex(None)));
    }

    #[test]
    fn test_routes_cover_every_handler_once() {
        let events: Vec<&str> = ROUTES.iter().map(|(event, _)| *event).collect();
        assert_eq!(
            events,
            vec!["keyup", "change", "click", "dblclick", "input", "focusout", "keydown"]
        );
        let labels = ROUTES.iter().filter(|(_, role)| *role == Role::Label).count();
        assert_eq!(labels, 4);
        assert_eq!(Role::DeleteButton.selector(), "button[data-index]");
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key("Enter"), Key::Enter);
        assert_eq!(Key::from_key("Esc"), Key::Escape);
        assert_eq!(Key::from_key("a"), Key::Other);
    }
}
