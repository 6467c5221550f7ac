//! Frontend Models
//!
//! The widget's only state.

use serde::{Deserialize, Serialize};

/// Input text plus the ordered item labels.
///
/// Items have no id: the position in `todos` is the identity used by
/// `data-index`, so indices shift after a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Current value of the text input
    pub text: String,
    /// Item labels in insertion order
    pub todos: Vec<String>,
}

impl Model {
    pub fn with_todos(todos: Vec<String>) -> Self {
        Self {
            text: String::new(),
            todos,
        }
    }

    pub fn items_left(&self) -> usize {
        self.todos.len()
    }
}
