//! View
//!
//! Pure markup generation for the whole widget, plus the render pass that
//! replaces the container's content with it. No diffing.

use crate::models::Model;
use crate::template::{html, markup, Markup};

/// Id of the text input inside the container
pub const TEXT_INPUT_ID: &str = "text";
pub const PLACEHOLDER: &str = "What needs to be done?";
/// Class added to the container so the embedded style can target it
pub const CONTAINER_CLASS: &str = "todo-widget";

const STYLE: &str = r#"
<style>
  label {
    width: 165px;
    display: inline-block;
  }
  .todo-widget {
    text-align: center;
  }
  ul {
    margin: auto;
    list-style-type: none;
    padding-left: 0;
  }
</style>"#;

/// "N item(s) left", or nothing for an empty list
pub fn footer_text(count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }
    let plural = if count != 1 { "s" } else { "" };
    Some(format!("{} item{} left", count, plural))
}

fn row(index: usize, todo: &str) -> Markup {
    html(
        &[
            "\n  <li>\n    <input type='checkbox'>\n    <label data-index='",
            "'>",
            "</label>\n    <button data-index='",
            "'>Delete</button>\n  </li>",
        ],
        &[&index, &todo, &index],
    )
}

/// Markup for the full widget
pub fn render_markup(model: &Model) -> Markup {
    let rows: Vec<Markup> = model
        .todos
        .iter()
        .enumerate()
        .map(|(index, todo)| row(index, todo))
        .collect();
    let footer = footer_text(model.items_left()).map(|text| markup!("<div>" {text} "</div>"));

    markup!(
        "\n<h3>todos</h3>"
        "\n<input type='checkbox'>"
        "\n<input id='" {TEXT_INPUT_ID} "' placeholder='" {PLACEHOLDER} "' value='" {model.text} "'>"
        "\n<ul>" {rows} "\n</ul>\n"
        {footer}
        {Markup::raw(STYLE)}
    )
}

/// Replace `container`'s children with the markup for `model`
pub fn render(container: &web_sys::Element, model: &Model) {
    let markup = render_markup(model);
    log::debug!(
        "[VIEW] Rendering {} items ({} bytes)",
        model.todos.len(),
        markup.len()
    );
    container.set_inner_html(markup.as_str());
}
