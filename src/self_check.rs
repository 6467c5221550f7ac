//! Startup Self-Check
//!
//! Smoke checks for the templating helper and the view, enabled with the
//! `self-check` feature. A failed check stops startup.

use thiserror::Error;

use crate::models::Model;
use crate::template::markup;
use crate::view;

#[derive(Debug, Error)]
#[error("self-check failed: {0}")]
pub struct SelfCheckFailed(&'static str);

fn ok(passed: bool, message: &'static str) -> Result<(), SelfCheckFailed> {
    if passed {
        log::info!("[CHECK] {}", message);
        Ok(())
    } else {
        Err(SelfCheckFailed(message))
    }
}

pub fn run() -> Result<(), SelfCheckFailed> {
    let message = "Hello, world!";
    ok(
        markup!("<div>" {message} "</div>").as_str() == format!("<div>{}</div>", message),
        "it outputs \"Hello, world!\"",
    )?;
    ok(
        !view::render_markup(&Model::default()).is_empty(),
        "it outputs something",
    )?;
    Ok(())
}
