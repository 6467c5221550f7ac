//! String Templating
//!
//! Tagged-template style interpolation used to build the view's markup.
//!
//! - Literal fragments are copied unchanged.
//! - Text values (`&str`, `String`) are HTML-escaped.
//! - Numbers are written with `Display`.
//! - `Markup` values, produced by this module, are spliced verbatim.
//! - Lists are concatenated with no separator, which is how per-row fragments
//!   end up inside the outer fragment.

use std::fmt::{self, Write};

/// Markup built by the templating helper (already escaped)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap a trusted string without escaping it
    pub fn raw(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value that can appear between two literal fragments
pub trait Interpolate {
    fn interpolate(&self, out: &mut String);
}

impl Interpolate for str {
    fn interpolate(&self, out: &mut String) {
        escape_into(self, out);
    }
}

impl Interpolate for String {
    fn interpolate(&self, out: &mut String) {
        escape_into(self, out);
    }
}

impl Interpolate for Markup {
    fn interpolate(&self, out: &mut String) {
        out.push_str(&self.0);
    }
}

impl<T: Interpolate + ?Sized> Interpolate for &T {
    fn interpolate(&self, out: &mut String) {
        (**self).interpolate(out);
    }
}

impl<T: Interpolate> Interpolate for [T] {
    fn interpolate(&self, out: &mut String) {
        for value in self {
            value.interpolate(out);
        }
    }
}

impl<T: Interpolate> Interpolate for Vec<T> {
    fn interpolate(&self, out: &mut String) {
        self.as_slice().interpolate(out);
    }
}

impl<T: Interpolate> Interpolate for Option<T> {
    fn interpolate(&self, out: &mut String) {
        if let Some(value) = self {
            value.interpolate(out);
        }
    }
}

impl Interpolate for usize {
    fn interpolate(&self, out: &mut String) {
        let _ = write!(out, "{}", self);
    }
}

/// Write `text` with `& < > " '` replaced by entities
pub fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// `strings[0] + values[0] + strings[1] + ... + strings[last]`
///
/// `strings` must hold exactly one more entry than `values`. Any other
/// pairing is a caller bug (asserted in debug builds).
pub fn html(strings: &[&str], values: &[&dyn Interpolate]) -> Markup {
    debug_assert_eq!(strings.len(), values.len() + 1);
    let mut out = String::with_capacity(strings.iter().map(|s| s.len()).sum());
    for (i, literal) in strings.iter().enumerate() {
        out.push_str(literal);
        if let Some(value) = values.get(i) {
            value.interpolate(&mut out);
        }
    }
    Markup(out)
}

/// Inline form of [`html`]: string literals are fragments, `{expr}` groups
/// are interpolated.
///
/// ```ignore
/// let m = markup!("<div>" {name} "</div>");
/// ```
macro_rules! markup {
    (@part $out:ident $literal:literal) => {
        $out.push_str($literal);
    };
    (@part $out:ident { $value:expr }) => {
        $crate::template::Interpolate::interpolate(&$value, &mut $out);
    };
    ($($part:tt)*) => {{
        #[allow(unused_mut)]
        let mut out = ::std::string::String::new();
        $( $crate::template::markup!(@part out $part); )*
        $crate::template::Markup::raw(out)
    }};
}

pub(crate) use markup;
