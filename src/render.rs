//! Turning backend responses into what a result element shows.

use crate::backend::error::BackendError;
use pulldown_cmark::{Options, Parser, html};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

/// Content of one result element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// A markdown review, kept both as source and as rendered HTML.
    Markdown { source: String, html: String },
    /// A JSON body, pretty-printed.
    Json(String),
    /// A failed request, holding the bare error message.
    Error(String),
}

impl ResultView {
    pub fn markdown(source: &str) -> Self {
        ResultView::Markdown {
            source: source.to_string(),
            html: markdown_to_html(source),
        }
    }

    pub fn json(value: &Value) -> Self {
        ResultView::Json(pretty_json(value))
    }

    pub fn error(err: &BackendError) -> Self {
        ResultView::Error(err.to_string())
    }

    /// The text the result element displays.
    pub fn text(&self) -> String {
        match self {
            ResultView::Markdown { html, .. } => html.clone(),
            ResultView::Json(json) => json.clone(),
            ResultView::Error(message) => format!("Error: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error(_))
    }
}

/// Renders CommonMark to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Pretty-prints a JSON value with two-space indentation, keeping key order.
///
/// Numbers are written the way a browser's `JSON.stringify` writes them.
pub fn pretty_json(value: &Value) -> String {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, JsFormatter::default());
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(out).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

/// ECMAScript `Number::toString` for a finite double.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // Shortest round-trip digits, never in exponent form
        return value.to_string();
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponential,
    }
}

/// Two-space pretty printing with JavaScript number formatting.
#[derive(Default)]
struct JsFormatter {
    pretty: PrettyFormatter<'static>,
}

impl Formatter for JsFormatter {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(js_number(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

/// Extracts the first review from a `/review_file` body: `{"review": {"<file>": "<markdown>"}}`.
pub fn first_review(body: &Value) -> Result<&str, BackendError> {
    let review = body
        .get("review")
        .and_then(Value::as_object)
        .ok_or_else(|| BackendError::UnexpectedShape("missing review object".to_string()))?;

    let (_, first) = review
        .iter()
        .next()
        .ok_or_else(|| BackendError::UnexpectedShape("review object is empty".to_string()))?;

    first
        .as_str()
        .ok_or_else(|| BackendError::UnexpectedShape("review is not a markdown string".to_string()))
}
