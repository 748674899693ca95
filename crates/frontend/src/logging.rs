//! Tracing output for the browser console.

use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`tracing_subscriber::Layer`] that writes events to the browser console.
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

/// Collects the message and the structured fields of an event.
#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

/// One console line: `LEVEL target: message key=value ...`.
fn format_line(level: Level, target: &str, message: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("{level} {target}: {message}");
    for (key, value) in fields {
        let _ = write!(line, " {key}={value}");
    }
    line
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let line = format_line(
            *metadata.level(),
            metadata.target(),
            &visitor.message,
            &visitor.fields,
        );
        let line = JsValue::from_str(&line);
        match *metadata.level() {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Install the console layer as the global subscriber.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(max_level));
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        console::warn_1(&format!("tracing subscriber already set: {err}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_line_without_fields() {
        assert_eq!(
            format_line(Level::INFO, "frontend::app", "navigate", &[]),
            "INFO frontend::app: navigate"
        );
    }

    #[test]
    fn test_format_line_appends_fields_in_order() {
        let fields = [("path", "/games".to_string()), ("role", "teacher".to_string())];
        assert_eq!(
            format_line(Level::WARN, "frontend", "navigate", &fields),
            "WARN frontend: navigate path=/games role=teacher"
        );
    }
}
