//! Plain-text painting of component state for the terminal

use std::collections::HashMap;
use strum::IntoEnumIterator;
use vfilms_core::{
    ContactField, CounterConfig, CounterFrame, FormState, Notification, ServiceCatalog,
    ServiceEntry,
};

pub fn counter_labels(counters: &[CounterConfig]) -> HashMap<String, String> {
    counters
        .iter()
        .map(|c| (c.key.clone(), c.display_label().to_string()))
        .collect()
}

pub fn counter_line(frame: &CounterFrame, labels: &HashMap<String, String>) -> String {
    frame
        .readings
        .iter()
        .map(|r| {
            let label = labels.get(&r.key).map(String::as_str).unwrap_or(&r.key);
            format!("{:>5}+ {}", r.current, label)
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn notification_line(notification: &Notification) -> String {
    format!("[{}] {}", notification.title(), notification.text)
}

pub fn form_report(state: &FormState, notification: Option<&Notification>) -> String {
    let mut lines = Vec::new();
    for field in ContactField::iter() {
        if let Some(error) = state.field_errors.get(field) {
            lines.push(format!("  {}: {}", field, error));
        }
    }
    if !state.last_message.is_empty() {
        lines.push(state.last_message.clone());
    }
    if let Some(notification) = notification {
        lines.push(notification_line(notification));
    }
    lines.join("\n")
}

pub fn service_line(entry: &ServiceEntry) -> String {
    format!("{:<16} {}  ({})", entry.slug, entry.title, ServiceCatalog::detail_path(entry))
}

pub fn service_detail(entry: &ServiceEntry) -> String {
    let mut out = format!("{}\n{}\n\n{}\n", entry.title, entry.quote, entry.description);
    for point in entry.points {
        out.push_str(&format!("\n  - {}", point));
    }
    out
}
