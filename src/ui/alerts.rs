//! Alert submission, clearing and rendering.

use chrono::Utc;

use crate::helpers::{escape_html, format_timestamp};
use crate::storage::alerts::{AlertRecord, AlertStore, Severity};
use crate::storage::KeyValueStore;
use crate::ui::PageSurface;

/// Containers showing the alert list; pages carry either, both or neither.
const ALERT_CONTAINERS: [&str; 2] = ["alertsList", "floodAlerts"];
const ALERT_FORM: &str = "alertForm";

/// Raw values read from the alert submission form.
#[derive(Debug, Clone, Default)]
pub struct AlertSubmission {
    pub title: String,
    pub desc: String,
    pub location: String,
    pub severity: Severity,
}

/// The community-alerts component: owns the store handle and re-renders
/// every alert container after a mutation.
#[derive(Debug)]
pub struct AlertsPanel<S: KeyValueStore> {
    store: AlertStore<S>,
}

impl<S: KeyValueStore> AlertsPanel<S> {
    pub fn new(store: AlertStore<S>) -> Self {
        Self { store }
    }

    /// Submit-button handler. Returns whether a record was created.
    ///
    /// Title and description are required; a missing one blocks submission
    /// with a notification and creates nothing.
    pub fn submit(&mut self, submission: &AlertSubmission, page: &mut impl PageSurface) -> bool {
        let title = submission.title.trim();
        let desc = submission.desc.trim();
        if title.is_empty() || desc.is_empty() {
            page.notify("Please provide title and description");
            return false;
        }

        let record = AlertRecord {
            title: title.to_string(),
            desc: desc.to_string(),
            location: submission.location.trim().to_string(),
            severity: submission.severity,
            ts: Utc::now(),
        };
        if let Err(e) = self.store.append(record) {
            tracing::error!("Failed to persist alert: {}", e);
            page.notify("Could not save the alert. Please try again.");
            return false;
        }

        self.render(page);
        page.reset_form(ALERT_FORM);
        true
    }

    /// Clear-button handler; asks for confirmation before wiping the slot.
    pub fn clear_requested(&mut self, page: &mut impl PageSurface) {
        if !page.confirm("Clear all alerts?") {
            return;
        }
        self.store.clear();
        self.render(page);
    }

    /// Render the current list into every alert container on the page.
    pub fn render(&self, page: &mut impl PageSurface) {
        let html = render_alert_list(&self.store.load());
        for container in ALERT_CONTAINERS {
            page.set_content(container, &html);
        }
    }
}

/// Project the stored list (oldest first) into display markup, newest first.
///
/// Every user-supplied field is HTML-escaped. The severity only ever selects
/// a class name from a closed set, so it is inserted as-is.
pub fn render_alert_list(list: &[AlertRecord]) -> String {
    if list.is_empty() {
        return "<p>No alerts reported.</p>".to_string();
    }

    let mut out = String::new();
    for alert in list.iter().rev() {
        out.push_str(&format!(
            "<div class=\"alert-item {severity}\"><strong>{title}</strong>\
             <div class=\"meta\">{location} \u{2022} {timestamp}</div>\
             <p>{desc}</p></div>",
            severity = alert.severity.css_class(),
            title = escape_html(&alert.title),
            location = escape_html(&alert.location),
            timestamp = format_timestamp(alert.ts),
            desc = escape_html(&alert.desc),
        ));
    }
    out
}
