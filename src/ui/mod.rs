//! Page-level components and the DOM seam they render through.
//!
//! Each component owns its state explicitly and exposes its event handlers
//! as plain methods, so tests can drive them directly without a live page.
//! A host binding forwards DOM events into these handlers and implements
//! [`PageSurface`] on top of the real document.

pub mod alerts;
pub mod location;
pub mod nav;
pub mod risk;
pub mod weather;

/// Mutation surface of the host page.
///
/// The methods mirror the handful of document operations the site performs.
/// Components are shared across pages that carry different subsets of the
/// markup; a container missing from the current page is reported through the
/// `set_content` return value and treated as a no-op, never an error.
pub trait PageSurface {
    /// Replace the inner markup of a named container. Returns `false` when
    /// the container is not present on the current page.
    fn set_content(&mut self, container_id: &str, html: &str) -> bool;

    /// Replace an element's class list.
    fn set_class(&mut self, element_id: &str, class: &str);

    /// Show an element that is hidden by default.
    fn reveal(&mut self, element_id: &str);

    /// Clear a form back to its initial values.
    fn reset_form(&mut self, form_id: &str);

    /// Write a form field value.
    fn set_field(&mut self, field_id: &str, value: &str);

    /// Change a control's visible label.
    fn set_control_label(&mut self, control_id: &str, label: &str);

    /// Blocking notification shown to the user.
    fn notify(&mut self, message: &str);

    /// Blocking yes/no question. Returns the user's answer.
    fn confirm(&mut self, question: &str) -> bool;

    /// Lock or restore page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
}
