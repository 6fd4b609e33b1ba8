//! Reusable UI Components
//!
//! ## Components
//!
//! - `TabSelector` - Navigation bar with arrow markers
//! - `FormField` - Inputs, choices, checkboxes and buttons as lines
//! - `NotificationBar` - The transient feedback message

mod form_field;
mod notification_bar;
mod tab_selector;

pub use form_field::{
    render_button, render_checkbox, render_choice, render_form_field, FormFieldConfig,
};
pub use notification_bar::render_notification_bar;
pub use tab_selector::{render_tab_selector, view_tabs, TabItem};
