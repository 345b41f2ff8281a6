//! View models for the design-system components.
//!
//! Hosts fill these in and hand them to their template engine; the
//! markup itself lives with the host. Fields holding pre-rendered markup
//! are plain `String`s, trusted by the component template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsGrid {
    pub id: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub id: String,
    pub columns: Vec<Column>,
    pub rows: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tabs {
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
    pub actions: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Select,
    Textarea,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub placeholder: String,
    pub required: bool,
    pub options: Vec<SelectOption>,
}

/// Card accepts `body` or `content`, and `header_action` or `header_actions`;
/// templates should go through [`Card::content`] and [`Card::header_action`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub header: String,
    pub header_action: String,
    pub header_actions: String,
    pub body: String,
    pub content: String,
    pub elevated: bool,
    pub class: String,
}

impl Card {
    pub fn content(&self) -> &str {
        if self.content.is_empty() {
            &self.body
        } else {
            &self.content
        }
    }

    pub fn header_action(&self) -> &str {
        if self.header_action.is_empty() {
            &self.header_actions
        } else {
            &self.header_action
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub status: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyState {
    pub message: String,
    pub action: String,
    pub action_url: String,
}

/// Page numbers to render for a paginated list.
///
/// Built by [`Pagination::new`]; the template draws a gap wherever two
/// neighbouring entries are not consecutive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub page_numbers: Vec<i64>,
}

/// Native `<dialog>` confirmation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDialog {
    pub id: String,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

/// Popover API dropdown menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopoverMenu {
    pub id: String,
    pub label: String,
    pub content: String,
}
