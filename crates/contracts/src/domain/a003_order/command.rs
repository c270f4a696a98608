//! Команды таблицы заказов
//!
//! Buttons in the admin table carry `data-action`, `data-id` and `data-paid`.
//! A single click handler on the table body decodes them into an
//! [`OrderCommand`] and hands it to the page controller.

pub const ACTION_TOGGLE_STATUS: &str = "toggle-status";
pub const ACTION_DELETE: &str = "delete";
pub const ACTION_DELETE_ALL: &str = "delete-all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    /// `paid` is the current status; the command flips it
    ToggleStatus { id: String, paid: bool },
    Delete { id: String },
    DeleteAll,
}

impl OrderCommand {
    /// Decode the `data-*` attributes of a clicked element.
    ///
    /// Returns `None` for clicks on elements without a known action or
    /// without the attributes that action needs.
    pub fn from_dataset(
        action: Option<&str>,
        id: Option<&str>,
        paid: Option<&str>,
    ) -> Option<Self> {
        let id = id.map(str::trim).filter(|s| !s.is_empty());
        match action? {
            ACTION_TOGGLE_STATUS => Some(Self::ToggleStatus {
                id: id?.to_string(),
                paid: parse_flag(paid?)?,
            }),
            ACTION_DELETE => Some(Self::Delete {
                id: id?.to_string(),
            }),
            ACTION_DELETE_ALL => Some(Self::DeleteAll),
            _ => None,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::ToggleStatus { .. } => ACTION_TOGGLE_STATUS,
            Self::Delete { .. } => ACTION_DELETE,
            Self::DeleteAll => ACTION_DELETE_ALL,
        }
    }

    /// Deleting everything needs an explicit confirmation
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::DeleteAll)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
