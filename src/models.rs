//! Channel data shapes
//!
//! Passive structural contracts shared by the API client callers and the
//! detail controller. Wire field names follow the backend contract:
//! snake_case, except `createTime` on list rows.

use serde::{Deserialize, Serialize};

/// Channel is enabled for payment matching
pub const STATUS_ENABLED: u8 = 1;
/// Channel is disabled
pub const STATUS_DISABLED: u8 = 0;
/// Forward notifications from other channels
pub const OTHER_NOTIFY_ON: u8 = 1;
/// Do not forward other notifications
pub const OTHER_NOTIFY_OFF: u8 = 0;

/// A persisted channel record as rendered in the list view.
///
/// Owned and mutated only by the backend; the UI treats rows as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRow {
    pub id: u64,
    pub name: String,
    pub qrcode: String,
    /// Opaque string-encoded channel configuration
    pub config: String,
    pub status: u8,
    #[serde(rename = "createTime")]
    pub create_time: String,
    pub trade_type: Option<String>,
    pub remark: Option<String>,
    pub other_notify: Option<u8>,
}

/// Input aggregate for creating a channel. The backend assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelAddForm {
    pub name: String,
    pub qrcode: String,
    pub config: String,
    pub trade_type: String,
    pub remark: String,
    pub other_notify: u8,
}

/// Input aggregate for editing an existing channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelModForm {
    pub id: u64,
    pub name: String,
    pub status: u8,
    pub qrcode: String,
    pub config: String,
    pub trade_type: String,
    pub remark: String,
    pub other_notify: u8,
}

/// Search criteria for the channel list, plus the search-active flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelFilterForm {
    pub name: String,
    pub qrcode: String,
    pub config: String,
    pub trade_type: String,
    /// Whether a filtered search is currently active
    pub search: bool,
}

/// List pagination state. Mutated by the list view on navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u64,
    pub page_size: u64,
    pub total: u64,
    pub show_page_size: bool,
    pub show_total: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 10,
            total: 0,
            show_page_size: true,
            show_total: true,
        }
    }
}

/// Full record shown in the detail panel.
///
/// A richer read-only projection of a [`ChannelRow`] selected by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetail {
    pub id: u64,
    pub name: String,
    pub qrcode: String,
    pub config: String,
    pub trade_type: String,
    pub remark: String,
    /// Opaque integer flag; the backend documents no enum of meanings
    pub other_notify: u8,
    pub status: u8,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ChannelDetail {
    /// The canonical "no selection" value used to reset detail state.
    ///
    /// Never a real persisted record; must never be submitted to the backend.
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            name: String::new(),
            qrcode: String::new(),
            config: String::new(),
            trade_type: String::new(),
            remark: String::new(),
            other_notify: 0,
            status: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// True for the placeholder, false for any persisted record.
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }
}

impl Default for ChannelDetail {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<ChannelRow> for ChannelDetail {
    fn from(row: ChannelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            qrcode: row.qrcode,
            config: row.config,
            trade_type: row.trade_type.unwrap_or_default(),
            remark: row.remark.unwrap_or_default(),
            other_notify: row.other_notify.unwrap_or(0),
            status: row.status,
            created_at: Some(row.create_time),
            updated_at: None,
        }
    }
}

impl From<&ChannelDetail> for ChannelModForm {
    fn from(detail: &ChannelDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            status: detail.status,
            qrcode: detail.qrcode.clone(),
            config: detail.config.clone(),
            trade_type: detail.trade_type.clone(),
            remark: detail.remark.clone(),
            other_notify: detail.other_notify,
        }
    }
}
