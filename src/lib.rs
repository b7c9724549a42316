//! Channel administration client layer
//!
//! Client-side glue for the payment-channel administration screen: a typed
//! HTTP client for the four channel endpoints, the data shapes the views
//! consume, and a show/close controller for the detail panel.
//!
//! The crate holds no backend logic and no list-view orchestration; callers
//! sequence the async API operations and decide how failures are presented.

pub mod api;
pub mod detail;
pub mod error;
pub mod models;

pub use api::{ApiResponse, ChannelApi, DeleteChannelRequest, ListChannelsRequest};
pub use detail::{ChannelDetailController, DetailState};
pub use error::{AppError, Result};
pub use models::{
    ChannelAddForm, ChannelDetail, ChannelFilterForm, ChannelModForm, ChannelRow, Pagination,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for a host application.
///
/// Respects `RUST_LOG`; defaults to debug output for this crate. Call once
/// at startup.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "channel_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
