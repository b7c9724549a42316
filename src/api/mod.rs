//! Backend API clients
//!
//! Thin typed wrappers over the admin backend's HTTP endpoints. Clients here
//! translate domain operations into outbound requests and hand the backend's
//! response envelope back unchanged; retries, caching, and error presentation
//! belong to the calling view.

pub mod channel;

pub use channel::{
    ApiResponse, ChannelApi, DeleteChannelRequest, ListChannelsRequest,
};
