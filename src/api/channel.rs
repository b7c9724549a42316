//! Channel endpoint client
//!
//! Four pass-through operations against the channel administration endpoints:
//! list, delete, add, modify. All requests are POST with a JSON body; the
//! backend's envelope is returned to the caller without interpretation.

use crate::error::{AppError, Result};
use crate::models::{ChannelAddForm, ChannelFilterForm, ChannelModForm, ChannelRow, Pagination};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

const LIST_PATH: &str = "/api/channel/list";
const DEL_PATH: &str = "/api/channel/del";
const ADD_PATH: &str = "/api/channel/add";
const MOD_PATH: &str = "/api/channel/mod";

/// Backend response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub data: T,
    /// Total row count, present on list responses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Filter and pagination fields for the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListChannelsRequest {
    pub name: String,
    pub qrcode: String,
    pub config: String,
    pub trade_type: String,
    pub page: u64,
    pub size: u64,
    pub sort: String,
}

impl ListChannelsRequest {
    /// Assemble the request from the list view's filter and pagination state.
    pub fn from_view(filter: &ChannelFilterForm, pagination: &Pagination) -> Self {
        Self {
            name: filter.name.clone(),
            qrcode: filter.qrcode.clone(),
            config: filter.config.clone(),
            trade_type: filter.trade_type.clone(),
            page: pagination.current,
            size: pagination.page_size,
            sort: "desc".to_string(),
        }
    }
}

impl Default for ListChannelsRequest {
    fn default() -> Self {
        Self::from_view(&ChannelFilterForm::default(), &Pagination::default())
    }
}

/// Delete payload; the backend binds a single identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteChannelRequest {
    pub id: u64,
}

/// Client for the channel administration endpoints
pub struct ChannelApi {
    client: Client,
    base_url: Url,
}

impl ChannelApi {
    /// Create a client with the default HTTP configuration (30s timeout).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Self::with_client(client, base_url)
    }

    /// Create a client around a caller-supplied [`reqwest::Client`].
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self { client, base_url })
    }

    /// Fetch the paginated, filtered set of channel rows.
    pub async fn list_channels(
        &self,
        req: &ListChannelsRequest,
    ) -> Result<ApiResponse<Vec<ChannelRow>>> {
        info!("ChannelApi::list_channels page={} size={}", req.page, req.size);
        self.execute(self.post_json(LIST_PATH, req)?).await
    }

    /// Request deletion of one channel by identifier.
    pub async fn delete_channel(&self, req: &DeleteChannelRequest) -> Result<ApiResponse<String>> {
        info!("ChannelApi::delete_channel id={}", req.id);
        self.execute(self.post_json(DEL_PATH, req)?).await
    }

    /// Request creation of a channel from an add form.
    pub async fn add_channel(&self, form: &ChannelAddForm) -> Result<ApiResponse<String>> {
        info!("ChannelApi::add_channel name={:?}", form.name);
        self.execute(self.post_json(ADD_PATH, form)?).await
    }

    /// Request update of a channel from a mod form.
    pub async fn modify_channel(&self, form: &ChannelModForm) -> Result<ApiResponse<String>> {
        info!("ChannelApi::modify_channel id={}", form.id);
        self.execute(self.post_json(MOD_PATH, form)?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    /// Build a POST request with the payload forwarded unmodified as JSON.
    fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<reqwest::Request> {
        let request = self.client.post(self.endpoint(path)?).json(body).build()?;

        Ok(request)
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        let response = self.client.execute(request).await?.error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn api() -> ChannelApi {
        ChannelApi::new("http://127.0.0.1:9000").unwrap()
    }

    fn body_json(request: &reqwest::Request) -> Value {
        let bytes = request.body().unwrap().as_bytes().unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            ChannelApi::new("not a url"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_list_request_built_from_view_state() {
        let mut filter = ChannelFilterForm::default();
        filter.name = "acme".into();
        filter.trade_type = "wechat".into();
        let mut pagination = Pagination::default();
        pagination.current = 3;
        pagination.page_size = 20;

        let req = ListChannelsRequest::from_view(&filter, &pagination);
        assert_eq!(req.name, "acme");
        assert_eq!(req.trade_type, "wechat");
        assert_eq!(req.page, 3);
        assert_eq!(req.size, 20);
        assert_eq!(req.sort, "desc");
    }

    #[test]
    fn test_list_posts_to_documented_path() {
        let api = api();
        let req = ListChannelsRequest::default();
        let request = api.post_json(LIST_PATH, &req).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/api/channel/list");
        assert_eq!(body_json(&request), serde_json::to_value(&req).unwrap());
    }

    #[test]
    fn test_delete_posts_to_documented_path() {
        let api = api();
        let req = DeleteChannelRequest { id: 42 };
        let request = api.post_json(DEL_PATH, &req).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/api/channel/del");
        assert_eq!(body_json(&request), serde_json::json!({"id": 42}));
    }

    #[test]
    fn test_add_posts_form_unmodified() {
        let api = api();
        let form = ChannelAddForm {
            name: "Acme".into(),
            qrcode: "q1".into(),
            config: "{}".into(),
            trade_type: "wechat".into(),
            remark: "".into(),
            other_notify: 0,
        };
        let request = api.post_json(ADD_PATH, &form).unwrap();

        assert_eq!(request.url().path(), "/api/channel/add");
        assert_eq!(body_json(&request), serde_json::to_value(&form).unwrap());
    }

    #[test]
    fn test_mod_posts_form_unmodified() {
        let api = api();
        let form = ChannelModForm {
            id: 7,
            status: 1,
            name: "Acme".into(),
            qrcode: "q1".into(),
            config: "{}".into(),
            trade_type: "wechat".into(),
            remark: "updated".into(),
            other_notify: 1,
        };
        let request = api.post_json(MOD_PATH, &form).unwrap();

        assert_eq!(request.url().path(), "/api/channel/mod");
        let body = body_json(&request);
        assert_eq!(body, serde_json::to_value(&form).unwrap());
        assert_eq!(body["id"], 7);
    }

    #[test]
    fn test_envelope_total_optional() {
        let list: ApiResponse<Vec<ChannelRow>> = serde_json::from_str(
            r#"{"code":200,"data":[],"total":0}"#,
        )
        .unwrap();
        assert_eq!(list.code, 200);
        assert_eq!(list.total, Some(0));

        let msg: ApiResponse<String> = serde_json::from_str(
            r#"{"code":200,"data":"success"}"#,
        )
        .unwrap();
        assert_eq!(msg.data, "success");
        assert_eq!(msg.total, None);
    }
}
