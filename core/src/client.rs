//! Stateless request builder for the reqres API.
//!
//! # Design
//! `ReqresClient` holds only the base URL and the headers every request
//! carries. Each endpoint gets a `build_*` method producing an `HttpRequest`;
//! executing it is the `Transport`'s job. Nothing here touches the network.

use serde::Serialize;

use crate::config::{SuiteConfig, API_KEY_HEADER};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::User;

#[derive(Debug, Clone)]
pub struct ReqresClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ReqresClient {
    pub fn new(config: &SuiteConfig) -> Self {
        let default_headers = config
            .api_key()
            .map(|key| vec![(API_KEY_HEADER.to_string(), key.to_string())])
            .unwrap_or_default();
        Self {
            base_url: config.base_url().to_string(),
            default_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` (which may include a query string). A body,
    /// when given, is serialized to JSON and tagged with its content type.
    pub fn build<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = self.default_headers.clone();
        let body = match body {
            Some(payload) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(payload)?)
            }
            None => None,
        };
        Ok(HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, path.trim_start_matches('/')),
            headers,
            body,
        })
    }

    fn build_empty(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, path.trim_start_matches('/')),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    pub fn build_create_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Post, "/api/users", Some(user))
    }

    pub fn build_list_users(&self, page: u32) -> HttpRequest {
        self.build_empty(HttpMethod::Get, &format!("/api/users?page={page}"))
    }

    pub fn build_get_user(&self, id: u32) -> HttpRequest {
        self.build_empty(HttpMethod::Get, &format!("/api/users/{id}"))
    }

    pub fn build_list_resources(&self) -> HttpRequest {
        self.build_empty(HttpMethod::Get, "/api/unknown")
    }

    pub fn build_get_resource(&self, id: u32) -> HttpRequest {
        self.build_empty(HttpMethod::Get, &format!("/api/unknown/{id}"))
    }

    /// `method` selects full replacement (`Put`) or partial update (`Patch`).
    pub fn build_update_user(
        &self,
        id: u32,
        user: &User,
        method: HttpMethod,
    ) -> Result<HttpRequest, ApiError> {
        self.build(method, &format!("/api/users/{id}"), Some(user))
    }

    pub fn build_delete_user(&self, id: u32) -> HttpRequest {
        self.build_empty(HttpMethod::Delete, &format!("/api/users/{id}"))
    }

    pub fn build_register(&self, user: &User) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Post, "/api/register", Some(user))
    }

    pub fn build_login(&self, user: &User) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Post, "/api/login", Some(user))
    }

    /// User listing the server holds back for `delay_secs` seconds.
    pub fn build_delayed_list(&self, delay_secs: u64) -> HttpRequest {
        self.build_empty(HttpMethod::Get, &format!("/api/users?delay={delay_secs}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ReqresClient {
        ReqresClient::new(&SuiteConfig::new("http://localhost:3000").unwrap())
    }

    fn json_header() -> (String, String) {
        ("Content-Type".to_string(), "application/json".to_string())
    }

    #[test]
    fn build_create_user_produces_correct_request() {
        let user = User::builder().name("morpheus").job("leader").build();
        let req = client().build_create_user(&user).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/users");
        assert_eq!(req.headers, vec![json_header()]);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "morpheus", "job": "leader" }));
    }

    #[test]
    fn build_list_users_carries_page_query() {
        let req = client().build_list_users(2);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/users?page=2");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_endpoints() {
        assert_eq!(client().build_get_user(2).url, "http://localhost:3000/api/users/2");
        assert_eq!(client().build_list_resources().url, "http://localhost:3000/api/unknown");
        assert_eq!(client().build_get_resource(23).url, "http://localhost:3000/api/unknown/23");
    }

    #[test]
    fn build_update_user_honors_method() {
        let user = User::builder().name("morpheus").job("zion resident").build();
        let put = client().build_update_user(2, &user, HttpMethod::Put).unwrap();
        let patch = client().build_update_user(2, &user, HttpMethod::Patch).unwrap();
        assert_eq!(put.method, HttpMethod::Put);
        assert_eq!(patch.method, HttpMethod::Patch);
        assert_eq!(put.url, patch.url);
        assert_eq!(put.body, patch.body);
    }

    #[test]
    fn build_delete_user_has_no_body() {
        let req = client().build_delete_user(2);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_register_omits_missing_password() {
        let user = User::builder().email("sydney@fife").build();
        let req = client().build_register(&user).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/register");
        assert_eq!(req.body.as_deref(), Some(r#"{"email":"sydney@fife"}"#));
    }

    #[test]
    fn build_login_targets_login() {
        let user = User::builder().email("eve.holt@reqres.in").password("cityslicka").build();
        let req = client().build_login(&user).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/login");
    }

    #[test]
    fn build_delayed_list_carries_delay_query() {
        let req = client().build_delayed_list(3);
        assert_eq!(req.url, "http://localhost:3000/api/users?delay=3");
    }

    #[test]
    fn api_key_is_sent_on_every_request() {
        let config = SuiteConfig::default().with_api_key(Some("reqres-free-v1".to_string()));
        let client = ReqresClient::new(&config);
        let get = client.build_get_user(2);
        assert_eq!(get.headers, vec![("x-api-key".to_string(), "reqres-free-v1".to_string())]);
        let post = client.build_login(&User::default()).unwrap();
        assert_eq!(post.headers.len(), 2);
        assert_eq!(post.headers[1], json_header());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = SuiteConfig::new("http://localhost:3000/").unwrap();
        let req = ReqresClient::new(&config).build_list_resources();
        assert_eq!(req.url, "http://localhost:3000/api/unknown");
    }
}
