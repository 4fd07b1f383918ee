//! Payload models for the reqres API.
//!
//! # Design
//! Field names are Rust snake_case, which already matches the wire names
//! (`first_name`, `last_name`, `pantone_value`). The two timestamp fields the
//! API emits in camelCase are renamed explicitly. Optional fields carry
//! `skip_serializing_if` so an unset field is omitted rather than sent as
//! `null`.

use serde::{Deserialize, Serialize};

/// Request payload for user creation, update, registration and login. Every
/// field is optional; each endpoint reads a different subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Accumulates any subset of `User` fields. No validation is performed.
#[derive(Debug, Default)]
pub struct UserBuilder {
    inner: User,
}

impl UserBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.inner.job = Some(job.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = Some(password.into());
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}

/// A user record as returned by `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// A catalog entry as returned by `GET /api/unknown/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub year: u32,
    pub color: String,
    pub pantone_value: String,
}

/// `{"data": ...}` wrapper around a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Single<T> {
    pub data: T,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<T>,
}

/// Response to `POST /api/users`: the submitted fields plus server-generated
/// `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    #[serde(flatten)]
    pub user: User,
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Response to `PUT`/`PATCH /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Updated {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Successful registration (`id` + `token`) or login (`token` only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub token: String,
}

/// `{"error": "..."}` body returned with 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_user_serializes_to_empty_object() {
        let json = serde_json::to_string(&User::builder().build()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn unset_user_fields_are_omitted() {
        let user = User::builder().email("sydney@fife").build();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, json!({ "email": "sydney@fife" }));
        assert!(json.get("password").is_none());
    }

    #[test]
    fn user_accessors_expose_builder_values() {
        let user = User::builder().name("morpheus").job("leader").build();
        assert_eq!(user.name(), Some("morpheus"));
        assert_eq!(user.job(), Some("leader"));
        assert_eq!(user.email(), None);
        assert_eq!(user.password(), None);
    }

    #[test]
    fn data_uses_snake_case_wire_names() {
        let data = Data {
            id: 2,
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: "a.jpg".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["first_name"], "Janet");
        assert_eq!(json["last_name"], "Weaver");
        assert!(json.get("firstName").is_none());

        let back: Data = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn resource_maps_pantone_value() {
        let raw = r##"{"id":2,"name":"fuchsia rose","year":2001,"color":"#C74375","pantone_value":"17-2031"}"##;
        let resource: Resource = serde_json::from_str(raw).unwrap();
        assert_eq!(resource.pantone_value, "17-2031");

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["pantone_value"], "17-2031");
        assert_eq!(json, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn created_reads_echo_and_camel_case_timestamp() {
        let raw = r#"{"name":"morpheus","job":"leader","id":"123","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let created: Created = serde_json::from_str(raw).unwrap();
        assert_eq!(created.user.name(), Some("morpheus"));
        assert_eq!(created.id, "123");
        assert_eq!(created.created_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn updated_requires_timestamp() {
        let result: Result<Updated, _> = serde_json::from_str(r#"{"name":"morpheus"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_of_users() {
        let raw = r#"{"page":2,"per_page":6,"total":12,"total_pages":2,"data":[]}"#;
        let page: Page<Data> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total, 12);
        assert!(page.data.is_empty());
    }

    #[test]
    fn login_token_has_no_id() {
        let token: Token = serde_json::from_str(r#"{"token":"QpwL5tke4Pnpja7X4"}"#).unwrap();
        assert!(token.id.is_none());
        assert_eq!(serde_json::to_string(&token).unwrap(), r#"{"token":"QpwL5tke4Pnpja7X4"}"#);
    }
}
