//! The scenario table: one request and its expectations per reqres behavior.

use std::time::Duration;

use crate::assert::Expect;
use crate::client::ReqresClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{Data, Resource, User};

pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const MISSING_PASSWORD: &str = "Missing password";
pub const DELAY_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub request: HttpRequest,
    pub expectations: Vec<Expect>,
}

impl Scenario {
    pub fn new(name: &'static str, request: HttpRequest) -> Self {
        Self {
            name,
            request,
            expectations: Vec::new(),
        }
    }

    pub fn expect(mut self, expect: Expect) -> Self {
        self.expectations.push(expect);
        self
    }
}

/// Expected record for `GET /api/users/2`.
pub fn janet() -> Data {
    Data {
        id: 2,
        email: "janet.weaver@reqres.in".to_string(),
        first_name: "Janet".to_string(),
        last_name: "Weaver".to_string(),
        avatar: "https://s3.amazonaws.com/uifaces/faces/twitter/josephstein/128.jpg".to_string(),
    }
}

/// Expected record for `GET /api/unknown/2`.
pub fn fuchsia_rose() -> Resource {
    Resource {
        id: 2,
        name: "fuchsia rose".to_string(),
        year: 2001,
        color: "#C74375".to_string(),
        pantone_value: "17-2031".to_string(),
    }
}

/// Every scenario, in the order the suite runs them.
pub fn all(client: &ReqresClient) -> Result<Vec<Scenario>, ApiError> {
    Ok(vec![
        post_user(client)?,
        get_list_users(client),
        get_single_user(client),
        get_single_user_not_found(client),
        get_list_resource(client),
        get_single_resource(client),
        get_single_resource_not_found(client),
        update_user(client, "put_user", HttpMethod::Put)?,
        update_user(client, "patch_user", HttpMethod::Patch)?,
        delete_user(client),
        post_register_successful(client)?,
        post_register_unsuccessful(client)?,
        post_login_successful(client)?,
        post_login_unsuccessful(client)?,
        get_delayed_response(client),
    ])
}

fn post_user(client: &ReqresClient) -> Result<Scenario, ApiError> {
    let user = User::builder().job("leader").name("morpheus").build();
    Ok(Scenario::new("post_user", client.build_create_user(&user)?)
        .expect(Expect::status(201))
        .expect(Expect::present("id"))
        .expect(Expect::field("job", user.job()))
        .expect(Expect::field("name", user.name()))
        .expect(Expect::present("createdAt")))
}

fn get_list_users(client: &ReqresClient) -> Scenario {
    Scenario::new("get_list_users", client.build_list_users(2))
        .expect(Expect::status(200))
        .expect(Expect::field("total", 12))
}

fn get_single_user(client: &ReqresClient) -> Scenario {
    let data = janet();
    Scenario::new("get_single_user", client.build_get_user(data.id))
        .expect(Expect::status(200))
        .expect(Expect::field("data.id", data.id))
        .expect(Expect::field("data.email", data.email))
        .expect(Expect::field("data.first_name", data.first_name))
        .expect(Expect::field("data.last_name", data.last_name))
        .expect(Expect::field("data.avatar", data.avatar))
}

fn get_single_user_not_found(client: &ReqresClient) -> Scenario {
    Scenario::new("get_single_user_not_found", client.build_get_user(23))
        .expect(Expect::status(404))
        .expect(Expect::body("{}"))
}

fn get_list_resource(client: &ReqresClient) -> Scenario {
    Scenario::new("get_list_resource", client.build_list_resources())
        .expect(Expect::status(200))
        .expect(Expect::field("total", 12))
}

fn get_single_resource(client: &ReqresClient) -> Scenario {
    let resource = fuchsia_rose();
    Scenario::new("get_single_resource", client.build_get_resource(resource.id))
        .expect(Expect::status(200))
        .expect(Expect::field("data.id", resource.id))
        .expect(Expect::field("data.name", resource.name))
        .expect(Expect::field("data.year", resource.year))
        .expect(Expect::field("data.color", resource.color))
        .expect(Expect::field("data.pantone_value", resource.pantone_value))
}

fn get_single_resource_not_found(client: &ReqresClient) -> Scenario {
    Scenario::new("get_single_resource_not_found", client.build_get_resource(23))
        .expect(Expect::status(404))
        .expect(Expect::body("{}"))
}

fn update_user(
    client: &ReqresClient,
    name: &'static str,
    method: HttpMethod,
) -> Result<Scenario, ApiError> {
    let user = User::builder().name("morpheus").job("zion resident").build();
    Ok(Scenario::new(name, client.build_update_user(2, &user, method)?)
        .expect(Expect::status(200))
        .expect(Expect::field("job", user.job()))
        .expect(Expect::field("name", user.name()))
        .expect(Expect::present("updatedAt")))
}

fn delete_user(client: &ReqresClient) -> Scenario {
    Scenario::new("delete_user", client.build_delete_user(2))
        .expect(Expect::status(204))
        .expect(Expect::body(""))
}

fn post_register_successful(client: &ReqresClient) -> Result<Scenario, ApiError> {
    let user = User::builder().email("eve.holt@reqres.in").password("pistol").build();
    Ok(Scenario::new("post_register_successful", client.build_register(&user)?)
        .expect(Expect::status(200))
        .expect(Expect::present("id"))
        .expect(Expect::present("token")))
}

fn post_register_unsuccessful(client: &ReqresClient) -> Result<Scenario, ApiError> {
    let user = User::builder().email("sydney@fife").build();
    Ok(Scenario::new("post_register_unsuccessful", client.build_register(&user)?)
        .expect(Expect::status(400))
        .expect(Expect::field("error", MISSING_PASSWORD)))
}

fn post_login_successful(client: &ReqresClient) -> Result<Scenario, ApiError> {
    let user = User::builder().email("eve.holt@reqres.in").password("cityslicka").build();
    Ok(Scenario::new("post_login_successful", client.build_login(&user)?)
        .expect(Expect::status(200))
        .expect(Expect::field("token", TOKEN)))
}

fn post_login_unsuccessful(client: &ReqresClient) -> Result<Scenario, ApiError> {
    let user = User::builder().email("peter@klaven").build();
    Ok(Scenario::new("post_login_unsuccessful", client.build_login(&user)?)
        .expect(Expect::status(400))
        .expect(Expect::field("error", MISSING_PASSWORD)))
}

fn get_delayed_response(client: &ReqresClient) -> Scenario {
    Scenario::new("get_delayed_response", client.build_delayed_list(DELAY_SECS))
        .expect(Expect::status(200))
        .expect(Expect::elapsed_at_least(Duration::from_secs(DELAY_SECS)))
}
