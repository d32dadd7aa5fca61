//! Command handlers.
//!
//! Handlers that talk to the backend are generic over [`HttpClient`] and
//! return the text to print, so tests can drive them with a mock transport.

use color_eyre::Result;
use serde::Serialize;

use super::args::ListTarget;
use crate::adapters::ReqwestHttpClient;
use crate::api::{self, ApiClient};
use crate::error::{AdminError, AdminResult, ApiError};
use crate::models::LoginRequest;
use crate::router::{constant_routes, dynamic_routes, RouteSettings, RouterState};
use crate::startup::AdminConfig;
use crate::traits::{HttpClient, RouteRegistry};

pub const USAGE: &str = "\
Usage: lostfound-admin <command>

Commands:
  routes [--flat|--no-flat]   Print the registered route table as JSON
  login <name> [password]     Log in and print the token
  info                        Show the signed-in admin and their roles
  list <target>               Print a collection as JSON
  help                        Show this message

Options:
  -V, --version               Print the version";

/// Build the production client from configuration.
pub fn build_client(config: &AdminConfig) -> AdminResult<ApiClient<ReqwestHttpClient>> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout()).map_err(ApiError::from)?;
    let client = ApiClient::new(http, config.api_base_url.clone());
    Ok(match &config.token {
        Some(token) => client.with_token(token.clone()),
        None => client,
    })
}

/// The route table a session with `roles` would see, as pretty JSON.
///
/// `flat` overrides `settings.third_level_route_cache` when given.
pub fn render_routes(settings: &RouteSettings, roles: &[String], flat: Option<bool>) -> Result<String> {
    let mut settings = settings.clone();
    if let Some(flat) = flat {
        settings.third_level_route_cache = flat;
    }

    let mut state = RouterState::from_settings(constant_routes(), &settings);
    state.add_permitted_routes(&dynamic_routes(), &settings.effective_roles(roles))?;
    Ok(serde_json::to_string_pretty(&state.routes())?)
}

/// Log in and return the issued token.
pub async fn login<C: HttpClient>(client: &ApiClient<C>, name: &str, password: &str) -> Result<String> {
    let data = client
        .call(&api::login(LoginRequest::new(name, password)))
        .await?;
    tracing::info!(name, "Logged in");
    Ok(data.token)
}

/// Describe the signed-in admin.
pub async fn info<C: HttpClient>(client: &ApiClient<C>, settings: &RouteSettings) -> Result<String> {
    require_token(client)?;
    let user = client.call(&api::user_info()).await?;
    let effective = settings.effective_roles(&user.roles);
    Ok(format!(
        "name: {}\nroles: {}\neffective roles: {}",
        user.name,
        user.roles.join(", "),
        effective.join(", ")
    ))
}

/// Fetch one collection and render it as pretty JSON.
pub async fn list<C: HttpClient>(client: &ApiClient<C>, target: ListTarget) -> Result<String> {
    require_token(client)?;
    match target {
        ListTarget::Users => to_json(&client.call(&api::list_users()).await?.list),
        ListTarget::Items => to_json(&client.call(&api::list_items()).await?.list),
        ListTarget::Categories => to_json(&client.call(&api::list_categories()).await?.list),
        ListTarget::Comments => to_json(&client.call(&api::list_comments()).await?.list),
        ListTarget::Notices => to_json(&client.call(&api::list_notices()).await?.list),
        ListTarget::Files => to_json(&client.call(&api::list_files()).await?.list),
    }
}

fn require_token<C: HttpClient>(client: &ApiClient<C>) -> AdminResult<()> {
    match client.token() {
        Some(_) => Ok(()),
        None => Err(AdminError::MissingToken),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Read the password from the terminal without echo.
pub fn prompt_password() -> Result<String> {
    Ok(rpassword::prompt_password("Password: ")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use serde_json::json;

    fn client() -> ApiClient<MockHttpClient> {
        ApiClient::new(MockHttpClient::new(), "http://api.test")
    }

    #[test]
    fn test_render_routes_respects_flat_override() {
        let settings = RouteSettings::default();
        let nested = render_routes(&settings, &[], Some(false)).unwrap();
        let flat = render_routes(&settings, &[], Some(true)).unwrap();

        let nested: Vec<serde_json::Value> = serde_json::from_str(&nested).unwrap();
        let flat: Vec<serde_json::Value> = serde_json::from_str(&flat).unwrap();
        assert_eq!(nested.len(), flat.len());
        assert!(flat.iter().all(|r| r["depth"].as_u64().unwrap() <= 3));
        assert!(flat.iter().any(|r| r["path"] == "/menu/menu1"));
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let client = client();
        client.http().set_response(
            "http://api.test/admin/login",
            MockResponse::Success(Response::json_ok(
                &json!({"code": 0, "data": {"token": "tok"}, "message": ""}),
            )),
        );

        let token = login(&client, "admin", "12345678").await.unwrap();
        assert_eq!(token, "tok");
        let sent = client.http().last_request().unwrap();
        assert_eq!(
            sent.json_body(),
            Some(json!({"name": "admin", "password": "12345678"}))
        );
    }

    #[tokio::test]
    async fn test_info_requires_token() {
        let err = info(&client(), &RouteSettings::default()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdminError>(),
            Some(AdminError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_info_reports_effective_roles() {
        let client = client().with_token("tok");
        client.http().set_response(
            "http://api.test/admin/info",
            MockResponse::Success(Response::json_ok(
                &json!({"code": 0, "data": {"name": "admin", "roles": ["admin"]}, "message": ""}),
            )),
        );

        let text = info(&client, &RouteSettings::default()).await.unwrap();
        assert!(text.contains("name: admin"));
        assert!(text.contains("effective roles: DEFAULT_ROLE"));
    }

    #[tokio::test]
    async fn test_list_categories() {
        let client = client().with_token("tok");
        client.http().set_response(
            "http://api.test/admin/getCategory",
            MockResponse::Success(Response::json_ok(&json!({
                "code": 0,
                "data": {"list": [{"id": 3, "categoryName": "Cards"}]},
                "message": ""
            }))),
        );

        let text = list(&client, ListTarget::Categories).await.unwrap();
        assert!(text.contains("Cards"));
    }
}
