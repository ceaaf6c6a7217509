//! Shared wiremock setup for the integration tests.

use docusign::{Client, ClientConfig, Credentials};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT_ID: &str = "1234567";

pub fn credentials() -> Credentials {
    Credentials {
        username: "signer@acme.test".to_string(),
        password: "secret".to_string(),
        integrator_key: "ACME-xxxx".to_string(),
    }
}

/// Mount a login_information mock whose account points back at the mock
/// server itself, then run the full login handshake against it.
pub async fn logged_in_client(server: &MockServer) -> Client {
    Mock::given(method("GET"))
        .and(path("/restapi/v2/login_information"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "loginAccounts": [{
                "accountId": ACCOUNT_ID,
                "baseUrl": format!("{}/restapi", server.uri()),
                "name": "Acme Corp"
            }]
        })))
        .mount(server)
        .await;

    Client::login(
        &format!("{}/restapi", server.uri()),
        credentials(),
        ACCOUNT_ID,
        ClientConfig::default(),
    )
    .await
    .expect("login against mock server")
}
