//! DocuSign API client.
//!
//! The main entry point for the adapter. [`Client::login`] performs the
//! two-phase login_information handshake and yields a client bound to the
//! account's regional endpoint; the per-resource clients are reached
//! through [`Client::envelopes`], [`Client::folders`] and
//! [`Client::users`].

use crate::envelopes::EnvelopesClient;
use crate::error::{DocusignError, Result};
use crate::folders::FoldersClient;
use crate::types::{LoginAccount, LoginInformation};
use crate::users::UsersClient;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use std::time::Duration;

/// Version segment appended to every API root.
const API_VERSION: &str = "v2";
/// Header carrying the JSON-encoded legacy credentials
/// (`X-DocuSign-Authentication`; header names are matched
/// case-insensitively, stored lowercase).
const AUTH_HEADER: &str = "x-docusign-authentication";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Legacy header credentials: username, password and integrator key.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account username (usually an email address).
    pub username: String,
    /// Account password.
    pub password: String,
    /// Integrator key issued for the calling application.
    pub integrator_key: String,
}

impl Credentials {
    /// Encode the credentials into the session's base header set: the
    /// `X-DocuSign-Authentication` JSON value plus the content type.
    pub(crate) fn to_headers(&self) -> Result<HeaderMap> {
        // Key names and their order are dictated by the remote API.
        #[derive(Serialize)]
        struct AuthPayload<'a> {
            #[serde(rename = "Username")]
            username: &'a str,
            #[serde(rename = "Password")]
            password: &'a str,
            #[serde(rename = "IntegratorKey")]
            integrator_key: &'a str,
        }

        let value = serde_json::to_string(&AuthPayload {
            username: &self.username,
            password: &self.password,
            integrator_key: &self.integrator_key,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTH_HEADER,
            HeaderValue::from_str(&value)
                .map_err(|e| DocusignError::InvalidRequest(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// DocuSign API client, bound to one account on one regional endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use docusign::{Client, ClientConfig, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::login(
///         "https://demo.docusign.net/restapi",
///         Credentials {
///             username: "signer@acme.test".to_string(),
///             password: "secret".to_string(),
///             integrator_key: "ACME-xxxx".to_string(),
///         },
///         "1234567",
///         ClientConfig::default(),
///     )
///     .await?;
///
///     let envelopes = client.envelopes().list(None).await?;
///     println!("{} envelopes", envelopes.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    base_url: String,
    account_id: String,
}

impl Client {
    /// Log in and bind the client to the requested account.
    ///
    /// The handshake is a fixed two-step sequence against the unscoped
    /// `login_information` endpoint: the first pass on `host` locates the
    /// account and its region-specific base URL, the second pass repeats
    /// the lookup once against that regional host to confirm it and
    /// finalize the session. A third lookup is never made.
    ///
    /// # Arguments
    ///
    /// * `host` - API root without version suffix, e.g.
    ///   `https://demo.docusign.net/restapi`
    /// * `credentials` - legacy header credentials
    /// * `account_id` - the account to bind to
    /// * `config` - transport options
    ///
    /// # Errors
    ///
    /// [`DocusignError::AccountNotAccessible`] when the account id is not
    /// in the login_information account list; no retry is attempted.
    pub async fn login(
        host: &str,
        credentials: Credentials,
        account_id: &str,
        config: ClientConfig,
    ) -> Result<Client> {
        let auth_headers = credentials.to_headers()?;

        // First pass: locate the account on the host the caller gave us.
        let client = Self::bind(host, account_id.to_string(), auth_headers.clone(), &config)?;
        let account = client.find_account().await?;

        // Second pass: fresh transport on the account's regional host,
        // then one confirming lookup. Never recurses further.
        let mut client = Self::bind(&account.base_url, account.account_id, auth_headers, &config)?;
        let account = client.find_account().await?;
        client.account_id = account.account_id;

        Ok(client)
    }

    /// The versioned API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The account id all scoped paths are prefixed with.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Envelope, recipient and tab operations.
    pub fn envelopes(&self) -> EnvelopesClient {
        EnvelopesClient::new(self.clone())
    }

    /// Folder operations.
    pub fn folders(&self) -> FoldersClient {
        FoldersClient::new(self.clone())
    }

    /// User and group operations.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Build a client bound to `host`, with the auth headers installed as
    /// transport defaults so per-request headers override them on key
    /// collision.
    fn bind(
        host: &str,
        account_id: String,
        auth_headers: HeaderMap,
        config: &ClientConfig,
    ) -> Result<Client> {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("docusign-rs/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(auth_headers)
            .build()?;

        Ok(Client {
            http,
            base_url: format!("{}/{}", host.trim_end_matches('/'), API_VERSION),
            account_id,
        })
    }

    /// One login_information lookup for the bound account id.
    async fn find_account(&self) -> Result<LoginAccount> {
        let info: LoginInformation = self
            .request(Method::GET, "/login_information", &[], None, false)
            .await?;
        info.login_accounts
            .into_iter()
            .find(|account| account.account_id == self.account_id)
            .ok_or_else(|| DocusignError::AccountNotAccessible {
                account_id: self.account_id.clone(),
            })
    }

    /// Make an authenticated, account-scoped GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, path, query, None, true).await
    }

    /// Generic request helper.
    ///
    /// Normalizes `path` to a single leading slash, prepends
    /// `/accounts/{account_id}` when `account_scoped`, layers
    /// `extra_headers` over the session defaults (extras win), and decodes
    /// the JSON body. Only the login_information call is unscoped.
    pub(crate) async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        extra_headers: Option<HeaderMap>,
        account_scoped: bool,
    ) -> Result<T> {
        let url = self.endpoint(path, account_scoped);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(headers) = extra_headers {
            request = request.headers(headers);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DocusignError::Api {
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, path: &str, account_scoped: bool) -> String {
        let path = format!("/{}", path.trim_start_matches('/'));
        if account_scoped {
            format!("{}/accounts/{}{}", self.base_url, self.account_id, path)
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(host: &str) -> Client {
        let credentials = Credentials {
            username: "u@example.test".to_string(),
            password: "pw".to_string(),
            integrator_key: "KEY-1".to_string(),
        };
        Client::bind(
            host,
            "1234567".to_string(),
            credentials.to_headers().unwrap(),
            &ClientConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_auth_header_encoding() {
        let credentials = Credentials {
            username: "u@example.test".to_string(),
            password: "pw".to_string(),
            integrator_key: "KEY-1".to_string(),
        };
        let headers = credentials.to_headers().unwrap();
        assert_eq!(
            headers.get(AUTH_HEADER).unwrap(),
            r#"{"Username":"u@example.test","Password":"pw","IntegratorKey":"KEY-1"}"#
        );
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_bind_appends_version() {
        let client = test_client("https://demo.docusign.net/restapi/");
        assert_eq!(client.base_url(), "https://demo.docusign.net/restapi/v2");
    }

    #[test]
    fn test_endpoint_scoping_and_normalization() {
        let client = test_client("https://demo.docusign.net/restapi");
        assert_eq!(
            client.endpoint("envelopes", true),
            "https://demo.docusign.net/restapi/v2/accounts/1234567/envelopes"
        );
        // Leading slashes collapse to one either way.
        assert_eq!(
            client.endpoint("/envelopes", true),
            "https://demo.docusign.net/restapi/v2/accounts/1234567/envelopes"
        );
        assert_eq!(
            client.endpoint("login_information", false),
            "https://demo.docusign.net/restapi/v2/login_information"
        );
    }
}
