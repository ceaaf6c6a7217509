//! User and group operations.

use crate::client::Client;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Client for user and group operations.
///
/// Access via `client.users()`.
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the account's users, keyed by user id.
    ///
    /// With `active_only` the listing is filtered server-side through the
    /// `status=Active` query parameter.
    pub async fn list(&self, active_only: bool) -> Result<HashMap<String, String>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            users: Vec<UserRecord>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct UserRecord {
            user_id: String,
            #[serde(default)]
            user_name: String,
        }

        let mut query: Vec<(&str, String)> = Vec::new();
        if active_only {
            query.push(("status", "Active".to_string()));
        }

        let response: Response = self.client.get("/users", &query).await?;
        Ok(response
            .users
            .into_iter()
            .map(|u| (u.user_id, u.user_name))
            .collect())
    }

    /// List the groups one user belongs to, keyed by group id.
    pub async fn groups(&self, user_id: &str) -> Result<HashMap<String, String>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Response {
            #[serde(default)]
            group_list: Vec<GroupRecord>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct GroupRecord {
            group_id: String,
            #[serde(default)]
            group_name: String,
        }

        let response: Response = self
            .client
            .get(&format!("/users/{}", user_id), &[])
            .await?;
        Ok(response
            .group_list
            .into_iter()
            .map(|g| (g.group_id, g.group_name))
            .collect())
    }
}
