//! Envelope operations: listing, recipients and tabs.

use crate::client::Client;
use crate::error::Result;
use crate::types::{EnvelopeSummary, SignerSummary, TabCategory, TabEntry, TabValue};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// Client for envelope operations.
///
/// Access via `client.envelopes()`.
pub struct EnvelopesClient {
    client: Client,
}

impl EnvelopesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List envelopes changed since `from_date`, keyed by envelope id.
    ///
    /// `None` means the epoch, i.e. every envelope the account has. Only
    /// the first page the service returns is reflected.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chrono::NaiveDate;
    /// # use docusign::{Client, ClientConfig, Credentials};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::login("https://demo.docusign.net/restapi",
    /// #     Credentials { username: String::new(), password: String::new(), integrator_key: String::new() },
    /// #     "1234567", ClientConfig::default()).await?;
    /// let recent = client
    ///     .envelopes()
    ///     .list(NaiveDate::from_ymd_opt(2026, 1, 1))
    ///     .await?;
    /// for (envelope_id, summary) in &recent {
    ///     println!("{}: {:?}", envelope_id, summary.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(
        &self,
        from_date: Option<NaiveDate>,
    ) -> Result<HashMap<String, EnvelopeSummary>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            envelopes: Vec<EnvelopeRecord>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct EnvelopeRecord {
            envelope_id: String,
            subject: Option<String>,
            status: Option<String>,
        }

        // chrono's default date is the epoch, 1970-01-01.
        let from_date = from_date.unwrap_or_default();
        let query = [("from_date", from_date.format("%Y-%m-%d").to_string())];

        let response: Response = self.client.get("/envelopes", &query).await?;
        Ok(response
            .envelopes
            .into_iter()
            .map(|e| {
                (
                    e.envelope_id,
                    EnvelopeSummary {
                        subject: e.subject,
                        status: e.status,
                    },
                )
            })
            .collect())
    }

    /// List an envelope's signers, keyed by recipient id.
    ///
    /// Other recipient roles (agents, carbon copies, ...) are ignored.
    pub async fn recipients(&self, envelope_id: &str) -> Result<HashMap<String, SignerSummary>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            signers: Vec<SignerRecord>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct SignerRecord {
            recipient_id: String,
            name: Option<String>,
            email: Option<String>,
            status: Option<String>,
        }

        let response: Response = self
            .client
            .get(&format!("/envelopes/{}/recipients", envelope_id), &[])
            .await?;
        Ok(response
            .signers
            .into_iter()
            .map(|s| {
                (
                    s.recipient_id,
                    SignerSummary {
                        name: s.name,
                        email: s.email,
                        status: s.status,
                    },
                )
            })
            .collect())
    }

    /// List one recipient's tabs, keyed by category name and then tab id.
    ///
    /// Every category present in the response is walked, not a fixed
    /// allow-list. Sign-here tabs map to their status when signed and to
    /// [`TabValue::NotSigned`] otherwise; every other category maps to its
    /// string value, empty when absent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use docusign::{Client, ClientConfig, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::login("https://demo.docusign.net/restapi",
    /// #     Credentials { username: String::new(), password: String::new(), integrator_key: String::new() },
    /// #     "1234567", ClientConfig::default()).await?;
    /// let tabs = client.envelopes().tabs("env-1", "recip-1").await?;
    /// for (category, entries) in &tabs {
    ///     for (tab_id, entry) in entries {
    ///         println!("{} {} {}: {:?}", category, tab_id, entry.label, entry.value);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tabs(
        &self,
        envelope_id: &str,
        recipient_id: &str,
    ) -> Result<HashMap<String, HashMap<String, TabEntry>>> {
        let response: HashMap<String, Vec<TabRecord>> = self
            .client
            .get(
                &format!(
                    "/envelopes/{}/recipients/{}/tabs",
                    envelope_id, recipient_id
                ),
                &[],
            )
            .await?;

        let mut tabs = HashMap::new();
        for (category, records) in response {
            let kind = TabCategory::from_name(&category);
            let entries = records
                .into_iter()
                .map(|record| {
                    let value = tab_value(&kind, record.value, record.status);
                    (
                        record.tab_id,
                        TabEntry {
                            label: record.tab_label,
                            value,
                        },
                    )
                })
                .collect();
            tabs.insert(category, entries);
        }
        Ok(tabs)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TabRecord {
    tab_id: String,
    #[serde(default)]
    tab_label: String,
    value: Option<String>,
    status: Option<String>,
}

/// Per-category value policy: sign-here tabs report signing status,
/// everything else reports the plain value.
fn tab_value(kind: &TabCategory, value: Option<String>, status: Option<String>) -> TabValue {
    match kind {
        TabCategory::SignHere => match status {
            Some(status) if !status.is_empty() => TabValue::Text(status),
            _ => TabValue::NotSigned,
        },
        _ => TabValue::Text(value.unwrap_or_default()),
    }
}
