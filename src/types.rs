//! Type definitions for the DocuSign adapter.
//!
//! Wire types mirror the remote API's camelCase JSON; the simplified
//! summary types are what the listing operations hand back to callers.

use serde::{Deserialize, Serialize, Serializer};

/// Response of the unscoped `login_information` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInformation {
    /// Accounts reachable with the presented credentials.
    #[serde(default)]
    pub login_accounts: Vec<LoginAccount>,
}

/// One account entry from `login_information`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccount {
    /// Account identifier.
    pub account_id: String,
    /// Region-specific API root for this account, without version suffix.
    pub base_url: String,
    /// Display name of the account.
    #[serde(default)]
    pub name: String,
}

/// Subject and status of one envelope, as returned by the envelope listing.
///
/// Both fields are optional: the listing endpoint omits them for envelopes
/// the caller is expected to enrich through follow-up calls.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnvelopeSummary {
    /// Email subject of the envelope.
    pub subject: Option<String>,
    /// Envelope status (e.g. "sent", "completed").
    pub status: Option<String>,
}

/// One signer attached to an envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SignerSummary {
    /// Signer display name.
    pub name: Option<String>,
    /// Signer email address.
    pub email: Option<String>,
    /// Recipient status (e.g. "completed", "delivered").
    pub status: Option<String>,
}

/// Known tab categories, with a fallback for anything the remote API adds.
///
/// Only [`TabCategory::SignHere`] changes how a tab's value is read; every
/// other category, known or not, carries a plain string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCategory {
    /// Signature placement tabs (`signHereTabs`).
    SignHere,
    /// Free-text tabs (`textTabs`).
    Text,
    /// Full-name tabs (`fullNameTabs`).
    FullName,
    /// Email-address tabs (`emailAddressTabs`).
    EmailAddress,
    /// Any category this adapter does not model explicitly.
    Other,
}

impl TabCategory {
    /// Classify a category name as it appears in the tabs response.
    pub fn from_name(name: &str) -> TabCategory {
        match name {
            "signHereTabs" => TabCategory::SignHere,
            "textTabs" => TabCategory::Text,
            "fullNameTabs" => TabCategory::FullName,
            "emailAddressTabs" => TabCategory::EmailAddress,
            _ => TabCategory::Other,
        }
    }
}

/// Label and value of one tab, keyed by tab id in the tabs listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabEntry {
    /// The tab's label as placed on the document.
    pub label: String,
    /// The tab's value under the per-category policy.
    pub value: TabValue,
}

/// Value of a tab.
///
/// Signature tabs carry their status string when signed and the
/// [`TabValue::NotSigned`] sentinel otherwise; all other tabs carry a
/// string value, empty when the API omitted it.
#[derive(Debug, Clone, PartialEq)]
pub enum TabValue {
    /// A string value, or a signature tab's status.
    Text(String),
    /// A signature tab that has not been signed yet.
    NotSigned,
}

impl TabValue {
    /// The string value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TabValue::Text(s) => Some(s),
            TabValue::NotSigned => None,
        }
    }
}

// NotSigned serializes as boolean false, matching the wire-facing sentinel
// this adapter's consumers already expect.
impl Serialize for TabValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TabValue::Text(s) => serializer.serialize_str(s),
            TabValue::NotSigned => serializer.serialize_bool(false),
        }
    }
}

/// A folder node as returned by the folder listing, possibly nested.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder identifier.
    pub folder_id: String,
    /// Folder display name.
    #[serde(default)]
    pub name: String,
    /// Child folders; an absent key means no children.
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_account_deserialization() {
        let json = r#"{
            "loginAccounts": [{
                "accountId": "1234567",
                "baseUrl": "https://na2.docusign.net/restapi",
                "name": "Acme Corp",
                "userName": "signer@acme.test"
            }]
        }"#;

        let info: LoginInformation = serde_json::from_str(json).unwrap();
        assert_eq!(info.login_accounts.len(), 1);
        assert_eq!(info.login_accounts[0].account_id, "1234567");
        assert_eq!(
            info.login_accounts[0].base_url,
            "https://na2.docusign.net/restapi"
        );
    }

    #[test]
    fn test_tab_category_from_name() {
        assert_eq!(TabCategory::from_name("signHereTabs"), TabCategory::SignHere);
        assert_eq!(TabCategory::from_name("textTabs"), TabCategory::Text);
        assert_eq!(TabCategory::from_name("dateSignedTabs"), TabCategory::Other);
    }

    #[test]
    fn test_tab_value_serialization() {
        let signed = TabValue::Text("Completed".to_string());
        assert_eq!(serde_json::to_string(&signed).unwrap(), "\"Completed\"");

        let unsigned = TabValue::NotSigned;
        assert_eq!(serde_json::to_string(&unsigned).unwrap(), "false");
        assert_eq!(unsigned.as_str(), None);
    }

    #[test]
    fn test_folder_without_children_key() {
        let json = r#"{"folderId": "f-1", "name": "Inbox"}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.folder_id, "f-1");
        assert!(folder.folders.is_empty());
    }
}
