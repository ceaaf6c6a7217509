//! # DocuSign legacy v2 adapter
//!
//! A read-only Rust client for a subset of the DocuSign legacy v2 REST
//! API. The adapter hides the two-phase login handshake, account-scoped
//! paths and nested JSON shapes behind simple keyed collections:
//! envelopes, recipients, tabs, folders, users and groups.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use docusign::{Client, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Login locates the account's regional endpoint and binds to it.
//!     let client = Client::login(
//!         "https://demo.docusign.net/restapi",
//!         Credentials {
//!             username: "signer@acme.test".to_string(),
//!             password: "secret".to_string(),
//!             integrator_key: "ACME-xxxx".to_string(),
//!         },
//!         "1234567",
//!         ClientConfig::default(),
//!     )
//!     .await?;
//!
//!     // Everything since the epoch; pass a date to narrow the window.
//!     let envelopes = client.envelopes().list(None).await?;
//!     for (envelope_id, summary) in &envelopes {
//!         println!("{}: {:?}", envelope_id, summary.subject);
//!     }
//!
//!     // Folders arrive as a tree and are flattened to id -> name.
//!     let folders = client.folders().list().await?;
//!     println!("{} folders", folders.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! The covered surface is read-only: no envelope creation, no sending, no
//! write operations of any kind. Listings reflect only the first page the
//! service returns, and every call re-fetches from the remote service.
//!
//! ## Error handling
//!
//! All operations return `Result<T, DocusignError>`. The only error the
//! adapter raises itself is [`DocusignError::AccountNotAccessible`] during
//! login; transport and decode failures propagate as-is, with no retries.
//!
//! ```rust,no_run
//! use docusign::{Client, ClientConfig, Credentials, DocusignError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = Client::login(
//!         "https://demo.docusign.net/restapi",
//!         Credentials {
//!             username: "signer@acme.test".to_string(),
//!             password: "secret".to_string(),
//!             integrator_key: "ACME-xxxx".to_string(),
//!         },
//!         "0000000",
//!         ClientConfig::default(),
//!     )
//!     .await;
//!
//!     match result {
//!         Ok(_) => println!("logged in"),
//!         Err(DocusignError::AccountNotAccessible { account_id }) => {
//!             println!("account {} not visible to these credentials", account_id)
//!         }
//!         Err(e) => println!("error: {}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod envelopes;
pub mod error;
pub mod folders;
pub mod types;
pub mod users;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, Credentials};
pub use error::{DocusignError, Result};

// Re-export the types module's surface for easy access
pub use types::{
    EnvelopeSummary, Folder, LoginAccount, LoginInformation, SignerSummary, TabCategory, TabEntry,
    TabValue,
};
