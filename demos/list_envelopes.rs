//! End-to-end example for the DocuSign adapter.
//!
//! This example demonstrates:
//! - Logging in and binding to an account
//! - Listing envelopes, recipients and tabs
//! - Listing the flattened folder tree
//!
//! Run with:
//! ```bash
//! DOCUSIGN_HOST=https://demo.docusign.net/restapi \
//! DOCUSIGN_USERNAME=... DOCUSIGN_PASSWORD=... \
//! DOCUSIGN_INTEGRATOR_KEY=... DOCUSIGN_ACCOUNT_ID=... \
//! cargo run --example list_envelopes
//! ```

use docusign::{Client, ClientConfig, Credentials};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials come from the environment; wiring them up is the
    // caller's job, not the adapter's.
    let host = std::env::var("DOCUSIGN_HOST")
        .unwrap_or_else(|_| "https://demo.docusign.net/restapi".to_string());
    let account_id = std::env::var("DOCUSIGN_ACCOUNT_ID")
        .expect("DOCUSIGN_ACCOUNT_ID environment variable required");
    let credentials = Credentials {
        username: std::env::var("DOCUSIGN_USERNAME")
            .expect("DOCUSIGN_USERNAME environment variable required"),
        password: std::env::var("DOCUSIGN_PASSWORD")
            .expect("DOCUSIGN_PASSWORD environment variable required"),
        integrator_key: std::env::var("DOCUSIGN_INTEGRATOR_KEY")
            .expect("DOCUSIGN_INTEGRATOR_KEY environment variable required"),
    };

    println!("Logging in...");
    let client = Client::login(&host, credentials, &account_id, ClientConfig::default()).await?;
    println!("Bound to {} as account {}", client.base_url(), client.account_id());

    println!("\nEnvelopes (all time):");
    let envelopes = client.envelopes().list(None).await?;
    for (envelope_id, summary) in &envelopes {
        println!(
            "  {}  {}  [{}]",
            envelope_id,
            summary.subject.as_deref().unwrap_or("-"),
            summary.status.as_deref().unwrap_or("-")
        );

        let recipients = client.envelopes().recipients(envelope_id).await?;
        for (recipient_id, signer) in &recipients {
            println!(
                "    signer {}: {}",
                recipient_id,
                signer.name.as_deref().unwrap_or("-")
            );

            let tabs = client.envelopes().tabs(envelope_id, recipient_id).await?;
            for (category, entries) in &tabs {
                for (tab_id, entry) in entries {
                    println!(
                        "      {} {} {}: {:?}",
                        category, tab_id, entry.label, entry.value
                    );
                }
            }
        }
    }

    println!("\nFolders (flattened):");
    let folders = client.folders().list().await?;
    for (folder_id, name) in &folders {
        println!("  {}  {}", folder_id, name);
    }

    println!("\nActive users:");
    let users = client.users().list(true).await?;
    for (user_id, name) in &users {
        println!("  {}  {}", user_id, name);
    }

    Ok(())
}
