//! Folder operations: flattened listing and per-folder contents.

use crate::client::Client;
use crate::error::Result;
use crate::types::Folder;
use serde::Deserialize;
use std::collections::HashMap;

/// Client for folder operations.
///
/// Access via `client.folders()`.
pub struct FoldersClient {
    client: Client,
}

impl FoldersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every folder in the account as one flat id-to-name mapping.
    ///
    /// The service returns folders as a tree; nested folders at any depth
    /// are walked and inserted alongside their parents, so hierarchy is
    /// discarded.
    pub async fn list(&self) -> Result<HashMap<String, String>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            folders: Vec<Folder>,
        }

        let response: Response = self.client.get("/folders", &[]).await?;
        Ok(flatten(response.folders))
    }

    /// List the envelopes in one folder, keyed by envelope id.
    ///
    /// With `include_status` the subject is suffixed with the envelope
    /// status in parentheses, e.g. `"Contract (sent)"`. Only the first
    /// page the service returns is reflected; the pagination cursor is
    /// ignored.
    pub async fn contents(
        &self,
        folder_id: &str,
        include_status: bool,
    ) -> Result<HashMap<String, String>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Response {
            #[serde(default)]
            folder_items: Vec<FolderItem>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct FolderItem {
            envelope_id: String,
            #[serde(default)]
            subject: String,
            #[serde(default)]
            status: String,
        }

        let response: Response = self
            .client
            .get(&format!("/folders/{}", folder_id), &[])
            .await?;
        Ok(response
            .folder_items
            .into_iter()
            .map(|item| {
                let subject = if include_status {
                    format!("{} ({})", item.subject, item.status)
                } else {
                    item.subject
                };
                (item.envelope_id, subject)
            })
            .collect())
    }
}

/// Flatten a folder tree of any depth into one id-to-name mapping.
///
/// Explicit stack, children pushed in reverse: traversal is depth-first,
/// parent before children, children in the order the service returned
/// them.
fn flatten(roots: Vec<Folder>) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    let mut stack: Vec<Folder> = roots.into_iter().rev().collect();
    while let Some(folder) = stack.pop() {
        flat.insert(folder.folder_id, folder.name);
        stack.extend(folder.folders.into_iter().rev());
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, children: Vec<Folder>) -> Folder {
        Folder {
            folder_id: id.to_string(),
            name: name.to_string(),
            folders: children,
        }
    }

    #[test]
    fn test_flatten_nested_tree() {
        let tree = vec![folder(
            "a",
            "Alpha",
            vec![folder("b", "Beta", vec![folder("c", "Gamma", vec![])])],
        )];

        let flat = flatten(tree);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat["a"], "Alpha");
        assert_eq!(flat["b"], "Beta");
        assert_eq!(flat["c"], "Gamma");
    }

    #[test]
    fn test_flatten_keeps_duplicate_free_siblings() {
        let tree = vec![
            folder("r1", "Root 1", vec![folder("r1c", "Child", vec![])]),
            folder("r2", "Root 2", vec![]),
        ];

        let flat = flatten(tree);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat["r1c"], "Child");
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(Vec::new()).is_empty());
    }

    #[test]
    fn test_flatten_deep_chain() {
        // A 10k-deep chain must not overflow the call stack.
        let mut node = folder("leaf", "Leaf", vec![]);
        for depth in 0..10_000 {
            node = folder(&format!("d{}", depth), "Level", vec![node]);
        }

        let flat = flatten(vec![node]);
        assert_eq!(flat.len(), 10_001);
        assert_eq!(flat["leaf"], "Leaf");
    }
}
