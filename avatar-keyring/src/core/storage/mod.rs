//! Secret file storage
//!
//! This module owns the on-disk representation of the secret record: a pretty
//! printed JSON document wrapped in a warning banner and footer. Comment lines
//! are tolerated anywhere in the file when reading it back.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::{SecretRecord, SecretRepository};
use crate::infrastructure::platform;
use crate::shared::constants::{
    MODE_OWNER_READ_ONLY, MODE_OWNER_READ_WRITE, PUBLIC_NAME_PREFIX, SECRET_FILE_BANNER,
    SECRET_FILE_FOOTER,
};
use crate::shared::error::{Result, SecretError};
use crate::shared::utils::strip_comments;

/// Secret record stored in a single file
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render the full secret file text for `record`
pub fn render_secret_file(record: &SecretRecord) -> Result<String> {
    let json = serde_json::to_string_pretty(record).map_err(SecretError::Serialization)?;
    Ok(format!(
        "{}\n\n{}\n\n{}\n{}{}",
        SECRET_FILE_BANNER,
        json,
        SECRET_FILE_FOOTER,
        PUBLIC_NAME_PREFIX,
        record.id().unwrap_or_default()
    ))
}

/// Parse secret file text, ignoring `#` comments
pub fn parse_secret_file(text: &str) -> Result<SecretRecord> {
    serde_json::from_str(&strip_comments(text)).map_err(SecretError::Parse)
}

#[async_trait]
impl SecretRepository for FileSecretStore {
    async fn load(&self) -> Result<SecretRecord> {
        let text = fs::read_to_string(&self.path).await.map_err(SecretError::Read)?;
        parse_secret_file(&text)
    }

    async fn write(&self, record: &SecretRecord) -> Result<()> {
        let contents = render_secret_file(record)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(SecretError::Write)?;
            }
        }

        // The file may not exist yet
        if let Err(e) = platform::set_mode(&self.path, MODE_OWNER_READ_WRITE).await {
            log::debug!("Could not make {} writable: {}", self.path.display(), e);
        }

        let mut file = platform::open_for_rewrite(&self.path)
            .await
            .map_err(SecretError::Write)?;
        file.write_all(contents.as_bytes()).await.map_err(SecretError::Write)?;
        file.sync_all().await.map_err(SecretError::Write)?;
        drop(file);

        if let Err(e) = platform::set_mode(&self.path, MODE_OWNER_READ_ONLY).await {
            log::warn!("Could not make {} read-only: {}", self.path.display(), e);
        }

        log::debug!("Secret file written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EthKeys, StellarKeyPair, StellarKeys};
    use proptest::prelude::*;
    use serde_json::{json, Map};

    fn sample_record() -> SecretRecord {
        let mut identity = Map::new();
        identity.insert("curve".to_string(), json!("ed25519"));
        identity.insert("public".to_string(), json!("cHVibGlj.ed25519"));
        identity.insert("private".to_string(), json!("cHJpdmF0ZQ==.ed25519"));
        identity.insert("id".to_string(), json!("@cHVibGlj.ed25519"));

        let mut stellar = StellarKeys::from_pair(StellarKeyPair::new(
            "GCURRENT".to_string(),
            "SCURRENT".to_string(),
        ));
        stellar.old = Some(vec![StellarKeyPair::new("GOLD".to_string(), "SOLD".to_string())]);

        SecretRecord {
            identity,
            mnemonic: Some("abandon ability able".to_string()),
            stellar: Some(stellar),
            eth: Some(EthKeys {
                address: "0xAbC".to_string(),
                public_key: "0x04ab".to_string(),
                private_key: "0x01".to_string(),
            }),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> FileSecretStore {
        FileSecretStore::new(dir.path().join("nested").join("secret"))
    }

    #[tokio::test]
    async fn test_write_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        let record = sample_record();

        store.write(&record).await.expect("Failed to write record");
        let loaded = store.load().await.expect("Failed to load record");
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_rewrite_replaces_contents() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.write(&sample_record()).await.expect("Failed to write record");
        let smaller = SecretRecord::default();
        store.write(&smaller).await.expect("Failed to rewrite record");

        let loaded = store.load().await.expect("Failed to load record");
        assert_eq!(loaded, smaller);
    }

    #[tokio::test]
    async fn test_file_layout() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.write(&sample_record()).await.expect("Failed to write record");

        let text = std::fs::read_to_string(store.path()).expect("Failed to read file");
        assert!(text.starts_with("# These are your SECRET keys.\",\n#\n"));
        assert!(text.contains("# NEVER show this to anyone!!!\n\n{\n  \"curve\": \"ed25519\","));
        assert!(text.contains("\n}\n\n# WARNING! It's vital that you DO NOT edit OR share your SECRET keys.\n"));
        assert!(text.ends_with("# your public name: @cHVibGlj.ed25519"));
    }

    #[test]
    fn test_missing_id_renders_empty_name() {
        let text = render_secret_file(&SecretRecord::default()).expect("Failed to render");
        assert!(text.ends_with("# your public name: "));
        assert!(text.contains("\n\n{}\n\n"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = store_in(&dir).load().await.unwrap_err();
        assert!(matches!(err, SecretError::Read(_)));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("secret");
        std::fs::write(&path, "# banner\n{ \"stellar\": \n# footer").expect("Failed to write file");

        let err = FileSecretStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, SecretError::Parse(_)));
    }

    #[test]
    fn test_parse_hand_edited_file() {
        let text = r#"# keys
{
  "id": "@x", # trailing note
    # indented comment
  "stellar": { "publicKey": "GA", "secretKey": "SA" }
}
# your public name: @x"#;
        let record = parse_secret_file(text).expect("Failed to parse");
        assert_eq!(record.id(), Some("@x"));
        assert_eq!(record.stellar.expect("stellar section").public_key, "GA");
    }

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let text = r#"{ "legacy": { "nested": [1, 2] }, "id": "@x" }"#;
        let record = parse_secret_file(text).expect("Failed to parse");
        let rendered = render_secret_file(&record).expect("Failed to render");
        let reparsed = parse_secret_file(&rendered).expect("Failed to reparse");
        assert_eq!(reparsed.identity.get("legacy"), Some(&json!({ "nested": [1, 2] })));
        assert_eq!(reparsed.identity.keys().next().map(String::as_str), Some("legacy"));
        assert_eq!(reparsed, record);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_written_file_is_read_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.write(&sample_record()).await.expect("Failed to write record");
        let mode = platform::mode_of(store.path()).await.expect("Failed to read mode");
        assert_eq!(mode, 0o400);

        // A read-only file can still be rewritten by the store
        store.write(&SecretRecord::default()).await.expect("Failed to rewrite record");
        let mode = platform::mode_of(store.path()).await.expect("Failed to read mode");
        assert_eq!(mode, 0o400);
    }

    fn comment_line() -> impl Strategy<Value = String> {
        ("[ \t]{0,4}", "[^\n]{0,30}").prop_map(|(indent, body)| format!("{}#{}", indent, body))
    }

    proptest! {
        #[test]
        fn prop_comment_lines_are_ignored(
            comments in prop::collection::vec((any::<usize>(), comment_line()), 0..12)
        ) {
            let record = sample_record();
            let json = serde_json::to_string_pretty(&record).expect("Failed to serialize");
            let mut lines: Vec<String> = json.lines().map(str::to_string).collect();
            for (at, comment) in comments {
                let index = at % (lines.len() + 1);
                lines.insert(index, comment);
            }

            let parsed = parse_secret_file(&lines.join("\n")).expect("Failed to parse");
            prop_assert_eq!(parsed, record);
        }
    }
}
