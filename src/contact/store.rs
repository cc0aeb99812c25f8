use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::{AppError, AppResult};

/// One contact-form submission, stamped at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Append-only log of submissions, kept as one pretty-printed JSON array
/// file. The whole load-append-write cycle runs under a mutex so concurrent
/// submissions cannot overwrite each other's appends.
#[derive(Clone)]
pub struct MessageStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    lock: Mutex<()>,
}

impl MessageStore {
    pub fn new(path: &Path) -> MessageStore {
        MessageStore {
            inner: Arc::new(Inner {
                path: path.to_path_buf(),
                lock: Mutex::new(()),
            }),
        }
    }

    pub async fn append(&self, name: &str, email: &str, message: &str) -> AppResult<Message> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::validation("All fields are required."));
        }

        let _guard = self.inner.lock.lock().await;

        let mut messages = self.load().await?;
        let record = Message {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            date: OffsetDateTime::now_utc(),
        };
        messages.push(record.clone());

        if let Some(parent) = self.inner.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.inner.path, serde_json::to_vec_pretty(&messages)?).await?;

        Ok(record)
    }

    // Callers hold the store lock.
    async fn load(&self) -> AppResult<Vec<Message>> {
        let bytes = match tokio::fs::read(&self.inner.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn append_validates_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let store = MessageStore::new(&path);

        for (name, email, message) in [("", "a@x.com", "hi"), ("A", "", "hi"), ("A", "a@x.com", "")] {
            match store.append(name, email, message).await {
                Err(AppError::Validation(text)) => assert_eq!(text, "All fields are required."),
                other => panic!("expected Validation, got {other:?}"),
            }
        }

        // A rejected submission never touches the file.
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn append_keeps_earlier_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let store = MessageStore::new(&path);

        store.append("A", "a@x.com", "first").await.unwrap();
        store.append("B", "b@x.com", "second").await.unwrap();

        let stored: Vec<Message> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].message, "first");
        assert_eq!(stored[1].message, "second");
    }

    #[tokio::test]
    async fn concurrent_appends_all_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let store = MessageStore::new(&path);

        let (a, b) = tokio::join!(
            store.append("A", "a@x.com", "one"),
            store.append("B", "b@x.com", "two"),
        );
        a.unwrap();
        b.unwrap();

        let stored: Vec<Message> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn date_round_trips_as_rfc3339() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.json");
        let store = MessageStore::new(&path);

        let record = store.append("A", "a@x.com", "hi").await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let date = raw[0]["date"].as_str().unwrap();
        let parsed =
            OffsetDateTime::parse(date, &time::format_description::well_known::Rfc3339).unwrap();
        assert_eq!(parsed, record.date);
    }
}
