//! Shared wire-schema DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless and subscription dispatch can remain schema-driven. Numeric
//! fields use tolerant deserializers because the document store may encode
//! timestamps as floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier assigned by the identity service.
    pub uid: String,
    /// Email address the account was registered with.
    pub email: String,
}

/// One photo document from the remote `photos` collection.
///
/// Written once per successful upload and never mutated; the client holds a
/// read-only projection that is replaced wholesale on every snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Document identifier assigned by the document store.
    pub id: String,
    /// Public download URL of the stored blob.
    pub url: String,
    /// Uploader's email, or `None` for anonymous uploads.
    pub uploader: Option<String>,
    /// Uploader's uid, or `None` for anonymous uploads.
    pub uid: Option<String>,
    /// Original filename as selected by the uploader.
    pub name: String,
    /// Server-assigned creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
}

/// Fields for a new photo document. `created_at` is assigned server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPhotoRecord {
    /// Public download URL of the uploaded blob.
    pub url: String,
    /// Uploader's email, or `None` when uploaded anonymously.
    pub uploader: Option<String>,
    /// Uploader's uid, or `None` when uploaded anonymously.
    pub uid: Option<String>,
    /// Original filename.
    pub name: String,
}

/// One message on an events WebSocket channel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    /// Auth-channel event: the current identity, or `None` when signed out.
    Auth {
        /// Present identity or absence.
        identity: Option<Identity>,
    },
    /// Query-channel event: the full ordered result set of the live query.
    Snapshot {
        /// Records in backend-delivered order (most recent first).
        #[serde(default)]
        records: Vec<PhotoRecord>,
    },
}

/// Deserialize an `i64` from either an integer or a float wire value.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|n| n.round() as i64))
        .ok_or_else(|| D::Error::custom("expected a numeric created_at"))
}
