//! Notification type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de::{epoch, null_as_default, timestamp_or_epoch};
use crate::enums::ResourceType;

/// An in-app notification for the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(
        default,
        rename = "resourceType",
        alias = "type",
        deserialize_with = "null_as_default"
    )]
    pub resource_type: ResourceType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,

    /// The Unix epoch when the payload has no usable timestamp.
    #[serde(default = "epoch", deserialize_with = "timestamp_or_epoch")]
    pub created_at: DateTime<Utc>,
}
