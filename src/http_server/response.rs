//! # Response Acknowledgments
//!
//! Typed bodies for write operations, mirroring the wire shapes of the
//! driver's insert-one and delete-one results.

use bson::oid::ObjectId;
use serde::Serialize;

/// Insert acknowledgment carrying the store-assigned identifier
#[derive(Debug, Clone, Serialize)]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(
        rename = "insertedId",
        serialize_with = "bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub inserted_id: ObjectId,
}

impl InsertAck {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Delete acknowledgment; `deletedCount` is 0 when the id matched nothing
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAck {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
