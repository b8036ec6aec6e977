//! Versioned snapshot envelope types and helpers.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Version for [`SnapshotEnvelope`] metadata serialization.
pub const SNAPSHOT_ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Versioned envelope for persisted state payloads.
///
/// Domains that previously stored bare payloads keep reading the legacy
/// shape themselves; the envelope is what new writes produce.
pub struct SnapshotEnvelope {
    /// Envelope schema version.
    pub envelope_version: u32,
    /// Storage key identifying the owning domain.
    pub key: String,
    /// Domain-defined schema version for the payload.
    pub schema_version: u32,
    /// Last update time in unix milliseconds.
    pub updated_at_unix_ms: u64,
    /// Serialized domain payload.
    pub payload: Value,
}

impl SnapshotEnvelope {
    /// Creates a new envelope and stamps it with a monotonic timestamp.
    pub fn new(key: impl Into<String>, schema_version: u32, payload: Value) -> Self {
        Self {
            envelope_version: SNAPSHOT_ENVELOPE_VERSION,
            key: key.into(),
            schema_version,
            updated_at_unix_ms: crate::time::next_monotonic_timestamp_ms(),
            payload,
        }
    }
}

/// Builds a versioned [`SnapshotEnvelope`] from a serializable payload.
///
/// # Errors
///
/// Returns an error when `payload` cannot be converted to JSON.
pub fn build_snapshot_envelope<T: Serialize>(
    key: &str,
    schema_version: u32,
    payload: &T,
) -> Result<SnapshotEnvelope, String> {
    let payload = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    Ok(SnapshotEnvelope::new(key.to_string(), schema_version, payload))
}

/// Deserializes an envelope payload into a target type.
///
/// # Errors
///
/// Returns an error when deserialization fails.
pub fn decode_envelope_payload<T: DeserializeOwned>(
    envelope: &SnapshotEnvelope,
) -> Result<T, String> {
    serde_json::from_value(envelope.payload.clone()).map_err(|e| e.to_string())
}
