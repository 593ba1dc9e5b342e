//! Stable cache keys for derived progression results.
//!
//! Two snapshots that are structurally equal must produce identical
//! keys regardless of field order, so the snapshot is first rewritten
//! into a canonical JSON encoding (object keys sorted recursively,
//! array order preserved) before hashing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::models::FormSnapshot;

/// Keys are the first 16 hex characters of a SHA-256 digest.
/// Short enough for readable storage blobs, still collision-resistant.
const KEY_LENGTH: usize = 16;

/// A 16-character lowercase hex digest identifying one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the cache key for a snapshot.
///
/// Total over every snapshot shape, including fully empty ones: the
/// empty snapshot canonicalizes to `{}` and hashes like anything else.
pub fn cache_key(snapshot: &FormSnapshot) -> CacheKey {
    // A FormSnapshot is plain data; conversion to Value cannot fail
    let value = serde_json::to_value(snapshot).unwrap_or(Value::Null);
    let canonical = canonical_json(&value);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let hex = format!("{:x}", hasher.finalize());

    CacheKey(hex[..KEY_LENGTH].to_string())
}

/// Serialize a JSON value in canonical form: compact, with object keys
/// sorted lexicographically (ascending byte order) at every nesting
/// level. Arrays keep their element order.
pub fn canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
