//! Hashing - SHA-256 document digests
//!
//! A digest covers the canonical text of a document, so two exports of the
//! same resume hash alike whatever map ordering produced them.

use serde::Serialize;
use serde_json::{to_string, Value};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compact JSON with object keys sorted at every depth. Array order is kept.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), sort_value(v))).collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// Digest of a serialized resume, tagged with the dialect it was written in.
pub fn document_digest(dialect: &str, document: &Value) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(document)?;
    Ok(sha256_hex(format!("{}:{}", dialect, canonical).as_bytes()))
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"sections": [], "config": {"z": 1, "a": 2}, "header": null});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(canonical, r#"{"config":{"a":2,"z":1},"header":null,"sections":[]}"#);
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_depends_on_dialect() {
        let document = json!({"sections": []});
        let alta = document_digest("altacv", &document).unwrap();
        let awesome = document_digest("awesomecv", &document).unwrap();
        assert_ne!(alta, awesome);
        assert_eq!(alta, document_digest("altacv", &document).unwrap());
        assert_eq!(alta.len(), 64);
    }
}
