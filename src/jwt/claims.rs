use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// JWT claims payload.
///
/// Carries the standard subject/expiry/issued-at claims plus arbitrary
/// custom fields via the flattened `extra` map. `exp` and `iat` are set by
/// the issuer at signing time; anything the caller puts there is
/// overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the authenticated username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, injected by the issuer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, injected by the issuer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into the token payload)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims identifying a user.
    pub fn for_subject(sub: impl ToString) -> Self {
        Self::new().with_subject(sub)
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Subject claim, if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_are_empty() {
        let claims = Claims::new();
        assert!(claims.sub.is_none());
        assert!(claims.exp.is_none());
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice");
        assert_eq!(claims.subject(), Some("alice"));
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("alice")
            .with_extra("role", "admin");

        assert_eq!(claims.sub, Some("alice".to_string()));
        assert_eq!(claims.extra.get("role").unwrap().as_str(), Some("admin"));
    }

    #[test]
    fn test_extra_fields_flatten_into_payload() {
        let claims = Claims::for_subject("alice").with_extra("role", "admin");

        let json = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert_eq!(json["sub"], "alice");
        assert_eq!(json["role"], "admin");
        // Unset standard claims are omitted entirely
        assert!(json.get("exp").is_none());
    }
}
