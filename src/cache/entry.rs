//! Cache Entry Module
//!
//! Defines the in-memory form of a cached search payload.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// A serialized provider response plus its expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized payload, returned verbatim on a hit
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_seconds` from now.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            value,
            created_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(r#"{"results":[]}"#.to_string(), 60);

        assert_eq!(entry.value, r#"{"results":[]}"#);
        assert!(!entry.is_expired());
        assert_eq!(entry.expires_at - entry.created_at, Duration::seconds(60));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("payload".to_string(), 10);

        assert!(!entry.is_expired_at(entry.expires_at - Duration::milliseconds(1)));
        assert!(entry.is_expired_at(entry.expires_at));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = CacheEntry::new("payload".to_string(), u64::MAX);
        assert!(!entry.is_expired());
    }
}
