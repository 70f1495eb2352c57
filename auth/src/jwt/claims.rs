use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claims.
///
/// The service issues exactly one token shape: the subject is the user
/// identifier and the expiry is a fixed offset from the issue time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, stored as the subject
    /// * `ttl_seconds` - Seconds until the token expires
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_user(user_id: impl ToString, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", 172_800);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 172_800); // 2 days
    }
}
