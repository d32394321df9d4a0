use serde::{Deserialize, Serialize};

/// Form body for POST /token.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_serializes_bearer_type() {
        let resp = TokenResponse::bearer("abc".into());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""token_type":"bearer""#));
        assert!(json.contains(r#""access_token":"abc""#));
    }
}
