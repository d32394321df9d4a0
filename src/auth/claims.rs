use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload. Deliberately minimal: the subject is only an identifier,
/// and every authenticated request re-resolves it against the users table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // user ID
    pub exp: usize, // expires at (unix timestamp)
}
