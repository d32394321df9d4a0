use sqlx::PgPool;
use tracing::warn;

use crate::{auth::password::verify_password, error::ApiError, users::repo::User};

/// Check a submitted username/password pair against the stored argon2 hash.
///
/// Unknown username and wrong password both collapse to the same
/// `AuthFailure`, so the endpoint never confirms whether a username exists.
pub async fn verify_credentials(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    let user = match User::find_by_username(db, username).await? {
        Some(u) => u,
        None => {
            warn!(%username, "login unknown username");
            return Err(ApiError::AuthFailure);
        }
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(%username, user_id = %user.id, "login invalid password");
        return Err(ApiError::AuthFailure);
    }

    Ok(user)
}
