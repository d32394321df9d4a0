//! Ownership-based access control.
//!
//! Pure decision logic, separated from HTTP and storage: handlers fetch the
//! resource first (missing resources 404 before any ownership question is
//! asked) and then consult these rules. Reads are unrestricted; mutation
//! rights belong to the resource's creator only.

use uuid::Uuid;

use crate::{auth::Identity, error::ApiError, items::repo::Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Update,
    Delete,
}

/// Item rule: only the owner may update or delete.
pub fn authorize_item(identity: &Identity, op: Operation, item: &Item) -> Result<(), ApiError> {
    match op {
        Operation::Read => Ok(()),
        Operation::Update if item.owner_id == identity.id => Ok(()),
        Operation::Delete if item.owner_id == identity.id => Ok(()),
        Operation::Update => Err(ApiError::Forbidden("update this item")),
        Operation::Delete => Err(ApiError::Forbidden("delete this item")),
    }
}

/// User rule: accounts may only be mutated by themselves.
pub fn authorize_user(
    identity: &Identity,
    op: Operation,
    target_user_id: Uuid,
) -> Result<(), ApiError> {
    match op {
        Operation::Read => Ok(()),
        Operation::Update if identity.id == target_user_id => Ok(()),
        Operation::Delete if identity.id == target_user_id => Ok(()),
        Operation::Update => Err(ApiError::Forbidden("update this user")),
        Operation::Delete => Err(ApiError::Forbidden("delete this user")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn identity(id: Uuid) -> Identity {
        Identity {
            id,
            username: "alice".into(),
        }
    }

    fn item_owned_by(owner_id: Uuid) -> Item {
        Item {
            id: Uuid::new_v4(),
            owner_id,
            title: "flask".into(),
            description: None,
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn owner_may_update_and_delete_item() {
        let owner = Uuid::new_v4();
        let item = item_owned_by(owner);
        let id = identity(owner);
        assert!(authorize_item(&id, Operation::Update, &item).is_ok());
        assert!(authorize_item(&id, Operation::Delete, &item).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden_to_mutate_item() {
        let item = item_owned_by(Uuid::new_v4());
        let stranger = identity(Uuid::new_v4());
        assert!(matches!(
            authorize_item(&stranger, Operation::Update, &item),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            authorize_item(&stranger, Operation::Delete, &item),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn reads_are_unrestricted() {
        let item = item_owned_by(Uuid::new_v4());
        let stranger = identity(Uuid::new_v4());
        assert!(authorize_item(&stranger, Operation::Read, &item).is_ok());
        assert!(authorize_user(&stranger, Operation::Read, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn user_may_only_mutate_self() {
        let me = Uuid::new_v4();
        let id = identity(me);
        assert!(authorize_user(&id, Operation::Update, me).is_ok());
        assert!(authorize_user(&id, Operation::Delete, me).is_ok());
        assert!(matches!(
            authorize_user(&id, Operation::Update, Uuid::new_v4()),
            Err(ApiError::Forbidden(_))
        ));
    }
}
