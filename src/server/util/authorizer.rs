//! Ownership-based authorization predicates.
//!
//! Pure functions over the acting user and the owner ids of a resource. Repositories
//! call them after confirming the resource exists.

use crate::server::{
    error::auth::AuthError,
    model::actor::{Actor, Role},
};

/// Roles allowed to edit any author's content.
const EDITOR_ROLES: [Role; 1] = [Role::Admin];

/// Roles allowed to remove any author's content.
const MODERATOR_ROLES: [Role; 2] = [Role::Admin, Role::Moderator];

/// True when the actor wrote the resource or is an administrator.
pub fn is_author_or_admin(actor: &Actor, author_id: i32) -> bool {
    actor.id == author_id || EDITOR_ROLES.contains(&actor.role)
}

/// True when the actor wrote the resource, moderates, or owns the profile or
/// group the resource was posted to.
pub fn is_author_or_has_right_role_or_is_owner(
    actor: &Actor,
    author_id: i32,
    owner_id: i32,
) -> bool {
    actor.id == author_id || actor.id == owner_id || MODERATOR_ROLES.contains(&actor.role)
}

/// Rejects an actor acting on behalf of another user unless they are an administrator.
pub fn ensure_self_or_admin(actor: &Actor, id_user: i32) -> Result<(), AuthError> {
    if is_author_or_admin(actor, id_user) {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            actor.id,
            format!("act on behalf of user {}", id_user),
        ))
    }
}
