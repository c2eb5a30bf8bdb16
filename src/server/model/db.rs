//! Database model type aliases.
//!
//! Aliases for the SeaORM entity models so the rest of the server doesn't import from the
//! `entity` crate directly.

/// Type alias for the taxdesk user database model.
///
/// # Fields (from `entity::taxdesk_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique email address
/// - `name` - Display name (nullable)
/// - `created_at` - Timestamp when the user record was created
pub type UserModel = entity::taxdesk_user::Model;
