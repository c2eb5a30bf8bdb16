//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main taxdesk crate so fixtures and tests
//! refer to the same names.

/// Type alias for the taxdesk user database model.
pub type UserModel = entity::taxdesk_user::Model;
