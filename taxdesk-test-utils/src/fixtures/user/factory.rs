//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database
//! interaction.

use chrono::Utc;

use crate::model::UserModel;

/// Create a mock user database model with standard test values.
///
/// # Arguments
/// - `id` - The user's primary key
/// - `email` - The user's unique email address
pub fn mock_user_model(id: &str, email: &str) -> UserModel {
    UserModel {
        id: id.to_string(),
        email: email.to_string(),
        name: Some("Test User".to_string()),
        created_at: Utc::now().naive_utc(),
    }
}
