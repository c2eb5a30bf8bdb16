pub use super::taxdesk_user::Entity as TaxdeskUser;
