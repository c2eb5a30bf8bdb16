pub mod prelude;

pub mod taxdesk_user;
