pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::user::factory, test_setup_with_tables, test_setup_with_user_tables, TestError,
        TestSetup,
    };
}
