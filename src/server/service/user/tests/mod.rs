use std::sync::Mutex;

use taxdesk_test_utils::prelude::*;

use crate::server::{error::lookup::LookupError, service::user::LookupLogger};


/// Records the operation name of every reported failure.
#[derive(Default)]
struct RecordingLogger {
    operations: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    fn operations(&self) -> Vec<&'static str> {
        self.operations.lock().unwrap().clone()
    }
}

impl LookupLogger for RecordingLogger {
    fn lookup_failed(&self, error: &LookupError) {
        self.operations.lock().unwrap().push(error.operation());
    }
}
