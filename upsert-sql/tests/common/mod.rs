pub mod schema;

use std::error::Error;

pub type TestResult<T = Box<dyn Error + 'static>> = Result<(), T>;
