pub mod functions;

pub use functions::{EventBatchFunction, Function, HttpGreetingFunction};
