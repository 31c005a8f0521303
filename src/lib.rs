pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::FunctionSettings;

pub use adapters::http::{HttpRequest, HttpResponse, Method, StatusCode};
pub use adapters::storage::{LocalBlobStore, MemoryBlobStore};
pub use app::{EventBatchFunction, Function, HttpGreetingFunction};
pub use crate::core::greeting::{greeting_fn, GreetingResolver, HelloGreeting, TemplateGreeting};
pub use crate::core::sink::{BlobKeyTemplate, MessageSink};
pub use domain::model::{GreetingResult, MessageBatch, NameInput, SinkOutcome};
pub use utils::error::{FunctionError, Result};
