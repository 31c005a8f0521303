pub mod greeting;
pub mod sink;

pub use crate::domain::model::{
    EventEnvelope, GreetingResult, MessageBatch, NameInput, SinkOutcome,
};
pub use crate::domain::ports::{BlobStore, ConfigProvider, EventLog, GreetingService};
pub use crate::utils::error::Result;
