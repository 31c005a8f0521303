// Adapters layer: concrete implementations for external systems (http shapes, event payloads, storage, logging).

pub mod events;
pub mod http;
pub mod log;
pub mod storage;
