use crate::adapters::http::{HttpRequest, HttpResponse};
use crate::adapters::storage::LocalBlobStore;
use crate::core::greeting::{GreetingResolver, HelloGreeting, TemplateGreeting};
use crate::core::sink::{BlobKeyTemplate, MessageSink};
use crate::core::{
    BlobStore, ConfigProvider, EventEnvelope, EventLog, GreetingService, MessageBatch, SinkOutcome,
};
use crate::domain::model::BatchReport;
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;

pub const HTTP_FUNCTION_NAME: &str = "HttpExample";
pub const BATCH_FUNCTION_NAME: &str = "Eh1Trigger";

/// 宿主呼叫的一個 function；輸入輸出由轉接層轉成宿主格式
#[async_trait]
pub trait Function: Send + Sync {
    type Input: Send + 'static;
    type Output: Send;

    fn name(&self) -> &str;

    async fn invoke(&self, input: Self::Input) -> Self::Output;
}

pub struct HttpGreetingFunction<G: GreetingService, L: EventLog> {
    name: String,
    resolver: GreetingResolver<G>,
    log: L,
}

impl<G: GreetingService, L: EventLog> HttpGreetingFunction<G, L> {
    pub fn new(resolver: GreetingResolver<G>, log: L) -> Self {
        Self {
            name: HTTP_FUNCTION_NAME.to_string(),
            resolver,
            log,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        self.log.info("HTTP trigger processed a request.");
        tracing::debug!("{} {} request", self.name, request.method);
        self.resolver.resolve_input(&request.name_input()).into()
    }
}

#[async_trait]
impl<G: GreetingService, L: EventLog> Function for HttpGreetingFunction<G, L> {
    type Input = HttpRequest;
    type Output = HttpResponse;

    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, input: HttpRequest) -> HttpResponse {
        self.handle(&input)
    }
}

pub struct EventBatchFunction<L: EventLog, S: BlobStore> {
    name: String,
    sink: MessageSink<L, S>,
}

impl<L: EventLog, S: BlobStore> EventBatchFunction<L, S> {
    pub fn new(sink: MessageSink<L, S>) -> Self {
        Self {
            name: BATCH_FUNCTION_NAME.to_string(),
            sink,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sink(&self) -> &MessageSink<L, S> {
        &self.sink
    }

    pub async fn handle(&self, batch: MessageBatch) -> BatchReport {
        self.handle_events(batch.into_iter().map(EventEnvelope::new).collect())
            .await
    }

    pub async fn handle_events(&self, events: Vec<EventEnvelope>) -> BatchReport {
        self.sink
            .log()
            .info(&format!("{} got batch size: {}", self.name, events.len()));

        let outcomes: Vec<SinkOutcome> = self.sink.process_events(events).collect().await;
        let report = BatchReport::new(self.name.clone(), outcomes);

        if report.has_failures() {
            tracing::warn!(
                "⚠️ {}: {} of {} blob writes failed",
                self.name,
                report.failed,
                report.outcomes.len()
            );
        } else {
            tracing::debug!(
                "{}: processed {} messages, {} blobs written",
                self.name,
                report.outcomes.len(),
                report.written
            );
        }
        report
    }
}

#[async_trait]
impl<L: EventLog, S: BlobStore> Function for EventBatchFunction<L, S> {
    type Input = MessageBatch;
    type Output = BatchReport;

    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, input: MessageBatch) -> BatchReport {
        self.handle(input).await
    }
}

/// 設定有 template 時用 template，否則固定 "Hello, {name}"
pub fn greeting_service(config: &dyn ConfigProvider) -> Arc<dyn GreetingService> {
    match config.greeting_template() {
        Some(template) => Arc::new(TemplateGreeting::new(template)),
        None => Arc::new(HelloGreeting),
    }
}

pub fn local_sink<L: EventLog>(config: &dyn ConfigProvider, log: L) -> MessageSink<L, LocalBlobStore> {
    let store = config
        .write_blobs()
        .then(|| LocalBlobStore::new(config.output_path()));

    MessageSink::new(log, store)
        .with_key_template(BlobKeyTemplate::new(config.blob_path_template()))
}
