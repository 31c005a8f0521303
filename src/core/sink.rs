use crate::core::{BlobStore, EventEnvelope, EventLog, MessageBatch, SinkOutcome};
use crate::utils::error::Result;
use futures::stream::{self, Stream, StreamExt};
use uuid::Uuid;

pub const DEFAULT_BLOB_PATH: &str = "eventhub-output/{rand-guid}.txt";

/// blob 鍵的樣板，支援 `{rand-guid}`、`{timestamp}`、`{index}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobKeyTemplate {
    template: String,
}

impl BlobKeyTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// 每次呼叫都會產生新的 guid
    pub fn render(&self, index: usize) -> String {
        self.template
            .replace("{rand-guid}", &Uuid::new_v4().to_string())
            .replace(
                "{timestamp}",
                &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
            )
            .replace("{index}", &index.to_string())
    }
}

impl Default for BlobKeyTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_BLOB_PATH)
    }
}

/// 不寫任何東西的儲存；[`MessageSink::log_only`] 的預設型別
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardBlobStore;

impl BlobStore for DiscardBlobStore {
    async fn write_blob(&self, _key: &str, _data: &[u8]) -> Result<()> {
        Ok(())
    }
}

pub struct MessageSink<L: EventLog, S: BlobStore = DiscardBlobStore> {
    log: L,
    store: Option<S>,
    keys: BlobKeyTemplate,
}

impl<L: EventLog> MessageSink<L, DiscardBlobStore> {
    /// 只記錄訊息，不寫 blob
    pub fn log_only(log: L) -> Self {
        Self {
            log,
            store: None,
            keys: BlobKeyTemplate::default(),
        }
    }
}

impl<L: EventLog, S: BlobStore> MessageSink<L, S> {
    pub fn new(log: L, store: Option<S>) -> Self {
        Self {
            log,
            store,
            keys: BlobKeyTemplate::default(),
        }
    }

    pub fn with_blob_store(log: L, store: S) -> Self {
        Self::new(log, Some(store))
    }

    pub fn with_key_template(mut self, keys: BlobKeyTemplate) -> Self {
        self.keys = keys;
        self
    }

    pub fn writes_blobs(&self) -> bool {
        self.store.is_some()
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn key_template(&self) -> &BlobKeyTemplate {
        &self.keys
    }

    /// 依送達順序逐筆處理；寫入失敗只記在該筆結果裡，不中斷後續訊息
    pub fn process(&self, batch: MessageBatch) -> impl Stream<Item = SinkOutcome> + '_ {
        self.process_events(batch.into_iter().map(EventEnvelope::new).collect())
    }

    pub async fn process_all(&self, batch: MessageBatch) -> Vec<SinkOutcome> {
        self.process(batch).collect().await
    }

    /// 同 [`process`](Self::process)，有 content type 時緊接在 body 後面記錄
    pub fn process_events(
        &self,
        events: Vec<EventEnvelope>,
    ) -> impl Stream<Item = SinkOutcome> + '_ {
        stream::iter(events.into_iter().enumerate())
            .then(move |(index, event)| self.deliver(index, event))
    }

    async fn deliver(&self, index: usize, event: EventEnvelope) -> SinkOutcome {
        let EventEnvelope { body, content_type } = event;
        self.log.info(&format!("Body: {}", body));
        if let Some(content_type) = content_type {
            self.log.info(&format!("Content-Type: {}", content_type));
        }

        let Some(store) = &self.store else {
            return SinkOutcome {
                message_index: index,
                key: None,
                written: false,
                error: None,
            };
        };

        let key = self.keys.render(index);
        match store.write_blob(&key, body.as_bytes()).await {
            Ok(()) => {
                tracing::debug!("Wrote message {} to blob {}", index, key);
                SinkOutcome {
                    message_index: index,
                    key: Some(key),
                    written: true,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ Blob write for message {} failed: {}", index, e);
                SinkOutcome {
                    message_index: index,
                    key: Some(key),
                    written: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryBlobStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLog {
        lines: Mutex<Vec<String>>,
    }

    impl EventLog for RecordingLog {
        fn info(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    #[test]
    fn test_render_index_and_guid() {
        let template = BlobKeyTemplate::new("out/{index}-{rand-guid}.txt");
        let first = template.render(3);
        let second = template.render(3);
        assert!(first.starts_with("out/3-"));
        assert!(first.ends_with(".txt"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_log_only_sink() {
        let sink = MessageSink::log_only(RecordingLog::default());
        let outcomes = tokio_test::block_on(sink.process_all(vec!["a", "b"].into()));

        assert!(!sink.writes_blobs());
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| !o.written && o.key.is_none() && o.error.is_none()));
        assert_eq!(*sink.log.lines.lock().unwrap(), vec!["Body: a", "Body: b"]);
    }

    #[test]
    fn test_content_type_logged_after_body() {
        let sink = MessageSink::log_only(RecordingLog::default());
        let events = vec![
            EventEnvelope {
                body: "a".to_string(),
                content_type: Some("text/plain".to_string()),
            },
            EventEnvelope::new("b"),
        ];

        let outcomes: Vec<_> = tokio_test::block_on(sink.process_events(events).collect());

        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            *sink.log.lines.lock().unwrap(),
            vec!["Body: a", "Content-Type: text/plain", "Body: b"]
        );
    }

    #[test]
    fn test_stream_is_lazy() {
        let store = MemoryBlobStore::new();
        let sink = MessageSink::with_blob_store(RecordingLog::default(), store.clone());

        let stream = sink.process(vec!["a"].into());
        assert!(sink.log.lines.lock().unwrap().is_empty());
        assert!(store.is_empty());

        let outcomes: Vec<_> = tokio_test::block_on(stream.collect());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(store.len(), 1);
    }
}
