use serde::{Deserialize, Serialize};

/// 單次請求帶進來的名稱來源
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInput {
    pub query: Option<String>,
    pub body: Option<String>,
}

impl NameInput {
    pub fn new(query: Option<String>, body: Option<String>) -> Self {
        Self { query, body }
    }

    /// body 優先，其次 query；空字串也算有值
    pub fn effective_name(&self) -> Option<&str> {
        self.body.as_deref().or(self.query.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum GreetingResult {
    Ok(String),
    ValidationError(String),
}

impl GreetingResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, GreetingResult::Ok(_))
    }

    pub fn text(&self) -> &str {
        match self {
            GreetingResult::Ok(text) | GreetingResult::ValidationError(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBatch {
    messages: Vec<String>,
}

impl MessageBatch {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<Vec<String>> for MessageBatch {
    fn from(messages: Vec<String>) -> Self {
        Self::new(messages)
    }
}

impl From<Vec<&str>> for MessageBatch {
    fn from(messages: Vec<&str>) -> Self {
        Self::new(messages.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for MessageBatch {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MessageBatch {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkOutcome {
    pub message_index: usize,
    /// 有設定 blob 儲存時才會產生
    pub key: Option<String>,
    pub written: bool,
    pub error: Option<String>,
}

/// 從宿主事件解出來的一筆訊息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub body: String,
    #[serde(default, alias = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl EventEnvelope {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub function: String,
    pub outcomes: Vec<SinkOutcome>,
    pub written: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn new(function: impl Into<String>, outcomes: Vec<SinkOutcome>) -> Self {
        let written = outcomes.iter().filter(|o| o.written).count();
        let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
        Self {
            function: function.into(),
            outcomes,
            written,
            failed,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
