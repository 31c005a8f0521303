use crate::core::EventLog;

/// 把訊息轉給 `tracing`，帶上 function 名稱
#[derive(Debug, Clone)]
pub struct TracingLog {
    function: String,
}

impl TracingLog {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
        }
    }
}

impl EventLog for TracingLog {
    fn info(&self, line: &str) {
        tracing::info!(function = %self.function, "{}", line);
    }
}
