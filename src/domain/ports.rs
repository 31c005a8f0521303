use crate::utils::error::Result;
use std::sync::Arc;

/// 問候語措辭；固定格式或注入的服務都實作這個
pub trait GreetingService: Send + Sync {
    fn greeting(&self, name: &str) -> String;
}

impl<T: GreetingService + ?Sized> GreetingService for Arc<T> {
    fn greeting(&self, name: &str) -> String {
        (**self).greeting(name)
    }
}

pub trait EventLog: Send + Sync {
    fn info(&self, line: &str);
}

impl<T: EventLog + ?Sized> EventLog for Arc<T> {
    fn info(&self, line: &str) {
        (**self).info(line)
    }
}

pub trait BlobStore: Send + Sync {
    fn write_blob(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl<T: BlobStore> BlobStore for Arc<T> {
    async fn write_blob(&self, key: &str, data: &[u8]) -> Result<()> {
        (**self).write_blob(key, data).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn greeting_template(&self) -> Option<&str>;
    fn write_blobs(&self) -> bool;
    fn output_path(&self) -> &str;
    fn blob_path_template(&self) -> &str;
}
