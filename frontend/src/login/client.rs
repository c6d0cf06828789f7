use super::TransportError;
use async_trait::async_trait;
use std::rc::Rc;

/// Raw response as the submitter sees it, body not yet parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// futures on wasm are not Send
#[async_trait(?Send)]
pub trait ApiClient {
    /// POST `body` as json to `endpoint`, accepting json back.
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<Reply, TransportError>;
}

#[async_trait(?Send)]
impl<C: ApiClient + ?Sized> ApiClient for Rc<C> {
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<Reply, TransportError> {
        (**self).post_json(endpoint, body).await
    }
}
