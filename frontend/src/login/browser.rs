//! Browser side of a submission: fetch, alert and page navigation.

use super::{Action, ApiClient, Reply, TransportError};
use async_trait::async_trait;
use gloo_console as console;
use gloo_net::http::{Request, Response};

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}

// a failed fetch shows only the js message, e.g. "Failed to fetch"
impl From<gloo_net::Error> for TransportError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::JsError(error) => Self(error.message),
            other => Self(other.to_string()),
        }
    }
}

/// [`ApiClient`] backed by the window's `fetch`.
///
/// No timeout and no retry, a request runs until the browser gives up on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

#[async_trait(?Send)]
impl ApiClient for GlooClient {
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<Reply, TransportError> {
        // json() also sets Content-Type: application/json
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .json(body)?
            .send()
            .await?;

        response.log_status();

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await?;

        Ok(Reply {
            status,
            status_text,
            body,
        })
    }
}

pub fn apply(action: Action) {
    let window = gloo_utils::window();

    match action {
        Action::Navigate(target) => {
            console::log!(format!("navigating to {}", target));
            if let Err(error) = window.location().set_href(&target) {
                console::error!("navigation failed", error);
            }
        }
        Action::Alert(message) => {
            console::log!(format!("alert: {}", message));
            if let Err(error) = window.alert_with_message(&message) {
                console::error!("alert failed", error);
            }
        }
        Action::Ignore => {
            console::log!("submission already in flight, ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_js_errors_keep_their_text() {
        let error = gloo_net::Error::GlooError("request body already used".into());

        let transport = TransportError::from(error);

        assert_eq!(transport, TransportError("request body already used".into()));
    }
}
