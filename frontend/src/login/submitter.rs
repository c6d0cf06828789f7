use super::{ApiClient, Credentials, Reply, SubmissionGate, SubmitError};
use crate::config::LoginConfig;
use interfacing::{ErrorBody, LogoutForm};
use serde_json::Value;

pub struct Submitter<C> {
    client: C,
    config: LoginConfig,
    gate: SubmissionGate,
}

impl<C: ApiClient> Submitter<C> {
    pub fn new(client: C, config: LoginConfig) -> Self {
        Self {
            client,
            config,
            gate: SubmissionGate::default(),
        }
    }

    /// Sends the credentials and returns where to go on success.
    ///
    /// Blank fields never reach the network, neither does a submission
    /// started while another one is still waiting for its response.
    pub async fn login(&self, credentials: Credentials) -> Result<String, SubmitError> {
        credentials.validate()?;
        let in_flight = self.gate.enter().ok_or(SubmitError::InFlight)?;

        let form = credentials.into_form();
        let body = serde_json::to_value(&form).map_err(SubmitError::Encode)?;
        let outcome = self.exchange(&self.config.login_endpoint, &body).await;

        drop(in_flight);
        outcome.map(|()| self.config.home_url.clone())
    }

    pub async fn logout(&self) -> Result<String, SubmitError> {
        let in_flight = self.gate.enter().ok_or(SubmitError::InFlight)?;

        let form = LogoutForm {
            username: self.config.current_user.clone(),
        };
        let body = serde_json::to_value(&form).map_err(SubmitError::Encode)?;
        let outcome = self.exchange(&self.config.logout_endpoint, &body).await;

        drop(in_flight);
        outcome.map(|()| self.config.login_url.clone())
    }

    async fn exchange(&self, endpoint: &str, body: &Value) -> Result<(), SubmitError> {
        let reply = self.client.post_json(endpoint, body).await?;
        // the body is parsed whatever the status, a non-json success is a failure too
        let json = parse_body(&reply)?;

        if reply.is_success() {
            Ok(())
        } else {
            Err(rejection(&reply, json))
        }
    }
}

fn parse_body(reply: &Reply) -> Result<Value, SubmitError> {
    serde_json::from_str(&reply.body).map_err(|source| SubmitError::Parse {
        status: reply.status,
        status_text: reply.status_text.clone(),
        source,
    })
}

fn rejection(reply: &Reply, json: Value) -> SubmitError {
    let message = match serde_json::from_value::<ErrorBody>(json) {
        Ok(body) => body.message,
        Err(_) => format!("{} {}", reply.status, reply.status_text),
    };

    SubmitError::Rejected {
        status: reply.status,
        message,
    }
}
