/// The request never produced a readable response.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure of a single submission, tagged by the stage that failed.
#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("A username and password are required.")]
    MissingCredentials,

    #[error("A submission is already in flight")]
    InFlight,

    #[error("{0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    // body of the response is not json, so there is no message to show
    #[error("{status} - {status_text}")]
    Parse {
        status: u16,
        status_text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Whether the failed attempt got past validation and the in-flight gate.
    pub fn entered_gate(&self) -> bool {
        !matches!(self, Self::MissingCredentials | Self::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_attempts_never_held_the_gate() {
        assert!(!SubmitError::MissingCredentials.entered_gate());
        assert!(!SubmitError::InFlight.entered_gate());
    }

    #[test]
    fn failures_after_sending_held_the_gate() {
        let rejected = SubmitError::Rejected {
            status: 401,
            message: "invalid credentials".into(),
        };
        let transport = SubmitError::from(TransportError("Failed to fetch".into()));

        assert!(rejected.entered_gate());
        assert!(transport.entered_gate());
    }
}
