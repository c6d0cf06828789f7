use super::SubmitError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Login,
    Logout,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Logout => write!(f, "logout"),
        }
    }
}

/// What the page does once a submission has settled.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Full page load, not a router push.
    Navigate(String),
    Alert(String),
    Ignore,
}

impl Action {
    pub fn after(operation: Operation, result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(target) => Self::Navigate(target),
            Err(SubmitError::InFlight) => Self::Ignore,
            Err(error @ SubmitError::MissingCredentials) => Self::Alert(error.to_string()),
            Err(error) => Self::Alert(format!("Error during {}: {}", operation, error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::TransportError;

    fn parse_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("<html>").unwrap_err()
    }

    #[test]
    fn success_navigates() {
        let action = Action::after(Operation::Login, Ok("/".into()));

        assert_eq!(action, Action::Navigate("/".into()));
    }

    #[test]
    fn blank_input_alert_has_no_prefix() {
        let action = Action::after(Operation::Login, Err(SubmitError::MissingCredentials));

        assert_eq!(
            action,
            Action::Alert("A username and password are required.".into())
        );
    }

    #[test]
    fn duplicate_submission_is_ignored() {
        let action = Action::after(Operation::Login, Err(SubmitError::InFlight));

        assert_eq!(action, Action::Ignore);
    }

    #[test]
    fn rejection_shows_server_message() {
        let error = SubmitError::Rejected {
            status: 401,
            message: "invalid credentials".into(),
        };

        let action = Action::after(Operation::Login, Err(error));

        assert_eq!(
            action,
            Action::Alert("Error during login: invalid credentials".into())
        );
    }

    #[test]
    fn unparsable_body_shows_status() {
        let error = SubmitError::Parse {
            status: 500,
            status_text: "Internal Server Error".into(),
            source: parse_error(),
        };

        let action = Action::after(Operation::Login, Err(error));

        assert_eq!(
            action,
            Action::Alert("Error during login: 500 - Internal Server Error".into())
        );
    }

    #[test]
    fn transport_failure_shows_error_text() {
        let error = SubmitError::from(TransportError("Failed to fetch".into()));

        let action = Action::after(Operation::Logout, Err(error));

        assert_eq!(
            action,
            Action::Alert("Error during logout: Failed to fetch".into())
        );
    }
}
