use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LogoutForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_is_omitted() {
        let json = serde_json::to_string(&LogoutForm::default()).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn known_user_is_sent() {
        let form = LogoutForm {
            username: Some("alice".into()),
        };

        let json = serde_json::to_string(&form).unwrap();

        assert_eq!(json, r#"{"username":"alice"}"#);
    }
}
