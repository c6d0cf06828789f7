use crate::imports::*;

/// JSON carried by a failed api response.
///
/// Any other fields of the envelope (`"result": "error"`, ...) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}
