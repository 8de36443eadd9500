use serde::Serialize;

use crate::error::TransferError;

/// Result contract of every copy operation.
///
/// `error_message` is empty on success. On failure it holds the transport's
/// complete diagnostic text, or `User declined` when the operator said no.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOutcome {
    pub success: bool,
    pub error_message: String,
    /// Failure kind (see [`TransferError::kind`]), absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
}

impl TransferOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error_message: String::new(),
            error_kind: None,
        }
    }

    pub fn failed(err: &TransferError) -> Self {
        Self {
            success: false,
            error_message: err.to_string(),
            error_kind: Some(err.kind()),
        }
    }

    pub fn from_result(result: Result<(), TransferError>) -> Self {
        match result {
            Ok(()) => Self::succeeded(),
            Err(err) => Self::failed(&err),
        }
    }

    /// True when the operator declined the interactive prompt.
    pub fn is_declined(&self) -> bool {
        self.error_kind == Some(TransferError::UserDeclined.kind())
    }
}
