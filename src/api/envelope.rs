use serde::{Deserialize, Serialize};

use crate::errors::{QuankError, Result};

pub const SUCCESS_CODE: i32 = 0;

/// Uniform `{code, message, data}` wrapper returned by every link operation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResponseEnvelope<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: message.into(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Payload on success, `QuankError::Api` for any non-zero code.
    pub fn into_result(self) -> Result<T> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(QuankError::api(self.code, self.message))
        }
    }
}
