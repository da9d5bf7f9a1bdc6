// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while decoding or encoding processor payloads.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid UTF-8 input: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PayloadError {
    /// HTTP-style status code reported in `ErrorDetail`.
    pub fn code(&self) -> i32 {
        match self {
            PayloadError::Utf8(_) | PayloadError::Json(_) => 400,
            PayloadError::Serialize(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let utf8 = PayloadError::from(String::from_utf8(vec![0xff]).unwrap_err());
        assert_eq!(utf8.code(), 400);
        assert!(utf8.to_string().starts_with("Invalid UTF-8 input"));

        let json = PayloadError::from(serde_json::from_str::<Vec<String>>("{").unwrap_err());
        assert_eq!(json.code(), 400);

        let serialize = PayloadError::Serialize(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(serialize.code(), 500);
    }
}
