// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use thiserror::Error;

/// Error returned across a capability boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{service}.{operation} is not implemented by this double")]
    NotImplemented { service: &'static str, operation: &'static str },

    #[error("{service}: {code}: {message}")]
    Service { service: &'static str, code: String, message: String },
}

impl ApiError {
    pub fn not_implemented(service: &'static str, operation: &'static str) -> Self {
        ApiError::NotImplemented { service, operation }
    }

    pub fn service(
        service: &'static str,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ApiError::Service { service, code: code.into(), message: message.into() }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ApiError::NotImplemented { .. })
    }
}
