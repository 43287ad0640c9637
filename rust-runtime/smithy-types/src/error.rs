/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors shared by every operation

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Which party an error is attributed to.
///
/// Every modeled exception carries a fixed fault. Unmodeled errors take their fault from the
/// HTTP status code of the response.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorFault {
    Client,
    Server,
}

impl ErrorFault {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFault::Client => "client",
            ErrorFault::Server => "server",
        }
    }

    /// `5xx` responses are the server's fault, everything else is the client's.
    pub fn from_status(status: u16) -> Self {
        if status >= 500 {
            ErrorFault::Server
        } else {
            ErrorFault::Client
        }
    }
}

impl fmt::Display for ErrorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait ProvideFault {
    fn fault(&self) -> ErrorFault;
}

/// Generic Error type
///
/// Services model most of their errors, but a response can always carry a code this client
/// does not know about. In that case, this type exposes the `code`, `message`, `request_id`
/// and `fault` that could be read from the response.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    fault: Option<ErrorFault>,
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn fault(&mut self, fault: ErrorFault) -> &mut Self {
        self.inner.fault = Some(fault);
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn fault(&self) -> Option<ErrorFault> {
        self.fault
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        if let Some(fault) = &self.fault {
            fmt.field("fault", &fault.as_str());
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::{Error, ErrorFault};

    #[test]
    fn fault_from_status() {
        assert_eq!(ErrorFault::from_status(400), ErrorFault::Client);
        assert_eq!(ErrorFault::from_status(429), ErrorFault::Client);
        assert_eq!(ErrorFault::from_status(500), ErrorFault::Server);
        assert_eq!(ErrorFault::from_status(503), ErrorFault::Server);
    }

    #[test]
    fn display_lists_present_fields() {
        let err = Error::builder()
            .code("Boom")
            .message("it broke")
            .fault(ErrorFault::Server)
            .build();
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "Boom", message: "it broke", fault: "server" }"#
        );
    }
}
