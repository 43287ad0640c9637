/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Define a modeled exception with a fixed fault.
///
/// The exception reads its message from either the `message` or `Message` member. Crates using
/// this macro must depend on `serde` with the `derive` feature.
///
/// ```rust
/// aws_json::exception! {
///     /// The requested resource does not exist.
///     ResourceNotFoundException, Client
/// }
///
/// let err: ResourceNotFoundException = serde_json::from_str(r#"{"Message":"gone"}"#).unwrap();
/// assert_eq!(err.to_string(), "ResourceNotFoundException: gone");
/// ```
#[macro_export]
macro_rules! exception {
    ($(#[$meta:meta])* $name:ident, $fault:ident) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
        pub struct $name {
            #[serde(default, rename = "message", alias = "Message")]
            pub message: Option<String>,
        }

        impl $name {
            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}

        impl $crate::__private::smithy_types::ProvideFault for $name {
            fn fault(&self) -> $crate::__private::smithy_types::ErrorFault {
                $crate::__private::smithy_types::ErrorFault::$fault
            }
        }
    };
}

/// Define the error type of one operation and its error-code dispatch table.
///
/// Each entry names a modeled exception (defined with [`exception!`](crate::exception)), the code
/// the service uses for it and the name of a predicate. Codes that are not listed, and modeled
/// errors whose body cannot be read, become the `Unhandled` kind.
///
/// ```rust
/// aws_json::exception! { InternalErrorException, Server }
/// aws_json::exception! { NotAuthorizedException, Client }
///
/// aws_json::operation_error! {
///     /// Error type for the `GetId` operation.
///     GetIdError, GetIdErrorKind {
///         InternalErrorException("InternalErrorException") => is_internal_error_exception,
///         NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
///     }
/// }
/// ```
#[macro_export]
macro_rules! operation_error {
    (
        $(#[$meta:meta])*
        $error:ident, $kind:ident {
            $( $variant:ident($code:literal) => $is_fn:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug)]
        pub struct $error {
            pub kind: $kind,
            pub(crate) meta: $crate::__private::smithy_types::Error,
        }

        #[non_exhaustive]
        #[derive(Debug)]
        pub enum $kind {
            $( $variant($variant), )*
            /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
            Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
        }

        impl std::fmt::Display for $error {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.kind {
                    $( $kind::$variant(inner) => std::fmt::Display::fmt(inner, f), )*
                    $kind::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
                }
            }
        }

        impl $crate::__private::smithy_types::retry::ProvideErrorKind for $error {
            fn code(&self) -> Option<&str> {
                $error::code(self)
            }

            fn retryable_error_kind(
                &self,
            ) -> Option<$crate::__private::smithy_types::retry::ErrorKind> {
                None
            }
        }

        impl $crate::__private::smithy_types::ProvideFault for $error {
            fn fault(&self) -> $crate::__private::smithy_types::ErrorFault {
                $error::fault(self)
            }
        }

        impl $error {
            pub fn new(kind: $kind, meta: $crate::__private::smithy_types::Error) -> Self {
                Self { kind, meta }
            }

            pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: Default::default(),
                }
            }

            pub fn generic(err: $crate::__private::smithy_types::Error) -> Self {
                Self {
                    meta: err.clone(),
                    kind: $kind::Unhandled(err.into()),
                }
            }

            #[allow(dead_code)]
            fn modeled<X: $crate::__private::serde::de::DeserializeOwned>(
                meta: $crate::__private::smithy_types::Error,
                body: &[u8],
                kind: fn(X) -> $kind,
            ) -> Self {
                match $crate::deserialize_body::<X>(body) {
                    Ok(exception) => Self { kind: kind(exception), meta },
                    Err(err) => Self {
                        kind: $kind::Unhandled(err.into()),
                        meta,
                    },
                }
            }

            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            pub fn meta(&self) -> &$crate::__private::smithy_types::Error {
                &self.meta
            }

            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }

            /// Modeled errors have a fixed fault. Unhandled errors take it from the status code,
            /// and are the server's fault when there was none.
            pub fn fault(&self) -> $crate::__private::smithy_types::ErrorFault {
                match &self.kind {
                    $( $kind::$variant(inner) => $crate::__private::smithy_types::ProvideFault::fault(inner), )*
                    $kind::Unhandled(_) => self
                        .meta
                        .fault()
                        .unwrap_or($crate::__private::smithy_types::ErrorFault::Server),
                }
            }

            $(
                pub fn $is_fn(&self) -> bool {
                    matches!(&self.kind, $kind::$variant(_))
                }
            )*
        }

        impl std::error::Error for $error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $( $kind::$variant(inner) => Some(inner), )*
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }

        impl $crate::ParseJsonError for $error {
            fn from_generic(generic: $crate::__private::smithy_types::Error, body: &[u8]) -> Self {
                let code = generic.code().map(str::to_owned);
                match code.as_deref() {
                    $( Some($code) => Self::modeled(generic, body, $kind::$variant), )*
                    _ => Self::generic(generic),
                }
            }

            fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
                $error::unhandled(err)
            }
        }
    };
}

/// Define a string union whose unknown values are kept in an `Unknown` variant.
///
/// Services add new values to their enums over time, so reading a value this client does not
/// know about must not fail.
///
/// ```rust
/// aws_json::string_enum! {
///     SortOrder {
///         Ascending = "Ascending",
///         Descending = "Descending",
///     }
/// }
///
/// assert_eq!(SortOrder::from("Descending"), SortOrder::Descending);
/// assert_eq!(SortOrder::from("Sideways").as_str(), "Sideways");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name {
            $( $variant, )*
            /// A value this version of the client does not know about
            Unknown(String),
        }

        impl<'a> From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $( $value => $name::$variant, )*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )*
                    $name::Unknown(s) => s.as_ref(),
                }
            }

            /// Every value known to this version of the client.
            pub fn values() -> &'static [&'static str] {
                &[$( $value ),*]
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::ParseJsonError;
    use smithy_types::retry::ProvideErrorKind;
    use smithy_types::ErrorFault;

    crate::exception! {
        /// Thrown when the caller is not authorized.
        NotAuthorizedException, Client
    }
    crate::exception! { InternalErrorException, Server }

    crate::operation_error! {
        GetIdError, GetIdErrorKind {
            NotAuthorizedException("NotAuthorizedException") => is_not_authorized_exception,
            InternalErrorException("InternalErrorException") => is_internal_error_exception,
        }
    }

    crate::operation_error! {
        ListError, ListErrorKind {}
    }

    fn generic(code: &str, status: u16) -> smithy_types::Error {
        smithy_types::Error::builder()
            .code(code)
            .message("from metadata")
            .request_id("req-1")
            .fault(ErrorFault::from_status(status))
            .build()
    }

    #[test]
    fn known_code_is_dispatched() {
        let err = GetIdError::from_generic(
            generic("NotAuthorizedException", 400),
            br#"{"message":"token expired"}"#,
        );
        assert!(err.is_not_authorized_exception());
        assert!(!err.is_internal_error_exception());
        assert_eq!(err.fault(), ErrorFault::Client);
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(ProvideErrorKind::code(&err), Some("NotAuthorizedException"));
        assert_eq!(err.to_string(), "NotAuthorizedException: token expired");
        match err.kind {
            GetIdErrorKind::NotAuthorizedException(inner) => {
                assert_eq!(inner.message(), Some("token expired"))
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn modeled_fault_is_fixed() {
        let err = GetIdError::from_generic(generic("InternalErrorException", 400), b"{}");
        assert!(err.is_internal_error_exception());
        assert_eq!(err.fault(), ErrorFault::Server);
    }

    #[test]
    fn unknown_code_is_unhandled() {
        let err = ListError::from_generic(generic("SomethingNew", 503), b"{}");
        assert!(matches!(err.kind, ListErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("SomethingNew"));
        assert_eq!(err.message(), Some("from metadata"));
        assert_eq!(err.fault(), ErrorFault::Server);
    }

    #[test]
    fn unreadable_modeled_error_is_unhandled() {
        let err = GetIdError::from_generic(
            generic("NotAuthorizedException", 400),
            br#"{"message":5}"#,
        );
        assert!(matches!(err.kind, GetIdErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("NotAuthorizedException"));
        assert_eq!(err.fault(), ErrorFault::Client);
    }

    crate::string_enum! {
        EndpointStatus {
            Creating = "Creating",
            InService = "InService",
        }
    }

    #[test]
    fn unknown_enum_values_are_preserved() {
        let status: Vec<EndpointStatus> =
            serde_json::from_str(r#"["InService","Hibernating"]"#).unwrap();
        assert_eq!(
            status,
            vec![
                EndpointStatus::InService,
                EndpointStatus::Unknown("Hibernating".to_string())
            ]
        );
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            r#"["InService","Hibernating"]"#
        );
        assert_eq!(EndpointStatus::values(), &["Creating", "InService"]);
    }
}
