/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// AWS User Agent
///
/// Ths struct should be inserted into the [`PropertyBag`](smithy_http::operation::Request::properties)
/// during operation construction. [`UserAgentStage`](UserAgentStage) reads `AwsUserAgent`
/// from the property bag and sets the `User-Agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_metadata: SdkMetadata,
    api_metadata: ApiMetadata,
    os_metadata: OsMetadata,
    language_metadata: LanguageMetadata,
    exec_env_metadata: Option<ExecEnvMetadata>,
    app_id: Option<Cow<'static, str>>,
}

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// The SDK version is the version of this crate and the OS family is the platform the crate
    /// was compiled for. `ApiMetadata` provides the version & name of the specific service.
    pub fn new_from_environment(env: Env, api_metadata: ApiMetadata) -> Self {
        let exec_env_metadata = env
            .get("AWS_EXECUTION_ENV")
            .ok()
            .map(|name| ExecEnvMetadata { name });
        AwsUserAgent {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: env!("CARGO_PKG_VERSION"),
            },
            api_metadata,
            os_metadata: OsMetadata {
                os_family: OsFamily::from_env(),
                version: None,
            },
            language_metadata: LanguageMetadata { lang: "rust" },
            exec_env_metadata,
            app_id: None,
        }
    }

    /// For test purposes, construct an environment-independent User Agent
    ///
    /// Without this, running CI on a different platform would produce different user agent strings
    pub fn for_tests() -> Self {
        Self {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: "0.123.test",
            },
            api_metadata: ApiMetadata::new("test-service", "0.123"),
            os_metadata: OsMetadata {
                os_family: OsFamily::Windows,
                version: Some("XPSP3".to_string()),
            },
            language_metadata: LanguageMetadata { lang: "rust" },
            exec_env_metadata: None,
            app_id: None,
        }
    }

    /// Append an application identifier to the `x-amz-user-agent` header.
    pub fn with_app_id(mut self, app_id: impl Into<Cow<'static, str>>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Generate a new-style user agent style header
    ///
    /// This header should be set at `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        /*
        ABNF for the user agent:
        ua-string = sdk-metadata RWS
                    [api-metadata RWS]
                    os-metadata RWS
                    language-metadata RWS
                    [env-metadata RWS]
                    [appId]
        */
        let mut parts = vec![
            self.sdk_metadata.to_string(),
            self.api_metadata.to_string(),
            self.os_metadata.to_string(),
            self.language_metadata.to_string(),
        ];
        if let Some(env_meta) = &self.exec_env_metadata {
            parts.push(env_meta.to_string());
        }
        if let Some(app_id) = &self.app_id {
            parts.push(format!("app/{}", app_id));
        }
        parts.join(" ")
    }

    /// Generate an old-style User-Agent header for backward compatibility
    ///
    /// This header is intended to be set at `User-Agent`
    pub fn ua_header(&self) -> String {
        format!(
            "{} {} {}",
            self.sdk_metadata, self.os_metadata, self.language_metadata
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct SdkMetadata {
    name: &'static str,
    version: &'static str,
}

impl Display for SdkMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aws-sdk-{}/{}", self.name, self.version)
    }
}

#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OsFamily {
    Windows,
    Linux,
    Macos,
    Android,
    Ios,
    Other,
}

impl OsFamily {
    fn from_env() -> Self {
        match std::env::consts::OS {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::Macos,
            "android" => OsFamily::Android,
            "ios" => OsFamily::Ios,
            _ => OsFamily::Other,
        }
    }
}

impl Display for OsFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let os = match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Android => "android",
            OsFamily::Ios => "ios",
            OsFamily::Other => "other",
        };
        f.write_str(os)
    }
}

#[derive(Clone, Debug)]
struct OsMetadata {
    os_family: OsFamily,
    version: Option<String>,
}

impl Display for OsMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "os/{}/{}", self.os_family, version),
            None => write!(f, "os/{}", self.os_family),
        }
    }
}

#[derive(Clone, Debug)]
struct LanguageMetadata {
    lang: &'static str,
}

impl Display for LanguageMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "lang/{}", self.lang)
    }
}

#[derive(Clone, Debug)]
struct ExecEnvMetadata {
    name: String,
}

impl Display for ExecEnvMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec-env/{}", &self.name)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("User agent missing from property bag")]
    UserAgentMissing,
    #[error("Provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

lazy_static::lazy_static! {
    static ref X_AMZ_USER_AGENT: HeaderName = HeaderName::from_static("x-amz-user-agent");
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .insert(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut().insert(
                X_AMZ_USER_AGENT.clone(),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, OsFamily, UserAgentStage, X_AMZ_USER_AGENT};
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    fn make_deterministic(ua: &mut AwsUserAgent) {
        // hard code some variable things for a deterministic test
        ua.sdk_metadata.version = "0.1";
        ua.os_metadata.os_family = OsFamily::Macos;
        ua.os_metadata.version = Some("1.15".to_string());
    }

    #[test]
    fn generate_a_valid_ua() {
        let mut ua = AwsUserAgent::new_from_environment(
            Env::from_slice(&[]),
            ApiMetadata::new("cognitoidentity", "2014-06-30"),
        );
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/cognitoidentity/2014-06-30 os/macos/1.15 lang/rust"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.1 os/macos/1.15 lang/rust");
    }

    #[test]
    fn generate_a_valid_ua_with_execution_env_and_app_id() {
        let mut ua = AwsUserAgent::new_from_environment(
            Env::from_slice(&[("AWS_EXECUTION_ENV", "lambda")]),
            ApiMetadata::new("sagemaker", "2017-07-24"),
        )
        .with_app_id("my_app");
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/sagemaker/2017-07-24 os/macos/1.15 lang/rust exec-env/lambda app/my_app"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.1 os/macos/1.15 lang/rust");
    }

    #[test]
    fn test_user_agent_is_stable() {
        let ua = AwsUserAgent::for_tests();
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust");
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        stage
            .apply(req)
            .expect_err("adding UA should fail without a UA set");
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.properties_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        assert_eq!(
            req.headers()
                .get(USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust"
        );
        req.headers()
            .get(&*X_AMZ_USER_AGENT)
            .expect("UA header should be set");
    }
}
