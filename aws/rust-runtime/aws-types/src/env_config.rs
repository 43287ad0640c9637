/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client settings loaded from environment variables.

use crate::os_shim_internal::Env;
use crate::region::{EnvironmentProvider, ProvideRegion, Region};
use thiserror::Error;

const USE_FIPS_ENDPOINT: &str = "AWS_USE_FIPS_ENDPOINT";
const USE_DUALSTACK_ENDPOINT: &str = "AWS_USE_DUALSTACK_ENDPOINT";
const ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{value}` is not a valid boolean for {variable} (expected `true` or `false`)")]
pub struct InvalidBooleanValue {
    variable: &'static str,
    value: String,
}

fn parse_bool(variable: &'static str, value: &str) -> Result<bool, InvalidBooleanValue> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InvalidBooleanValue {
            variable,
            value: value.to_string(),
        })
    }
}

/// Reads endpoint related settings from the process environment.
///
/// ```rust
/// use aws_types::env_config::EnvConfig;
/// use aws_types::os_shim_internal::Env;
/// let conf = EnvConfig::with_env(Env::from_slice(&[("AWS_USE_FIPS_ENDPOINT", "TRUE")]));
/// assert_eq!(conf.use_fips(), Ok(Some(true)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    env: Env,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(env: Env) -> Self {
        EnvConfig { env }
    }

    pub fn region(&self) -> Option<Region> {
        EnvironmentProvider::with_env(self.env.clone()).region()
    }

    pub fn use_fips(&self) -> Result<Option<bool>, InvalidBooleanValue> {
        self.flag(USE_FIPS_ENDPOINT)
    }

    pub fn use_dual_stack(&self) -> Result<Option<bool>, InvalidBooleanValue> {
        self.flag(USE_DUALSTACK_ENDPOINT)
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.env.get(ENDPOINT_URL).ok().filter(|url| !url.is_empty())
    }

    fn flag(&self, variable: &'static str) -> Result<Option<bool>, InvalidBooleanValue> {
        match self.env.get(variable) {
            Ok(value) if !value.is_empty() => parse_bool(variable, &value).map(Some),
            _ => Ok(None),
        }
    }

    /// Like [`EnvConfig::use_fips`], but logs and ignores invalid values.
    pub fn use_fips_or_default(&self) -> bool {
        log_invalid(self.use_fips())
    }

    /// Like [`EnvConfig::use_dual_stack`], but logs and ignores invalid values.
    pub fn use_dual_stack_or_default(&self) -> bool {
        log_invalid(self.use_dual_stack())
    }
}

fn log_invalid(value: Result<Option<bool>, InvalidBooleanValue>) -> bool {
    match value {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(err = %err, "ignoring invalid environment setting");
            false
        }
    }
}

#[cfg(test)]
mod test {
    use crate::env_config::EnvConfig;
    use crate::os_shim_internal::Env;
    use crate::Region;

    fn conf(vars: &[(&str, &str)]) -> EnvConfig {
        EnvConfig::with_env(Env::from_slice(vars))
    }

    #[test]
    fn empty_environment() {
        let conf = conf(&[]);
        assert_eq!(conf.region(), None);
        assert_eq!(conf.use_fips(), Ok(None));
        assert_eq!(conf.use_dual_stack(), Ok(None));
        assert_eq!(conf.endpoint_url(), None);
    }

    #[test]
    fn all_settings() {
        let conf = conf(&[
            ("AWS_DEFAULT_REGION", "ap-south-1"),
            ("AWS_USE_FIPS_ENDPOINT", "true"),
            ("AWS_USE_DUALSTACK_ENDPOINT", "False"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
        ]);
        assert_eq!(conf.region(), Some(Region::new("ap-south-1")));
        assert_eq!(conf.use_fips(), Ok(Some(true)));
        assert_eq!(conf.use_dual_stack(), Ok(Some(false)));
        assert_eq!(conf.endpoint_url().as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn invalid_boolean() {
        let conf = conf(&[("AWS_USE_DUALSTACK_ENDPOINT", "yes")]);
        let err = conf.use_dual_stack().expect_err("invalid");
        assert!(format!("{}", err).contains("AWS_USE_DUALSTACK_ENDPOINT"));
        assert!(!conf.use_dual_stack_or_default());
    }
}
