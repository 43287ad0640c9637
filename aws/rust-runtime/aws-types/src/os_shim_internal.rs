/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for testing code that interacts with the operating system.

use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process, and, as such, are difficult to test with a multi-
/// threaded test runner like Rust's. This enables loading environment variables either from the
/// actual process environment ([`std::env::var`](std::env::var)) or from a hash map.
///
/// Process environments are cheap to clone:
/// - Faked process environments are wrapped in an internal Arc
/// - Real process environments are pointer-sized
#[derive(Clone)]
pub struct Env(Arc<env::Inner>);

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            env::Inner::Real => f.write_str("Env::Real"),
            env::Inner::Fake(map) => f
                .debug_tuple("Env::Fake")
                .field(&map.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        use env::Inner;
        match &self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[
    ///     ("AWS_REGION", "us-west-2"),
    ///     ("AWS_USE_FIPS_ENDPOINT", "true"),
    /// ]);
    /// assert_eq!(mock_env.get("AWS_REGION").unwrap(), "us-west-2");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        use env::Inner;
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that uses the real process environment
    ///
    /// Calls will be delegated to [`std::env::var`](std::env::var).
    pub fn real() -> Self {
        Self(Arc::new(env::Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(env::Inner::Fake(hash_map)))
    }
}

mod env {
    use std::collections::HashMap;

    pub enum Inner {
        Real,
        Fake(HashMap<String, String>),
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn env_works() {
        let env = Env::from_slice(&[("FOO", "BAR")]);
        assert_eq!(env.get("FOO").unwrap(), "BAR");
        assert_eq!(
            env.get("OTHER").expect_err("no present"),
            VarError::NotPresent
        )
    }

    #[test]
    fn env_from_map() {
        let mut map = HashMap::new();
        map.insert("AWS_REGION".to_string(), "eu-west-1".to_string());
        let env = Env::from(map);
        assert_eq!(env.get("AWS_REGION").unwrap(), "eu-west-1");
    }
}
