// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use std::env::VarError;
use std::fmt::Display;
use std::str::FromStr;

/// Source of environment variables.
pub trait GetEnv {
    /// Get the raw value of a variable.
    fn get(&self, key: &str) -> Result<String, VarError>;
}

/// Reads the environment of the current process.
#[derive(Default, Clone)]
pub struct StdEnvGetter {}

impl GetEnv for StdEnvGetter {
    fn get(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// Permissive string-to-boolean cast.
///
/// `y`, `yes`, `t`, `true`, `on` and `1` (case-insensitive) are true, anything else is false.
pub fn str_to_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "y" | "yes" | "t" | "true" | "on" | "1"
    )
}

/// A helper class to read environment variables.
///
/// It keeps a report of the values it has read, so the resolved configuration can be printed
/// at startup. Values equal to the type default are skipped in the report.
pub struct Env<EnvGetter: GetEnv> {
    getter: EnvGetter,
    message: String,
}

impl<EnvGetter: GetEnv> Env<EnvGetter> {
    /// Create a new environment.
    pub fn new(getter: EnvGetter) -> Env<EnvGetter> {
        Env {
            getter,
            message: String::new(),
        }
    }

    /// Get a value from the environment.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to get.
    /// * `default_value` - The default value to return if the key is not found or can't be parsed.
    ///
    /// # Returns
    ///
    /// The value of the environment variable.
    pub fn get<T: FromStr + Display + Default + PartialEq>(
        &mut self,
        key: &str,
        default_value: T,
    ) -> T {
        self.get_impl(key, default_value, false)
    }

    /// Same as `get` but the value is replaced with `*` in the report.
    pub fn get_masked<T: FromStr + Display + Default + PartialEq>(
        &mut self,
        key: &str,
        default_value: T,
    ) -> T {
        self.get_impl(key, default_value, true)
    }

    /// Get a value from the environment if it is set and valid.
    pub fn get_optional<T: FromStr + Display>(&mut self, key: &str) -> Option<T> {
        let value = self.getter.get(key).ok()?;
        match value.parse::<T>() {
            Ok(value) => {
                self.report(key, &value, false, "");
                Some(value)
            }
            Err(_) => {
                self.message
                    .push_str(&format!("\t{} = {} (invalid)\n", key, value));
                None
            }
        }
    }

    /// Get a boolean flag, cast with [`str_to_bool`].
    pub fn get_flag(&mut self, key: &str, default_value: bool) -> bool {
        let (value, additional) = match self.getter.get(key) {
            Ok(value) => (str_to_bool(&value), ""),
            Err(_) => (default_value, "(default)"),
        };

        if value {
            self.report(key, &value, false, additional);
        }
        value
    }

    /// Get pretty printed message.
    pub fn message(&self) -> &String {
        &self.message
    }

    fn get_impl<T: FromStr + Display + Default + PartialEq>(
        &mut self,
        key: &str,
        default_value: T,
        masked: bool,
    ) -> T {
        let (value, additional) = match self.getter.get(key) {
            Ok(value) => match value.parse() {
                Ok(value) => (value, ""),
                Err(_) => (default_value, "(invalid)"),
            },
            Err(_) => (default_value, "(default)"),
        };

        if value != T::default() {
            self.report(key, &value, masked, additional);
        }
        value
    }

    fn report<T: Display>(&mut self, key: &str, value: &T, masked: bool, additional: &str) {
        let value = if masked {
            "*".repeat(value.to_string().len())
        } else {
            value.to_string()
        };
        self.message
            .push_str(&format!("\t{} = {} {}\n", key, value, additional));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::tests::MockEnvGetter;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use serial_test::serial;

    #[rstest]
    fn default_values(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .return_const(Err(VarError::NotPresent));
        let mut env = Env::new(env_getter);

        let value = env.get("TEST__", String::from("default"));
        assert_eq!(value, "default");
        assert_eq!(env.message(), "\tTEST__ = default (default)\n");
    }

    #[rstest]
    fn empty_defaults_are_not_reported(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .return_const(Err(VarError::NotPresent));
        let mut env = Env::new(env_getter);

        assert_eq!(env.get("TEST__", String::new()), "");
        assert_eq!(env.message(), "");
    }

    #[rstest]
    fn masked_values(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .with(eq("TEST"))
            .return_const(Ok("123".to_string()));
        let mut env = Env::new(env_getter);

        let value = env.get_masked("TEST", String::from("default"));
        assert_eq!(value, "123");
        assert_eq!(env.message(), "\tTEST = *** \n");
    }

    #[rstest]
    fn invalid_values(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .with(eq("TEST"))
            .return_const(Ok("abc".to_string()));
        let mut env = Env::new(env_getter);

        assert_eq!(env.get("TEST", 10u32), 10);
        assert_eq!(env.message(), "\tTEST = 10 (invalid)\n");
    }

    #[rstest]
    fn optional_values(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .with(eq("SET"))
            .return_const(Ok("/tmp/license".to_string()));
        env_getter
            .expect_get()
            .with(eq("NOT_SET"))
            .return_const(Err(VarError::NotPresent));
        let mut env = Env::new(env_getter);

        assert_eq!(
            env.get_optional::<String>("SET"),
            Some("/tmp/license".to_string())
        );
        assert_eq!(env.get_optional::<String>("NOT_SET"), None);
        assert_eq!(env.message(), "\tSET = /tmp/license \n");
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("yes", true)]
    #[case("Y", true)]
    #[case("On", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("", false)]
    #[case("whatever", false)]
    #[case(" 1", false)]
    #[case("true ", false)]
    fn flags(mut env_getter: MockEnvGetter, #[case] raw: &str, #[case] expected: bool) {
        env_getter
            .expect_get()
            .with(eq("FLAG"))
            .return_const(Ok(raw.to_string()));
        let mut env = Env::new(env_getter);

        assert_eq!(env.get_flag("FLAG", true), expected);
    }

    #[rstest]
    fn flag_default(mut env_getter: MockEnvGetter) {
        env_getter
            .expect_get()
            .return_const(Err(VarError::NotPresent));
        let mut env = Env::new(env_getter);

        assert!(env.get_flag("FLAG", true));
        assert_eq!(env.message(), "\tFLAG = true (default)\n");
        assert!(!env.get_flag("FLAG", false));
    }

    #[rstest]
    #[serial]
    fn std_env_getter() {
        std::env::set_var("HOG_SETTINGS_ENV_TEST", "value");
        let getter = StdEnvGetter::default();
        assert_eq!(getter.get("HOG_SETTINGS_ENV_TEST"), Ok("value".to_string()));

        std::env::remove_var("HOG_SETTINGS_ENV_TEST");
        assert_eq!(
            getter.get("HOG_SETTINGS_ENV_TEST"),
            Err(VarError::NotPresent)
        );
    }

    #[fixture]
    fn env_getter() -> MockEnvGetter {
        MockEnvGetter::new()
    }
}
