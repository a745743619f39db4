use std::{
    collections::HashMap,
    ffi::{OsStr, OsString},
};

/// Where the fixtures read their environment variables from.
pub trait EnvSource {
    fn var_os(&self, name: &str) -> Option<OsString>;

    /// Looks up `name` and keeps it only when it is set and non-empty.
    ///
    /// Any other value counts, including the literal string `"false"`.
    fn truthy(&self, name: &str) -> Option<OsString> {
        let value = self.var_os(name);
        tracing::trace!("{} = {:?}", name, value);
        value.filter(|value| is_truthy(value))
    }
}

pub fn is_truthy(value: &OsStr) -> bool {
    !value.is_empty()
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl EnvSource for HashMap<String, OsString> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).cloned()
    }
}
