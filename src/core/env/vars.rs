use super::EnvError;
use std::env;

/// The session's variables. Children receive exactly this table, never the
/// shell's own process environment.
#[derive(Clone, Debug)]
pub struct EnvironmentTable {
    vars: Vec<(String, String)>,
    projection: Vec<String>,
    dirty: bool,
}

impl Default for EnvironmentTable {
    fn default() -> Self {
        Self {
            vars: Vec::new(),
            projection: Vec::new(),
            dirty: true,
        }
    }
}

impl EnvironmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment at startup.
    pub fn from_process() -> Self {
        Self::from_pairs(env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            if !is_valid_name(&key) {
                continue;
            }
            table.insert(key, value.into());
        }
        table
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if !is_valid_name(name) {
            return Err(EnvError::InvalidName(name.to_string()));
        }

        self.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn insert(&mut self, name: String, value: String) {
        match self.vars.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.vars.push((name, value)),
        }
        self.dirty = true;
    }

    /// Returns whether the variable existed.
    pub fn unset(&mut self, name: &str) -> bool {
        let before = self.vars.len();
        self.vars.retain(|(key, _)| key != name);
        let removed = self.vars.len() != before;
        if removed {
            self.dirty = true;
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`EnvironmentTable::get`], but an empty value counts as unset.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `NAME=VALUE` strings in table order, rebuilt only after a change.
    pub fn projection(&mut self) -> &[String] {
        if self.dirty {
            self.projection = self
                .vars
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            self.dirty = false;
        }
        &self.projection
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=')
}
