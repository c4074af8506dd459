use super::tokenizer::Tokenizer;
use crate::core::aliases::AliasTable;
use crate::core::env::EnvironmentTable;

/// Alias and `$` substitution over an already tokenized command.
#[derive(Debug, Clone)]
pub struct Expander {
    tokenizer: Tokenizer,
    limit: usize,
    pid: u32,
}

impl Expander {
    pub fn new(tokenizer: Tokenizer, limit: usize) -> Self {
        Self {
            tokenizer,
            limit,
            pid: std::process::id(),
        }
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Replaces the first word by its alias value, repeatedly, at most
    /// `limit` times. Stops early once an alias yields its own name.
    pub fn expand_aliases(&self, aliases: &AliasTable, mut argv: Vec<String>) -> Vec<String> {
        for _ in 0..self.limit {
            let Some(first) = argv.first() else {
                break;
            };
            let Some(value) = aliases.get(first) else {
                break;
            };

            let name = first.clone();
            argv.splice(0..1, self.tokenizer.split_args(value));
            if argv.first() == Some(&name) {
                break;
            }
        }
        argv
    }

    /// `$?`, `$$` and `$NAME` tokens. Unset names become empty strings.
    pub fn expand_variables(
        &self,
        env: &EnvironmentTable,
        last_status: i32,
        argv: Vec<String>,
    ) -> Vec<String> {
        argv.into_iter()
            .map(|token| match token.as_str() {
                "$?" => last_status.to_string(),
                "$$" => self.pid.to_string(),
                _ => match token.strip_prefix('$') {
                    Some(name) if !name.is_empty() => env.get(name).unwrap_or("").to_string(),
                    _ => token,
                },
            })
            .collect()
    }

    pub fn expand(
        &self,
        aliases: &AliasTable,
        env: &EnvironmentTable,
        last_status: i32,
        argv: Vec<String>,
    ) -> Vec<String> {
        let argv = self.expand_aliases(aliases, argv);
        self.expand_variables(env, last_status, argv)
    }
}
