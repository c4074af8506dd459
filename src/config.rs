use std::path::PathBuf;

pub const PROMPT: &str = "$ ";
pub const READ_CHUNK_SIZE: usize = 1024;
pub const HISTORY_FILE: &str = ".chainsh_history";
pub const HISTORY_MAX: usize = 4096;
pub const ALIAS_EXPANSION_LIMIT: usize = 10;

/// Runtime knobs for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub read_chunk_size: usize,
    pub history_file: String,
    pub history_max: usize,
    pub alias_expansion_limit: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            read_chunk_size: READ_CHUNK_SIZE,
            history_file: HISTORY_FILE.to_string(),
            history_max: HISTORY_MAX,
            alias_expansion_limit: ALIAS_EXPANSION_LIMIT,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// History lives directly under the home directory; `None` when there is
    /// no home directory to put it in.
    pub fn history_path(&self) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(&self.history_file))
    }
}
