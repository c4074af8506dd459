/// One recorded input line and its position in the session's numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub number: usize,
    pub command: String,
}

impl HistoryEntry {
    pub fn new(number: usize, command: impl Into<String>) -> Self {
        Self {
            number,
            command: command.into(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.number, self.command)
    }
}
