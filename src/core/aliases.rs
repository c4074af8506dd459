/// Session aliases in the order they were defined. Re-defining a name moves
/// it to the end.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name`. An empty `command` removes the alias instead.
    pub fn set(&mut self, name: &str, command: &str) {
        self.remove(name);
        if !command.is_empty() {
            self.aliases.push((name.to_string(), command.to_string()));
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.aliases.len();
        self.aliases.retain(|(alias, _)| alias != name);
        self.aliases.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == name)
            .map(|(_, command)| command.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(name, command)| (name.as_str(), command.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_alias() {
        let mut table = AliasTable::new();
        table.set("ll", "ls -la");
        assert_eq!(table.get("ll"), Some("ls -la"));
        assert_eq!(table.get("l"), None);
    }

    #[test]
    fn test_empty_value_removes() {
        let mut table = AliasTable::new();
        table.set("ll", "ls -la");
        table.set("ll", "");
        assert!(table.is_empty());
    }

    #[test]
    fn test_redefinition_moves_to_end() {
        let mut table = AliasTable::new();
        table.set("a", "1");
        table.set("b", "2");
        table.set("a", "3");

        let order: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(order, vec![("b", "2"), ("a", "3")]);
    }

    #[test]
    fn test_remove_missing() {
        let mut table = AliasTable::new();
        assert!(!table.remove("nope"));
    }
}
