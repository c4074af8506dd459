/// Splits command text on a fixed set of delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&[' ', '\t'])
    }
}

impl Tokenizer {
    pub fn new(delimiters: &[char]) -> Self {
        Self {
            delimiters: delimiters.to_vec(),
        }
    }

    /// Non-empty tokens in order. Runs of delimiters collapse.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        input
            .split(|c: char| self.delimiters.contains(&c))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Like [`Tokenizer::tokenize`], but a string that yields no tokens is
    /// kept whole (trimmed) unless it is blank.
    pub fn split_args(&self, input: &str) -> Vec<String> {
        let tokens = self.tokenize(input);
        if !tokens.is_empty() {
            return tokens;
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_delimiters() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("  ls \t -l   /tmp "),
            vec!["ls", "-l", "/tmp"]
        );
    }

    #[test]
    fn test_only_delimiters() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize(" \t  ").is_empty());
        assert!(tokenizer.split_args(" \t  ").is_empty());
    }

    #[test]
    fn test_collapsed_input_is_fixed_point() {
        let tokenizer = Tokenizer::default();
        let once = tokenizer.tokenize("echo   a\tb");
        let again = tokenizer.tokenize(&once.join(" "));
        assert_eq!(once, again);
    }

    #[test]
    fn test_custom_delimiters_fallback() {
        let tokenizer = Tokenizer::new(&[':']);
        assert_eq!(tokenizer.tokenize("/a::/b"), vec!["/a", "/b"]);
        assert_eq!(tokenizer.split_args("::"), vec!["::"]);
    }
}
