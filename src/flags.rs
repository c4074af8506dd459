use crate::error::ShellError;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

/// Where the session reads its commands from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Script(PathBuf),
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-V".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    /// Parses the arguments after the program name. Anything that is not a
    /// known flag is kept as a positional argument.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            if arg.len() > 2 && arg.starts_with("--") && !self.is_known(arg) {
                return Err(ShellError::FlagError(format!("unknown option {}", arg)));
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long);

            match flag {
                Some(flag) => flag.value = Some("true".to_string()),
                None => self.positional.push(arg.clone()),
            }
        }
        Ok(())
    }

    fn is_known(&self, arg: &str) -> bool {
        self.flags
            .values()
            .any(|flag| arg == flag.short || arg == flag.long)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Exactly one positional argument names a script; with none, or with
    /// more than one, commands come from standard input.
    pub fn input_source(&self) -> InputSource {
        match self.positional.as_slice() {
            [script] => InputSource::Script(PathBuf::from(script)),
            _ => InputSource::Stdin,
        }
    }

    pub fn print_help(&self, program: &str) {
        println!("Usage: {} [OPTIONS] [SCRIPT]", program);
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
