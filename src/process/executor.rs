use std::io::ErrorKind;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::{resolve, ChildGuard, ProcessError};
use crate::core::state::ExecutionContext;

/// Starts external programs one at a time and waits for them.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunner {
    guard: ChildGuard,
}

/// Exit code as is, death by signal N as 128 + N.
pub fn normalize_status(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

impl ProcessRunner {
    pub fn new(guard: ChildGuard) -> Self {
        Self { guard }
    }

    /// Resolves `argv[0]`, runs it with the session environment and returns
    /// its normalized status.
    pub fn run(&self, ctx: &mut ExecutionContext, argv: &[String]) -> Result<i32, ProcessError> {
        let Some(name) = argv.first() else {
            return Ok(ctx.last_status);
        };

        let path = resolve(
            name,
            ctx.env.get_non_empty("PATH"),
            ctx.interactive,
            Path::new("."),
        )
        .ok_or_else(|| ProcessError::CommandNotFound(name.clone()))?;

        if let Err(e) = ctx.console.flush() {
            tracing::debug!(error = %e, "console flush before spawn failed");
        }

        let mut command = Command::new(&path);
        command
            .arg0(name)
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(
                ctx.env
                    .projection()
                    .iter()
                    .filter_map(|entry| entry.split_once('=')),
            );

        let _child_scope = self.guard.enter();
        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => ProcessError::PermissionDenied(name.clone()),
            _ => ProcessError::Spawn {
                command: name.clone(),
                source: e,
            },
        })?;

        let pid = child.id();
        let status = child.wait().map_err(ProcessError::Wait)?;
        let status = normalize_status(status);
        tracing::debug!(command = %name, pid, status, "child exited");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvironmentTable;
    use crate::test_support::{context, SharedBuf};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn system_path() -> EnvironmentTable {
        EnvironmentTable::from_pairs([("PATH", "/usr/bin:/bin")])
    }

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status(ExitStatus::from_raw(0)), 0);
        assert_eq!(normalize_status(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(normalize_status(ExitStatus::from_raw(libc::SIGKILL)), 128 + 9);
    }

    #[test]
    fn test_exit_code_is_returned() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err).with_env(system_path());
        let guard = ChildGuard::new();
        let runner = ProcessRunner::new(guard.clone());

        assert_eq!(runner.run(&mut ctx, &argv(&["true"])).unwrap(), 0);
        assert_eq!(runner.run(&mut ctx, &argv(&["sh", "-c", "exit 3"])).unwrap(), 3);
        assert!(!guard.is_active());
    }

    #[test]
    fn test_signal_death() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err).with_env(system_path());

        let status = ProcessRunner::default()
            .run(&mut ctx, &argv(&["sh", "-c", "kill -TERM $$"]))
            .unwrap();
        assert_eq!(status, 128 + libc::SIGTERM);
    }

    #[test]
    fn test_child_sees_only_session_environment() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("env");
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut env = system_path();
        env.set("ONLY_HERE", "yes").unwrap();
        let mut ctx = context(&out, &err).with_env(env);

        let script = format!("env > {}", marker.display());
        let status = ProcessRunner::default()
            .run(&mut ctx, &argv(&["sh", "-c", &script]))
            .unwrap();
        assert_eq!(status, 0);

        let seen = fs::read_to_string(&marker).unwrap();
        assert!(seen.lines().any(|line| line == "ONLY_HERE=yes"));
        assert!(!seen.lines().any(|line| line.starts_with("HOME=")));
    }

    #[test]
    fn test_command_not_found() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err).with_env(system_path());

        let result = ProcessRunner::default().run(&mut ctx, &argv(&["no-such-command-here"]));
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_permission_denied() {
        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-executable");
        fs::write(&file, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err).with_env(system_path());
        let name = file.to_string_lossy().into_owned();

        let result = ProcessRunner::default().run(&mut ctx, &[name]);
        assert!(matches!(result, Err(ProcessError::PermissionDenied(_))));
    }

    #[test]
    fn test_missing_interpreter_is_a_silent_start_failure() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("orphan");
        fs::write(&file, "#!/no/such/interp\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o755)).unwrap();

        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err).with_env(system_path());
        let name = file.to_string_lossy().into_owned();

        let result = ProcessRunner::default().run(&mut ctx, &[name]);
        let error = result.unwrap_err();
        assert!(matches!(error, ProcessError::Spawn { .. }));
        assert_eq!(error.status(), 1);
        assert!(!error.is_reported());
    }
}
