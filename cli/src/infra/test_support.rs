//! Shared test helpers for the command-line adapters.
//!
//! Provides cross-platform `exit_status()` and a `ScriptedRunner` that
//! records every invocation and answers from a closure.

use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::application::ports::CommandRunner;

/// Build an `ExitStatus` from a logical exit code (cross-platform).
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn ok_output(stdout: &str) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

pub fn fail_output(code: i32, stderr: &str) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

type Script = dyn Fn(&[String]) -> Output + Send + Sync;

/// Records `(program, args)` for every call and answers with `script(args)`.
pub struct ScriptedRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    script: Arc<Script>,
}

impl ScriptedRunner {
    pub fn new(script: impl Fn(&[String]) -> Output + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Arc::new(script),
        }
    }

    /// Runner where every command succeeds with empty output.
    pub fn ok() -> Self {
        Self::new(|_| ok_output(""))
    }

    /// Argument lists of every call, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    fn record(&self, program: &str, args: &[&str]) -> Vec<String> {
        let args: Vec<String> = args.iter().map(|s| (*s).to_string()).collect();
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push((program.to_owned(), args.clone()));
        args
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let args = self.record(program, args);
        Ok((self.script)(&args))
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let args = self.record(program, args);
        Ok((self.script)(&args).status)
    }
}
