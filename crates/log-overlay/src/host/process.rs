use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use anyhow::{bail, Context};
use log_overlay_core::{HostChannel, HostError, HostPush, HostRequest};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::Mutex;
use std::thread;

/// Host running as a child process
pub struct ProcessHost {
    child: Child,
    stdin: Mutex<ChildStdin>,
}

impl ProcessHost {
    /// Spawn `command` and start feeding its pushes into the action channel
    pub fn spawn(command: &[String], dispatcher: Dispatcher) -> anyhow::Result<Self> {
        let Some((program, args)) = command.split_first() else {
            bail!("Host command is empty");
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn host command {:?}", program))?;

        let stdin = child.stdin.take().context("Host stdin not captured")?;
        let stdout = child.stdout.take().context("Host stdout not captured")?;
        let stderr = child.stderr.take().context("Host stderr not captured")?;

        thread::Builder::new()
            .name("host-reader".into())
            .spawn(move || read_pushes(stdout, dispatcher))
            .context("Failed to start host reader thread")?;
        thread::Builder::new()
            .name("host-stderr".into())
            .spawn(move || forward_stderr(stderr))
            .context("Failed to start host stderr thread")?;

        log::info!("Spawned host {:?} (pid {})", program, child.id());
        Ok(Self {
            child,
            stdin: Mutex::new(stdin),
        })
    }
}

impl HostChannel for ProcessHost {
    fn send(&self, request: &HostRequest) -> Result<(), HostError> {
        let line = request.encode()?;
        let mut stdin = self.stdin.lock().map_err(|_| HostError::Disconnected)?;
        writeln!(stdin, "{}", line)?;
        stdin.flush()?;
        Ok(())
    }
}

impl Drop for ProcessHost {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            log::debug!("Host already gone: {}", e);
        }
        if let Err(e) = self.child.wait() {
            log::debug!("Failed to reap host: {}", e);
        }
    }
}

/// Decode one line of host output. Blank lines are skipped, malformed or
/// unknown messages are logged and dropped.
fn decode_line(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match HostPush::decode(line) {
        Ok(push) => Some(Action::Host(push)),
        Err(e) => {
            log::warn!("Ignoring host message: {} ({})", e, line);
            None
        }
    }
}

fn read_pushes(stdout: impl Read, dispatcher: Dispatcher) {
    for line in BufReader::new(stdout).lines() {
        match line {
            Ok(line) => {
                if let Some(action) = decode_line(&line) {
                    dispatcher.dispatch(action);
                }
            }
            Err(e) => {
                log::error!("Failed to read from host: {}", e);
                break;
            }
        }
    }
    log::info!("Host closed its output");
    dispatcher.dispatch(Action::Global(GlobalAction::HostDisconnected));
}

fn forward_stderr(stderr: impl Read) {
    for line in BufReader::new(stderr).lines().map_while(Result::ok) {
        log::info!("host: {}", line);
    }
}
