//! Result assembly for the dsmadmc runner.
//!
//! Packages one execution outcome into the flat record the host engine
//! expects: the masked command, captured output, exit code, the echoed
//! simulation inputs, and textual start/end/elapsed timestamps. The
//! record always carries `changed = true`; running the administrative
//! client is treated as state-changing.

use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

use crate::command::CompiledCommand;
use crate::params::InvocationRequest;

/// Raw result of one dispatch branch, produced once and consumed
/// immediately by [`assemble`].
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub rc: i64,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub simulated: bool,
}

impl ExecutionOutcome {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// The flat result record returned to the host engine.
///
/// `cmd` carries the loggable (password-masked) rendering only; the
/// runnable string never leaves the process boundary.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub cmd: String,
    pub stdout: String,
    pub stderr: String,
    pub rc: i64,
    pub sim_rc: Option<i64>,
    pub sim_out: Option<String>,
    pub start: String,
    pub end: String,
    pub delta: String,
    pub changed: bool,
}

impl RunRecord {
    /// Exit-code classification: zero is success, anything else failure.
    pub fn success(&self) -> bool {
        self.rc == 0
    }
}

/// Build the result record from a request and its execution outcome.
pub fn assemble(
    request: &InvocationRequest,
    compiled: &CompiledCommand,
    outcome: ExecutionOutcome,
) -> RunRecord {
    let delta = format_delta(outcome.duration());
    RunRecord {
        cmd: compiled.loggable().to_string(),
        stdout: outcome.stdout,
        stderr: outcome.stderr,
        rc: outcome.rc,
        sim_rc: request.simulated_rc,
        sim_out: request.simulated_output.clone(),
        start: format_timestamp(outcome.start),
        end: format_timestamp(outcome.end),
        delta,
        changed: true,
    }
}

/// `2017-09-29 22:03:48.084657`: microsecond wall-clock rendering.
fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// `0:00:00.001529`: elapsed time as hours:minutes:seconds, with six
/// fractional digits when sub-second precision is present. Hours carry
/// no zero padding.
fn format_delta(delta: TimeDelta) -> String {
    let micros = delta.num_microseconds().unwrap_or(0).max(0);
    let total_secs = micros / 1_000_000;
    let frac = micros % 1_000_000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if frac > 0 {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, frac)
    } else {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    }
}
