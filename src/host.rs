//! Host engine adapter for the dsmadmc runner.
//!
//! Ties the pipeline together (resolve, compile, dispatch, assemble) and
//! translates the result into the calling runtime's reporting
//! convention: a flat JSON envelope plus a process exit code. Each call
//! is a pure function of its inputs with at most one process spawn; no
//! state survives between invocations.

use log::warn;
use serde_json::{json, Value};

use crate::command::compile;
use crate::dispatch::dispatch;
use crate::error::VALIDATION_RC;
use crate::params::{resolve, RawParams};
use crate::report::{assemble, RunRecord};
use crate::runner::CommandRunner;

/// Message returned when advisory mode skips the run.
pub const SKIPPED_MSG: &str = "skipped, running in check mode";

/// Message returned alongside a non-zero exit code.
pub const FAILED_MSG: &str = "non-zero return code";

/// Signals from the calling runtime that are not part of the parameter
/// map, currently just the advisory/no-op flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostContext {
    /// Dry-run preview: skip the real run unless simulation is set up.
    pub check_mode: bool,
}

/// Terminal response handed back to the host engine.
#[derive(Debug)]
pub enum HostResponse {
    /// The run completed with exit code zero.
    Success(RunRecord),
    /// Validation failed (no record) or the client returned non-zero
    /// (full record attached for diagnostics).
    Failed {
        msg: String,
        rc: i64,
        record: Option<RunRecord>,
    },
    /// Advisory mode with nothing to simulate; no side effects occurred.
    Skipped,
}

impl HostResponse {
    /// Render the response as the host engine's flat JSON envelope.
    pub fn to_json(&self) -> Value {
        match self {
            HostResponse::Success(record) => record_value(record),
            HostResponse::Failed { msg, rc, record } => {
                let mut value = match record {
                    Some(record) => record_value(record),
                    None => json!({ "rc": rc }),
                };
                if let Some(fields) = value.as_object_mut() {
                    fields.insert("failed".to_string(), Value::Bool(true));
                    fields.insert("msg".to_string(), Value::String(msg.clone()));
                }
                value
            }
            HostResponse::Skipped => json!({ "skipped": true, "msg": SKIPPED_MSG }),
        }
    }

    /// Process exit code for the binary front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            HostResponse::Success(_) | HostResponse::Skipped => 0,
            HostResponse::Failed { .. } => 1,
        }
    }
}

fn record_value(record: &RunRecord) -> Value {
    // A RunRecord is a flat struct of strings, integers and bools;
    // serialization cannot fail.
    serde_json::to_value(record).expect("RunRecord serializes to JSON")
}

/// Run one module invocation end to end.
///
/// Data flows one direction: raw parameters through resolution,
/// compilation and dispatch into a single response. A validation failure
/// short-circuits before anything is compiled or spawned.
pub fn run_module(
    params: RawParams,
    ctx: &HostContext,
    runner: &dyn CommandRunner,
) -> HostResponse {
    let request = match resolve(params) {
        Ok(request) => request,
        Err(err) => {
            warn!("parameter validation failed: {}", err);
            return HostResponse::Failed {
                msg: err.to_string(),
                rc: VALIDATION_RC,
                record: None,
            };
        }
    };

    let compiled = compile(&request);

    match dispatch(&request, &compiled, ctx.check_mode, runner) {
        None => HostResponse::Skipped,
        Some(outcome) => {
            let record = assemble(&request, &compiled, outcome);
            if record.success() {
                HostResponse::Success(record)
            } else {
                HostResponse::Failed {
                    msg: FAILED_MSG.to_string(),
                    rc: record.rc,
                    record: Some(record),
                }
            }
        }
    }
}
