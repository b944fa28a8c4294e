//! Execution dispatch for the dsmadmc runner.
//!
//! One invocation ends in exactly one of three terminal branches: the
//! compiled command is executed for real, a fabricated outcome is
//! produced, or the run is skipped entirely. The branch is selected by an
//! explicit lookup over the advisory-mode flag, the simulation flag and
//! the presence of simulated output, so every combination is enumerable
//! and tested. No retries; at most one process spawn per invocation.

use chrono::Local;
use log::{debug, info};

use crate::command::CompiledCommand;
use crate::params::InvocationRequest;
use crate::report::ExecutionOutcome;
use crate::runner::CommandRunner;

/// Terminal branch for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Advisory mode with nothing to simulate: produce no outcome.
    Skip,
    /// Fabricate the outcome from the simulation inputs.
    Simulate,
    /// Spawn the compiled command.
    Execute,
}

impl DispatchMode {
    /// Select the branch from the three independent signals.
    pub fn select(check_mode: bool, simulate: bool, has_sim_out: bool) -> Self {
        match (check_mode, simulate, has_sim_out) {
            (false, false, _) => DispatchMode::Execute,
            (false, true, _) | (true, true, _) => DispatchMode::Simulate,
            (true, false, true) => DispatchMode::Simulate,
            (true, false, false) => DispatchMode::Skip,
        }
    }
}

/// Run the selected branch, capturing timestamps immediately around it.
///
/// Returns `None` for the skip branch; the caller short-circuits to the
/// skipped report without assembling a record.
pub fn dispatch(
    request: &InvocationRequest,
    compiled: &CompiledCommand,
    check_mode: bool,
    runner: &dyn CommandRunner,
) -> Option<ExecutionOutcome> {
    let mode = DispatchMode::select(
        check_mode,
        request.simulate,
        request.simulated_output.is_some(),
    );

    match mode {
        DispatchMode::Skip => {
            debug!("advisory mode with no simulated output, skipping");
            None
        }
        DispatchMode::Simulate => {
            debug!("simulating {}", compiled.loggable());
            let start = Local::now();
            let stdout = request.simulated_output.clone().unwrap_or_default();
            let rc = request.simulated_rc.unwrap_or(0);
            let end = Local::now();
            Some(ExecutionOutcome {
                stdout,
                stderr: String::new(),
                rc,
                start,
                end,
                simulated: true,
            })
        }
        DispatchMode::Execute => {
            info!("running {}", compiled.loggable());
            let start = Local::now();
            let output = runner.execute(compiled.runnable());
            let end = Local::now();
            Some(ExecutionOutcome {
                stdout: output.stdout,
                stderr: output.stderr,
                rc: output.rc,
                start,
                end,
                simulated: false,
            })
        }
    }
}
