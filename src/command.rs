//! Command compilation for the dsmadmc runner.
//!
//! Builds the single invocation string from a resolved request. Token
//! order is a compatibility contract with the administrative client's
//! argument parser and must not change:
//!
//! ```text
//! [dir/]dsmadmc [-DATAONLY=YES] -SE=<server> -ID=<id> -PA=<password>
//!               [-COMMA] [-TAB] [-DISPL=<mode>] "<command>"
//! ```
//!
//! The compiled command exists in two renderings: the runnable string
//! handed to the process boundary, and the loggable string in which the
//! password value is replaced by a fixed mask. Only the loggable form may
//! appear in logs or returned records.

use crate::params::InvocationRequest;

/// Name of the administrative client binary.
pub const DSMADMC_BIN: &str = "dsmadmc";

/// Fixed mask substituted for the password in any loggable rendering.
pub const PASSWORD_MASK: &str = "********";

/// An immutable compiled invocation, built once per request.
#[derive(Debug, Clone)]
pub struct CompiledCommand {
    runnable: String,
    loggable: String,
}

impl CompiledCommand {
    /// The full command string, password included. Handed to the process
    /// boundary and nowhere else.
    pub fn runnable(&self) -> &str {
        &self.runnable
    }

    /// The command string with the password masked. This is the only
    /// rendering that logs and result records carry.
    pub fn loggable(&self) -> &str {
        &self.loggable
    }
}

/// Deterministically compile a resolved request into its invocation string.
pub fn compile(request: &InvocationRequest) -> CompiledCommand {
    CompiledCommand {
        runnable: render(request, &request.password),
        loggable: render(request, PASSWORD_MASK),
    }
}

fn render(request: &InvocationRequest, password_value: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();

    let executable = match &request.binary_dir {
        // PathBuf::join collapses a trailing separator, so "/usr/bin/" and
        // "/usr/bin" yield the same base token.
        Some(dir) => dir.join(DSMADMC_BIN).display().to_string(),
        None => DSMADMC_BIN.to_string(),
    };
    tokens.push(executable);

    if request.data_only {
        tokens.push("-DATAONLY=YES".to_string());
    }
    tokens.push(format!("-SE={}", request.server_address));
    tokens.push(format!("-ID={}", request.user_id));
    tokens.push(format!("-PA={}", password_value));
    if request.comma_delimited {
        tokens.push("-COMMA".to_string());
    }
    if request.tab_delimited {
        tokens.push("-TAB".to_string());
    }
    if let Some(mode) = request.display_mode {
        tokens.push(format!("-DISPL={}", mode));
    }
    tokens.push(format!("\"{}\"", request.command));

    tokens.join(" ")
}
