//! dsmadmc Runner Library
//!
//! This library provides the core functionality for the dsmadmc
//! automation-runtime plugin: parameter resolution, command compilation
//! with credential masking, three-way execution dispatch and structured
//! result reporting.

pub mod cli;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod params;
pub mod report;
pub mod runner;
pub mod types;

// Re-export main types for convenience
pub use command::{compile, CompiledCommand, DSMADMC_BIN, PASSWORD_MASK};
pub use dispatch::{dispatch, DispatchMode};
pub use error::{ModuleError, Result, VALIDATION_RC};
pub use host::{run_module, HostContext, HostResponse, FAILED_MSG, SKIPPED_MSG};
pub use params::{resolve, InvocationRequest, RawParams};
pub use report::{assemble, ExecutionOutcome, RunRecord};
pub use runner::{CommandRunner, ExecOutput, SystemRunner};
pub use types::{CommandInput, DisplayMode};
