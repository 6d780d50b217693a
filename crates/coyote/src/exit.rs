use std::fmt;
use std::io;

use coyote::CoyoteError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
/// Data failed validation or is not valid JSON.
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
/// Schema source failed to compile.
pub const SCHEMA_INVALID: i32 = 65;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn coyote_error(context: &str, err: CoyoteError) -> CliError {
    let code = match &err {
        CoyoteError::Compile(_) => SCHEMA_INVALID,
        CoyoteError::Input(_) | CoyoteError::Validation(_) => DATA_INVALID,
        CoyoteError::LoadFailed(_) => FAILURE,
        CoyoteError::NoSchema(_) => USAGE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Exit code for a command line clap rejected. Help and version output succeed.
pub fn clap_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => SUCCESS,
        _ => USAGE,
    }
}
