//! Process exit codes. Part of the public contract for scripts and CI.

use wfstats_client::ClientError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1; // Unclassified failure
pub const CONFIG_ERROR: i32 = 2; // Bad flags, env or credentials file
pub const AUTH_ERROR: i32 = 3; // Token exchange failed or token rejected
pub const NETWORK_ERROR: i32 = 4; // Transport failure or unexpected HTTP status
pub const DATA_ERROR: i32 = 5; // Unparsable response or missing spreadsheet

/// Exit code for an error, taken from the first [`ClientError`] in its chain.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())
        .map_or(EXIT_FAILURE, ClientError::exit_code)
}
