use thiserror::Error;

/// Everything a submission can die with. Application errors carry the
/// server's message verbatim; every transport-level failure (refused
/// connection, timeout, non-2xx status, undecodable body) collapses into
/// one generic variant with a fixed user-facing message.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{0}")]
    Application(String),

    #[error("An error occurred while processing your request.")]
    Transport,
}
