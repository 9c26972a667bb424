//! CGI-style request handling: a JSON request on stdin, a JSON response on
//! stdout preceded by a `Content-type` header.

use std::io::{Read, Write};

use rootfinding_solvers::NewtonRaphson;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CliError, Result};

/// The CGI header block, including the blank line that ends it.
pub const HEADER: &str = "Content-type: application/json\n\n";

/// Request body: `{"epsilon": ..., "guess": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Request {
    pub epsilon: f64,
    pub guess: f64,
}

/// Response body.
///
/// A successful response carries `guess` and `root`. A failed one carries
/// `error`, plus `guess` when the request could be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn root(guess: f64, root: f64) -> Self {
        Self {
            guess: Some(guess),
            root: Some(root),
            error: None,
        }
    }

    fn error(guess: Option<f64>, error: &CliError) -> Self {
        Self {
            guess,
            root: None,
            error: Some(error.to_string()),
        }
    }
}

/// Answers a single request read from `input`, writing the full CGI response
/// to `output`.
///
/// A response body is written even when the request is malformed or the solve
/// fails; the error is then also returned so the caller can set the exit code.
///
/// # Errors
///
/// Returns an error if the request cannot be parsed, the tolerance is
/// invalid, the solve fails, or writing the response fails.
pub fn respond<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    output.write_all(HEADER.as_bytes())?;

    let (response, outcome) = match handle(input) {
        Ok((request, root)) => {
            info!(guess = request.guess, epsilon = request.epsilon, root, "solved request");
            (Response::root(request.guess, root), Ok(()))
        }
        Err((guess, error)) => {
            warn!(%error, "request failed");
            (Response::error(guess, &error), Err(error))
        }
    };

    serde_json::to_writer_pretty(&mut output, &response)?;
    writeln!(output)?;
    output.flush()?;

    outcome
}

fn handle<R: Read>(input: R) -> std::result::Result<(Request, f64), (Option<f64>, CliError)> {
    let request: Request = match serde_json::from_reader(input) {
        Ok(request) => request,
        Err(error) => return Err((None, error.into())),
    };

    let root = NewtonRaphson::new(request.epsilon)
        .map_err(CliError::from)
        .and_then(|finder| finder.solve(request.guess).map_err(CliError::from))
        .map_err(|e| (Some(request.guess), e))?;

    Ok((request, root))
}
