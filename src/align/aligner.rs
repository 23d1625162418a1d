//! External sentence aligner boundary.
use std::io::Write;
use std::process::{Command, Stdio};

use log::{debug, info};
use serde::Serialize;

use crate::align::RawAlignment;
use crate::error::Error;

/// Interface to the sentence alignment collaborator.
///
/// `source` and `target` are the newline-joined sentence texts of each side,
/// already segmented; the aligner must not re-segment them. Any conforming
/// implementation can be substituted here.
pub trait Aligner {
    fn align(&self, source: &str, target: &str) -> Result<RawAlignment, Error>;
}

#[derive(Serialize)]
struct AlignRequest<'a> {
    source: &'a str,
    target: &'a str,
    is_split: bool,
}

/// Runs the aligner as a subprocess.
///
/// The command gets a JSON request object on stdin and must print the
/// alignment pairs as a JSON array on stdout. Its internal failures stay
/// opaque: a nonzero exit status surfaces as [Error::Aligner] with the
/// captured stderr.
pub struct ProcessAligner {
    cmd: String,
}

impl ProcessAligner {
    pub fn new(cmd: &str) -> Self {
        Self {
            cmd: cmd.to_string(),
        }
    }
}

impl Aligner for ProcessAligner {
    fn align(&self, source: &str, target: &str) -> Result<RawAlignment, Error> {
        info!("running aligner: {}", self.cmd);
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let request = serde_json::to_vec(&AlignRequest {
            source,
            target,
            is_split: true,
        })?;

        // stdin is piped, so take() always yields a handle.
        // dropping it at the end of the scope closes the pipe.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&request)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Aligner(format!(
                "aligner exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        debug!("aligner wrote {} bytes", output.stdout.len());
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_aligner_round_trip() {
        // drain the request, answer with a fixed alignment
        let aligner = ProcessAligner::new("cat >/dev/null; echo '[[[0],[0.0]]]'");
        let raw = aligner.align("a b", "x y").unwrap();
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn process_aligner_failure_is_opaque() {
        let aligner = ProcessAligner::new("cat >/dev/null; echo boom >&2; exit 3");
        let res = aligner.align("a", "b");
        match res {
            Err(Error::Aligner(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected aligner error, got {:?}", other),
        }
    }

    #[test]
    fn process_aligner_garbage_output() {
        let aligner = ProcessAligner::new("cat >/dev/null; echo 'not json'");
        assert!(matches!(aligner.align("a", "b"), Err(Error::Serde(_))));
    }
}
