use std::fs;
use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::{info, warn};

use super::{
    CONTENT_BLOB, CONTENT_DOWNLOAD, HandoffError, HostChannel, HostRequest, Offering,
};

/// Host channel for a picker launched by another process.
///
/// The host's request arrives as JSON, either inline or as a path to a file.
/// The response is written as a single JSON line to `writer` (stdout in the
/// binary) after the terminal UI has been torn down.
pub struct StdioChannel<W: Write> {
    raw_request: Option<String>,
    request: Option<HostRequest>,
    writer: W,
    closed: bool,
}

impl StdioChannel<io::Stdout> {
    pub fn stdout(raw_request: Option<String>) -> Self {
        Self::new(raw_request, io::stdout())
    }
}

impl<W: Write> StdioChannel<W> {
    pub fn new(raw_request: Option<String>, writer: W) -> Self {
        Self {
            raw_request,
            request: None,
            writer,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn load_request(raw: &str) -> Result<HostRequest, HandoffError> {
        let raw = raw.trim();
        if raw.starts_with('{') {
            return HostRequest::parse(raw);
        }
        let contents = fs::read_to_string(raw)?;
        HostRequest::parse(&contents)
    }
}

#[derive(Serialize)]
struct ResponseLine<T: Serialize> {
    offering: &'static str,
    sending: T,
}

#[derive(Serialize)]
struct BlobWire<'a> {
    blob: String,
    title: &'a str,
    description: &'a str,
}

fn encode_offering(offering: Offering) -> Result<String, HandoffError> {
    let line = match offering {
        Offering::ContentDownload(sending) => serde_json::to_string(&ResponseLine {
            offering: CONTENT_DOWNLOAD,
            sending: sending.resolve()?,
        })?,
        Offering::ContentBlob(sending) => {
            let content = sending.resolve()?;
            serde_json::to_string(&ResponseLine {
                offering: CONTENT_BLOB,
                sending: BlobWire {
                    blob: STANDARD.encode(&content.blob),
                    title: &content.title,
                    description: &content.description,
                },
            })?
        }
    };
    Ok(line)
}

impl<W: Write> HostChannel for StdioChannel<W> {
    fn detect_request(&mut self) -> Option<HostRequest> {
        let raw = self.raw_request.as_deref()?;
        match Self::load_request(raw) {
            Ok(request) => {
                info!(
                    "Host request detected with {} capabilities",
                    request.matching.len()
                );
                self.request = Some(request.clone());
                Some(request)
            }
            Err(err) => {
                warn!("Ignoring host request: {err}");
                None
            }
        }
    }

    fn open_response(&mut self, offerings: Vec<Offering>) -> Result<(), HandoffError> {
        if self.closed {
            return Err(HandoffError::Closed);
        }

        let chosen = match &self.request {
            Some(request) => offerings
                .into_iter()
                .find(|offering| request.accepts(offering.form())),
            // Nobody asked: hand the first offering to whoever reads stdout.
            None => offerings.into_iter().next(),
        }
        .ok_or(HandoffError::NoAcceptedOffering)?;

        info!("Sending {} to host", chosen.form());
        let line = encode_offering(chosen)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.writer.flush() {
            warn!("Failed to flush host channel: {err}");
        }
        info!("Host channel closed");
    }
}
