//! Line-by-line request loop.
//!
//! Reads requests until end of input, numbering lines from 1. Responses go
//! to `out`, one per line; refused requests are reported on `err` as
//! `Error in line <n>: <request>`. Input that is not valid UTF-8 is decoded
//! lossily; such a line never matches a request grammar and is refused on
//! its own.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::office::TicketOffice;

/// Counts gathered over one run of [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, blank ones included.
    pub requests: usize,

    /// Requests that were refused.
    pub refused: usize,

    /// Tickets sold by the office at the end of the run.
    pub tickets_sold: u64,
}

/// Feed every line of `input` to `office`.
///
/// Only I/O failures end the run early; refused requests are reported and
/// skipped.
pub fn run<R, O, E>(
    office: &mut TicketOffice,
    mut input: R,
    out: &mut O,
    err: &mut E,
) -> io::Result<RunSummary>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);

        summary.requests += 1;
        let ordinal = summary.requests;

        match office.process(ordinal, &line) {
            Ok(Some(response)) => writeln!(out, "{response}")?,
            Ok(None) => {}
            Err(refusal) => {
                summary.refused += 1;
                writeln!(err, "{refusal}")?;
            }
        }
    }

    out.flush()?;
    err.flush()?;

    summary.tickets_sold = office.tickets_sold();
    info!(
        requests = summary.requests,
        refused = summary.refused,
        tickets_sold = summary.tickets_sold,
        "Input exhausted"
    );

    Ok(summary)
}
