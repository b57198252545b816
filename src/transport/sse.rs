//! Incremental Server-Sent Events framing shared by both transports.
//!
//! - frames are separated by a blank line
//! - `data:` lines of a frame are joined with `\n`
//! - comment lines (`:` prefix) and other fields (`event:`, `id:`, `retry:`) are ignored
//! - a `[DONE]` payload ends the stream

const DONE_SIGNAL: &str = "[DONE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SseEvent {
    Data(String),
    Done,
}

#[derive(Debug, Default)]
pub(crate) struct SseDecoder {
    buf: Vec<u8>,
    /// Bytes of `buf` already searched for a frame delimiter.
    scanned: usize,
    done: bool,
}

impl SseDecoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes from the response body.
    pub(crate) fn push(&mut self, bytes: &[u8]) {
        if self.done {
            return;
        }
        self.buf.extend(bytes.iter().copied().filter(|b| *b != b'\r'));
    }

    /// Mark end of body; a trailing frame without a final blank line becomes available.
    pub(crate) fn finish(&mut self) {
        if !self.done && !self.buf.is_empty() {
            self.buf.extend_from_slice(b"\n\n");
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    /// Next complete event, or `None` when more input is needed.
    pub(crate) fn next_event(&mut self) -> Option<SseEvent> {
        while !self.done {
            let idx = self.find_delimiter()?;
            let frame: Vec<u8> = self.buf.drain(..idx + 2).collect();
            self.scanned = 0;
            let frame = String::from_utf8_lossy(&frame[..idx]);

            let Some(data) = frame_data(&frame) else {
                continue;
            };
            if data.trim() == DONE_SIGNAL {
                self.done = true;
                self.buf.clear();
                self.scanned = 0;
                return Some(SseEvent::Done);
            }
            return Some(SseEvent::Data(data));
        }
        None
    }

    /// Start of the first `\n\n` in `buf`, resuming where the last search stopped.
    fn find_delimiter(&mut self) -> Option<usize> {
        // one byte back: the delimiter may straddle two pushes
        let from = self.scanned.saturating_sub(1);
        match self.buf[from..].windows(2).position(|w| w == b"\n\n") {
            Some(pos) => Some(from + pos),
            None => {
                self.scanned = self.buf.len();
                None
            }
        }
    }
}

fn frame_data(frame: &str) -> Option<String> {
    let mut data: Option<String> = None;
    for line in frame.lines() {
        if line.starts_with(':') {
            continue;
        }
        let Some(rest) = line.strip_prefix("data:") else {
            continue;
        };
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        match data.as_mut() {
            Some(d) => {
                d.push('\n');
                d.push_str(rest);
            }
            None => data = Some(rest.to_string()),
        }
    }
    data.filter(|d| !d.trim().is_empty())
}
