// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use strum_macros::{Display as StrumDisplay, EnumString};

use crate::util::ParseError;

const NULL: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Command {
    // Client frames
    Connect,
    Stomp,
    Send,
    Subscribe,
    Unsubscribe,
    Ack,
    Nack,
    Begin,
    Commit,
    Abort,
    Disconnect,
    // Server frames
    Connected,
    Message,
    Receipt,
    Error,
}

impl Command {
    /// CONNECT and CONNECTED frames carry their header values verbatim (STOMP 1.2, "Value
    /// Encoding"), all other frames escape them.
    fn escapes_headers(&self) -> bool {
        !matches!(self, Command::Connect | Command::Connected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Frame {
    pub fn new(command: Command) -> Self {
        Frame {
            command,
            headers: vec![],
            body: String::new(),
        }
    }

    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn set_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the value of the first header named `name`. Repeated headers are legal in STOMP
    /// and only the first occurrence counts.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.header("destination")
    }

    pub fn subscription(&self) -> Option<&str> {
        self.header("subscription")
    }

    pub fn encode(&self) -> String {
        let escape = self.command.escapes_headers();
        let mut out = String::with_capacity(self.body.len() + 64);

        out.push_str(&self.command.to_string());
        out.push('\n');

        for (name, value) in self.headers.iter() {
            if escape {
                out.push_str(&escape_header(name));
                out.push(':');
                out.push_str(&escape_header(value));
            } else {
                out.push_str(name);
                out.push(':');
                out.push_str(value);
            }
            out.push('\n');
        }

        if !self.body.is_empty() && self.header("content-length").is_none() {
            out.push_str(&format!("content-length:{}\n", self.body.len()));
        }

        out.push('\n');
        out.push_str(&self.body);
        out.push(NULL);
        out
    }

    /// Parses a single frame. `input` may or may not include the terminating NULL.
    pub fn decode(input: &str) -> Result<Frame, ParseError> {
        let input = input.strip_suffix(NULL).unwrap_or(input);
        let input = input.trim_start_matches(['\r', '\n']);

        let (head, body) = match split_header_block(input) {
            Some((head_len, body_start)) => (&input[..head_len], &input[body_start..]),
            None => (input, ""),
        };

        let mut lines = head.split('\n').map(|line| line.trim_end_matches('\r'));

        let command_line = lines.next().unwrap_or_default();
        let command =
            Command::from_str(command_line).map_err(|_| ParseError::UnknownCommand {
                command: command_line.to_string(),
            })?;

        let unescape = command.escapes_headers();
        let mut headers = vec![];

        for line in lines {
            if line.is_empty() {
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                return Err(ParseError::MalformedHeader {
                    line: line.to_string(),
                });
            };
            if unescape {
                headers.push((unescape_header(name)?, unescape_header(value)?));
            } else {
                headers.push((name.to_string(), value.to_string()));
            }
        }

        Ok(Frame {
            command,
            headers,
            body: body.to_string(),
        })
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode().trim_end_matches(NULL))
    }
}

/// Finds the blank line that ends the header block. Returns the length of the command and
/// header lines and the offset at which the body starts.
fn split_header_block(input: &str) -> Option<(usize, usize)> {
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        if offset > 0 && line.trim_end_matches(['\r', '\n']).is_empty() {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }

    None
}

fn escape_header(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ':' => out.push_str("\\c"),
            c => out.push(c),
        }
    }
    out
}

fn unescape_header(value: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('c') => out.push(':'),
            Some(other) => return Err(ParseError::InvalidEscape { sequence: other }),
            None => return Err(ParseError::InvalidEscape { sequence: ' ' }),
        }
    }

    Ok(out)
}

/// Reassembles frames from the text chunks a WebSocket delivers. A chunk may contain several
/// frames, a partial frame or nothing but heart-beats (bare EOLs).
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: String,
}

impl FrameDecoder {
    pub fn push(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
    }

    /// Returns the next complete frame, if any. A malformed frame is consumed and reported as an
    /// error so that decoding can continue with the frames that follow it.
    pub fn next_frame(&mut self) -> Option<Result<Frame, ParseError>> {
        let leading_eols = self.buffer.len() - self.buffer.trim_start_matches(['\r', '\n']).len();
        if leading_eols > 0 {
            self.buffer.drain(..leading_eols);
        }

        if self.buffer.is_empty() {
            return None;
        }

        let end = match self.frame_end() {
            Ok(Some(end)) => end,
            Ok(None) => return None,
            Err(err) => {
                // Skip up to the next NULL, if we have one, otherwise discard everything.
                match self.buffer.find(NULL) {
                    Some(idx) => {
                        self.buffer.drain(..=idx);
                    }
                    None => self.buffer.clear(),
                }
                return Some(Err(err));
            }
        };

        let raw: String = self.buffer.drain(..=end).collect();
        Some(Frame::decode(&raw))
    }

    /// Index of the NULL octet that terminates the frame at the start of the buffer.
    fn frame_end(&self) -> Result<Option<usize>, ParseError> {
        let Some((head_len, body_start)) = split_header_block(&self.buffer) else {
            return Ok(self.buffer.find(NULL));
        };

        let content_length = self.buffer[..head_len]
            .split('\n')
            .skip(1)
            .filter_map(|line| line.trim_end_matches('\r').split_once(':'))
            .find(|(name, _)| *name == "content-length")
            .map(|(_, value)| value.trim().parse::<usize>())
            .transpose()?;

        let Some(content_length) = content_length else {
            return Ok(self.buffer[body_start..]
                .find(NULL)
                .map(|idx| body_start + idx));
        };

        let end = body_start + content_length;
        if self.buffer.len() <= end {
            return Ok(None);
        }
        if !self.buffer.is_char_boundary(end) || self.buffer[end..].chars().next() != Some(NULL)
        {
            return Err(ParseError::Generic {
                msg: "Frame body does not match its content-length".to_string(),
            });
        }
        Ok(Some(end))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
