//! Incident Link Prompt
//!
//! Asks the operator for the link to the originating alert and keeps asking
//! until the answer parses as a URL with a scheme and host.

use std::io::{BufRead, Write};

use crate::types::{Result, WarRoomError, is_url};

pub const INCIDENT_LINK_PROMPT: &str = "Paste in PagerDuty alert link: ";

/// Prompt on `output`, read answers from `input` until one is a valid URL.
///
/// Returns `WarRoomError::Input` only if `input` is exhausted first.
pub fn prompt_incident_link<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        writeln!(output, "{}", INCIDENT_LINK_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(WarRoomError::input(
                "Input closed before a valid incident link was entered",
            ));
        }

        let candidate = line.trim();
        if is_url(candidate) {
            return Ok(candidate.to_string());
        }

        writeln!(output, "Received a bad link. Try again. Input: {}", candidate)?;
    }
}

/// Validate a link given up front (e.g. `--incident-link`)
pub fn parse_incident_link(s: &str) -> std::result::Result<String, String> {
    let link = s.trim();
    if is_url(link) {
        Ok(link.to_string())
    } else {
        Err(format!(
            "Invalid incident link '{}': expected a URL with scheme and host",
            s
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_first_valid_link() {
        let mut input = Cursor::new("https://example.pagerduty.com/incidents/Q1\n");
        let mut output = Vec::new();
        let link = prompt_incident_link(&mut input, &mut output).unwrap();

        assert_eq!(link, "https://example.pagerduty.com/incidents/Q1");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches(INCIDENT_LINK_PROMPT).count(), 1);
    }

    #[test]
    fn test_loops_until_valid() {
        let mut input = Cursor::new("nope\nexample.com/x\n  https://example.com/i/2  \n");
        let mut output = Vec::new();
        let link = prompt_incident_link(&mut input, &mut output).unwrap();

        assert_eq!(link, "https://example.com/i/2");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches(INCIDENT_LINK_PROMPT).count(), 3);
        assert!(shown.contains("Received a bad link. Try again. Input: nope"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("not-a-link\n");
        let mut output = Vec::new();
        let err = prompt_incident_link(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, WarRoomError::Input(_)));
    }

    #[test]
    fn test_parse_incident_link() {
        assert_eq!(
            parse_incident_link(" https://example.com/i/1 "),
            Ok("https://example.com/i/1".to_string())
        );
        assert!(parse_incident_link("Q1").is_err());
    }
}
