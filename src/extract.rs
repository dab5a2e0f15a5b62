//! Pulls the suggested code and explanation out of a free-text model reply.
//! - Opening fence: "```<language>" first, then a bare "```"
//! - Closing fence: the next bare "```" after the opening one
//! - Explanation: everything after the first "Explanation:" past the closing fence
//!
//! Marker search is first-match substring scanning, nothing more.

use thiserror::Error;
use tracing::{debug, warn};

const FENCE: &str = "```";
const EXPLANATION_MARKER: &str = "Explanation:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub code: String,
    pub explanation: String,
}

/// The reply did not have the expected shape. `raw` is for logs only.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ParseError {
    pub reason: &'static str,
    pub raw: String,
}

impl ParseError {
    fn new(reason: &'static str, raw: &str) -> Self {
        Self {
            reason,
            raw: raw.to_string(),
        }
    }
}

pub fn extract(reply: &str, language: Option<&str>) -> Result<Extracted, ParseError> {
    debug!("Raw reply from model: {}", reply);

    let tagged = language.filter(|l| !l.trim().is_empty()).map(|l| format!("{FENCE}{l}"));
    let markers = tagged.iter().map(String::as_str).chain(std::iter::once(FENCE));

    let mut fenced = None;
    for marker in markers {
        let Some(start) = reply.find(marker) else {
            continue;
        };
        let body_start = start + marker.len();
        if let Some(len) = reply[body_start..].find(FENCE) {
            fenced = Some((body_start, body_start + len));
            break;
        }
    }

    let Some((body_start, body_end)) = fenced else {
        warn!("No fenced code block found in model reply");
        return Err(ParseError::new("Could not find a fenced code block", reply));
    };

    let code = reply[body_start..body_end].trim();

    let explanation = reply[body_end..]
        .find(EXPLANATION_MARKER)
        .map(|pos| reply[body_end + pos + EXPLANATION_MARKER.len()..].trim());

    let Some(explanation) = explanation else {
        warn!("No Explanation: marker found after the code block");
        return Err(ParseError::new("Could not find the Explanation: section", reply));
    };

    if code.is_empty() || explanation.is_empty() {
        warn!(
            "Empty section in model reply (code: {}, explanation: {})",
            !code.is_empty(),
            !explanation.is_empty()
        );
        return Err(ParseError::new("Could not parse response format correctly", reply));
    }

    Ok(Extracted {
        code: code.to_string(),
        explanation: explanation.to_string(),
    })
}
