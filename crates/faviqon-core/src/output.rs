//! Render fingerprint groups as raw hashes or Shodan dorks.

use std::io::{self, Write};

use crate::aggregate::FingerprintGroups;
use crate::known;

/// What to print per fingerprint group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<fingerprint>` for every group, including `0`.
    #[default]
    Raw,
    /// `org:"target" http.favicon.hash:<fingerprint>` for every group except `0`.
    Dork,
}

/// Formats one line (without newline), or `None` when the mode suppresses it.
///
/// Dork mode skips fingerprint `0` (the hash of an empty body); raw mode keeps it.
pub fn format_line(fingerprint: i32, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Raw => Some(fingerprint.to_string()),
        OutputMode::Dork if fingerprint == 0 => None,
        OutputMode::Dork => Some(format!(
            "org:\"target\" http.favicon.hash:{}",
            fingerprint
        )),
    }
}

/// Writes one line per distinct fingerprint, in map order.
///
/// With `annotate`, lines for well-known fingerprints get a tab and the
/// product name appended.
pub fn render<W: Write>(
    groups: &FingerprintGroups,
    mode: OutputMode,
    annotate: bool,
    out: &mut W,
) -> io::Result<()> {
    for fingerprint in groups.fingerprints() {
        let Some(line) = format_line(fingerprint, mode) else {
            continue;
        };
        match known::product_name(fingerprint).filter(|_| annotate) {
            Some(product) => writeln!(out, "{}\t{}", line, product)?,
            None => writeln!(out, "{}", line)?,
        }
    }
    out.flush()
}
