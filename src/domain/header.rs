//! Header block splice
//!
//! Pure text transformation: the first [`HEADER_LEN`] lines of a file are
//! dropped and [`HEADER_BLOCK`] takes their place. Nothing here inspects what
//! the dropped lines contained.

use std::borrow::Cow;

/// Number of leading lines replaced by the header block
pub const HEADER_LEN: usize = 7;

/// The include directives, in the order the firmware needs them
pub const HEADER_BLOCK: [&str; HEADER_LEN] = [
    "#include <Arduino.h>\n",
    "#include <WiFi.h>\n",
    "#include <ESPmDNS.h>\n",
    "#include <WiFiUdp.h>\n",
    "#include <ArduinoOTA.h>\n",
    "#include <Preferences.h>\n",
    "#include <Update.h>\n",
];

/// Fold `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Split text on `\n`, keeping each line's terminator.
///
/// The last line may lack a terminator. An empty string has no lines.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Number of lines once every line ending is normalized.
pub fn line_count(content: &str) -> usize {
    split_lines(&normalize_newlines(content)).len()
}

/// Replace the first seven lines of `content` with the header block.
///
/// `\n`, `\r\n` and `\r` all end a line, and every ending is written back
/// as `\n`. Files shorter than seven lines come back as exactly the header
/// block.
pub fn replace_header(content: &str) -> String {
    let text = normalize_newlines(content);
    let mut out = String::with_capacity(text.len() + 160);
    for line in HEADER_BLOCK {
        out.push_str(line);
    }
    for line in split_lines(&text).into_iter().skip(HEADER_LEN) {
        out.push_str(line);
    }
    out
}
