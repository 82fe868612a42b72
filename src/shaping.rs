// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Parsing of the `ArabicShaping.txt` Unicode database file.
//!
//! The file starts with a two line description, followed by a longer comment
//! that ends in a row of `#`. Everything after that is one record per line:
//! ```text
//! 0622; ARABIC LETTER ALEF WITH MADDA ABOVE; R; ALEF
//! ```

use std::fmt;

use crate::apperr::{Error, Result};

/// Number of leading lines that describe the database version.
pub const HEADER_LINES: usize = 2;
/// Marks the end of the header comment.
pub const SEPARATOR: &str = "##################";
/// Groups whose shaping depends on the letter identity and not just the joining type.
pub const JOINING_GROUPS: [&str; 2] = ["ALAPH", "DALATH RISH"];

const MAX_CODE_POINT: u32 = 0x10FFFF;
// U+200C ZERO WIDTH NON-JOINER and U+200D ZERO WIDTH JOINER are handled by the shaper itself.
const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub code_point: u32,
    pub joining_type: &'a str,
    pub joining_group: Option<&'a str>,
    /// The trimmed fields of the line, echoed into the generated comment.
    pub fields: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Record(Record<'a>),
    /// A comment naming the character block of the following records.
    Block(&'a str),
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoiningClass<'a> {
    Group(&'a str),
    Type(&'a str),
    /// Filler for code points without a record.
    NonJoining,
}

impl fmt::Display for JoiningClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JoiningClass::Group(name) => {
                f.write_str("JOINING_GROUP_")?;
                for (i, word) in name.split(' ').enumerate() {
                    if i != 0 {
                        f.write_str("_")?;
                    }
                    f.write_str(word)?;
                }
                Ok(())
            }
            JoiningClass::Type(code) => write!(f, "JOINING_TYPE_{code}"),
            JoiningClass::NonJoining => f.write_str("JOINING_TYPE_X"),
        }
    }
}

/// Consumes the description lines and everything up to and including the separator.
///
/// Returns the (trimmed) description lines. `lines` yields `(line_number, text)`
/// pairs and is left positioned at the first line after the separator.
pub fn capture_header<'a, I>(lines: &mut I) -> Result<Vec<&'a str>>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut header = Vec::with_capacity(HEADER_LINES);
    for _ in 0..HEADER_LINES {
        let (_, line) = lines.next().ok_or(Error::MalformedHeader)?;
        header.push(line.trim());
    }

    if !lines.any(|(_, line)| line.contains(SEPARATOR)) {
        return Err(Error::MalformedHeader);
    }

    Ok(header)
}

/// Parses a single line following the header. `line_no` is only used for diagnostics.
pub fn parse_line(line_no: usize, line: &str) -> Result<Line<'_>> {
    if let Some(comment) = line.strip_prefix('#') {
        let comment = comment.trim();
        let is_block = comment.to_ascii_lowercase().contains(" characters");
        return Ok(if is_block { Line::Block(comment) } else { Line::Skip });
    }

    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() == 1 {
        return Ok(Line::Skip);
    }

    let malformed = |reason| Error::MalformedRecord { line: line_no, reason };

    let code_point = u32::from_str_radix(fields[0], 16)
        .ok()
        .filter(|&cp| cp <= MAX_CODE_POINT)
        .ok_or_else(|| malformed("invalid code point"))?;
    if code_point == ZWNJ || code_point == ZWJ {
        log::debug!("skipping U+{code_point:04X}");
        return Ok(Line::Skip);
    }

    let joining_type = match fields.get(2) {
        Some(&t) if !t.is_empty() && t.bytes().all(|b| b.is_ascii_alphanumeric()) => t,
        Some(_) => return Err(malformed("invalid joining type")),
        None => return Err(malformed("missing joining type")),
    };
    let joining_group = fields.get(3).copied().filter(|g| !g.is_empty());

    Ok(Line::Record(Record { code_point, joining_type, joining_group, fields }))
}

pub fn classify<'a>(record: &Record<'a>) -> JoiningClass<'a> {
    match record.joining_group {
        Some(group) if JOINING_GROUPS.contains(&group) => JoiningClass::Group(group),
        _ => JoiningClass::Type(record.joining_type),
    }
}
