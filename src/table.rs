// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builds the dense joining table out of the parsed records.
//!
//! The table covers every code point from the first to the last record.
//! Code points without a record are filled with [`JoiningClass::NonJoining`],
//! which allows the shaper to index it directly with `cp - JOINING_TABLE_FIRST`.

use std::fmt;

use crate::apperr::{Error, Result};
use crate::shaping::{self, JoiningClass, Line, Record};

/// Tables with fewer real records than this (in percent) are rejected.
pub const DEFAULT_MIN_OCCUPANCY: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation<'a> {
    Record(Vec<&'a str>),
    CodePoint(u32),
}

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Annotation::Record(fields) => f.write_str(&fields.join("; ")),
            Annotation::CodePoint(cp) => write!(f, "{cp:04X}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry<'a> {
    pub class: JoiningClass<'a>,
    pub annotation: Annotation<'a>,
    /// Label of the character block that starts at this entry, if any.
    pub block: Option<&'a str>,
}

impl TableEntry<'_> {
    pub fn is_filler(&self) -> bool {
        self.class == JoiningClass::NonJoining
    }
}

#[derive(Debug)]
pub struct JoiningTable<'a> {
    header: Vec<&'a str>,
    entries: Vec<TableEntry<'a>>,
    first: u32,
    last: u32,
    records: usize,
}

impl<'a> JoiningTable<'a> {
    pub fn header(&self) -> &[&'a str] {
        &self.header
    }

    pub fn entries(&self) -> impl Iterator<Item = &TableEntry<'a>> {
        self.entries.iter()
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn occupancy(&self) -> u32 {
        occupancy(self.records, self.first, self.last)
    }
}

/// Returns the percentage of slots in `first..=last` that hold one of the `records`.
pub fn occupancy(records: usize, first: u32, last: u32) -> u32 {
    let len = (last - first) as usize + 1;
    (records * 100 / len) as u32
}

/// Accumulates entries during the scan. Holds the only state that is
/// carried from one line to the next.
#[derive(Default)]
pub struct TableBuilder<'a> {
    entries: Vec<TableEntry<'a>>,
    first: Option<u32>,
    last: Option<u32>,
    records: usize,
    pending_block: Option<&'a str>,
}

impl<'a> TableBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `label` to whichever entry gets pushed next.
    pub fn block(&mut self, label: &'a str) {
        log::debug!("block: {label}");
        self.pending_block = Some(label);
    }

    pub fn push(&mut self, line: usize, record: Record<'a>) -> Result<()> {
        let cp = record.code_point;

        match self.last {
            Some(previous) if cp < previous => {
                return Err(Error::UnsortedInput { line, code_point: cp, previous });
            }
            Some(previous) if cp == previous => {
                return Err(Error::DuplicateCodePoint { line, code_point: cp });
            }
            Some(previous) => self.fill_gap(previous, cp),
            None => self.first = Some(cp),
        }

        let class = shaping::classify(&record);
        self.push_entry(class, Annotation::Record(record.fields));
        self.last = Some(cp);
        self.records += 1;
        Ok(())
    }

    /// Fills the code points strictly between `prev` and `next` with filler entries.
    pub fn fill_gap(&mut self, prev: u32, next: u32) {
        for cp in prev.saturating_add(1)..next {
            self.push_entry(JoiningClass::NonJoining, Annotation::CodePoint(cp));
        }
    }

    fn push_entry(&mut self, class: JoiningClass<'a>, annotation: Annotation<'a>) {
        let block = self.pending_block.take();
        self.entries.push(TableEntry { class, annotation, block });
    }

    pub fn finish(self, header: Vec<&'a str>, min_occupancy: u32) -> Result<JoiningTable<'a>> {
        let (Some(first), Some(last)) = (self.first, self.last) else {
            return Err(Error::EmptyTable);
        };

        debug_assert_eq!(self.entries.len(), (last - first) as usize + 1);
        debug_assert_eq!(self.entries.iter().filter(|e| !e.is_filler()).count(), self.records);

        let occupancy = occupancy(self.records, first, last);
        if occupancy < min_occupancy {
            return Err(Error::SparseTable { occupancy, minimum: min_occupancy });
        }

        Ok(JoiningTable { header, entries: self.entries, first, last, records: self.records })
    }
}

/// Scans an entire `ArabicShaping.txt` file in a single pass.
pub fn build_table(input: &str, min_occupancy: u32) -> Result<JoiningTable<'_>> {
    // Line numbers are 1-based for diagnostics.
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));
    let header = shaping::capture_header(&mut lines)?;

    let mut builder = TableBuilder::new();
    for (line_no, line) in lines {
        match shaping::parse_line(line_no, line)? {
            Line::Record(record) => builder.push(line_no, record)?,
            Line::Block(label) => builder.block(label),
            Line::Skip => {}
        }
    }

    builder.finish(header, min_occupancy)
}
