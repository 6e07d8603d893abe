use std::{collections::BTreeMap, io::Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tokcursor::Cursor;
use tracing::debug;

use crate::config::OutputFormat;

/// Everything a cursor exposes, in a stable field order for JSON output.
#[derive(Serialize)]
struct CursorReport<'a> {
    token: &'a str,
    raw_token: &'a str,
    page_size: i32,
    string: String,
    key: String,
    key_values: BTreeMap<&'a str, &'a str>,
}

impl<'a> CursorReport<'a> {
    fn new(cursor: &'a Cursor) -> Self {
        Self {
            token: cursor.token(),
            raw_token: cursor.raw_token(),
            page_size: cursor.page_size(),
            string: cursor.to_string(),
            key: cursor.key(),
            key_values: cursor
                .key_values()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "token:     {}", self.token)?;
        writeln!(out, "raw_token: {}", self.raw_token)?;
        writeln!(out, "page_size: {}", self.page_size)?;
        writeln!(out, "string:    {}", self.string)?;
        writeln!(out, "key:       {}", self.key)?;
        for (k, v) in &self.key_values {
            writeln!(out, "  {k} = {v}")?;
        }
        Ok(())
    }
}

fn write_json(cursor: &Cursor, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &CursorReport::new(cursor))?;
    writeln!(out)?;
    Ok(())
}

pub fn run_encode(
    plaintext: &str,
    page_size: i32,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let cursor = Cursor::from_plaintext(plaintext, page_size)
        .with_context(|| format!("could not encode cursor token {plaintext:?}"))?;
    debug!(key = %cursor.key(), "encoded cursor");
    match output {
        OutputFormat::Text => writeln!(out, "{}", cursor.raw_token())?,
        OutputFormat::Json => write_json(&cursor, out)?,
    }
    Ok(())
}

pub fn run_decode(
    token: &str,
    page_size: i32,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let cursor = Cursor::from_base64(token, page_size)
        .with_context(|| format!("could not decode cursor token {token:?}"))?;
    match output {
        OutputFormat::Text => CursorReport::new(&cursor).write_text(out),
        OutputFormat::Json => write_json(&cursor, out),
    }
}

pub fn run_key(
    token: &str,
    plain: bool,
    page_size: i32,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let cursor = if plain {
        Cursor::from_plaintext(token, page_size)
    } else {
        Cursor::from_base64(token, page_size)
    }
    .with_context(|| format!("could not read cursor token {token:?}"))?;
    match output {
        OutputFormat::Text => writeln!(out, "{}", cursor.key())?,
        OutputFormat::Json => write_json(&cursor, out)?,
    }
    Ok(())
}
