//! Output for the one-shot `search` subcommand.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Value, json};

use crate::api::{PhotoSummary, SearchPage};

#[cfg(test)]
mod formatters_test;

/// Human-readable listing of a single page.
pub fn format_page_text(query: &str, page: &SearchPage, use_color: bool) -> String {
    if page.photos.is_empty() {
        return format!("No photos found for \"{query}\".");
    }

    let mut output = format!(
        "Page {} of {} ({} results for \"{query}\"):\n",
        page.page, page.page_count, page.total_results
    );
    for photo in &page.photos {
        output.push('\n');
        output.push_str(&format_photo(photo, use_color));
    }
    output
}

fn format_photo(photo: &PhotoSummary, use_color: bool) -> String {
    let title = if photo.title.trim().is_empty() {
        "(untitled)"
    } else {
        photo.title.as_str()
    };
    let thumbnail = photo.thumbnail_url();

    if use_color {
        format!(
            "{} {}\n  {}",
            title.bright_yellow(),
            format!("[{}]", photo.id).dimmed(),
            thumbnail.bright_blue()
        )
    } else {
        format!("{title} [{}]\n  {thumbnail}", photo.id)
    }
}

fn photo_value(photo: &PhotoSummary) -> Value {
    json!({
        "id": photo.id,
        "secret": photo.secret,
        "server": photo.server,
        "farm": photo.farm,
        "title": photo.title,
        "thumbnail_url": photo.thumbnail_url(),
    })
}

fn metadata(query: &str, page: &SearchPage) -> Value {
    json!({
        "query": query,
        "page": page.page,
        "page_count": page.page_count,
        "total_results": page.total_results,
        "returned_count": page.photos.len(),
    })
}

/// One pretty-printed document with the results and paging metadata.
pub fn write_json<W: Write>(writer: &mut W, query: &str, page: &SearchPage) -> io::Result<()> {
    let mut output = metadata(query, page);
    output["results"] = Value::Array(page.photos.iter().map(photo_value).collect());
    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)
}

/// One line per photo, then a `_metadata` line.
pub fn write_jsonl<W: Write>(writer: &mut W, query: &str, page: &SearchPage) -> io::Result<()> {
    for photo in &page.photos {
        serde_json::to_writer(&mut *writer, &photo_value(photo))?;
        writeln!(writer)?;
    }
    serde_json::to_writer(&mut *writer, &json!({ "_metadata": metadata(query, page) }))?;
    writeln!(writer)
}
