// src/output/mod.rs
// =============================================================================
// This module writes the crawl results.
//
// Two pieces:
// - open_sink(): where the lines go (a freshly truncated file, or stdout)
// - ReportWriter: how a page's ranked words are written to that sink
//
// Text format (default), for every ranked word of every page:
//   cat: 2
//   cat
//   Cat
//   ...            <- the word's 11 password guesses, one per line
//
// JSON format (--json), one object per line:
//   {"page":"https://...","word":"cat","count":2,"mutations":["cat","Cat",...]}
//
// The sink is flushed after each page, so if a later page fails the lines
// already written are not lost.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CrawlError;
use crate::words::{mutate, RankedEntry};

// Opens the output destination
//
// Parameters:
//   path: Some(file) to write to a file, None for stdout
//
// An existing file is truncated right away, before anything is crawled.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>, CrawlError> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

// One JSON output line
#[derive(Serialize)]
struct WordRecord<'a> {
    page: &'a str,
    #[serde(flatten)]
    entry: &'a RankedEntry,
    mutations: Vec<String>,
}

pub struct ReportWriter<W: Write> {
    sink: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        Self { sink, format }
    }

    // Writes every ranked word of one page, in rank order, then flushes
    //
    // Returns: how many ranked words were written
    pub fn write_page(&mut self, page_url: &str, ranked: &[RankedEntry]) -> Result<usize, CrawlError> {
        for entry in ranked {
            match self.format {
                OutputFormat::Text => {
                    writeln!(self.sink, "{}: {}", entry.word, entry.count)?;
                    for guess in mutate(&entry.word) {
                        writeln!(self.sink, "{}", guess)?;
                    }
                }
                OutputFormat::Json => {
                    let record = WordRecord {
                        page: page_url,
                        entry,
                        mutations: mutate(&entry.word),
                    };
                    serde_json::to_writer(&mut self.sink, &record).map_err(io::Error::from)?;
                    writeln!(self.sink)?;
                }
            }
        }

        self.sink.flush()?;
        Ok(ranked.len())
    }

    // Gives back the sink, so tests can read what was written
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn entry(word: &str, count: usize) -> RankedEntry {
        RankedEntry {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_text_format_writes_count_then_mutations() {
        let mut report = ReportWriter::new(Vec::new(), OutputFormat::Text);
        let written = report
            .write_page("https://example.com", &[entry("cat", 2), entry("dog", 1)])
            .unwrap();
        assert_eq!(written, 2);

        let output = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2 * 12);
        assert_eq!(lines[0], "cat: 2");
        let guesses = mutate("cat");
        assert_eq!(lines[1..12].to_vec(), guesses.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(lines[12], "dog: 1");
        assert_eq!(lines[23], "Summerdog2021!");
    }

    #[test]
    fn test_json_format_writes_one_object_per_word() {
        let mut report = ReportWriter::new(Vec::new(), OutputFormat::Json);
        report.write_page("https://example.com/a", &[entry("Summer", 3)]).unwrap();

        let output = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["page"], "https://example.com/a");
        assert_eq!(value["word"], "Summer");
        assert_eq!(value["count"], 3);
        assert_eq!(value["mutations"].as_array().unwrap().len(), 11);
        assert_eq!(value["mutations"][10], "SummerSummer2021!");
    }

    #[test]
    fn test_empty_page_writes_nothing() {
        let mut report = ReportWriter::new(Vec::new(), OutputFormat::Text);
        assert_eq!(report.write_page("https://example.com", &[]).unwrap(), 0);
        assert!(report.into_inner().is_empty());
    }

    #[test]
    fn test_open_sink_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "old contents from a previous run\n").unwrap();

        let sink = open_sink(Some(path.as_path())).unwrap();
        drop(sink);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let mut report = ReportWriter::new(open_sink(Some(path.as_path())).unwrap(), OutputFormat::Text);
        report.write_page("https://example.com", &[entry("cat", 1)]).unwrap();
        drop(report);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("cat: 1\ncat\nCat\n"));
    }

    #[test]
    fn test_open_sink_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("words.txt");
        let result = open_sink(Some(path.as_path()));
        assert!(matches!(result, Err(CrawlError::Sink(_))));
    }
}
