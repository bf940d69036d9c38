use crate::model::CommitRecord;
use chrono::NaiveDateTime;
use console::style;
use regex::Regex;
use std::collections::BTreeMap;

/// One or more uppercase letters, a hyphen, one or more digits.
const TICKET_PATTERN: &str = r"\b[A-Z]+-\d+\b";

/// Separator between messages of the same ticket within one day.
const MESSAGE_SEPARATOR: &str = " / ";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses raw log lines for a single day into per-ticket message summaries.
/// Configuration (username, compiled ticket pattern) is captured at
/// construction; parsing itself is a pure transformation over in-memory text.
pub struct LogParser {
    username: String,
    ticket_re: Regex,
}

impl LogParser {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            ticket_re: Regex::new(TICKET_PATTERN).expect("ticket pattern is a valid regex"),
        }
    }

    /// A commit belongs to the user when the configured name is a
    /// case-insensitive substring of the author field. Substring, not
    /// equality, to tolerate author-field variance like
    /// `Jane Doe <jane@x.com>` against a configured `Jane Doe`.
    pub fn attributes_to_user(&self, author: &str) -> bool {
        author.to_lowercase().contains(&self.username)
    }

    /// Parse one `hash|author|timestamp|subject` line. The subject is the
    /// remainder after the third delimiter, so subjects containing `|`
    /// survive intact. Returns `None` for a malformed line (missing fields
    /// or unparseable timestamp).
    pub fn parse_record(line: &str) -> Option<CommitRecord> {
        let mut fields = line.splitn(4, '|');
        let hash = fields.next()?;
        let author = fields.next()?;
        let timestamp = fields.next()?;
        let subject = fields.next()?;

        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;

        Some(CommitRecord {
            hash: hash.to_string(),
            author: author.to_string(),
            timestamp,
            subject: subject.to_string(),
        })
    }

    /// Build the per-day ticket map from one day's raw lines: filter to the
    /// configured user, extract every ticket identifier per subject, strip
    /// all occurrences of the matched literal from the subject, and join
    /// each ticket's messages with `" / "` in commit order.
    ///
    /// Malformed lines are skipped with a warning; they never abort the run
    /// and never leak into the result.
    pub fn parse_day(&self, lines: &[String]) -> BTreeMap<String, String> {
        let mut messages: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let Some(record) = Self::parse_record(line) else {
                eprintln!(
                    "{} skipping malformed log line: {line}",
                    style("warning:").yellow().bold()
                );
                continue;
            };
            if !self.attributes_to_user(&record.author) {
                continue;
            }

            let tickets: Vec<String> = self
                .ticket_re
                .find_iter(&record.subject)
                .map(|m| m.as_str().to_string())
                .collect();

            for ticket in tickets {
                let remainder = record.subject.replace(&ticket, "").trim().to_string();
                messages.entry(ticket).or_default().push(remainder);
            }
        }

        messages
            .into_iter()
            .map(|(ticket, list)| (ticket, list.join(MESSAGE_SEPARATOR)))
            .collect()
    }
}
