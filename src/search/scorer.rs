use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::search::engine::Candidate;

const TITLE_EXACT: u32 = 50;
const TITLE_SUBSTRING: u32 = 25;
const TITLE_HALF_PREFIX: u32 = 10;
const BODY_PER_OCCURRENCE: u32 = 3;
const BODY_OCCURRENCE_CAP: u32 = 15;
const BODY_CONTAINS: u32 = 8;
const EXCERPT_CONTAINS: u32 = 12;
const TAG_CONTAINS: u32 = 6;
const RECENCY_BONUS: u32 = 5;
const RECENCY_WINDOW_DAYS: i64 = 30;

/// Compute the relevance score of one candidate against a search query.
///
/// The query is whitespace-tokenized and lowercased here; pass it trimmed
/// but otherwise untouched. `body_text` is the extracted plain text of the
/// candidate's content, empty for non-hydrated candidates.
///
/// Weighting, per query word:
/// - title: +50 exact match, else +25 substring, else +10 when the title
///   contains the first half of the word (first match wins);
/// - body: 3 per occurrence capped at 15, plus a flat +8 when the word
///   occurs at all (both applied);
/// - excerpt: +12 when containing the word;
/// - tag-like fields: +6 per (tag, word) containment pair.
/// Plus a single +5 when the candidate was published within the last 30
/// days. The title branch is exclusive while the body branch stacks; that
/// asymmetry is kept as-is for compatibility with the ranking the site
/// already shows (see DESIGN.md).
pub fn score(item: &Candidate, query: &str, body_text: &str) -> u32 {
    let query_words: Vec<String> = query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();

    let title = item.title.to_lowercase();
    let excerpt = item.excerpt.to_lowercase();
    let body = body_text.to_lowercase();
    let tags: Vec<String> = item
        .tag_like()
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    let mut total: u32 = 0;

    for word in &query_words {
        if title == *word {
            total += TITLE_EXACT;
        } else if title.contains(word.as_str()) {
            total += TITLE_SUBSTRING;
        } else if title.contains(&half_prefix(word)) {
            total += TITLE_HALF_PREFIX;
        }

        let occurrences = body.matches(word.as_str()).count() as u32;
        total += (occurrences * BODY_PER_OCCURRENCE).min(BODY_OCCURRENCE_CAP);
        if occurrences > 0 {
            total += BODY_CONTAINS;
        }

        if excerpt.contains(word.as_str()) {
            total += EXCERPT_CONTAINS;
        }

        for tag in &tags {
            if tag.contains(word.as_str()) {
                total += TAG_CONTAINS;
            }
        }
    }

    if published_recently(&item.date, Utc::now()) {
        total += RECENCY_BONUS;
    }

    total
}

/// First ⌊len/2⌋ characters of a word. For a one-character word this is the
/// empty string, which every title contains; kept to match the ranking the
/// site already ships.
fn half_prefix(word: &str) -> String {
    let half = word.chars().count() / 2;
    word.chars().take(half).collect()
}

fn published_recently(date: &str, now: DateTime<Utc>) -> bool {
    match parse_timestamp(date) {
        Some(published) => published > now - Duration::days(RECENCY_WINDOW_DAYS),
        // Unparseable dates simply earn no bonus.
        None => false,
    }
}

/// Parse an ISO-8601 timestamp, accepting both full RFC 3339 strings and
/// bare dates (which the content service emits for date-only properties).
pub fn parse_timestamp(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
