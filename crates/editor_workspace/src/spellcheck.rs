//! Spell checking for both document kinds
//!
//! Text documents report the line and column of each misspelled word;
//! markup documents report the id of the element whose text holds it.

use doc_model::{ElementId, TextDocument, XmlDocument};
use std::collections::HashSet;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Suggestions offered per misspelled word
pub const MAX_SUGGESTIONS: usize = 5;

/// Word lookup used by the spell check traversal
pub trait SpellChecker {
    /// Whether `word` is spelled correctly
    fn check(&self, word: &str) -> bool;

    /// Closest known words, best first
    fn suggest(&self, word: &str, max: usize) -> Vec<String>;
}

/// Where a misspelled word was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLocation {
    /// 1-based line and char column in a text document
    Line { line: usize, column: usize },
    /// Element whose text holds the word
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellIssue {
    pub location: IssueLocation,
    pub word: String,
    pub suggestions: Vec<String>,
}

impl fmt::Display for SpellIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            IssueLocation::Line { line, column } => write!(f, "{line}:{column}")?,
            IssueLocation::Element(id) => write!(f, "[{id}]")?,
        }
        write!(f, " \"{}\" -> ", self.word)?;
        if self.suggestions.is_empty() {
            f.write_str("no suggestions")
        } else {
            f.write_str(&self.suggestions.join(", "))
        }
    }
}

/// Words of `text` with their 1-based char column. Pure numbers are skipped.
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.unicode_word_indices()
        .filter(|(_, word)| word.chars().any(char::is_alphabetic))
        .map(move |(offset, word)| (text[..offset].chars().count() + 1, word))
}

fn issue(checker: &dyn SpellChecker, location: IssueLocation, word: &str) -> SpellIssue {
    SpellIssue {
        location,
        word: word.to_string(),
        suggestions: checker.suggest(word, MAX_SUGGESTIONS),
    }
}

/// Check every line of a text document
pub fn check_text(document: &TextDocument, checker: &dyn SpellChecker) -> Vec<SpellIssue> {
    let mut issues = Vec::new();
    for (index, line) in document.lines().iter().enumerate() {
        for (column, word) in words(line) {
            if !checker.check(word) {
                let location = IssueLocation::Line {
                    line: index + 1,
                    column,
                };
                issues.push(issue(checker, location, word));
            }
        }
    }
    issues
}

/// Check the text of every element, in document order
pub fn check_xml(document: &XmlDocument, checker: &dyn SpellChecker) -> Vec<SpellIssue> {
    let mut issues = Vec::new();
    for element in document.walk() {
        let Some(text) = element.text() else {
            continue;
        };
        for (_, word) in words(text) {
            if !checker.check(word) {
                issues.push(issue(checker, IssueLocation::Element(element.id().clone()), word));
            }
        }
    }
    issues
}

/// In-memory word list with edit-distance suggestions. Case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordListChecker {
    words: HashSet<String>,
}

impl WordListChecker {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = Self::default();
        checker.extend(words);
        checker
    }

    /// Checker seeded with a small list of common English words
    pub fn english() -> Self {
        Self::new(ENGLISH_WORDS.iter())
    }

    /// Add words, one per item
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListChecker {
    fn check(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn suggest(&self, word: &str, max: usize) -> Vec<String> {
        let word = word.to_lowercase();
        let limit = (word.chars().count() / 3).max(1);
        let mut candidates: Vec<(usize, &String)> = self
            .words
            .iter()
            .map(|known| (edit_distance(&word, known), known))
            .filter(|(distance, _)| *distance <= limit)
            .collect();
        candidates.sort();
        candidates.into_iter().take(max).map(|(_, w)| w.clone()).collect()
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr_row[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b.len()]
}

const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "another", "any", "are", "as",
    "at", "author", "back", "be", "because", "been", "before", "being", "between", "book",
    "books", "both", "but", "by", "can", "chapter", "child", "could", "day", "did", "do",
    "document", "does", "done", "down", "each", "edit", "editor", "end", "even", "every",
    "file", "first", "for", "from", "get", "go", "good", "great", "had", "has", "have", "he",
    "hello", "her", "here", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "just", "know", "last", "like", "line", "lines", "little", "long", "look", "made", "make",
    "many", "may", "me", "more", "most", "much", "must", "my", "name", "new", "no", "not",
    "note", "now", "of", "off", "old", "on", "one", "only", "or", "other", "our", "out",
    "over", "own", "page", "part", "people", "price", "read", "right", "said", "same", "see",
    "she", "should", "so", "some", "still", "such", "take", "text", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "thing", "think", "this", "those",
    "through", "time", "title", "to", "too", "two", "under", "up", "us", "use", "very", "was",
    "way", "we", "well", "were", "what", "when", "where", "which", "while", "who", "will",
    "with", "word", "words", "work", "world", "would", "write", "year", "yes", "you", "your",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> WordListChecker {
        WordListChecker::new(["hello", "world", "word", "the", "book"])
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_check_is_case_insensitive() {
        let checker = checker();
        assert!(checker.check("Hello"));
        assert!(!checker.check("helo"));
    }

    #[test]
    fn test_suggestions_ranked_by_distance() {
        let checker = checker();
        assert_eq!(checker.suggest("wrld", 5), ["world"]);
        assert_eq!(checker.suggest("worl", 5), ["word", "world"]);
        assert!(checker.suggest("zzzzzz", 5).is_empty());
    }

    #[test]
    fn test_text_positions() {
        let doc = TextDocument::from_content("Hello wrold\n42 the bok");
        let issues = check_text(&doc, &checker());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].location, IssueLocation::Line { line: 1, column: 7 });
        assert_eq!(issues[0].word, "wrold");
        assert_eq!(issues[1].location, IssueLocation::Line { line: 2, column: 8 });
        assert_eq!(issues[1].suggestions, ["book"]);
    }

    #[test]
    fn test_columns_count_chars() {
        let doc = TextDocument::from_content("héllo wrold");
        let issues = check_text(&doc, &checker());
        let columns: Vec<_> = issues.iter().map(|i| i.location.clone()).collect();
        assert_eq!(
            columns,
            [
                IssueLocation::Line { line: 1, column: 1 },
                IssueLocation::Line { line: 1, column: 7 }
            ]
        );
    }

    #[test]
    fn test_xml_reports_element_ids() {
        let doc = XmlDocument::parse(
            r#"<root id="root"><p id="p1">hello wrold</p><p id="p2">the book</p><p id="p3">bok</p></root>"#,
        )
        .unwrap();
        let issues = check_xml(&doc, &checker());
        let found: Vec<(String, &str)> = issues
            .iter()
            .map(|i| match &i.location {
                IssueLocation::Element(id) => (id.to_string(), i.word.as_str()),
                other => panic!("unexpected location {other:?}"),
            })
            .collect();
        assert_eq!(found, [("p1".to_string(), "wrold"), ("p3".to_string(), "bok")]);
    }

    #[test]
    fn test_display() {
        let issue = SpellIssue {
            location: IssueLocation::Line { line: 2, column: 3 },
            word: "wrold".into(),
            suggestions: vec!["world".into(), "word".into()],
        };
        assert_eq!(issue.to_string(), "2:3 \"wrold\" -> world, word");

        let issue = SpellIssue {
            location: IssueLocation::Element(ElementId::new("t1")),
            word: "qqq".into(),
            suggestions: Vec::new(),
        };
        assert_eq!(issue.to_string(), "[t1] \"qqq\" -> no suggestions");
    }

    #[test]
    fn test_english_list() {
        let checker = WordListChecker::english();
        assert!(checker.check("The"));
        assert!(!checker.is_empty());
    }
}
