use serde::Serialize;

use crate::export::export_filename;

/// How many past descriptions the sidebar shows.
pub const DISPLAY_LIMIT: usize = 5;

/// Characters of each past description shown in the sidebar.
pub const PREVIEW_CHARS: usize = 100;

/// One completed discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionResult {
    pub original_text: String,
    pub translated_text: String,
    pub language_code: String,
}

/// A result as kept in the log: its position in the session and the name it
/// downloads under, fixed when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: usize,
    pub filename: String,
    pub result: DescriptionResult,
}

/// Sidebar line for a past description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntryView {
    pub position: usize,
    pub preview: String,
}

/// Results of a session in the order they completed. Only successful
/// requests are ever appended; nothing is removed.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a result under the next id with a fresh export filename.
    pub fn append(&mut self, result: DescriptionResult) -> &HistoryEntry {
        let id = self.entries.len();
        self.entries.push(HistoryEntry {
            id,
            filename: export_filename(),
            result,
        });
        &self.entries[id]
    }

    /// The last `n` results, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn get(&self, id: usize) -> Option<&HistoryEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sidebar(&self) -> Vec<HistoryEntryView> {
        self.recent(DISPLAY_LIMIT)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| HistoryEntryView {
                position: i + 1,
                preview: preview(&entry.result.translated_text),
            })
            .collect()
    }
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> DescriptionResult {
        DescriptionResult {
            original_text: text.to_string(),
            translated_text: text.to_string(),
            language_code: "en".to_string(),
        }
    }

    #[test]
    fn test_empty_log() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert!(log.sidebar().is_empty());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = HistoryLog::new();
        for text in ["first", "second", "third"] {
            log.append(result(text));
        }
        let recent: Vec<&str> = log
            .recent(2)
            .iter()
            .map(|e| e.result.translated_text.as_str())
            .collect();
        assert_eq!(recent, vec!["third", "second"]);
        assert_eq!(log.latest().unwrap().result.translated_text, "third");
    }

    #[test]
    fn test_entries_keep_their_id_and_filename() {
        let mut log = HistoryLog::new();
        let first = log.append(result("Taj Mahal")).clone();
        log.append(result("Petra"));

        assert_eq!(first.id, 0);
        assert_eq!(log.get(0), Some(&first));
        assert_eq!(log.get(1).unwrap().result.translated_text, "Petra");
        assert_ne!(log.get(1).unwrap().filename, first.filename);
        assert!(log.get(2).is_none());
    }

    #[test]
    fn test_sidebar_caps_at_five_but_storage_keeps_all() {
        let mut log = HistoryLog::new();
        for i in 0..12 {
            log.append(result(&format!("entry {}", i)));
        }
        assert_eq!(log.len(), 12);

        let sidebar = log.sidebar();
        assert_eq!(sidebar.len(), DISPLAY_LIMIT);
        assert_eq!(sidebar[0].position, 1);
        assert_eq!(sidebar[0].preview, "entry 11...");
        assert_eq!(sidebar[4].preview, "entry 7...");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let mut log = HistoryLog::new();
        log.append(result(&"é".repeat(150)));
        let view = &log.sidebar()[0];
        assert_eq!(view.preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(view.preview.ends_with("..."));
    }
}
