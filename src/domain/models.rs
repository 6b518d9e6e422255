// Domain types shared by the HTTP layer, the store and the seed loader

use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

/// Kind of catalog item a progress flag or bookmark points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[oai(rename_all = "snake_case")]
pub enum ItemType {
    Lesson,
    Theory,
    SheetMusic,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lesson => "lesson",
            ItemType::Theory => "theory",
            ItemType::SheetMusic => "sheet_music",
        }
    }
}

/// One paragraph of lesson, theory or care-guide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct ContentBlock {
    /// text, heading, tip, exercise, step or warning
    #[serde(rename = "type")]
    #[oai(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_strings_match_stored_values() {
        assert_eq!(ItemType::Lesson.as_str(), "lesson");
        assert_eq!(ItemType::Theory.as_str(), "theory");
        assert_eq!(ItemType::SheetMusic.as_str(), "sheet_music");
    }

    #[test]
    fn content_block_uses_type_key() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"tip","value":"Use a metronome"}"#).unwrap();
        assert_eq!(block.kind, "tip");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            serde_json::json!({"type": "tip", "value": "Use a metronome"})
        );
    }
}
