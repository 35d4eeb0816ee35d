use serde::{Deserialize, Serialize};

use super::slide::SlideType;

/// Coarse per-slide plan produced before content expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slide_type: SlideType,
}

impl OutlineItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        slide_type: SlideType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            slide_type,
        }
    }
}

/// One row of a submitted outline editor form.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEdit {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub slide_type: SlideType,
    pub remove: bool,
}

/// Apply editor rows to an outline. Rows that point past the end are
/// ignored; removals are applied after edits so indices stay stable.
pub fn apply_edits(outline: &mut Vec<OutlineItem>, edits: &[OutlineEdit]) {
    for edit in edits {
        if let Some(item) = outline.get_mut(edit.index) {
            item.title = edit.title.trim().to_string();
            item.description = edit.description.trim().to_string();
            item.slide_type = edit.slide_type;
        }
    }

    let mut index = 0;
    outline.retain(|_| {
        let removed = edits.iter().any(|e| e.index == index && e.remove);
        index += 1;
        !removed
    });
}

/// Swap an item with its neighbour. Returns false when the move would leave
/// the outline bounds.
pub fn move_item(outline: &mut [OutlineItem], index: usize, up: bool) -> bool {
    let target = if up { index.checked_sub(1) } else { Some(index + 1) };
    match target {
        Some(t) if t < outline.len() && index < outline.len() => {
            outline.swap(index, t);
            true
        }
        _ => false,
    }
}
