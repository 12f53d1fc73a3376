//! Sections and their placement on the page grid.

use serde::{Deserialize, Serialize};

use crate::content::SectionItem;
use crate::error::ModelError;

/// `(column, order)` coordinate of a section. Both indices start at 1.
/// Gaps and duplicates are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlacementRepr")]
pub struct Placement {
    column: u32,
    order: u32,
}

#[derive(Deserialize)]
struct PlacementRepr {
    column: u32,
    order: u32,
}

impl TryFrom<PlacementRepr> for Placement {
    type Error = ModelError;

    fn try_from(repr: PlacementRepr) -> Result<Self, Self::Error> {
        Placement::new(repr.column, repr.order)
    }
}

impl Placement {
    pub fn new(column: u32, order: u32) -> Result<Self, ModelError> {
        if column == 0 || order == 0 {
            return Err(ModelError::InvalidPlacement { column, order });
        }
        Ok(Self { column, order })
    }

    /// Column 1 at `order`; an `order` of 0 is clamped to 1.
    pub fn first_column(order: u32) -> Self {
        Self { column: 1, order: order.max(1) }
    }

    /// Column 2 at `order`; an `order` of 0 is clamped to 1.
    pub fn second_column(order: u32) -> Self {
        Self { column: 2, order: order.max(1) }
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self { column: 1, order: 1 }
    }
}

/// A titled block of items. Built with the `with_*` methods, read-only
/// once it is attached to a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    title: String,
    #[serde(default)]
    position: Placement,
    #[serde(default)]
    contents: Vec<SectionItem>,
    #[serde(skip)]
    ignored: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, position: Placement) -> Self {
        Self {
            title: title.into(),
            position,
            contents: vec![],
            ignored: false,
        }
    }

    pub fn with_item(mut self, item: impl Into<SectionItem>) -> Self {
        self.contents.push(item.into());
        self
    }

    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SectionItem>,
    {
        self.contents.extend(items.into_iter().map(Into::into));
        self
    }

    /// Puts `separator` between every pair of neighbouring items.
    pub fn separated_with(mut self, separator: SectionItem) -> Self {
        let items = std::mem::take(&mut self.contents);
        let count = items.len();
        for (index, item) in items.into_iter().enumerate() {
            self.contents.push(item);
            if index + 1 < count {
                self.contents.push(separator.clone());
            }
        }
        self
    }

    /// Keeps the section in the document but out of layout queries.
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Placement {
        self.position
    }

    pub fn items(&self) -> &[SectionItem] {
        &self.contents
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placement_rejects_zero() {
        assert!(Placement::new(1, 1).is_ok());
        assert!(Placement::new(3, 7).is_ok());
        assert!(matches!(Placement::new(0, 1), Err(ModelError::InvalidPlacement { column: 0, order: 1 })));
        assert!(Placement::new(1, 0).is_err());
    }

    #[test]
    fn test_column_helpers() {
        assert_eq!(Placement::first_column(3), Placement::new(1, 3).unwrap());
        assert_eq!(Placement::second_column(2), Placement::new(2, 2).unwrap());
        assert_eq!(Placement::second_column(0).order(), 1);
    }

    #[test]
    fn test_separated_with() {
        let section = Section::new("Tags", Placement::default())
            .with_items([SectionItem::tag("a"), SectionItem::tag("b"), SectionItem::tag("c")])
            .separated_with(SectionItem::Divider);

        let kinds: Vec<_> = section.items().iter().map(|i| i.kind().discriminator()).collect();
        assert_eq!(kinds, vec!["TAG", "DIVIDER", "TAG", "DIVIDER", "TAG"]);

        let empty = Section::new("Empty", Placement::default()).separated_with(SectionItem::Divider);
        assert!(empty.items().is_empty());

        let single = Section::new("One", Placement::default())
            .with_item(SectionItem::tag("a"))
            .separated_with(SectionItem::NewLine);
        assert_eq!(single.items().len(), 1);
    }

    #[test]
    fn test_section_json() {
        let section = Section::new("SectionA", Placement::first_column(3))
            .with_item(SectionItem::tag("tag1"))
            .with_item(SectionItem::NewLine)
            .ignored();

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "SectionA",
                "position": {"column": 1, "order": 3},
                "contents": [{"type": "TAG", "content": "tag1"}, {"type": "NEWLINE"}]
            })
        );
    }

    #[test]
    fn test_section_parse() {
        let section: Section = serde_json::from_value(json!({
            "title": "SectionB",
            "contents": [{"type": "TAG", "content": "T1"}, {"type": "DIVIDER"}, {"type": "TAG", "content": "T2"}],
            "position": {"column": 2, "order": 3}
        }))
        .unwrap();

        assert_eq!(section.title(), "SectionB");
        assert_eq!(section.position(), Placement::new(2, 3).unwrap());
        assert_eq!(section.items(), &[SectionItem::tag("T1"), SectionItem::Divider, SectionItem::tag("T2")]);
        assert!(!section.is_ignored());

        let bad = serde_json::from_value::<Section>(json!({
            "title": "X", "position": {"column": 0, "order": 1}
        }));
        assert!(bad.is_err());
    }
}
