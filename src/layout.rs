//! Layout Placement
//!
//! Read-only views over a section list. Nothing here mutates or reorders the
//! resume itself; the serializer keeps declaration order.

use std::collections::BTreeMap;

use crate::section::Section;

#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    sections: &'a [Section],
}

impl<'a> Layout<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self { sections }
    }

    fn placed(&self) -> impl Iterator<Item = &'a Section> + 'a {
        let sections = self.sections;
        sections.iter().filter(|section| !section.is_ignored())
    }

    /// Sections of column `n` by `order`; ties keep declaration order.
    pub fn column(&self, n: u32) -> Vec<&'a Section> {
        let mut column: Vec<_> = self.placed().filter(|s| s.position().column() == n).collect();
        column.sort_by_key(|s| s.position().order());
        column
    }

    pub fn columns(&self) -> BTreeMap<u32, Vec<&'a Section>> {
        let mut columns: BTreeMap<u32, Vec<&'a Section>> = BTreeMap::new();
        for section in self.placed() {
            columns.entry(section.position().column()).or_default().push(section);
        }
        for column in columns.values_mut() {
            column.sort_by_key(|s| s.position().order());
        }
        columns
    }

    /// Column-major reading order.
    pub fn linearize(&self) -> Vec<&'a Section> {
        let mut all: Vec<_> = self.placed().collect();
        all.sort_by_key(|s| (s.position().column(), s.position().order()));
        all
    }

    /// Highest column index in use, 0 when nothing is placed.
    pub fn column_count(&self) -> u32 {
        self.placed().map(|s| s.position().column()).max().unwrap_or(0)
    }
}
