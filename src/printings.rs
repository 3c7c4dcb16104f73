use indexmap::IndexMap;
use serde::Deserialize;

use crate::card::RawCard;

/// Sections keyed by set code, in the order they appear in the source file.
pub type Sections = IndexMap<String, Section>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

impl Section {
    pub fn new(cards: Vec<RawCard>) -> Self {
        Self { cards }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub date: Option<String>,
    pub version: Option<String>,
}

/// An `AllPrintings`-style document: `{ "meta": {..}, "data": { "<SET>": { "cards": [..] } } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Printings {
    pub meta: Option<Meta>,
    pub data: Sections,
}

impl Printings {
    pub fn total_cards(&self) -> usize {
        self.data.values().map(|section| section.cards.len()).sum()
    }

    /// Keeps only the named sections, preserving source order.
    pub fn retain_sections(&mut self, names: &[String]) {
        for name in names {
            if !self.data.contains_key(name) {
                warn!("Section {} not present in source", name);
            }
        }

        self.data.retain(|code, _| names.contains(code));
    }
}
