use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    card::{OutputCard, RawCard},
    printings::Sections,
};

/// Concatenates every section's cards in section order.
pub fn flatten(sections: Sections) -> Vec<RawCard> {
    sections
        .into_values()
        .flat_map(|section| section.cards)
        .collect_vec()
}

/// Drops every card whose name was already seen, keeping the first printing.
pub fn deduplicate(cards: Vec<RawCard>) -> Vec<RawCard> {
    let mut seen = HashSet::with_capacity(cards.len());

    cards
        .into_iter()
        .filter(|card| {
            if seen.insert(card.name.clone()) {
                true
            } else {
                debug!("Dropping duplicate {}", card.name);
                false
            }
        })
        .collect_vec()
}

pub fn project(card: RawCard) -> OutputCard {
    card.into()
}

pub fn run(sections: Sections) -> Vec<OutputCard> {
    let cards = flatten(sections);
    info!("Total cards in source: {}", cards.len());

    let cards = deduplicate(cards);
    info!("Total cards after deduplication: {}", cards.len());

    cards.into_iter().map(project).collect_vec()
}
