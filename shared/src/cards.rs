//! Card collection store.
//!
//! An ordered sequence of cards in server order. New cards go to the front;
//! replacements happen in place so the order a user sees never shifts under
//! a like or unlike. Card ids are unique within the collection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{Card, CardId};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Replaces the whole sequence. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        let mut seen = HashSet::with_capacity(cards.len());
        let before = cards.len();
        self.cards = cards
            .into_iter()
            .filter(|card| seen.insert(card.id.clone()))
            .collect();

        if self.cards.len() != before {
            tracing::warn!(
                dropped = before - self.cards.len(),
                "card list contained duplicate ids"
            );
        }
    }

    /// Inserts at index 0. A stale entry with the same id is removed first.
    pub fn prepend(&mut self, card: Card) {
        if self.remove_by_id(&card.id).is_some() {
            tracing::warn!(card_id = %card.id, "prepended card replaced an existing entry");
        }
        self.cards.insert(0, card);
    }

    /// Removes the card with `id`. Absent ids are not an error.
    pub fn remove_by_id(&mut self, id: &CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Substitutes the card with `id` at its current index. Returns `false`
    /// when no such card is stored.
    pub fn replace_by_id(&mut self, id: &CardId, card: Card) -> bool {
        match self.position(id) {
            Some(index) => {
                self.cards[index] = card;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }
}
