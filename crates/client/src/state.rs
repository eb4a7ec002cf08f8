//! Session-scoped item collection state.
//!
//! One value of [`SessionState`] is the single authoritative in-session
//! copy of the catalog. It is only ever mutated through the closed set of
//! transitions below (refresh application plus the add/update/delete/
//! replace reducers); callers never poke at the collection directly.
//!
//! Refreshes are guarded against staleness: [`SessionState::begin_refresh`]
//! hands out a generation-stamped ticket, and a result delivered under a
//! superseded ticket is ignored instead of clobbering newer state.

use trove_core::{ApiEnvelope, Item, ItemId};

use crate::fallback::sample_items;

/// Lifecycle of the session collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    ReadyWithFallback,
}

/// Proof that a refresh was started; carries the generation it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTicket {
    generation: u64,
}

/// The in-session authoritative item collection.
#[derive(Debug)]
pub struct SessionState {
    items: Vec<Item>,
    phase: Phase,
    advisory: Option<String>,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
            advisory: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Non-fatal advisory (e.g. "demo data in use"); never a blocking error.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Enter `Loading` and start a new refresh generation. Any ticket from
    /// an earlier call is superseded from this point on.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.advisory = None;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the list fetch started with `ticket`.
    ///
    /// A non-empty successful response replaces the collection and lands in
    /// `Ready`. A failed response or an empty collection falls back to the
    /// built-in sample dataset (`ReadyWithFallback`), with an advisory
    /// recorded when the fetch actually failed.
    ///
    /// Returns `false` when the ticket was superseded and the result was
    /// ignored.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        response: ApiEnvelope<Vec<Item>>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale refresh result"
            );
            return false;
        }

        match response {
            ApiEnvelope {
                success: true,
                data: Some(items),
                ..
            } if !items.is_empty() => {
                self.items = items;
                self.phase = Phase::Ready;
                self.advisory = None;
            }
            ApiEnvelope { success: true, .. } => {
                self.items = sample_items();
                self.phase = Phase::ReadyWithFallback;
                self.advisory = None;
            }
            ApiEnvelope { .. } => {
                self.items = sample_items();
                self.phase = Phase::ReadyWithFallback;
                self.advisory = Some("Using demo data - backend not available".to_string());
            }
        }
        true
    }

    /// Append an item (authoritative server record, or a locally
    /// synthesized fallback — the caller decides which, this does not).
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replace the record with the same id, if present.
    pub fn update_item(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        }
    }

    /// Drop the record with `id`, if present.
    pub fn delete_item(&mut self, id: &ItemId) {
        self.items.retain(|i| i.id != *id);
    }

    /// Replace the whole collection.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trove_core::ItemType;

    fn item(name: &str) -> Item {
        Item {
            id: ItemId::new(),
            name: name.to_string(),
            item_type: ItemType::Other,
            description: "desc".to_string(),
            cover_image: "/uploads/c.png".to_string(),
            additional_images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn successful_nonempty_fetch_lands_in_ready() {
        let mut state = SessionState::new();
        let ticket = state.begin_refresh();
        assert_eq!(state.phase(), Phase::Loading);

        let applied = state.finish_refresh(ticket, ApiEnvelope::ok(vec![item("server item")]));
        assert!(applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.items().len(), 1);
        assert!(state.advisory().is_none());
    }

    #[test]
    fn empty_fetch_falls_back_to_the_three_sample_items() {
        let mut state = SessionState::new();
        let ticket = state.begin_refresh();

        state.finish_refresh(ticket, ApiEnvelope::ok(Vec::new()));
        assert_eq!(state.phase(), Phase::ReadyWithFallback);
        assert_eq!(state.items().len(), 3);
        // Empty-but-successful is a silent fallback.
        assert!(state.advisory().is_none());
    }

    #[test]
    fn failed_fetch_falls_back_with_an_advisory() {
        let mut state = SessionState::new();
        let ticket = state.begin_refresh();

        state.finish_refresh(ticket, ApiEnvelope::failure("Network error occurred"));
        assert_eq!(state.phase(), Phase::ReadyWithFallback);
        assert_eq!(state.items().len(), 3);
        assert_eq!(
            state.advisory(),
            Some("Using demo data - backend not available")
        );
    }

    #[test]
    fn stale_refresh_result_is_ignored() {
        let mut state = SessionState::new();
        let stale = state.begin_refresh();
        let fresh = state.begin_refresh();

        assert!(state.finish_refresh(fresh, ApiEnvelope::ok(vec![item("fresh")])));
        assert_eq!(state.phase(), Phase::Ready);

        // The superseded result arrives late; nothing changes.
        let applied = state.finish_refresh(stale, ApiEnvelope::failure("slow response"));
        assert!(!applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].name, "fresh");
    }

    #[test]
    fn reducers_mutate_the_collection_purely_by_id() {
        let mut state = SessionState::new();
        let a = item("a");
        let b = item("b");
        state.replace_all(vec![a.clone(), b.clone()]);

        let mut a_renamed = a.clone();
        a_renamed.name = "a2".to_string();
        state.update_item(a_renamed);
        assert_eq!(state.items()[0].name, "a2");
        assert_eq!(state.items()[1].name, "b");

        state.delete_item(&b.id);
        assert_eq!(state.items().len(), 1);

        state.add_item(item("c"));
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[1].name, "c");
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut state = SessionState::new();
        state.replace_all(vec![item("only")]);
        state.update_item(item("stranger"));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].name, "only");
    }
}
