// src/view/state.rs
use crate::config::options::ArchiveOptions;
use crate::data::{Record, SearchQuery};

/// Handle to one card. Indexes the results arena; cards never carry their
/// record in markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No query given; nothing searched.
    Prompt,
    Searching,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Nothing,
    Card(CardId),
    /// The activated card could not be resolved to a record.
    Failed(CardId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Target was already selected; nothing changed.
    Unchanged,
    Selected,
    /// No record behind the id; the detail panel shows the load failure.
    Missing,
}

/// Matches of one search plus the single selection.
#[derive(Clone, Debug)]
pub struct ResultsState {
    query: Option<SearchQuery>,
    /// Display name of the filtered city, `None` when searching everywhere.
    scope: Option<String>,
    phase: Phase,
    matches: Vec<Record>,
    selection: Selection,
}

impl ResultsState {
    /// Nothing to search for.
    pub fn prompt() -> Self {
        Self {
            query: None,
            scope: None,
            phase: Phase::Prompt,
            matches: Vec::new(),
            selection: Selection::Nothing,
        }
    }

    /// Fresh state for a new search. Previous matches and selection are gone.
    pub fn begin(query: SearchQuery, archive: &ArchiveOptions) -> Self {
        if query.is_empty() {
            return Self::prompt();
        }
        let scope = query.city().map(|slug| {
            archive
                .city(slug)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| s!(slug))
        });
        Self {
            query: Some(query),
            scope,
            phase: Phase::Searching,
            matches: Vec::new(),
            selection: Selection::Nothing,
        }
    }

    /// Append a match; cards keep discovery order. The prompt state holds
    /// no matches, so nothing is added there.
    pub fn push(&mut self, record: Record) -> Option<CardId> {
        if self.phase == Phase::Prompt {
            logd!("Results: dropped a match while in the prompt state");
            return None;
        }
        self.matches.push(record);
        Some(CardId(self.matches.len() - 1))
    }

    /// Settle the search. With matches, the first one ends up selected.
    pub fn complete(&mut self) {
        if self.phase == Phase::Prompt {
            return;
        }
        self.phase = Phase::Done;
        if !self.matches.is_empty() {
            self.select(CardId(0));
        }
    }

    /// Activate a card. Re-activating the current selection is a no-op;
    /// otherwise the previous selection is replaced in a single step.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        match self.selection {
            Selection::Card(cur) | Selection::Failed(cur) if cur == id => {
                return SelectOutcome::Unchanged;
            }
            _ => {}
        }
        if id.0 < self.matches.len() {
            self.selection = Selection::Card(id);
            SelectOutcome::Selected
        } else {
            logd!("Select: no record for card {}", id.0);
            self.selection = Selection::Failed(id);
            SelectOutcome::Missing
        }
    }

    pub fn record(&self, id: CardId) -> Option<&Record> {
        self.matches.get(id.0)
    }

    pub fn selected(&self) -> Option<CardId> {
        match self.selection {
            Selection::Card(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected().and_then(|id| self.record(id))
    }

    pub fn selection(&self) -> Selection { self.selection }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn query(&self) -> Option<&SearchQuery> { self.query.as_ref() }
    pub fn scope(&self) -> Option<&str> { self.scope.as_deref() }
    pub fn matches(&self) -> &[Record] { &self.matches }
    pub fn len(&self) -> usize { self.matches.len() }
    pub fn is_empty(&self) -> bool { self.matches.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = CardId> + use<> {
        (0..self.matches.len()).map(CardId)
    }
}
