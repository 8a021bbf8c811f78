// src/view/render.rs
//
// Pure mapping from ResultsState to what any frontend should show.
// Frontends draw a Screen; they never look at the state directly.

use crate::config::consts::*;
use crate::specs::description::{self, DescLine};

use super::state::{CardId, Phase, ResultsState, Selection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub subtitle: String,
    pub list: ListView,
    pub detail: DetailView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// Prompt state: no list at all.
    Hidden,
    Cards(Vec<CardView>),
    /// Search finished with no matches.
    Empty(&'static str),
}

/// Compact summary of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub posted: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    Blank,
    Offer(OfferDetail),
    Message(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferDetail {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub description: Description,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Description {
    Lines(Vec<DescLine>),
    /// Shown when the record has no usable description.
    Fallback(&'static str),
}

pub fn render(state: &ResultsState) -> Screen {
    let Some(query) = state.query() else {
        return Screen {
            title: s!(PROMPT_TITLE),
            subtitle: s!(PROMPT_SUBTITLE),
            list: ListView::Hidden,
            detail: DetailView::Blank,
        };
    };

    Screen {
        title: format!("Resultados para: \"{}\"", query.raw()),
        subtitle: subtitle(state),
        list: list_view(state),
        detail: detail_view(state),
    }
}

fn subtitle(state: &ResultsState) -> String {
    match (state.phase(), state.scope()) {
        (Phase::Done, scope) => {
            let n = state.len();
            let noun = if n == 1 { "resultado" } else { "resultados" };
            match scope {
                Some(city) => format!("{n} {noun} en {city}"),
                None => format!("{n} {noun} en todas las ciudades"),
            }
        }
        (_, Some(city)) => format!("Buscando solo en {city}…"),
        (_, None) => s!(SEARCHING_ALL),
    }
}

fn list_view(state: &ResultsState) -> ListView {
    if state.phase() == Phase::Done && state.is_empty() {
        return ListView::Empty(NO_RESULTS_LIST);
    }
    let selected = state.selected();
    let cards = state
        .ids()
        .zip(state.matches())
        .map(|(id, r)| CardView {
            id,
            title: r.title.clone(),
            organization: r.organization.clone(),
            location: r.location.clone(),
            posted: r.posted.clone(),
            selected: selected == Some(id),
        })
        .collect();
    ListView::Cards(cards)
}

fn detail_view(state: &ResultsState) -> DetailView {
    match state.selection() {
        Selection::Failed(_) => DetailView::Message(DETAIL_LOAD_FAILED),
        Selection::Card(id) => match state.record(id) {
            Some(r) => {
                let lines = description::normalize(&r.description_html);
                let description = if lines.is_empty() {
                    Description::Fallback(NO_DESCRIPTION)
                } else {
                    Description::Lines(lines)
                };
                DetailView::Offer(OfferDetail {
                    title: r.title.clone(),
                    organization: r.organization.clone(),
                    location: r.location.clone(),
                    description,
                })
            }
            None => DetailView::Message(DETAIL_LOAD_FAILED),
        },
        Selection::Nothing if state.phase() == Phase::Done && state.is_empty() => {
            DetailView::Message(NO_RESULTS_DETAIL)
        }
        Selection::Nothing => DetailView::Blank,
    }
}
