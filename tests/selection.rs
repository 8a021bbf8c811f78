// tests/selection.rs
//
// Card activation without any frontend: exactly one selected card, and
// repeated activation changes nothing.
use offer_finder::config::options::ArchiveOptions;
use offer_finder::data::{Record, SearchQuery};
use offer_finder::view::{self, CardId, DetailView, ListView, ResultsState, SelectOutcome, Selection};

fn results(titles: &[&str]) -> ResultsState {
    let mut st = ResultsState::begin(SearchQuery::new("x", None), &ArchiveOptions::default());
    for t in titles {
        st.push(Record {
            title: (*t).into(),
            organization: "Org".into(),
            location: "Lugar".into(),
            description_html: "<p>Texto</p>".into(),
            ..Record::default()
        });
    }
    st.complete();
    st
}

fn selected_cards(st: &ResultsState) -> Vec<CardId> {
    match view::render(st).list {
        ListView::Cards(cards) => cards.into_iter().filter(|c| c.selected).map(|c| c.id).collect(),
        _ => vec![],
    }
}

#[test]
fn first_card_is_selected_on_completion() {
    let st = results(&["A", "B", "C"]);
    assert_eq!(st.selected(), Some(CardId(0)));
    assert_eq!(selected_cards(&st), vec![CardId(0)]);
}

#[test]
fn selecting_moves_the_single_highlight() {
    let mut st = results(&["A", "B", "C"]);
    assert_eq!(st.select(CardId(2)), SelectOutcome::Selected);
    assert_eq!(selected_cards(&st), vec![CardId(2)]);
    assert_eq!(st.selected_record().map(|r| r.title.as_str()), Some("C"));

    match view::render(&st).detail {
        DetailView::Offer(d) => assert_eq!(d.title, "C"),
        other => panic!("unexpected detail {other:?}"),
    }
}

#[test]
fn reselecting_is_idempotent() {
    let mut st = results(&["A", "B"]);
    st.select(CardId(1));
    let before = view::render(&st);

    assert_eq!(st.select(CardId(1)), SelectOutcome::Unchanged);
    assert_eq!(view::render(&st), before);
}

#[test]
fn missing_record_clears_highlight_and_reports_failure() {
    let mut st = results(&["A"]);
    assert_eq!(st.select(CardId(5)), SelectOutcome::Missing);
    assert_eq!(st.selection(), Selection::Failed(CardId(5)));
    assert!(selected_cards(&st).is_empty());
    assert!(matches!(view::render(&st).detail, DetailView::Message(_)));

    // recovers on the next valid activation
    assert_eq!(st.select(CardId(0)), SelectOutcome::Selected);
    assert_eq!(selected_cards(&st), vec![CardId(0)]);
}

#[test]
fn new_search_discards_previous_results() {
    let st = results(&["A", "B"]);
    assert_eq!(st.len(), 2);

    let fresh = ResultsState::begin(SearchQuery::new("y", None), &ArchiveOptions::default());
    assert!(fresh.is_empty());
    assert_eq!(fresh.selection(), Selection::Nothing);
}

#[test]
fn prompt_state_takes_no_matches() {
    let mut st = ResultsState::prompt();
    assert_eq!(st.push(Record::default()), None);
    assert!(st.is_empty());

    st.complete();
    assert_eq!(st.selection(), Selection::Nothing);
    assert_eq!(view::render(&st).list, ListView::Hidden);
}
