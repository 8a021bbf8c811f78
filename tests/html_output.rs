// tests/html_output.rs
//
// Static results page: hostile text comes out escaped, and a written card
// reads back to the same fields.
use offer_finder::config::options::ArchiveOptions;
use offer_finder::core::sanitize::escape_html;
use offer_finder::data::{Record, SearchQuery};
use offer_finder::specs::offers;
use offer_finder::view::{self, html, ResultsState};
use scraper::{Html, Selector};

fn hostile() -> Record {
    Record {
        title: r#"<script>alert("x")</script> Dev & Ops"#.into(),
        organization: "O'Brien <SA>".into(),
        location: "Palermo \"Soho\"".into(),
        posted: "Hace 1 día".into(),
        description_html: r#"<p>- <b>Rust</b> &amp; Go</p><p>Remoto <img src=x onerror=alert(1)></p>"#.into(),
    }
}

fn state_with(record: Record) -> ResultsState {
    let mut st = ResultsState::begin(SearchQuery::new("dev", None), &ArchiveOptions::default());
    st.push(record);
    st.complete();
    st
}

#[test]
fn card_markup_is_escaped_and_reads_back() {
    let rec = hostile();
    let screen = view::render(&state_with(rec.clone()));
    let markup = html::render_list(&screen.list);

    assert!(!markup.contains("<script>"));
    assert!(markup.contains(&escape_html(&rec.title)));
    assert!(markup.contains(r##"href="#""##));
    assert!(markup.contains("box_offer sel"));

    let back = offers::extract(&markup);
    assert_eq!(back.title, rec.title);
    assert_eq!(back.organization, rec.organization);
    assert_eq!(back.location, rec.location);
    assert_eq!(back.posted, rec.posted);
}

#[test]
fn detail_markup_never_carries_source_tags() {
    let screen = view::render(&state_with(hostile()));
    let markup = html::render_detail(&screen.detail);

    assert!(!markup.contains("<img"));
    assert!(!markup.contains("<b>"));
    assert!(markup.contains("• Rust &amp; Go"));
    assert!(markup.contains("Postularme"));
    assert!(markup.contains("O&#039;Brien &lt;SA&gt;"));
}

#[test]
fn detail_markup_reads_back() {
    let rec = hostile();
    let markup = html::render_detail(&view::render(&state_with(rec.clone())).detail);
    let doc = Html::parse_fragment(&markup);
    let text = |css: &str| {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().map(|e| e.text().collect::<String>()).unwrap_or_default()
    };

    assert_eq!(text("p.fs28"), rec.title);
    assert_eq!(text("p.fs22"), rec.organization);
    assert_eq!(text("p.mb15"), rec.location);
    assert_eq!(text("div.mt15 p"), "• Rust & Go");
}

#[test]
fn filled_template_keeps_the_skeleton() {
    let tpl = html::Template::parse(
        "<main><h1><!-- title --></h1><ul><!-- results --></ul><aside><!-- detail --></aside></main>",
    )
    .unwrap();
    let page = tpl.fill(&view::render(&state_with(hostile())));

    assert!(page.starts_with("<main><h1>Resultados para: &quot;dev&quot;</h1>"));
    assert!(!page.contains("<!-- results -->"));
    assert!(!page.contains("<!-- detail -->"));
    assert!(page.ends_with("</aside></main>"));
}

#[test]
fn prompt_page_has_no_cards() {
    let page = html::Template::default().fill(&view::render(&ResultsState::prompt()));
    assert!(!page.contains("box_offer"));
    assert!(page.contains("Volvé al Home"));
}
