// src/view/html.rs
//
// Screen → markup for a static results page. Card and detail markup follow
// the archive's own listing convention, so a written card can be read back
// by `specs::offers`.

use crate::config::consts::{APPLY_LABEL, DETAIL_SLOT, RESULTS_SLOT};
use crate::core::sanitize::escape_html;
use crate::error::{Error, Result};
use crate::specs::description;

use super::render::{CardView, Description, DetailView, ListView, Screen};

const TITLE_SLOT: &str = "<!-- title -->";
const SUBTITLE_SLOT: &str = "<!-- subtitle -->";

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Búsqueda de ofertas</title>
</head>
<body>
  <h1 id="titulo"><!-- title --></h1>
  <p id="subtitulo"><!-- subtitle --></p>
  <div class="layout">
    <section id="resultados"><!-- results --></section>
    <aside id="detalle"><div id="detalle_contenido"><!-- detail --></div></aside>
  </div>
</body>
</html>
"#;

/// Page skeleton with a results slot and a detail slot.
#[derive(Clone, Debug)]
pub struct Template {
    text: String,
}

impl Template {
    /// Both `<!-- results -->` and `<!-- detail -->` must be present.
    pub fn parse(text: &str) -> Result<Self> {
        let missing: Vec<&str> = [RESULTS_SLOT, DETAIL_SLOT]
            .into_iter()
            .filter(|slot| !text.contains(slot))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "template is missing {}",
                missing.join(" and ")
            )));
        }
        Ok(Self { text: s!(text) })
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn fill(&self, screen: &Screen) -> String {
        self.text
            .replace(TITLE_SLOT, &escape_html(&screen.title))
            .replace(SUBTITLE_SLOT, &escape_html(&screen.subtitle))
            .replace(RESULTS_SLOT, &render_list(&screen.list))
            .replace(DETAIL_SLOT, &render_detail(&screen.detail))
    }
}

impl Default for Template {
    fn default() -> Self {
        Self { text: s!(DEFAULT_TEMPLATE) }
    }
}

pub fn render_list(list: &ListView) -> String {
    match list {
        ListView::Hidden => s!(),
        ListView::Empty(msg) => format!(r#"<div class="nores">{}</div>"#, escape_html(msg)),
        ListView::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

/// The title link is inert: `href="#"` plus `data-no-nav` for page scripts.
pub fn render_card(card: &CardView) -> String {
    let class = if card.selected { "box_offer sel" } else { "box_offer" };
    format!(
        r##"<article class="{class}" data-card="{id}">
  <h2 class="fs18 fwB prB"><a class="fc_base t_ellipsis" href="#" data-no-nav="1">{title}</a></h2>
  <p class="dFlex vm_fx fs16 fc_base mt5"><span class="t_ellipsis">{org}</span></p>
  <p class="fs16 fc_base mt5"><span class="mr10">{loc}</span></p>
  <p class="fs13 fc_aux mt15">{posted}</p>
</article>
"##,
        id = card.id.0,
        title = escape_html(&card.title),
        org = escape_html(&card.organization),
        loc = escape_html(&card.location),
        posted = escape_html(&card.posted),
    )
}

pub fn render_detail(detail: &DetailView) -> String {
    match detail {
        DetailView::Blank => s!(),
        DetailView::Message(msg) => format!(r#"<div class="nores">{}</div>"#, escape_html(msg)),
        DetailView::Offer(d) => {
            let body = match &d.description {
                Description::Lines(lines) => description::to_html(lines),
                Description::Fallback(msg) => {
                    format!(r#"<p class="fc_aux">{}</p>"#, escape_html(msg))
                }
            };
            format!(
                r#"<p class="fs28 fwB mb10">{title}</p>
<p class="fs22 fwB">{org}</p>
<p class="mb15">{loc}</p>
<span class="b_primary big" role="button" tabindex="0">{apply}</span>
<div class="mt15">{body}</div>
"#,
                title = escape_html(&d.title),
                org = escape_html(&d.organization),
                loc = escape_html(&d.location),
                apply = APPLY_LABEL,
            )
        }
    }
}
