// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    config::options::{ArchiveOptions, City},
    core::net,
    data::{Invocation, Record, SearchQuery},
    error::Result,
    progress::Progress,
    scrape::{self, WalkSummary},
    specs::description::DescLine,
    view::{self, html::Template, CardId, Description, DetailView, ListView, ResultsState, Screen},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Rendered list + detail panel
    Text,
    /// Matches as a JSON array
    Json,
    /// One match per line: title, organization, location, posted
    Tsv,
}

/// Search the job offer archive from the terminal.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Text to look for (case-insensitive substring)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only search this city slug (e.g. buenos_aires)
    #[arg(long)]
    pub city: Option<String>,

    /// Hosting page URL; its `q`/`city` parameters and directory are used
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// Archive base directory or URL
    #[arg(long)]
    pub base: Option<String>,

    /// Page file extension
    #[arg(long)]
    pub ext: Option<String>,

    /// Page bound per city
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// TOML config file (default: ./offer_finder.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print configured cities and exit
    #[arg(long)]
    pub list_cities: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also write a static results page
    #[arg(long, value_name = "FILE")]
    pub html_out: Option<PathBuf>,

    /// Page template with <!-- results --> and <!-- detail --> slots
    #[arg(long, value_name = "FILE", requires = "html_out")]
    pub template: Option<PathBuf>,

    /// Select the N-th result (1-based) instead of the first
    #[arg(long, value_name = "N")]
    pub select: Option<usize>,

    /// Per-city progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(args, &mut out)
}

/// Everything that can be wrong with the setup fails here, before any page
/// is requested.
pub fn run_with(args: Args, out: &mut dyn Write) -> Result<()> {
    let mut archive = ArchiveOptions::load_or_default(args.config.as_deref())
        .inspect_err(|e| loge!("Config: {e}"))?;

    // flags win over the page URL, field by field
    let page = match &args.page_url {
        Some(url) => Some(Invocation::from_page_url(url).inspect_err(|e| loge!("Config: {e}"))?),
        None => None,
    };
    if let Some(inv) = &page {
        archive.base = inv.base.clone();
    }
    let text = args
        .query
        .as_deref()
        .or(page.as_ref().map(|inv| inv.query.raw()))
        .unwrap_or("");
    let city = args
        .city
        .as_deref()
        .or(page.as_ref().and_then(|inv| inv.query.city()));
    let query = SearchQuery::new(text, city);
    if let Some(base) = &args.base { archive.base = base.clone(); }
    if let Some(ext) = &args.ext { archive.ext = ext.clone(); }
    if let Some(n) = args.max_pages { archive.max_pages = n; }

    if let Err(e) = archive.validate() {
        loge!("Config: {e}");
        return Err(e);
    }

    if args.list_cities {
        for c in &archive.cities {
            writeln!(out, "{}\t{}", c.slug, c.name)?;
        }
        return Ok(());
    }

    let template = match (&args.html_out, &args.template) {
        (Some(_), Some(path)) => Some(Template::load(path).inspect_err(|e| loge!("Config: {e}"))?),
        (Some(_), None) => Some(Template::default()),
        _ => None,
    };

    let state = if query.is_empty() {
        logd!("CLI: no query, showing prompt");
        ResultsState::prompt()
    } else {
        let source = net::source_for(&archive.base).inspect_err(|e| loge!("Config: {e}"))?;
        let mut progress = CliProgress;
        let progress: Option<&mut dyn Progress> = if args.verbose { Some(&mut progress) } else { None };
        let mut st = scrape::search(&query, &archive, &*source, progress);
        if let Some(n) = args.select {
            st.select(CardId(n.saturating_sub(1)));
        }
        st
    };

    let screen = view::render(&state);

    match args.format {
        Format::Text => print_screen(&screen, out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, state.matches())?;
            writeln!(out)?;
        }
        Format::Tsv => write_tsv(state.matches(), out)?,
    }

    if let (Some(path), Some(tpl)) = (&args.html_out, &template) {
        std::fs::write(path, tpl.fill(&screen))?;
        logf!("CLI: wrote {}", path.display());
    }

    Ok(())
}

/// Prints progress lines to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn city_done(&mut self, city: &City, summary: &WalkSummary) {
        eprintln!(
            "{}: {} page(s), {} match(es), stopped: {}",
            city.name, summary.pages_read, summary.matched, summary.stop
        );
    }
}

/// Terminal rendering of a screen: list with a `>` on the selected card,
/// then the detail panel.
pub fn print_screen(screen: &Screen, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", screen.title)?;
    writeln!(out, "{}", screen.subtitle)?;

    match &screen.list {
        ListView::Hidden => return Ok(()),
        ListView::Empty(msg) => {
            writeln!(out)?;
            writeln!(out, "{msg}")?;
        }
        ListView::Cards(cards) => {
            writeln!(out)?;
            for card in cards {
                let mark = if card.selected { '>' } else { ' ' };
                writeln!(out, "{mark} {:>3}. {}", card.id.0 + 1, card.title)?;
                let meta: Vec<&str> = [&card.organization, &card.location, &card.posted]
                    .into_iter()
                    .map(String::as_str)
                    .filter(|s| !s.is_empty())
                    .collect();
                if !meta.is_empty() {
                    writeln!(out, "       {}", meta.join(" · "))?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "──────── detalle ────────")?;
    match &screen.detail {
        DetailView::Blank => {}
        DetailView::Message(msg) => writeln!(out, "{msg}")?,
        DetailView::Offer(d) => {
            writeln!(out, "{}", d.title)?;
            writeln!(out, "{}", d.organization)?;
            writeln!(out, "{}", d.location)?;
            writeln!(out)?;
            match &d.description {
                Description::Lines(lines) => {
                    for line in lines {
                        match line {
                            DescLine::Bullet(t) => writeln!(out, "  • {t}")?,
                            DescLine::Paragraph(t) => writeln!(out, "{t}")?,
                        }
                    }
                }
                Description::Fallback(msg) => writeln!(out, "{msg}")?,
            }
        }
    }
    Ok(())
}

fn tsv_cell(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

pub fn write_tsv(records: &[Record], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "title\torganization\tlocation\tposted")?;
    for r in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            tsv_cell(&r.title),
            tsv_cell(&r.organization),
            tsv_cell(&r.location),
            tsv_cell(&r.posted)
        )?;
    }
    Ok(())
}
