// tests/local_archive.rs
//
// Archive laid out on disk the way the site publishes it:
// {base}/{slug}/{slug}_p{n}.html
use std::fs;
use std::path::Path;

use offer_finder::config::options::{ArchiveOptions, City};
use offer_finder::core::net;
use offer_finder::data::SearchQuery;
use offer_finder::scrape;

fn write_page(root: &Path, slug: &str, n: u32, titles: &[&str]) {
    let dir = root.join(slug);
    fs::create_dir_all(&dir).unwrap();
    let blocks: String = titles
        .iter()
        .map(|t| {
            format!(
                r#"<div class="box_offer"><h2><a href="/o">{t}</a></h2><p>Empresa</p><p>{slug}</p><p>Hoy</p></div>"#
            )
        })
        .collect();
    fs::write(dir.join(format!("{slug}_p{n}.html")), format!("<html><body>{blocks}</body></html>")).unwrap();
}

fn archive_at(root: &Path) -> ArchiveOptions {
    ArchiveOptions {
        base: root.to_string_lossy().into_owned(),
        cities: vec![City::new("Mendoza", "mendoza"), City::new("Salta", "salta")],
        ..ArchiveOptions::default()
    }
}

#[test]
fn walks_directory_until_missing_page() {
    let tmp = tempfile::tempdir().unwrap();
    write_page(tmp.path(), "mendoza", 1, &["Enólogo", "Sommelier"]);
    write_page(tmp.path(), "mendoza", 2, &["Enólogo junior"]);
    // salta has no pages at all

    let opts = archive_at(tmp.path());
    let source = net::source_for(&opts.base).unwrap();
    let state = scrape::search(&SearchQuery::new("enólogo", None), &opts, &*source, None);

    let titles: Vec<&str> = state.matches().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Enólogo", "Enólogo junior"]);
    assert_eq!(state.matches()[0].location, "mendoza");
}

#[test]
fn file_urls_work_too() {
    let tmp = tempfile::tempdir().unwrap();
    write_page(tmp.path(), "salta", 1, &["Guía de turismo"]);

    let mut opts = archive_at(tmp.path());
    opts.base = url::Url::from_directory_path(tmp.path()).unwrap().to_string();
    let source = net::source_for(&opts.base).unwrap();

    let state = scrape::search(&SearchQuery::new("GUÍA", Some("salta")), &opts, &*source, None);
    assert_eq!(state.len(), 1);
}

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use clap::Parser;
    use offer_finder::cli::{run_with, Args};

    fn run(args: &[&str]) -> String {
        let mut out = Vec::new();
        let args = Args::parse_from(std::iter::once("cli").chain(args.iter().copied()));
        run_with(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_marks_selection() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "mendoza", 1, &["Enólogo", "Enólogo jefe"]);
        let base = tmp.path().to_string_lossy().into_owned();
        let cfg = tmp.path().join("cities.toml");
        fs::write(&cfg, "[[cities]]\nname = \"Mendoza\"\nslug = \"mendoza\"\n").unwrap();

        let text = run(&["--config", cfg.to_str().unwrap(), "--base", &base, "-q", "enólogo", "--select", "2"]);
        assert!(text.starts_with("Resultados para: \"enólogo\"\n2 resultados en todas las ciudades\n"));
        assert!(text.contains("    1. Enólogo\n"));
        assert!(text.contains(">   2. Enólogo jefe\n"));
    }

    #[test]
    fn html_out_and_tsv() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "mendoza", 1, &["Chef &lt;ejecutivo&gt;"]);
        let base = tmp.path().to_string_lossy().into_owned();
        let page = tmp.path().join("out.html");

        let tsv = run(&[
            "--base", &base, "--city", "mendoza", "-q", "chef",
            "--format", "tsv", "--html-out", page.to_str().unwrap(),
        ]);
        assert_eq!(tsv, "title\torganization\tlocation\tposted\nChef <ejecutivo>\tEmpresa\tmendoza\tHoy\n");

        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains("Chef &lt;ejecutivo&gt;"));
        assert!(html.contains("box_offer sel"));
    }

    #[test]
    fn page_url_query_survives_city_flag() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "mendoza", 1, &["Chef de partida"]);
        write_page(tmp.path(), "cordoba", 1, &["Chef pastelero"]);
        let page_url = url::Url::from_directory_path(tmp.path())
            .unwrap()
            .join("busqueda.html?q=chef&city=cordoba")
            .unwrap();

        let text = run(&["--page-url", page_url.as_str(), "--city", "mendoza"]);
        assert!(text.starts_with("Resultados para: \"chef\"\n1 resultado en Mendoza\n"));
        assert!(text.contains("Chef de partida"));
        assert!(!text.contains("Chef pastelero"));
    }

    #[test]
    fn page_url_alone_drives_the_search() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "cordoba", 1, &["Chef pastelero"]);
        let page_url = url::Url::from_directory_path(tmp.path())
            .unwrap()
            .join("busqueda.html?q=chef&city=cordoba")
            .unwrap();

        let text = run(&["--page-url", page_url.as_str(), "--format", "tsv"]);
        assert!(text.contains("Chef pastelero\tEmpresa\tcordoba\tHoy"));
    }

    #[test]
    fn empty_query_prints_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        let text = run(&["--base", tmp.path().to_str().unwrap()]);
        assert!(text.starts_with("Búsqueda global\n"));
    }

    #[test]
    fn bad_template_fails_before_searching() {
        let tmp = tempfile::tempdir().unwrap();
        let tpl = tmp.path().join("t.html");
        fs::write(&tpl, "<html></html>").unwrap();
        let args = Args::parse_from([
            "cli", "--base", tmp.path().to_str().unwrap(), "-q", "x",
            "--html-out", tmp.path().join("o.html").to_str().unwrap(),
            "--template", tpl.to_str().unwrap(),
        ]);
        let err = run_with(args, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, offer_finder::Error::Config(_)));
    }
}
