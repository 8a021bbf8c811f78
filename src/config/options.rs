// src/config/options.rs
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::core::sanitize::fold_case;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub slug: String,
}

impl City {
    pub fn new(name: &str, slug: &str) -> Self {
        Self { name: s!(name), slug: s!(slug) }
    }
}

pub fn default_cities() -> Vec<City> {
    DEFAULT_CITIES.iter().map(|(name, slug)| City::new(name, slug)).collect()
}

/// Where the archive lives and how far to walk it.
///
/// Loaded from `offer_finder.toml` when present; every key is optional.
/// ```toml
/// base = "https://example.org/ofertas/"
/// max_pages = 50
///
/// [[cities]]
/// name = "Rosario"
/// slug = "rosario"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveOptions {
    /// Directory holding one folder per city: an `http(s)://` URL or a local path.
    pub base: String,
    pub ext: String,
    pub max_pages: u32,
    pub cities: Vec<City>,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            base: s!(DEFAULT_BASE),
            ext: s!(DEFAULT_EXT),
            max_pages: MAX_PAGES,
            cities: default_cities(),
        }
    }
}

impl ArchiveOptions {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Explicit path must load; otherwise use `offer_finder.toml` if it
    /// exists in the working directory, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            logd!("Config: loading {}", p.display());
            return Self::load(p);
        }
        let fallback = Path::new(CONFIG_FILE);
        if fallback.is_file() {
            logd!("Config: loading {}", fallback.display());
            return Self::load(fallback);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.base.trim().is_empty() {
            return Err(Error::Config(s!("archive base is empty")));
        }
        if self.ext.trim().is_empty() {
            return Err(Error::Config(s!("page extension is empty")));
        }
        if self.max_pages == 0 {
            return Err(Error::Config(s!("max_pages must be at least 1")));
        }
        let mut seen = HashSet::new();
        for c in &self.cities {
            if c.slug.trim().is_empty() {
                return Err(Error::Config(format!("city {:?} has an empty slug", c.name)));
            }
            if !seen.insert(fold_case(&c.slug)) {
                return Err(Error::Config(format!("duplicate city slug {:?}", c.slug)));
            }
        }
        Ok(())
    }

    /// Base with exactly one trailing `/`.
    pub fn base_dir(&self) -> String {
        let trimmed = self.base.trim().trim_end_matches('/');
        join!(trimmed, "/")
    }

    /// `{base}{slug}/{slug}_p{page}.{ext}`
    pub fn page_url(&self, city: &City, page: u32) -> String {
        join!(
            &self.base_dir(),
            &city.slug,
            "/",
            &city.slug,
            "_p",
            &page.to_string(),
            ".",
            self.ext.trim_start_matches('.'),
        )
    }

    /// Slugs compare case-insensitively; the configured spelling is kept
    /// for building page URLs.
    pub fn city(&self, slug: &str) -> Option<&City> {
        let slug = fold_case(slug);
        self.cities.iter().find(|c| fold_case(&c.slug) == slug)
    }

    /// Cities to walk, in configured order. A filter that names no
    /// configured city selects nothing.
    pub fn cities_for(&self, filter: Option<&str>) -> Vec<&City> {
        match filter {
            Some(slug) => {
                let slug = fold_case(slug);
                self.cities.iter().filter(|c| fold_case(&c.slug) == slug).collect()
            }
            None => self.cities.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_follows_archive_layout() {
        let mut opts = ArchiveOptions::default();
        opts.base = s!("https://example.org/ofertas");
        let city = City::new("Córdoba", "cordoba");
        assert_eq!(
            opts.page_url(&city, 3),
            "https://example.org/ofertas/cordoba/cordoba_p3.html"
        );

        opts.base = s!("data//");
        opts.ext = s!(".htm");
        assert_eq!(opts.page_url(&city, 1), "data/cordoba/cordoba_p1.htm");
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let opts = ArchiveOptions::from_toml_str(
            r#"
            base = "/srv/archive"
            [[cities]]
            name = "Rosario"
            slug = "rosario"
            "#,
        )
        .unwrap();
        assert_eq!(opts.base, "/srv/archive");
        assert_eq!(opts.max_pages, MAX_PAGES);
        assert_eq!(opts.ext, "html");
        assert_eq!(opts.cities, vec![City::new("Rosario", "rosario")]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ArchiveOptions::from_toml_str("pages = 3").is_err());
    }

    #[test]
    fn validate_catches_bad_config() {
        let mut opts = ArchiveOptions::default();
        assert!(opts.validate().is_ok());

        opts.max_pages = 0;
        assert!(matches!(opts.validate(), Err(Error::Config(_))));

        let mut dup = ArchiveOptions::default();
        dup.cities.push(City::new("Otra Córdoba", "cordoba"));
        assert!(dup.validate().is_err());
    }

    #[test]
    fn unknown_city_filter_selects_nothing() {
        let opts = ArchiveOptions::default();
        assert_eq!(opts.cities_for(None).len(), 3);
        assert_eq!(opts.cities_for(Some("mendoza")).len(), 1);
        assert!(opts.cities_for(Some("rosario")).is_empty());
    }

    #[test]
    fn mixed_case_slug_is_still_selectable() {
        let mut opts = ArchiveOptions::default();
        opts.cities = vec![City::new("San Juan", "San_Juan")];
        assert!(opts.validate().is_ok());
        assert_eq!(opts.cities_for(Some("san_juan")).len(), 1);
        assert_eq!(opts.city("san_juan").map(|c| c.slug.as_str()), Some("San_Juan"));

        opts.cities.push(City::new("Otra", "san_juan"));
        assert!(opts.validate().is_err());
    }
}
