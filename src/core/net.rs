// src/core/net.rs
//
// Page sources: where archive pages come from. The walker only ever asks for
// one URL at a time and treats every failure as "no more pages".

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::error::Result;

/// Why a page could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused, reset, bad body).
    #[error("transport: {0}")]
    Transport(String),
    /// A response arrived with a non-success status.
    #[error("status {0}")]
    Status(u16),
}

pub trait PageSource {
    /// Fetch one page body.
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// A source handed to worker threads.
pub type SharedSource = Arc<dyn PageSource + Send + Sync>;

/// Build the source that matches the archive base.
pub fn source_for(base: &str) -> Result<Box<dyn PageSource + Send + Sync>> {
    let b = base.trim();
    if b.starts_with("http://") || b.starts_with("https://") {
        Ok(Box::new(HttpSource::new()?))
    } else {
        Ok(Box::new(LocalSource))
    }
}

/* ---------------- HTTP ---------------- */

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        resp.text().map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/* ---------------- Local directory ---------------- */

/// Archive on disk. Accepts plain paths and `file://` URLs.
/// A missing file is reported like an HTTP 404.
pub struct LocalSource;

impl LocalSource {
    fn path_of(url: &str) -> std::result::Result<PathBuf, FetchError> {
        if url.starts_with("file://") {
            let parsed = Url::parse(url).map_err(|e| FetchError::Transport(e.to_string()))?;
            return parsed
                .to_file_path()
                .map_err(|_| FetchError::Transport(format!("not a local path: {url}")));
        }
        Ok(PathBuf::from(url))
    }
}

impl PageSource for LocalSource {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let path = Self::path_of(url)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Status(404)),
            Err(e) => Err(FetchError::Transport(e.to_string())),
        }
    }
}

/* ---------------- In-memory ---------------- */

/// Canned pages keyed by URL, recording every request.
/// Unknown URLs answer 404 unless a fallback body is set.
#[derive(Default)]
pub struct MemorySource {
    pages: HashMap<String, std::result::Result<String, FetchError>>,
    fallback: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    /// Every URL without an explicit entry answers with `body`.
    pub fn with_fallback(body: &str) -> Self {
        Self { fallback: Some(s!(body)), ..Self::default() }
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(s!(url), Ok(s!(body)));
        self
    }

    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.pages.insert(s!(url), Err(FetchError::Status(code)));
        self
    }

    pub fn unreachable(mut self, url: &str) -> Self {
        self.pages.insert(s!(url), Err(FetchError::Transport(s!("connection refused"))));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl PageSource for MemorySource {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        if let Ok(mut r) = self.requests.lock() {
            r.push(s!(url));
        }
        match self.pages.get(url) {
            Some(entry) => entry.clone(),
            None => self.fallback.clone().ok_or(FetchError::Status(404)),
        }
    }
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: PageSource + ?Sized> PageSource for Box<T> {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        (**self).fetch(url)
    }
}
