// src/config/state.rs
use super::options::ArchiveOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Query text box contents
    pub query_text: String,

    /// City combo: `None` = all cities, else index into `ArchiveOptions::cities`
    pub city_index: Option<usize>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query_text: s!(),
            city_index: None,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub archive: ArchiveOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(archive: ArchiveOptions) -> Self {
        Self { archive, gui: GuiState::default() }
    }

    /// Slug behind the city combo selection, if any.
    pub fn city_filter(&self) -> Option<&str> {
        self.gui
            .city_index
            .and_then(|i| self.archive.cities.get(i))
            .map(|c| c.slug.as_str())
    }
}
