// src/config/consts.rs

// Archive
pub const DEFAULT_BASE: &str = "./";
pub const DEFAULT_EXT: &str = "html";
pub const MAX_PAGES: u32 = 50;

// Listing markup
pub const BLOCK_SELECTOR: &str = ".box_offer";
pub const DESCRIPTION_SELECTOR: &str = ".descripcion_scrapeada";
pub const DEFAULT_TITLE: &str = "Oferta";

// Net
pub const USER_AGENT: &str = concat!("offer_finder/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "offer_finder.toml";

// Cities shipped with the archive: (display name, slug)
pub const DEFAULT_CITIES: &[(&str, &str)] = &[
    ("Buenos Aires", "buenos_aires"),
    ("Córdoba", "cordoba"),
    ("Mendoza", "mendoza"),
];

// UI text
pub const PROMPT_TITLE: &str = "Búsqueda global";
pub const PROMPT_SUBTITLE: &str = "Volvé al Home e ingresá un término.";
pub const SEARCHING_ALL: &str = "Buscando en todas las ciudades y páginas…";
pub const NO_RESULTS_LIST: &str = "No se encontraron resultados.";
pub const NO_RESULTS_DETAIL: &str = "No hay resultados para mostrar.";
pub const NO_DESCRIPTION: &str = "Sin descripción disponible.";
pub const DETAIL_LOAD_FAILED: &str = "No se pudo cargar el detalle.";
pub const APPLY_LABEL: &str = "Postularme";

// HTML template slots
pub const RESULTS_SLOT: &str = "<!-- results -->";
pub const DETAIL_SLOT: &str = "<!-- detail -->";
