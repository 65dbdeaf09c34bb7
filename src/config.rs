//! Build-time Configuration
//!
//! Endpoints are baked in at compile time; override them with
//! `ECOLETA_API_URL=... trunk build`.

/// Ecoleta backend base URL (serves `items` and `points`)
pub const API_URL: &str = match option_env!("ECOLETA_API_URL") {
    Some(url) => url,
    None => "http://localhost:3333",
};

/// IBGE localidades API base URL
pub const IBGE_API_URL: &str = match option_env!("IBGE_API_URL") {
    Some(url) => url,
    None => "https://servicodados.ibge.gov.br/api/v1/localidades",
};

// ========================
// Map
// ========================

pub const MAP_ZOOM: f64 = 15.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#;

/// Value of the placeholder `<option>` in the UF and city selects
pub const PLACEHOLDER_VALUE: &str = "0";

// ========================
// User-facing messages
// ========================

pub const MSG_POINT_CREATED: &str = "Ponto de coleta cadastrado.";
pub const MSG_FILL_ALL_FIELDS: &str = "Preencha todos os campos.";
