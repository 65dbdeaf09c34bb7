//! IBGE Localidades
//!
//! State codes and municipality names for the address selects.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::IBGE_API_URL;
use crate::error::ApiError;
use crate::models::{IbgeCity, IbgeUf};

use super::{endpoint, get_json};

/// State codes (`sigla`) in response order
pub async fn list_ufs() -> Result<Vec<String>, ApiError> {
    let ufs: Vec<IbgeUf> = get_json(&endpoint(IBGE_API_URL, "estados")).await?;
    Ok(ufs.into_iter().map(|uf| uf.sigla).collect())
}

/// Municipality names (`nome`) of one state
pub async fn list_cities(uf: &str) -> Result<Vec<String>, ApiError> {
    let cities: Vec<IbgeCity> = get_json(&cities_url(uf)).await?;
    Ok(cities.into_iter().map(|city| city.nome).collect())
}

fn cities_url(uf: &str) -> String {
    let uf = utf8_percent_encode(uf, NON_ALPHANUMERIC);
    endpoint(IBGE_API_URL, &format!("estados/{}/municipios", uf))
}
