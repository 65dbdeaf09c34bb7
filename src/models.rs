//! Frontend Models
//!
//! Data structures matching backend and IBGE entities.

use serde::{Deserialize, Serialize};

/// Recyclable-material category (matches backend `GET /items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// IBGE state record; only the code is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// IBGE municipality record; only the name is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

/// Geographic position as (latitude, longitude)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Body of `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: Option<String>,
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ibge_records_ignore_extra_fields() {
        let json = r#"[
            {"id": 35, "sigla": "SP", "nome": "São Paulo", "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}},
            {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro"}
        ]"#;
        let ufs: Vec<IbgeUf> = serde_json::from_str(json).unwrap();
        assert_eq!(ufs, vec![IbgeUf { sigla: "SP".into() }, IbgeUf { sigla: "RJ".into() }]);

        let json = r#"[{"id": 3509502, "nome": "Campinas", "microrregiao": {"id": 35032}}]"#;
        let cities: Vec<IbgeCity> = serde_json::from_str(json).unwrap();
        assert_eq!(cities[0].nome, "Campinas");
    }

    #[test]
    fn test_item_from_backend() {
        let json = r#"{"id": 1, "title": "Lâmpadas", "image_url": "http://localhost:3333/uploads/lampadas.svg"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Lâmpadas");
    }

    #[test]
    fn test_payload_without_geography_serializes_nulls() {
        let payload = PointPayload {
            name: "Mercado".into(),
            email: "contato@mercado.com".into(),
            whatsapp: "11999999999".into(),
            uf: None,
            city: None,
            latitude: 0.0,
            longitude: 0.0,
            items: vec![],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["uf"].is_null());
        assert!(value["city"].is_null());
        assert_eq!(value["items"], serde_json::json!([]));
    }
}
