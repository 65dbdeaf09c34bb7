//! Point Form Logic
//!
//! Pure state transitions behind the CreatePoint page, kept free of
//! signals so they can be tested on the host.

use crate::config::{MSG_FILL_ALL_FIELDS, MSG_POINT_CREATED, PLACEHOLDER_VALUE};
use crate::error::ApiError;
use crate::models::{LatLng, PointPayload};

/// Contact fields of the form, keyed by input `name` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl FormInput {
    /// Overwrite the field named `field`. Returns false for unknown names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Toggle membership of `id`, keeping the relative order of the rest
pub fn toggle_item(selected: &mut Vec<u32>, id: u32) {
    if selected.contains(&id) {
        selected.retain(|&item| item != id);
    } else {
        selected.push(id);
    }
}

/// State and city selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geography {
    pub ufs: Vec<String>,
    pub selected_uf: Option<String>,
    pub cities: Vec<String>,
    pub selected_city: Option<String>,
}

impl Geography {
    /// Apply a change of the UF select.
    ///
    /// Cities and the chosen city are always cleared. Returns the UF
    /// whose municipalities must be fetched, or None for the placeholder.
    pub fn select_uf(&mut self, value: &str) -> Option<String> {
        self.cities.clear();
        self.selected_city = None;
        self.selected_uf = selectable(value);
        self.selected_uf.clone()
    }

    /// Install the municipalities fetched for `uf`.
    ///
    /// Responses for a UF that is no longer selected are dropped.
    pub fn apply_cities(&mut self, uf: &str, cities: Vec<String>) -> bool {
        if self.selected_uf.as_deref() != Some(uf) {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn select_city(&mut self, value: &str) {
        self.selected_city = selectable(value);
    }
}

fn selectable(value: &str) -> Option<String> {
    if value.is_empty() || value == PLACEHOLDER_VALUE {
        None
    } else {
        Some(value.to_string())
    }
}

/// Assemble the `POST /points` body from the current page state
pub fn build_payload(
    input: &FormInput,
    geography: &Geography,
    position: LatLng,
    selected_items: &[u32],
) -> PointPayload {
    PointPayload {
        name: input.name.clone(),
        email: input.email.clone(),
        whatsapp: input.whatsapp.clone(),
        uf: geography.selected_uf.clone(),
        city: geography.selected_city.clone(),
        latitude: position.latitude,
        longitude: position.longitude,
        items: selected_items.to_vec(),
    }
}

/// What the page does once `POST /points` settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub alert: &'static str,
    pub navigate_home: bool,
}

impl SubmitOutcome {
    /// Every failure kind maps to the same message.
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self { alert: MSG_POINT_CREATED, navigate_home: true },
            Err(_) => Self { alert: MSG_FILL_ALL_FIELDS, navigate_home: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sao_paulo() -> Vec<String> {
        vec!["Campinas".to_string(), "Santos".to_string(), "São Paulo".to_string()]
    }

    #[test]
    fn test_set_field_updates_only_named_field() {
        let mut input = FormInput::default();
        assert!(input.set_field("email", "a@b.com".to_string()));
        assert_eq!(input, FormInput { email: "a@b.com".to_string(), ..Default::default() });

        assert!(input.set_field("email", "c@d.com".to_string()));
        assert_eq!(input.email, "c@d.com");
        assert!(input.name.is_empty());
    }

    #[test]
    fn test_set_field_ignores_unknown_name() {
        let mut input = FormInput::default();
        assert!(!input.set_field("phone", "123".to_string()));
        assert_eq!(input, FormInput::default());
    }

    #[test]
    fn test_toggle_parity_and_order() {
        let mut selected = Vec::new();
        for id in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
            toggle_item(&mut selected, id);
        }
        // 3: twice, 1: twice, 5: three times, others once
        assert_eq!(selected, vec![4, 9, 2, 6, 5]);
    }

    #[test]
    fn test_toggle_pair_restores_selection() {
        let mut selected = vec![1, 2, 3];
        toggle_item(&mut selected, 7);
        toggle_item(&mut selected, 7);
        assert_eq!(selected, vec![1, 2, 3]);

        toggle_item(&mut selected, 2);
        toggle_item(&mut selected, 2);
        assert_eq!(selected, vec![1, 3, 2]);
    }

    #[test]
    fn test_select_uf_replaces_cities() {
        let mut geo = Geography::default();
        assert_eq!(geo.select_uf("SP"), Some("SP".to_string()));
        assert!(geo.apply_cities("SP", sao_paulo()));
        geo.select_city("Campinas");

        assert_eq!(geo.select_uf("RJ"), Some("RJ".to_string()));
        assert!(geo.cities.is_empty());
        assert_eq!(geo.selected_city, None);

        assert!(geo.apply_cities("RJ", vec!["Niterói".to_string()]));
        assert_eq!(geo.cities, vec!["Niterói".to_string()]);
    }

    #[test]
    fn test_late_cities_for_previous_uf_are_dropped() {
        let mut geo = Geography::default();
        geo.select_uf("SP");
        geo.select_uf("MG");
        assert!(!geo.apply_cities("SP", sao_paulo()));
        assert!(geo.cities.is_empty());
    }

    #[test]
    fn test_placeholder_clears_selection() {
        let mut geo = Geography::default();
        geo.select_uf("SP");
        geo.apply_cities("SP", sao_paulo());
        assert_eq!(geo.select_uf(PLACEHOLDER_VALUE), None);
        assert_eq!(geo.selected_uf, None);
        assert!(geo.cities.is_empty());

        geo.select_city(PLACEHOLDER_VALUE);
        assert_eq!(geo.selected_city, None);
    }

    #[test]
    fn test_build_payload_campinas() {
        let mut input = FormInput::default();
        input.set_field("name", "Mercado do Zé".to_string());
        input.set_field("email", "ze@mercado.com".to_string());
        input.set_field("whatsapp", "19988887777".to_string());

        let mut geo = Geography::default();
        geo.select_uf("SP");
        geo.apply_cities("SP", sao_paulo());
        geo.select_city("Campinas");

        let mut selected = Vec::new();
        toggle_item(&mut selected, 2);
        toggle_item(&mut selected, 5);

        let payload = build_payload(&input, &geo, LatLng::new(-22.9056, -47.0608), &selected);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Mercado do Zé",
                "email": "ze@mercado.com",
                "whatsapp": "19988887777",
                "uf": "SP",
                "city": "Campinas",
                "latitude": -22.9056,
                "longitude": -47.0608,
                "items": [2, 5],
            })
        );
    }

    #[test]
    fn test_submit_success_navigates_home() {
        let outcome = SubmitOutcome::from_result(&Ok(()));
        assert!(outcome.navigate_home);
        assert_eq!(outcome.alert, MSG_POINT_CREATED);
    }

    #[test]
    fn test_submit_failure_shows_generic_alert() {
        let failures = [
            ApiError::Network("Failed to fetch".to_string()),
            ApiError::Status { status: 500, status_text: "Internal Server Error".to_string() },
            ApiError::Status { status: 400, status_text: "Bad Request".to_string() },
        ];
        for err in failures {
            let outcome = SubmitOutcome::from_result(&Err(err));
            assert!(!outcome.navigate_home);
            assert_eq!(outcome.alert, MSG_FILL_ALL_FIELDS);
        }
    }
}
