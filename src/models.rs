//! Wire Models
//!
//! Record shapes exchanged with the backend: the JSON arrays packed into the
//! hidden form fields on submit, and the `INIT_*` bootstrap arrays injected by
//! the server on the edit page. Legacy spellings of several fields are accepted
//! on decode but never emitted.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Hours entered for one calendar year of a personnel row. `year` is `None`
/// when the form had no valid date range at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    pub year: Option<i32>,
    pub hours: f64,
}

/// One personnel row as stored in `personnel_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub same_each_year: bool,
    #[serde(default)]
    pub hours: Vec<HourRecord>,
    #[serde(default)]
    pub rate_per_hour: Option<f64>,
    #[serde(default)]
    pub total: f64,
}

/// One travel entry as stored in `domestic_travel_json` /
/// `international_travel_json`. Older records carried per-day cost components
/// instead of a single total; those fields are decoded so the total can be
/// reconstructed, and are dropped on re-save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    #[serde(default)]
    pub description: String,
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub year: Option<i32>,
    #[serde(default, alias = "flight_cost", skip_serializing)]
    pub flight: Option<f64>,
    #[serde(default, skip_serializing)]
    pub taxi_per_day: Option<f64>,
    #[serde(default, alias = "food_lodge_per_day", skip_serializing)]
    pub food_per_day: Option<f64>,
}

/// One entry of the unified `materials_json` array. `kind` is absent for
/// materials & supplies, `"equipment"` or `"other"` for the other two
/// sections. Older records used `category`/`material_type` for the same tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(
        rename = "type",
        default,
        alias = "category",
        alias = "material_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    pub cost: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing)]
    pub year: Option<i32>,
}

/// Bootstrap payload for edit mode. The server injects `INIT_PERSONNEL`,
/// `INIT_DOM_TRAVEL`, `INIT_INTL_TRAVEL` and `INIT_MATERIALS` (plus the award
/// period as `INIT_START_DATE`/`INIT_END_DATE`) before the app mounts; this is
/// read exactly once and passed down as a typed value, so no component ever
/// touches the globals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitData {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub personnel: Vec<PersonnelRecord>,
    #[serde(default)]
    pub domestic_travel: Vec<TravelRecord>,
    #[serde(default)]
    pub international_travel: Vec<TravelRecord>,
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
}

impl InitData {
    /// Decode the `INIT_*` globals from `window`. Each piece fails soft: a
    /// missing or malformed global logs to the console and leaves that section
    /// empty, keeping the page usable.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let window: JsValue = window.into();

        Self {
            start_date: read_global(&window, "INIT_START_DATE"),
            end_date: read_global(&window, "INIT_END_DATE"),
            personnel: read_global(&window, "INIT_PERSONNEL").unwrap_or_default(),
            domestic_travel: read_global(&window, "INIT_DOM_TRAVEL").unwrap_or_default(),
            international_travel: read_global(&window, "INIT_INTL_TRAVEL").unwrap_or_default(),
            materials: read_global(&window, "INIT_MATERIALS").unwrap_or_default(),
        }
    }
}

/// Read one window global and decode it, logging decode failures.
fn read_global<T: for<'de> Deserialize<'de>>(window: &JsValue, name: &str) -> Option<T> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            web_sys::console::error_1(&format!("failed to decode {}: {}", name, err).into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_record_accepts_legacy_fields() {
        let record: TravelRecord = serde_json::from_str(
            r#"{"name":"SIAM CSE","description":"conference","year":2024,
                "depart":"2024-02-01","arrive":"2024-02-05",
                "flight_cost":450,"taxi_per_day":30,"food_lodge_per_day":55,"days":4}"#,
        )
        .unwrap();
        assert_eq!(record.description, "conference");
        assert_eq!(record.total_amount, None);
        assert_eq!(record.flight, Some(450.0));
        assert_eq!(record.taxi_per_day, Some(30.0));
        assert_eq!(record.food_per_day, Some(55.0));
        assert_eq!(record.year, Some(2024));
    }

    #[test]
    fn test_travel_record_never_emits_legacy_fields() {
        let record = TravelRecord {
            description: "trip".into(),
            total_amount: Some(500.0),
            year: Some(2024),
            flight: Some(450.0),
            taxi_per_day: Some(30.0),
            food_per_day: Some(55.0),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"description":"trip","total_amount":500.0}"#);
    }

    #[test]
    fn test_material_record_kind_roundtrip() {
        let equipment: MaterialRecord =
            serde_json::from_str(r#"{"type":"equipment","cost":1200,"description":"laser"}"#)
                .unwrap();
        assert_eq!(equipment.kind.as_deref(), Some("equipment"));

        // Plain material: no "type" key at all, matching the legacy writer.
        let material = MaterialRecord {
            kind: None,
            cost: Some(500.0),
            description: String::new(),
            year: None,
        };
        let json = serde_json::to_string(&material).unwrap();
        assert_eq!(json, r#"{"cost":500.0,"description":""}"#);
    }

    #[test]
    fn test_material_record_accepts_category_alias() {
        let record: MaterialRecord = serde_json::from_str(
            r#"{"category":"other","cost":null,"description":"shipping","year":2025}"#,
        )
        .unwrap();
        assert_eq!(record.kind.as_deref(), Some("other"));
        assert_eq!(record.cost, None);
        assert_eq!(record.year, Some(2025));
    }

    #[test]
    fn test_personnel_record_defaults() {
        let record: PersonnelRecord = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.rate_per_hour, None);
        assert!(record.hours.is_empty());
        assert!(!record.same_each_year);
    }
}
