//! Submission Packing & Rehydration
//!
//! Converts between the live form rows and the JSON arrays the backend speaks:
//! packing the four hidden fields before the native POST, and rebuilding rows
//! from the edit-mode bootstrap payload.

use crate::models::{HourRecord, InitData, MaterialRecord, PersonnelRecord, TravelRecord};
use crate::store::{
    blank_personnel_row, hour_slots, row_total, CostEntry, FormState, HourSlot, PersonnelRow,
    TravelEntry,
};

// ========================
// Packing (form -> JSON)
// ========================

/// JSON for the `personnel_json` hidden field.
pub fn personnel_json(rows: &[PersonnelRow], years: &[i32]) -> String {
    to_json(&personnel_records(rows, years))
}

/// JSON for the `domestic_travel_json` / `international_travel_json` fields.
pub fn travel_json(entries: &[TravelEntry]) -> String {
    to_json(&travel_records(entries))
}

/// JSON for the unified `materials_json` field: materials first, then
/// equipment tagged `"equipment"`, then other direct costs tagged `"other"`.
pub fn materials_json(materials: &[CostEntry], equipment: &[CostEntry], other: &[CostEntry]) -> String {
    to_json(&material_records(materials, equipment, other))
}

fn to_json<T: serde::Serialize>(records: &T) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

fn personnel_records(rows: &[PersonnelRow], years: &[i32]) -> Vec<PersonnelRecord> {
    rows.iter()
        .filter(|row| !row.name.trim().is_empty())
        .map(|row| {
            // Zip slots to real years only when the rendered slot count still
            // matches the year set; a stale render falls back to null years.
            let zip_years = !years.is_empty() && years.len() == row.hours.len();
            let hours = row
                .hours
                .iter()
                .enumerate()
                .filter(|(_, slot)| !slot.value.trim().is_empty())
                .filter_map(|(index, slot)| {
                    let hours = slot.value.trim().parse::<f64>().ok()?;
                    Some(HourRecord {
                        year: if zip_years { Some(years[index]) } else { None },
                        hours,
                    })
                })
                .collect();

            PersonnelRecord {
                name: row.name.trim().to_string(),
                position: row.position.trim().to_string(),
                same_each_year: row.same_each_year,
                hours,
                rate_per_hour: Some(parse_optional(&row.rate).unwrap_or(0.0)),
                total: row_total(row),
            }
        })
        .collect()
}

fn travel_records(entries: &[TravelEntry]) -> Vec<TravelRecord> {
    entries
        .iter()
        .filter(|entry| !(entry.description.is_empty() && entry.total_amount.is_empty()))
        .map(|entry| TravelRecord {
            description: entry.description.clone(),
            total_amount: parse_optional(&entry.total_amount),
            year: None,
            flight: None,
            taxi_per_day: None,
            food_per_day: None,
        })
        .collect()
}

fn material_records(
    materials: &[CostEntry],
    equipment: &[CostEntry],
    other: &[CostEntry],
) -> Vec<MaterialRecord> {
    let tagged = |entries: &[CostEntry], kind: Option<&str>| -> Vec<MaterialRecord> {
        entries
            .iter()
            .filter(|entry| !(entry.cost.is_empty() && entry.description.is_empty()))
            .map(|entry| MaterialRecord {
                kind: kind.map(str::to_string),
                cost: parse_optional(&entry.cost),
                description: entry.description.clone(),
                year: None,
            })
            .collect()
    };

    let mut records = tagged(materials, None);
    records.extend(tagged(equipment, Some("equipment")));
    records.extend(tagged(other, Some("other")));
    records
}

/// Parse an optional numeric field: blank or unparseable becomes None.
fn parse_optional(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

// ========================
// Rehydration (JSON -> form)
// ========================

/// Build the initial form state from the bootstrap payload. Sections without
/// saved records start with a single blank row/entry, matching the fresh form.
pub fn build_initial_state(
    init: &InitData,
    years: &[i32],
    alloc: &mut dyn FnMut() -> u32,
) -> FormState {
    let (mut materials, mut equipment, mut other_costs) = (Vec::new(), Vec::new(), Vec::new());
    for record in &init.materials {
        let entry = cost_entry_from_record(record, alloc());
        match record.kind.as_deref() {
            Some("equipment") => equipment.push(entry),
            Some("other") => other_costs.push(entry),
            _ => materials.push(entry),
        }
    }

    FormState {
        personnel: if init.personnel.is_empty() {
            vec![blank_personnel_row(alloc(), years)]
        } else {
            personnel_rows_from_records(&init.personnel, years, alloc)
        },
        domestic_travel: travel_section(&init.domestic_travel, alloc),
        international_travel: travel_section(&init.international_travel, alloc),
        materials: or_blank_entry(materials, alloc),
        equipment: or_blank_entry(equipment, alloc),
        other_costs: or_blank_entry(other_costs, alloc),
    }
}

/// One row per saved record, hour slots rebuilt for the current year set and
/// filled by year identity. Records whose year fell out of the recomputed set
/// are dropped silently; a record with a null year lands in the first slot
/// still empty.
pub fn personnel_rows_from_records(
    records: &[PersonnelRecord],
    years: &[i32],
    alloc: &mut dyn FnMut() -> u32,
) -> Vec<PersonnelRow> {
    records
        .iter()
        .map(|record| {
            let mut slots = hour_slots(years);
            fill_hour_slots(&mut slots, &record.hours, years);
            PersonnelRow {
                id: alloc(),
                name: record.name.clone(),
                position: record.position.clone(),
                same_each_year: record.same_each_year,
                rate: record.rate_per_hour.map(format_number).unwrap_or_default(),
                hours: slots,
            }
        })
        .collect()
}

fn fill_hour_slots(slots: &mut [HourSlot], records: &[HourRecord], years: &[i32]) {
    if years.is_empty() {
        // Single fallback slot: take the first saved value, if any.
        if let (Some(slot), Some(record)) = (slots.first_mut(), records.first()) {
            slot.value = format_number(record.hours);
        }
        return;
    }
    for record in records {
        match record.year {
            Some(year) => {
                if let Some(slot) = slots.iter_mut().find(|slot| slot.year == Some(year)) {
                    slot.value = format_number(record.hours);
                }
            }
            None => {
                if let Some(slot) = slots.iter_mut().find(|slot| slot.value.is_empty()) {
                    slot.value = format_number(record.hours);
                }
            }
        }
    }
}

fn travel_section(records: &[TravelRecord], alloc: &mut dyn FnMut() -> u32) -> Vec<TravelEntry> {
    if records.is_empty() {
        return vec![TravelEntry {
            id: alloc(),
            ..Default::default()
        }];
    }
    records
        .iter()
        .map(|record| {
            let total = travel_total(record);
            TravelEntry {
                id: alloc(),
                description: record.description.clone(),
                total_amount: optional_text(total),
                year: record.year.map(|y| y.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

/// Total for a travel record: the modern merged amount when present, else the
/// sum of the legacy per-day components when any of them exists.
pub fn travel_total(record: &TravelRecord) -> f64 {
    let total = record.total_amount.unwrap_or(0.0);
    if total != 0.0 {
        return total;
    }
    let components = [record.flight, record.taxi_per_day, record.food_per_day];
    if components.iter().all(Option::is_none) {
        return 0.0;
    }
    components.iter().map(|c| c.unwrap_or(0.0)).sum()
}

fn cost_entry_from_record(record: &MaterialRecord, id: u32) -> CostEntry {
    CostEntry {
        id,
        cost: record.cost.map(format_number).unwrap_or_default(),
        description: record.description.clone(),
        year: record.year.map(|y| y.to_string()).unwrap_or_default(),
    }
}

fn or_blank_entry(entries: Vec<CostEntry>, alloc: &mut dyn FnMut() -> u32) -> Vec<CostEntry> {
    if entries.is_empty() {
        vec![CostEntry {
            id: alloc(),
            ..Default::default()
        }]
    } else {
        entries
    }
}

/// Render a numeric value into a form field, leaving zero as blank (a zero
/// travel total was never entered, it is the parse default).
fn optional_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format_number(value)
    }
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc_from(start: u32) -> impl FnMut() -> u32 {
        let mut next = start;
        move || {
            next += 1;
            next
        }
    }

    fn personnel_row(name: &str, rate: &str, hours: &[(Option<i32>, &str)]) -> PersonnelRow {
        PersonnelRow {
            id: 1,
            name: name.to_string(),
            position: "Graduate Student".to_string(),
            same_each_year: false,
            rate: rate.to_string(),
            hours: hours
                .iter()
                .map(|(year, value)| HourSlot {
                    year: *year,
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_personnel_skips_unnamed_rows() {
        let rows = vec![
            personnel_row("  ", "10", &[(Some(2024), "5")]),
            personnel_row("Ada", "10", &[(Some(2024), "5")]),
        ];
        let json = personnel_json(&rows, &[2024]);
        let records: Vec<PersonnelRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ada");
    }

    #[test]
    fn test_personnel_zips_hours_to_years() {
        let rows = vec![personnel_row(
            "Ada",
            "25",
            &[(Some(2023), "100"), (Some(2024), ""), (Some(2025), "40")],
        )];
        let json = personnel_json(&rows, &[2023, 2024, 2025]);
        let records: Vec<PersonnelRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            records[0].hours,
            vec![
                HourRecord { year: Some(2023), hours: 100.0 },
                HourRecord { year: Some(2025), hours: 40.0 },
            ]
        );
        assert_eq!(records[0].rate_per_hour, Some(25.0));
        assert_eq!(records[0].total, 3500.0);
    }

    #[test]
    fn test_personnel_stale_render_falls_back_to_null_years() {
        // Slot count no longer matches the year set.
        let rows = vec![personnel_row("Ada", "", &[(Some(2023), "100"), (Some(2024), "50")])];
        let json = personnel_json(&rows, &[2023, 2024, 2025]);
        let records: Vec<PersonnelRecord> = serde_json::from_str(&json).unwrap();
        assert!(records[0].hours.iter().all(|h| h.year.is_none()));
        assert_eq!(records[0].hours.len(), 2);
    }

    #[test]
    fn test_travel_skip_and_null_rules() {
        let entries = vec![
            TravelEntry { id: 1, ..Default::default() },
            TravelEntry {
                id: 2,
                description: "SIAM CSE".into(),
                total_amount: String::new(),
                year: String::new(),
            },
            TravelEntry {
                id: 3,
                description: String::new(),
                total_amount: "850".into(),
                year: String::new(),
            },
        ];
        let json = travel_json(&entries);
        assert_eq!(
            json,
            r#"[{"description":"SIAM CSE","total_amount":null},{"description":"","total_amount":850.0}]"#
        );
    }

    #[test]
    fn test_materials_tagging_and_skip() {
        let materials = vec![
            CostEntry { id: 1, cost: "500".into(), ..Default::default() },
            CostEntry { id: 2, ..Default::default() }, // all blank: omitted
        ];
        let equipment = vec![CostEntry {
            id: 3,
            cost: String::new(),
            description: "oscilloscope".into(),
            year: String::new(),
        }];
        let other = vec![CostEntry {
            id: 4,
            cost: "75.5".into(),
            description: "shipping".into(),
            year: "2024".into(),
        }];
        let json = materials_json(&materials, &equipment, &other);
        let records: Vec<MaterialRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, None);
        assert_eq!(records[0].cost, Some(500.0));
        assert_eq!(records[0].description, "");
        assert_eq!(records[1].kind.as_deref(), Some("equipment"));
        assert_eq!(records[1].cost, None);
        assert_eq!(records[2].kind.as_deref(), Some("other"));
        assert_eq!(records[2].cost, Some(75.5));
        // The section year dropdown never reaches the serialized shape.
        assert!(!json.contains("year"));
    }

    #[test]
    fn test_rehydrate_fills_hours_by_year_identity() {
        let records = vec![PersonnelRecord {
            name: "Ada".into(),
            position: "PI".into(),
            same_each_year: false,
            hours: vec![
                HourRecord { year: Some(2023), hours: 100.0 },
                HourRecord { year: Some(2019), hours: 55.0 }, // outside the range: dropped
                HourRecord { year: Some(2025), hours: 40.0 },
            ],
            rate_per_hour: Some(25.0),
            total: 3500.0,
        }];
        let rows = personnel_rows_from_records(&records, &[2023, 2024, 2025], &mut alloc_from(0));
        let values: Vec<_> = rows[0]
            .hours
            .iter()
            .map(|slot| (slot.year, slot.value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![(Some(2023), "100"), (Some(2024), ""), (Some(2025), "40")]
        );
        assert_eq!(rows[0].rate, "25");
    }

    #[test]
    fn test_rehydrate_null_year_takes_first_empty_slot() {
        let records = vec![PersonnelRecord {
            name: "Ada".into(),
            position: String::new(),
            same_each_year: false,
            hours: vec![
                HourRecord { year: Some(2023), hours: 10.0 },
                HourRecord { year: None, hours: 99.0 },
            ],
            rate_per_hour: None,
            total: 0.0,
        }];
        let rows = personnel_rows_from_records(&records, &[2023, 2024], &mut alloc_from(0));
        assert_eq!(rows[0].hours[0].value, "10");
        assert_eq!(rows[0].hours[1].value, "99");
        assert_eq!(rows[0].rate, "");
    }

    #[test]
    fn test_rehydrate_zero_rate_stays_zero() {
        // A saved rate of 0 is a real value, only an omitted rate renders blank.
        let records = vec![PersonnelRecord {
            name: "Ada".into(),
            position: String::new(),
            same_each_year: false,
            hours: vec![HourRecord { year: Some(2023), hours: 10.0 }],
            rate_per_hour: Some(0.0),
            total: 0.0,
        }];
        let rows = personnel_rows_from_records(&records, &[2023], &mut alloc_from(0));
        assert_eq!(rows[0].rate, "0");
    }

    #[test]
    fn test_rehydrate_without_range_uses_fallback_slot() {
        let records = vec![PersonnelRecord {
            name: "Ada".into(),
            position: String::new(),
            same_each_year: true,
            hours: vec![HourRecord { year: Some(2023), hours: 80.0 }],
            rate_per_hour: Some(12.5),
            total: 1000.0,
        }];
        let rows = personnel_rows_from_records(&records, &[], &mut alloc_from(0));
        assert_eq!(rows[0].hours.len(), 1);
        assert_eq!(rows[0].hours[0].year, None);
        assert_eq!(rows[0].hours[0].value, "80");
        assert!(rows[0].same_each_year);
    }

    #[test]
    fn test_serialize_rehydrate_roundtrip() {
        let years = vec![2023, 2024, 2025];
        let rows = vec![
            personnel_row("Ada Lovelace", "25", &[(Some(2023), "100"), (Some(2024), "120"), (Some(2025), "80")]),
            personnel_row("Charles Babbage", "17.5", &[(Some(2023), "40"), (Some(2024), ""), (Some(2025), "40")]),
        ];
        let json = personnel_json(&rows, &years);
        let records: Vec<PersonnelRecord> = serde_json::from_str(&json).unwrap();
        let rebuilt = personnel_rows_from_records(&records, &years, &mut alloc_from(10));

        assert_eq!(rebuilt.len(), 2);
        for (original, back) in rows.iter().zip(&rebuilt) {
            assert_eq!(original.name, back.name);
            assert_eq!(original.position, back.position);
            assert_eq!(original.rate, back.rate);
            let original_values: Vec<_> = original.hours.iter().map(|s| s.value.as_str()).collect();
            let rebuilt_values: Vec<_> = back.hours.iter().map(|s| s.value.as_str()).collect();
            assert_eq!(original_values, rebuilt_values);
        }
    }

    #[test]
    fn test_travel_total_prefers_modern_field() {
        let record = TravelRecord {
            description: String::new(),
            total_amount: Some(900.0),
            year: None,
            flight: Some(450.0),
            taxi_per_day: Some(30.0),
            food_per_day: Some(55.0),
        };
        assert_eq!(travel_total(&record), 900.0);
    }

    #[test]
    fn test_travel_total_reconstructs_from_legacy_costs() {
        let record = TravelRecord {
            description: String::new(),
            total_amount: None,
            year: None,
            flight: Some(450.0),
            taxi_per_day: Some(30.0),
            food_per_day: None,
        };
        assert_eq!(travel_total(&record), 480.0);

        let empty = TravelRecord {
            description: String::new(),
            total_amount: None,
            year: None,
            flight: None,
            taxi_per_day: None,
            food_per_day: None,
        };
        assert_eq!(travel_total(&empty), 0.0);
    }

    #[test]
    fn test_build_initial_state_empty_payload_gets_blank_sections() {
        let state = build_initial_state(&InitData::default(), &[2024], &mut alloc_from(0));
        assert_eq!(state.personnel.len(), 1);
        assert_eq!(state.personnel[0].hours.len(), 1);
        assert_eq!(state.personnel[0].hours[0].year, Some(2024));
        assert_eq!(state.domestic_travel.len(), 1);
        assert_eq!(state.international_travel.len(), 1);
        assert_eq!(state.materials.len(), 1);
        assert_eq!(state.equipment.len(), 1);
        assert_eq!(state.other_costs.len(), 1);
    }

    #[test]
    fn test_build_initial_state_splits_materials_by_kind() {
        let init = InitData {
            materials: vec![
                MaterialRecord {
                    kind: None,
                    cost: Some(500.0),
                    description: "reagents".into(),
                    year: Some(2024),
                },
                MaterialRecord {
                    kind: Some("equipment".into()),
                    cost: Some(1200.0),
                    description: "laser".into(),
                    year: None,
                },
                MaterialRecord {
                    kind: Some("other".into()),
                    cost: None,
                    description: "publication fees".into(),
                    year: None,
                },
                MaterialRecord {
                    kind: Some("unrecognized".into()),
                    cost: None,
                    description: "misc".into(),
                    year: None,
                },
            ],
            ..Default::default()
        };
        let state = build_initial_state(&init, &[2024], &mut alloc_from(0));
        assert_eq!(state.materials.len(), 2); // reagents + unrecognized kind
        assert_eq!(state.materials[0].cost, "500");
        assert_eq!(state.materials[0].year, "2024");
        assert_eq!(state.equipment.len(), 1);
        assert_eq!(state.equipment[0].description, "laser");
        assert_eq!(state.other_costs.len(), 1);
    }

    #[test]
    fn test_build_initial_state_travel_with_legacy_costs() {
        let init = InitData {
            domestic_travel: vec![TravelRecord {
                description: "field site visit".into(),
                total_amount: None,
                year: Some(2024),
                flight: Some(300.0),
                taxi_per_day: Some(25.0),
                food_per_day: Some(60.0),
            }],
            ..Default::default()
        };
        let state = build_initial_state(&init, &[2024], &mut alloc_from(0));
        assert_eq!(state.domestic_travel.len(), 1);
        assert_eq!(state.domestic_travel[0].total_amount, "385");
        assert_eq!(state.domestic_travel[0].year, "2024");
    }
}
