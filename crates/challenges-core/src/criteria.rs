//! Qualification criteria helpers

use crate::MatchRule;

pub const COMMON_BANDS: &[&str] = &[
    "160m", "80m", "60m", "40m", "30m", "20m", "17m", "15m", "12m", "10m", "6m", "2m", "70cm",
];

pub const COMMON_MODES: &[&str] = &[
    "SSB", "CW", "FT8", "FT4", "RTTY", "PSK31", "JS8", "FM", "AM", "DSTAR", "DMR", "C4FM",
];

pub const COMMON_QSO_FIELDS: &[&str] = &[
    "state",
    "dxcc",
    "country",
    "grid",
    "parkReference",
    "sotaReference",
    "cqZone",
    "ituZone",
];

/// Drops rules with no QSO field selected, keeping the rest in order
pub fn normalize_match_rules(rules: &[MatchRule]) -> Vec<MatchRule> {
    rules
        .iter()
        .filter(|rule| !rule.qso_field.is_empty())
        .cloned()
        .collect()
}

/// Adds `value` to the allow-list, or removes it when already present
pub fn toggle_entry(list: &mut Vec<String>, value: &str) {
    if let Some(position) = list.iter().position(|entry| entry == value) {
        list.remove(position);
    } else {
        list.push(value.to_string());
    }
}

/// An empty allow-list means "allow all" and is sent as absent
pub fn allow_list(entries: &[String]) -> Option<Vec<String>> {
    if entries.is_empty() {
        None
    } else {
        Some(entries.to_vec())
    }
}
