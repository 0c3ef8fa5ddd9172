/// Collapse a free-form category label into the canonical snake_case token
/// the [`crate::operations::resources::ResourceType`] classification expects:
/// "Rescue Team", "rescue-team", and " RESCUE  TEAM " all become
/// "rescue_team".
pub(crate) fn normalize_type_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::normalize_type_label;

    #[test]
    fn collapses_spacing_case_and_separators() {
        assert_eq!(normalize_type_label(" Rescue  Team "), "rescue_team");
        assert_eq!(normalize_type_label("water-pump"), "water_pump");
        assert_eq!(normalize_type_label("\u{feff}Medical Kit"), "medical_kit");
        assert_eq!(normalize_type_label("drone/scout"), "drone_scout");
    }
}
