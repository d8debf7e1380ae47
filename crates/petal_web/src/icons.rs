pub const DEFAULT_ICON: &str = "🌸";

const FLOWER_ICONS: &[(&str, &str)] = &[
    ("rose", "🌹"),
    ("daisy", "🌼"),
    ("sunflower", "🌻"),
    ("tulip", "🌷"),
    ("dandelion", "💛"),
    ("lily", "🌺"),
];

/// Decorative icon for a predicted label, matched case-insensitively.
pub fn icon_for(label: &str) -> &'static str {
    let label = label.to_lowercase();
    FLOWER_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_table_entries() {
        assert_eq!(icon_for("rose"), "🌹");
        assert_eq!(icon_for("daisy"), "🌼");
        assert_eq!(icon_for("sunflower"), "🌻");
        assert_eq!(icon_for("tulip"), "🌷");
        assert_eq!(icon_for("dandelion"), "💛");
        assert_eq!(icon_for("lily"), "🌺");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(icon_for("Rose"), "🌹");
        assert_eq!(icon_for("SUNFLOWER"), "🌻");
        assert_eq!(icon_for("TuLiP"), "🌷");
    }

    #[test]
    fn test_unknown_label_gets_default_icon() {
        assert_eq!(icon_for("orchid"), DEFAULT_ICON);
        assert_eq!(icon_for(""), DEFAULT_ICON);
    }
}
