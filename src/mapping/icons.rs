//! Icon tag lookup tables for skill categories and contact links

/// Substring match against the lowercased category name, first hit wins.
const SKILL_CATEGORY_ICONS: &[(&str, &str)] = &[
    ("programming", "code"),
    ("language", "code"),
    ("frontend", "layout"),
    ("front-end", "layout"),
    ("web", "layout"),
    ("backend", "server"),
    ("back-end", "server"),
    ("cloud", "cloud"),
    ("devops", "cloud"),
    ("infrastructure", "cloud"),
    ("data", "database"),
    ("analytics", "database"),
    ("tool", "wrench"),
    ("design", "pen-tool"),
    ("soft", "users"),
    ("communication", "users"),
    ("management", "users"),
];

const DEFAULT_SKILL_ICON: &str = "sparkles";

/// Icon tag for a skill category, chosen by keyword substring match.
pub fn skill_category_icon(category_name: &str) -> &'static str {
    let name = category_name.to_lowercase();
    SKILL_CATEGORY_ICONS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_SKILL_ICON)
}

/// Icon tag for a professional link, from its platform name. Unknown
/// platforms get a generic globe.
pub fn platform_icon(platform: &str) -> &'static str {
    let name = platform.to_lowercase();
    if name.contains("linkedin") {
        "linkedin"
    } else if name.contains("pinterest") {
        "pinterest"
    } else {
        "globe"
    }
}
