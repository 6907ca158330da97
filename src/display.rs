/// Presentation-only identifier shortening. The engine itself always
/// works on raw identifiers; this strips known vendor prefixes and
/// image extensions for table headers and report text.
pub fn short_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    const PREFIXES: &[(&str, &str)] = &[
        ("black-forest-labs_", "BFL-"),
        ("google_", ""),
        ("openai_", ""),
        ("anthropic_", ""),
        ("sourceful_riverflow_", "sf_river_"),
        ("meta_", ""),
    ];

    let mut out = name.to_string();
    for (prefix, replacement) in PREFIXES {
        if let Some(rest) = out.strip_prefix(prefix) {
            out = format!("{replacement}{rest}");
            break;
        }
    }

    if let Some(idx) = out.find("floor_plan") {
        out.replace_range(idx..idx + "floor_plan".len(), "fp_");
    }

    strip_image_extension(&out)
}

fn strip_image_extension(name: &str) -> String {
    const EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".webp", ".avif"];
    let lower = name.to_ascii_lowercase();
    for ext in EXTENSIONS {
        if lower.ends_with(ext) {
            return name[..name.len() - ext.len()].to_string();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(short_name("black-forest-labs_flux-pro"), "BFL-flux-pro");
        assert_eq!(short_name("google_gemini-2.5"), "gemini-2.5");
        assert_eq!(short_name("openai_gpt-image-1"), "gpt-image-1");
        assert_eq!(
            short_name("sourceful_riverflow_v2"),
            "sf_river_v2"
        );
    }

    #[test]
    fn test_extension_stripping_is_case_insensitive() {
        assert_eq!(short_name("floor_plan_07.PNG"), "fp__07");
        assert_eq!(short_name("plan.jpeg"), "plan");
        assert_eq!(short_name("plan.webp"), "plan");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(short_name("mystery-model"), "mystery-model");
        assert_eq!(short_name(""), "");
    }
}
