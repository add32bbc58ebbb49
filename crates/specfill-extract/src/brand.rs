//! Brand resolution: explicit vendor first, then the title's leading token.

/// Resolve a brand from the vendor field, falling back to the title.
///
/// A trimmed vendor of 3–29 characters wins. Otherwise the first
/// whitespace-delimited title token is used if it starts with an uppercase
/// letter and is 3–29 characters long.
pub fn resolve_brand(title: Option<&str>, vendor: Option<&str>) -> Option<String> {
    if let Some(vendor) = vendor {
        let vendor = vendor.trim();
        if length_ok(vendor) {
            return Some(vendor.to_string());
        }
    }

    let token = title?.split_whitespace().next()?;
    let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
    if starts_upper && length_ok(token) {
        Some(token.to_string())
    } else {
        None
    }
}

fn length_ok(s: &str) -> bool {
    let len = s.chars().count();
    len > 2 && len < 30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_wins() {
        assert_eq!(
            resolve_brand(Some("Acme Blender 500"), Some("Salton")),
            Some("Salton".into())
        );
    }

    #[test]
    fn test_vendor_is_trimmed() {
        assert_eq!(resolve_brand(None, Some("  Cuisinart \t")), Some("Cuisinart".into()));
    }

    #[test]
    fn test_short_vendor_falls_back_to_title() {
        assert_eq!(
            resolve_brand(Some("Acme Blender 500"), Some("AB")),
            Some("Acme".into())
        );
    }

    #[test]
    fn test_title_token_rules() {
        assert_eq!(resolve_brand(Some("acme blender"), None), None);
        assert_eq!(resolve_brand(Some("KB stand mixer"), None), None);
        assert_eq!(resolve_brand(Some("   "), None), None);
        assert_eq!(resolve_brand(Some("Ninja"), None), Some("Ninja".into()));
    }

    #[test]
    fn test_nothing() {
        assert_eq!(resolve_brand(None, None), None);
    }
}
