//! Validation of the model's reply.

use specfill_core::{Error, Result, SpecSet};
use specfill_extract::is_valid;
use tracing::debug;

/// Parse a reply that must be a JSON array of `"Label: Value"` strings.
///
/// The array must be non-empty and every element a string containing a
/// colon, otherwise the whole reply is rejected. Accepted lines are split at
/// the first colon; lines with an empty label or a value the validator
/// rejects are dropped, and repeated labels keep their first value.
pub fn parse_spec_response(text: &str) -> Result<SpecSet> {
    let parsed: serde_json::Value = serde_json::from_str(text.trim())
        .map_err(|e| Error::InvalidResponse(format!("not JSON: {}", e)))?;

    let items = parsed
        .as_array()
        .ok_or_else(|| Error::InvalidResponse("expected a JSON array".into()))?;
    if items.is_empty() {
        return Err(Error::InvalidResponse("empty spec array".into()));
    }

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(line) if line.contains(':') => lines.push(line),
            _ => {
                return Err(Error::InvalidResponse(format!(
                    "entry is not a \"Label: Value\" string: {}",
                    item
                )))
            }
        }
    }

    let mut specs = SpecSet::new();
    for line in lines {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let (label, value) = (label.trim(), value.trim());
        if label.is_empty() || !is_valid(value) {
            debug!("Dropping spec line {:?}", line);
            continue;
        }
        specs.insert_if_absent(label, value);
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reply() {
        let specs = parse_spec_response(
            r#"["Brand: Salton", "Material: Stainless Steel", "Capacity: 12 cups", "Power: 1800 watts"]"#,
        )
        .unwrap();
        assert_eq!(
            specs.to_lines(),
            vec![
                "Brand: Salton",
                "Material: Stainless Steel",
                "Capacity: 12 cups",
                "Power: 1800 watts",
            ]
        );
    }

    #[test]
    fn test_splits_at_first_colon() {
        let specs = parse_spec_response(r#"["Timer: 1:30 hours"]"#).unwrap();
        assert_eq!(specs.get("Timer"), Some("1:30 hours"));
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(matches!(
            parse_spec_response("Here are the specs: Brand: Salton"),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_rejects_empty_and_non_array() {
        assert!(parse_spec_response("[]").is_err());
        assert!(parse_spec_response(r#"{"Brand": "Salton"}"#).is_err());
    }

    #[test]
    fn test_rejects_whole_reply_on_bad_entry() {
        assert!(parse_spec_response(r#"["Brand: Salton", "no colon here"]"#).is_err());
        assert!(parse_spec_response(r#"["Brand: Salton", 42]"#).is_err());
    }

    #[test]
    fn test_drops_invalid_values_and_duplicates() {
        let long = "x".repeat(120);
        let reply = serde_json::to_string(&vec![
            "Brand: Salton".to_string(),
            format!("Notes: {}", long),
            "Color: ###".to_string(),
            ": orphan value".to_string(),
            "Brand: Other".to_string(),
        ])
        .unwrap();
        let specs = parse_spec_response(&reply).unwrap();
        assert_eq!(specs.to_lines(), vec!["Brand: Salton"]);
    }
}
