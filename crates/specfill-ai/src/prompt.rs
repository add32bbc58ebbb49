//! System prompt and per-record context for delegated extraction.

use specfill_core::ProductContext;
use specfill_extract::clean_html;

pub const SYSTEM_PROMPT: &str = r#"You are a product specification expert. Extract and format product specifications from product information.

Rules:
1. Output ONLY a JSON array of specifications
2. Each spec must be in format "Label: Value"
3. Extract ONLY factual specifications that are explicitly stated or strongly implied
4. Common spec types: Dimensions, Weight, Capacity, Material, Color, Power, Brand, Features
5. Keep specs concise (under 100 characters each)
6. Include 3-6 specs maximum
7. Do not make up specifications that aren't supported by the information
8. If brand is in the title, always include it

Example output format:
["Brand: Salton", "Material: Stainless Steel", "Capacity: 12 cups", "Power: 1800 watts"]

Return ONLY the JSON array, no other text."#;

/// Render the record as `Field: value` lines, skipping blank fields.
///
/// The description is stripped of markup; other fields are sent as-is.
pub fn build_product_context(context: &ProductContext) -> String {
    let description = context
        .description_html
        .as_deref()
        .map(|html| clean_html(Some(html)));

    let fields = [
        ("Product", context.title.as_deref()),
        ("Description", description.as_deref()),
        ("Category", context.category.as_deref()),
        ("Vendor", context.vendor.as_deref()),
        ("Material", context.material_hint.as_deref()),
    ];

    fields
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value?.trim();
            (!value.is_empty()).then(|| format!("{}: {}", name, value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
