//! End-to-end merge behaviour over realistic product records.

use specfill_core::{labels, ProductContext, SpecSet};
use specfill_extract::{extract_specs, is_valid, merge};

fn description(text: &str) -> ProductContext {
    ProductContext {
        description_html: Some(text.to_string()),
        ..Default::default()
    }
}

fn sample_records() -> Vec<ProductContext> {
    vec![
        ProductContext {
            title: Some("Salton Digital Air Fryer 5.8 Qt".into()),
            description_html: Some(
                "<p>Cook crispy meals with 1700 watts of power.</p>\
                 <ul><li>8 precision heat settings</li><li>Temperature up to 400 degrees F</li>\
                 <li>Nonstick basket made of aluminum, dishwasher safe</li></ul>"
                    .into(),
            ),
            category: Some("Small Appliances".into()),
            vendor: Some("Salton".into()),
            material_hint: Some("Plastic".into()),
        },
        ProductContext {
            title: Some("Chef Knife Block 15-Piece".into()),
            description_html: Some(
                "<div>Includes: eight steak knives and a honing steel. Color: midnight black.</div>"
                    .into(),
            ),
            category: None,
            vendor: None,
            material_hint: None,
        },
        ProductContext {
            title: Some("<b>Compact</b> Grill".into()),
            description_html: Some("• Cool-touch handles • Drip tray slides out for cleaning".into()),
            category: None,
            vendor: Some("Hamilton Beach".into()),
            material_hint: Some("Cast iron".into()),
        },
        ProductContext {
            title: Some("!!!".into()),
            description_html: Some("<script></script>".into()),
            category: Some("   ".into()),
            vendor: Some("".into()),
            material_hint: Some("x".into()),
        },
        ProductContext::default(),
    ]
}

fn lines(specs: &SpecSet) -> Vec<String> {
    specs.to_lines()
}

#[test]
fn test_dimension_formatting() {
    assert_eq!(
        lines(&merge(&description("12.5 x 8 x 3 inches"))),
        vec!["Dimensions: 12.5 x 8 x 3 inches"]
    );
    assert_eq!(lines(&merge(&description("10x5"))), vec!["Dimensions: 10 x 5"]);
}

#[test]
fn test_weight() {
    assert_eq!(
        lines(&merge(&description("Product weighs 4.5 lbs total"))),
        vec!["Weight: 4.5 lbs"]
    );
}

#[test]
fn test_power_max_is_rejected() {
    let specs = merge(&description("1500 watts max output"));
    assert!(!specs.contains(labels::POWER));
}

#[test]
fn test_brand_precedence() {
    let ctx = ProductContext {
        title: Some("Acme Blender 500".into()),
        vendor: Some("Salton".into()),
        ..Default::default()
    };
    assert_eq!(merge(&ctx).get(labels::BRAND), Some("Salton"));
}

#[test]
fn test_feature_fallback() {
    let specs = merge(&description(
        "Featuring: a removable nonstick plate for easy cleaning.",
    ));
    assert_eq!(
        lines(&specs),
        vec!["Feature: a removable nonstick plate for easy cleaning"]
    );
}

#[test]
fn test_empty_context_gives_empty_set() {
    assert!(extract_specs(&ProductContext::default()).is_empty());
}

#[test]
fn test_full_record_order() {
    let specs = merge(&sample_records()[0]);
    assert_eq!(
        lines(&specs),
        vec![
            "Power: 1700 watts",
            "Material: Aluminum",
            "Temperature Range: 400° F",
            "Settings: 8 settings",
            "Capacity: 5.8 qt",
            "Brand: Salton",
            "Category: Small Appliances",
        ]
    );
}

#[test]
fn test_keyword_record() {
    let specs = merge(&sample_records()[1]);
    assert_eq!(
        lines(&specs),
        vec![
            "Color: Midnight Black",
            "Pieces: 15 pieces",
            "Brand: Chef",
            "Included: eight steak knives and a honing steel",
        ]
    );
}

#[test]
fn test_bullet_record() {
    let specs = merge(&sample_records()[2]);
    assert_eq!(
        lines(&specs),
        vec![
            "Brand: Hamilton Beach",
            "Material: Cast iron",
            "Feature: Drip tray slides out for cleaning",
        ]
    );
}

#[test]
fn test_values_always_pass_validator() {
    for ctx in sample_records() {
        for entry in merge(&ctx).iter() {
            assert!(is_valid(&entry.value), "invalid value: {:?}", entry);
        }
    }
}

#[test]
fn test_metadata_values_gated_by_validator() {
    let ctx = ProductContext {
        title: None,
        description_html: Some("<p>Rated at 1500 watts.</p>".into()),
        category: Some("C++ / C# -- !!".into()),
        vendor: Some("A&B--//".into()),
        material_hint: Some("18/10 - s.s. (#304)".into()),
    };
    let specs = merge(&ctx);
    for entry in specs.iter() {
        assert!(is_valid(&entry.value), "invalid value: {:?}", entry);
    }
    assert_eq!(lines(&specs), vec!["Power: 1500 watts"]);

    let clean_vendor = ProductContext {
        vendor: Some("Salton".into()),
        ..ctx
    };
    assert_eq!(
        lines(&merge(&clean_vendor)),
        vec!["Power: 1500 watts", "Brand: Salton"]
    );
}

#[test]
fn test_labels_unique_and_deterministic() {
    for ctx in sample_records() {
        let first = merge(&ctx);
        let second = merge(&ctx);
        assert_eq!(first, second);

        let mut labels: Vec<&str> = first.labels().collect();
        let total = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }
}

#[test]
fn test_pass_caps() {
    let dense = "12 x 10 x 4 inches, 5 lbs, 8 cups, 900 watts, 120 volts, plastic, \
                 color: red, up to 450 degrees, 3 speed settings, 4-piece";
    let specs = merge(&description(dense));
    assert_eq!(specs.len(), 5);

    let ctx = ProductContext {
        title: Some(dense.into()),
        ..Default::default()
    };
    let specs = merge(&ctx);
    assert_eq!(specs.labels().collect::<Vec<_>>(), vec![labels::DIMENSIONS, labels::WEIGHT]);
}

#[test]
fn test_degenerate_record() {
    assert!(merge(&sample_records()[3]).is_empty());
}
