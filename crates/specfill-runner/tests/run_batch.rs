//! Runner behaviour over in-memory and on-disk row batches.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use specfill_core::{ProductContext, SpecExtractor, SpecSet};
use specfill_extract::RuleExtractor;
use specfill_runner::rows::SPEC_COLUMN;
use specfill_runner::{load_rows, save_rows, Row, RunOptions, Runner};

fn rows(value: Value) -> Vec<Row> {
    serde_json::from_value(value).unwrap()
}

fn options() -> RunOptions {
    RunOptions {
        overwrite: false,
        quiet: true,
        delay: Duration::ZERO,
    }
}

/// Remote stand-in: answers only for titles containing "Kettle".
struct CannedRemote;

#[async_trait]
impl SpecExtractor for CannedRemote {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn is_remote(&self) -> bool {
        true
    }

    async fn extract(&self, context: &ProductContext) -> SpecSet {
        let mut specs = SpecSet::new();
        if context.title.as_deref().is_some_and(|t| t.contains("Kettle")) {
            specs.insert("Capacity", "1.7 L");
            specs.insert("Power", "1500 watts");
        }
        specs
    }
}

#[tokio::test]
async fn test_rule_run_populates_and_skips() {
    let mut batch = rows(json!([
        {
            "Title": "<b>Compact</b> Grill",
            "Body HTML": "• Cool-touch handles • Drip tray slides out for cleaning",
            "Vendor": "Hamilton Beach",
            "Metafield: custom.product_material [single_line_text_field]": "Cast iron",
        },
        { "Title": null, "Body HTML": null },
        { "Title": "Salton Kettle", SPEC_COLUMN: "[\"Color: Red\"]" },
    ]));

    let report = Runner::new(options())
        .run(&mut batch, &RuleExtractor::new())
        .await
        .unwrap();

    assert_eq!(report.strategy, "rules");
    assert_eq!(report.total, 3);
    assert_eq!(report.newly_populated, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(report.already_populated, 1);
    assert_eq!(report.specs_extracted, 3);
    assert_eq!(report.api_calls, 0);

    let cell = batch[0][SPEC_COLUMN].as_str().unwrap();
    let parsed: Vec<String> = serde_json::from_str(cell).unwrap();
    assert_eq!(
        parsed,
        vec![
            "Brand: Hamilton Beach",
            "Material: Cast iron",
            "Feature: Drip tray slides out for cleaning",
        ]
    );
    assert!(batch[1].get(SPEC_COLUMN).is_none());
    assert_eq!(batch[2][SPEC_COLUMN], json!("[\"Color: Red\"]"));

    assert_eq!(report.samples.len(), 1);
    assert_eq!(report.samples[0].title, "<b>Compact</b> Grill");
}

#[tokio::test]
async fn test_remote_run_counts_calls_and_failures() {
    let mut batch = rows(json!([
        { "Title": "Salton Kettle" },
        { "Title": "Mystery Box" },
        { "Title": "Steel Kettle", SPEC_COLUMN: "  " },
    ]));

    let report = Runner::new(options()).run(&mut batch, &CannedRemote).await.unwrap();

    assert_eq!(report.api_calls, 3);
    assert_eq!(report.newly_populated, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.specs_extracted, 4);
    assert_eq!(report.average_specs(), Some(2.0));
}

#[tokio::test]
async fn test_overwrite_replaces_existing() {
    let mut batch = rows(json!([
        { "Title": "Salton Kettle", SPEC_COLUMN: "[\"Color: Red\"]" },
    ]));

    let runner = Runner::new(RunOptions {
        overwrite: true,
        ..options()
    });
    let report = runner.run(&mut batch, &CannedRemote).await.unwrap();

    assert_eq!(report.already_populated, 0);
    assert_eq!(report.newly_populated, 1);
    assert_eq!(
        batch[0][SPEC_COLUMN],
        json!("[\"Capacity: 1.7 L\",\"Power: 1500 watts\"]")
    );
}

#[tokio::test]
async fn test_samples_capped_at_three() {
    let mut batch = rows(json!([
        { "Title": "Kettle 1" },
        { "Title": "Kettle 2" },
        { "Title": "Kettle 3" },
        { "Title": "Kettle 4" },
    ]));

    let report = Runner::new(options()).run(&mut batch, &CannedRemote).await.unwrap();
    assert_eq!(report.newly_populated, 4);
    let titles: Vec<&str> = report.samples.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Kettle 1", "Kettle 2", "Kettle 3"]);
}

#[tokio::test]
async fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("catalog.json");
    std::fs::write(
        &input,
        r#"[{"Title": "Salton Kettle", "Type": "Kitchen", "Price": 39.99}]"#,
    )
    .unwrap();

    let mut batch = load_rows(&input).unwrap();
    Runner::new(options()).run(&mut batch, &CannedRemote).await.unwrap();

    let output = specfill_runner::default_output_path(&input, true);
    save_rows(&output, &batch).unwrap();

    let reloaded = load_rows(&output).unwrap();
    assert_eq!(reloaded[0]["Price"], json!(39.99));
    assert_eq!(reloaded[0]["Type"], json!("Kitchen"));
    assert!(reloaded[0][SPEC_COLUMN].as_str().unwrap().contains("Capacity: 1.7 L"));
}

#[tokio::test]
async fn test_workbook_run_keeps_unknown_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.xlsx");
    let seed = rows(json!([
        { "Handle": "kettle", "Title": "Salton Kettle", "Variant Price": 39.99 },
        { "Handle": "box", "Title": "Mystery Box", "Variant Price": 5 },
    ]));
    save_rows(&input, &seed).unwrap();

    let mut batch = load_rows(&input).unwrap();
    let report = Runner::new(options()).run(&mut batch, &CannedRemote).await.unwrap();
    assert_eq!(report.newly_populated, 1);
    assert_eq!(report.failed, 1);

    let output = specfill_runner::default_output_path(&input, true);
    assert_eq!(output, dir.path().join("export_with_ai_specs.xlsx"));
    save_rows(&output, &batch).unwrap();

    let reloaded = load_rows(&output).unwrap();
    let columns: Vec<&str> = reloaded[0].keys().map(String::as_str).collect();
    assert_eq!(columns, vec!["Handle", "Title", "Variant Price", SPEC_COLUMN]);
    assert_eq!(reloaded[0]["Variant Price"], json!(39.99));
    assert_eq!(reloaded[1]["Variant Price"], json!(5));
    assert_eq!(
        reloaded[0][SPEC_COLUMN],
        json!("[\"Capacity: 1.7 L\",\"Power: 1500 watts\"]")
    );
    assert_eq!(reloaded[1][SPEC_COLUMN], Value::Null);
}
