//! End-to-end smoke test: run every analysis and check the artifacts.

mod common;

use common::setup_workspace;

#[test]
fn full_report_writes_every_artifact() {
    let (shop, _tmp) = setup_workspace();

    let summary = shop.run_report().unwrap();

    // Every chart, the catalog table, and the JSON summary are on disk.
    for name in [
        "price_vs_discount.png",
        "price_vs_rating.png",
        "rating_vs_discount.png",
        "discount_trend.png",
        "catalog.html",
        "summary.json",
    ] {
        assert!(
            shop.workspace().path(name).exists(),
            "missing artifact: {name}"
        );
        assert!(shop.artifacts().contains(&name.to_string()));
    }

    // The combined summary carries the fixed KPI literals.
    assert_eq!(summary.kpi.effective_price, 570.0);
    assert_eq!(summary.kpi.loss_per_unit(), 380.0);
    assert!((-1.0..=1.0).contains(&summary.pricing.correlation));
    assert!((-1.0..=1.0).contains(&summary.ratings.pearson));
    assert!((-1.0..=1.0).contains(&summary.ratings.spearman));
    assert_eq!(summary.trend.days, 90);
}

#[test]
fn summary_json_round_trips() {
    let (shop, _tmp) = setup_workspace();
    shop.run_report().unwrap();

    let raw = std::fs::read_to_string(shop.workspace().path("summary.json")).unwrap();
    let parsed: shopstat::RunSummary = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed.kpi.average_price, 950.0);
    assert_eq!(parsed.pricing.samples, 1000);
    assert_eq!(parsed.ratings.subcategories.len(), 20);
}

#[test]
fn workspace_clear_removes_artifacts() {
    let (shop, _tmp) = setup_workspace();
    shop.run_report().unwrap();
    assert!(!shop.artifacts().is_empty());

    shop.workspace().clear().unwrap();
    assert!(shop.artifacts().is_empty());
    assert!(!shop.workspace().path("summary.json").exists());
}
