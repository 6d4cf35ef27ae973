//! Integration test: routing scenarios through the full classifier
//!
//! Covers the documented desk scenarios, the clamp at both ends of the
//! rating scale and the independence of the two overlays from the base
//! route.

use desk_classifier::{RiskClassifier, explain};
use desk_core::{ClassificationInput, Label, OperationalNote, Route, Signal, SizeBucket};
use desk_ports::RoutingClassifier;

fn classify(input: ClassificationInput) -> desk_core::ClassificationResult {
    let _ = env_logger::try_init();
    RiskClassifier::new().classify(&input)
}

#[test]
fn test_default_profile_stays_internal() {
    let result = classify(
        ClassificationInput::new(1000.0, 800.0, 1.5)
            .with_recency_weight(0.7)
            .with_heavy_trader(false)
            .with_order_burst(false),
    );

    let shape = result
        .attribution
        .iter()
        .find(|c| matches!(c.signal, Signal::ProfitLossShape { .. }))
        .expect("profit/loss entry");
    assert!(shape.weight > 0.0);

    // (0.2222 + 0.3) * 0.85 -> raw 3.30
    assert_eq!(result.rating, 3);
    assert_eq!(result.route, Route::BBook);
}

#[test]
fn test_aml_always_adds_monitor() {
    let external = classify(ClassificationInput::new(1000.0, 800.0, 1.5).with_labels(["AML"]));
    assert_eq!(external.rating, 4);
    assert_eq!(external.route, Route::ABook);
    assert!(external.needs_monitor);
    assert!(external.notes.contains(&OperationalNote::ComplianceMonitor));

    let internal = classify(ClassificationInput::new(0.0, 1000.0, 0.0).with_labels(["AML"]));
    assert_eq!(internal.route, Route::BBook);
    assert!(internal.needs_monitor);
}

#[test]
fn test_heavy_trader_with_four_lots_prefers_market_making() {
    let result = classify(
        ClassificationInput::new(0.0, 0.0, 4.0)
            .with_heavy_trader(true)
            .with_order_burst(false),
    );

    assert!(result.prefer_market_making);
    // 0.7 + 0.6 scaled by 0.85 -> rating 4, but 0 > 0 fails the profit gate
    assert_eq!(result.rating, 4);
    assert_eq!(result.route, Route::BBook);
    assert!(result.notes.contains(&OperationalNote::ProfitGateFailed));
    assert!(result.notes.contains(&OperationalNote::PreferMarketMaking));
}

#[test]
fn test_zero_profit_and_loss_is_neutral() {
    let result = classify(ClassificationInput::new(0.0, 0.0, 0.0));

    assert_eq!(result.score, 0.0);
    assert_eq!(result.rating, 3);
    assert!(
        !result
            .attribution
            .iter()
            .any(|c| matches!(c.signal, Signal::ProfitLossShape { .. }))
    );
}

#[test]
fn test_top_rating_with_losing_profile_stays_internal() {
    let result = classify(
        ClassificationInput::new(500.0, 900.0, 7.0).with_labels(["martingale", "AML", "arbitrage"]),
    );

    assert_eq!(result.rating, 5);
    assert_eq!(result.route, Route::BBook);
    assert_eq!(result.notes[0], OperationalNote::ProfitGateFailed);
}

#[test]
fn test_top_rating_with_winning_profile_routes_external() {
    let result = classify(
        ClassificationInput::new(900.0, 500.0, 7.0).with_labels(["martingale", "AML", "arbitrage"]),
    );

    assert_eq!(result.rating, 5);
    assert_eq!(result.route, Route::ABook);
    assert_eq!(result.notes[0], OperationalNote::ABookGatePassed);
}

#[test]
fn test_rating_clamps_at_both_ends() {
    let risk_down = [
        "hedger",
        "experience trader",
        "low frequency trading",
        "swing trader",
        "holds profit/loss",
        "withdraw profit",
        "no trade",
        "inactive now",
        "profiting",
    ];
    let lowest = classify(ClassificationInput::new(0.0, 1000.0, 0.0).with_labels(risk_down));
    assert_eq!(lowest.rating, 1);

    let every_label: Vec<&str> = Label::ALL.iter().map(|l| l.as_str()).collect();
    let highest = classify(
        ClassificationInput::new(1_000_000.0, 0.0, 10.0)
            .with_recency_weight(0.9)
            .with_heavy_trader(true)
            .with_labels(every_label),
    );
    assert_eq!(highest.rating, 5);
}

#[test]
fn test_six_lots_only_scores_top_bucket() {
    let result = classify(ClassificationInput::new(0.0, 0.0, 6.0));
    let sizes: Vec<(SizeBucket, f64)> = result
        .attribution
        .iter()
        .filter_map(|c| match c.signal {
            Signal::SizeBucket { bucket } => Some((bucket, c.weight)),
            _ => None,
        })
        .collect();

    assert_eq!(sizes, vec![(SizeBucket::SixPlus, 1.2)]);
}

#[test]
fn test_unknown_labels_do_not_change_result() {
    let base = classify(ClassificationInput::new(400.0, 300.0, 2.0).with_labels(["scalper"]));
    let noisy = classify(
        ClassificationInput::new(400.0, 300.0, 2.0).with_labels(["scalper", "vip", "whale", "Scalper"]),
    );
    assert_eq!(base, noisy);
}

#[test]
fn test_overlays_are_independent_of_route() {
    // A-Book, Monitor
    let a_mon = classify(ClassificationInput::new(1000.0, 800.0, 1.5).with_labels(["AML"]));
    assert_eq!((a_mon.route, a_mon.needs_monitor), (Route::ABook, true));

    // A-Book, no Monitor, MM-Stream preferred
    let a_mm = classify(
        ClassificationInput::new(1000.0, 100.0, 7.0)
            .with_heavy_trader(true)
            .with_labels(["martingale"]),
    );
    assert_eq!(a_mm.route, Route::ABook);
    assert!(!a_mm.needs_monitor);
    assert!(a_mm.prefer_market_making);

    // B-Book, Monitor
    let b_mon = classify(ClassificationInput::new(1000.0, 800.0, 1.5).with_labels(["new account"]));
    assert_eq!((b_mon.route, b_mon.needs_monitor), (Route::BBook, true));
    assert!(b_mon.notes.contains(&OperationalNote::OnboardingMonitor));

    // B-Book, nothing
    let b_plain = classify(ClassificationInput::new(1000.0, 800.0, 1.5));
    assert_eq!((b_plain.route, b_plain.needs_monitor), (Route::BBook, false));
    assert!(!b_plain.prefer_market_making);
}

#[test]
fn test_explanation_mirrors_result() {
    let result = classify(
        ClassificationInput::new(1000.0, 800.0, 4.0)
            .with_heavy_trader(true)
            .with_order_burst(true)
            .with_labels(["AML"]),
    );
    let explanation = explain(&result);

    assert_eq!(explanation.summary, result.summary());
    assert_eq!(explanation.reasons.len(), result.attribution.len());
    assert_eq!(explanation.notes.len(), result.notes.len());
    assert!(explanation.reasons.iter().any(|r| r == "Label 'AML' → +1.6"));
    assert!(explanation.summary.contains("Monitor"));
    assert!(explanation.summary.contains("MM-Stream"));
}
