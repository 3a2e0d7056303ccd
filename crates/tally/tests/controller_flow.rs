//! End-to-end tests for the action → store → evaluate pipeline

use pretty_assertions::assert_eq;
use tally::prelude::*;
use tally::FormulaResult;

fn tags(symbols: &[&str]) -> Vec<Tag> {
    symbols.iter().map(|s| Tag::text(*s)).collect()
}

/// Full keyboard flow: type tokens, commit each with Enter, calculate.
#[test]
fn test_type_commit_calculate() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    for token in ["2", "+", "3"] {
        controller.input_changed(&mut store, 0, token).unwrap();
        controller.key_pressed(&mut store, 0, Key::Enter).unwrap();
    }

    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(5.0));
}

/// Selection widget flow: the widget hands over the complete tag list.
#[test]
fn test_selection_change_replaces_tags() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller
        .selection_changed(&mut store, 0, tags(&["1", "+", "2", "+", "3"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(6.0));

    // Widget reports a shrunken list after the user removes two picks
    controller
        .selection_changed(&mut store, 0, tags(&["1", "+", "2"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(3.0));
}

/// Suggestion-valued tags reduce through the item's literal.
#[test]
fn test_suggestion_picks_evaluate() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    let rate = SuggestionOption {
        label: "Base rate".into(),
        item: SuggestionItem {
            name: "Base rate".into(),
            category: "rates".into(),
            value: ItemValue::Number(7.0),
            id: "1".into(),
        },
    };
    let times = SuggestionOption {
        label: "times".into(),
        item: SuggestionItem {
            name: "times".into(),
            category: "operators".into(),
            value: ItemValue::Text("*".into()),
            id: "2".into(),
        },
    };

    let picked = vec![Tag::from(rate), Tag::from(times), Tag::text("3")];
    controller.selection_changed(&mut store, 0, picked).unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(21.0));
}

/// A malformed tag sequence stores None, and the error never escapes.
#[test]
fn test_failed_evaluation_stores_none() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller
        .selection_changed(&mut store, 0, tags(&["2", "+", "3"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(5.0));

    // Now a dangling operator: the previous result is overwritten with None
    controller
        .selection_changed(&mut store, 0, tags(&["2", "+"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), None);
}

/// Division by zero behaves like any other failure: absent result.
#[test]
fn test_division_by_zero_stores_none() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller
        .selection_changed(&mut store, 0, tags(&["1", "/", "0"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), None);
}

/// Calculate on a fully empty row is a no-op, twice over.
#[test]
fn test_calculate_empty_row_is_noop() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller.calculate(&mut store, 0).unwrap();
    let first = store.row(0).unwrap().clone();

    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap(), &first);
    assert_eq!(first.evaluation(), None);
}

/// Uncommitted input text satisfies the precondition but contributes
/// nothing to the expression; only committed tags are evaluated.
#[test]
fn test_uncommitted_input_does_not_join_expression() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller
        .selection_changed(&mut store, 0, tags(&["4", "*", "2"]))
        .unwrap();
    controller.input_changed(&mut store, 0, "+ 100").unwrap();

    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(8.0));
}

/// Input text alone passes the precondition; the empty tag sequence then
/// reduces to "" and fails evaluation, leaving None.
#[test]
fn test_input_only_row_evaluates_to_none() {
    let controller = InputController::new();
    let mut store = RowStore::new();

    controller.input_changed(&mut store, 0, "5").unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), None);
}

/// Rows are fully independent lanes.
#[test]
fn test_cross_row_isolation() {
    let controller = InputController::new();
    let mut store = RowStore::new();
    let second = controller.add_row(&mut store);
    assert_eq!(second, 1);

    controller
        .selection_changed(&mut store, 1, tags(&["10", "-", "1"]))
        .unwrap();
    controller
        .selection_changed(&mut store, 0, tags(&["2", "*", "2"]))
        .unwrap();

    // Mutating row 0 must not have altered row 1
    assert_eq!(store.row(1).unwrap().tags().len(), 3);

    controller.calculate(&mut store, 0).unwrap();
    controller.calculate(&mut store, 1).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(4.0));
    assert_eq!(store.row(1).unwrap().evaluation(), Some(9.0));
}

/// A stub engine swaps in through the trait seam.
#[test]
fn test_custom_engine_injection() {
    struct FixedEngine(f64);

    impl ExpressionEngine for FixedEngine {
        fn evaluate(&self, _expression: &str) -> FormulaResult<f64> {
            Ok(self.0)
        }
    }

    let controller = InputController::with_engine(FixedEngine(99.0));
    let mut store = RowStore::new();

    controller
        .selection_changed(&mut store, 0, tags(&["anything"]))
        .unwrap();
    controller.calculate(&mut store, 0).unwrap();
    assert_eq!(store.row(0).unwrap().evaluation(), Some(99.0));
}
