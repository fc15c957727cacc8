use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use comparison_bar_chart::api::{ChartConfig, ChartLayoutEngine, ViewportMeasurer};
use comparison_bar_chart::core::{BarDatum, Measurements, RowKey, Side};
use comparison_bar_chart::interaction::{
    HIGHLIGHTED_ELEMENT_ID, HighlightPhase, ScrollBehavior,
};

fn datum(id: &str, value: f64) -> BarDatum {
    BarDatum::new(id, id.to_uppercase(), value, "#4477aa")
}

#[derive(Default)]
struct FakeViewport {
    measurements: Option<Measurements>,
    row_heights: HashMap<RowKey, f64>,
}

struct SharedViewport(Rc<RefCell<FakeViewport>>);

impl ViewportMeasurer for SharedViewport {
    fn measure(&self) -> Option<Measurements> {
        self.0.borrow().measurements
    }

    fn rendered_row_height(&self, key: &RowKey) -> Option<f64> {
        self.0.borrow().row_heights.get(key).copied()
    }
}

fn engine_with_tail() -> ChartLayoutEngine {
    let mut engine = ChartLayoutEngine::new(ChartConfig::new(1)).expect("engine init");
    engine
        .set_data(
            vec![datum("a", 9.0), datum("b", 5.0), datum("c", 1.0)],
            vec![datum("x", 4.0), datum("y", 2.0)],
        )
        .expect("valid data");
    engine
}

fn recorded_errors(engine: &mut ChartLayoutEngine) -> Arc<Mutex<Vec<String>>> {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    engine.set_on_highlight_error(Arc::new(move |id: &str| {
        sink.lock().expect("error sink").push(id.to_owned());
    }));
    errors
}

#[test]
fn collapsed_target_expands_then_scrolls_exactly_once() {
    let mut engine = engine_with_tail();
    assert!(!engine.is_expanded());

    let immediate = engine.set_highlighted(Some("c"));
    assert!(immediate.is_none());
    assert!(engine.is_expanded());
    assert!(engine.has_pending_scroll());

    let request = engine.on_transition_end().expect("deferred scroll fires");
    assert_eq!(request.key, RowKey::new(Side::Primary, "c"));
    assert_eq!(request.element_id, HIGHLIGHTED_ELEMENT_ID);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);

    assert!(engine.on_transition_end().is_none());
    assert!(engine.advance(Duration::from_secs(2)).scroll.is_none());
    assert!(matches!(
        engine.highlight_phase(),
        HighlightPhase::Settled { .. }
    ));
}

#[test]
fn settle_delay_is_the_fallback_clock() {
    let mut engine = engine_with_tail();
    engine.set_highlighted(Some("b"));

    assert!(engine.advance(Duration::from_millis(349)).scroll.is_none());
    let tick = engine.advance(Duration::from_millis(1));
    assert_eq!(tick.scroll.map(|request| request.key.id), Some("b".to_owned()));
}

#[test]
fn visible_target_scrolls_immediately_without_expanding() {
    let mut engine = engine_with_tail();
    let request = engine.set_highlighted(Some("a")).expect("immediate scroll");
    assert_eq!(request.key, RowKey::new(Side::Primary, "a"));
    assert!(!engine.is_expanded());
    assert!(!engine.has_pending_scroll());
}

#[test]
fn unknown_id_reports_once_and_keeps_expand_state() {
    let mut engine = engine_with_tail();
    let errors = recorded_errors(&mut engine);

    assert!(engine.set_highlighted(Some("nope")).is_none());
    assert!(engine.set_highlighted(Some("nope")).is_none());
    assert!(!engine.is_expanded());
    assert_eq!(*errors.lock().expect("errors"), vec!["nope".to_owned()]);
    assert_eq!(engine.highlight_phase(), &HighlightPhase::Idle);

    // Still usable afterwards.
    assert!(engine.set_highlighted(Some("a")).is_some());
}

#[test]
fn newer_highlight_supersedes_a_pending_scroll() {
    let mut engine = engine_with_tail();
    engine.set_highlighted(Some("c"));
    assert!(engine.has_pending_scroll());

    // Expanded now, so "b" is laid out and scrolls right away.
    let request = engine.set_highlighted(Some("b")).expect("immediate scroll");
    assert_eq!(request.key.id, "b");
    assert!(engine.on_transition_end().is_none());
    assert!(engine.advance(Duration::from_secs(1)).scroll.is_none());
}

#[test]
fn dispose_cancels_pending_work() {
    let mut engine = engine_with_tail();
    engine.set_highlighted(Some("c"));
    engine.dispose();

    assert!(engine.is_disposed());
    assert!(engine.on_transition_end().is_none());
    assert_eq!(engine.advance(Duration::from_secs(1)).scroll, None);
    assert!(engine.set_highlighted(Some("a")).is_none());
}

#[test]
fn primary_row_wins_when_id_exists_on_both_sides() {
    let mut engine = ChartLayoutEngine::new(ChartConfig::new(5)).expect("engine init");
    engine
        .set_data(vec![datum("shared", 3.0)], vec![datum("shared", 7.0)])
        .expect("valid data");

    let request = engine.set_highlighted(Some("shared")).expect("scroll");
    assert_eq!(request.key.side, Side::Primary);

    let model = engine.render_model();
    assert!(model.rows.iter().all(|row| row.highlighted));
}

#[test]
fn active_highlight_suppresses_transition_delays() {
    let mut engine = engine_with_tail();
    assert!(
        engine
            .render_model()
            .rows
            .iter()
            .any(|row| row.height_delay_ms.is_some() || row.bar_delay_ms.is_some())
    );

    engine.set_highlighted(Some("a"));
    let model = engine.render_model();
    assert!(
        model
            .rows
            .iter()
            .all(|row| row.height_delay_ms.is_none() && row.bar_delay_ms.is_none())
    );
    assert_eq!(model.highlighted.as_deref(), Some("a"));
}

#[test]
fn viewport_reports_drive_reconciliation() {
    let viewport = Rc::new(RefCell::new(FakeViewport {
        measurements: Some(Measurements::new(200.0, 400.0, 120.0)),
        ..FakeViewport::default()
    }));
    viewport
        .borrow_mut()
        .row_heights
        .insert(RowKey::new(Side::Secondary, "x"), 100.0);
    viewport
        .borrow_mut()
        .row_heights
        .insert(RowKey::new(Side::Secondary, "y"), 0.0);

    let mut engine = engine_with_tail();
    engine.attach_viewport(Box::new(SharedViewport(Rc::clone(&viewport))));

    let request = engine.set_highlighted(Some("x")).expect("laid out row");
    assert_eq!(request.key, RowKey::new(Side::Secondary, "x"));
    assert!(!engine.is_expanded());

    // Zero rendered height counts as collapsed.
    assert!(engine.set_highlighted(Some("y")).is_none());
    assert!(engine.is_expanded());
    let request = engine.on_transition_end().expect("deferred scroll");
    assert_eq!(request.key, RowKey::new(Side::Secondary, "y"));

    // No element at all is treated the same way.
    engine.set_expanded(false);
    assert!(engine.set_highlighted(Some("b")).is_none());
    assert!(engine.is_expanded());
    assert!(engine.has_pending_scroll());
}

#[test]
fn clearing_the_highlight_returns_to_idle() {
    let mut engine = engine_with_tail();
    engine.set_highlighted(Some("c"));
    assert!(engine.set_highlighted(None).is_none());
    assert_eq!(engine.highlight_phase(), &HighlightPhase::Idle);
    assert!(engine.on_transition_end().is_none());
    assert!(engine.render_model().rows.iter().all(|row| !row.highlighted));
}
