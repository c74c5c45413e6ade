use approx::assert_relative_eq;
use scatter_rs::api::{ScatterEngine, ScatterEngineConfig};
use scatter_rs::core::{Axis, Dataset, Field, Record, Viewport};
use scatter_rs::render::NullRenderer;

fn record(
    name: &str,
    abbr: &str,
    age: f64,
    income: f64,
    poverty: f64,
    healthcare: f64,
    smokes: f64,
) -> Record {
    Record {
        name: name.to_owned(),
        abbr: abbr.to_owned(),
        age,
        income,
        poverty,
        healthcare,
        smokes,
    }
}

fn engine() -> ScatterEngine<NullRenderer> {
    let dataset = Dataset::new(vec![
        record("Alpha", "AL", 30.5, 44_000.0, 12.1, 9.5, 18.2),
        record("Bravo", "BR", 38.2, 61_500.0, 15.8, 13.1, 22.9),
    ])
    .expect("valid dataset");
    let config = ScatterEngineConfig::new(Viewport::new(800, 400));
    ScatterEngine::new(NullRenderer::default(), config, dataset).expect("engine init")
}

#[test]
fn hover_reports_the_currently_selected_values() {
    let mut engine = engine();

    let tooltip = engine.pointer_enter("BR").expect("known record");
    assert_eq!(tooltip.name, "Bravo");
    assert_eq!(tooltip.abbr, "BR");
    assert_eq!(tooltip.x_field, Field::Age);
    assert_relative_eq!(tooltip.x_value, 38.2);
    assert_eq!(tooltip.y_field, Field::Healthcare);
    assert_relative_eq!(tooltip.y_value, 13.1);

    assert!(engine.hover().visible);
    assert_eq!(engine.hover().tooltip.as_ref(), Some(&tooltip));
}

#[test]
fn hover_follows_a_selection_change() {
    let mut engine = engine();
    engine.select_axis(Axis::X, Field::Income).expect("select");

    let tooltip = engine.pointer_enter("AL").expect("known record");
    assert_eq!(tooltip.x_field, Field::Income);
    assert_relative_eq!(tooltip.x_value, 44_000.0);
}

#[test]
fn hover_never_mutates_selection_or_scales() {
    let mut engine = engine();
    let selection_before = engine.selection();
    let x_before = engine.x_scale();
    let y_before = engine.y_scale();

    let _ = engine.pointer_enter("AL");
    engine.pointer_leave();
    let _ = engine.pointer_enter("missing");

    assert_eq!(engine.selection(), selection_before);
    assert_eq!(engine.x_scale(), x_before);
    assert_eq!(engine.y_scale(), y_before);
}

#[test]
fn unknown_record_yields_no_tooltip() {
    let mut engine = engine();

    assert!(engine.pointer_enter("ZZ").is_none());
    assert!(!engine.hover().visible);
    assert!(engine.hover().tooltip.is_none());
}

#[test]
fn pointer_leave_clears_hover_state() {
    let mut engine = engine();

    engine.pointer_enter("AL").expect("known record");
    assert!(engine.hover().visible);

    engine.pointer_leave();
    assert!(!engine.hover().visible);
    assert!(engine.hover().tooltip.is_none());
}
