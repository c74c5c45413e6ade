use scatter_rs::api::{ScatterEngine, ScatterEngineConfig, SelectionChange};
use scatter_rs::core::{Axis, Dataset, DomainPadding, Field, Record, Viewport};
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

#[test]
fn full_session_lifecycle() {
    let dataset = Dataset::new(vec![
        record("Alpha", "AL", 30.5, 44_000.0, 12.1, 9.5, 18.2),
        record("Bravo", "BR", 38.2, 61_500.0, 15.8, 13.1, 22.9),
        record("Charlie", "CH", 41.9, 52_300.0, 10.4, 7.8, 16.5),
        record("Delta", "DE", 35.0, 48_750.0, 13.6, 11.0, 20.1),
        record("Echo", "EC", 33.3, 57_200.0, 11.2, 8.9, 19.4),
    ])
    .expect("valid dataset");

    let config = ScatterEngineConfig::new(Viewport::new(1000, 600))
        .with_fields(Field::Age, Field::Healthcare)
        .with_padding(DomainPadding::default());
    let mut engine =
        ScatterEngine::new(NullRenderer::default(), config, dataset).expect("engine init");

    // Initial draw.
    engine.render().expect("initial render");

    // User hovers a point, then clicks the Income x-axis label.
    let tooltip = engine.pointer_enter("CH").expect("hover tooltip");
    assert_eq!(tooltip.name, "Charlie");
    engine.pointer_leave();

    let change = engine.select_axis(Axis::X, Field::Income).expect("select");
    assert!(matches!(
        change,
        SelectionChange::Changed { axis: Axis::X, .. }
    ));
    engine.render().expect("render after reselect");

    // Every record projects inside the plot area, inclusive of padding.
    let viewport = engine.viewport();
    for record in engine.dataset().iter() {
        let point = engine.project_record(record).expect("projection");
        assert!(point.x >= 0.0 && point.x <= f64::from(viewport.width));
        assert!(point.y >= 0.0 && point.y <= f64::from(viewport.height));
    }

    let json = engine.frame_json_contract_v1_pretty().expect("frame json");
    assert!(json.contains("\"points\""));

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_point_count, 5);
}
