#![cfg(feature = "cairo-backend")]

use mood_chart::api::{ChartRequest, MoodChartRenderer, RenderOutcome};
use mood_chart::core::ChartConfiguration;
use mood_chart::render::{
    CairoChartFactory, CairoSurfaces, ChartFactory, Surface, SurfaceProvider,
};

fn renderer_with_canvas() -> MoodChartRenderer<CairoSurfaces, CairoChartFactory> {
    let mut surfaces = CairoSurfaces::new();
    surfaces.create("chart1", 640, 320).expect("surface");
    MoodChartRenderer::new(surfaces, CairoChartFactory::new())
}

#[test]
fn draws_line_without_grid_or_visible_points() {
    let mut renderer = renderer_with_canvas();
    let request = ChartRequest::new("chart1", ["Mon", "Tue", "Wed"], vec![0.2, 0.5, 0.3]);

    let handle = renderer
        .render(&request)
        .expect("render")
        .into_handle()
        .expect("rendered");

    let stats = handle.stats();
    assert_eq!(stats.segments_drawn, 2);
    assert_eq!(stats.points_drawn, 0);
    assert_eq!(stats.grid_lines_drawn, 0);
    // legend + 3 category labels + min/max value labels
    assert_eq!(stats.texts_drawn, 6);
    assert_eq!(handle.points().len(), 3);
}

#[test]
fn invisible_points_still_hit_test() {
    let mut renderer = renderer_with_canvas();
    let request = ChartRequest::new("chart1", ["Mon", "Tue", "Wed"], vec![0.2, 0.5, 0.3]);

    let handle = renderer
        .render(&request)
        .expect("render")
        .into_handle()
        .expect("rendered");

    let middle = handle.points()[1];
    assert_eq!(handle.hit_test(middle.x + 1.0, middle.y), Some(1));
    assert_eq!(handle.hit_test(middle.x + 40.0, middle.y + 40.0), None);
}

#[test]
fn missing_canvas_draws_nothing() {
    let mut renderer = renderer_with_canvas();
    let request = ChartRequest::new("missing", ["Mon"], vec![0.2]);

    let outcome = renderer.render(&request).expect("no error");

    assert!(matches!(outcome, RenderOutcome::SurfaceMissing));
}

#[test]
fn drawn_surface_encodes_as_png() {
    let mut renderer = renderer_with_canvas();
    let request = ChartRequest::new("chart1", ["a", "b"], vec![0.1, 0.9]);
    renderer.render(&request).expect("render");

    let mut png = Vec::new();
    renderer
        .surfaces()
        .write_png("chart1", &mut png)
        .expect("png");

    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn enabled_y_grid_draws_horizontal_lines() {
    let mut surfaces = CairoSurfaces::new();
    surfaces.create("chart1", 640, 320).expect("surface");
    let context = surfaces
        .surface_by_id("chart1")
        .expect("surface")
        .context_2d()
        .expect("context");
    let labels = vec!["a".to_owned(), "b".to_owned()];
    let mut config = ChartConfiguration::mood_line(&labels, &[0.1, 0.9]);
    config.options.scales.y.grid.display = true;

    let handle = CairoChartFactory::new()
        .create_chart(context, config)
        .expect("draw");

    assert_eq!(handle.stats().grid_lines_drawn, 5);
}

#[test]
fn canvas_smaller_than_label_margins_still_renders() {
    let mut surfaces = CairoSurfaces::new();
    surfaces.create("tiny", 50, 40).expect("surface");
    let mut renderer = MoodChartRenderer::new(surfaces, CairoChartFactory::new());
    let request = ChartRequest::new("tiny", ["a", "b"], vec![0.1, 0.9]);

    let outcome = renderer.render(&request).expect("small canvas must not error");

    let handle = outcome.into_handle().expect("rendered");
    assert_eq!(handle.stats().segments_drawn, 1);
    assert!(handle.points().iter().all(|p| p.x <= 50.0 && p.y <= 40.0));
}
