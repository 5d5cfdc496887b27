use activity_cards::{
    Category, ChartConfig, ChartKind, ContainerConfig, Dataset, RenderedComponent, compose, render,
};

fn fragment(width: f64, height: f64) -> RenderedComponent {
    RenderedComponent::new("<circle r=\"5\"/>", width, height)
}

#[test]
fn composed_document_is_self_contained() {
    let doc = compose(&[fragment(350.0, 100.0)], &ContainerConfig::default());
    assert!(doc.svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.svg.ends_with("</svg>"));
    assert!(doc.svg.contains("viewBox=\"0 0 350"));
    assert!(doc.svg.contains("font-family:Calibri,sans-serif"));
}

#[test]
fn wide_components_stretch_the_canvas() {
    let doc = compose(
        &[fragment(350.0, 50.0), fragment(520.0, 50.0)],
        &ContainerConfig::default(),
    );
    assert_eq!(doc.width, 520.0);
}

#[test]
fn header_title_appends_stats_suffix() {
    let config = ContainerConfig::default().with_title_prefix("Alice's");
    let doc = compose(&[fragment(350.0, 50.0)], &config);
    assert!(doc.svg.contains("Alice&apos;s Stats"));

    let headerless = compose(&[fragment(350.0, 50.0)], &config.with_header(false));
    assert!(!headerless.svg.contains("Stats"));
}

#[test]
fn logo_markup_is_inlined_and_scaled() {
    let config = ContainerConfig::default().with_logo("<path d=\"M0 0h400v400H0z\"/>");
    let doc = compose(&[fragment(350.0, 50.0)], &config);
    assert!(doc.svg.contains("scale(0.08)") || doc.svg.contains("scale(0.07)"));
    assert!(doc.svg.contains("<path d=\"M0 0h400v400H0z\"/>"));
}

#[test]
fn chart_components_embed_without_nested_documents() {
    let dataset = Dataset::new(vec![
        Category::new("Mon", 3600.0),
        Category::new("Tue", 1800.0),
    ])
    .expect("valid dataset");
    let chart = render(&dataset, &ChartConfig::new(ChartKind::Bar));
    let doc = compose(&[chart], &ContainerConfig::default());
    // One outer document only.
    assert_eq!(doc.svg.matches("<svg").count(), 1);
    assert!(doc.svg.contains("Total:"));
}

#[test]
fn uniform_scaling_fills_the_canvas_width() {
    let config = ContainerConfig::default()
        .with_header(false)
        .with_uniform_scale(true);
    let doc = compose(&[fragment(175.0, 100.0)], &config);
    // 350 / 175 = 2, centered at x = 0.
    assert!(doc.svg.contains("translate(0, 10) scale(2)"));
    // Scaled height feeds the stacking cursor: 10 + 200 + 20.
    assert_eq!(doc.height, 230.0);
}

#[test]
fn uniform_scaling_covers_mixed_width_stacks() {
    let config = ContainerConfig::default()
        .with_header(false)
        .with_uniform_scale(true);
    let doc = compose(
        &[fragment(700.0, 50.0), fragment(350.0, 50.0), fragment(175.0, 50.0)],
        &config,
    );
    // Canvas follows the widest slot; the others scale up to match it.
    assert_eq!(doc.width, 700.0);
    assert!(doc.svg.contains("translate(0, 10) scale(1)"));
    assert!(doc.svg.contains("translate(0, 80) scale(2)"));
    assert!(doc.svg.contains("translate(0, 200) scale(4)"));
    // 10 + 50 + 20 + 100 + 20 + 200 + 20.
    assert_eq!(doc.height, 420.0);
}

#[test]
fn border_tracks_the_document_box() {
    let config = ContainerConfig::default()
        .with_header(false)
        .with_border("112233", 2.0, 6.0);
    let doc = compose(&[fragment(350.0, 100.0)], &config);
    assert!(doc.svg.contains("<rect x=\"1\" y=\"1\" width=\"348\""));
    assert!(doc.svg.contains("stroke=\"#112233\""));
    assert!(doc.svg.contains("rx=\"6\""));
}

#[test]
fn empty_component_list_still_produces_a_minimal_canvas() {
    let doc = compose(&[], &ContainerConfig::default().with_header(false));
    assert_eq!(doc.width, 350.0);
    assert!(doc.height > 0.0);
}
