use compass_marks::marker::{BASE_ICON_SIZE, distance_label, draw_config_preview, draw_marker};
use compass_marks::{
    Camera, ConfigStore, DisplayArea, DrawCommand, DrawList, GlyphAdvances, MarkerConfig,
    MarkerStyle, ScreenMarkConstraint, Viewport, derive_constraint, layout_marker, resolve,
};
use eframe::egui::{Color32, Pos2, TextureId, pos2, vec2};
use glam::Vec3;

const EPS: f32 = 1e-2;

fn full_hd() -> Viewport {
    Viewport::new(Pos2::ZERO, vec2(1920.0, 1080.0))
}

fn glyphs() -> GlyphAdvances {
    GlyphAdvances::new(13.0, 7.0)
}

fn style() -> MarkerStyle {
    MarkerStyle {
        icon: TextureId::User(1),
        arrow: TextureId::User(2),
        tint: Color32::GOLD,
        label_colour: Color32::WHITE,
        shadow_lightness: 0.1,
    }
}

fn textured_quads(list: &DrawList) -> Vec<TextureId> {
    list.commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::TexturedQuad { texture, .. } => Some(*texture),
            _ => None,
        })
        .collect()
}

#[test]
fn object_ahead_is_drawn_at_screen_centre() {
    let viewport = full_hd();
    let camera = Camera::default();
    let projector = camera.projector(viewport);
    let config = MarkerConfig::default();
    let target = Vec3::new(0.0, 0.0, -10.0);

    let label = distance_label("Ahead", target.distance(camera.eye));
    let layout = layout_marker(viewport, &config, &projector, target, &label, &glyphs())
        .expect("target in front of the camera projects");

    assert!((layout.icon.anchor - viewport.centre()).length() < EPS);
    assert!(!layout.is_pinned());

    let mut list = DrawList::new();
    draw_marker(&mut list, &layout, &style());
    assert_eq!(textured_quads(&list), vec![TextureId::User(1)]);
    // Two shadow copies and the label itself
    assert_eq!(list.len(), 4);
    match list.commands().last() {
        Some(DrawCommand::Text { text, colour, .. }) => {
            assert_eq!(text, "Ahead\n10.0 m");
            assert_eq!(*colour, Color32::WHITE);
        }
        other => panic!("expected label text last, got {other:?}"),
    }
}

#[test]
fn object_off_to_the_side_is_pinned_with_an_arrow() {
    let viewport = full_hd();
    let camera = Camera::default();
    let projector = camera.projector(viewport);
    let config = MarkerConfig::default();

    let layout = layout_marker(
        viewport,
        &config,
        &projector,
        Vec3::new(100.0, 0.0, -10.0),
        "Side",
        &glyphs(),
    )
    .expect("target in front of the camera projects");

    let area = resolve(viewport, config.screen_mark_constraint);
    let half_icon = BASE_ICON_SIZE / 2.0;
    assert!((layout.icon.anchor.x - (area.right - half_icon)).abs() < EPS);
    assert!((layout.icon.anchor.y - viewport.centre().y).abs() < EPS);

    let arrow = layout.arrow.expect("pinned marker has an arrow");
    assert!(arrow.anchor.x > layout.icon.anchor.x);

    // The sprite's top edge now faces the target
    let corners = arrow.corners();
    let tip = pos2(
        (corners[0].x + corners[1].x) / 2.0,
        (corners[0].y + corners[1].y) / 2.0,
    );
    assert!(tip.x > arrow.anchor.x + arrow.size / 2.0 - EPS);
    assert!((tip.y - arrow.anchor.y).abs() < EPS);

    let mut list = DrawList::new();
    draw_marker(&mut list, &layout, &style());
    assert_eq!(textured_quads(&list), vec![TextureId::User(1), TextureId::User(2)]);
}

#[test]
fn object_behind_the_camera_is_skipped() {
    let viewport = full_hd();
    let camera = Camera::default();
    let projector = camera.projector(viewport);

    let layout = layout_marker(
        viewport,
        &MarkerConfig::default(),
        &projector,
        Vec3::new(0.0, 0.0, 10.0),
        "Behind",
        &glyphs(),
    );
    assert!(layout.is_none());
}

#[test]
fn display_area_edit_round_trips_through_the_store() {
    let viewport = full_hd();
    let mut store = ConfigStore::new(MarkerConfig::default());

    let edited = DisplayArea::new(100.0, 1000.0, 1820.0, 80.0);
    let constraint = derive_constraint(viewport, edited);
    assert_eq!(constraint, ScreenMarkConstraint::new(100.0, 80.0, 100.0, 80.0));

    assert!(store.update(viewport.size, |config| {
        config.screen_mark_constraint = constraint;
    }));
    assert_eq!(store.revision(), 1);

    let area = resolve(viewport, store.snapshot().config.screen_mark_constraint);
    assert_eq!(area, edited);
}

#[test]
fn oversized_margins_are_capped_on_update() {
    let viewport = full_hd();
    let mut store = ConfigStore::new(MarkerConfig::default());

    store.update(viewport.size, |config| {
        config.screen_mark_constraint = ScreenMarkConstraint::new(5000.0, 0.0, 1.0, 600.0);
    });

    let constraint = store.config().screen_mark_constraint;
    assert_eq!(constraint, ScreenMarkConstraint::new(950.0, 2.0, 2.0, 530.0));
}

#[test]
fn config_preview_outlines_area_and_draws_centre_marker() {
    let viewport = full_hd();
    let config = MarkerConfig::default();
    let mut list = DrawList::new();

    draw_config_preview(&mut list, viewport, &config, &style(), &glyphs());

    match list.commands().first() {
        Some(DrawCommand::RectOutline { rect, colour, thickness }) => {
            assert_eq!(*rect, resolve(viewport, config.screen_mark_constraint).rect());
            assert_eq!(*colour, Color32::RED);
            assert_eq!(*thickness, 4.0);
        }
        other => panic!("expected the display-area outline first, got {other:?}"),
    }
    assert_eq!(textured_quads(&list), vec![TextureId::User(1)]);
}
