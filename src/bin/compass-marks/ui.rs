//! UI rendering methods for the marker viewer.

use crate::CompassMarksApp;
use crate::colors;
use crate::constants::{LOOK_SENSITIVITY, MOVE_SPEED, PITCH_LIMIT, SIDEBAR_WIDTH, TURN_SPEED};
use crate::overlays::{ScreenStatus, draw_ground_grid, draw_markers, glyph_advances};
use compass_marks::config::{SCREEN_MARK_SIZE_BOUND, SCREEN_MARK_TEXT_REL_SIZE_BOUND};
use compass_marks::marker::{BASE_FONT_SIZE, draw_config_preview};
use compass_marks::{
    DisplayArea, DrawList, GlyphAdvances, MarkerConfig, ObjectKind, ScreenMarkConstraint,
    Viewport, derive_constraint, resolve,
};
use eframe::egui;

/// Buttons at the bottom of the configuration window.
enum ConfigAction {
    Save,
    SaveAndClose,
    Discard,
}

impl CompassMarksApp {
    /// Handles camera movement and shortcuts.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut moving = false;
        ctx.input(|i| {
            let dt = i.stable_dt.min(0.1);
            let camera = &mut self.camera;

            let mut walk = glam::Vec3::ZERO;
            if i.key_down(egui::Key::W) {
                walk += camera.ground_forward();
            }
            if i.key_down(egui::Key::S) {
                walk -= camera.ground_forward();
            }
            if i.key_down(egui::Key::D) {
                walk += camera.ground_right();
            }
            if i.key_down(egui::Key::A) {
                walk -= camera.ground_right();
            }
            if walk != glam::Vec3::ZERO {
                camera.eye += walk.normalize() * MOVE_SPEED * dt;
                moving = true;
            }

            if i.key_down(egui::Key::ArrowLeft) || i.key_down(egui::Key::Q) {
                camera.yaw -= TURN_SPEED * dt;
                moving = true;
            }
            if i.key_down(egui::Key::ArrowRight) || i.key_down(egui::Key::E) {
                camera.yaw += TURN_SPEED * dt;
                moving = true;
            }
            if i.key_down(egui::Key::ArrowUp) {
                camera.pitch = (camera.pitch + TURN_SPEED * dt).min(PITCH_LIMIT);
                moving = true;
            }
            if i.key_down(egui::Key::ArrowDown) {
                camera.pitch = (camera.pitch - TURN_SPEED * dt).max(-PITCH_LIMIT);
                moving = true;
            }

            if i.key_pressed(egui::Key::O) {
                self.config_open = !self.config_open;
            }
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Num0)) {
            self.reset_camera();
        }
        if moving {
            ctx.request_repaint();
        }
    }

    /// Renders the bottom status bar with controls hint and camera position.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("WASD: Move | Q/E, Arrows, Drag: Look | 0: Reset | O: Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let eye = self.camera.eye;
                    ui.label(format!("{:.1}, {:.1}, {:.1}", eye.x, eye.y, eye.z));
                    ui.label(format!("{} |", self.scene.name));
                });
            });
        });
    }

    /// Renders the left sidebar panel.
    pub fn show_sidebar(&mut self, ctx: &egui::Context, config: &MarkerConfig) {
        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_sidebar_content(ui, config);
                });
            });
    }

    /// Renders the sidebar content: marker toggles and settings access.
    fn show_sidebar_content(&mut self, ui: &mut egui::Ui, config: &MarkerConfig) {
        ui.add_space(4.0);

        ui.strong("Markers");
        ui.separator();

        if !config.enabled {
            ui.label("Markers are disabled");
        }

        for kind in ObjectKind::ALL {
            Self::overlay_toggle(
                ui,
                self.overlays.toggle_mut(kind),
                kind.display_name(),
                colors::kind_tint(kind),
            );
        }

        ui.add_space(12.0);

        ui.strong("Detected");
        ui.separator();

        let off_screen = self
            .detections
            .iter()
            .filter(|d| matches!(d.status, ScreenStatus::OffScreen | ScreenStatus::Behind))
            .count();
        ui.label(format!("{} in range, {off_screen} off screen", self.detections.len()));

        ui.add_space(12.0);

        if ui
            .button("Settings")
            .on_hover_text("Toggle the configuration window (O)")
            .clicked()
        {
            self.config_open = !self.config_open;
        }
    }

    /// Renders a marker toggle with a colour swatch.
    fn overlay_toggle(ui: &mut egui::Ui, value: &mut bool, label: &str, color: egui::Color32) {
        ui.horizontal(|ui| {
            ui.checkbox(value, "");
            let (rect, icon_response) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::click());
            let center = rect.center();
            ui.painter().circle_filled(center, 5.0, color);
            ui.painter()
                .circle_stroke(center, 5.0, egui::Stroke::new(1.0, egui::Color32::GRAY));
            let label_response = ui
                .label(label)
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if icon_response.clicked() || label_response.clicked() {
                *value = !*value;
            }
        });
    }

    /// Renders the world view: ground grid, markers and the settings preview.
    pub fn show_central_panel(&mut self, ctx: &egui::Context, config: &MarkerConfig) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::SKY))
            .show(ctx, |ui| {
                let (viewport_rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

                if response.dragged() {
                    let delta = response.drag_delta();
                    self.camera.yaw += delta.x * LOOK_SENSITIVITY;
                    self.camera.pitch = (self.camera.pitch - delta.y * LOOK_SENSITIVITY)
                        .clamp(-PITCH_LIMIT, PITCH_LIMIT);
                }

                let viewport = Viewport::from_rect(viewport_rect);
                if self.viewport != Some(viewport) {
                    // Insets may no longer fit the new size
                    self.config.update(viewport.size, |_| {});
                    self.viewport = Some(viewport);
                }

                ui.set_clip_rect(viewport_rect);
                let painter = ui.painter();
                let sprites = self.sprites();

                let glyphs: &GlyphAdvances = self
                    .glyphs
                    .get_or_insert_with(|| glyph_advances(painter, BASE_FONT_SIZE));

                draw_ground_grid(painter, &self.camera.projector(viewport));

                self.detections = draw_markers(
                    painter,
                    viewport,
                    config,
                    &self.camera,
                    &self.scene,
                    &self.overlays,
                    sprites,
                    glyphs,
                );

                if self.config_open {
                    let mut list = DrawList::new();
                    let style = sprites.style(colors::QUEST_TINT);
                    draw_config_preview(&mut list, viewport, config, &style, glyphs);
                    list.paint(painter);
                }
            });
    }

    /// Renders the configuration window and applies its edits.
    pub fn show_config_window(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let Some(viewport) = self.viewport else {
            return;
        };

        let mut open = self.config_open;
        let mut draft = *self.config.config();
        let mut action = None;

        egui::Window::new("Configuration")
            .open(&mut open)
            .resizable(false)
            .default_pos(viewport.origin + egui::vec2(24.0, 24.0))
            .show(ctx, |ui| {
                action = Self::config_contents(ui, viewport, &mut draft);
            });

        self.config.update(viewport.size, |config| *config = draft);

        match action {
            Some(ConfigAction::Save) => self.persist_config(frame),
            Some(ConfigAction::SaveAndClose) => {
                self.persist_config(frame);
                open = false;
            }
            Some(ConfigAction::Discard) => {
                let saved = self.saved_config;
                self.config.update(viewport.size, |config| *config = saved);
                open = false;
            }
            None => {}
        }

        self.config_open = open;
    }

    fn config_contents(
        ui: &mut egui::Ui,
        viewport: Viewport,
        draft: &mut MarkerConfig,
    ) -> Option<ConfigAction> {
        ui.checkbox(&mut draft.enabled, "Enable markers")
            .on_hover_text("Turns marker detection and drawing on or off.");

        if draft.enabled {
            ui.add_space(8.0);
            ui.checkbox(&mut draft.show_screen_mark, "Mark detected objects on screen")
                .on_hover_text("Shows the direction and distance of detected objects.");

            if draft.show_screen_mark {
                ui.indent("screen_mark", |ui| {
                    Self::screen_mark_settings(ui, viewport, draft);
                });
            }

            ui.add_space(8.0);
            ui.checkbox(&mut draft.show_detail_window, "Show detected object details")
                .on_hover_text("Lists detected objects in a separate window.");
            ui.checkbox(&mut draft.notify_toast, "Notify when an object is detected");
        }

        ui.separator();

        let mut action = None;
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                action = Some(ConfigAction::Save);
            }
            if ui.button("Save & Close").clicked() {
                action = Some(ConfigAction::SaveAndClose);
            }
            if ui.button("Discard").on_hover_text("Close and drop unsaved changes").clicked() {
                action = Some(ConfigAction::Discard);
            }
        });
        action
    }

    /// Marker size, label size and display-area editors.
    fn screen_mark_settings(ui: &mut egui::Ui, viewport: Viewport, draft: &mut MarkerConfig) {
        egui::Grid::new("screen_mark_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Marker size scale");
                ui.add(
                    egui::DragValue::new(&mut draft.screen_mark_size_scale)
                        .speed(0.01)
                        .range(SCREEN_MARK_SIZE_BOUND.range())
                        .fixed_decimals(2),
                );
                ui.end_row();

                ui.label("Text relative size")
                    .on_hover_text("Size of the marker labels relative to the marker size");
                ui.add(
                    egui::DragValue::new(&mut draft.screen_mark_text_rel_size_scale)
                        .speed(0.1)
                        .range(SCREEN_MARK_TEXT_REL_SIZE_BOUND.range())
                        .fixed_decimals(1),
                );
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.label("Display area (left / bottom / right / top)").on_hover_text(
            "Markers stay inside this area.\n\
             It is outlined in red while this window is open.",
        );

        let min = viewport.origin;
        let max = viewport.max();
        let mut area = resolve(viewport, draft.screen_mark_constraint);
        let edited = ui
            .horizontal(|ui| {
                [
                    (&mut area.left, min.x..=max.x),
                    (&mut area.bottom, min.y..=max.y),
                    (&mut area.right, min.x..=max.x),
                    (&mut area.top, min.y..=max.y),
                ]
                .into_iter()
                .fold(false, |edited, (edge, range)| {
                    let response = ui.add(egui::DragValue::new(edge).range(range).max_decimals(0));
                    response.changed() || edited
                })
            })
            .inner;
        draft.screen_mark_constraint =
            edited_constraint(viewport, draft.screen_mark_constraint, area, edited);

        ui.weak(format!(
            "(Full view is <{:.0}, {:.0}, {:.0}, {:.0}>)",
            min.x, max.y, max.x, min.y
        ));
    }

    /// Renders the list of currently detected objects.
    pub fn show_detail_window(&self, ctx: &egui::Context) {
        egui::Window::new("Detected Objects")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                if self.detections.is_empty() {
                    ui.label("Nothing in range");
                    return;
                }

                egui::Grid::new("detections")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for detection in self.detections.iter().rev() {
                            ui.colored_label(colors::kind_tint(detection.kind), &detection.name);
                            ui.label(format!("{:.1} m", detection.distance));
                            ui.label(detection.status.description());
                            ui.end_row();
                        }
                    });
            });
    }
}

/// Margins after the display-area editor ran this frame.
///
/// Resolving and deriving is not exact for fractional viewport origins, so the
/// stored margins are only replaced when an edge was actually edited.
fn edited_constraint(
    viewport: Viewport,
    current: ScreenMarkConstraint,
    area: DisplayArea,
    edited: bool,
) -> ScreenMarkConstraint {
    if edited {
        derive_constraint(viewport, area)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_marks::ConfigStore;
    use eframe::egui::{pos2, vec2};

    fn fractional_viewport() -> Viewport {
        Viewport::new(pos2(200.3, 27.7), vec2(1719.7, 1052.3))
    }

    #[test]
    fn untouched_display_area_leaves_store_alone() {
        let viewport = fractional_viewport();
        let mut store = ConfigStore::new(MarkerConfig::default());
        store.update(viewport.size, |_| {});
        let revision = store.revision();

        for _ in 0..10 {
            let current = store.config().screen_mark_constraint;
            let area = resolve(viewport, current);
            let next = edited_constraint(viewport, current, area, false);
            assert!(!store.update(viewport.size, |config| {
                config.screen_mark_constraint = next;
            }));
        }
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn edited_display_area_is_derived() {
        let viewport = fractional_viewport();
        let current = ScreenMarkConstraint::default();
        let mut area = resolve(viewport, current);
        area.left += 40.0;

        let next = edited_constraint(viewport, current, area, true);
        assert!((next.left - (current.left + 40.0)).abs() < 1e-3);
        assert!((next.up - current.up).abs() < 1e-3);
    }
}
