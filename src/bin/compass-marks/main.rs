#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod overlays;
mod ui;

use assets::{MARKER_ARROW_PATH, MARKER_ICON_PATH, load_and_decode_image, load_scene};
use clap::Parser;
use compass_marks::config::CONFIG_VERSION;
use compass_marks::scene::CameraStart;
use compass_marks::{Camera, ConfigStore, GlyphAdvances, MarkerConfig, Scene, Viewport};
use constants::CONFIG_KEY;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use overlays::{Detection, OverlayVisibility, Sprites};
use std::collections::HashSet;
use std::path::PathBuf;

/// On-screen direction and distance markers for tracked world objects.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Load the scene from a RON file instead of the bundled demo scene
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Start from default settings, ignoring stored ones
    #[arg(long)]
    reset_config: bool,
}

/// Main application state for the marker viewer.
pub struct CompassMarksApp {
    scene: Scene,
    camera: Camera,
    config: ConfigStore,
    /// Settings as last saved, restored by "Discard".
    saved_config: MarkerConfig,
    config_open: bool,
    overlays: OverlayVisibility,
    viewport: Option<Viewport>,
    glyphs: Option<GlyphAdvances>,
    icon_texture: TextureHandle,
    arrow_texture: TextureHandle,
    detections: Vec<Detection>,
    announced: HashSet<usize>,
    toasts: Toasts,
}

impl CompassMarksApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let scene = match load_scene(cli.scene.as_deref()) {
            Ok(scene) => {
                log::info!("Loaded scene '{}' with {} objects", scene.name, scene.objects.len());
                scene
            }
            Err(err) => {
                log::error!("{err}");
                show_error(&mut toasts, err.to_string());
                Scene {
                    name: "(no scene)".to_owned(),
                    camera: CameraStart::default(),
                    detection_range: 0.0,
                    objects: Vec::new(),
                }
            }
        };

        let config = if cli.reset_config {
            log::info!("Ignoring stored settings");
            MarkerConfig::default()
        } else {
            load_config(cc.storage)
        };

        let icon_texture = load_sprite(&cc.egui_ctx, MARKER_ICON_PATH, &mut toasts);
        let arrow_texture = load_sprite(&cc.egui_ctx, MARKER_ARROW_PATH, &mut toasts);

        Self {
            camera: scene.camera.camera(),
            scene,
            config: ConfigStore::new(config),
            saved_config: config,
            config_open: false,
            overlays: OverlayVisibility::default(),
            viewport: None,
            glyphs: None,
            icon_texture,
            arrow_texture,
            detections: Vec::new(),
            announced: HashSet::new(),
            toasts,
        }
    }

    fn sprites(&self) -> Sprites {
        Sprites {
            icon: self.icon_texture.id(),
            arrow: self.arrow_texture.id(),
        }
    }

    fn reset_camera(&mut self) {
        self.camera = self.scene.camera.camera();
    }

    /// Writes the current settings to storage and makes them the discard point.
    fn persist_config(&mut self, frame: &mut eframe::Frame) {
        let config = *self.config.config();
        match frame.storage_mut() {
            Some(storage) => {
                eframe::set_value(storage, CONFIG_KEY, &config);
                storage.flush();
                self.saved_config = config;
                log::info!("Saved settings (revision {})", self.config.revision());
            }
            None => {
                log::warn!("No storage available, settings not saved");
                show_error(&mut self.toasts, "Settings could not be saved".to_owned());
            }
        }
    }

    /// Announces objects that entered detection range since the last frame.
    fn notify_new_detections(&mut self, config: &MarkerConfig) {
        let current: HashSet<usize> = self.detections.iter().map(|d| d.index).collect();
        self.announced.retain(|index| current.contains(index));

        for detection in &self.detections {
            if !self.announced.insert(detection.index) {
                continue;
            }
            log::info!(
                "Detected {} ({}) at {:.1} m",
                detection.name,
                detection.kind.display_name(),
                detection.distance
            );
            if config.notify_toast {
                self.toasts.add(Toast {
                    kind: ToastKind::Info,
                    text: format!("Detected {} ({:.1} m)", detection.name, detection.distance)
                        .into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(4.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
        }
    }
}

impl eframe::App for CompassMarksApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        // Settings are read once here; edits made below apply next frame
        let config = self.config.snapshot().config;

        self.show_status_bar(ctx);
        self.show_sidebar(ctx, &config);
        self.show_central_panel(ctx, &config);

        if self.config_open {
            self.show_config_window(ctx, frame);
        }
        if config.enabled && config.show_detail_window {
            self.show_detail_window(ctx);
        }

        self.notify_new_detections(&config);
        self.toasts.show(ctx);
    }
}

fn show_error(toasts: &mut Toasts, text: String) {
    toasts.add(Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(10.0)
            .show_icon(true),
        ..Default::default()
    });
}

fn load_config(storage: Option<&dyn eframe::Storage>) -> MarkerConfig {
    let mut config = MarkerConfig::default();
    let Some(stored) =
        storage.and_then(|storage| eframe::get_value::<MarkerConfig>(storage, CONFIG_KEY))
    else {
        return config;
    };

    if config.load(&stored) {
        log::info!("Loaded stored settings");
    } else {
        log::warn!(
            "Stored settings are version {}, expected {CONFIG_VERSION}; using defaults",
            stored.version
        );
    }
    config
}

/// Uploads a sprite, falling back to a plain white texel if it cannot be loaded.
fn load_sprite(ctx: &egui::Context, path: &str, toasts: &mut Toasts) -> TextureHandle {
    let image = match load_and_decode_image(path) {
        Ok(decoded) => ColorImage::from_rgba_unmultiplied(
            [decoded.width as usize, decoded.height as usize],
            &decoded.pixels,
        ),
        Err(err) => {
            log::error!("{err}");
            show_error(toasts, err.to_string());
            ColorImage::from_rgba_unmultiplied([1, 1], &[255, 255, 255, 255])
        }
    };
    ctx.load_texture(path, image, TextureOptions::LINEAR)
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Compass Marks",
        options,
        Box::new(|cc| Ok(Box::new(CompassMarksApp::new(cc, cli)))),
    )
}
