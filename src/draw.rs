//! Per-frame draw command list and its translation onto an egui painter.

use eframe::egui::{self, Color32, Pos2, TextureId, pos2};

/// UVs bound to the UL, UR, LR, LL corner slots of a textured quad.
const QUAD_UVS: [Pos2; 4] = [
    pos2(0.0, 0.0),
    pos2(1.0, 0.0),
    pos2(1.0, 1.0),
    pos2(0.0, 1.0),
];

/// A single draw operation queued for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RectOutline {
        rect: egui::Rect,
        colour: Color32,
        thickness: f32,
    },
    /// A textured quad with corners in UL, UR, LR, LL order.
    TexturedQuad {
        corners: [Pos2; 4],
        texture: TextureId,
        tint: Color32,
    },
    /// Text with its upper-left corner at `pos`.
    Text {
        pos: Pos2,
        text: String,
        font_size: f32,
        colour: Color32,
    },
}

/// Append-only list of draw commands, painted in insertion order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rect_outline(&mut self, rect: egui::Rect, colour: Color32, thickness: f32) {
        self.push(DrawCommand::RectOutline {
            rect,
            colour,
            thickness,
        });
    }

    pub fn textured_quad(&mut self, corners: [Pos2; 4], texture: TextureId, tint: Color32) {
        self.push(DrawCommand::TexturedQuad {
            corners,
            texture,
            tint,
        });
    }

    pub fn text(&mut self, pos: Pos2, text: impl Into<String>, font_size: f32, colour: Color32) {
        self.push(DrawCommand::Text {
            pos,
            text: text.into(),
            font_size,
            colour,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paints every command onto `painter`, later commands on top.
    pub fn paint(&self, painter: &egui::Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::RectOutline {
                    rect,
                    colour,
                    thickness,
                } => {
                    painter.rect_stroke(
                        *rect,
                        0.0,
                        egui::Stroke::new(*thickness, *colour),
                        egui::StrokeKind::Middle,
                    );
                }
                DrawCommand::TexturedQuad {
                    corners,
                    texture,
                    tint,
                } => {
                    painter.add(egui::Shape::mesh(quad_mesh(corners, *texture, *tint)));
                }
                DrawCommand::Text {
                    pos,
                    text,
                    font_size,
                    colour,
                } => {
                    painter.text(
                        *pos,
                        egui::Align2::LEFT_TOP,
                        text,
                        egui::FontId::proportional(*font_size),
                        *colour,
                    );
                }
            }
        }
    }
}

fn quad_mesh(corners: &[Pos2; 4], texture: TextureId, tint: Color32) -> egui::Mesh {
    let mut mesh = egui::Mesh::with_texture(texture);
    for (pos, uv) in corners.iter().zip(QUAD_UVS) {
        mesh.vertices.push(egui::epaint::Vertex {
            pos: *pos,
            uv,
            color: tint,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}
