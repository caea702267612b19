//! Label metrics and shadowed label drawing.

use crate::draw::DrawList;
use eframe::egui::{Color32, Pos2, Vec2, ecolor::Hsva, vec2};
use std::collections::HashMap;

/// Per-glyph advance widths of the active font at its native size.
pub trait FontMetrics {
    /// Font size the advances are measured at.
    fn native_size(&self) -> f32;

    /// Advance width of `c`, if the font has a glyph for it.
    fn advance(&self, c: char) -> Option<f32>;

    /// Advance used for glyphs the font lacks.
    fn fallback_advance(&self) -> f32;
}

/// A plain table of glyph advances.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphAdvances {
    native_size: f32,
    fallback_advance: f32,
    advances: HashMap<char, f32>,
}

impl GlyphAdvances {
    pub fn new(native_size: f32, fallback_advance: f32) -> Self {
        Self {
            native_size,
            fallback_advance,
            advances: HashMap::new(),
        }
    }

    pub fn with_glyph(mut self, c: char, advance: f32) -> Self {
        self.insert(c, advance);
        self
    }

    pub fn insert(&mut self, c: char, advance: f32) {
        self.advances.insert(c, advance);
    }

    pub fn len(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }
}

impl FontMetrics for GlyphAdvances {
    fn native_size(&self) -> f32 {
        self.native_size
    }

    fn advance(&self, c: char) -> Option<f32> {
        self.advances.get(&c).copied()
    }

    fn fallback_advance(&self) -> f32 {
        self.fallback_advance
    }
}

/// Pixel extent of a label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelMetrics {
    pub width: f32,
    pub height: f32,
}

impl LabelMetrics {
    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }
}

/// Measures `text` at `font_size` pixels.
///
/// Width is the widest line; height is `font_size` regardless of how many
/// lines the text has.
pub fn measure_text(metrics: &impl FontMetrics, text: &str, font_size: f32) -> LabelMetrics {
    let widest = text
        .split('\n')
        .map(|line| {
            line.chars()
                .map(|c| metrics.advance(c).unwrap_or_else(|| metrics.fallback_advance()))
                .sum::<f32>()
        })
        .fold(0.0_f32, f32::max);

    let native = metrics.native_size();
    let scale = if native > 0.0 { font_size / native } else { 0.0 };

    LabelMetrics {
        width: widest * scale,
        height: font_size,
    }
}

/// Darkened variant of an unmultiplied RGBA colour.
///
/// Keeps hue and alpha; saturation becomes `1 - lightness²` and value becomes
/// `lightness`.
pub fn shadow_rgba(colour: [f32; 4], lightness: f32) -> [f32; 4] {
    let [r, g, b, a] = colour;
    let base = Hsva::from_rgba_unmultiplied(r, g, b, a);
    Hsva {
        h: base.h,
        s: 1.0 - lightness * lightness,
        v: lightness,
        a,
    }
    .to_rgba_unmultiplied()
}

pub fn shadow_colour(colour: Color32, lightness: f32) -> Color32 {
    to_color32(shadow_rgba(to_rgba(colour), lightness))
}

fn to_rgba(colour: Color32) -> [f32; 4] {
    colour.to_srgba_unmultiplied().map(|c| f32::from(c) / 255.0)
}

fn to_color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Queues `text` with a one-`scale` shadow to the right and below it.
///
/// The drawn font size is `font_size * scale`. Both shadow copies are queued
/// before the main text so they end up beneath it.
pub fn draw_text_with_shadow(
    list: &mut DrawList,
    text: &str,
    pos: Pos2,
    font_size: f32,
    scale: f32,
    colour: Color32,
    shadow_lightness: f32,
) {
    let size = font_size * scale;
    let shadow = shadow_colour(colour, shadow_lightness);
    list.text(pos + vec2(scale, 0.0), text, size, shadow);
    list.text(pos + vec2(0.0, scale), text, size, shadow);
    list.text(pos, text, size, colour);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use eframe::egui::pos2;

    const EPS: f32 = 1e-4;

    fn font() -> GlyphAdvances {
        GlyphAdvances::new(20.0, 6.0)
            .with_glyph('A', 10.0)
            .with_glyph('i', 4.0)
    }

    #[test]
    fn single_glyph_scales_with_font_size() {
        let metrics = measure_text(&font(), "A", 20.0);
        assert_eq!(metrics, LabelMetrics { width: 10.0, height: 20.0 });

        let doubled = measure_text(&font(), "A", 40.0);
        assert_eq!(doubled, LabelMetrics { width: 20.0, height: 40.0 });
    }

    #[test]
    fn widest_line_wins_and_height_ignores_line_count() {
        let metrics = measure_text(&font(), "i\nAAi\nA", 20.0);
        assert_eq!(metrics.width, 24.0);
        assert_eq!(metrics.height, 20.0);
    }

    #[test]
    fn unknown_glyphs_use_fallback() {
        let metrics = measure_text(&font(), "A?", 10.0);
        assert!((metrics.width - 8.0).abs() < EPS);
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(measure_text(&font(), "", 16.0).width, 0.0);
    }

    #[test]
    fn shadow_keeps_hue_and_alpha() {
        let shadow = shadow_rgba([1.0, 0.0, 0.0, 1.0], 0.5);
        let [r, g, b, a] = shadow;
        let hsva = Hsva::from_rgba_unmultiplied(r, g, b, a);
        assert!(hsva.h.abs() < EPS || (hsva.h - 1.0).abs() < EPS);
        assert!((hsva.s - 0.75).abs() < EPS);
        assert!((hsva.v - 0.5).abs() < EPS);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn shadow_of_translucent_colour_keeps_alpha() {
        let shadow = shadow_rgba([0.2, 0.4, 0.9, 0.3], 0.2);
        assert!((shadow[3] - 0.3).abs() < EPS);
    }

    #[test]
    fn shadow_colour32_is_darker() {
        let shadow = shadow_colour(Color32::RED, 0.5);
        assert_eq!(shadow, Color32::from_rgb(128, 32, 32));
    }

    #[test]
    fn shadow_copies_precede_main_text() {
        let mut list = DrawList::new();
        draw_text_with_shadow(&mut list, "Aetheryte", pos2(10.0, 10.0), 15.0, 2.0, Color32::WHITE, 0.1);

        let texts: Vec<_> = list
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::Text {
                    pos,
                    font_size,
                    colour,
                    ..
                } => (*pos, *font_size, *colour),
                other => panic!("unexpected command {other:?}"),
            })
            .collect();

        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].0, pos2(12.0, 10.0));
        assert_eq!(texts[1].0, pos2(10.0, 12.0));
        assert_eq!(texts[2], (pos2(10.0, 10.0), 30.0, Color32::WHITE));
        assert_ne!(texts[0].2, Color32::WHITE);
        assert_eq!(texts[0].2, texts[1].2);
    }
}
