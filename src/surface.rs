use bevy::prelude::*;

/// Alpha below which a retained stroke is dropped: under 1/255 it can no
/// longer change an 8-bit output pixel.
const VISIBILITY_FLOOR: f32 = 1.0 / 255.0;

/// A single drawing primitive recorded on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Line { from: Vec2, to: Vec2, color: Hsla },
    Circle { center: Vec2, radius: f32, color: Hsla },
}

impl Stroke {
    pub fn color(&self) -> Hsla {
        match self {
            Stroke::Line { color, .. } | Stroke::Circle { color, .. } => *color,
        }
    }

    fn color_mut(&mut self) -> &mut Hsla {
        match self {
            Stroke::Line { color, .. } | Stroke::Circle { color, .. } => color,
        }
    }
}

/// 2D render surface in surface coordinates: origin top-left, +y downward.
/// Entities draw through this so the simulation never touches the renderer.
pub trait Surface {
    /// Dim everything stroked so far. Called once at the start of a tick,
    /// so older trail segments decay toward invisible instead of vanishing.
    fn fade(&mut self, alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// Surface that keeps every stroke alive across frames and attenuates it on
/// each `fade`. This reproduces the glow of compositing a low-alpha
/// rectangle over an accumulating canvas, as explicit, inspectable state:
/// the renderer replays the retained strokes each frame.
#[derive(Resource, Default)]
pub struct RetainedSurface {
    strokes: Vec<Stroke>,
}

impl RetainedSurface {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

impl Surface for RetainedSurface {
    fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha;
        for stroke in &mut self.strokes {
            stroke.color_mut().alpha *= keep;
        }
        self.strokes
            .retain(|stroke| stroke.color().alpha >= VISIBILITY_FLOOR);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla) {
        self.strokes.push(Stroke::Line { from, to, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.strokes.push(Stroke::Circle { center, radius, color });
    }
}
