//! Draw surface shared by every node in the scene.

use crate::color::Color;
use crate::geometry::Rect;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect { rect: Rect, color: Color },
}

/// Sink for the primitives a node emits while drawing.
///
/// Rects are given in the coordinate space of the node being drawn; groups
/// shift the scope by their own position before drawing their children.
pub trait DrawScope {
    fn draw_rect_at(&mut self, rect: Rect, color: Color);
    fn push_offset(&mut self, dx: f32, dy: f32);
    fn pop_offset(&mut self, dx: f32, dy: f32);
}

/// Collects primitives in absolute coordinates.
#[derive(Default)]
pub struct RecordingDrawScope {
    offset_x: f32,
    offset_y: f32,
    primitives: Vec<DrawPrimitive>,
}

impl RecordingDrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for RecordingDrawScope {
    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: rect.translate(self.offset_x, self.offset_y),
            color,
        });
    }

    fn push_offset(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    fn pop_offset(&mut self, dx: f32, dy: f32) {
        self.offset_x -= dx;
        self.offset_y -= dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_offsets_accumulate_and_unwind() {
        let mut scope = RecordingDrawScope::new();
        scope.push_offset(10.0, 5.0);
        scope.push_offset(2.0, 3.0);
        scope.draw_rect_at(Rect::new(0.0, 0.0, 4.0, 4.0), Color::RED);
        scope.pop_offset(2.0, 3.0);
        scope.draw_rect_at(Rect::new(1.0, 1.0, 4.0, 4.0), Color::BLUE);
        scope.pop_offset(10.0, 5.0);

        assert_eq!(
            scope.into_primitives(),
            vec![
                DrawPrimitive::Rect {
                    rect: Rect::new(12.0, 8.0, 4.0, 4.0),
                    color: Color::RED,
                },
                DrawPrimitive::Rect {
                    rect: Rect::new(11.0, 6.0, 4.0, 4.0),
                    color: Color::BLUE,
                },
            ]
        );
    }
}
