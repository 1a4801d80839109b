//! Size-hint snapshots

use crate::contract::Layout;
use stagecraft_ui_graphics::Size;

/// A copy of all six size hints of a layout participant.
///
/// Container policies read a child's hints once per pass through this type
/// instead of calling back into the child for every comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeHints {
    pub min_width: f32,
    pub min_height: f32,
    pub pref_width: f32,
    pub pref_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl SizeHints {
    pub fn of(layout: &dyn Layout) -> Self {
        Self {
            min_width: layout.min_width(),
            min_height: layout.min_height(),
            pref_width: layout.pref_width(),
            pref_height: layout.pref_height(),
            max_width: layout.max_width(),
            max_height: layout.max_height(),
        }
    }

    /// Hints for a node whose minimum, preferred and maximum are all `size`.
    pub fn fixed(size: Size) -> Self {
        Self {
            min_width: size.width,
            min_height: size.height,
            pref_width: size.width,
            pref_height: size.height,
            max_width: size.width,
            max_height: size.height,
        }
    }

    pub fn pref_size(&self) -> Size {
        Size::new(self.pref_width, self.pref_height)
    }

    /// Clamps `width` into `[min_width, max_width]`; a zero maximum is unbounded.
    pub fn constrain_width(&self, width: f32) -> f32 {
        constrain(width, self.min_width, self.max_width)
    }

    /// Clamps `height` into `[min_height, max_height]`; a zero maximum is unbounded.
    pub fn constrain_height(&self, height: f32) -> f32 {
        constrain(height, self.min_height, self.max_height)
    }
}

fn constrain(value: f32, min: f32, max: f32) -> f32 {
    let value = value.max(min);
    if max > 0.0 {
        // min wins when the hints contradict each other
        value.min(max.max(min))
    } else {
        value
    }
}

#[cfg(test)]
#[path = "tests/hints_tests.rs"]
mod tests;
