use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use stagecraft_core::{add_child, Node, NodeError, NodeRef};
use stagecraft_ui::{LayoutContainer, LayoutLeaf, LayoutPolicy};
use stagecraft_ui_graphics::{Color, DrawScope, Size};
use stagecraft_ui_layout::{Layout, SizeHints};

fn layout_children(node: &dyn Node) -> Vec<(NodeRef, SizeHints)> {
    let Some(children) = node.children() else {
        return Vec::new();
    };
    children
        .snapshot()
        .into_iter()
        .map(|child| {
            let hints = child.as_layout().map(SizeHints::of).unwrap_or_default();
            (child, hints)
        })
        .collect()
}

fn place(child: &NodeRef, x: f32, y: f32, width: f32, height: f32) {
    child.set_bounds(x, y, width, height);
    if let Some(layout) = child.as_layout() {
        layout.validate();
    }
}

/// Stacks children top to bottom at their preferred heights. The last child
/// takes whatever height is left.
pub struct ColumnPolicy {
    pub spacing: f32,
}

impl LayoutPolicy<LayoutContainer> for ColumnPolicy {
    fn pref_width(&self, node: &LayoutContainer) -> f32 {
        layout_children(node)
            .iter()
            .map(|(_, hints)| hints.pref_width)
            .fold(0.0, f32::max)
    }

    fn pref_height(&self, node: &LayoutContainer) -> f32 {
        let children = layout_children(node);
        let gaps = children.len().saturating_sub(1) as f32 * self.spacing;
        children.iter().map(|(_, hints)| hints.pref_height).sum::<f32>() + gaps
    }

    fn layout(&self, node: &LayoutContainer) {
        let children = layout_children(node);
        let width = node.width();
        let mut y = 0.0;
        for (index, (child, hints)) in children.iter().enumerate() {
            let height = if index + 1 == children.len() {
                (node.height() - y).max(hints.min_height)
            } else {
                hints.pref_height
            };
            place(child, 0.0, y, hints.constrain_width(width), height);
            y += height + self.spacing;
        }
        debug!("column {} placed {} children", node.id(), children.len());
    }
}

/// Splits the width evenly between the children.
pub struct RowPolicy {
    pub spacing: f32,
}

impl LayoutPolicy<LayoutContainer> for RowPolicy {
    fn pref_width(&self, node: &LayoutContainer) -> f32 {
        let children = layout_children(node);
        let gaps = children.len().saturating_sub(1) as f32 * self.spacing;
        children.iter().map(|(_, hints)| hints.pref_width).sum::<f32>() + gaps
    }

    fn pref_height(&self, node: &LayoutContainer) -> f32 {
        layout_children(node)
            .iter()
            .map(|(_, hints)| hints.pref_height)
            .fold(0.0, f32::max)
    }

    fn layout(&self, node: &LayoutContainer) {
        let children = layout_children(node);
        if children.is_empty() {
            return;
        }
        let gaps = (children.len() - 1) as f32 * self.spacing;
        let cell = ((node.width() - gaps) / children.len() as f32).max(0.0);
        for (index, (child, hints)) in children.iter().enumerate() {
            let x = index as f32 * (cell + self.spacing);
            place(child, x, 0.0, cell, hints.constrain_height(node.height()));
        }
    }
}

/// A solid block with a preferred size.
pub struct Swatch {
    color: Color,
    pref: Cell<Size>,
}

impl Swatch {
    pub fn new(color: Color, width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            color,
            pref: Cell::new(Size::new(width, height)),
        })
    }

    /// Changes the preferred size and invalidates `node` and its ancestors.
    pub fn resize(&self, node: &LayoutLeaf, width: f32, height: f32) {
        self.pref.set(Size::new(width, height));
        node.invalidate_hierarchy();
    }
}

impl LayoutPolicy<LayoutLeaf> for Swatch {
    fn pref_width(&self, _node: &LayoutLeaf) -> f32 {
        self.pref.get().width
    }

    fn pref_height(&self, _node: &LayoutLeaf) -> f32 {
        self.pref.get().height
    }

    fn paint(&self, node: &LayoutLeaf, scope: &mut dyn DrawScope, parent_alpha: f32) {
        scope.draw_rect_at(node.bounds(), self.color.modulate_alpha(parent_alpha));
    }
}

/// Handles to the interesting parts of the demo scene.
pub struct Showcase {
    pub screen: Rc<LayoutContainer>,
    pub header: Rc<LayoutLeaf>,
    pub header_swatch: Rc<Swatch>,
    pub tiles: Rc<LayoutContainer>,
}

/// Builds the screen: header, tile row, footer.
pub fn build_showcase(tile_count: usize) -> Result<Showcase, NodeError> {
    let header_swatch = Swatch::new(Color::from_rgb_u8(0x33, 0x66, 0x99), 0.0, 48.0);
    let header = LayoutLeaf::with_policy(header_swatch.clone());

    let tiles = LayoutContainer::with_policy(Rc::new(RowPolicy { spacing: 8.0 }));
    for index in 0..tile_count {
        let shade = 0.3 + 0.6 * index as f32 / tile_count.max(1) as f32;
        let tile = LayoutLeaf::with_policy(Swatch::new(Color::rgb(shade, 0.4, 0.2), 64.0, 64.0));
        add_child(&*tiles, tile)?;
    }

    let footer = LayoutLeaf::with_policy(Swatch::new(Color::rgb(0.1, 0.1, 0.1), 0.0, 24.0));

    let screen = LayoutContainer::with_children(
        Rc::new(ColumnPolicy { spacing: 4.0 }),
        [
            header.clone() as NodeRef,
            tiles.clone() as NodeRef,
            footer as NodeRef,
        ],
    )?;
    screen.set_fill_parent(true);

    Ok(Showcase {
        screen,
        header,
        header_swatch,
        tiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagecraft_core::{Stage, StageOptions};
    use stagecraft_ui_graphics::{Rect, RecordingDrawScope};

    #[test]
    fn screen_fills_viewport_and_stacks_children() {
        let stage = Stage::new(StageOptions::default().with_viewport_size(400.0, 300.0));
        let showcase = build_showcase(3).expect("scene builds");
        stage.add_actor(showcase.screen.clone()).expect("screen attaches");

        let mut scope = RecordingDrawScope::new();
        stage.draw(&mut scope);

        assert_eq!(showcase.screen.size(), Size::new(400.0, 300.0));
        assert_eq!(showcase.header.bounds(), Rect::new(0.0, 0.0, 400.0, 48.0));
        assert_eq!(showcase.tiles.bounds(), Rect::new(0.0, 52.0, 400.0, 64.0));
        // header, three tiles, footer
        assert_eq!(scope.primitives().len(), 5);
    }

    #[test]
    fn resizing_the_header_moves_the_tiles() {
        let stage = Stage::default();
        let showcase = build_showcase(2).expect("scene builds");
        stage.add_actor(showcase.screen.clone()).expect("screen attaches");
        showcase.screen.validate();

        showcase
            .header_swatch
            .resize(&showcase.header, 0.0, 100.0);
        assert!(showcase.screen.needs_layout());

        showcase.screen.validate();
        assert_eq!(showcase.tiles.y(), 104.0);
    }

    #[test]
    fn tiles_share_the_row_width() {
        let showcase = build_showcase(2).expect("scene builds");
        showcase.tiles.set_size(136.0, 64.0);
        showcase.tiles.validate();

        let children = showcase.tiles.children().expect("row holds children");
        let second = children.get(1).expect("second tile");
        assert_eq!(second.bounds(), Rect::new(72.0, 0.0, 64.0, 64.0));
    }
}
