//! Pointer-reactive dot grid background
//!
//! A uniform grid of dots covering the viewport, redrawn once per display
//! refresh. Dots near the pointer glow brighter and larger; the falloff is
//! linear with distance. The grid itself is static between resizes, so a
//! frame is a constant-time pass over the point list.
//!
//! # Design
//!
//! This is a decorative effect implementing `canvas::Program`. It uses
//! generic Message types and does not depend on application-specific types.
//! If the drawing surface is unavailable the effect simply does not render;
//! nothing else observes it.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, color, mouse};

/// Distance between neighboring grid dots, in pixels
pub const SPACING: f32 = 25.0;

/// Radius of the pointer glow, in pixels
pub const GLOW_RADIUS: f32 = 200.0;

/// Opacity floor for dots outside the glow
pub const BASE_OPACITY: f32 = 0.3;

/// Dot hue (a soft blue, matching `theme::ACCENT_SOFT`)
const DOT_COLOR: Color = color!(0x93c5fd);

/// Opacity of a dot at `distance` from the pointer
pub fn glow_opacity(distance: f32) -> f32 {
    (1.0 - distance / GLOW_RADIUS).max(BASE_OPACITY)
}

/// Radius of a dot at `distance` from the pointer
pub fn glow_size(distance: f32) -> f32 {
    (2.0 * (1.0 - distance / GLOW_RADIUS)).max(1.0)
}

/// Static dot grid covering the viewport
///
/// Points are created in bulk when the viewport size is established and
/// replaced wholesale on resize; they are never mutated in place.
#[derive(Debug, Clone)]
pub struct DotGrid {
    points: Vec<Point>,
}

impl DotGrid {
    pub fn new(width: f32, height: f32) -> Self {
        let mut grid = Self { points: Vec::new() };
        grid.regenerate(width, height);
        grid
    }

    /// Rebuild the grid for a new viewport size
    ///
    /// Produces exactly `ceil(width / SPACING) * ceil(height / SPACING)`
    /// points, anchored at the top-left corner.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        self.points.clear();

        let mut x = 0.0;
        while x < width {
            let mut y = 0.0;
            while y < height {
                self.points.push(Point::new(x, y));
                y += SPACING;
            }
            x += SPACING;
        }

        tracing::debug!(
            "Regenerated dot grid: {}x{} -> {} points",
            width,
            height,
            self.points.len()
        );
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Canvas program drawing the grid for one frame
///
/// Borrows the grid from application state; the pointer position is the last
/// one observed by the pointer-move handler, not the canvas cursor, so the
/// glow keeps its place while the pointer rests on overlaying widgets.
struct DotGridProgram<'a> {
    grid: &'a DotGrid,
    pointer: Point,
}

impl<Message> Program<Message> for DotGridProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, bounds.height),
            Color::BLACK,
        );

        for dot in self.grid.points() {
            let distance = dot.distance(self.pointer);
            let circle = Path::circle(*dot, glow_size(distance));
            frame.fill(
                &circle,
                Color {
                    a: glow_opacity(distance),
                    ..DOT_COLOR
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Build the full-viewport background element
pub fn view<'a, Message: 'a>(grid: &'a DotGrid, pointer: Point) -> Element<'a, Message> {
    Canvas::new(DotGridProgram { grid, pointer })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_viewport_at_fixed_spacing() {
        let grid = DotGrid::new(1000.0, 500.0);
        // ceil(1000 / 25) * ceil(500 / 25)
        assert_eq!(grid.points().len(), 40 * 20);
    }

    #[test]
    fn partial_cells_get_their_own_dots() {
        let grid = DotGrid::new(1010.0, 510.0);
        // ceil(1010 / 25) = 41, ceil(510 / 25) = 21
        assert_eq!(grid.points().len(), 41 * 21);
    }

    #[test]
    fn regenerate_replaces_points_wholesale() {
        let mut grid = DotGrid::new(100.0, 100.0);
        assert_eq!(grid.points().len(), 16);

        grid.regenerate(50.0, 50.0);
        assert_eq!(grid.points().len(), 4);
    }

    #[test]
    fn empty_viewport_produces_no_points() {
        let grid = DotGrid::new(0.0, 0.0);
        assert!(grid.points().is_empty());
    }

    #[test]
    fn dot_under_pointer_is_at_full_glow() {
        assert_eq!(glow_opacity(0.0), 1.0);
        assert_eq!(glow_size(0.0), 2.0);
    }

    #[test]
    fn dot_outside_glow_radius_is_at_floor() {
        assert_eq!(glow_opacity(GLOW_RADIUS), BASE_OPACITY);
        assert_eq!(glow_size(GLOW_RADIUS), 1.0);

        // Falloff clamps instead of going negative further out
        assert_eq!(glow_opacity(GLOW_RADIUS * 3.0), BASE_OPACITY);
        assert_eq!(glow_size(GLOW_RADIUS * 3.0), 1.0);
    }

    #[test]
    fn glow_falls_off_linearly_in_between() {
        assert_eq!(glow_opacity(100.0), 0.5);
        assert_eq!(glow_size(100.0), 1.0);
        assert!(glow_opacity(50.0) > glow_opacity(150.0));
    }
}
