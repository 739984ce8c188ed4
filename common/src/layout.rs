//! Window-relative geometry for every widget.
//!
//! Nothing on the cluster has a fixed pixel position. Each widget is placed
//! as a proportion of the window size, so the same code renders a 640x360
//! simulator window and a 1920x1080 one. [`Layout`] owns those proportions
//! and hands out pixel geometry, optionally offset by the startup stage that
//! moves the widget.
//!
//! # Dashboard Layout (proportions of W x H)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ <=        \______ 12:00:00PM Mon 01 ______/       => │  header 0.72W x 0.16H
//! │                                                      │
//! │              .-''''-.                    CHARGING    │
//! │            /  SPEED   \    .-''-.          BRAKE     │
//! │ ))<|      |     o      |  | BATT |                   │  speedometer D = 0.4W
//! │            \ 120 km/h /    '-..-'      ACCELERATE    │  battery 0.8D
//! └──────────────────────────────────────────────────────┘
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::indicator::Side;
use crate::math::{lerp, round};
use crate::styles::FontSet;

// =============================================================================
// Proportions
// =============================================================================

const INDICATOR_X: f32 = 0.03;
const INDICATOR_Y: f32 = 0.06;
const INDICATOR_W: f32 = 0.11;
const INDICATOR_H: f32 = 0.12;

/// Header trapezoid units, scaled by (0.012W, 0.008H).
const HEADER_UNIT_X: f32 = 0.012;
const HEADER_UNIT_Y: f32 = 0.008;

const HORN_X: f32 = 0.03;
const HORN_Y: f32 = 0.7;
const HORN_W: f32 = 0.072;
const HORN_H: f32 = 0.14;

const SPEEDO_X: f32 = 0.173;
const SPEEDO_DIAMETER: f32 = 0.4;
const SPEEDO_REST_TOP: f32 = 0.2;
const SPEEDO_START_TOP: f32 = 1.01;

const BATTERY_SCALE: f32 = 0.8;
const BATTERY_OVERLAP: f32 = 0.2;

const START_BUTTON_DIAMETER: f32 = 0.2;
const CREATOR_BUTTON_DIAMETER: f32 = 0.05;
const CREATOR_PANEL_W: f32 = 0.6;
const CREATOR_PANEL_H: f32 = 0.1;
const CREATOR_PANEL_Y: f32 = 0.86;
/// Resting panel x, as a fraction of window *height*.
const CREATOR_PANEL_REST_X: f32 = 0.55;

const PROGRESS_W: f32 = 0.7;
const PROGRESS_H: f32 = 0.1;
const LOADING_TEXT_OFFSET: f32 = 0.2;

const POPUP_W: f32 = 0.36;
const POPUP_H: f32 = 0.16;

// =============================================================================
// Shapes
// =============================================================================

/// Trapezoid with horizontal top and bottom edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Trapezoid {
    pub top: i32,
    pub bottom: i32,
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_left: i32,
    pub bottom_right: i32,
}

impl Trapezoid {
    /// Left and right edge x at row `y`, or `None` outside the shape.
    pub fn span_at(&self, y: i32) -> Option<(i32, i32)> {
        if y < self.top || y > self.bottom {
            return None;
        }
        let height = (self.bottom - self.top).max(1) as f32;
        let t = (y - self.top) as f32 / height;
        Some((
            round(lerp(self.top_left as f32, self.bottom_left as f32, t)),
            round(lerp(self.top_right as f32, self.bottom_right as f32, t)),
        ))
    }

    pub const fn center(&self) -> Point {
        Point::new((self.top_left + self.top_right) / 2, (self.top + self.bottom) / 2)
    }
}

/// Header band: an outer trapezoid with a pocket cut from its top edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HeaderGeometry {
    pub outer: Trapezoid,
    pub pocket: Trapezoid,
}

/// Round dial placed by its center.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dial {
    pub center: Point,
    pub diameter: f32,
}

impl Dial {
    #[inline]
    pub fn radius(&self) -> f32 { self.diameter / 2.0 }

    #[inline]
    pub fn top(&self) -> i32 { self.center.y - round(self.radius()) }

    #[inline]
    pub fn bottom(&self) -> i32 { self.center.y + round(self.radius()) }

    #[inline]
    pub fn right(&self) -> i32 { self.center.x + round(self.radius()) }
}

// =============================================================================
// Layout
// =============================================================================

/// Pixel geometry for a window of one size.
#[derive(Clone, Copy)]
pub struct Layout {
    width: f32,
    height: f32,
    size: Size,
    fonts: FontSet,
}

impl Layout {
    pub const fn new(size: Size) -> Self {
        Self { width: size.width as f32, height: size.height as f32, size, fonts: FontSet::for_width(size.width) }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub const fn fonts(&self) -> &FontSet { &self.fonts }

    /// Window width scaled by `fraction`, in pixels.
    #[inline]
    pub fn w(&self, fraction: f32) -> f32 { self.width * fraction }

    /// Window height scaled by `fraction`, in pixels.
    #[inline]
    pub fn h(&self, fraction: f32) -> f32 { self.height * fraction }

    pub fn center(&self) -> Point { Point::new(round(self.w(0.5)), round(self.h(0.5))) }

    /// Stroke width that scales with the window, at least one pixel.
    pub fn stroke(&self) -> u32 { round(self.w(0.0024)).max(1) as u32 }

    fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(Point::new(round(x), round(y)), Size::new(round(w).max(1) as u32, round(h).max(1) as u32))
    }

    // -------------------------------------------------------------------------
    // Dashboard
    // -------------------------------------------------------------------------

    /// Indicator arrow bounds. `slide` runs 0.0 (off screen) to 1.0 (at rest).
    ///
    /// The left arrow enters from the right edge; the right arrow mirrors it
    /// about the window's vertical center line.
    pub fn indicator(&self, side: Side, slide: f32) -> Rectangle {
        let bw = self.w(INDICATOR_W);
        let left_x = lerp(self.width, self.w(INDICATOR_X), slide);
        let x = match side {
            Side::Left => left_x,
            Side::Right => self.width - bw - left_x,
        };
        self.rect(x, self.h(INDICATOR_Y), bw, self.h(INDICATOR_H))
    }

    /// Header band. `drop` runs 0.0 (above the window) to 1.0 (at rest).
    pub fn header(&self, drop: f32) -> HeaderGeometry {
        let ux = self.w(HEADER_UNIT_X);
        let uy = self.h(HEADER_UNIT_Y);
        let left = (self.width - 60.0 * ux) / 2.0;
        let top = lerp(-20.0 * uy, 0.0, drop);

        let trapezoid = |x0: f32, x1: f32, bx0: f32, bx1: f32, depth: f32| Trapezoid {
            top: round(top),
            bottom: round(top + depth * uy),
            top_left: round(left + x0 * ux),
            top_right: round(left + x1 * ux),
            bottom_left: round(left + bx0 * ux),
            bottom_right: round(left + bx1 * ux),
        };

        HeaderGeometry { outer: trapezoid(0.0, 60.0, 10.0, 50.0, 20.0), pocket: trapezoid(5.0, 55.0, 15.0, 45.0, 15.0) }
    }

    /// Horn icon bounds.
    pub fn horn(&self) -> Rectangle { self.rect(self.w(HORN_X), self.h(HORN_Y), self.w(HORN_W), self.h(HORN_H)) }

    /// Top-left corners of the CHARGING, BRAKE and ACCELERATE words.
    pub fn status_labels(&self) -> [Point; 3] {
        let (cx, cy) = (self.w(0.5), self.h(0.5));
        [
            Point::new(round(cx + self.w(0.328)), round(cy - self.h(0.07))),
            Point::new(round(cx + self.w(0.345)), round(cy + self.h(0.1))),
            Point::new(round(cx + self.w(0.3)), round(cy + self.h(0.3))),
        ]
    }

    /// Speedometer dial. `rise` runs 0.0 (below the window) to 1.0 (at rest).
    pub fn speedometer(&self, rise: f32) -> Dial {
        let diameter = self.w(SPEEDO_DIAMETER);
        let top = lerp(self.h(SPEEDO_START_TOP), self.h(SPEEDO_REST_TOP), rise);
        let radius = diameter / 2.0;
        Dial { center: Point::new(round(self.w(SPEEDO_X) + radius), round(top + radius)), diameter }
    }

    /// Battery dial, overlapping the speedometer's lower right.
    pub fn battery(&self, rise: f32) -> Dial {
        let speedo = self.speedometer(rise);
        let diameter = speedo.diameter * BATTERY_SCALE;
        let speedo_right = speedo.center.x as f32 + speedo.radius();
        let speedo_bottom = speedo.center.y as f32 + speedo.radius();
        let left = speedo_right - diameter * BATTERY_OVERLAP;
        let radius = diameter / 2.0;
        Dial { center: Point::new(round(left + radius), round(speedo_bottom - radius)), diameter }
    }

    /// Centered popup box.
    pub fn popup(&self) -> Rectangle {
        let (w, h) = (self.w(POPUP_W), self.h(POPUP_H));
        self.rect((self.width - w) / 2.0, (self.height - h) / 2.0, w, h)
    }

    // -------------------------------------------------------------------------
    // Start screen
    // -------------------------------------------------------------------------

    /// Round start button, centered.
    pub fn start_button(&self) -> Dial {
        Dial { center: self.center(), diameter: self.w(START_BUTTON_DIAMETER) }
    }

    /// Round creator button near the bottom-right corner.
    pub fn creator_button(&self) -> Dial {
        let d = self.w(CREATOR_BUTTON_DIAMETER);
        let left = self.width - 1.5 * d;
        let top = self.height - 1.5 * d;
        Dial { center: Point::new(round(left + d / 2.0), round(top + d / 2.0)), diameter: d }
    }

    /// Creator panel. `slide` runs 0.0 (off the right edge) to 1.0 (at rest).
    pub fn creator_panel(&self, slide: f32) -> Rectangle {
        let x = lerp(self.width, self.h(CREATOR_PANEL_REST_X), slide);
        self.rect(x, self.h(CREATOR_PANEL_Y), self.w(CREATOR_PANEL_W), self.h(CREATOR_PANEL_H))
    }

    // -------------------------------------------------------------------------
    // Loading screen
    // -------------------------------------------------------------------------

    /// Progress bar track, centered.
    pub fn progress_bar(&self) -> Rectangle {
        let (w, h) = (self.w(PROGRESS_W), self.h(PROGRESS_H));
        self.rect((self.width - w) / 2.0, (self.height - h) / 2.0, w, h)
    }

    /// Center of the "Get ready" heading.
    pub fn get_ready_text(&self) -> Point { self.center() - Point::new(0, round(self.h(LOADING_TEXT_OFFSET))) }

    /// Center of the safety rule line.
    pub fn rule_text(&self) -> Point { self.center() + Point::new(0, round(self.h(LOADING_TEXT_OFFSET))) }
}

/// Whether `point` lies inside the round `dial`.
pub fn dial_contains(dial: &Dial, point: Point) -> bool {
    let dx = (point.x - dial.center.x) as f32;
    let dy = (point.y - dial.center.y) as f32;
    let r = dial.radius();
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout { Layout::new(Size::new(640, 360)) }

    #[test]
    fn test_indicators_at_rest() {
        let l = layout();
        let left = l.indicator(Side::Left, 1.0);
        let right = l.indicator(Side::Right, 1.0);
        assert_eq!(left.top_left, Point::new(19, 22));
        assert_eq!(left.size, Size::new(70, 43));
        // 640 - 70.4 - 19.2 = 550.4
        assert_eq!(right.top_left.x, 550, "Right arrow should mirror the left one");
        assert_eq!(right.top_left.y, left.top_left.y);
    }

    #[test]
    fn test_indicators_start_off_screen() {
        let l = layout();
        assert!(l.indicator(Side::Left, 0.0).top_left.x >= 640);
        let right = l.indicator(Side::Right, 0.0);
        assert!(right.top_left.x + right.size.width as i32 <= 0);
    }

    #[test]
    fn test_header_geometry() {
        let l = layout();
        let header = l.header(1.0);
        assert_eq!(header.outer.top, 0);
        assert_eq!(header.outer.bottom, 58);
        assert_eq!(header.outer.top_left, 90);
        assert_eq!(header.outer.top_right, 550);
        assert!(header.pocket.top_left > header.outer.top_left);
        assert!(header.pocket.bottom < header.outer.bottom);

        let hidden = l.header(0.0);
        assert_eq!(hidden.outer.bottom, 0, "Hidden header should end at the top edge");
    }

    #[test]
    fn test_trapezoid_span() {
        let t = Trapezoid { top: 0, bottom: 10, top_left: 0, top_right: 100, bottom_left: 20, bottom_right: 80 };
        assert_eq!(t.span_at(0), Some((0, 100)));
        assert_eq!(t.span_at(5), Some((10, 90)));
        assert_eq!(t.span_at(10), Some((20, 80)));
        assert_eq!(t.span_at(11), None);
        assert_eq!(t.span_at(-1), None);
    }

    #[test]
    fn test_dials_fit_window() {
        let l = layout();
        let speedo = l.speedometer(1.0);
        assert_eq!(speedo.top(), 72);
        assert!(speedo.bottom() <= 360);

        let battery = l.battery(1.0);
        assert_eq!(battery.bottom(), speedo.bottom(), "Battery should share the speedometer's bottom");
        assert!(battery.right() < 640);
        assert!(battery.center.x > speedo.center.x);
    }

    #[test]
    fn test_speedometer_rises() {
        let l = layout();
        assert!(l.speedometer(0.0).top() >= 360, "Speedometer should start below the window");
        assert!(l.battery(0.0).top() >= 360);
    }

    #[test]
    fn test_start_screen_hit_tests() {
        let l = layout();
        let button = l.start_button();
        assert!(dial_contains(&button, l.center()));
        assert!(!dial_contains(&button, Point::new(0, 0)));

        let creator = l.creator_button();
        assert!(dial_contains(&creator, creator.center));
        assert!(creator.right() < 640);
    }

    #[test]
    fn test_creator_panel_slide() {
        let l = layout();
        assert_eq!(l.creator_panel(0.0).top_left.x, 640);
        assert_eq!(l.creator_panel(1.0).top_left.x, 198);
        assert_eq!(l.creator_panel(1.0).top_left.y, 310);
    }

    #[test]
    fn test_large_window_uses_large_fonts() {
        let l = Layout::new(Size::new(1280, 720));
        assert_eq!(l.fonts().readout.character_size, FontSet::LARGE.readout.character_size);
    }
}
