//! 2-D drawing seam between the simulators and the host.
//!
//! Simulators issue primitives through [`Surface`]; the web crate implements
//! it over `CanvasRenderingContext2d`, tests implement it with a recorder.
//! Colors and fonts are CSS strings so the canvas backend can pass them
//! through untouched.

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);

    /// Stroke a polyline with a `[5, 5]` dash pattern (reference curves).
    fn dashed_polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64);

    /// Filled circle.
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str);

    /// Filled axis-aligned rectangle.
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);

    /// Filled polygon (arrowheads).
    fn polygon(&mut self, points: &[(f64, f64)], color: &str);

    fn text(&mut self, s: &str, x: f64, y: f64, color: &str, font: &str, align: TextAlign);
}

/// Arrow glyph: shaft, `atan2`-oriented head and a small label past the tip.
pub fn draw_vector(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    color: &str,
    label: &str,
) {
    surface.line(x, y, x + dx, y + dy, color, 3.0);

    let angle = dy.atan2(dx);
    let tip = (x + dx, y + dy);
    let left = (
        tip.0 - 10.0 * (angle - std::f64::consts::FRAC_PI_6).cos(),
        tip.1 - 10.0 * (angle - std::f64::consts::FRAC_PI_6).sin(),
    );
    let right = (
        tip.0 - 10.0 * (angle + std::f64::consts::FRAC_PI_6).cos(),
        tip.1 - 10.0 * (angle + std::f64::consts::FRAC_PI_6).sin(),
    );
    surface.polygon(&[tip, left, right], color);

    surface.text(
        label,
        tip.0 + 10.0,
        tip.1 - 5.0,
        color,
        "bold 12px monospace",
        TextAlign::Left,
    );
}

/// No-op surface for headless stepping (advancing physics without a canvas).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn line(&mut self, _: f64, _: f64, _: f64, _: f64, _: &str, _: f64) {}
    fn dashed_polyline(&mut self, _: &[(f64, f64)], _: &str, _: f64) {}
    fn circle(&mut self, _: f64, _: f64, _: f64, _: &str) {}
    fn rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: &str) {}
    fn polygon(&mut self, _: &[(f64, f64)], _: &str) {}
    fn text(&mut self, _: &str, _: f64, _: f64, _: &str, _: &str, _: TextAlign) {}
}

/// One recorded primitive, for draw-call assertions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: String,
        width: f64,
    },
    DashedPolyline {
        points: Vec<(f64, f64)>,
        color: String,
        width: f64,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: String,
    },
    Rect {
        origin: (f64, f64),
        size: (f64, f64),
        color: String,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        color: String,
    },
    Text {
        s: String,
        at: (f64, f64),
        color: String,
        font: String,
        align: TextAlign,
    },
}

/// Surface that records every call; the testing counterpart of the canvas.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { s, .. } => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            color: color.to_string(),
            width,
        });
    }

    fn dashed_polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64) {
        self.ops.push(DrawOp::DashedPolyline {
            points: points.to_vec(),
            color: color.to_string(),
            width,
        });
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            center: (x, y),
            radius,
            color: color.to_string(),
        });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ops.push(DrawOp::Rect {
            origin: (x, y),
            size: (w, h),
            color: color.to_string(),
        });
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: &str) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color: color.to_string(),
        });
    }

    fn text(&mut self, s: &str, x: f64, y: f64, color: &str, font: &str, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            s: s.to_string(),
            at: (x, y),
            color: color.to_string(),
            font: font.to_string(),
            align,
        });
    }
}
