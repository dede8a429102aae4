use wasm_bindgen::JsCast;

use phizics::draw::{Surface, TextAlign};

/// [`Surface`] backed by a 2d canvas context.
///
/// Colors and fonts arrive as CSS strings and pass through untouched.
pub(super) struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub(super) fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "canvas: get_context threw".to_string())?
            .ok_or("canvas: missing 2d context".to_string())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "canvas: context is not 2d".to_string())?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn dashed_polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64) {
        let Some(((x0, y0), rest)) = points.split_first() else {
            return;
        };

        let dash = js_sys::Array::new();
        dash.push(&5.0.into());
        dash.push(&5.0.into());
        let _ = self.ctx.set_line_dash(&dash);

        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(*x0, *y0);
        for (x, y) in rest {
            self.ctx.line_to(*x, *y);
        }
        self.ctx.stroke();

        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: &str) {
        let Some(((x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(*x0, *y0);
        for (x, y) in rest {
            self.ctx.line_to(*x, *y);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn text(&mut self, s: &str, x: f64, y: f64, color: &str, font: &str, align: TextAlign) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(s, x, y);
    }
}
