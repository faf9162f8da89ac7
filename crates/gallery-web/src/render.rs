//! Canvas2D implementation of the gallery painter.

use crate::artwork::ImageMap;
use gallery_core::{Glow, ItemId, Painter, RadialGradient, Rect, Rgba, TextAlign, TextStyle};
use glam::Vec2;
use web_sys as web;

pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    images: ImageMap,
}

impl CanvasPainter {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        images: ImageMap,
    ) -> Self {
        Self {
            canvas,
            ctx,
            images,
        }
    }
}

impl Painter for CanvasPainter {
    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width_px: u32, height_px: u32, dpr: f32) {
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
        let dpr = dpr as f64;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        log::debug!("[canvas] backing {}x{} dpr={:.2}", width_px, height_px, dpr);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        let _ = self.ctx.scale(sx as f64, sy as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_color(&g.color.to_string());
                self.ctx.set_shadow_blur(g.blur as f64);
            }
            None => {
                self.ctx.set_shadow_color(&Rgba::TRANSPARENT.to_string());
                self.ctx.set_shadow_blur(0.0);
            }
        }
    }

    fn polygon(&mut self, points: &[Vec2]) {
        self.ctx.begin_path();
        let mut it = points.iter();
        if let Some(first) = it.next() {
            self.ctx.move_to(first.x as f64, first.y as f64);
            for p in it {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }

    fn rounded_rect(&mut self, rect: Rect, radius: f32) {
        let (x, y) = (rect.origin.x as f64, rect.origin.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0).max(0.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }

    fn fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke(&mut self, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn artwork_size(&self, id: &ItemId) -> Option<Vec2> {
        self.images
            .borrow()
            .get(id)
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
    }

    fn draw_artwork(&mut self, id: &ItemId, dest: Rect) {
        if let Some(img) = self.images.borrow().get(id) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                dest.origin.x as f64,
                dest.origin.y as f64,
                dest.size.x as f64,
                dest.size.y as f64,
            );
        }
    }

    fn measure_text(&mut self, text: &str, font: &'static str) -> f32 {
        self.ctx.set_font(font);
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(&style.color.to_string());
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn fill_radial_gradient(&mut self, g: &RadialGradient, area: Rect) {
        let gradient = match self.ctx.create_radial_gradient(
            g.center.x as f64,
            g.center.y as f64,
            g.inner_radius as f64,
            g.center.x as f64,
            g.center.y as f64,
            g.outer_radius as f64,
        ) {
            Ok(gr) => gr,
            Err(e) => {
                log::warn!("radial gradient error: {:?}", e);
                return;
            }
        };
        let _ = gradient.add_color_stop(0.0, &g.inner.to_string());
        let _ = gradient.add_color_stop(1.0, &g.outer.to_string());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            area.origin.x as f64,
            area.origin.y as f64,
            area.size.x as f64,
            area.size.y as f64,
        );
    }
}
