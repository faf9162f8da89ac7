//! Tile pass, hover label and vignette for one frame.

use crate::analyzer::BandEnergy;
use crate::assign::{Assignment, AssignmentIndex};
use crate::cluster::Cluster;
use crate::constants::*;
use crate::flip::FlipSet;
use crate::gallery::Layout;
use crate::hex::{hex_corners, hex_distance, Axial};
use crate::item::ItemId;
use crate::paint::{Glow, Painter, RadialGradient, Rect, Rgba, TextAlign, TextStyle, Theme};
use crate::view::ViewState;
use glam::Vec2;

/// Everything the draw pass reads, borrowed from the gallery for one frame.
pub(crate) struct Scene<'a> {
    pub layout: Layout,
    pub view: &'a ViewState,
    pub cluster: &'a Cluster,
    pub index: &'a AssignmentIndex,
    pub flips: &'a FlipSet,
    pub selected: Option<&'a ItemId>,
    pub hovered: Option<Axial>,
    pub bands: BandEnergy,
    pub theme: Theme,
    pub cull_margin: f32,
}

impl<'a> Scene<'a> {
    /// Draw the frame and return how many tiles survived culling.
    pub fn draw<P: Painter + ?Sized>(&self, p: &mut P) -> usize {
        let hover_in_cluster = self
            .hovered
            .is_some_and(|h| self.cluster.contains(h - self.layout.center));

        let mut tiles = 0;
        for &offset in self.cluster.offsets() {
            if self.draw_tile(p, offset, hover_in_cluster) {
                tiles += 1;
            }
        }
        self.draw_hover_label(p);
        self.draw_vignette(p);
        tiles
    }

    #[inline]
    fn screen_pos(&self, cell: Axial) -> Vec2 {
        cell.to_pixel(self.layout.size) + self.view.pan
    }

    fn is_culled(&self, s: Vec2) -> bool {
        let m = self.cull_margin;
        let vp = self.view.viewport;
        s.x < -m || s.y < -m || s.x > vp.x + m || s.y > vp.y + m
    }

    fn draw_tile<P: Painter + ?Sized>(&self, p: &mut P, offset: Axial, hover_in_cluster: bool) -> bool {
        let size = self.layout.size;
        let cell = self.layout.center + offset;
        let screen = self.screen_pos(cell);
        if self.is_culled(screen) {
            return false;
        }

        let matched = self.index.at(offset);
        let is_selected = matched.is_some_and(|a| Some(&a.item.id) == self.selected);

        let mut radius = size * TILE_SCALE;
        if is_selected {
            radius *= 1.0 + self.bands.sub * SELECTED_SUB_PULSE;
        }
        let ring = hex_distance(Axial::ORIGIN, offset) as f32;
        let grow = (self.bands.low * LOW_RING_GROWTH * ring).min(MAX_RING_GROWTH);
        let spin = if offset.q.rem_euclid(2) == 0 { 1.0 } else { -1.0 };

        p.save();
        p.translate(screen);
        p.rotate(self.bands.mid * MID_ROTATION * spin);
        p.scale(1.0 + grow, 1.0 + grow);
        if let Some(flip) = matched.and_then(|a| self.flips.get(&a.item.id)) {
            p.scale(flip.scale_x(), 1.0);
        }

        let body = hex_corners(Vec2::ZERO, radius);
        p.polygon(&body);
        self.fill_body(p, matched);
        if matched.is_some_and(|a| !a.item.available) {
            p.save();
            p.set_alpha(VEIL_ALPHA);
            p.polygon(&body);
            p.fill(Rgba::BLACK);
            p.set_alpha(1.0);
            let style = TextStyle {
                font: VEIL_FONT,
                color: Rgba::WHITE,
                align: TextAlign::Center,
            };
            p.fill_text(VEIL_TEXT, Vec2::ZERO, &style);
            p.restore();
        }
        p.set_alpha(BORDER_ALPHA);
        p.stroke(Rgba::BLACK, BORDER_WIDTH);
        p.restore();

        if is_selected {
            self.outline(
                p,
                screen,
                SELECTED_SCALE,
                Rgba::WHITE.with_alpha(0.9),
                SELECTED_WIDTH,
                Glow {
                    color: self.theme.accent.with_alpha(SELECTED_GLOW_ALPHA),
                    blur: SELECTED_GLOW_BLUR,
                },
            );
        }
        if hover_in_cluster && self.hovered == Some(cell) {
            self.outline(
                p,
                screen,
                HOVER_SCALE,
                Rgba::WHITE.with_alpha(0.5),
                HOVER_WIDTH,
                Glow {
                    color: self.theme.accent.with_alpha(HOVER_GLOW_ALPHA),
                    blur: HOVER_GLOW_BLUR,
                },
            );
        }

        p.save();
        p.polygon(&hex_corners(screen, size * ACCENT_RING_SCALE));
        p.stroke(Rgba::BLACK.with_alpha(0.45), ACCENT_RING_WIDTH);
        p.restore();
        true
    }

    // Artwork clipped to the current path, or the placeholder fill.
    fn fill_body<P: Painter + ?Sized>(&self, p: &mut P, matched: Option<&Assignment>) {
        let artwork = matched.and_then(|a| {
            p.artwork_size(&a.item.id)
                .filter(|s| s.x > 0.0 && s.y > 0.0)
                .map(|s| (&a.item.id, s))
        });
        match artwork {
            Some((id, natural)) => {
                let inner = self.layout.size * ARTWORK_INSET;
                p.save();
                p.clip();
                p.draw_artwork(id, Rect::cover(natural, Vec2::splat(inner * 2.0)));
                p.restore();
            }
            None => {
                p.set_alpha(1.0);
                p.fill(Rgba::PLACEHOLDER);
            }
        }
    }

    // Plain stroke, then the same stroke again with a glow.
    fn outline<P: Painter + ?Sized>(
        &self,
        p: &mut P,
        screen: Vec2,
        scale: f32,
        color: Rgba,
        width: f32,
        glow: Glow,
    ) {
        p.save();
        p.polygon(&hex_corners(screen, self.layout.size * scale));
        p.stroke(color, width);
        p.set_glow(Some(glow));
        p.stroke(color, width);
        p.restore();
    }

    fn draw_hover_label<P: Painter + ?Sized>(&self, p: &mut P) {
        let Some(cell) = self.hovered else {
            return;
        };
        let Some(a) = self.index.at(cell - self.layout.center) else {
            return;
        };
        let size = self.layout.size;
        let pos = self.screen_pos(cell);
        let label = a.item.label();

        p.save();
        let text_w = p.measure_text(label, LABEL_FONT);
        let box_w = text_w + LABEL_PAD_X * 2.0;
        let rect = Rect::new(
            pos.x - box_w / 2.0,
            pos.y + size * LABEL_DROP,
            box_w,
            LABEL_HEIGHT,
        );
        p.rounded_rect(rect, LABEL_RADIUS);
        p.fill(Rgba::BLACK.with_alpha(0.55));
        p.stroke(Rgba::WHITE.with_alpha(0.25), 1.0);
        let style = TextStyle {
            font: LABEL_FONT,
            color: Rgba::WHITE,
            align: TextAlign::Left,
        };
        p.fill_text(
            label,
            Vec2::new(pos.x - text_w / 2.0, rect.origin.y + LABEL_HEIGHT / 2.0),
            &style,
        );
        p.restore();
    }

    fn draw_vignette<P: Painter + ?Sized>(&self, p: &mut P) {
        let vp = self.view.viewport;
        let gradient = RadialGradient {
            center: vp / 2.0,
            inner_radius: vp.min_element() * VIGNETTE_INNER,
            outer_radius: vp.max_element() * VIGNETTE_OUTER,
            inner: self.theme.accent.with_alpha(VIGNETTE_ALPHA),
            outer: Rgba::TRANSPARENT,
        };
        p.fill_radial_gradient(&gradient, Rect::new(0.0, 0.0, vp.x, vp.y));
    }
}
