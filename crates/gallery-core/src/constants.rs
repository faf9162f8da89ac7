// Drawing constants for the tile pass. Sizes are fractions of the hex size.

// Tile body
pub const TILE_SCALE: f32 = 0.98;
pub const ARTWORK_INSET: f32 = 0.95;
pub const SELECTED_SUB_PULSE: f32 = 0.02; // selected tile grows with the sub band

// Band-driven motion
pub const MID_ROTATION: f32 = 0.8; // radians per unit of mid energy
pub const LOW_RING_GROWTH: f32 = 0.2; // growth per ring per unit of low energy
pub const MAX_RING_GROWTH: f32 = 0.25;

// Strokes
pub const BORDER_WIDTH: f32 = 1.25;
pub const BORDER_ALPHA: f32 = 0.35;

pub const SELECTED_SCALE: f32 = 0.96;
pub const SELECTED_WIDTH: f32 = 2.0;
pub const SELECTED_GLOW_ALPHA: f32 = 0.6;
pub const SELECTED_GLOW_BLUR: f32 = 18.0;

pub const HOVER_SCALE: f32 = 0.985;
pub const HOVER_WIDTH: f32 = 1.5;
pub const HOVER_GLOW_ALPHA: f32 = 0.35;
pub const HOVER_GLOW_BLUR: f32 = 12.0;

pub const ACCENT_RING_SCALE: f32 = 0.55;
pub const ACCENT_RING_WIDTH: f32 = 1.0;

// Unavailable veil
pub const VEIL_ALPHA: f32 = 0.6;
pub const VEIL_TEXT: &str = "COMING SOON";
pub const VEIL_FONT: &str = "700 12px system-ui, -apple-system, Segoe UI, Roboto, Arial";

// Hover label
pub const LABEL_FONT: &str = "600 14px system-ui, -apple-system, Segoe UI, Roboto, Arial";
pub const LABEL_PAD_X: f32 = 8.0;
pub const LABEL_HEIGHT: f32 = 22.0;
pub const LABEL_RADIUS: f32 = 6.0;
pub const LABEL_DROP: f32 = 0.8; // label top sits this many sizes below the tile center

// Vignette
pub const VIGNETTE_INNER: f32 = 0.2; // of min(w, h)
pub const VIGNETTE_OUTER: f32 = 0.7; // of max(w, h)
pub const VIGNETTE_ALPHA: f32 = 0.2;
