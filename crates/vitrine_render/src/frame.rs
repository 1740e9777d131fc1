//! Per-frame instance assembly
//!
//! Converts widget state into the instance lists the pipelines draw. The
//! buffers are small (tens of quads, a hundred discs) and are rebuilt from
//! scratch every frame.

use vitrine_core::{ConfettiSystem, Lightbox, PanelPlacement, ParticleField, Ring};
use vitrine_core::confetti::PIECE_SIZE;
use vitrine_math::{angle, mat4, Mat4, Vec2};

use crate::pipeline::{GlowInstance, QuadInstance};

const NEAR: f32 = 10.0;
const FAR: f32 = 20_000.0;

/// Panel fills, cycling through the site's gold and green theme
pub const PANEL_PALETTE: [[f32; 4]; 8] = [
    [0.831, 0.686, 0.216, 1.0],
    [0.176, 0.314, 0.086, 1.0],
    [0.957, 0.816, 0.247, 1.0],
    [0.290, 0.486, 0.173, 1.0],
    [0.894, 0.784, 0.596, 1.0],
    [0.118, 0.227, 0.063, 1.0],
    [0.788, 0.663, 0.380, 1.0],
    [0.208, 0.333, 0.121, 1.0],
];

/// Flat fill color for a panel
pub fn panel_color(index: usize) -> [f32; 4] {
    PANEL_PALETTE[index % PANEL_PALETTE.len()]
}

/// Camera and panel geometry for the carousel projection
#[derive(Clone, Copy, Debug)]
pub struct ViewParams {
    /// Surface size in pixels
    pub surface: Vec2,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Distance from the eye to the ring axis, in panel units
    pub view_distance: f32,
    pub panel_width: f32,
    pub panel_height: f32,
}

impl ViewParams {
    fn view_projection(&self) -> Mat4 {
        let aspect = self.surface.x / self.surface.y.max(1.0);
        let proj = mat4::perspective(angle::to_radians(self.fov_deg), aspect, NEAR, FAR);
        mat4::mul(proj, mat4::translation(0.0, 0.0, -self.view_distance))
    }

    fn panel_mvp(&self, placement: &PanelPlacement, radius: f32) -> Mat4 {
        let yaw = angle::to_radians(placement.azimuth_deg);
        let model = mat4::mul(
            mat4::rotation_y(yaw),
            mat4::mul(
                mat4::translation(0.0, 0.0, radius),
                mat4::scale(
                    self.panel_width * placement.scale,
                    self.panel_height * placement.scale,
                    1.0,
                ),
            ),
        );
        mat4::mul(self.view_projection(), model)
    }
}

/// One glow disc per particle
pub fn glow_instances(field: &ParticleField) -> Vec<GlowInstance> {
    field
        .particles()
        .iter()
        .map(|p| GlowInstance {
            center: p.position.to_array(),
            radius: p.radius,
            alpha: p.alpha(),
        })
        .collect()
}

/// Panel placements in paint order: farthest from the eye first
pub fn paint_order(ring: &Ring) -> Vec<PanelPlacement> {
    let mut placements = ring.layout();
    // View-space depth of the panel center; the azimuth-180 panel is farthest
    placements.sort_by(|a, b| {
        let za = angle::to_radians(a.azimuth_deg).cos();
        let zb = angle::to_radians(b.azimuth_deg).cos();
        za.partial_cmp(&zb).unwrap_or(std::cmp::Ordering::Equal)
    });
    placements
}

/// Panel quads in paint order
pub fn panel_instances(ring: &Ring, view: &ViewParams) -> Vec<QuadInstance> {
    paint_order(ring)
        .iter()
        .map(|placement| {
            let mut color = panel_color(placement.index);
            color[3] *= placement.opacity;
            QuadInstance {
                mvp: view.panel_mvp(placement, ring.radius()),
                color,
            }
        })
        .collect()
}

/// Axis-aligned pixel bounds of one panel, for click hit-testing
///
/// Returns `None` for an empty ring or a panel projecting behind the eye.
pub fn panel_pixel_rect(ring: &Ring, view: &ViewParams, index: usize) -> Option<(Vec2, Vec2)> {
    let placement = ring.layout().into_iter().find(|p| p.index == index)?;
    let mvp = view.panel_mvp(&placement, ring.radius());

    let mut min = Vec2::new(f32::MAX, f32::MAX);
    let mut max = Vec2::new(f32::MIN, f32::MIN);
    for corner in [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]] {
        let p = mat4::project_to_pixels(mvp, corner[0], corner[1], 0.0, view.surface)?;
        min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
        max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
    }
    Some((min, max))
}

/// Screen-space quads for the live confetti pieces
pub fn confetti_instances(confetti: &ConfettiSystem, surface: Vec2) -> Vec<QuadInstance> {
    let ortho = mat4::orthographic_pixels(surface.x.max(1.0), surface.y.max(1.0));

    confetti
        .live_pieces()
        .map(|piece| {
            let pos = piece.position(surface.y);
            let model = mat4::mul(
                mat4::translation(pos.x, pos.y, 0.0),
                mat4::mul(
                    mat4::rotation_z(piece.rotation()),
                    mat4::scale(PIECE_SIZE, PIECE_SIZE, 1.0),
                ),
            );
            let mut color = piece.color;
            color[3] *= piece.alpha();
            QuadInstance {
                mvp: mat4::mul(ortho, model),
                color,
            }
        })
        .collect()
}

/// Backdrop and content quads for the lightbox, empty while closed
pub fn lightbox_instances(lightbox: &Lightbox, view: &ViewParams) -> Vec<QuadInstance> {
    if !lightbox.is_visible() {
        return Vec::new();
    }
    let Some(panel) = lightbox.panel() else {
        return Vec::new();
    };

    let surface = view.surface;
    let ortho = mat4::orthographic_pixels(surface.x.max(1.0), surface.y.max(1.0));
    let center = surface * 0.5;

    let backdrop = QuadInstance {
        mvp: mat4::mul(
            ortho,
            mat4::mul(
                mat4::translation(center.x, center.y, 0.0),
                mat4::scale(surface.x, surface.y, 1.0),
            ),
        ),
        color: [0.0, 0.0, 0.0, lightbox.backdrop_alpha()],
    };

    // Content fills 85% of the surface height at the panel's aspect ratio
    let aspect = view.panel_width / view.panel_height.max(1.0);
    let height = surface.y * 0.85 * lightbox.content_scale();
    let width = height * aspect;
    let content = QuadInstance {
        mvp: mat4::mul(
            ortho,
            mat4::mul(
                mat4::translation(center.x, center.y, 0.0),
                mat4::scale(width, height, 1.0),
            ),
        ),
        color: panel_color(panel),
    };

    vec![backdrop, content]
}
