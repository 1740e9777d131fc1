//! GPU-compatible data types for the showcase pipelines
//!
//! These types match the shader layouts exactly. All types derive Pod and
//! Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A corner of the expanded particle quad, in [-1, 1]
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlowVertex {
    pub corner: [f32; 2],
}

/// Two triangles covering the glow quad
pub const GLOW_VERTICES: [GlowVertex; 6] = [
    GlowVertex { corner: [-1.0, -1.0] },
    GlowVertex { corner: [1.0, -1.0] },
    GlowVertex { corner: [1.0, 1.0] },
    GlowVertex { corner: [-1.0, -1.0] },
    GlowVertex { corner: [1.0, 1.0] },
    GlowVertex { corner: [-1.0, 1.0] },
];

/// A corner of the unit quad, in [-0.5, 0.5]
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
}

/// Two triangles covering the unit quad
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { corner: [-0.5, -0.5] },
    QuadVertex { corner: [0.5, -0.5] },
    QuadVertex { corner: [0.5, 0.5] },
    QuadVertex { corner: [-0.5, -0.5] },
    QuadVertex { corner: [0.5, 0.5] },
    QuadVertex { corner: [-0.5, 0.5] },
];

/// One particle's draw parameters
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlowInstance {
    /// Particle center in surface pixels
    pub center: [f32; 2],
    /// Core radius; the glow extends to 3x this
    pub radius: f32,
    /// base opacity x pulse brightness
    pub alpha: f32,
}

/// Uniforms for the glow pass
/// Layout: 64 bytes total (must match glow.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlowUniforms {
    /// Surface size in pixels
    pub surface_size: [f32; 2],
    pub _padding: [f32; 2],
    /// Solid core color
    pub core_color: [f32; 4],
    /// Gradient color at the particle center
    pub glow_inner: [f32; 4],
    /// Gradient color at the half-way stop (alpha halves, then fades to 0)
    pub glow_mid: [f32; 4],
}

impl Default for GlowUniforms {
    fn default() -> Self {
        Self {
            surface_size: [1.0, 1.0],
            _padding: [0.0; 2],
            // Warm gold ramp
            core_color: [1.0, 0.922, 0.706, 1.0],
            glow_inner: [0.894, 0.784, 0.596, 1.0],
            glow_mid: [0.788, 0.663, 0.380, 1.0],
        }
    }
}

/// One quad's draw parameters: a full MVP plus a flat color
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadInstance {
    /// Column-major model-view-projection
    pub mvp: [[f32; 4]; 4],
    /// RGBA, straight alpha
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_glow_instance_size() {
        // 2 floats center + radius + alpha = 16 bytes
        assert_eq!(size_of::<GlowInstance>(), 16);
    }

    #[test]
    fn test_glow_uniforms_size() {
        // 2 floats size + 2 padding + 3 vec4 colors = 64 bytes
        assert_eq!(size_of::<GlowUniforms>(), 64);
    }

    #[test]
    fn test_quad_instance_size() {
        // 16 floats mvp + 4 floats color = 80 bytes
        assert_eq!(size_of::<QuadInstance>(), 80);
    }

    #[test]
    fn test_vertex_sizes() {
        assert_eq!(size_of::<GlowVertex>(), 8);
        assert_eq!(size_of::<QuadVertex>(), 8);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<GlowInstance>(), 4);
        assert_eq!(std::mem::align_of::<GlowUniforms>(), 4);
        assert_eq!(std::mem::align_of::<QuadInstance>(), 4);
    }
}
