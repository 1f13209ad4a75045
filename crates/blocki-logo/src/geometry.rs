//! Static logo mesh and per-vertex colors.
//!
//! The mesh is a block "I" in clip space: a navy top bar, two columns and two
//! inner bars, plus six orange bars underneath. Triangles are listed in draw
//! order; the animation only ever moves the ranges named below.

use core::ops::Range;

/// Vertex position in clip space.
pub type Position = [f32; 3];

/// Straight-alpha RGBA.
pub type Rgba = [f32; 4];

/// Number of vertices in the mesh (36 triangles).
pub const VERTEX_COUNT: usize = 108;

/// Number of triangles in the mesh.
pub const TRIANGLE_COUNT: usize = VERTEX_COUNT / 3;

/// Components per position.
pub const POSITION_COMPONENTS: usize = 3;

/// Components per color.
pub const COLOR_COMPONENTS: usize = 4;

/// Color of the navy half of the mesh.
pub const NAVY: Rgba = [0.0902, 0.16078, 0.29412, 1.0];

/// Color of the orange half of the mesh.
pub const ORANGE: Rgba = [0.9019, 0.29411, 0.23921, 1.0];

/// Vertices painted [`NAVY`]; everything after is [`ORANGE`].
pub const NAVY_VERTICES: Range<usize> = 0..54;

/// Left inner bar, pushed right by the gap.
pub const LEFT_BAR: Range<usize> = 42..48;

/// Right inner bar, pushed left by the gap.
pub const RIGHT_BAR: Range<usize> = 48..54;

/// Orange bars, moved vertically by the distance.
pub const BOTTOM_BARS: Range<usize> = 54..VERTEX_COUNT;

/// Vertices per bottom bar. Neighbouring bars move in opposite directions.
pub const BOTTOM_BAR_VERTICES: usize = 9;

/// Undeformed mesh.
pub const BASE_POSITIONS: [Position; VERTEX_COUNT] = [
    // top bar
    [-0.7, 0.75, 0.0],
    [-0.7, 0.5, 0.0],
    [-0.55, 0.5, 0.0],

    [-0.7, 0.75, 0.0],
    [-0.55, 0.5, 0.0],
    [-0.25, 0.5, 0.0],

    [-0.7, 0.75, 0.0],
    [-0.25, 0.5, 0.0],
    [0.25, 0.5, 0.0],

    [-0.7, 0.75, 0.0],
    [0.25, 0.5, 0.0],
    [0.55, 0.5, 0.0],

    [-0.7, 0.75, 0.0],
    [0.55, 0.5, 0.0],
    [0.7, 0.5, 0.0],

    [-0.7, 0.75, 0.0],
    [0.7, 0.5, 0.0],
    [0.7, 0.75, 0.0],

    // left column
    [-0.55, -0.35, 0.0],
    [-0.55, 0.5, 0.0],
    [-0.25, 0.5, 0.0],

    [-0.55, -0.35, 0.0],
    [-0.25, 0.5, 0.0],
    [-0.25, 0.3, 0.0],

    [-0.55, -0.35, 0.0],
    [-0.25, 0.3, 0.0],
    [-0.25, -0.1, 0.0],

    [-0.55, -0.35, 0.0],
    [-0.25, -0.1, 0.0],
    [-0.25, -0.35, 0.0],

    // right column
    [0.55, -0.35, 0.0],
    [0.55, 0.5, 0.0],
    [0.25, 0.5, 0.0],

    [0.55, -0.35, 0.0],
    [0.25, 0.5, 0.0],
    [0.25, 0.3, 0.0],

    [0.55, -0.35, 0.0],
    [0.25, 0.3, 0.0],
    [0.25, -0.1, 0.0],

    [0.55, -0.35, 0.0],
    [0.25, -0.1, 0.0],
    [0.25, -0.35, 0.0],

    // left I bar
    [-0.25, 0.3, 0.0],
    [-0.25, -0.1, 0.0],
    [-0.15, 0.3, 0.0],

    [-0.25, -0.1, 0.0],
    [-0.15, 0.3, 0.0],
    [-0.15, -0.1, 0.0],

    // right I bar
    [0.25, 0.3, 0.0],
    [0.25, -0.1, 0.0],
    [0.15, 0.3, 0.0],

    [0.25, -0.1, 0.0],
    [0.15, 0.3, 0.0],
    [0.15, -0.1, 0.0],

    // bottom bars: three triangles each, six bars
    [-0.55, -0.45, 0.0],
    [-0.55, -0.55, 0.0],
    [-0.45, -0.45, 0.0],

    [-0.55, -0.55, 0.0],
    [-0.45, -0.45, 0.0],
    [-0.45, -0.55, 0.0],

    [-0.55, -0.55, 0.0],
    [-0.45, -0.55, 0.0],
    [-0.45, -0.6, 0.0],

    [-0.35, -0.45, 0.0],
    [-0.35, -0.65, 0.0],
    [-0.25, -0.45, 0.0],

    [-0.35, -0.65, 0.0],
    [-0.25, -0.45, 0.0],
    [-0.25, -0.65, 0.0],

    [-0.35, -0.65, 0.0],
    [-0.25, -0.65, 0.0],
    [-0.25, -0.7, 0.0],

    [-0.15, -0.45, 0.0],
    [-0.15, -0.75, 0.0],
    [-0.05, -0.45, 0.0],

    [-0.15, -0.75, 0.0],
    [-0.05, -0.45, 0.0],
    [-0.05, -0.75, 0.0],

    [-0.15, -0.75, 0.0],
    [-0.05, -0.7, 0.0],
    [-0.05, -0.8, 0.0],

    [0.55, -0.45, 0.0],
    [0.55, -0.55, 0.0],
    [0.45, -0.45, 0.0],

    [0.55, -0.55, 0.0],
    [0.45, -0.45, 0.0],
    [0.45, -0.55, 0.0],

    [0.55, -0.55, 0.0],
    [0.45, -0.55, 0.0],
    [0.45, -0.6, 0.0],

    [0.35, -0.45, 0.0],
    [0.35, -0.65, 0.0],
    [0.25, -0.45, 0.0],

    [0.35, -0.65, 0.0],
    [0.25, -0.45, 0.0],
    [0.25, -0.65, 0.0],

    [0.35, -0.65, 0.0],
    [0.25, -0.65, 0.0],
    [0.25, -0.7, 0.0],

    [0.15, -0.45, 0.0],
    [0.15, -0.75, 0.0],
    [0.05, -0.45, 0.0],

    [0.15, -0.75, 0.0],
    [0.05, -0.45, 0.0],
    [0.05, -0.75, 0.0],

    [0.15, -0.75, 0.0],
    [0.05, -0.7, 0.0],
    [0.05, -0.8, 0.0],
];

/// Per-vertex colors. Never changes after startup.
pub fn colors() -> [Rgba; VERTEX_COUNT] {
    let mut out = [ORANGE; VERTEX_COUNT];
    for c in &mut out[NAVY_VERTICES] {
        *c = NAVY;
    }
    out
}

/// Returns `true` if bottom-bar vertex `v` moves with `+dist`.
///
/// `v` is an absolute vertex index inside [`BOTTOM_BARS`].
#[inline]
pub fn bar_moves_up(v: usize) -> bool {
    debug_assert!(BOTTOM_BARS.contains(&v));
    ((v - BOTTOM_BARS.start) / BOTTOM_BAR_VERTICES) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_has_108_vertices() {
        assert_eq!(BASE_POSITIONS.len(), VERTEX_COUNT);
        assert_eq!(TRIANGLE_COUNT, 36);
        assert_eq!(BASE_POSITIONS.len() * POSITION_COMPONENTS, 324);
    }

    #[test]
    fn ranges_partition_the_mesh() {
        assert_eq!(LEFT_BAR.end, RIGHT_BAR.start);
        assert_eq!(RIGHT_BAR.end, BOTTOM_BARS.start);
        assert_eq!(NAVY_VERTICES.end, BOTTOM_BARS.start);
        assert_eq!(BOTTOM_BARS.len() % BOTTOM_BAR_VERTICES, 0);
    }

    #[test]
    fn mesh_is_flat() {
        assert!(BASE_POSITIONS.iter().all(|p| p[2] == 0.0));
    }

    #[test]
    fn colors_split_in_half() {
        let c = colors();
        assert_eq!(c.len(), VERTEX_COUNT);
        assert!(c[..54].iter().all(|&x| x == NAVY));
        assert!(c[54..].iter().all(|&x| x == ORANGE));
        assert_eq!(c.len() * COLOR_COMPONENTS, 432);
    }

    #[test]
    fn bottom_bars_alternate() {
        assert!(bar_moves_up(54));
        assert!(bar_moves_up(62));
        assert!(!bar_moves_up(63));
        assert!(!bar_moves_up(71));
        assert!(bar_moves_up(72));
        assert!(!bar_moves_up(107));
    }
}
