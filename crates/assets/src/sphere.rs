use crate::mesh::VertexLayout;
use roomview_common::MAX_SPHERE_DIVISIONS;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Indexed UV sphere with interleaved position, normal and texture coordinate.
///
/// Vertices lie on a latitude/longitude grid with the poles on the Z axis.
/// The seam column is duplicated so texture coordinates wrap cleanly.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub const LAYOUT: VertexLayout = VertexLayout::POSITION_NORMAL_UV;

    /// Sectors and stacks are clamped to `3..=MAX_SPHERE_DIVISIONS` and
    /// `2..=MAX_SPHERE_DIVISIONS`.
    pub fn new(radius: f32, sectors: u32, stacks: u32) -> Self {
        let sectors = sectors.clamp(3, MAX_SPHERE_DIVISIONS);
        let stacks = stacks.clamp(2, MAX_SPHERE_DIVISIONS);
        let (rows, columns) = (stacks as usize + 1, sectors as usize + 1);
        let sector_step = TAU / sectors as f32;
        let stack_step = PI / stacks as f32;
        let inv_radius = 1.0 / radius;

        let floats = rows
            .checked_mul(columns)
            .and_then(|n| n.checked_mul(Self::LAYOUT.floats_per_vertex() as usize))
            .unwrap_or(0);
        let mut vertices = Vec::with_capacity(floats);
        for i in 0..=stacks {
            let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
            let xy = radius * stack_angle.cos();
            let z = radius * stack_angle.sin();
            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let x = xy * sector_angle.cos();
                let y = xy * sector_angle.sin();
                vertices.extend_from_slice(&[
                    x,
                    y,
                    z,
                    x * inv_radius,
                    y * inv_radius,
                    z * inv_radius,
                    j as f32 / sectors as f32,
                    i as f32 / stacks as f32,
                ]);
            }
        }

        // Polar stacks get one triangle per sector, the rest get two.
        let index_total = (sectors as usize)
            .checked_mul(stacks as usize - 1)
            .and_then(|n| n.checked_mul(6))
            .unwrap_or(0);
        let mut indices = Vec::with_capacity(index_total);
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;
            for _ in 0..sectors {
                if i != 0 {
                    indices.extend_from_slice(&[k1, k2, k1 + 1]);
                }
                if i != stacks - 1 {
                    indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }
                k1 += 1;
                k2 += 1;
            }
        }

        Self {
            radius,
            sectors,
            stacks,
            vertices,
            indices,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32 / Self::LAYOUT.floats_per_vertex()
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: u32) -> [f32; 3] {
        let base = (index * Self::LAYOUT.floats_per_vertex()) as usize;
        [self.vertices[base], self.vertices[base + 1], self.vertices[base + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_sphere_counts() {
        let sphere = SphereMesh::new(1.0, 30, 30);
        assert_eq!(sphere.vertex_count(), 31 * 31);
        assert_eq!(sphere.index_count(), 6 * 30 * 29);
    }

    #[test]
    fn all_vertices_on_radius() {
        let sphere = SphereMesh::new(2.5, 12, 8);
        for i in 0..sphere.vertex_count() {
            let [x, y, z] = sphere.position(i);
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 2.5).abs() < 1e-4, "vertex {i} at distance {len}");
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let sphere = SphereMesh::new(1.0, 10, 6);
        let count = sphere.vertex_count();
        assert!(sphere.indices.iter().all(|&i| i < count));
        assert_eq!(sphere.indices.len() % 3, 0);
    }

    #[test]
    fn texture_coordinates_span_unit_square() {
        let sphere = SphereMesh::new(1.0, 4, 4);
        let stride = SphereMesh::LAYOUT.floats_per_vertex() as usize;
        let uvs: Vec<(f32, f32)> = sphere
            .vertices
            .chunks(stride)
            .map(|v| (v[6], v[7]))
            .collect();
        assert_eq!(uvs.first(), Some(&(0.0, 0.0)));
        assert_eq!(uvs.last(), Some(&(1.0, 1.0)));
    }

    #[test]
    fn oversized_parameters_are_capped() {
        let sphere = SphereMesh::new(1.0, 70_000, 3);
        assert_eq!(sphere.sectors, MAX_SPHERE_DIVISIONS);
        assert_eq!(sphere.vertex_count(), (MAX_SPHERE_DIVISIONS + 1) * 4);
        let count = sphere.vertex_count();
        assert!(sphere.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn degenerate_parameters_are_raised() {
        let sphere = SphereMesh::new(1.0, 0, 0);
        assert_eq!(sphere.sectors, 3);
        assert_eq!(sphere.stacks, 2);
        assert_eq!(sphere.index_count(), 6 * 3);
    }
}
