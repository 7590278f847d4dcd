use roomview_assets::{Attribute, MeshData, SphereMesh, VertexLayout};
use wgpu::util::DeviceExt;

/// Vertex buffer layout attributes for a mesh layout.
pub(crate) fn vertex_attributes(layout: &VertexLayout) -> Vec<wgpu::VertexAttribute> {
    layout
        .offsets()
        .into_iter()
        .map(|(attribute, offset)| wgpu::VertexAttribute {
            format: match attribute {
                Attribute::Position | Attribute::Normal => wgpu::VertexFormat::Float32x3,
                Attribute::TexCoord => wgpu::VertexFormat::Float32x2,
            },
            offset,
            shader_location: attribute.location(),
        })
        .collect()
}

/// A non-indexed mesh resident in a vertex buffer.
///
/// The attribute layout lives with the pipeline; `layout` selects which
/// pipeline variant can draw this mesh.
pub struct GpuMesh {
    pub name: &'static str,
    pub layout: VertexLayout,
    pub vertex_count: u32,
    vertex_buffer: wgpu::Buffer,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(mesh.name),
            contents: bytemuck::cast_slice(mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        tracing::debug!(mesh = mesh.name, vertices = mesh.vertex_count, bytes = mesh.byte_len(), "uploaded mesh");
        Self {
            name: mesh.name,
            layout: mesh.layout,
            vertex_count: mesh.vertex_count,
            vertex_buffer,
        }
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }

    pub fn destroy(self) {
        self.vertex_buffer.destroy();
    }
}

/// The UV sphere: interleaved vertices plus a 32-bit index buffer.
pub struct GpuSphere {
    pub index_count: u32,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl GpuSphere {
    pub fn upload(device: &wgpu::Device, sphere: &SphereMesh) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertices"),
            contents: bytemuck::cast_slice(&sphere.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_indices"),
            contents: bytemuck::cast_slice(&sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        tracing::debug!(
            vertices = sphere.vertex_count(),
            indices = sphere.index_count(),
            "uploaded sphere"
        );
        Self {
            index_count: sphere.index_count(),
            vertex_buffer,
            index_buffer,
        }
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    pub fn destroy(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_follow_layout_offsets() {
        let attrs = vertex_attributes(&VertexLayout::POSITION_UV_NORMAL);
        let summary: Vec<(u32, u64, wgpu::VertexFormat)> =
            attrs.iter().map(|a| (a.shader_location, a.offset, a.format)).collect();
        assert_eq!(
            summary,
            vec![
                (0, 0, wgpu::VertexFormat::Float32x3),
                (2, 12, wgpu::VertexFormat::Float32x2),
                (1, 20, wgpu::VertexFormat::Float32x3),
            ]
        );
    }

    #[test]
    fn lamp_layout_places_uv_last() {
        let attrs = vertex_attributes(&VertexLayout::POSITION_NORMAL_UV);
        let uv = attrs.iter().find(|a| a.shader_location == 2).unwrap();
        assert_eq!(uv.offset, 24);
    }
}
