use crate::AssetError;
use crate::tables;

/// A vertex attribute and the shader location it is bound to.
///
/// Locations are a fixed contract with the shader sources: 0 position,
/// 1 normal, 2 texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Position,
    Normal,
    TexCoord,
}

impl Attribute {
    pub fn location(self) -> u32 {
        match self {
            Attribute::Position => 0,
            Attribute::Normal => 1,
            Attribute::TexCoord => 2,
        }
    }

    pub fn components(self) -> u32 {
        match self {
            Attribute::Position | Attribute::Normal => 3,
            Attribute::TexCoord => 2,
        }
    }
}

/// Order of attributes inside one interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    attributes: &'static [Attribute],
}

impl VertexLayout {
    pub const POSITION_UV_NORMAL: Self = Self {
        attributes: &[Attribute::Position, Attribute::TexCoord, Attribute::Normal],
    };
    pub const POSITION_UV: Self = Self {
        attributes: &[Attribute::Position, Attribute::TexCoord],
    };
    pub const POSITION_NORMAL_UV: Self = Self {
        attributes: &[Attribute::Position, Attribute::Normal, Attribute::TexCoord],
    };

    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    pub fn floats_per_vertex(&self) -> u32 {
        self.attributes.iter().map(|a| a.components()).sum()
    }

    /// Byte distance between consecutive vertices.
    pub fn stride(&self) -> u64 {
        u64::from(self.floats_per_vertex()) * std::mem::size_of::<f32>() as u64
    }

    /// Each attribute with its byte offset inside a vertex.
    pub fn offsets(&self) -> Vec<(Attribute, u64)> {
        let mut offset = 0u64;
        self.attributes
            .iter()
            .map(|&attribute| {
                let entry = (attribute, offset);
                offset += u64::from(attribute.components()) * std::mem::size_of::<f32>() as u64;
                entry
            })
            .collect()
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

/// CPU-side vertex data of one static mesh, ready for upload.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub name: &'static str,
    pub layout: VertexLayout,
    pub vertices: &'static [f32],
    pub vertex_count: u32,
}

impl MeshData {
    /// Wrap an interleaved float array. The array must hold a whole number
    /// of vertices for `layout`.
    pub fn from_floats(
        name: &'static str,
        layout: VertexLayout,
        vertices: &'static [f32],
    ) -> Result<Self, AssetError> {
        let stride = layout.floats_per_vertex() as usize;
        if vertices.len() % stride != 0 {
            return Err(AssetError::RaggedVertexData {
                mesh: name,
                floats: vertices.len(),
                stride,
            });
        }
        Ok(Self {
            name,
            layout,
            vertices,
            vertex_count: (vertices.len() / stride) as u32,
        })
    }

    pub fn byte_len(&self) -> u64 {
        std::mem::size_of_val(self.vertices) as u64
    }
}

/// The four static meshes of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinMesh {
    Room,
    Plane,
    Floor,
    Lamp,
}

impl BuiltinMesh {
    pub const ALL: [BuiltinMesh; 4] = [
        BuiltinMesh::Room,
        BuiltinMesh::Plane,
        BuiltinMesh::Floor,
        BuiltinMesh::Lamp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinMesh::Room => "room",
            BuiltinMesh::Plane => "plane",
            BuiltinMesh::Floor => "floor",
            BuiltinMesh::Lamp => "lamp",
        }
    }

    pub fn layout(self) -> VertexLayout {
        match self {
            BuiltinMesh::Room => VertexLayout::POSITION_UV_NORMAL,
            BuiltinMesh::Plane | BuiltinMesh::Floor => VertexLayout::POSITION_UV,
            BuiltinMesh::Lamp => VertexLayout::POSITION_NORMAL_UV,
        }
    }

    fn floats(self) -> &'static [f32] {
        match self {
            BuiltinMesh::Room => &tables::ROOM,
            BuiltinMesh::Plane => &tables::PLANE,
            BuiltinMesh::Floor => &tables::FLOOR,
            BuiltinMesh::Lamp => &tables::LAMP,
        }
    }

    pub fn build(self) -> Result<MeshData, AssetError> {
        MeshData::from_floats(self.name(), self.layout(), self.floats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_have_expected_strides() {
        assert_eq!(VertexLayout::POSITION_UV_NORMAL.floats_per_vertex(), 8);
        assert_eq!(VertexLayout::POSITION_UV.floats_per_vertex(), 5);
        assert_eq!(VertexLayout::POSITION_NORMAL_UV.stride(), 32);
        assert_eq!(VertexLayout::POSITION_UV.stride(), 20);
    }

    #[test]
    fn offsets_follow_buffer_order() {
        let offsets = VertexLayout::POSITION_UV_NORMAL.offsets();
        assert_eq!(
            offsets,
            vec![
                (Attribute::Position, 0),
                (Attribute::TexCoord, 12),
                (Attribute::Normal, 20),
            ]
        );
        let lamp = VertexLayout::POSITION_NORMAL_UV.offsets();
        assert_eq!(lamp[1], (Attribute::Normal, 12));
        assert_eq!(lamp[2], (Attribute::TexCoord, 24));
    }

    #[test]
    fn locations_are_fixed() {
        assert_eq!(Attribute::Position.location(), 0);
        assert_eq!(Attribute::Normal.location(), 1);
        assert_eq!(Attribute::TexCoord.location(), 2);
    }

    #[test]
    fn builtin_tables_divide_evenly() {
        for mesh in BuiltinMesh::ALL {
            let floats = mesh.floats().len();
            let per_vertex = mesh.layout().floats_per_vertex() as usize;
            assert_eq!(floats % per_vertex, 0, "{} has a partial vertex", mesh.name());
            let data = mesh.build().unwrap();
            assert_eq!(data.vertex_count as usize, floats / per_vertex);
            assert_eq!(data.byte_len(), u64::from(data.vertex_count) * mesh.layout().stride());
        }
    }

    #[test]
    fn builtin_vertex_counts() {
        assert_eq!(BuiltinMesh::Room.build().unwrap().vertex_count, 111);
        assert_eq!(BuiltinMesh::Plane.build().unwrap().vertex_count, 6);
        assert_eq!(BuiltinMesh::Floor.build().unwrap().vertex_count, 36);
        assert_eq!(BuiltinMesh::Lamp.build().unwrap().vertex_count, 36);
    }

    #[test]
    fn triangle_lists_hold_whole_triangles() {
        for mesh in BuiltinMesh::ALL {
            assert_eq!(mesh.build().unwrap().vertex_count % 3, 0, "{}", mesh.name());
        }
    }

    #[test]
    fn ragged_data_is_rejected() {
        static SHORT: [f32; 7] = [0.0; 7];
        let err = MeshData::from_floats("short", VertexLayout::POSITION_UV, &SHORT).unwrap_err();
        assert!(matches!(
            err,
            AssetError::RaggedVertexData { mesh: "short", floats: 7, stride: 5 }
        ));
    }
}
