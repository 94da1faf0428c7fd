use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) uv: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Per-object data: model matrix columns, albedo + opacity, emissive.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

pub(crate) struct MeshData {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) indices: Vec<u16>,
}

// One quad per face; corners counter-clockwise seen from outside.
fn push_quad(mesh: &mut MeshData, corners: [Vec3; 4], normal: Vec3) {
    let base = mesh.vertices.len() as u16;
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    for (c, uv) in corners.iter().zip(uvs) {
        mesh.vertices.push(Vertex {
            position: c.to_array(),
            normal: normal.to_array(),
            uv,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Axis-aligned box centered on the origin.
pub(crate) fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    let v = Vec3::new;
    // +Z, -Z, +X, -X, +Y, -Y
    push_quad(&mut mesh, [v(-x, -y, z), v(x, -y, z), v(x, y, z), v(-x, y, z)], Vec3::Z);
    push_quad(&mut mesh, [v(x, -y, -z), v(-x, -y, -z), v(-x, y, -z), v(x, y, -z)], Vec3::NEG_Z);
    push_quad(&mut mesh, [v(x, -y, z), v(x, -y, -z), v(x, y, -z), v(x, y, z)], Vec3::X);
    push_quad(&mut mesh, [v(-x, -y, -z), v(-x, -y, z), v(-x, y, z), v(-x, y, -z)], Vec3::NEG_X);
    push_quad(&mut mesh, [v(-x, y, z), v(x, y, z), v(x, y, -z), v(-x, y, -z)], Vec3::Y);
    push_quad(&mut mesh, [v(-x, -y, -z), v(x, -y, -z), v(x, -y, z), v(-x, -y, z)], Vec3::NEG_Y);
    mesh
}

/// Square plane in the XY plane facing +Z.
pub(crate) fn plane_mesh(width: f32, height: f32) -> MeshData {
    let (x, y) = (width / 2.0, height / 2.0);
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(4),
        indices: Vec::with_capacity(6),
    };
    push_quad(
        &mut mesh,
        [
            Vec3::new(-x, -y, 0.0),
            Vec3::new(x, -y, 0.0),
            Vec3::new(x, y, 0.0),
            Vec3::new(-x, y, 0.0),
        ],
        Vec3::Z,
    );
    mesh
}
