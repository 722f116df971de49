//! Renderable line geometry - bridges projected shapes to GPU buffers
//!
//! [`LineGeometry`] is the CPU side: colored vertices plus a flat index
//! list with two entries per edge. [`GpuLines`] owns the matching wgpu
//! buffers and replaces them whenever the topology changes, so buffers for
//! an old dimension are dropped before the new ones are used.

use ndcube_core::{ProjectedGeometry, Segment};
use crate::palette::hue_color;
use crate::pipeline::LineVertex;

/// GPU-ready line list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGeometry {
    pub vertices: Vec<LineVertex>,
    /// Two indices per line
    pub indices: Vec<u32>,
}

impl LineGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, line_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(line_capacity * 2),
        }
    }

    /// Build from a projection. Points outside every segment use `base_color`;
    /// facet segments get their hue at the base alpha.
    pub fn from_projection(
        geometry: &ProjectedGeometry,
        segments: &[Segment],
        base_color: [f32; 4],
    ) -> Self {
        let mut result = Self::with_capacity(geometry.point_count(), geometry.edge_count());
        result.fill(geometry, segments, base_color);
        result
    }

    /// Rebuild in place, reusing allocations
    pub fn fill(&mut self, geometry: &ProjectedGeometry, segments: &[Segment], base_color: [f32; 4]) {
        self.clear();

        self.vertices.extend(
            geometry
                .points
                .iter()
                .map(|&p| LineVertex::from_point(p, base_color)),
        );
        for segment in segments {
            if let Some(hue) = segment.hue {
                let mut color = hue_color(hue as f32);
                color[3] = base_color[3];
                let end = segment.points.end.min(self.vertices.len());
                let start = segment.points.start.min(end);
                for v in &mut self.vertices[start..end] {
                    v.color = color;
                }
            }
        }

        self.indices.extend(
            geometry
                .edges
                .iter()
                .flat_map(|e| [e.a as u32, e.b as u32]),
        );
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Vertex and index buffers for one topology
pub struct GpuLines {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    index_count: u32,
    generation: Option<u64>,
}

impl GpuLines {
    /// Create empty placeholder buffers
    pub fn new(device: &wgpu::Device) -> Self {
        let (vertex_buffer, index_buffer) = create_buffers(device, 1, 2);
        Self {
            vertex_buffer,
            index_buffer,
            vertex_capacity: 1,
            index_capacity: 2,
            index_count: 0,
            generation: None,
        }
    }

    /// Upload `geometry`. A new `generation` or a larger geometry replaces
    /// both buffers; otherwise the existing buffers are overwritten.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &LineGeometry,
        generation: u64,
    ) {
        let vertices = geometry.vertices.len();
        let indices = geometry.indices.len();

        if must_reallocate(
            self.generation,
            generation,
            (self.vertex_capacity, self.index_capacity),
            (vertices, indices),
        ) {
            let vertex_capacity = vertices.max(1);
            let index_capacity = indices.max(2);
            // Assigning drops the previous buffers
            (self.vertex_buffer, self.index_buffer) =
                create_buffers(device, vertex_capacity, index_capacity);
            self.vertex_capacity = vertex_capacity;
            self.index_capacity = index_capacity;
            self.generation = Some(generation);
            log::debug!(
                "Allocated line buffers: {} vertices, {} lines",
                vertices,
                geometry.line_count()
            );
            if indices > 0 {
                queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&geometry.indices));
            }
        }

        if vertices > 0 {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&geometry.vertices));
        }
        self.index_count = indices as u32;
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Whether an upload needs fresh buffers
fn must_reallocate(
    current: Option<u64>,
    generation: u64,
    capacity: (usize, usize),
    needed: (usize, usize),
) -> bool {
    current != Some(generation) || needed.0 > capacity.0 || needed.1 > capacity.1
}

fn create_buffers(
    device: &wgpu::Device,
    vertex_capacity: usize,
    index_capacity: usize,
) -> (wgpu::Buffer, wgpu::Buffer) {
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Line Vertex Buffer"),
        size: (vertex_capacity * std::mem::size_of::<LineVertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    // Index writes must be 4-byte multiples; two u32 per line always is
    let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Line Index Buffer"),
        size: (index_capacity * std::mem::size_of::<u32>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (vertex_buffer, index_buffer)
}
