//! Vertex deduplication through coordinate interning.
//!
//! Stages that synthesize vertices from arithmetic (icosahedron
//! construction, hollowing) would otherwise emit the same position many
//! times, once per face that touches it. The interner maps positions to
//! stable `u32` indices so shared corners stay shared and face arrays can
//! be built incrementally without a welding pass afterwards.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::types::Vertex;

/// Quantization scale for coordinate keys. Positions closer than
/// 1e-9 per axis collapse to the same vertex.
const QUANT_SCALE: f64 = 1e9;

/// A deduplicating vertex arena.
///
/// `intern` returns the index of an existing vertex when one has already
/// been recorded at (numerically) the same position, otherwise it appends
/// a new vertex. Indices are stable: a vertex never moves once interned.
#[derive(Debug, Default)]
pub struct VertexInterner {
    vertices: Vec<Vertex>,
    index: HashMap<(i64, i64, i64), u32>,
}

impl VertexInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn key(position: &Point3<f64>) -> (i64, i64, i64) {
        (
            (position.x * QUANT_SCALE).round() as i64,
            (position.y * QUANT_SCALE).round() as i64,
            (position.z * QUANT_SCALE).round() as i64,
        )
    }

    /// Intern a position, returning its stable index.
    pub fn intern(&mut self, position: Point3<f64>) -> u32 {
        let key = Self::key(&position);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position));
        self.index.insert(key, idx);
        idx
    }

    /// Number of distinct vertices interned so far.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if no vertices have been interned.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consume the interner, yielding the vertex array in intern order.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}
