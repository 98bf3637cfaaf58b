//! In-memory vector storage with exact nearest-neighbor search
//!
//! Records are kept in insertion order in a single `Vec`. Every query is a
//! brute-force O(n·d) scan, so results are exact and ties resolve to the
//! earliest inserted record.

use crate::error::{ArenaError, Result};
use crate::math;
use serde::{Deserialize, Serialize};

/// An identified, fixed-dimension vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: u64,
    pub values: Vec<f32>,
}

impl VectorRecord {
    pub fn new(id: u64, values: Vec<f32>) -> Self {
        Self { id, values }
    }

    /// Number of coordinates
    pub fn dims(&self) -> usize {
        self.values.len()
    }
}

/// Append-only vector store
#[derive(Debug, Default)]
pub struct VectorStore {
    vectors: Vec<VectorRecord>,
    /// Fixed by the first inserted record
    dims: Option<usize>,
}

impl VectorStore {
    /// Create an empty store whose dimension is set by the first insert
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a fixed dimension
    pub fn with_dims(dims: usize) -> Result<Self> {
        if dims == 0 {
            return Err(ArenaError::invalid_input("vector dimension must be positive"));
        }
        Ok(Self {
            vectors: Vec::new(),
            dims: Some(dims),
        })
    }

    /// Append a record
    ///
    /// Ids are not checked for uniqueness. A duplicate id is stored, but
    /// [`get_vector_by_id`](Self::get_vector_by_id) keeps returning the
    /// first record inserted with that id.
    pub fn add_vector(&mut self, record: VectorRecord) -> Result<()> {
        if record.values.is_empty() {
            return Err(ArenaError::invalid_input(format!(
                "vector {} has no values",
                record.id
            )));
        }
        math::check_finite(&record.values)?;
        match self.dims {
            Some(dims) => math::check_dims(dims, record.dims())?,
            None => self.dims = Some(record.dims()),
        }
        self.vectors.push(record);
        Ok(())
    }

    /// First record with the given id, in insertion order
    pub fn get_vector_by_id(&self, id: u64) -> Option<&VectorRecord> {
        self.vectors.iter().find(|v| v.id == id)
    }

    /// Record closest to `query` by Euclidean distance
    ///
    /// Returns `Ok(None)` on an empty store,
    /// [`ArenaError::DimensionMismatch`] if `query` has the wrong length and
    /// [`ArenaError::InvalidInput`] if it holds NaN or infinite coordinates.
    pub fn find_closest_vector(&self, query: &[f32]) -> Result<Option<&VectorRecord>> {
        let Some(dims) = self.dims else {
            return Ok(None);
        };
        math::check_dims(dims, query.len())?;
        math::check_finite(query)?;

        let mut closest = None;
        let mut min_distance = f32::INFINITY;
        for record in &self.vectors {
            let dist = math::euclidean_distance(&record.values, query)?;
            // Strict: the first record at the minimum distance wins
            if dist < min_distance || closest.is_none() {
                min_distance = dist;
                closest = Some(record);
            }
        }
        Ok(closest)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[VectorRecord] {
        &self.vectors
    }

    /// Get number of vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Get dimensions, `None` until the first insert on an unsized store
    pub fn dims(&self) -> Option<usize> {
        self.dims
    }
}
