// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{EntityGeometry, MeshError};

/// Entity-to-vertex connectivity for one topological dimension, stored flat.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Connectivity {
    width: usize,
    vertices: Vec<usize>,
}

impl Connectivity {
    fn len(&self) -> usize {
        self.vertices.len() / self.width
    }

    fn get(&self, index: usize) -> Option<&[usize]> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.width;
        self.vertices.get(start..start + self.width)
    }
}

/// A mesh of simplices (points, intervals, triangles, tetrahedra).
///
/// Connectivity for every dimension `0..=tdim` is computed once at
/// construction:
/// - dimension 0 entities are the vertices, in vertex order;
/// - dimension `tdim` entities are the cells exactly as given;
/// - intermediate entities (edges, facets) are the `(d+1)`-vertex subsets of
///   each cell's sorted vertex list, deduplicated and numbered in order of
///   first occurrence (cells in index order, subsets lexicographic).
///
/// A mesh with `tdim == 0` is a point cloud: its cells are its vertices and
/// the cell buffer only has to reference existing vertices.
///
/// Coordinates are not checked for finiteness here.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexMesh {
    gdim: usize,
    tdim: usize,
    coordinates: Vec<f64>,
    connectivity: Vec<Connectivity>,
}

impl SimplexMesh {
    /// Assembles a mesh from flat coordinate and cell buffers.
    ///
    /// `coordinates` holds `gdim` values per vertex; `cells` holds `tdim + 1`
    /// vertex indices per cell.
    pub fn new(
        gdim: usize,
        tdim: usize,
        coordinates: Vec<f64>,
        cells: Vec<usize>,
    ) -> Result<Self, MeshError> {
        if !(1..=3).contains(&gdim) {
            return Err(MeshError::InvalidGeometricDimension(gdim));
        }
        if tdim > gdim {
            return Err(MeshError::InvalidTopologicalDimension { tdim, gdim });
        }
        if coordinates.len() % gdim != 0 {
            return Err(MeshError::CoordinateLength {
                len: coordinates.len(),
                gdim,
            });
        }
        let width = tdim + 1;
        if cells.len() % width != 0 {
            return Err(MeshError::CellLength {
                len: cells.len(),
                width,
            });
        }
        let num_vertices = coordinates.len() / gdim;
        if let Some(pos) = cells.iter().position(|&v| v >= num_vertices) {
            return Err(MeshError::VertexOutOfRange {
                cell: pos / width,
                vertex: cells[pos],
                num_vertices,
            });
        }

        let cells = Connectivity {
            width,
            vertices: cells,
        };
        let mut connectivity = Vec::with_capacity(tdim + 1);
        connectivity.push(Connectivity {
            width: 1,
            vertices: (0..num_vertices).collect(),
        });
        for dim in 1..tdim {
            connectivity.push(derive_entities(&cells, dim));
        }
        if tdim > 0 {
            connectivity.push(cells);
        }

        debug!(
            gdim,
            tdim,
            num_vertices,
            num_cells = connectivity[tdim].len(),
            "assembled simplex mesh"
        );
        Ok(Self {
            gdim,
            tdim,
            coordinates,
            connectivity,
        })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.coordinates.len() / self.gdim
    }

    /// Number of cells.
    pub fn num_cells(&self) -> usize {
        self.num_entities(self.tdim)
    }

    /// Flat coordinate buffer (`gdim` values per vertex).
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
}

impl EntityGeometry for SimplexMesh {
    fn geometric_dimension(&self) -> usize {
        self.gdim
    }

    fn topological_dimension(&self) -> usize {
        self.tdim
    }

    fn num_entities(&self, dim: usize) -> usize {
        self.connectivity.get(dim).map_or(0, Connectivity::len)
    }

    fn entity_vertices(&self, dim: usize, index: usize) -> Option<&[usize]> {
        self.connectivity.get(dim)?.get(index)
    }

    fn vertex_coordinates(&self, vertex: usize) -> Option<&[f64]> {
        let start = vertex.checked_mul(self.gdim)?;
        let end = start.checked_add(self.gdim)?;
        self.coordinates.get(start..end)
    }
}

fn derive_entities(cells: &Connectivity, dim: usize) -> Connectivity {
    let width = dim + 1;
    let combos = index_combinations(cells.width, width);
    let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
    let mut vertices = Vec::new();
    let mut sorted = Vec::with_capacity(cells.width);
    for cell in cells.vertices.chunks_exact(cells.width) {
        sorted.clear();
        sorted.extend_from_slice(cell);
        sorted.sort_unstable();
        for combo in &combos {
            let key: Vec<usize> = combo.iter().map(|&i| sorted[i]).collect();
            if !seen.contains(&key) {
                vertices.extend_from_slice(&key);
                seen.insert(key);
            }
        }
    }
    Connectivity { width, vertices }
}

/// All `k`-subsets of `0..n` in lexicographic order. Requires `1 <= k <= n`.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            break;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
    out
}
