// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Read-only view of a mesh's entities and their vertex coordinates.
///
/// Entities of dimension 0 are vertices and entities of dimension
/// [`topological_dimension`](Self::topological_dimension) are cells. Vertex
/// coordinates always have [`geometric_dimension`](Self::geometric_dimension)
/// components.
pub trait EntityGeometry {
    /// Dimension of the ambient coordinate space (1, 2 or 3).
    fn geometric_dimension(&self) -> usize;

    /// Dimension of the mesh's cells.
    fn topological_dimension(&self) -> usize;

    /// Number of local entities of dimension `dim`; zero if `dim` exceeds the
    /// topological dimension.
    fn num_entities(&self, dim: usize) -> usize;

    /// Vertex indices of entity `index` of dimension `dim`.
    fn entity_vertices(&self, dim: usize, index: usize) -> Option<&[usize]>;

    /// Coordinates of vertex `vertex`.
    fn vertex_coordinates(&self, vertex: usize) -> Option<&[f64]>;

    /// Coordinates of every vertex of entity `index` of dimension `dim`.
    ///
    /// Returns `None` if the entity or one of its vertices does not exist.
    fn entity_coordinates(&self, dim: usize, index: usize) -> Option<Vec<&[f64]>> {
        self.entity_vertices(dim, index)?
            .iter()
            .map(|&v| self.vertex_coordinates(v))
            .collect()
    }
}
