// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::cast_precision_loss)]

use tracing::debug;

use crate::{MeshError, SimplexMesh};

fn check_resolution(n: usize, axis: &'static str) -> Result<(), MeshError> {
    if n < 1 {
        return Err(MeshError::InvalidResolution { axis });
    }
    Ok(())
}

/// Uniform mesh of `[0, 1]` with `nx` interval cells.
///
/// Vertex `ix` sits at `ix / nx`; cell `ix` is `[ix, ix + 1]`.
pub fn unit_interval(nx: usize) -> Result<SimplexMesh, MeshError> {
    check_resolution(nx, "x")?;
    let coordinates = (0..=nx).map(|ix| ix as f64 / nx as f64).collect();
    let cells = (0..nx).flat_map(|ix| [ix, ix + 1]).collect();
    debug!(nx, "generated unit interval mesh");
    SimplexMesh::new(1, 1, coordinates, cells)
}

/// Triangulated mesh of `[0, 1]^2` with `nx * ny` quads, two triangles each.
///
/// Vertices are numbered `iy * (nx + 1) + ix`. Each quad is split along the
/// diagonal from its lower-left to its upper-right corner.
pub fn unit_square(nx: usize, ny: usize) -> Result<SimplexMesh, MeshError> {
    check_resolution(nx, "x")?;
    check_resolution(ny, "y")?;

    let mut coordinates = Vec::with_capacity(2 * (nx + 1) * (ny + 1));
    for iy in 0..=ny {
        let y = iy as f64 / ny as f64;
        for ix in 0..=nx {
            coordinates.extend_from_slice(&[ix as f64 / nx as f64, y]);
        }
    }

    let mut cells = Vec::with_capacity(6 * nx * ny);
    for iy in 0..ny {
        for ix in 0..nx {
            let v0 = iy * (nx + 1) + ix;
            let v1 = v0 + 1;
            let v2 = v0 + (nx + 1);
            let v3 = v1 + (nx + 1);
            cells.extend_from_slice(&[v0, v1, v3]);
            cells.extend_from_slice(&[v0, v2, v3]);
        }
    }

    debug!(nx, ny, "generated unit square mesh");
    SimplexMesh::new(2, 2, coordinates, cells)
}

/// Tetrahedral mesh of `[0, 1]^3` with `nx * ny * nz` hexahedra, six
/// tetrahedra each.
///
/// Vertices are numbered `iz * (nx + 1) * (ny + 1) + iy * (nx + 1) + ix`.
/// Every tetrahedron of a hexahedron shares the main diagonal `v0 -> v7`.
pub fn unit_cube(nx: usize, ny: usize, nz: usize) -> Result<SimplexMesh, MeshError> {
    check_resolution(nx, "x")?;
    check_resolution(ny, "y")?;
    check_resolution(nz, "z")?;

    let mut coordinates = Vec::with_capacity(3 * (nx + 1) * (ny + 1) * (nz + 1));
    for iz in 0..=nz {
        let z = iz as f64 / nz as f64;
        for iy in 0..=ny {
            let y = iy as f64 / ny as f64;
            for ix in 0..=nx {
                coordinates.extend_from_slice(&[ix as f64 / nx as f64, y, z]);
            }
        }
    }

    let row = nx + 1;
    let plane = (nx + 1) * (ny + 1);
    let mut cells = Vec::with_capacity(24 * nx * ny * nz);
    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                let v0 = iz * plane + iy * row + ix;
                let v1 = v0 + 1;
                let v2 = v0 + row;
                let v3 = v1 + row;
                let v4 = v0 + plane;
                let v5 = v1 + plane;
                let v6 = v2 + plane;
                let v7 = v3 + plane;

                cells.extend_from_slice(&[v0, v1, v3, v7]);
                cells.extend_from_slice(&[v0, v1, v7, v5]);
                cells.extend_from_slice(&[v0, v5, v7, v4]);
                cells.extend_from_slice(&[v0, v3, v2, v7]);
                cells.extend_from_slice(&[v0, v6, v4, v7]);
                cells.extend_from_slice(&[v0, v2, v6, v7]);
            }
        }
    }

    debug!(nx, ny, nz, "generated unit cube mesh");
    SimplexMesh::new(3, 3, coordinates, cells)
}
