//! Boundary classification: convexity markers to per-side edge counts.

use crate::{PatchError, PatchResult};
use smallvec::SmallVec;

/// Per-side edge counts of a patch boundary. At most five sides.
pub type Segments = SmallVec<[usize; 5]>;

/// Split a cyclic boundary into per-side edge counts.
///
/// `convexity` carries one marker per boundary vertex, in boundary order;
/// a value ≥ 1 flags the vertex as a corner (side endpoint). The walk
/// starts at the first marker (which the committer requires to be a
/// corner), accumulates an edge counter that resets at each corner, and
/// credits the closing edge to the final side.
///
/// Postcondition: the counts sum to the boundary length.
///
/// # Errors
///
/// Returns [`PatchError::CornerCount`] if the number of markers ≥ 1
/// differs from `n_edge`; that is an upstream mis-tagging, not a solvable
/// condition.
///
/// # Example
///
/// ```
/// use mesh_patch::side_segments;
///
/// // Four corners, two edges per side.
/// let convexity = [1, 0, 1, 0, 1, 0, 1, 0];
/// let segments = side_segments(&convexity, 4)?;
/// assert_eq!(segments.as_slice(), &[2, 2, 2, 2]);
/// # Ok::<(), mesh_patch::PatchError>(())
/// ```
pub fn side_segments(convexity: &[i32], n_edge: usize) -> PatchResult<Segments> {
    let found = convexity.iter().filter(|&&c| c >= 1).count();
    if found != n_edge {
        return Err(PatchError::CornerCount {
            expected: n_edge,
            found,
        });
    }

    let mut segments: Segments = SmallVec::from_elem(0, n_edge);
    let mut side = 0;
    let mut count = 0;
    for &marker in convexity.iter().skip(1) {
        count += 1;
        if marker >= 1 {
            segments[side] = count;
            side += 1;
            count = 0;
        }
    }
    // The closing edge back to the starting corner.
    segments[n_edge - 1] = count + 1;
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_quad_boundary() {
        let convexity = [1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0];
        let segments = side_segments(&convexity, 4).unwrap();
        assert_eq!(segments.as_slice(), &[3, 3, 3, 3]);
    }

    #[test]
    fn uneven_sides() {
        let convexity = [1, 0, 0, 1, 0, 1, 1, 0];
        let segments = side_segments(&convexity, 4).unwrap();
        assert_eq!(segments.as_slice(), &[3, 2, 1, 2]);
        assert_eq!(segments.iter().sum::<usize>(), convexity.len());
    }

    #[test]
    fn three_sided_boundary() {
        let convexity = [1, 0, 1, 0, 1, 0];
        let segments = side_segments(&convexity, 3).unwrap();
        assert_eq!(segments.as_slice(), &[2, 2, 2]);
    }

    #[test]
    fn single_edge_sides() {
        let convexity = [1, 1, 1, 1, 1];
        let segments = side_segments(&convexity, 5).unwrap();
        assert_eq!(segments.as_slice(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn wrong_marker_count_is_rejected() {
        let convexity = [1, 0, 1, 0, 0, 0];
        let err = side_segments(&convexity, 4).unwrap_err();
        assert!(matches!(
            err,
            PatchError::CornerCount {
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn strong_markers_count_as_corners() {
        // Marker values above 1 are still corners.
        let convexity = [2, 0, 3, 0, 1, 0];
        let segments = side_segments(&convexity, 3).unwrap();
        assert_eq!(segments.iter().sum::<usize>(), 6);
    }
}
