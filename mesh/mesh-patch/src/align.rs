//! Corner alignment for four-sided patches.

use crate::{PatchError, PatchResult, Segments};

/// Positions of the corner markers along the boundary.
fn corner_positions(convexity: &[i32]) -> Vec<usize> {
    convexity
        .iter()
        .enumerate()
        .filter(|(_, &c)| c >= 1)
        .map(|(i, _)| i)
        .collect()
}

/// Find a rotation that maps the observed corner positions onto the target
/// cumulative offsets, trying each corner as the candidate start.
fn find_rotation(corners: &[usize], cumulative: &[usize; 4], len: usize) -> Option<usize> {
    for k in 0..corners.len() {
        let r = corners[k];
        let matches = (0..4).all(|j| (corners[(k + j) % 4] + len - r) % len == cumulative[j]);
        if matches {
            return Some(r);
        }
    }
    None
}

/// Rotate a four-sided patch so position 0 is the corner from which the
/// sides read `segments[0], segments[1], segments[2], segments[3]`.
///
/// Tries the boundary as given; if no rotation fits, reverses both
/// sequences and retries, handling either winding direction. On success
/// both sequences are rotated (and possibly reversed) in place.
///
/// # Errors
///
/// Returns [`PatchError::CornerCount`] when the markers do not flag exactly
/// four corners, and [`PatchError::CornerAlignment`] when neither direction
/// admits a matching rotation, meaning the corner labeling is inconsistent
/// with the loop.
pub fn align_to_corner(
    patch: &mut Vec<u32>,
    convexity: &mut Vec<i32>,
    segments: &Segments,
) -> PatchResult<()> {
    let found = convexity.iter().filter(|&&c| c >= 1).count();
    if found != 4 {
        return Err(PatchError::CornerCount { expected: 4, found });
    }

    let len = patch.len();
    let cumulative = [
        0,
        segments[0],
        segments[0] + segments[1],
        segments[0] + segments[1] + segments[2],
    ];

    let mut rotation = find_rotation(&corner_positions(convexity), &cumulative, len);
    if rotation.is_none() {
        patch.reverse();
        convexity.reverse();
        rotation = find_rotation(&corner_positions(convexity), &cumulative, len);
    }
    let Some(r) = rotation else {
        return Err(PatchError::CornerAlignment);
    };

    patch.rotate_left(r);
    convexity.rotate_left(r);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn aligned_input_is_untouched() {
        let mut patch: Vec<u32> = (0..8).collect();
        let mut convexity = vec![1, 0, 1, 0, 1, 0, 1, 0];
        let segments: Segments = smallvec![2, 2, 2, 2];

        align_to_corner(&mut patch, &mut convexity, &segments).unwrap();
        assert_eq!(patch, (0..8).collect::<Vec<u32>>());
        assert_eq!(convexity[0], 1);
    }

    #[test]
    fn rotated_input_is_normalized() {
        // Sides 3,1,3,1 but the sequence starts one vertex past a corner.
        let mut patch: Vec<u32> = (0..8).collect();
        let mut convexity = vec![0, 0, 1, 1, 0, 0, 1, 1];
        let segments: Segments = smallvec![3, 1, 3, 1];

        align_to_corner(&mut patch, &mut convexity, &segments).unwrap();
        assert!(convexity[0] >= 1);
        // Corner offsets now match the cumulative pattern 0, 3, 4, 7.
        let corners = corner_positions(&convexity);
        assert_eq!(corners, vec![0, 3, 4, 7]);
    }

    #[test]
    fn reversed_winding_is_recovered() {
        // Corner spacing 4,3,2,1 only matches sides 1,2,3,4 after the
        // traversal direction is flipped.
        let mut patch: Vec<u32> = (0..10).collect();
        let mut convexity = vec![1, 0, 0, 0, 1, 0, 0, 1, 0, 1];
        let segments: Segments = smallvec![1, 2, 3, 4];

        align_to_corner(&mut patch, &mut convexity, &segments).unwrap();
        let corners = corner_positions(&convexity);
        assert_eq!(corners, vec![0, 1, 3, 6]);
        // The boundary itself was reversed before rotating.
        assert_ne!(patch, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn under_four_markers_is_an_error_not_a_panic() {
        let mut patch: Vec<u32> = (0..8).collect();
        let mut convexity = vec![1, 0, 0, 0, 1, 0, 0, 0];
        let segments: Segments = smallvec![2, 2, 2, 2];

        let err = align_to_corner(&mut patch, &mut convexity, &segments).unwrap_err();
        assert!(matches!(
            err,
            PatchError::CornerCount {
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn inconsistent_labeling_is_rejected() {
        let mut patch: Vec<u32> = (0..8).collect();
        let mut convexity = vec![1, 0, 1, 0, 1, 0, 1, 0];
        // Sides 3,3,1,1 cannot come from evenly spaced corners.
        let segments: Segments = smallvec![3, 3, 1, 1];

        let err = align_to_corner(&mut patch, &mut convexity, &segments).unwrap_err();
        assert!(matches!(err, PatchError::CornerAlignment));
    }
}
