//! Integer partition solvers for 3-, 4-, and 5-sided patches.
//!
//! A fan decomposition splits an odd-sided patch into one quadrilateral
//! wedge per side, all meeting at an interior hub. Wedge `i` takes the
//! first `x_i` edges of side `i` and the last `y_i = s_i - x_i` edges of
//! side `i`; gluing the wedges around the hub forces the opposite-chain
//! match `x_i = y_{i-2}`, i.e. the cyclic system
//!
//! ```text
//! x_i + x_{(i+2) mod n} = s_i        for i in 0..n
//! ```
//!
//! For odd `n` the index step of two visits every side once, so the system
//! has at most one solution; it is valid when it is integral and every
//! sub-length is at least one edge.

use crate::Segments;
use smallvec::SmallVec;

/// Solver output: one `[x, y]` pair of sub-segment lengths per wedge.
pub type PartSegments = SmallVec<[[usize; 2]; 5]>;

/// Outcome of the 4-sided partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadPartition {
    /// Opposite sides already match; a structured grid fits directly.
    Perfect,
    /// Solvable after reduction to an effective 3-sided problem.
    AsTriangle(PartSegments),
    /// The side lengths admit no valid quad tiling.
    Unsolvable,
}

/// Solve the cyclic wedge system for an odd number of sides.
fn solve_fan(segments: &[usize]) -> Option<PartSegments> {
    let n = segments.len();
    debug_assert!(n % 2 == 1, "fan systems are odd-sided");

    // Walking i -> i+2 (mod n) chains x_{i+2} = s_i - x_i through every
    // side; closing the loop pins 2*x_0 to an alternating sum.
    let mut alternating = 0i64;
    let mut sign = 1i64;
    let mut idx = 0;
    for _ in 0..n {
        alternating += sign * segments[idx] as i64;
        sign = -sign;
        idx = (idx + 2) % n;
    }
    if alternating <= 0 || alternating % 2 != 0 {
        return None;
    }

    let mut x = vec![0i64; n];
    x[0] = alternating / 2;
    let mut idx = 0;
    for _ in 0..n - 1 {
        let next = (idx + 2) % n;
        x[next] = segments[idx] as i64 - x[idx];
        idx = next;
    }

    let mut parts = PartSegments::new();
    for i in 0..n {
        let xi = x[i];
        let yi = segments[i] as i64 - xi;
        // Every wedge side needs at least one boundary edge.
        if xi < 1 || yi < 1 {
            return None;
        }
        parts.push([xi as usize, yi as usize]);
    }
    Some(parts)
}

/// Partition a 3-sided patch into three wedges, or fail.
#[must_use]
pub fn solve_three(segments: &Segments) -> Option<PartSegments> {
    debug_assert_eq!(segments.len(), 3);
    solve_fan(segments)
}

/// Partition a 5-sided patch into five wedges, or fail.
#[must_use]
pub fn solve_five(segments: &Segments) -> Option<PartSegments> {
    debug_assert_eq!(segments.len(), 5);
    solve_fan(segments)
}

/// Partition a 4-sided patch.
///
/// If opposite sides already match, a structured grid fits with no
/// sub-partition. Otherwise the patch reduces to an effective 3-sided
/// problem with side lengths `{d - b, c, a}` where `a = max(s0, s2)`,
/// `c = min(s0, s2)`, `b = min(s1, s3)` and `d = max(s1, s3)`.
#[must_use]
pub fn solve_four(segments: &Segments) -> QuadPartition {
    debug_assert_eq!(segments.len(), 4);
    if segments[0] == segments[2] && segments[1] == segments[3] {
        return QuadPartition::Perfect;
    }

    let a = segments[0].max(segments[2]);
    let c = segments[0].min(segments[2]);
    let b = segments[1].min(segments[3]);
    let d = segments[1].max(segments[3]);

    let reduced = [d - b, c, a];
    match solve_fan(&reduced) {
        Some(parts) => QuadPartition::AsTriangle(parts),
        None => QuadPartition::Unsolvable,
    }
}
