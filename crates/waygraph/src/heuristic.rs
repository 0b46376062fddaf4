use crate::distance::{chebyshev, manhattan};

/// Remaining-cost estimate used by A* to order its frontier.
///
/// Must be non-negative and never overestimate the true remaining cost
/// (admissible), or A* may return a longer path than necessary.
pub trait Heuristic<V> {
    /// Estimated cost of reaching `to` from `from`.
    fn estimate(&self, from: &V, to: &V) -> i32;
}

/// Always estimates zero. A* with this heuristic explores like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<V> Heuristic<V> for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: &V, _to: &V) -> i32 {
        0
    }
}

impl<V, F> Heuristic<V> for F
where
    F: Fn(&V, &V) -> i32,
{
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> i32 {
        self(from, to)
    }
}

/// Payloads with a grid position, for the spatial heuristics.
pub trait Spatial {
    fn position(&self) -> [i32; 2];
}

impl Spatial for [i32; 2] {
    #[inline]
    fn position(&self) -> [i32; 2] {
        *self
    }
}

impl Spatial for (i32, i32) {
    #[inline]
    fn position(&self) -> [i32; 2] {
        [self.0, self.1]
    }
}

/// Manhattan distance between positions, scaled by the cheapest step cost.
///
/// Admissible when every edge between orthogonally adjacent cells costs at
/// least `min_step` and there are no diagonal shortcuts.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    pub min_step: i32,
}

impl Default for Manhattan {
    fn default() -> Self {
        Self { min_step: 1 }
    }
}

impl<V: Spatial> Heuristic<V> for Manhattan {
    fn estimate(&self, from: &V, to: &V) -> i32 {
        manhattan(from.position(), to.position()).saturating_mul(self.min_step)
    }
}

/// Chebyshev distance between positions, scaled by the cheapest step cost.
///
/// Admissible on 8-connected grids whose steps all cost at least
/// `min_step`.
#[derive(Debug, Clone, Copy)]
pub struct Chebyshev {
    pub min_step: i32,
}

impl Default for Chebyshev {
    fn default() -> Self {
        Self { min_step: 1 }
    }
}

impl<V: Spatial> Heuristic<V> for Chebyshev {
    fn estimate(&self, from: &V, to: &V) -> i32 {
        chebyshev(from.position(), to.position()).saturating_mul(self.min_step)
    }
}
