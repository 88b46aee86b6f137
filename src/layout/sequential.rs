//! Exact placement by walking a chain of three known sides
//!
//! With exactly one side unknown, the other three form a path through all
//! four vertices. The first edge of the path is laid along +x from the origin;
//! each further vertex is reached by turning through the known interior angle
//! at the previous vertex and stepping the known side length. The unknown side
//! is whatever closes the path.
//!
//! The finished chain is then turned and shifted so every variant rests on
//! the same baseline: DC with D at the origin and C on +x, or AD with A at the
//! origin and D on +x when CD itself is the missing side. The shape is always
//! built upward from that baseline.

use super::types::Point;

/// Direction in which a chain visits the vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// `i, i-1, i-2, i-3`; turns clockwise by the interior angle
    Backward,
    /// `i, i+1, i+2, i+3`; turns counter-clockwise by the interior angle
    Forward,
}

impl Walk {
    fn step(self) -> usize {
        match self {
            Walk::Backward => 3,
            Walk::Forward => 1,
        }
    }

    /// Sign of the rotation from the ray back along the path to the ray ahead.
    /// Opposite walks turn opposite ways so every chain yields the same winding.
    fn turn(self) -> f64 {
        match self {
            Walk::Backward => -1.0,
            Walk::Forward => 1.0,
        }
    }
}

/// A placement chain for one missing side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub missing_side: usize,
    /// Vertex fixed at the origin
    pub root: usize,
    pub walk: Walk,
}

impl Chain {
    /// The chain that leaves `missing_side` as the closing edge.
    ///
    /// Missing DA or AB walk backward from D or A; missing BC or CD walk
    /// forward from C or D. A missing DA places D at the origin and C on +x.
    pub fn for_missing_side(missing_side: usize) -> Self {
        let missing_side = missing_side % 4;
        match missing_side {
            3 | 0 => Chain {
                missing_side,
                root: missing_side,
                walk: Walk::Backward,
            },
            _ => Chain {
                missing_side,
                root: (missing_side + 1) % 4,
                walk: Walk::Forward,
            },
        }
    }

    /// Vertex indices in placement order
    pub fn vertices(&self) -> [usize; 4] {
        let step = self.walk.step();
        std::array::from_fn(|k| (self.root + k * step) % 4)
    }

    /// The side laid along +x
    pub fn fixed_edge(&self) -> usize {
        let v = self.vertices();
        side_between(v[0], v[1])
    }

    /// Vertices whose interior angles the walk turns through
    pub fn bridges(&self) -> [usize; 2] {
        let v = self.vertices();
        [v[1], v[2]]
    }

    /// Sides stepped along, in order
    pub fn edges(&self) -> [usize; 3] {
        let v = self.vertices();
        [
            side_between(v[0], v[1]),
            side_between(v[1], v[2]),
            side_between(v[2], v[3]),
        ]
    }

    /// The edge the solved shape rests on, as `(origin vertex, +x vertex)`
    pub fn baseline(&self) -> (usize, usize) {
        match self.missing_side {
            2 => (0, 3),
            _ => (3, 2),
        }
    }

    /// Whether every length and angle the walk needs is known
    pub fn is_supported(&self, lengths: &[Option<f64>; 4], angles: &[Option<f64>; 4]) -> bool {
        self.edges().iter().all(|&e| lengths[e].is_some_and(|l| l > 0.0))
            && self.bridges().iter().all(|&v| angles[v].is_some())
    }
}

/// Index of the side joining two cyclically adjacent vertices
fn side_between(a: usize, b: usize) -> usize {
    if (a + 1) % 4 == b {
        a
    } else {
        b
    }
}

/// Place all four vertices in model space (y up).
///
/// Returns `None` if a length or angle the chain needs is missing.
pub fn solve(
    chain: &Chain,
    lengths: &[Option<f64>; 4],
    angles: &[Option<f64>; 4],
) -> Option<[Point; 4]> {
    if !chain.is_supported(lengths, angles) {
        return None;
    }
    let v = chain.vertices();
    let edges = chain.edges();
    let turn = chain.walk.turn();

    let mut positions = [Point::origin(); 4];
    positions[v[1]] = Point::new(lengths[edges[0]]?, 0.0);

    for k in 1..3 {
        let (prev, here, next) = (v[k - 1], v[k], v[k + 1]);
        let interior = angles[here]?.to_radians();
        let heading = positions[here].direction_to(positions[prev]) + turn * interior;
        positions[next] = positions[here].offset(heading, lengths[edges[k]]?);
    }

    Some(settle_on_baseline(positions, chain.baseline()))
}

/// Rigidly move `positions` so `origin` sits at (0, 0) and `along` on +x
fn settle_on_baseline(positions: [Point; 4], (origin, along): (usize, usize)) -> [Point; 4] {
    let pivot = positions[origin];
    let (sin, cos) = (-pivot.direction_to(positions[along])).sin_cos();
    positions.map(|p| {
        let (dx, dy) = (p.x - pivot.x, p.y - pivot.y);
        Point::new(dx * cos - dy * sin, dx * sin + dy * cos)
    })
}
