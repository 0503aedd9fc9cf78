use serde::{Deserialize, Serialize};

/// Cost of traversing an edge, or an accumulated path cost.
///
/// Weights are validated non-negative at edge insertion; the
/// shortest-path relaxation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeWeight(f64);

impl EdgeWeight {
    pub const ZERO: EdgeWeight = EdgeWeight(0.0);
    pub const DEFAULT: EdgeWeight = EdgeWeight(1.0);
    pub const INFINITY: EdgeWeight = EdgeWeight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        EdgeWeight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for EdgeWeight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for EdgeWeight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        EdgeWeight(self.0 + other.0)
    }
}

impl From<f64> for EdgeWeight {
    fn from(weight: f64) -> Self {
        EdgeWeight(weight)
    }
}

impl std::fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Whole costs print without a trailing ".0"
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Directed adjacency entry: the far endpoint and the edge cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub to: String,
    pub weight: EdgeWeight,
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub vertex: String,
    pub cost: EdgeWeight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.cost.value() == other.cost.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.value().total_cmp(&other.cost.value())
    }
}

/// Shortest-path result.
///
/// `found` distinguishes "no path exists" from a missing endpoint; the
/// latter is reported as an error before the search runs.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<EdgeWeight>,
    pub path: Vec<String>,
}
