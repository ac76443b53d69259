use crate::maze::Position;

/// one exploration step, recorded whether or not it ends up on the final path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Position,
    pub to: Position,
}

impl Edge {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// ordered sink for the edges a single search run examines
#[derive(Debug, Default)]
pub struct SearchTrace {
    edges: Vec<Edge>,
}

impl SearchTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, from: Position, to: Position) {
        self.edges.push(Edge::new(from, to));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// cells from the first step after the start up to and including the food,
    /// `None` when the food is unreachable
    pub path: Option<Vec<Position>>,
    pub trace: Vec<Edge>,
}

impl SearchResult {
    pub fn found(path: Vec<Position>, trace: SearchTrace) -> Self {
        Self {
            path: Some(path),
            trace: trace.into_edges(),
        }
    }

    pub fn unreachable(trace: SearchTrace) -> Self {
        Self {
            path: None,
            trace: trace.into_edges(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}
