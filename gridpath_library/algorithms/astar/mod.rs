//! A* Pathfinding on a 4-connected grid graph
//!
//! Shortest path search with uniform step cost and a pluggable heuristic.
//!
//! # Features
//!
//! - Deterministic tie-breaking: equal `f_cost` cells expand in discovery order
//! - Pluggable heuristic ([`HeuristicKind`] or any `Fn(Cell, Cell) -> u64`)
//! - Two priority-update policies ([`PriorityUpdate`])
//! - Finish-first or start-first output ([`PathOrder`])
//! - Unreachable finish is an ordinary `Ok(None)`, not an error
//!
//! # Example
//!
//! ```rust
//! use gridpath_core::GridGraph;
//! use gridpath_library::algorithms::astar::{AStar, PathOrder};
//! use gridpath_library::algorithms::heuristic::HeuristicKind;
//!
//! let graph = GridGraph::from_codes(&[
//!     vec![1, -1, 0],
//!     vec![0, -1, 0],
//!     vec![0, 0, 2],
//! ])
//! .unwrap();
//!
//! let mut astar = AStar::new();
//! astar.set_heuristic(HeuristicKind::Manhattan);
//! astar.set_path_order(PathOrder::StartFirst);
//!
//! if let Some(path) = astar.plan(&graph, graph.start(), graph.finish()).unwrap() {
//!     println!("Found path with {} steps", path.steps());
//! }
//! ```
//!
//! # Priority updates
//!
//! When a cheaper route to a cell that is still open is found, its `g_cost`
//! and predecessor are replaced. Under [`PriorityUpdate::Stale`] (the default)
//! the cell keeps the `f_cost` it was given on discovery, so it may be
//! selected later than its true cost warrants. [`PriorityUpdate::Refresh`]
//! recomputes `f_cost = g_cost + h_cost` and re-queues the cell instead.

mod open_set;
mod path;


pub use path::{Path, PathOrder};

use super::heuristic::{Heuristic, HeuristicKind};
use gridpath_core::{Cell, Graph, GridGraph};
use open_set::OpenSet;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Entry, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

/// Cost of moving between two adjacent cells
const STEP_COST: u64 = 1;

/// A* errors
///
/// An unreachable finish is not an error; see [`AStar::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Start cell {0} is not part of the graph")]
    UnknownStart(Cell),

    #[error("Finish cell {0} is not part of the graph")]
    UnknownFinish(Cell),
}

/// Result type for A* operations
pub type SearchResult<T> = Result<T, SearchError>;

/// What to do with an open cell's priority when a cheaper route reaches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityUpdate {
    /// Keep the `f_cost` assigned on first discovery
    #[default]
    Stale,
    /// Recompute `f_cost` and re-queue the cell
    Refresh,
}

/// Serializable planner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AStarConfig {
    pub heuristic: HeuristicKind,
    pub priority_update: PriorityUpdate,
    pub path_order: PathOrder,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Cells moved to the closed set
    pub expanded: usize,
    /// Cells that entered the open set, start included
    pub discovered: usize,
    /// Open cells whose `g_cost` was lowered after discovery
    pub improved: usize,
    /// Largest open-set size observed
    pub max_frontier: usize,
}

/// Outcome of a search together with its counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// `None` when the finish is unreachable
    pub path: Option<Path>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Open,
    Closed,
}

/// Per-cell search attributes, created on first discovery
#[derive(Debug, Clone, Copy)]
struct Node {
    g_cost: u64,
    h_cost: u64,
    f_cost: u64,
    /// None only for the start cell
    predecessor: Option<Cell>,
    seq: u64,
    state: NodeState,
}

/// A* Pathfinder
///
/// Holds only settings; all search state lives inside a single call, so one
/// planner can be reused across graphs and queries.
#[derive(Debug, Clone)]
pub struct AStar<H = HeuristicKind> {
    heuristic: H,
    priority_update: PriorityUpdate,
    path_order: PathOrder,
}

impl AStar<HeuristicKind> {
    /// Create planner with default settings
    pub fn new() -> Self {
        Self::from_config(&AStarConfig::default())
    }

    /// Create planner from serialized settings
    pub fn from_config(config: &AStarConfig) -> Self {
        Self {
            heuristic: config.heuristic,
            priority_update: config.priority_update,
            path_order: config.path_order,
        }
    }

    /// Set heuristic
    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) {
        self.heuristic = heuristic;
    }

    /// Current settings
    pub fn config(&self) -> AStarConfig {
        AStarConfig {
            heuristic: self.heuristic,
            priority_update: self.priority_update,
            path_order: self.path_order,
        }
    }
}

impl Default for AStar<HeuristicKind> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> AStar<H> {
    /// Swap in a custom heuristic, keeping the other settings
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> AStar<H2> {
        AStar {
            heuristic,
            priority_update: self.priority_update,
            path_order: self.path_order,
        }
    }

    /// Set priority update policy
    pub fn set_priority_update(&mut self, policy: PriorityUpdate) {
        self.priority_update = policy;
    }

    /// Set output order of planned paths
    pub fn set_path_order(&mut self, order: PathOrder) {
        self.path_order = order;
    }

    /// Plan a path from `start` to `finish`
    ///
    /// Returns `Ok(None)` when `finish` cannot be reached.
    pub fn plan<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: Cell,
        finish: Cell,
    ) -> SearchResult<Option<Path>> {
        Ok(self.search(graph, start, finish)?.path)
    }

    /// Plan between the start and finish cells designated by the grid
    pub fn solve(&self, grid: &GridGraph) -> SearchResult<SearchReport> {
        self.search(grid, grid.start(), grid.finish())
    }

    /// Plan a path and report search counters
    pub fn search<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: Cell,
        finish: Cell,
    ) -> SearchResult<SearchReport> {
        run(
            graph,
            start,
            finish,
            &self.heuristic,
            self.priority_update,
            self.path_order,
        )
    }
}

fn run<G, H>(
    graph: &G,
    start: Cell,
    finish: Cell,
    heuristic: &H,
    priority_update: PriorityUpdate,
    path_order: PathOrder,
) -> SearchResult<SearchReport>
where
    G: Graph + ?Sized,
    H: Heuristic + ?Sized,
{
    if !graph.contains(start) {
        return Err(SearchError::UnknownStart(start));
    }
    if !graph.contains(finish) {
        return Err(SearchError::UnknownFinish(finish));
    }

    let mut stats = SearchStats::default();
    let mut nodes: HashMap<Cell, Node> = HashMap::new();
    let mut open = OpenSet::new();

    let seq = open.next_seq();
    nodes.insert(
        start,
        Node {
            g_cost: 0,
            h_cost: heuristic.estimate(start, finish),
            f_cost: 0,
            predecessor: None,
            seq,
            state: NodeState::Open,
        },
    );
    open.push(0, seq, start);
    stats.discovered = 1;
    stats.max_frontier = 1;

    while let Some((f_cost, current)) = open.pop() {
        let g_current = match nodes.get(&current) {
            Some(node) if node.state == NodeState::Open && node.f_cost == f_cost => node.g_cost,
            // Superseded by a re-queued entry, or already expanded
            _ => continue,
        };

        if current == finish {
            let path = path::reconstruct(current, |cell| {
                nodes.get(&cell).and_then(|node| node.predecessor)
            })
            .into_order(path_order);

            debug!(
                %start,
                %finish,
                steps = path.steps(),
                expanded = stats.expanded,
                discovered = stats.discovered,
                improved = stats.improved,
                "path found"
            );
            return Ok(SearchReport {
                path: Some(path),
                stats,
            });
        }

        trace!(cell = %current, g_cost = g_current, f_cost, "expanding");

        for &successor in graph.neighbors(current) {
            let candidate = g_current + STEP_COST;

            match nodes.entry(successor) {
                Entry::Vacant(slot) => {
                    let h_cost = heuristic.estimate(successor, finish);
                    let seq = open.next_seq();
                    slot.insert(Node {
                        g_cost: candidate,
                        h_cost,
                        f_cost: candidate + h_cost,
                        predecessor: Some(current),
                        seq,
                        state: NodeState::Open,
                    });
                    open.push(candidate + h_cost, seq, successor);
                    stats.discovered += 1;
                }
                Entry::Occupied(mut slot) => {
                    let node = slot.get_mut();
                    if node.state == NodeState::Closed || candidate >= node.g_cost {
                        continue;
                    }

                    node.g_cost = candidate;
                    node.predecessor = Some(current);
                    stats.improved += 1;

                    if priority_update == PriorityUpdate::Refresh {
                        node.f_cost = candidate + node.h_cost;
                        open.push(node.f_cost, node.seq, successor);
                    }
                }
            }
        }

        if let Some(node) = nodes.get_mut(&current) {
            node.state = NodeState::Closed;
        }
        stats.expanded += 1;
        stats.max_frontier = stats.max_frontier.max(open.len());
    }

    debug!(
        %start,
        %finish,
        expanded = stats.expanded,
        discovered = stats.discovered,
        "finish unreachable"
    );
    Ok(SearchReport { path: None, stats })
}

/// Find a path with the default policies (stale priorities, finish-first order)
///
/// Returns `Ok(None)` when `finish` is unreachable from `start`.
pub fn find_path<G, H>(
    graph: &G,
    start: Cell,
    finish: Cell,
    heuristic: &H,
) -> SearchResult<Option<Path>>
where
    G: Graph + ?Sized,
    H: Heuristic + ?Sized,
{
    let report = run(
        graph,
        start,
        finish,
        heuristic,
        PriorityUpdate::default(),
        PathOrder::default(),
    )?;
    Ok(report.path)
}
