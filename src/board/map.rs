use super::location::Location;
use super::ticket::Ticket;
use anyhow::ensure;
use anyhow::Result;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The board: a fixed undirected multigraph of transport routes.
///
/// Nodes are locations, edges are labelled by the ticket that pays for
/// their traversal. Parallel routes between the same pair of locations
/// are ordinary parallel edges and stay distinct. Built once at setup,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Map {
    graph: UnGraph<Location, Ticket>,
    index: HashMap<Location, NodeIndex>,
}

impl Map {
    pub fn new(routes: impl IntoIterator<Item = (Location, Location, Ticket)>) -> Result<Self> {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();
        for (a, b, ticket) in routes {
            ensure!(a != b, "route at {} loops back on itself", a);
            ensure!(ticket.is_travel(), "{} cannot label a route", ticket);
            let na = *index.entry(a).or_insert_with(|| graph.add_node(a));
            let nb = *index.entry(b).or_insert_with(|| graph.add_node(b));
            graph.add_edge(na, nb, ticket);
        }
        ensure!(graph.edge_count() > 0, "map has no routes");
        Ok(Self { graph, index })
    }

    pub fn contains(&self, at: Location) -> bool {
        self.index.contains_key(&at)
    }
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.graph.node_weights().copied()
    }
    /// every (ticket, destination) pair one route away from here.
    /// asking about a location that is not on the map is a caller
    /// contract violation.
    pub fn routes(&self, from: Location) -> Vec<(Ticket, Location)> {
        let node = *self.index.get(&from).expect("location is on the map");
        self.graph
            .edges(node)
            .map(|edge| (*edge.weight(), self.graph[edge.target()]))
            .collect()
    }

    /// the fixed exhibition board: a tram ring with spokes, bus lines
    /// between districts, a rail spine, and two cloak-only river
    /// crossings.
    pub fn demo() -> Self {
        const ROUTES: &[(u16, u16, Ticket)] = &[
            (1, 2, Ticket::Tram),
            (2, 3, Ticket::Tram),
            (3, 4, Ticket::Tram),
            (4, 5, Ticket::Tram),
            (5, 6, Ticket::Tram),
            (6, 7, Ticket::Tram),
            (7, 8, Ticket::Tram),
            (8, 1, Ticket::Tram),
            (2, 9, Ticket::Tram),
            (4, 10, Ticket::Tram),
            (6, 11, Ticket::Tram),
            (8, 12, Ticket::Tram),
            (9, 13, Ticket::Tram),
            (10, 14, Ticket::Tram),
            (11, 15, Ticket::Tram),
            (12, 16, Ticket::Tram),
            (2, 10, Ticket::Bus),
            (4, 11, Ticket::Bus),
            (6, 12, Ticket::Bus),
            (8, 9, Ticket::Bus),
            (13, 14, Ticket::Bus),
            (14, 15, Ticket::Bus),
            (15, 16, Ticket::Bus),
            (16, 13, Ticket::Bus),
            (1, 5, Ticket::Rail),
            (3, 7, Ticket::Rail),
            (13, 15, Ticket::Rail),
            (14, 16, Ticket::Rail),
            (9, 11, Ticket::Cloak),
            (10, 12, Ticket::Cloak),
        ];
        Self::new(
            ROUTES
                .iter()
                .map(|&(a, b, ticket)| (Location::from(a), Location::from(b), ticket)),
        )
        .expect("demo map is well formed")
    }
}
