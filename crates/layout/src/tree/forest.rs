use crate::{LayoutOptions, OrgChart};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use tracing::{debug, trace};

/// Parent/child structure derived from the hierarchical relations of a chart
///
/// Nodes are indices into [`OrgChart::people`]. Every node has at most one
/// parent, and the children of a node are kept in sibling order.
#[derive(Debug, Clone)]
pub struct Forest {
    /// Parent to child edges, inserted in sibling order
    graph: DiGraphMap<usize, ()>,

    parents: Vec<Option<usize>>,

    roots: Vec<usize>,
}

impl Forest {
    /// Structural parent of `node`, if any
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    /// Children of `node`, in sibling order
    pub fn children(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .contains_node(node)
            .then(|| self.graph.neighbors_directed(node, Direction::Outgoing))
            .into_iter()
            .flatten()
    }

    /// Nodes without a structural parent that lead at least one hierarchical
    /// relation, in chart order
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Reduce the relations of `chart` to a forest
///
/// Relations are visited in chart order and only hierarchical kinds count.
/// The first relation claiming a target becomes its parent; later claims and
/// relations with an unknown end are skipped. A self-loop claims its own node,
/// which leaves that node outside every tree.
///
/// Roots are the parentless sources of hierarchical relations. People no
/// hierarchical relation starts from and no parent claims stay outside the
/// forest and are placed with the disconnected ones.
pub(crate) fn reduce_relations(chart: &OrgChart, options: &LayoutOptions) -> Forest {
    let mut parents: Vec<Option<usize>> = vec![None; chart.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); chart.len()];
    let mut leads = vec![false; chart.len()];
    let mut skipped = 0;

    for relation in chart.relations() {
        if !options.is_hierarchical(&relation.kind) {
            continue;
        }

        let (Some(source), Some(target)) = (
            chart.index_of(&relation.source),
            chart.index_of(&relation.target),
        ) else {
            trace!(
                "Skipping relation {} -> {} with an unknown end",
                relation.source,
                relation.target
            );
            skipped += 1;
            continue;
        };

        leads[source] = true;
        if parents[target].is_some() {
            trace!(
                "{} already has a parent, ignoring {} -> {}",
                relation.target,
                relation.source,
                relation.target
            );
            skipped += 1;
            continue;
        }

        parents[target] = Some(source);
        children[source].push(target);
    }

    for siblings in &mut children {
        siblings.sort_by(|&a, &b| chart.sibling_order(a, b));
    }

    let mut graph = DiGraphMap::with_capacity(chart.len(), chart.len());
    for node in 0..chart.len() {
        graph.add_node(node);
    }
    for (parent, siblings) in children.iter().enumerate() {
        for &child in siblings {
            graph.add_edge(parent, child, ());
        }
    }

    let roots: Vec<usize> = (0..chart.len())
        .filter(|&node| leads[node] && parents[node].is_none())
        .collect();

    debug!(
        "Reduced {} relations to {} tree edges, {} roots, {} skipped",
        chart.relations().len(),
        graph.edge_count(),
        roots.len(),
        skipped
    );

    Forest {
        graph,
        parents,
        roots,
    }
}
