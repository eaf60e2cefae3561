use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use log::trace;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared `ScalarData`.
///
/// Only used as a key while the corresponding `Scalar` handles are alive
/// (the traversal holds clones of them), so the address cannot be reused.
pub type NodeId = *const ScalarData;

/// Builds a topological ordering of the graph rooted at `root`.
///
/// Depth-first post-order over the operand relation: a node is appended only
/// after all of its operands, so `root` comes last and iterating the result in
/// reverse visits every consumer before its operands. Each node appears once;
/// the visited set is keyed by [`NodeId`], never by value.
///
/// Uses an explicit stack instead of recursion so deep expression chains do
/// not exhaust the call stack.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Scalar> = Vec::new();
    // (node, operands_pushed)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_pushed)) = stack.pop() {
        if operands_pushed {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    trace!("topological_sort: {} node(s)", sorted_list.len());
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
