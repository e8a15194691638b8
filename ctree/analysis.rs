//! Structural analysis (Sharir's algorithm).
//!
//! Nodes are visited in post-order. When a region starts at the visited
//! node it is collapsed into a new abstract node, the graph is searched
//! again and the new node is visited next. Passes repeat until one of them
//! reduces nothing.

use std::collections::VecDeque;

use crate::{
    error::Error,
    node::{EdgeKind, LoopExit, NodeId, Region, Role},
    tree::ControlTree,
};

impl ControlTree {
    pub fn structural_analysis(&mut self) -> Result<(), Error> {
        self.require_entry()?;
        debug!("Starting structural analysis on tree '{}'", self.name());

        let mut queue = VecDeque::from(self.dfs()?);
        debug!("Initial control flow graph:\n{self}");

        let mut reduced = false;
        loop {
            let Some(node) = queue.pop_front() else {
                if !reduced {
                    break;
                }
                reduced = false;
                queue = self.dfs()?.into();
                continue;
            };

            // absorbed by a region while queued
            if self.get(node).map_or(true, |n| n.parent().is_some()) {
                continue;
            }

            debug!("Processing node '{}'", self[node].name());
            if let Some((region, list)) = self.region(node) {
                let abs = self.reduce(&list, region)?;
                self.dfs()?;
                queue.push_front(abs);
                reduced = true;
                debug!("{self}");
            }
        }

        self.analyzed = true;
        debug!("Done.");
        Ok(())
    }

    /// Region starting at `node` and the nodes it is made of.
    fn region(&mut self, node: NodeId) -> Option<(Region, Vec<NodeId>)> {
        let entry = self.entry();
        let succ = self[node].succ().to_vec();

        if let [next] = succ[..] {
            if next != node && Some(next) != entry && self[next].pred().len() == 1 {
                return Some((Region::Block, vec![node, next]));
            }
        }

        if let [mut then, mut endif] = succ[..] {
            if self[endif].succ().contains(&then) {
                std::mem::swap(&mut then, &mut endif);
            }
            let t = &self[then];
            if t.pred().len() == 1
                && t.succ() == [endif]
                && Some(then) != entry
                && node != endif
            {
                self.node_mut(node).role = Role::If;
                self.node_mut(then).role = Role::Then;
                return Some((Region::IfThen, vec![node, then, endif]));
            }
        }

        if let [then, other] = succ[..] {
            let (t, e) = (&self[then], &self[other]);
            if t.pred().len() == 1
                && e.pred().len() == 1
                && Some(then) != entry
                && Some(other) != entry
                && t.succ().len() == 1
                && t.succ() == e.succ()
                && Some(t.succ()[0]) != entry
            {
                self.node_mut(node).role = Role::If;
                self.node_mut(then).role = Role::Then;
                self.node_mut(other).role = Role::Else;
                return Some((Region::IfThenElse, vec![node, then, other]));
            }
        }

        if succ.contains(&node) {
            return Some((Region::Loop, vec![node]));
        }

        let list = self.reach_under(node);
        if let (&[a, b], &[first, second]) = (list.as_slice(), succ.as_slice()) {
            let tail = if a == node { b } else { a };
            let exit = if first == tail { second } else { first };
            let t = &self[tail];
            if tail != node
                && t.succ() == [node]
                && t.pred() == [node]
                && Some(tail) != entry
                && exit != node
            {
                // the first successor is taken when the condition holds
                let dir = if tail == first {
                    LoopExit::IfFalse
                } else {
                    LoopExit::IfTrue
                };
                self.node_mut(node).role = Role::Head(dir);
                self.node_mut(tail).role = Role::Tail;
                return Some((Region::WhileLoop, vec![node, tail]));
            }
        }
        None
    }

    /// Natural loop with header `header`.
    ///
    /// Follows edges backwards from every back-edge into the header. The
    /// walk stops at the header and at nodes preceding it in pre-order,
    /// which mark an improper region.
    fn reach_under(&self, header: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; self.capacity()];
        let mut list = Vec::new();
        for &pred in self[header].pred() {
            if self[pred].edge_kind(header) == Some(EdgeKind::Back) && !visited[pred.index()] {
                self.reach_under_node(header, pred, &mut visited, &mut list);
            }
        }
        list
    }

    fn reach_under_node(
        &self,
        header: NodeId,
        node: NodeId,
        visited: &mut [bool],
        list: &mut Vec<NodeId>,
    ) {
        visited[node.index()] = true;
        list.push(node);
        if node == header || self[node].preorder_id() < self[header].preorder_id() {
            return;
        }
        for &pred in self[node].pred() {
            if !visited[pred.index()] {
                self.reach_under_node(header, pred, visited, list);
            }
        }
    }

    /// Collapses `list` into a new abstract node of kind `region`.
    fn reduce(&mut self, list: &[NodeId], region: Region) -> Result<NodeId, Error> {
        let name = self.region_name(region);
        let abs = self.add_abstract(&name, region)?;
        debug!("Reducing {region} region: {} -> '{name}'", self.names(list));

        // edge from the last node back to the first becomes a self-loop
        let mut cyclic = false;
        if region == Region::Block {
            let (first, last) = (list[0], list[list.len() - 1]);
            if self[last].succ().contains(&first) {
                cyclic = true;
                self.disconnect(last, first)?;
            }
        }

        let mut in_edges = Vec::new();
        let mut out_edges = Vec::new();
        for &node in list {
            for &pred in self[node].pred() {
                if !list.contains(&pred) {
                    in_edges.push((pred, node));
                }
            }
            for &succ in self[node].succ() {
                if !list.contains(&succ) {
                    out_edges.push((node, succ));
                }
            }
        }
        for (src, dest) in in_edges {
            self.reconnect_dest(src, dest, abs);
        }
        for (src, dest) in out_edges {
            self.reconnect_source(dest, src, abs);
        }

        for &node in list {
            self.add_child(abs, node);
        }
        if cyclic {
            self.try_connect(abs, abs);
        }
        if self.entry().map_or(false, |entry| list.contains(&entry)) {
            self.set_entry(abs);
        }

        if region == Region::Block && list.iter().any(|&node| self[node].is_block()) {
            self.flatten_block(abs)?;
        }
        Ok(abs)
    }

    /// Splices nested blocks of a two-node block into a single block.
    fn flatten_block(&mut self, abs: NodeId) -> Result<(), Error> {
        let [first, second] = self[abs].children()[..] else {
            return Ok(());
        };
        self.disconnect(first, second)?;

        let mut list = Vec::new();
        for node in [first, second] {
            if self[node].is_block() {
                list.extend_from_slice(self[node].children());
                self.remove_node(node);
            } else {
                list.push(node);
            }
        }
        debug!("Flatten block region '{}' -> {}", self[abs].name(), self.names(&list));
        self.set_children(abs, list);
        Ok(())
    }
}
