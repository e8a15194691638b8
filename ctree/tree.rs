use std::{collections::HashMap, fmt, ops::Index};

use crate::{
    config::Config,
    error::Error,
    node::{BasicBlock, EdgeKind, Node, NodeId, NodeKind, Region},
};

#[derive(Copy, Clone, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Control flow graph whose nodes are reduced into a tree of regions.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Removed nodes
/// leave an empty slot, so handles of the remaining nodes stay valid.
#[derive(Clone, Debug)]
pub struct ControlTree {
    name: String,
    nodes: Vec<Option<Node>>,
    order: Vec<NodeId>,
    names: HashMap<String, NodeId>,
    entry: Option<NodeId>,
    counters: [usize; Region::ALL.len()],
    pub(crate) analyzed: bool,
}

impl ControlTree {
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::AnonymousTree);
        }
        Ok(Self {
            name: name.to_owned(),
            nodes: Vec::new(),
            order: Vec::new(),
            names: HashMap::new(),
            entry: None,
            counters: [0; Region::ALL.len()],
            analyzed: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::AnonymousTree);
        }
        self.name = name.to_owned();
        Ok(())
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Number of arena slots, removed nodes included.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("node was removed")
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order.iter().map(|&id| (id, &self[id]))
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn entry(&self) -> Option<NodeId> {
        self.entry
    }

    pub fn set_entry(&mut self, id: NodeId) {
        self.entry = Some(id);
    }

    pub(crate) fn require_entry(&self) -> Result<NodeId, Error> {
        self.entry.ok_or_else(|| Error::NoEntryNode {
            tree: self.name.clone(),
        })
    }

    fn add_node(&mut self, node: Node) -> Result<NodeId, Error> {
        if self.names.contains_key(&node.name) {
            return Err(Error::DuplicateNode(node.name));
        }
        let id = NodeId(self.nodes.len());
        self.names.insert(node.name.clone(), id);
        self.nodes.push(Some(node));
        self.order.push(id);
        Ok(id)
    }

    pub fn add_leaf(&mut self, name: &str, block: Option<BasicBlock>) -> Result<NodeId, Error> {
        self.add_node(Node::new(name, NodeKind::Leaf(block)))
    }

    pub fn add_abstract(&mut self, name: &str, region: Region) -> Result<NodeId, Error> {
        let kind = NodeKind::Abstract {
            region,
            children: Vec::new(),
        };
        self.add_node(Node::new(name, kind))
    }

    /// Fresh `__<region>_<counter>` name for a reduced region.
    pub(crate) fn region_name(&mut self, region: Region) -> String {
        loop {
            let counter = &mut self.counters[region.index()];
            let name = format!("__{region}_{counter}");
            *counter += 1;
            if !self.names.contains_key(&name) {
                return name;
            }
        }
    }

    /// Appends `child` to the children of the abstract node `parent`.
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let NodeKind::Abstract { children, .. } = &mut self.node_mut(parent).kind {
            children.push(child);
        }
        self.node_mut(child).parent = Some(parent);
    }

    pub(crate) fn set_children(&mut self, parent: NodeId, list: Vec<NodeId>) {
        for &child in &list {
            self.node_mut(child).parent = Some(parent);
        }
        if let NodeKind::Abstract { children, .. } = &mut self.node_mut(parent).kind {
            *children = list;
        }
    }

    /// Drops a node without edges from the tree.
    pub(crate) fn remove_node(&mut self, id: NodeId) {
        if let Some(node) = self.nodes[id.0].take() {
            debug_assert!(node.pred.is_empty() && node.succ.is_empty());
            self.names.remove(&node.name);
            self.order.retain(|&i| i != id);
            if self.entry == Some(id) {
                self.entry = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.names.clear();
        self.entry = None;
        self.counters = [0; Region::ALL.len()];
        self.analyzed = false;
    }

    fn edge_error(&self, from: NodeId, to: NodeId, redundant: bool) -> Error {
        let from = self[from].name.clone();
        let to = self[to].name.clone();
        if redundant {
            Error::RedundantConnection { from, to }
        } else {
            Error::MissingConnection { from, to }
        }
    }

    /// Adds an edge, failing if it exists already.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), Error> {
        if self.try_connect(from, to) {
            Ok(())
        } else {
            Err(self.edge_error(from, to, true))
        }
    }

    /// Adds an edge unless it exists. Returns `true` if the edge was added.
    pub fn try_connect(&mut self, from: NodeId, to: NodeId) -> bool {
        if self[from].succ.contains(&to) {
            return false;
        }
        self.node_mut(from).succ.push(to);
        self.node_mut(to).pred.push(from);
        true
    }

    /// Removes an edge, failing if it does not exist.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) -> Result<(), Error> {
        if self.try_disconnect(from, to) {
            Ok(())
        } else {
            Err(self.edge_error(from, to, false))
        }
    }

    /// Removes an edge if it exists. Returns `true` if the edge was removed.
    pub fn try_disconnect(&mut self, from: NodeId, to: NodeId) -> bool {
        if !self[from].succ.contains(&to) {
            return false;
        }
        self.node_mut(from).succ.retain(|&i| i != to);
        self.node_mut(to).pred.retain(|&i| i != from);
        true
    }

    /// Moves the edge `src -> old` to `src -> new`, keeping its position
    /// in the successors of `src`.
    pub(crate) fn reconnect_dest(&mut self, src: NodeId, old: NodeId, new: NodeId) {
        let node = self.node_mut(src);
        if node.succ.contains(&new) {
            node.succ.retain(|&i| i != old);
        } else {
            for i in node.succ.iter_mut().filter(|i| **i == old) {
                *i = new;
            }
        }
        self.node_mut(old).pred.retain(|&i| i != src);
        if !self[new].pred.contains(&src) {
            self.node_mut(new).pred.push(src);
        }
    }

    /// Moves the edge `old -> dest` to `new -> dest`, keeping its position
    /// in the predecessors of `dest`.
    pub(crate) fn reconnect_source(&mut self, dest: NodeId, old: NodeId, new: NodeId) {
        let node = self.node_mut(dest);
        if node.pred.contains(&new) {
            node.pred.retain(|&i| i != old);
        } else {
            for i in node.pred.iter_mut().filter(|i| **i == old) {
                *i = new;
            }
        }
        self.node_mut(old).succ.retain(|&i| i != dest);
        if !self[new].succ.contains(&dest) {
            self.node_mut(new).succ.push(dest);
        }
    }

    /// Depth-first search from the entry node.
    ///
    /// Assigns pre-order and post-order ids, classifies the edges of every
    /// reached node and returns the reached nodes in post-order.
    pub fn dfs(&mut self) -> Result<Vec<NodeId>, Error> {
        let entry = self.require_entry()?;
        for node in self.nodes.iter_mut().flatten() {
            node.preorder = None;
            node.postorder = None;
            node.edges.clear();
        }
        let mut color = vec![Color::White; self.nodes.len()];
        let mut postorder = Vec::with_capacity(self.order.len());
        self.dfs_node(entry, &mut color, &mut 0, &mut postorder);
        Ok(postorder)
    }

    fn dfs_node(
        &mut self,
        id: NodeId,
        color: &mut [Color],
        time: &mut usize,
        postorder: &mut Vec<NodeId>,
    ) {
        color[id.0] = Color::Gray;
        let preorder = *time;
        self.node_mut(id).preorder = Some(preorder);
        *time += 1;

        let succ = self[id].succ.clone();
        for to in succ {
            let kind = match color[to.0] {
                Color::Black if Some(preorder) < self[to].preorder => EdgeKind::Forward,
                Color::Black => EdgeKind::Cross,
                Color::Gray => EdgeKind::Back,
                Color::White => EdgeKind::Tree,
            };
            self.node_mut(id).edges.push((to, kind));
            if kind == EdgeKind::Tree {
                self.dfs_node(to, color, time, postorder);
            }
        }

        color[id.0] = Color::Black;
        self.node_mut(id).postorder = Some(*time);
        *time += 1;
        postorder.push(id);
    }

    /// Walks the reduced tree from the entry node through child lists.
    ///
    /// Visited nodes are appended to `pre` in pre-order and to `post` in
    /// post-order.
    pub fn traverse(
        &self,
        mut pre: Option<&mut Vec<NodeId>>,
        mut post: Option<&mut Vec<NodeId>>,
    ) -> Result<(), Error> {
        if !self.analyzed {
            return Err(Error::NotAnalyzed {
                tree: self.name.clone(),
            });
        }
        let entry = self.require_entry()?;
        self.traverse_node(entry, &mut pre, &mut post);
        if let Some(list) = &pre {
            debug!("Pre-order traversal of tree '{}': {}", self.name, self.names(list));
        }
        if let Some(list) = &post {
            debug!("Post-order traversal of tree '{}': {}", self.name, self.names(list));
        }
        Ok(())
    }

    fn traverse_node(
        &self,
        id: NodeId,
        pre: &mut Option<&mut Vec<NodeId>>,
        post: &mut Option<&mut Vec<NodeId>>,
    ) {
        if let Some(list) = pre {
            list.push(id);
        }
        for &child in self[id].children() {
            self.traverse_node(child, pre, post);
        }
        if let Some(list) = post {
            list.push(id);
        }
    }

    /// Node names formatted as `[a, b, c]`.
    pub fn names(&self, list: &[NodeId]) -> String {
        let mut s = String::from("[");
        for (i, &id) in list.iter().enumerate() {
            if i != 0 {
                s.push_str(", ");
            }
            s.push_str(&self[id].name);
        }
        s.push(']');
        s
    }

    fn name_list(&self, list: &[NodeId]) -> String {
        list.iter()
            .map(|&id| self[id].name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn fmt_names(&self, fmt: &mut fmt::Formatter, list: &[NodeId]) -> fmt::Result {
        fmt.write_str("{")?;
        for (i, &id) in list.iter().enumerate() {
            if i != 0 {
                fmt.write_str(",")?;
            }
            fmt.write_str(&self[id].name)?;
        }
        fmt.write_str("}")
    }

    fn fmt_node(&self, fmt: &mut fmt::Formatter, node: &Node) -> fmt::Result {
        write!(fmt, "Node '{}':", node.name)?;
        match node.region() {
            Some(region) => write!(fmt, " type=abstract region={region}")?,
            None => fmt.write_str(" type=leaf")?,
        }

        fmt.write_str(" pred=")?;
        self.fmt_names(fmt, &node.pred)?;

        fmt.write_str(" succ={")?;
        for (i, &id) in node.succ.iter().enumerate() {
            if i != 0 {
                fmt.write_str(",")?;
            }
            if let Some(kind) = node.edge_kind(id) {
                write!(fmt, "{}", kind.symbol())?;
            }
            fmt.write_str(&self[id].name)?;
        }
        fmt.write_str("}")?;

        match node.parent {
            Some(parent) => write!(fmt, " structof='{}'", self[parent].name)?,
            None => fmt.write_str(" structof=-")?,
        }
        if !node.is_leaf() {
            fmt.write_str(" children=")?;
            self.fmt_names(fmt, node.children())?;
        }
        match node.preorder {
            Some(id) => write!(fmt, " pre={id}")?,
            None => fmt.write_str(" pre=-")?,
        }
        match node.postorder {
            Some(id) => write!(fmt, " post={id}"),
            None => fmt.write_str(" post=-"),
        }
    }

    /// Checks that `other` has the same shape, reporting the first
    /// difference.
    pub fn compare(&self, other: &ControlTree) -> Result<(), Error> {
        let entry = self.require_entry()?;
        let other_entry = other.require_entry()?;
        if self[entry].name != other[other_entry].name {
            return Err(Error::mismatch(
                &self.name,
                format!("'{}' vs '{}': entry nodes differ", self.name, other.name),
            ));
        }

        let missing = |a: &ControlTree, b: &ControlTree| {
            a.nodes()
                .find(|(_, node)| b.node_by_name(&node.name).is_none())
                .map(|(_, node)| {
                    let reason = format!(
                        "node '{}.{}' not present in tree '{}'",
                        a.name, node.name, b.name
                    );
                    Error::mismatch(&self.name, reason)
                })
        };
        if let Some(err) = missing(self, other).or_else(|| missing(other, self)) {
            return Err(err);
        }

        for (_, node) in self.nodes() {
            let Some(other_id) = other.node_by_name(&node.name) else {
                continue;
            };
            self.compare_node(node, other, &other[other_id])?;
        }
        Ok(())
    }

    fn compare_node(&self, node: &Node, other: &ControlTree, node2: &Node) -> Result<(), Error> {
        let diff = |what: &str| -> Result<(), Error> {
            let reason = format!(
                "node '{}' differs from '{}.{}' in {what}",
                node.name, other.name, node2.name
            );
            Err(Error::mismatch(&self.name, reason))
        };
        let same_names = |a: &[NodeId], b: &[NodeId]| {
            let mut a: Vec<_> = a.iter().map(|&id| self[id].name.as_str()).collect();
            let mut b: Vec<_> = b.iter().map(|&id| other[id].name.as_str()).collect();
            a.sort_unstable();
            b.sort_unstable();
            a == b
        };

        if node.is_leaf() != node2.is_leaf() {
            return diff("kind");
        }
        if !same_names(&node.succ, &node2.succ) {
            return diff("successors");
        }
        if node.region() != node2.region() {
            return diff("region");
        }
        if !same_names(node.children(), node2.children()) {
            return diff("children");
        }
        Ok(())
    }

    /// Stores the tree in `CTree.<name>` sections of `config`.
    pub fn write_to_config(&self, config: &mut Config) -> Result<(), Error> {
        let entry = self.require_entry()?;
        let section = format!("CTree.{}", self.name);
        config.write(&section, "Entry", &self[entry].name);

        for (_, node) in self.nodes() {
            let section = format!("CTree.{}.Node.{}", self.name, node.name);
            if config.section_exists(&section) {
                let msg = format!("duplicate node name ('{}')", node.name);
                return Err(Error::config(config.file(), msg));
            }
            let kind = if node.is_leaf() { "Leaf" } else { "Abstract" };
            config.write(&section, "Kind", kind);
            config.write(&section, "Succ", &self.name_list(&node.succ));
            if let Some(region) = node.region() {
                config.write(&section, "Child", &self.name_list(node.children()));
                config.write(&section, "Region", region.as_str());
            }
        }
        Ok(())
    }

    /// Loads tree `name` from the `CTree.<name>` sections of `config`.
    pub fn read_from_config(config: &Config, name: &str) -> Result<Self, Error> {
        let mut tree = Self::new(name)?;
        let file = config.file();
        let tree_section = format!("CTree.{name}");
        if !config.section_exists(&tree_section) {
            return Err(Error::config(file, format!("tree '{name}' not found")));
        }

        let mut sections = Vec::new();
        for section in config.sections() {
            let tokens: Vec<_> = section.split('.').collect();
            let [ctree, tree_name, node, node_name] = tokens.as_slice() else {
                continue;
            };
            if !ctree.eq_ignore_ascii_case("CTree")
                || !tree_name.eq_ignore_ascii_case(name)
                || !node.eq_ignore_ascii_case("Node")
            {
                continue;
            }

            let kind = config.read(section, "Kind").unwrap_or("Leaf");
            let id = if kind.eq_ignore_ascii_case("Leaf") {
                tree.add_leaf(node_name, None)
            } else if kind.eq_ignore_ascii_case("Abstract") {
                let region = config
                    .read(section, "Region")
                    .and_then(Region::from_name)
                    .ok_or_else(|| {
                        Error::config(file, format!("{section}: invalid or missing 'Region'"))
                    })?;
                tree.add_abstract(node_name, region)
            } else {
                return Err(Error::config(file, format!("{section}: invalid value for 'Kind'")));
            };
            let id = id.map_err(|_| {
                Error::config(file, format!("{section}: duplicate node name ('{node_name}')"))
            })?;
            sections.push((id, section));
        }

        for (id, section) in sections {
            for succ in tree.read_node_list(config, section, "Succ")? {
                if !tree.try_connect(id, succ) {
                    let msg = format!("{name}.{}: duplicate successor", tree[id].name);
                    return Err(Error::config(file, msg));
                }
            }
            if !tree[id].is_leaf() {
                for child in tree.read_node_list(config, section, "Child")? {
                    if tree[id].children().contains(&child) {
                        let msg = format!("{name}.{}: duplicate child", tree[id].name);
                        return Err(Error::config(file, msg));
                    }
                    tree.add_child(id, child);
                }
            }
        }

        let entry = config
            .read(&tree_section, "Entry")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::NoEntryNode {
                tree: name.to_owned(),
            })?;
        let entry = tree
            .node_by_name(entry)
            .ok_or_else(|| Error::config(file, format!("{tree_section}: invalid node name '{entry}'")))?;
        tree.set_entry(entry);
        Ok(tree)
    }

    fn read_node_list(&self, config: &Config, section: &str, key: &str) -> Result<Vec<NodeId>, Error> {
        config
            .read(section, key)
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|name| {
                self.node_by_name(name).ok_or_else(|| {
                    Error::config(config.file(), format!("{section}: invalid node name '{name}'"))
                })
            })
            .collect()
    }
}

impl Index<NodeId> for ControlTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id).expect("node was removed")
    }
}

impl fmt::Display for ControlTree {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "Control tree (edges: +forward, -back, *cross, |tree, =>entry)")?;
        for (id, node) in self.nodes() {
            if Some(id) == self.entry {
                fmt.write_str("=>")?;
            }
            self.fmt_node(fmt, node)?;
            writeln!(fmt)?;
        }
        Ok(())
    }
}
