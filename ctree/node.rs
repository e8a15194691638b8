use std::fmt;

/// Handle of a node in its [`ControlTree`](crate::ControlTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque handle of the basic block a leaf node stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasicBlock(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Block,
    IfThen,
    IfThenElse,
    WhileLoop,
    Loop,
    ProperInterval,
    ImproperInterval,
    ProperOuterInterval,
    ImproperOuterInterval,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Self::Block,
        Self::IfThen,
        Self::IfThenElse,
        Self::WhileLoop,
        Self::Loop,
        Self::ProperInterval,
        Self::ImproperInterval,
        Self::ProperOuterInterval,
        Self::ImproperOuterInterval,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::IfThen => "if_then",
            Self::IfThenElse => "if_then_else",
            Self::WhileLoop => "while_loop",
            Self::Loop => "loop",
            Self::ProperInterval => "proper_interval",
            Self::ImproperInterval => "improper_interval",
            Self::ProperOuterInterval => "proper_outer_interval",
            Self::ImproperOuterInterval => "improper_outer_interval",
        }
    }

    /// Case-insensitive lookup of a region name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(name))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// Which successor of a loop head leaves the loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The second successor, taken when the condition holds.
    IfTrue,
    /// The first successor, taken when the condition fails.
    IfFalse,
}

/// Position of a node inside the region that absorbed it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    None,
    If,
    Then,
    Else,
    Head(LoopExit),
    Tail,
}

/// Classification of an edge by the last depth-first search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Tree,
    Forward,
    Back,
    Cross,
}

impl EdgeKind {
    pub fn symbol(self) -> char {
        match self {
            Self::Tree => '|',
            Self::Forward => '+',
            Self::Back => '-',
            Self::Cross => '*',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(Option<BasicBlock>),
    Abstract { region: Region, children: Vec<NodeId> },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) role: Role,
    pub(crate) pred: Vec<NodeId>,
    pub(crate) succ: Vec<NodeId>,
    pub(crate) edges: Vec<(NodeId, EdgeKind)>,
    pub(crate) preorder: Option<usize>,
    pub(crate) postorder: Option<usize>,
}

impl Node {
    pub(crate) fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            parent: None,
            role: Role::None,
            pred: Vec::new(),
            succ: Vec::new(),
            edges: Vec::new(),
            preorder: None,
            postorder: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn basic_block(&self) -> Option<BasicBlock> {
        match self.kind {
            NodeKind::Leaf(block) => block,
            NodeKind::Abstract { .. } => None,
        }
    }

    pub fn region(&self) -> Option<Region> {
        match self.kind {
            NodeKind::Abstract { region, .. } => Some(region),
            NodeKind::Leaf(_) => None,
        }
    }

    pub(crate) fn is_block(&self) -> bool {
        self.region() == Some(Region::Block)
    }

    /// Child nodes of an abstract node, in region order.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Abstract { children, .. } => children,
            NodeKind::Leaf(_) => &[],
        }
    }

    /// Abstract node this node was reduced into.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn exit_if_true(&self) -> bool {
        self.role == Role::Head(LoopExit::IfTrue)
    }

    pub fn exit_if_false(&self) -> bool {
        self.role == Role::Head(LoopExit::IfFalse)
    }

    pub fn pred(&self) -> &[NodeId] {
        &self.pred
    }

    pub fn succ(&self) -> &[NodeId] {
        &self.succ
    }

    pub fn preorder_id(&self) -> Option<usize> {
        self.preorder
    }

    pub fn postorder_id(&self) -> Option<usize> {
        self.postorder
    }

    /// Kind of the edge to `to`, if the last search reached this node.
    pub fn edge_kind(&self, to: NodeId) -> Option<EdgeKind> {
        self.edges
            .iter()
            .find(|(node, _)| *node == to)
            .map(|(_, kind)| *kind)
    }
}
