use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Control tree created with an empty name.
    AnonymousTree,
    /// Operation needs an entry node.
    NoEntryNode { tree: String },
    /// Nodes are already connected.
    RedundantConnection { from: String, to: String },
    /// Nodes are not connected.
    MissingConnection { from: String, to: String },
    /// Two trees differ.
    StructuralMismatch { tree: String, reason: String },
    /// Node name is already used in the tree.
    DuplicateNode(String),
    /// No node with this name.
    InvalidNode(String),
    /// Traversal requested before the structural analysis.
    NotAnalyzed { tree: String },
    /// Malformed configuration file.
    Config { file: String, msg: String },
    /// Failed to read or write a file.
    Io { file: String, msg: String },
    /// Failed command of a command script.
    Command { index: usize, msg: String },
}

impl Error {
    pub(crate) fn config(file: &str, msg: impl Into<String>) -> Self {
        Self::Config {
            file: file.to_owned(),
            msg: msg.into(),
        }
    }

    pub(crate) fn mismatch(tree: &str, reason: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            tree: tree.to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AnonymousTree => fmt.write_str("Anonymous control tree"),
            Self::NoEntryNode { tree } => write!(fmt, "Control tree '{tree}' has no entry node"),
            Self::RedundantConnection { from, to } => {
                write!(fmt, "Nodes '{from}' and '{to}' are already connected")
            }
            Self::MissingConnection { from, to } => {
                write!(fmt, "Nodes '{from}' and '{to}' are not connected")
            }
            Self::StructuralMismatch { tree, reason } => write!(fmt, "{tree}: {reason}"),
            Self::DuplicateNode(name) => write!(fmt, "Duplicate node name '{name}'"),
            Self::InvalidNode(name) => write!(fmt, "Invalid node name '{name}'"),
            Self::NotAnalyzed { tree } => {
                write!(fmt, "{tree}: tree traversal requires structural analysis")
            }
            Self::Config { file, msg } => write!(fmt, "{file}: {msg}"),
            Self::Io { file, msg } => write!(fmt, "{file}: {msg}"),
            Self::Command { index, msg } => write!(fmt, "Command[{index}]: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
