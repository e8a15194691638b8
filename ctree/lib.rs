//! Control trees and structural analysis.
//!
//! A [`ControlTree`] starts as a control flow graph of leaf nodes. The
//! structural analysis repeatedly collapses blocks, conditionals and loops
//! into abstract nodes until no known region is left, producing the
//! hierarchy a structured code generator walks.

#[macro_use]
extern crate log;

mod analysis;
pub mod command;
pub mod config;
pub mod error;
pub mod node;
pub mod tree;

pub use self::command::{run_file, Command, Session};
pub use self::config::Config;
pub use self::error::Error;
pub use self::node::{BasicBlock, EdgeKind, LoopExit, Node, NodeId, NodeKind, Region, Role};
pub use self::tree::ControlTree;
