use evgasm_ctree::{ControlTree, Error, LoopExit, NodeId, Region, Role};
use evgasm_test::utils::check;

/// Builds a graph of leaf nodes; the source of the first edge is the entry.
fn graph(name: &str, edges: &[(&str, &str)]) -> Result<ControlTree, Error> {
    let mut tree = ControlTree::new(name)?;
    let node = |tree: &mut ControlTree, name: &str| match tree.node_by_name(name) {
        Some(id) => Ok(id),
        None => tree.add_leaf(name, None),
    };
    for &(from, to) in edges {
        let from = node(&mut tree, from)?;
        let to = node(&mut tree, to)?;
        tree.connect(from, to)?;
    }
    let entry = tree.node_by_name(edges[0].0).unwrap();
    tree.set_entry(entry);
    Ok(tree)
}

fn names<'a>(tree: &'a ControlTree, list: &[NodeId]) -> Vec<&'a str> {
    list.iter().map(|&id| tree[id].name()).collect()
}

fn by_name(tree: &ControlTree, name: &str) -> NodeId {
    tree.node_by_name(name)
        .unwrap_or_else(|| panic!("no node '{name}'"))
}

#[test]
fn block() -> Result<(), Error> {
    let mut tree = graph("seq", &[("n1", "n2"), ("n2", "n3")])?;
    tree.structural_analysis()?;

    let entry = tree.entry().unwrap();
    assert_eq!(tree[entry].name(), "__block_1");
    assert_eq!(tree[entry].region(), Some(Region::Block));
    assert_eq!(names(&tree, tree[entry].children()), ["n1", "n2", "n3"]);
    for &child in tree[entry].children() {
        assert_eq!(tree[child].parent(), Some(entry));
    }
    // the inner block is spliced into the outer one
    assert!(tree.node_by_name("__block_0").is_none());
    assert_eq!(tree.len(), 4);
    Ok(())
}

#[test]
fn if_then_else() -> Result<(), Error> {
    let edges = [("A", "T"), ("A", "E"), ("T", "X"), ("E", "X")];
    let mut tree = graph("diamond", &edges)?;
    tree.structural_analysis()?;

    let ite = by_name(&tree, "__if_then_else_0");
    assert_eq!(tree[ite].region(), Some(Region::IfThenElse));
    assert_eq!(names(&tree, tree[ite].children()), ["A", "T", "E"]);
    assert_eq!(names(&tree, tree[ite].succ()), ["X"]);
    assert_eq!(tree[by_name(&tree, "A")].role(), Role::If);
    assert_eq!(tree[by_name(&tree, "T")].role(), Role::Then);
    assert_eq!(tree[by_name(&tree, "E")].role(), Role::Else);

    // the join node stays a sibling of the conditional
    let entry = tree.entry().unwrap();
    assert_eq!(tree[entry].name(), "__block_0");
    assert_eq!(names(&tree, tree[entry].children()), ["__if_then_else_0", "X"]);
    Ok(())
}

#[test]
fn if_then() -> Result<(), Error> {
    let edges = [("C", "T"), ("C", "J"), ("T", "J")];
    let mut tree = graph("cond", &edges)?;
    tree.structural_analysis()?;

    let entry = tree.entry().unwrap();
    assert_eq!(tree[entry].name(), "__if_then_0");
    assert_eq!(names(&tree, tree[entry].children()), ["C", "T", "J"]);
    assert_eq!(tree[by_name(&tree, "C")].role(), Role::If);
    assert_eq!(tree[by_name(&tree, "T")].role(), Role::Then);
    assert!(tree[entry].succ().is_empty());
    Ok(())
}

#[test]
fn self_loop() -> Result<(), Error> {
    let mut tree = graph("spin", &[("L", "L")])?;
    tree.structural_analysis()?;

    let entry = tree.entry().unwrap();
    assert_eq!(tree[entry].name(), "__loop_0");
    assert_eq!(tree[entry].region(), Some(Region::Loop));
    assert_eq!(names(&tree, tree[entry].children()), ["L"]);
    assert!(tree[entry].succ().is_empty());
    let l = by_name(&tree, "L");
    assert_eq!(tree[l].succ(), [l]);
    Ok(())
}

#[test]
fn while_loop() -> Result<(), Error> {
    let edges = [("H", "T"), ("T", "H"), ("H", "Exit")];
    let mut tree = graph("while", &edges)?;
    tree.structural_analysis()?;

    let body = by_name(&tree, "__while_loop_0");
    assert_eq!(names(&tree, tree[body].children()), ["H", "T"]);
    let head = &tree[by_name(&tree, "H")];
    assert_eq!(head.role(), Role::Head(LoopExit::IfFalse));
    assert!(head.exit_if_false());
    assert!(!head.exit_if_true());
    assert_eq!(tree[by_name(&tree, "T")].role(), Role::Tail);

    let entry = tree.entry().unwrap();
    assert_eq!(names(&tree, tree[entry].children()), ["__while_loop_0", "Exit"]);

    // exit through the first successor
    let edges = [("H", "Exit"), ("H", "T"), ("T", "H")];
    let mut tree = graph("while", &edges)?;
    tree.structural_analysis()?;
    let head = &tree[by_name(&tree, "H")];
    assert_eq!(head.role(), Role::Head(LoopExit::IfTrue));
    assert!(head.exit_if_true());
    Ok(())
}

#[test]
fn cyclic_block() -> Result<(), Error> {
    let mut tree = graph("cycle", &[("A", "B"), ("B", "A")])?;
    tree.structural_analysis()?;

    let block = by_name(&tree, "__block_0");
    assert_eq!(names(&tree, tree[block].children()), ["A", "B"]);
    assert_eq!(tree[block].succ(), [block]);

    let entry = tree.entry().unwrap();
    assert_eq!(tree[entry].name(), "__loop_0");
    assert_eq!(tree[entry].children(), [block]);
    assert!(tree[by_name(&tree, "B")].succ().is_empty());
    Ok(())
}

fn sharir() -> Result<ControlTree, Error> {
    let edges = [
        ("A", "B"),
        ("A", "K"),
        ("B", "C"),
        ("B", "I"),
        ("C", "D"),
        ("D", "H"),
        ("D", "E"),
        ("E", "F"),
        ("E", "G"),
        ("F", "D"),
        ("G", "D"),
        ("H", "I"),
        ("I", "J"),
        ("J", "A"),
        ("J", "I"),
        ("K", "L"),
    ];
    graph("Sharir", &edges)
}

#[test]
fn idempotent() -> Result<(), Error> {
    let mut tree = sharir()?;
    tree.structural_analysis()?;
    let len = tree.len();

    let mut again = tree.clone();
    again.structural_analysis()?;
    assert_eq!(again.len(), len);
    again.compare(&tree)?;
    tree.compare(&again)
}

#[test]
fn traverse() -> Result<(), Error> {
    let mut tree = graph("seq", &[("n1", "n2"), ("n2", "n3")])?;
    assert_eq!(
        tree.traverse(None, None),
        Err(Error::NotAnalyzed { tree: "seq".into() })
    );
    tree.structural_analysis()?;

    let mut pre = vec![];
    let mut post = vec![];
    tree.traverse(Some(&mut pre), Some(&mut post))?;
    assert_eq!(names(&tree, &pre), ["__block_1", "n1", "n2", "n3"]);
    assert_eq!(names(&tree, &post), ["n1", "n2", "n3", "__block_1"]);
    Ok(())
}

#[test]
fn edges() -> Result<(), Error> {
    use evgasm_ctree::EdgeKind;

    let edges = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "a"), ("a", "d")];
    let mut tree = graph("edges", &edges)?;
    let postorder = tree.dfs()?;
    assert_eq!(names(&tree, &postorder), ["d", "b", "c", "a"]);

    let id = |name| by_name(&tree, name);
    let (a, b, c, d) = (id("a"), id("b"), id("c"), id("d"));
    assert_eq!(tree[a].edge_kind(b), Some(EdgeKind::Tree));
    assert_eq!(tree[b].edge_kind(d), Some(EdgeKind::Tree));
    assert_eq!(tree[d].edge_kind(a), Some(EdgeKind::Back));
    assert_eq!(tree[c].edge_kind(d), Some(EdgeKind::Cross));
    assert_eq!(tree[a].edge_kind(d), Some(EdgeKind::Forward));
    assert_eq!(tree[a].preorder_id(), Some(0));
    assert_eq!(tree[a].postorder_id(), Some(7));
    Ok(())
}

#[test]
fn dump() -> Result<(), String> {
    let mut tree = graph("dump", &[("n1", "n2")]).map_err(|e| e.to_string())?;
    tree.dfs().map_err(|e| e.to_string())?;
    let expect = "\
Control tree (edges: +forward, -back, *cross, |tree, =>entry)
=>Node 'n1': type=leaf pred={} succ={|n2} structof=- pre=0 post=3
Node 'n2': type=leaf pred={n1} succ={} structof=- pre=1 post=2
";
    check("dump", 1, expect, &tree.to_string())
}

#[test]
fn editing() -> Result<(), Error> {
    assert_eq!(ControlTree::new("").err(), Some(Error::AnonymousTree));

    let mut tree = ControlTree::new("edit")?;
    assert_eq!(
        tree.structural_analysis(),
        Err(Error::NoEntryNode { tree: "edit".into() })
    );

    let a = tree.add_leaf("a", None)?;
    let b = tree.add_abstract("b", Region::Loop)?;
    assert_eq!(tree.add_leaf("a", None), Err(Error::DuplicateNode("a".into())));

    tree.connect(a, b)?;
    assert!(!tree.try_connect(a, b));
    assert_eq!(
        tree.connect(a, b),
        Err(Error::RedundantConnection {
            from: "a".into(),
            to: "b".into()
        })
    );
    assert_eq!(tree[b].pred(), [a]);

    tree.disconnect(a, b)?;
    assert!(!tree.try_disconnect(a, b));
    assert_eq!(
        tree.disconnect(a, b),
        Err(Error::MissingConnection {
            from: "a".into(),
            to: "b".into()
        })
    );
    assert!(tree[a].succ().is_empty());

    tree.rename("edited")?;
    assert_eq!(tree.name(), "edited");
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.entry().is_none());
    Ok(())
}
