use evgasm_ctree::{Config, ControlTree, Error, Region};

const DIAMOND: &str = "\
; if-then-else with a join node
[ CTree.diamond ]
Entry = A

[ CTree.diamond.Node.A ]
Kind = Leaf
Succ = T, E

[ ctree.DIAMOND.node.T ]
succ = X

[ CTree.diamond.Node.E ]
Succ = X

# no Kind defaults to a leaf
[ CTree.diamond.Node.X ]
Succ =

[ CTree.other.Node.Z ]
Kind = Abstract
";

#[test]
fn parse() -> Result<(), Error> {
    let config = Config::parse("diamond.ini", DIAMOND)?;
    assert_eq!(config.file(), "diamond.ini");
    assert_eq!(config.sections().count(), 6);
    assert!(config.section_exists("ctree.diamond"));
    assert_eq!(config.read("CTREE.DIAMOND.NODE.A", "succ"), Some("T, E"));
    assert_eq!(config.read("CTree.diamond.Node.X", "Succ"), Some(""));
    assert_eq!(config.read("CTree.diamond.Node.X", "Kind"), None);
    assert_eq!(config.read("CTree.missing", "Entry"), None);
    Ok(())
}

#[test]
fn parse_errors() {
    let err = |text| match Config::parse("bad.ini", text) {
        Err(Error::Config { msg, .. }) => msg,
        other => panic!("{other:?}"),
    };
    assert_eq!(err("Key = 1\n"), "line 1: variable outside of a section");
    assert_eq!(err("[ A ]\n\nnot a pair\n"), "line 3: invalid syntax");
    assert_eq!(err("[ A\n"), "line 1: unterminated section");
    assert_eq!(err("[ A ]\nx = 1\nX = 2\n"), "line 3: duplicate variable 'X'");
    assert_eq!(err("[ A ]\n[ a ]\n"), "line 2: duplicate section 'a'");
}

#[test]
fn write() -> Result<(), Error> {
    let mut config = Config::new("out.ini");
    config.write("First", "Key", "1");
    config.write("Second", "Other", "a, b");
    config.write("first", "KEY", "2");
    assert_eq!(config.to_string(), "[ First ]\nKey = 2\n\n[ Second ]\nOther = a, b\n");

    let again = Config::parse("out.ini", &config.to_string())?;
    assert_eq!(again.read("first", "key"), Some("2"));
    Ok(())
}

#[test]
fn read_tree() -> Result<(), Error> {
    let config = Config::parse("diamond.ini", DIAMOND)?;
    let tree = ControlTree::read_from_config(&config, "diamond")?;
    assert_eq!(tree.name(), "diamond");
    assert_eq!(tree.len(), 4);

    let a = tree.node_by_name("A").unwrap();
    assert_eq!(tree.entry(), Some(a));
    let succ: Vec<_> = tree[a].succ().iter().map(|&id| tree[id].name()).collect();
    assert_eq!(succ, ["T", "E"]);
    assert!(tree.nodes().all(|(_, node)| node.is_leaf()));
    assert!(tree.node_by_name("Z").is_none());
    Ok(())
}

fn read_error(text: &str, name: &str) -> String {
    let config = Config::parse("bad.ini", text).unwrap();
    match ControlTree::read_from_config(&config, name) {
        Err(Error::Config { msg, .. }) => msg,
        Err(err) => err.to_string(),
        Ok(_) => panic!("tree '{name}' was read"),
    }
}

#[test]
fn read_tree_errors() {
    assert_eq!(read_error(DIAMOND, "missing"), "tree 'missing' not found");
    assert_eq!(
        read_error("[ CTree.t ]\nEntry = a\n[ CTree.t.Node.a ]\nKind = Abstract\n", "t"),
        "CTree.t.Node.a: invalid or missing 'Region'"
    );
    assert_eq!(
        read_error("[ CTree.t ]\nEntry = a\n[ CTree.t.Node.a ]\nKind = Root\n", "t"),
        "CTree.t.Node.a: invalid value for 'Kind'"
    );
    assert_eq!(
        read_error("[ CTree.t ]\nEntry = a\n[ CTree.t.Node.a ]\nSucc = b\n", "t"),
        "CTree.t.Node.a: invalid node name 'b'"
    );
    assert_eq!(
        read_error("[ CTree.t ]\nEntry = a\n[ CTree.t.Node.a ]\nSucc = a, a\n", "t"),
        "t.a: duplicate successor"
    );
    assert_eq!(
        read_error("[ CTree.t ]\n[ CTree.t.Node.a ]\n", "t"),
        "Control tree 't' has no entry node"
    );
}

#[test]
fn round_trip() -> Result<(), Error> {
    let config = Config::parse("diamond.ini", DIAMOND)?;
    let mut tree = ControlTree::read_from_config(&config, "diamond")?;
    tree.structural_analysis()?;

    let mut out = Config::new("reduced.ini");
    tree.write_to_config(&mut out)?;
    assert_eq!(out.read("CTree.diamond", "Entry"), Some("__block_0"));
    assert_eq!(out.read("CTree.diamond.Node.A", "Kind"), Some("Leaf"));
    assert_eq!(out.read("CTree.diamond.Node.__block_0", "Kind"), Some("Abstract"));
    assert_eq!(
        out.read("CTree.diamond.Node.__block_0", "Child"),
        Some("__if_then_else_0, X")
    );
    assert_eq!(
        out.read("CTree.diamond.Node.__if_then_else_0", "Region"),
        Some("if_then_else")
    );

    let text = out.to_string();
    let loaded = ControlTree::read_from_config(&Config::parse("reduced.ini", &text)?, "diamond")?;
    let ite = loaded.node_by_name("__if_then_else_0").unwrap();
    assert_eq!(loaded[ite].region(), Some(Region::IfThenElse));
    assert_eq!(loaded[ite].parent(), loaded.entry());
    loaded.compare(&tree)?;
    tree.compare(&loaded)?;

    // a tree can be stored only once per document
    match tree.write_to_config(&mut out) {
        Err(Error::Config { msg, .. }) => assert_eq!(msg, "duplicate node name ('A')"),
        other => panic!("{other:?}"),
    }
    Ok(())
}

#[test]
fn compare() -> Result<(), Error> {
    let config = Config::parse("diamond.ini", DIAMOND)?;
    let tree = ControlTree::read_from_config(&config, "diamond")?;

    let reason = |other: &ControlTree| match tree.compare(other) {
        Err(Error::StructuralMismatch { tree, reason }) => {
            assert_eq!(tree, "diamond");
            reason
        }
        other => panic!("{other:?}"),
    };

    let mut other = tree.clone();
    other.set_entry(other.node_by_name("X").unwrap());
    assert_eq!(reason(&other), "'diamond' vs 'diamond': entry nodes differ");

    let mut other = tree.clone();
    other.rename("copy")?;
    other.add_leaf("Y", None)?;
    assert_eq!(reason(&other), "node 'copy.Y' not present in tree 'diamond'");

    let mut other = tree.clone();
    let (t, x) = (other.node_by_name("T").unwrap(), other.node_by_name("X").unwrap());
    other.disconnect(t, x)?;
    assert_eq!(
        reason(&other),
        "node 'T' differs from 'diamond.T' in successors"
    );

    let mut other = ControlTree::new("diamond")?;
    for name in ["A", "T", "E"] {
        other.add_leaf(name, None)?;
    }
    other.add_abstract("X", Region::Block)?;
    other.set_entry(other.node_by_name("A").unwrap());
    let err = tree.compare(&other).unwrap_err();
    assert!(err.to_string().contains("differs"), "{err}");
    Ok(())
}
