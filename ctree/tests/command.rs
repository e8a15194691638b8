use std::{
    fs,
    path::{Path, PathBuf},
};

use evgasm_ctree::{run_file, Command, Config, ControlTree, Error, Session};

fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("evgasm-ctree-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn diamond(dir: &Path) -> Result<(), Error> {
    let mut tree = ControlTree::new("Diamond")?;
    let a = tree.add_leaf("A", None)?;
    let t = tree.add_leaf("T", None)?;
    let e = tree.add_leaf("E", None)?;
    let x = tree.add_leaf("X", None)?;
    tree.connect(a, t)?;
    tree.connect(a, e)?;
    tree.connect(t, x)?;
    tree.connect(e, x)?;
    tree.set_entry(a);

    let path = dir.join("input.ini");
    let mut config = Config::new(&path.display().to_string());
    tree.write_to_config(&mut config)?;
    config.save(path)
}

fn script(dir: &Path, commands: &[&str]) -> PathBuf {
    let mut text = String::from("[ Commands ]\n");
    for (i, command) in commands.iter().enumerate() {
        text.push_str(&format!("Command[{i}] = {command}\n"));
    }
    let path = dir.join("script.ini");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn parse() {
    assert_eq!(
        Command::parse(0, "loadctree in.ini main"),
        Ok(Command::Load {
            file: "in.ini".into(),
            name: "main".into()
        })
    );
    assert_eq!(
        Command::parse(1, "StructuralAnalysis  main"),
        Ok(Command::Analyze { name: "main".into() })
    );
    assert_eq!(
        Command::parse(2, "SaveCTree out.ini"),
        Err(Error::Command {
            index: 2,
            msg: "SaveCTree: invalid number of arguments".into()
        })
    );
    assert_eq!(
        Command::parse(3, "Frobnicate a b"),
        Err(Error::Command {
            index: 3,
            msg: "invalid command: Frobnicate".into()
        })
    );
    assert_eq!(
        Command::parse(4, "  "),
        Err(Error::Command {
            index: 4,
            msg: "empty command".into()
        })
    );
}

#[test]
fn run_script() -> Result<(), Error> {
    let dir = workdir("run");
    diamond(&dir)?;
    let path = script(
        &dir,
        &[
            "LoadCTree input.ini Diamond",
            "StructuralAnalysis Diamond",
            "SaveCTree output.ini Diamond",
            "RenameCTree Diamond Reduced",
            "LoadCTree output.ini Diamond",
            "CompareCTree Diamond Reduced",
        ],
    );

    let session = run_file(&path)?;
    assert_eq!(session.trees().len(), 2);
    let reduced = session.tree("Reduced").unwrap();
    assert!(reduced.is_analyzed());
    let entry = reduced.entry().unwrap();
    assert_eq!(reduced[entry].name(), "__block_0");

    let saved = Config::load(dir.join("output.ini"))?;
    assert_eq!(saved.read("CTree.Diamond", "Entry"), Some("__block_0"));
    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn run_mismatch() -> Result<(), Error> {
    let dir = workdir("mismatch");
    diamond(&dir)?;
    let path = script(
        &dir,
        &[
            "LoadCTree input.ini Diamond",
            "RenameCTree Diamond Original",
            "LoadCTree input.ini Diamond",
            "StructuralAnalysis Diamond",
            "CompareCTree Diamond Original",
        ],
    );

    let err = run_file(&path).err();
    assert_eq!(
        err,
        Some(Error::StructuralMismatch {
            tree: "Diamond".into(),
            reason: "'Diamond' vs 'Original': entry nodes differ".into()
        })
    );
    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn run_errors() {
    let mut session = Session::new();
    assert_eq!(
        session.run(0, "StructuralAnalysis nope"),
        Err(Error::Command {
            index: 0,
            msg: "nope: invalid control tree".into()
        })
    );
    assert!(matches!(
        session.run(1, "LoadCTree /nonexistent/evgasm.ini t"),
        Err(Error::Io { .. })
    ));

    let script = Config::parse("empty.ini", "[ Commands ]\n").unwrap();
    assert_eq!(session.run_script(&script), Ok(0));
}
