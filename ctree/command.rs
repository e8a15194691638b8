//! Command scripts driving control trees.
//!
//! A script is a [`Config`] whose `[ Commands ]` section lists
//! `Command[0]`, `Command[1]`, ... up to the first missing index.

use std::path::{Path, PathBuf};

use crate::{config::Config, error::Error, tree::ControlTree};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `LoadCTree <file> <name>`
    Load { file: String, name: String },
    /// `SaveCTree <file> <name>`
    Save { file: String, name: String },
    /// `RenameCTree <old> <new>`
    Rename { from: String, to: String },
    /// `CompareCTree <a> <b>`
    Compare { a: String, b: String },
    /// `StructuralAnalysis <name>`
    Analyze { name: String },
}

impl Command {
    pub fn parse(index: usize, line: &str) -> Result<Self, Error> {
        let err = |msg: String| Error::Command { index, msg };
        let tokens: Vec<_> = line.split_whitespace().collect();
        let Some((command, args)) = tokens.split_first() else {
            return Err(err("empty command".into()));
        };

        let expect = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(err(format!("{command}: invalid number of arguments")))
            }
        };
        let arg = |i: usize| args[i].to_owned();

        let name = command.to_ascii_lowercase();
        let command = match name.as_str() {
            "loadctree" => {
                expect(2)?;
                Self::Load {
                    file: arg(0),
                    name: arg(1),
                }
            }
            "savectree" => {
                expect(2)?;
                Self::Save {
                    file: arg(0),
                    name: arg(1),
                }
            }
            "renamectree" => {
                expect(2)?;
                Self::Rename {
                    from: arg(0),
                    to: arg(1),
                }
            }
            "comparectree" => {
                expect(2)?;
                Self::Compare { a: arg(0), b: arg(1) }
            }
            "structuralanalysis" => {
                expect(1)?;
                Self::Analyze { name: arg(0) }
            }
            _ => return Err(err(format!("invalid command: {command}"))),
        };
        Ok(command)
    }
}

/// Control trees loaded by a command script.
#[derive(Debug, Default)]
pub struct Session {
    trees: Vec<ControlTree>,
    base: PathBuf,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative file names in commands are resolved against `base`.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    pub fn trees(&self) -> &[ControlTree] {
        &self.trees
    }

    pub fn tree(&self, name: &str) -> Option<&ControlTree> {
        self.trees.iter().find(|tree| tree.name() == name)
    }

    fn position(&self, index: usize, name: &str) -> Result<usize, Error> {
        self.trees
            .iter()
            .position(|tree| tree.name() == name)
            .ok_or_else(|| Error::Command {
                index,
                msg: format!("{name}: invalid control tree"),
            })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.base.join(file)
    }

    /// Runs every command of `script`. Returns the number of commands.
    pub fn run_script(&mut self, script: &Config) -> Result<usize, Error> {
        let mut index = 0;
        while let Some(line) = script.read("Commands", &format!("Command[{index}]")) {
            self.run(index, line)?;
            index += 1;
        }
        Ok(index)
    }

    /// Parses and runs one command.
    pub fn run(&mut self, index: usize, line: &str) -> Result<(), Error> {
        debug!("Command[{index}]: {line}");
        match Command::parse(index, line)? {
            Command::Load { file, name } => {
                let config = Config::load(self.path(&file))?;
                let tree = ControlTree::read_from_config(&config, &name)?;
                match self.trees.iter_mut().find(|tree| tree.name() == name) {
                    Some(old) => *old = tree,
                    None => self.trees.push(tree),
                }
            }
            Command::Save { file, name } => {
                let tree = &self.trees[self.position(index, &name)?];
                let path = self.path(&file);
                let mut config = Config::new(&path.display().to_string());
                tree.write_to_config(&mut config)?;
                config.save(path)?;
            }
            Command::Rename { from, to } => {
                let i = self.position(index, &from)?;
                if self.tree(&to).is_some() {
                    return Err(Error::Command {
                        index,
                        msg: format!("{to}: control tree exists"),
                    });
                }
                self.trees[i].rename(&to)?;
            }
            Command::Compare { a, b } => {
                let a = &self.trees[self.position(index, &a)?];
                let b = &self.trees[self.position(index, &b)?];
                a.compare(b)?;
            }
            Command::Analyze { name } => {
                let i = self.position(index, &name)?;
                self.trees[i].structural_analysis()?;
            }
        }
        Ok(())
    }
}

/// Runs the script in `path`, resolving file names against its directory.
pub fn run_file(path: impl AsRef<Path>) -> Result<Session, Error> {
    let path = path.as_ref();
    let script = Config::load(path)?;
    let base = path.parent().unwrap_or(Path::new(""));
    let mut session = Session::new().with_base(base);
    session.run_script(&script)?;
    Ok(session)
}
