//! INI-style documents holding serialized trees and command scripts.
//!
//! ```text
//! ; comment
//! [ CTree.main ]
//! Entry = n1
//! ```
//!
//! Section and key lookups ignore ASCII case.

use std::{fmt, fs, path::Path};

use crate::error::Error;

#[derive(Clone, Debug, Default)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    file: String,
    sections: Vec<Section>,
}

impl Config {
    /// Creates an empty document to be saved as `file`.
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_owned(),
            sections: Vec::new(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| Error::Io {
            file: file.clone(),
            msg: e.to_string(),
        })?;
        Self::parse(&file, &text)
    }

    pub fn parse(file: &str, text: &str) -> Result<Self, Error> {
        let mut config = Self::new(file);
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let err = |msg: &str| Error::config(file, format!("line {}: {msg}", i + 1));
            if let Some(name) = line.strip_prefix('[') {
                let name = name.strip_suffix(']').ok_or_else(|| err("unterminated section"))?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(err("empty section name"));
                }
                if config.section_exists(name) {
                    return Err(err(&format!("duplicate section '{name}'")));
                }
                config.sections.push(Section {
                    name: name.to_owned(),
                    entries: Vec::new(),
                });
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| err("invalid syntax"))?;
            let (key, value) = (key.trim(), value.trim());
            let section = config
                .sections
                .last_mut()
                .ok_or_else(|| err("variable outside of a section"))?;
            if key.is_empty() {
                return Err(err("empty variable name"));
            }
            if section.get(key).is_some() {
                return Err(err(&format!("duplicate variable '{key}'")));
            }
            section.entries.push((key.to_owned(), value.to_owned()));
        }
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| Error::Io {
            file: path.display().to_string(),
            msg: e.to_string(),
        })
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn section_exists(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn read(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Sets `key` in `section`, creating both if needed.
    pub fn write(&mut self, section: &str, key: &str, value: &str) {
        let index = match self
            .sections
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(section))
        {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: section.to_owned(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        let entries = &mut self.sections[index].entries;
        match entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some((_, v)) => *v = value.to_owned(),
            None => entries.push((key.to_owned(), value.to_owned())),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i != 0 {
                writeln!(fmt)?;
            }
            writeln!(fmt, "[ {} ]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(fmt, "{key} = {value}")?;
            }
        }
        Ok(())
    }
}
