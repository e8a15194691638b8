#[macro_use]
extern crate log;

mod cli;

use std::{
    error::Error,
    fmt::{self, Write as _},
    fs,
    io::{self, Write},
};

use evgasm_core::{printer::PrinterExt, ArchDecoder};
use evgasm_evergreen::{disasm_buffer, ClauseDecoder, ClauseKind, Options};
use object::{Object, ObjectSection, Section};

#[cfg(feature = "color")]
use evgasm_core::printer::Style;

use crate::cli::{Cli, Color};

struct Info {
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    color: Color,
}

impl PrinterExt for Info {
    #[cfg(feature = "color")]
    fn print_styled(
        &self,
        out: &mut dyn fmt::Write,
        style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        use owo_colors::OwoColorize;

        match self.color {
            Color::Off => write!(out, "{display}"),
            Color::On => match style {
                Style::Counter => write!(out, "{}", display.dimmed()),
                Style::Slot => write!(out, "{display}"),
                Style::Mnemonic => write!(out, "{}", display.yellow()),
                Style::Register => write!(out, "{}", display.blue()),
                Style::Immediate => write!(out, "{}", display.magenta()),
                Style::Modifier => write!(out, "{}", display.cyan()),
                Style::Comment => write!(out, "{}", display.green()),
            },
        }
    }
}

// ignore broken pipe error
fn helper(result: io::Result<()>) -> io::Result<()> {
    if matches!(result, Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe) {
        Ok(())
    } else {
        result
    }
}

fn write_stdout(text: &str) -> io::Result<()> {
    helper(io::stdout().lock().write_all(text.as_bytes()))
}

struct App {
    opts: Options,
    mode: Option<ClauseKind>,
    info: Info,
}

impl App {
    fn new(cli: &Cli) -> Self {
        Self {
            opts: Options {
                words: cli.words,
                debug: cli.debug_format,
            },
            mode: cli.mode,
            info: Info {
                color: cli.disassembler_color,
            },
        }
    }

    fn get_file_format(file: &object::File) -> String {
        use object::File;

        let class = match file {
            File::Elf32(..) => "elf32",
            File::Elf64(..) => "elf64",
            _ => "unknown",
        };
        format!("{class}-evergreen")
    }

    fn disassemble_section(&self, section: Section) -> Result<(), Box<dyn Error>> {
        let section_name = section.name()?;
        let data = section.data()?;
        write_stdout(&format!("\nDisassembly of section {section_name}:\n\n"))?;
        self.disassemble(data)
    }

    fn disassemble(&self, data: &[u8]) -> Result<(), Box<dyn Error>> {
        let mut out = String::new();
        let res = match self.mode {
            Some(kind) => self.disassemble_clause(&mut out, kind, data),
            None => disasm_buffer(&mut out, &self.info, data, &self.opts),
        };
        // print what was decoded before the failure
        write_stdout(&out)?;
        res?;
        Ok(())
    }

    fn disassemble_clause(
        &self,
        out: &mut String,
        kind: ClauseKind,
        data: &[u8],
    ) -> Result<(), evgasm_core::error::Error> {
        let mut decoder = ClauseDecoder::new(kind)
            .with_options(self.opts)
            .with_counter(true);
        let mut lines = Vec::new();
        let mut offset = 0;
        while offset < data.len() {
            let len = decoder.decode(&data[offset..])?;
            lines.clear();
            decoder.print(&mut lines)?;
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            if self.opts.words {
                decoder.print_words(out)?;
                out.push('\n');
            }
            offset += len;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = cli::parse_cli();

    if let Some(script) = &cli.ctree {
        let session = evgasm_ctree::run_file(script)?;
        for tree in session.trees() {
            write_stdout(&format!("{tree}\n"))?;
        }
        return Ok(());
    }

    let data = fs::read(&cli.path)?;
    let app = App::new(&cli);

    let file = match object::File::parse(&*data) {
        Ok(file) => file,
        Err(err) => {
            debug!("{}: {err}, decoding as a raw program", cli.path);
            write_stdout(&format!("\n{}:     file format raw-evergreen\n\n", cli.path))?;
            return app.disassemble(&data);
        }
    };

    let format = App::get_file_format(&file);
    debug!("{}: {format}, {} sections", cli.path, file.sections().count());
    write_stdout(&format!("\n{}:     file format {format}\n", cli.path))?;

    if cli.sections.is_empty() {
        for section in file.sections() {
            if object::SectionKind::Text == section.kind() {
                app.disassemble_section(section)?;
            }
        }
    } else {
        for section_name in &cli.sections {
            match file.section_by_name(section_name) {
                Some(section) => app.disassemble_section(section)?,
                None => warn!("section '{section_name}' not found"),
            }
        }
    }

    Ok(())
}
