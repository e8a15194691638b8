use std::path::PathBuf;

use bpaf::*;
use evgasm_evergreen::ClauseKind;

#[derive(Copy, Clone, Debug)]
pub enum Color {
    Off,
    On,
}

#[derive(Debug, Clone)]
pub struct Cli {
    pub sections: Vec<String>,
    pub mode: Option<ClauseKind>,
    pub words: bool,
    pub debug_format: bool,
    pub disassembler_color: Color,
    pub ctree: Option<PathBuf>,
    pub path: String,
}

pub fn parse_cli() -> Cli {
    let sections = short('j')
        .long("section")
        .help("Only display information for section NAME")
        .argument("NAME")
        .many();

    let mode = short('m')
        .long("mode")
        .help("Decode the input as one clause of kind MODE [valid modes: cf, alu, tc]")
        .argument::<ClauseKind>("MODE")
        .optional();

    let words = short('w')
        .long("words")
        .help("Dump the fields of every instruction word")
        .switch();

    let debug_format = long("debug-format")
        .help("Print instructions as key=\"value\" lists")
        .switch();

    #[cfg(feature = "color")]
    let auto_color =
        supports_color::on(supports_color::Stream::Stdout).map_or(Color::Off, |_| Color::On);

    #[cfg(not(feature = "color"))]
    let auto_color = Color::Off;

    let disassembler_color = long("disassembler-color")
        .help("Enable or disable disassembler color output [default: auto, valid modes: off, on, auto]")
        .argument::<String>("MODE")
        .parse(move |s| match s.as_str() {
            "off" => Ok(Color::Off),
            "on" => Ok(Color::On),
            "auto" | "terminal" => Ok(auto_color),
            _ => Err(format!("invalid color {s}")),
        })
        .fallback(auto_color);

    let ctree = long("ctree")
        .help("Run the control tree command script SCRIPT")
        .argument::<PathBuf>("SCRIPT")
        .optional();

    let path = positional("FILE")
        .help("File to process")
        .fallback("a.out".into());

    construct!(Cli {
        sections,
        mode,
        words,
        debug_format,
        disassembler_color,
        ctree,
        path,
    })
    .to_options()
    .version(env!("CARGO_PKG_VERSION"))
    .descr("Disassembler for AMD Evergreen GPU programs")
    .fallback_to_usage()
    .run()
}
