use std::fmt::{self, Write};

pub struct FormatterFn<F>(pub F)
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result;

impl<F> fmt::Display for FormatterFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.0(fmt)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Counter,
    Slot,
    Mnemonic,
    Register,
    Immediate,
    Modifier,
    Comment,
}

/// Output hooks used by the instruction printers.
///
/// The default implementation writes plain text. Front-ends override
/// [`PrinterExt::print_styled`] to add colors.
pub trait PrinterExt {
    fn print_styled(
        &self,
        out: &mut dyn Write,
        #[allow(unused_variables)] style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        write!(out, "{display}")
    }

    fn print_counter(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Counter, display)
    }

    fn print_slot(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Slot, display)
    }

    fn print_mnemonic(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Mnemonic, display)
    }

    fn print_register(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Register, display)
    }

    fn print_immediate(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Immediate, display)
    }

    fn print_modifier(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Modifier, display)
    }

    fn print_comment(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Comment, display)
    }
}

impl PrinterExt for () {}
