use crate::{
    config::Config,
    error::{Error, Result},
    number::{NumberKind, Sequence},
    visit::{dispatch, Visitable, Visitor},
};
use std::{fmt::Display, io::Write};
use tracing::{trace, warn};

/// Writes every leaf as `<value><suffix>` on its own line, walking sequences
/// in order. Sequences produce no output of their own.
///
/// | kind    | suffix |
/// |---------|--------|
/// | integer | `i`    |
/// | single  | `f`    |
/// | double  | `d`    |
#[derive(Debug)]
pub struct Printer<W> {
    writer: W,
    config: Config,
    depth: usize,
}

impl<W: Write> Printer<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        return Self::with_config(writer, Config::default());
    }

    pub fn with_config(writer: W, config: Config) -> Self {
        return Self {
            writer,
            config,
            depth: 0,
        };
    }

    #[inline]
    pub fn config(&self) -> &Config {
        return &self.config;
    }

    pub fn print<T: ?Sized + Visitable>(&mut self, value: &T) -> Result<()> {
        dispatch(self, value)?;
        self.writer.flush()?;
        return Ok(());
    }

    #[inline]
    pub fn into_inner(self) -> W {
        return self.writer;
    }

    fn write_leaf(&mut self, value: impl Display, kind: NumberKind) -> Result<()> {
        trace!(depth = self.depth, %kind, "print");
        match kind.suffix() {
            Some(suffix) => writeln!(self.writer, "{value}{suffix}")?,
            None => writeln!(self.writer, "{value}")?,
        }
        return Ok(());
    }

    fn write_float(&mut self, value: impl Display, kind: NumberKind) -> Result<()> {
        match self.config.precision {
            Some(precision) => self.write_leaf(format_args!("{value:.precision$}"), kind),
            None => self.write_leaf(value, kind),
        }
    }
}

impl<W: Write> Visitor for Printer<W> {
    type Output = Result<()>;

    fn visit_integer(&mut self, value: i32) -> Result<()> {
        self.write_leaf(value, NumberKind::Integer)
    }

    fn visit_single(&mut self, value: f32) -> Result<()> {
        self.write_float(value, NumberKind::Single)
    }

    fn visit_double(&mut self, value: f64) -> Result<()> {
        self.write_float(value, NumberKind::Double)
    }

    fn visit_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                warn!(limit, "sequence nested too deeply, aborting print");
                return Err(Error::DepthExceeded { limit });
            }
        }

        self.depth += 1;
        let result = sequence
            .iter()
            .try_for_each(|element| dispatch(&mut *self, element));
        self.depth -= 1;
        return result;
    }
}

/// Prints `value` into a string, one leaf per line.
pub fn print_to_string<T: ?Sized + Visitable>(value: &T) -> Result<String> {
    return print_to_string_with(value, Config::default());
}

pub fn print_to_string_with<T: ?Sized + Visitable>(value: &T, config: Config) -> Result<String> {
    let mut printer = Printer::with_config(Vec::new(), config);
    printer.print(value)?;
    return String::from_utf8(printer.into_inner()).map_err(Error::msg);
}
