//! Artifact generation: render the registry as a C header or a makefile
//! fragment.
//!
//! Both formats walk the registry in insertion order and write one line per
//! eligible definition (one with a non-empty symbol), prefixed with
//! [`SYMBOL_PREFIX`]. Definitions without a symbol are reported and left out.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::error::Warning;
use crate::registry::Registry;
use crate::types::{Output, OutputFormat};

/// Prepended to every symbol in generated artifacts.
pub const SYMBOL_PREFIX: &str = "CONFIG_";

const HEADER_GUARD: &str = "__CONFIG_H__";

impl OutputFormat {
    fn write_preamble(self, w: &mut impl Write) -> io::Result<()> {
        match self {
            OutputFormat::Header => {
                writeln!(w, "#ifndef {HEADER_GUARD}")?;
                writeln!(w, "#define {HEADER_GUARD} 1")
            }
            OutputFormat::Makefile => Ok(()),
        }
    }

    fn write_line(self, w: &mut impl Write, symbol: &str, value: &str) -> io::Result<()> {
        match self {
            OutputFormat::Header => writeln!(w, "#define {SYMBOL_PREFIX}{symbol} {value}"),
            OutputFormat::Makefile => writeln!(w, "{SYMBOL_PREFIX}{symbol} := {value}"),
        }
    }

    fn write_postamble(self, w: &mut impl Write) -> io::Result<()> {
        match self {
            OutputFormat::Header => writeln!(w, "#endif"),
            OutputFormat::Makefile => Ok(()),
        }
    }
}

/// Write `registry` in `format` to `w`. Returns the number of lines emitted
/// for definitions.
pub fn render_into<W: Write, D: Diagnostics>(
    registry: &Registry,
    format: OutputFormat,
    w: &mut W,
    diag: &mut D,
) -> io::Result<usize> {
    let mut emitted = 0;
    format.write_preamble(w)?;
    for def in registry {
        if !def.is_eligible() {
            diag.warn(Warning::MissingSymbol {
                name: def.name.to_string(),
            });
            continue;
        }
        format.write_line(w, &def.symbol, &def.value.format())?;
        emitted += 1;
    }
    format.write_postamble(w)?;
    Ok(emitted)
}

/// Render `registry` in `format` to a string.
pub fn render<D: Diagnostics>(registry: &Registry, format: OutputFormat, diag: &mut D) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    render_into(registry, format, &mut buf, diag).ok();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create (or truncate) `output.path` and write the artifact into it.
///
/// Failure is returned to the caller, which decides how loud to be about it.
pub fn write_artifact<D: Diagnostics>(
    registry: &Registry,
    output: &Output,
    diag: &mut D,
) -> io::Result<()> {
    let file = File::create(&output.path)?;
    let mut w = BufWriter::new(file);
    let emitted = render_into(registry, output.format, &mut w, diag)?;
    w.flush()?;
    debug!(
        path = %output.path.display(),
        format = ?output.format,
        emitted,
        "wrote artifact"
    );
    Ok(())
}
