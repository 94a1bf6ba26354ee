//! Clap adapter for defcon.
//!
//! Compiled only with the `clap` Cargo feature (on by default). The library
//! core never sees clap types: [`Cli::into_builder`] is the single bridge to
//! [`DefconBuilder`].
//!
//! The surface mirrors the classic getopt-style tool:
//!
//! ```text
//! defcon [-C <header>]... [-M <makefile>]... [-c <values>] [-s] <definitions>...
//! ```
//!
//! `-C` and `-M` may be repeated and interleaved; artifacts are written in the
//! order the flags appear.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use crate::builder::{DEFAULT_VALUES_FILE, Defcon, DefconBuilder};
use crate::types::Output;

/// Generate C headers and makefile fragments from typed configuration definitions.
#[derive(Debug, Parser)]
#[command(
    name = "defcon",
    version = concat!("(DefCon) ", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true
)]
pub struct Cli {
    /// Generate a C header.
    #[arg(short = 'C', long = "header", value_name = "FILENAME", action = ArgAction::Append)]
    pub header: Vec<PathBuf>,

    /// Generate a makefile.
    #[arg(short = 'M', long = "makefile", value_name = "FILENAME", action = ArgAction::Append)]
    pub makefile: Vec<PathBuf>,

    /// Set the input file.
    #[arg(short = 'c', long = "config", value_name = "FILENAME", default_value = DEFAULT_VALUES_FILE)]
    pub values: PathBuf,

    /// Suppress "undefined key" warnings during parsing.
    #[arg(short = 's', long = "suppress")]
    pub suppress_undefined: bool,

    /// Definition files, applied in order.
    #[arg(value_name = "DEFINITIONS")]
    pub definitions: Vec<PathBuf>,

    /// `-C`/`-M` requests in command-line order.
    #[arg(skip)]
    pub outputs: Vec<Output>,
}

impl Cli {
    /// The clap command, with `-v` as the version flag.
    pub fn build_command() -> Command {
        Cli::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
    }

    /// Parse `args` (including the program name) and record the order of
    /// the artifact flags.
    pub fn try_parse_ordered<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut matches = Self::build_command().try_get_matches_from(args)?;
        let outputs = ordered_outputs(&matches);
        let mut cli = Self::from_arg_matches_mut(&mut matches)?;
        cli.outputs = outputs;
        Ok(cli)
    }

    /// Convert parsed arguments into a pipeline builder.
    pub fn into_builder(self) -> DefconBuilder {
        let builder = Defcon::builder()
            .definition_files(self.definitions)
            .values_file(self.values)
            .suppress_undefined(self.suppress_undefined);

        self.outputs
            .into_iter()
            .fold(builder, |builder, output| builder.output(output))
    }
}

/// Interleave header and makefile requests by their position in argv.
fn ordered_outputs(matches: &ArgMatches) -> Vec<Output> {
    let mut indexed: Vec<(usize, Output)> = Vec::new();
    collect_indexed(matches, "header", |p| Output::header(p), &mut indexed);
    collect_indexed(matches, "makefile", |p| Output::makefile(p), &mut indexed);
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, output)| output).collect()
}

fn collect_indexed(
    matches: &ArgMatches,
    id: &str,
    make: fn(PathBuf) -> Output,
    out: &mut Vec<(usize, Output)>,
) {
    let (Some(indices), Some(paths)) = (matches.indices_of(id), matches.get_many::<PathBuf>(id))
    else {
        return;
    };
    out.extend(indices.zip(paths).map(|(i, p)| (i, make(p.clone()))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_ordered(args).unwrap()
    }

    #[test]
    fn definitions_are_positional() {
        let cli = parse(&["defcon", "a.ini", "b.ini"]);
        assert_eq!(
            cli.definitions,
            vec![PathBuf::from("a.ini"), PathBuf::from("b.ini")]
        );
    }

    #[test]
    fn values_file_defaults() {
        let cli = parse(&["defcon", "a.ini"]);
        assert_eq!(cli.values, PathBuf::from("defcon.conf"));
        assert!(!cli.suppress_undefined);
    }

    #[test]
    fn short_flags() {
        let cli = parse(&[
            "defcon", "-c", "prod.conf", "-s", "-C", "config.h", "-M", "config.mk", "defs.ini",
        ]);
        assert_eq!(cli.values, PathBuf::from("prod.conf"));
        assert!(cli.suppress_undefined);
        assert_eq!(cli.header, vec![PathBuf::from("config.h")]);
        assert_eq!(cli.makefile, vec![PathBuf::from("config.mk")]);
        assert_eq!(cli.definitions, vec![PathBuf::from("defs.ini")]);
    }

    #[test]
    fn outputs_follow_command_line_order() {
        let cli = parse(&[
            "defcon", "-M", "one.mk", "-C", "two.h", "-M", "three.mk", "defs.ini",
        ]);
        assert_eq!(
            cli.outputs,
            vec![
                Output::makefile("one.mk"),
                Output::header("two.h"),
                Output::makefile("three.mk"),
            ]
        );
    }

    #[test]
    fn no_outputs_is_valid() {
        let cli = parse(&["defcon", "defs.ini"]);
        assert!(cli.outputs.is_empty());
    }

    #[test]
    fn missing_definitions_is_left_to_the_pipeline() {
        let cli = parse(&["defcon"]);
        assert!(cli.definitions.is_empty());
    }

    #[test]
    fn unknown_option_errors() {
        let err = Cli::try_parse_ordered(["defcon", "-x", "defs.ini"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = Cli::try_parse_ordered(["defcon", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn lowercase_v_prints_version() {
        let err = Cli::try_parse_ordered(["defcon", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains("(DefCon)"));
    }

    #[test]
    fn into_builder_carries_everything() {
        let cli = parse(&["defcon", "-C", "config.h", "-c", "x.conf", "-s", "defs.ini"]);
        let builder = cli.into_builder();
        let debug = format!("{builder:?}");
        assert!(debug.contains("defs.ini"));
        assert!(debug.contains("x.conf"));
        assert!(debug.contains("config.h"));
        assert!(debug.contains("suppress_undefined: true"));
    }

    #[test]
    fn command_is_well_formed() {
        Cli::build_command().debug_assert();
    }
}
