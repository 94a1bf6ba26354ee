use std::path::{Path, PathBuf};

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::error::{DefconError, Warning};
use crate::emit;
use crate::loader;
use crate::registry::Registry;
use crate::resolve::{self, ResolveOptions};
use crate::types::Output;
use crate::validate;

/// Values file used when none is given.
pub const DEFAULT_VALUES_FILE: &str = "defcon.conf";

/// Entry point for configuring a run.
pub struct Defcon;

impl Defcon {
    pub fn builder() -> DefconBuilder {
        DefconBuilder::new()
    }
}

/// Builder for one generation run.
///
/// Collects the definition sources, the values file and the requested
/// artifacts, then [`run`](Self::run)s the pipeline:
///
/// 1. Load every definition source, in order.
/// 2. Apply the values file.
/// 3. Check required keys.
/// 4. Write each requested artifact, in order.
#[derive(Debug, Clone)]
pub struct DefconBuilder {
    definition_files: Vec<PathBuf>,
    values_file: Option<PathBuf>,
    suppress_undefined: bool,
    outputs: Vec<Output>,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Report {
    /// Final state of every definition.
    pub registry: Registry,
    /// Artifacts that were written successfully, in request order.
    pub written: Vec<Output>,
    /// Artifacts whose destination could not be written.
    pub failed: Vec<Output>,
}

impl DefconBuilder {
    fn new() -> Self {
        Self {
            definition_files: Vec::new(),
            values_file: None,
            suppress_undefined: false,
            outputs: Vec::new(),
        }
    }

    /// Append a definition source. Sources are applied in the order added.
    pub fn definition_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.definition_files.push(path.into());
        self
    }

    /// Append several definition sources.
    pub fn definition_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.definition_files
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Override the values file (default: [`DEFAULT_VALUES_FILE`]).
    pub fn values_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.values_file = Some(path.into());
        self
    }

    /// Do not report values-file keys that match no definition.
    pub fn suppress_undefined(mut self, suppress: bool) -> Self {
        self.suppress_undefined = suppress;
        self
    }

    /// Request a C header at `path`.
    pub fn header(self, path: impl Into<PathBuf>) -> Self {
        self.output(Output::header(path))
    }

    /// Request a makefile fragment at `path`.
    pub fn makefile(self, path: impl Into<PathBuf>) -> Self {
        self.output(Output::makefile(path))
    }

    /// Request an artifact. Artifacts are written in the order requested.
    pub fn output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }

    /// Resolve the effective values file path.
    fn effective_values_file(&self) -> &Path {
        self.values_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_VALUES_FILE))
    }

    /// Run the full pipeline.
    ///
    /// Warnings go to `diag` as they occur. Fatal conditions (no definition
    /// sources, unusable values file, missing required value) stop the run
    /// before any artifact is written.
    pub fn run<D: Diagnostics>(self, diag: &mut D) -> Result<Report, DefconError> {
        let registry = self.build_registry(diag)?;

        let mut written = Vec::new();
        let mut failed = Vec::new();
        for output in self.outputs {
            match emit::write_artifact(&registry, &output, diag) {
                Ok(()) => written.push(output),
                Err(e) => {
                    diag.warn(Warning::OutputUnwritable {
                        path: output.path.clone(),
                        source: e,
                    });
                    failed.push(output);
                }
            }
        }

        Ok(Report {
            registry,
            written,
            failed,
        })
    }

    /// Load, resolve and validate, without writing anything.
    pub fn build_registry<D: Diagnostics>(&self, diag: &mut D) -> Result<Registry, DefconError> {
        if self.definition_files.is_empty() {
            return Err(DefconError::NoDefinitionFiles);
        }

        let mut registry = Registry::new();
        for path in &self.definition_files {
            loader::load_definition_file(&mut registry, path, diag);
        }
        debug!(definitions = registry.len(), "definitions loaded");

        let options = ResolveOptions {
            suppress_undefined: self.suppress_undefined,
        };
        resolve::resolve_values_file(&mut registry, self.effective_values_file(), options, diag)?;

        validate::check_required(&registry)?;
        Ok(registry)
    }
}
