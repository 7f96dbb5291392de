/// Ordered table of fixture generators.
///
/// Setup code appends entries; `Registry::run` drains them in registration order. Every entry gets its
/// own `Sampler` derived from the base seed and the entry's path, assembles its whole fixture in memory
/// and writes it with a single call. A failing entry is logged and recorded, and the run moves on.
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{error, info};

use crate::{
    config::GeneratorConfig,
    fixtures::test_vector::{BlockSpec, TestVector},
    prelude::ErrorsOracle,
    random::sampler::Sampler,
};

/// Fixture text and how many test vectors it carries (none for raw fixtures).
struct Rendered {
    text: String,
    vectors: usize,
}

type Generator = Box<dyn FnOnce(&mut Sampler) -> Result<Rendered, ErrorsOracle>>;

pub struct RegistryEntry {
    path: String,
    generator: Generator,
}

impl RegistryEntry {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(RegistryEntry::path)
    }

    /// Register a generator of test vectors for `block_name`.
    pub fn block_spec<F>(&mut self, block_name: &str, path: &str, epsilon: f64, generator: F)
    where
        F: FnOnce(&mut Sampler) -> Result<Vec<TestVector>, ErrorsOracle> + 'static,
    {
        let block_name = block_name.to_string();
        self.entries.push(RegistryEntry {
            path: path.to_string(),
            generator: Box::new(move |sampler| {
                let spec = BlockSpec {
                    block_name,
                    vectors: generator(sampler)?,
                    epsilon,
                };
                Ok(Rendered {
                    text: spec.render()?,
                    vectors: spec.vectors.len(),
                })
            }),
        });
    }

    /// Register a generator of literal lines, joined with newlines.
    pub fn raw_spec<F>(&mut self, path: &str, generator: F)
    where
        F: FnOnce(&mut Sampler) -> Result<Vec<String>, ErrorsOracle> + 'static,
    {
        self.entries.push(RegistryEntry {
            path: path.to_string(),
            generator: Box::new(move |sampler| {
                Ok(Rendered {
                    text: generator(sampler)?.join("\n"),
                    vectors: 0,
                })
            }),
        });
    }

    /// Generate and write every entry. Only a bad configuration aborts the run; per-fixture failures
    /// end up in the report.
    pub fn run(self, config: &GeneratorConfig) -> Result<RunReport, ErrorsOracle> {
        config.validate()?;
        let mut report = RunReport::default();
        for entry in self.entries {
            let target = config.resolve(&entry.path);
            let mut sampler = Sampler::for_key(config.seed, &entry.path);
            let result = (entry.generator)(&mut sampler).and_then(|rendered| {
                write_fixture(&target, &rendered.text)?;
                Ok(rendered)
            });
            match result {
                Ok(Rendered { text, vectors }) => {
                    info!(path = %target.display(), vectors, bytes = text.len(), "wrote fixture");
                    report.written.push(WrittenFixture {
                        path: target,
                        vectors,
                        bytes: text.len(),
                    });
                }
                Err(err) => {
                    error!(path = %target.display(), error = %err, "fixture generation failed");
                    report.failures.push((target, err));
                }
            }
        }
        Ok(report)
    }
}

fn write_fixture(path: &Path, text: &str) -> Result<(), ErrorsOracle> {
    let io_error = |source| ErrorsOracle::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(text.as_bytes()).map_err(io_error)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixture {
    pub path: PathBuf,
    pub vectors: usize,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct RunReport {
    written: Vec<WrittenFixture>,
    failures: Vec<(PathBuf, ErrorsOracle)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn written(&self) -> &[WrittenFixture] {
        &self.written
    }

    pub fn failures(&self) -> &[(PathBuf, ErrorsOracle)] {
        &self.failures
    }
}
