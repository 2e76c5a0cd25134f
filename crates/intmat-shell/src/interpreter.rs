//! Command execution against a [`MatrixTable`].

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use intmat_codec::{read_matrix_file, write_matrix_file};
use intmat_core::{ops, Matrix, MatrixName};
use intmat_table::{Insertion, MatrixTable};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::command::Command;
use crate::config::{ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::tokenize::tokenize;

/// The successful result of one command.
///
/// `Display` produces the line reported to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered matrix text.
    Displayed(String),
    /// A zero-filled matrix was inserted.
    Created {
        /// Its name.
        name: MatrixName,
        /// Row count.
        rows: u32,
        /// Column count.
        cols: u32,
    },
    /// A matrix was filled with random values.
    Randomized {
        /// Its name.
        name: MatrixName,
        /// Inclusive lower bound.
        lo: u32,
        /// Inclusive upper bound.
        hi: u32,
    },
    /// A sum matrix was inserted.
    Added {
        /// Left operand.
        a: MatrixName,
        /// Right operand.
        b: MatrixName,
        /// The new matrix.
        dest: MatrixName,
    },
    /// A copy was inserted.
    Duplicated {
        /// Source matrix.
        src: MatrixName,
        /// The new matrix.
        dest: MatrixName,
    },
    /// Two matrices were compared.
    Compared {
        /// Whether they hold the same data.
        same: bool,
    },
    /// A matrix was shifted in place.
    Shifted {
        /// Its name.
        name: MatrixName,
        /// Bit count.
        amount: u32,
    },
    /// A matrix file was loaded and inserted.
    Read {
        /// Name stored in the file.
        name: MatrixName,
    },
    /// A matrix was saved.
    Written {
        /// Its name.
        name: MatrixName,
        /// Where it was written.
        path: PathBuf,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Displayed(text) => f.write_str(text),
            Self::Created { name, rows, cols } => {
                write!(f, "Created Matrix ({name},{rows},{cols})")
            }
            Self::Randomized { name, lo, hi } => {
                write!(f, "Matrix ({name}) is randomized between {lo} {hi}")
            }
            Self::Added { a, b, dest } => {
                write!(f, "Addition of {a} and {b} into {dest} finished")
            }
            Self::Duplicated { src, dest } => {
                write!(f, "Duplication of {src} into {dest} finished")
            }
            Self::Compared { same: true } => f.write_str("SAME DATA IN BOTH"),
            Self::Compared { same: false } => f.write_str("DIFFERENT DATA IN BOTH"),
            Self::Shifted { name, amount } => {
                write!(f, "Matrix ({name}) has been shifted by {amount}")
            }
            Self::Read { name } => write!(f, "Matrix ({name}) is read from the filesystem"),
            Self::Written { name, .. } => {
                write!(f, "Matrix ({name}) is written out to the filesystem")
            }
        }
    }
}

/// Executes commands against a table.
///
/// Holds the configuration and the random source; every matrix lives in the
/// [`MatrixTable`] passed to each call.
pub struct Interpreter {
    config: ShellConfig,
    seed: u64,
    rng: ChaCha8Rng,
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Interpreter {
    /// Validate `config` and seed the random source.
    ///
    /// Without a configured seed, one is drawn from the OS; [`seed()`]
    /// reports it so a session can be replayed.
    ///
    /// [`seed()`]: Self::seed
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("interpreter seeded with {seed}");
        Ok(Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The seed the random source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tokenize `line` under the configured limits and execute it.
    pub fn execute_line(
        &mut self,
        table: &mut MatrixTable,
        line: &str,
    ) -> Result<Outcome, ShellError> {
        let tokens = tokenize(line, self.config.max_tokens, self.config.max_token_len)?;
        self.execute(table, tokens.as_slice())
    }

    /// Parse and execute one tokenized command.
    pub fn execute<S: AsRef<str>>(
        &mut self,
        table: &mut MatrixTable,
        tokens: &[S],
    ) -> Result<Outcome, ShellError> {
        let command = Command::parse(tokens)?;
        self.dispatch(table, command)
    }

    /// Execute an already parsed command.
    ///
    /// Operands are looked up and new matrices fully built before anything
    /// is inserted, so on error the table is unchanged.
    pub fn dispatch(
        &mut self,
        table: &mut MatrixTable,
        command: Command,
    ) -> Result<Outcome, ShellError> {
        debug!("dispatch: {}", command.kind());
        let outcome = match command {
            Command::Display { name } => {
                Outcome::Displayed(ops::render(table.lookup(name.as_str())?))
            }
            Command::Create { name, rows, cols } => {
                let m = Matrix::with_name(name.clone(), rows, cols)?;
                store(table, m);
                Outcome::Created { name, rows, cols }
            }
            Command::Random { name, lo, hi } => {
                let m = table.lookup_mut(name.as_str())?;
                ops::random_fill(m, lo, hi, &mut self.rng)?;
                Outcome::Randomized { name, lo, hi }
            }
            Command::Add { a, b, dest } => {
                let c = ops::sum(
                    table.lookup(a.as_str())?,
                    table.lookup(b.as_str())?,
                    dest.clone(),
                )?;
                store(table, c);
                Outcome::Added { a, b, dest }
            }
            Command::Duplicate { src, dest } => {
                let copy = ops::duplicate_as(table.lookup(src.as_str())?, dest.clone())?;
                store(table, copy);
                Outcome::Duplicated { src, dest }
            }
            Command::Equal { a, b } => Outcome::Compared {
                same: ops::equal(table.lookup(a.as_str())?, table.lookup(b.as_str())?),
            },
            Command::Shift {
                name,
                direction,
                amount,
            } => {
                let m = table.lookup_mut(name.as_str())?;
                ops::shift(m, direction, amount)?;
                Outcome::Shifted { name, amount }
            }
            Command::Read { path } => {
                let m = read_matrix_file(&self.resolve(&path))?;
                let name = m.name().clone();
                store(table, m);
                Outcome::Read { name }
            }
            Command::Write { name } => {
                let path = self.config.data_dir.join(name.as_str());
                write_matrix_file(&path, table.lookup(name.as_str())?)?;
                Outcome::Written { name, path }
            }
        };
        Ok(outcome)
    }

    /// Execute `line` and report the outcome or error to `out`.
    ///
    /// Command failures are reported, not returned; only a failing sink is
    /// an error.
    pub fn run_line(
        &mut self,
        table: &mut MatrixTable,
        line: &str,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self.execute_line(table, line) {
            Ok(outcome) => writeln!(out, "{outcome}"),
            Err(e) => {
                warn!("command rejected ({:?}): {e}", e.kind());
                writeln!(out, "{e}")
            }
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config.data_dir.join(path)
        }
    }
}

fn store(table: &mut MatrixTable, matrix: Matrix) {
    let Insertion { slot, evicted } = table.insert(matrix);
    if let Some(old) = evicted {
        info!("slot {slot}: matrix ({old}) was replaced");
    }
}
