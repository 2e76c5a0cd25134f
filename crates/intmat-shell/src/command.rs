//! Command grammar and argument parsing.
//!
//! [`grammar()`] is the single table of command names, arities, and usage
//! strings. [`Command::parse`] checks a token sequence against it and
//! converts every argument to its typed form before anything executes.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use indexmap::IndexMap;
use intmat_core::ops::ShiftDirection;
use intmat_core::MatrixName;

use crate::error::ShellError;

/// The fixed command set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `display <name>`
    Display,
    /// `create <name> <rows> <cols>`
    Create,
    /// `random <name> <lo> <hi>`
    Random,
    /// `add <a> <b> <dest>`
    Add,
    /// `duplicate <src> <dest>`
    Duplicate,
    /// `equal <a> <b>`
    Equal,
    /// `shift <name> <dir> <amount>`
    Shift,
    /// `read <path>`
    Read,
    /// `write <name>`
    Write,
}

/// One grammar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    /// Which command.
    pub kind: CommandKind,
    /// Arguments after the command name.
    pub arity: usize,
    /// Usage line.
    pub usage: &'static str,
    /// One-line description.
    pub summary: &'static str,
}

/// All commands keyed by their case-sensitive name, in help order.
pub fn grammar() -> &'static IndexMap<&'static str, CommandSpec> {
    static GRAMMAR: OnceLock<IndexMap<&'static str, CommandSpec>> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        let entries = [
            (
                "display",
                CommandKind::Display,
                1,
                "display <name>",
                "render matrix <name>",
            ),
            (
                "create",
                CommandKind::Create,
                3,
                "create <name> <rows> <cols>",
                "insert a new zero-filled matrix",
            ),
            (
                "random",
                CommandKind::Random,
                3,
                "random <name> <lo> <hi>",
                "fill <name> with random values in [lo, hi]",
            ),
            (
                "add",
                CommandKind::Add,
                3,
                "add <a> <b> <dest>",
                "create <dest> = <a> + <b>",
            ),
            (
                "duplicate",
                CommandKind::Duplicate,
                2,
                "duplicate <src> <dest>",
                "create <dest> as a copy of <src>",
            ),
            (
                "equal",
                CommandKind::Equal,
                2,
                "equal <a> <b>",
                "report whether <a> and <b> hold the same data",
            ),
            (
                "shift",
                CommandKind::Shift,
                3,
                "shift <name> <l|r> <amount>",
                "shift every cell of <name> by <amount> bits",
            ),
            (
                "read",
                CommandKind::Read,
                1,
                "read <path>",
                "load a matrix file into the table",
            ),
            (
                "write",
                CommandKind::Write,
                1,
                "write <name>",
                "save <name> to a file of the same name",
            ),
        ];
        entries
            .into_iter()
            .map(|(name, kind, arity, usage, summary)| {
                (
                    name,
                    CommandSpec {
                        kind,
                        arity,
                        usage,
                        summary,
                    },
                )
            })
            .collect()
    })
}

/// One line per command, `usage` then `summary`, in grammar order.
pub fn help_text() -> String {
    let width = grammar().values().map(|spec| spec.usage.len()).max().unwrap_or(0);
    let mut text = String::new();
    for spec in grammar().values() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("  {:<width$}  {}", spec.usage, spec.summary));
    }
    text
}

impl CommandKind {
    /// Look up a command by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        grammar().get(name).map(|spec| spec.kind)
    }

    /// The command's name as typed.
    pub fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Create => "create",
            Self::Random => "random",
            Self::Add => "add",
            Self::Duplicate => "duplicate",
            Self::Equal => "equal",
            Self::Shift => "shift",
            Self::Read => "read",
            Self::Write => "write",
        }
    }

    /// The grammar entry for this command.
    pub fn spec(self) -> &'static CommandSpec {
        &grammar()[self.name()]
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully validated command, ready to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render a matrix.
    Display {
        /// Matrix to render.
        name: MatrixName,
    },
    /// Insert a zero-filled matrix.
    Create {
        /// New matrix name.
        name: MatrixName,
        /// Row count.
        rows: u32,
        /// Column count.
        cols: u32,
    },
    /// Fill a matrix with random values.
    Random {
        /// Target matrix.
        name: MatrixName,
        /// Inclusive lower bound.
        lo: u32,
        /// Inclusive upper bound.
        hi: u32,
    },
    /// Insert `dest = a + b`.
    Add {
        /// Left operand.
        a: MatrixName,
        /// Right operand.
        b: MatrixName,
        /// Name of the new sum matrix.
        dest: MatrixName,
    },
    /// Insert a copy of `src` named `dest`.
    Duplicate {
        /// Source matrix.
        src: MatrixName,
        /// Name of the copy.
        dest: MatrixName,
    },
    /// Compare two matrices.
    Equal {
        /// Left operand.
        a: MatrixName,
        /// Right operand.
        b: MatrixName,
    },
    /// Shift a matrix's cells in place.
    Shift {
        /// Target matrix.
        name: MatrixName,
        /// Shift direction.
        direction: ShiftDirection,
        /// Bit count.
        amount: u32,
    },
    /// Load a matrix file.
    Read {
        /// File path as typed.
        path: PathBuf,
    },
    /// Save a matrix to a file named after it.
    Write {
        /// Matrix to save.
        name: MatrixName,
    },
}

fn name_arg(token: &str) -> Result<MatrixName, ShellError> {
    Ok(MatrixName::new(token)?)
}

fn number_arg(arg: &'static str, token: &str) -> Result<u32, ShellError> {
    let invalid = || ShellError::InvalidNumber {
        arg,
        token: token.to_string(),
    };
    // `str::parse` would also take a leading `+`.
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

impl Command {
    /// Parse a tokenized line.
    ///
    /// The first token selects the command; the rest must match its arity
    /// exactly. Names are checked against the name limits and numbers must be
    /// plain decimal `u32`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use intmat_shell::{Command, ShellError};
    ///
    /// let cmd = Command::parse(&["create", "A", "2", "3"]).unwrap();
    /// assert!(matches!(cmd, Command::Create { rows: 2, cols: 3, .. }));
    ///
    /// assert!(matches!(
    ///     Command::parse(&["create", "A", "2"]),
    ///     Err(ShellError::Arity { expected: 3, found: 2, .. })
    /// ));
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ShellError> {
        let Some((head, args)) = tokens.split_first() else {
            return Err(crate::tokenize::TokenizeError::Empty.into());
        };
        let head = head.as_ref();
        let kind = CommandKind::from_name(head).ok_or_else(|| ShellError::UnknownCommand {
            name: head.to_string(),
        })?;
        let expected = kind.spec().arity;
        if args.len() != expected {
            return Err(ShellError::Arity {
                command: kind,
                expected,
                found: args.len(),
            });
        }
        let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();

        let cmd = match kind {
            CommandKind::Display => Self::Display {
                name: name_arg(args[0])?,
            },
            CommandKind::Create => Self::Create {
                name: name_arg(args[0])?,
                rows: number_arg("rows", args[1])?,
                cols: number_arg("cols", args[2])?,
            },
            CommandKind::Random => Self::Random {
                name: name_arg(args[0])?,
                lo: number_arg("lo", args[1])?,
                hi: number_arg("hi", args[2])?,
            },
            CommandKind::Add => Self::Add {
                a: name_arg(args[0])?,
                b: name_arg(args[1])?,
                dest: name_arg(args[2])?,
            },
            CommandKind::Duplicate => Self::Duplicate {
                src: name_arg(args[0])?,
                dest: name_arg(args[1])?,
            },
            CommandKind::Equal => Self::Equal {
                a: name_arg(args[0])?,
                b: name_arg(args[1])?,
            },
            CommandKind::Shift => Self::Shift {
                name: name_arg(args[0])?,
                // Tokens are never empty, so the default is unreachable.
                direction: ShiftDirection::from_char(args[1].chars().next().unwrap_or('r')),
                amount: number_arg("amount", args[2])?,
            },
            CommandKind::Read => Self::Read {
                path: PathBuf::from(args[0]),
            },
            CommandKind::Write => Self::Write {
                name: name_arg(args[0])?,
            },
        };
        Ok(cmd)
    }

    /// Which command this is.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Display { .. } => CommandKind::Display,
            Self::Create { .. } => CommandKind::Create,
            Self::Random { .. } => CommandKind::Random,
            Self::Add { .. } => CommandKind::Add,
            Self::Duplicate { .. } => CommandKind::Duplicate,
            Self::Equal { .. } => CommandKind::Equal,
            Self::Shift { .. } => CommandKind::Shift,
            Self::Read { .. } => CommandKind::Read,
            Self::Write { .. } => CommandKind::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intmat_core::ErrorKind;

    #[test]
    fn grammar_covers_every_kind_once() {
        let g = grammar();
        assert_eq!(g.len(), 9);
        for (name, spec) in g {
            assert_eq!(spec.kind.name(), *name);
            assert_eq!(CommandKind::from_name(name), Some(spec.kind));
        }
    }

    #[test]
    fn arities_match_the_command_table() {
        let expect = [
            ("display", 1),
            ("create", 3),
            ("random", 3),
            ("add", 3),
            ("duplicate", 2),
            ("equal", 2),
            ("shift", 3),
            ("read", 1),
            ("write", 1),
        ];
        for (name, arity) in expect {
            assert_eq!(grammar()[name].arity, arity, "{name}");
        }
    }

    #[test]
    fn help_lists_every_command_with_its_summary() {
        let help = help_text();
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(lines.len(), grammar().len());
        for (line, spec) in lines.iter().zip(grammar().values()) {
            assert!(line.trim_start().starts_with(spec.usage), "{line}");
            assert!(line.trim_end().ends_with(spec.summary), "{line}");
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(matches!(
            Command::parse(&["Display", "A"]),
            Err(ShellError::UnknownCommand { .. })
        ));
        assert!(matches!(
            Command::parse(&["EXIT"]),
            Err(ShellError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn every_command_rejects_wrong_arity() {
        for (name, spec) in grammar() {
            let mut tokens = vec![name.to_string()];
            tokens.extend((0..spec.arity + 1).map(|i| format!("x{i}")));
            let err = Command::parse(tokens.as_slice()).unwrap_err();
            assert!(matches!(err, ShellError::Arity { .. }), "{name}: {err}");
            assert_eq!(err.kind(), ErrorKind::Validation);

            let err = Command::parse(&[*name]).unwrap_err();
            assert!(matches!(err, ShellError::Arity { found: 0, .. }), "{name}");
        }
    }

    #[test]
    fn malformed_numbers_are_validation_errors() {
        for tokens in [
            ["create", "A", "two", "2"],
            ["create", "A", "2", "-1"],
            ["random", "A", "0", "4294967296"],
            ["shift", "A", "l", "1.5"],
            ["create", "A", "+2", "2"],
        ] {
            let err = Command::parse(tokens.as_slice()).unwrap_err();
            assert!(
                matches!(err, ShellError::InvalidNumber { .. }),
                "{tokens:?}: {err}"
            );
        }
    }

    #[test]
    fn oversized_operand_name_is_rejected_at_parse() {
        let long = "n".repeat(50);
        let err = Command::parse(&["display", long.as_str()]).unwrap_err();
        assert!(matches!(err, ShellError::Matrix(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn shift_direction_uses_first_character() {
        let cmd = Command::parse(&["shift", "A", "left", "3"]).unwrap();
        assert_eq!(
            cmd,
            Command::Shift {
                name: MatrixName::new("A").unwrap(),
                direction: ShiftDirection::Left,
                amount: 3
            }
        );
        let cmd = Command::parse(&["shift", "A", "r", "3"]).unwrap();
        assert!(matches!(
            cmd,
            Command::Shift {
                direction: ShiftDirection::Right,
                ..
            }
        ));
    }

    #[test]
    fn read_takes_a_path() {
        let cmd = Command::parse(&["read", "data/A"]).unwrap();
        assert_eq!(
            cmd,
            Command::Read {
                path: PathBuf::from("data/A")
            }
        );
        assert_eq!(cmd.kind(), CommandKind::Read);
    }
}
