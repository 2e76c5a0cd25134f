//! End-to-end command scenarios against a fresh table.

use std::path::PathBuf;

use intmat_codec::read_matrix_file;
use intmat_core::{ErrorKind, MatrixName};
use intmat_shell::{Interpreter, Outcome, ShellConfig, ShellError};
use intmat_table::{MatrixTable, TableConfig};
use intmat_test_utils::scratch_dir;

struct Session {
    interp: Interpreter,
    table: MatrixTable,
}

impl Session {
    fn new(label: &str, capacity: usize) -> Self {
        Self::in_dir(scratch_dir(label), capacity)
    }

    fn in_dir(data_dir: PathBuf, capacity: usize) -> Self {
        let config = ShellConfig {
            table: TableConfig::new(capacity),
            data_dir,
            seed: Some(0x5eed),
            ..ShellConfig::default()
        };
        let table = MatrixTable::new(config.table.clone()).unwrap();
        Self {
            interp: Interpreter::new(config).unwrap(),
            table,
        }
    }

    fn ok(&mut self, line: &str) -> Outcome {
        self.interp
            .execute_line(&mut self.table, line)
            .unwrap_or_else(|e| panic!("`{line}` failed: {e}"))
    }

    fn err(&mut self, line: &str) -> ShellError {
        match self.interp.execute_line(&mut self.table, line) {
            Ok(outcome) => panic!("`{line}` unexpectedly succeeded: {outcome}"),
            Err(e) => e,
        }
    }

    fn names(&self) -> Vec<String> {
        self.table
            .iter()
            .map(|(_, m)| m.name().to_string())
            .collect()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.interp.config().data_dir);
    }
}

#[test]
fn read_command_restores_written_data() {
    let mut writer = Session::new("scenario-read", 10);
    writer.ok("create A 2 2");
    writer.ok("random A 1 9");
    writer.ok("write A");
    let saved = writer.table.lookup("A").unwrap().clone();
    writer.ok("shift A l 1");

    let mut reader = Session::in_dir(writer.interp.config().data_dir.clone(), 10);
    assert_eq!(
        reader.ok("read A"),
        Outcome::Read {
            name: MatrixName::new("A").unwrap()
        }
    );
    assert_eq!(reader.table.lookup("A").unwrap(), &saved);
    assert_ne!(reader.table.lookup("A").unwrap(), writer.table.lookup("A").unwrap());

    reader.ok("duplicate A A2");
    reader.ok("shift A2 l 1");
    assert_eq!(
        reader.table.lookup("A2").unwrap().data(),
        writer.table.lookup("A").unwrap().data()
    );
}

#[test]
fn read_under_a_live_name_is_shadowed_by_the_earlier_slot() {
    let mut s = Session::new("scenario-shadow", 10);
    s.ok("create A 2 2");
    s.ok("random A 1 9");
    s.ok("write A");
    let saved = s.table.lookup("A").unwrap().clone();
    s.ok("shift A l 1");
    let shifted = s.table.lookup("A").unwrap().clone();

    s.ok("read A");
    assert_eq!(s.names(), ["A", "A"]);
    assert_eq!(s.table.lookup("A").unwrap(), &shifted);
    let (_, second) = s.table.iter().nth(1).unwrap();
    assert_eq!(second, &saved);
}

#[test]
fn written_file_read_back_as_a2_compares_equal() {
    let mut s = Session::new("scenario-rw", 10);
    s.ok("create A 2 2");
    s.ok("random A 0 9");
    s.ok("write A");

    let mut copy = read_matrix_file(&s.interp.config().data_dir.join("A")).unwrap();
    copy.rename("A2").unwrap();
    let _ = s.table.insert(copy);

    assert_eq!(s.ok("equal A A2"), Outcome::Compared { same: true });
    s.ok("shift A l 1");
    let a = s.table.lookup("A").unwrap();
    let same = a.data().iter().all(|&v| v == 0);
    let expected = Outcome::Compared { same };
    assert_eq!(s.ok("equal A A2"), expected);
}

#[test]
fn mismatched_add_creates_nothing() {
    let mut s = Session::new("scenario-add", 10);
    s.ok("create X 2 2");
    s.ok("create Y 3 3");
    let err = s.err("add X Y Z");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(s.table.find_by_name("Z").is_none());
    assert_eq!(s.names(), ["X", "Y"]);
    assert_eq!(s.table.insertions(), 2);
}

#[test]
fn add_rejects_a_single_differing_dimension() {
    let mut s = Session::new("scenario-add-dim", 10);
    s.ok("create X 2 3");
    s.ok("create Y 2 4");
    s.ok("create W 3 3");
    assert!(matches!(s.err("add X Y Z"), ShellError::Matrix(_)));
    assert!(matches!(s.err("add X W Z"), ShellError::Matrix(_)));
    assert!(s.table.find_by_name("Z").is_none());
}

#[test]
fn equal_reports_different_shapes_as_different() {
    let mut s = Session::new("scenario-equal", 10);
    s.ok("create A 1 4");
    s.ok("create B 2 2");
    assert_eq!(s.ok("equal A B"), Outcome::Compared { same: false });
}

#[test]
fn lookup_is_exact() {
    let mut s = Session::new("scenario-exact", 10);
    s.ok("create A 1 1");
    assert_eq!(s.err("display AB").kind(), ErrorKind::Lookup);
    s.ok("create AB 1 1");
    s.ok("random AB 5 5");
    assert_eq!(s.table.lookup("A").unwrap().data(), &[0]);
}

#[test]
fn duplicate_copies_from_named_source() {
    let mut s = Session::new("scenario-dup", 10);
    s.ok("create A 2 2");
    s.ok("random A 100 200");
    s.ok("create B 3 3");
    s.ok("duplicate A C");
    let a = s.table.lookup("A").unwrap().clone();
    let c = s.table.lookup("C").unwrap();
    assert_eq!(c.shape(), a.shape());
    assert_eq!(c.data(), a.data());
}

#[test]
fn eleventh_insert_evicts_the_first() {
    let mut s = Session::new("scenario-evict", 10);
    for i in 0..10 {
        s.ok(&format!("create M{i} 1 1"));
    }
    s.ok("create M10 1 1");
    assert_eq!(s.err("display M0").kind(), ErrorKind::Lookup);
    assert_eq!(s.table.find_by_name("M10").map(|slot| slot.get()), Some(0));
    assert_eq!(s.table.len(), 10);
}

#[test]
fn rejected_lines_leave_the_table_unchanged() {
    let mut s = Session::new("scenario-reject", 10);
    s.ok("create A 2 2");
    s.ok("random A 1 3");
    let before = s.table.lookup("A").unwrap().clone();

    for line in [
        "",
        "frobnicate A",
        "create B 2",
        "create B two 2",
        "random A 9 1",
        "shift A l",
        "add A A",
        "write",
        "create B 4294967296 1",
        "create ../x 1 1",
        "write ../A",
    ] {
        let err = s.err(line);
        assert_eq!(err.kind(), ErrorKind::Validation, "{line:?}: {err}");
    }
    assert_eq!(s.names(), ["A"]);
    assert_eq!(s.table.insertions(), 1);
    assert_eq!(s.table.lookup("A").unwrap(), &before);
}

#[test]
fn run_line_reports_errors_on_the_sink() {
    let mut s = Session::new("scenario-sink", 10);
    let mut out = Vec::new();
    s.interp
        .run_line(&mut s.table, "frobnicate", &mut out)
        .unwrap();
    s.interp
        .run_line(&mut s.table, "equal A B", &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Not a command in this application: frobnicate\nMatrix (A) doesn't exist\n"
    );
}

#[test]
fn overlong_lines_are_rejected_before_parsing() {
    let mut s = Session::new("scenario-limits", 10);
    let line = vec!["x"; 51].join(" ");
    assert!(matches!(s.err(&line), ShellError::Tokenize(_)));
    let token = "y".repeat(26);
    assert!(matches!(s.err(&format!("display {token}")), ShellError::Tokenize(_)));
}

#[test]
fn read_of_corrupt_file_inserts_nothing() {
    let mut s = Session::new("scenario-corrupt", 10);
    std::fs::write(s.interp.config().data_dir.join("bad"), [2, 0, 0]).unwrap();
    let err = s.err("read bad");
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(s.table.is_empty());
}
