#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Import resolution against a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use infact_eval::{EvalErrorKind, Interpreter, Registry};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn interpreter() -> Interpreter {
    Interpreter::new(Registry::new())
}

/// A scratch directory in the working directory and its relative path, so
/// imports "as given" can reach it.
fn relative_tempdir() -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("imports")
        .tempdir_in(".")
        .unwrap();
    let rel = PathBuf::from(dir.path().file_name().unwrap());
    (dir, rel)
}

#[test]
fn import_evaluates_in_place() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "dims.infact", "int dims = 3;");
    let main = write(
        dir.path(),
        "main.infact",
        "import \"dims.infact\";\nsize = dims;\ndims = 4;",
    );

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<i64>("size").unwrap(), 3);
    assert_eq!(interp.get::<i64>("dims").unwrap(), 4);
}

#[test]
fn imported_file_sees_importer_bindings() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "conf/model.infact", "doubled = {base, base};");
    let main = write(
        dir.path(),
        "main.infact",
        "base = 2.5;\nimport \"conf/model.infact\";",
    );

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<Vec<f64>>("doubled").unwrap(), [2.5, 2.5]);
}

#[test]
fn nested_imports_resolve_against_their_own_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "conf/dims.infact", "dims = 8;");
    write(dir.path(), "conf/model.infact", "import \"dims.infact\";");
    let main = write(dir.path(), "main.infact", "import \"conf/model.infact\";");

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<i64>("dims").unwrap(), 8);
}

#[test]
fn directory_relative_candidate_wins() {
    let (_guard, root) = relative_tempdir();
    let target = root.join("shared.infact");
    let target = target.display().to_string();

    write(&root, "shared.infact", "from = \"as given\";");
    write(&root.join("conf"), &target, "from = \"next to importer\";");
    let main = write(&root, "conf/main.infact", &format!("import \"{target}\";"));

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<String>("from").unwrap(), "next to importer");
}

#[test]
fn falls_back_to_path_as_given() {
    let (_guard, root) = relative_tempdir();
    let target = root.join("shared.infact");
    let target = target.display().to_string();

    write(&root, "shared.infact", "from = \"as given\";");
    let main = write(&root, "conf/main.infact", &format!("import \"{target}\";"));

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<String>("from").unwrap(), "as given");
}

#[test]
fn directory_candidate_is_not_readable() {
    let (_guard, root) = relative_tempdir();
    let target = root.join("shared.infact");
    let target = target.display().to_string();

    write(&root, "shared.infact", "from = \"as given\";");
    // A directory where the importer-relative file would be.
    fs::create_dir_all(root.join("conf").join(&target)).unwrap();
    let main = write(&root, "conf/main.infact", &format!("import \"{target}\";"));

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<String>("from").unwrap(), "as given");
}

#[test]
fn absolute_import_from_string() {
    let dir = tempfile::tempdir().unwrap();
    let shared = write(dir.path(), "shared.infact", "x = 1;");
    assert!(shared.is_absolute());

    let mut interp = interpreter();
    interp
        .eval_str(&format!("import \"{}\";\ny = x;", shared.display()))
        .unwrap();
    assert_eq!(interp.get::<i64>("y").unwrap(), 1);
}

#[test]
fn missing_import_names_both_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.infact", "a = 1;\nimport \"missing.cfg\";");

    let mut interp = interpreter();
    let err = interp.eval_file(&main).unwrap_err();

    match &err.kind {
        EvalErrorKind::ImportUnreadable { path, candidates } => {
            assert_eq!(path, "missing.cfg");
            assert_eq!(
                candidates,
                &[dir.path().join("missing.cfg"), PathBuf::from("missing.cfg")]
            );
        }
        other => panic!("expected an unreadable import, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!(
            "{}:2:8: cannot read import `missing.cfg` (tried `{}`, `missing.cfg`)",
            main.display(),
            dir.path().join("missing.cfg").display()
        )
    );
    assert_eq!(interp.get::<i64>("a").unwrap(), 1);
}

#[test]
fn cycle_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.infact", "import \"b.infact\";");
    let b = write(dir.path(), "b.infact", "x = 1;\nimport \"a.infact\";");

    let mut interp = interpreter();
    let err = interp.eval_file(&a).unwrap_err();

    match &err.kind {
        EvalErrorKind::ImportCycle(chain) => assert_eq!(chain, &[a.clone(), b.clone(), a.clone()]),
        other => panic!("expected a cycle, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!(
            "{b}:2:8: import cycle: {a} -> {b} -> {a}\n  imported from {a}:1",
            a = a.display(),
            b = b.display()
        )
    );
    // Bindings made before the cycle was found stay.
    assert_eq!(interp.get::<i64>("x").unwrap(), 1);
}

#[test]
fn self_import_is_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.infact", "import \"./a.infact\";");

    let err = interpreter().eval_file(&a).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ImportCycle(ref chain) if chain.len() == 2));
}

#[test]
fn repeated_import_is_not_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "common.infact", "count = 1;");
    write(dir.path(), "left.infact", "import \"common.infact\";\nleft = count;");
    write(dir.path(), "right.infact", "count = 2;\nimport \"common.infact\";\nright = count;");
    let main = write(
        dir.path(),
        "main.infact",
        "import \"left.infact\";\nimport \"right.infact\";",
    );

    let mut interp = interpreter();
    interp.eval_file(&main).unwrap();
    assert_eq!(interp.get::<i64>("left").unwrap(), 1);
    assert_eq!(interp.get::<i64>("right").unwrap(), 1);
}

#[test]
fn import_chain_in_errors() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write(dir.path(), "conf/inner.infact", "ok = 1;\nbad = missing;");
    let outer = write(dir.path(), "conf/outer.infact", "// outer\nimport \"inner.infact\";");
    let main = write(dir.path(), "main.infact", "a = 1;\nb = 2;\nimport \"conf/outer.infact\";");

    let err = interpreter().eval_file(&main).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{}:2:7: undefined variable `missing`\n  imported from {}:2\n  imported from {}:3",
            inner.display(),
            outer.display(),
            main.display()
        )
    );
    assert_eq!(err.imported_from.len(), 2);
}

#[test]
fn interpreter_is_reusable_after_failed_import() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write(dir.path(), "bad.infact", "import \"bad.infact\";");
    let good = write(dir.path(), "good.infact", "import \"bad.infact\";");

    let mut interp = interpreter();
    assert!(interp.eval_file(&bad).is_err());

    fs::write(&bad, "fixed = true;").unwrap();
    interp.eval_file(&good).unwrap();
    assert!(interp.get::<bool>("fixed").unwrap());
}

#[test]
fn missing_top_level_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = interpreter()
        .eval_file(dir.path().join("absent.infact"))
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Io { .. }));
    assert!(err.location.is_none());
}
