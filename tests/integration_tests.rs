use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

struct Run {
    stdout: String,
    stderr: String,
}

fn run_in(dir: &Path) -> Run {
    let mut cmd = Command::cargo_bin("sales_report").unwrap();
    let output = cmd
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed");

    Run {
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}

fn warning_lines(stderr: &str) -> Vec<&str> {
    stderr.lines().filter(|line| line.contains("WARN")).collect()
}

fn read_report(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

fn compare_reports(scenario: &str) {
    let dir = tempfile::tempdir().unwrap();
    copy_tree(&Path::new("tests/fixtures").join(scenario), dir.path());

    run_in(dir.path());

    let expected = Path::new("tests/expected").join(scenario);
    for report in ["reporte_vendedores.csv", "reporte_productos.csv"] {
        assert_eq!(
            read_report(dir.path(), report),
            fs::read_to_string(expected.join(report)).unwrap(),
            "{} mismatch",
            report
        );
    }
}

#[test]
fn test_basic_scenario() {
    compare_reports("basic");
}

#[test]
fn test_multi_seller_scenario() {
    compare_reports("multi_seller");
}

#[test]
fn test_basic_scenario_warns_once_for_negative_quantity() {
    let dir = tempfile::tempdir().unwrap();
    copy_tree(Path::new("tests/fixtures/basic"), dir.path());

    let run = run_in(dir.path());

    let warnings = warning_lines(&run.stderr);
    assert_eq!(warnings.len(), 1, "stderr:\n{}", run.stderr);
    assert!(warnings[0].contains("Negative quantity"));
    assert!(warnings[0].contains("vendedor_ana.csv"));
    assert!(warnings[0].contains("line 3"));
    assert!(run.stdout.contains("Reports generated!"));
}

#[test]
fn test_unknown_product_is_silent() {
    let dir = write_files(&[
        ("productos.csv", "P1;Widget;10.00\n"),
        ("vendedores.csv", "CC;100;Ana;Lopez\n"),
        ("vendedor_a", "H;100\nP9;2\nP1\n"),
    ]);

    let run = run_in(dir.path());

    assert!(warning_lines(&run.stderr).is_empty(), "stderr:\n{}", run.stderr);
    assert_eq!(read_report(dir.path(), "reporte_vendedores.csv"), "Ana Lopez;0.00\n");
}

#[test]
fn test_invalid_quantity_warns_with_file_and_line() {
    let dir = write_files(&[
        ("productos.csv", "P1;Widget;10.00\n"),
        ("vendedores.csv", "CC;100;Ana;Lopez\n"),
        ("vendedor_a", "H;100\nP1;1\nP1;two\n"),
    ]);

    let run = run_in(dir.path());

    let warnings = warning_lines(&run.stderr);
    assert_eq!(warnings.len(), 1, "stderr:\n{}", run.stderr);
    assert!(warnings[0].contains("vendedor_a"));
    assert!(warnings[0].contains("line 3"));
    assert_eq!(read_report(dir.path(), "reporte_vendedores.csv"), "Ana Lopez;10.00\n");
}

#[test]
fn test_file_level_warnings_do_not_stop_the_run() {
    let dir = write_files(&[
        ("productos.csv", "P1;Widget;10.00\nP2;Broken;-3.00\n"),
        ("vendedores.csv", "CC;100;Ana;Lopez\n"),
        ("vendedor_empty", ""),
        ("vendedor_header", "only-one-field\nP1;1\n"),
        ("vendedor_ghost", "H;999\nP1;1\n"),
        ("ventas/vendedor_ok", "H;100\nP2;1\nP1;2\n"),
    ]);

    let run = run_in(dir.path());

    let warnings = warning_lines(&run.stderr);
    assert_eq!(warnings.len(), 4, "stderr:\n{}", run.stderr);
    assert!(run.stderr.contains("Empty file - vendedor_empty"));
    assert!(run.stderr.contains("Invalid header - vendedor_header"));
    assert!(run.stderr.contains("Seller not found - 999"));
    assert!(run.stderr.contains("Negative price for product Broken"));
    assert_eq!(read_report(dir.path(), "reporte_vendedores.csv"), "Ana Lopez;20.00\n");
    assert_eq!(
        read_report(dir.path(), "reporte_productos.csv"),
        "Widget;10.00\nBroken;-3.00\n"
    );
}

#[test]
fn test_malformed_catalog_aborts_without_reports() {
    let dir = write_files(&[
        ("productos.csv", "P1;Widget;ten\n"),
        ("vendedores.csv", "CC;100;Ana;Lopez\n"),
        ("vendedor_a", "H;100\nP1;1\n"),
    ]);

    let run = run_in(dir.path());

    assert!(run.stderr.contains("ERROR:"));
    assert!(run.stderr.contains("invalid number 'ten'"));
    assert!(!run.stdout.contains("Reports generated!"));
    assert!(!dir.path().join("reporte_vendedores.csv").exists());
    assert!(!dir.path().join("reporte_productos.csv").exists());
}

#[test]
fn test_reports_are_sorted_descending() {
    let dir = write_files(&[
        ("productos.csv", "A;Alpha;1.00\nB;Beta;2.00\nC;Gamma;3.00\n"),
        (
            "vendedores.csv",
            "CC;1;Uno;Primero\nCC;2;Dos;Segundo\nCC;3;Tres;Tercero\n",
        ),
        ("vendedor_1", "H;1\nA;5\n"),
        ("vendedor_2", "H;2\nC;4\nB;1\n"),
        ("vendedor_3", "H;3\nB;2\n"),
    ]);

    run_in(dir.path());

    let sellers = read_report(dir.path(), "reporte_vendedores.csv");
    let revenues: Vec<f64> = sellers
        .lines()
        .map(|line| line.rsplit(';').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(revenues.len(), 3);
    assert!(revenues.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(sellers.starts_with("Dos Segundo;14.00\n"));

    // units sold: Alpha 5, Gamma 4, Beta 3
    assert_eq!(
        read_report(dir.path(), "reporte_productos.csv"),
        "Alpha;1.00\nGamma;3.00\nBeta;2.00\n"
    );
}
