use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn write_menu(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn tacobelly() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tacobelly"))
}

#[test]
fn test_json_output_with_budget_flag() {
    let menu = write_menu("Item,Price,Calories\nTaco,2.00,100\n");

    let output = tacobelly()
        .args(["--json", "--budget", "10"])
        .arg("--menu")
        .arg(menu.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["order"]["Taco"], 5);
    assert_eq!(value["total_calories"], 500);
}

#[test]
fn test_json_output_keeps_menu_order() {
    let menu = write_menu("Item,Price,Calories\nZesty Nachos,3.00,400\nApple Empanada,2.00,100\n");

    let output = tacobelly()
        .args(["--json", "--budget", "6"])
        .arg("--menu")
        .arg(menu.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zesty = stdout.find("Zesty Nachos").unwrap();
    let apple = stdout.find("Apple Empanada").unwrap();
    assert!(zesty < apple, "menu order lost: {}", stdout);
}

#[test]
fn test_budget_read_from_stdin() {
    let menu = write_menu("Item,Price,Calories\nTaco,2.00,100\nBurrito,3.00,400\n");

    let mut child = tacobelly()
        .arg("--json")
        .arg("--menu")
        .arg(menu.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"6\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["order"]["Burrito"], 2);
    assert_eq!(value["total_calories"], 800);
}

#[test]
fn test_no_solution_is_not_an_error() {
    let menu = write_menu("Item,Price,Calories\nTaco,2.00,100\n");

    let output = tacobelly()
        .args(["--json", "--budget=-1"])
        .arg("--menu")
        .arg(menu.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["order"], "No solution found");
    assert_eq!(value["total_calories"], 0);
}

#[test]
fn test_invalid_budget_fails() {
    let menu = write_menu("Item,Price,Calories\nTaco,2.00,100\n");

    let output = tacobelly()
        .args(["--budget", "lots"])
        .arg("--menu")
        .arg(menu.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid budget"));
}

#[test]
fn test_missing_menu_fails() {
    let output = tacobelly()
        .args(["--budget", "5", "--menu", "no/such/menu.csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_menu_subcommand_lists_items() {
    let menu = write_menu("Item,Price,Calories\nTaco,2.00,100\nNachos,3.50,700\n");

    let output = tacobelly()
        .arg("--menu")
        .arg(menu.path())
        .arg("menu")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Nachos"));
    assert!(stdout.contains("Taco"));
}
