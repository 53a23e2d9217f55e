//! End-to-end runs with a TOML group configuration.

use std::io::Write;

use clap::Parser;
use tricheck_demo::{Cli, DemoError, run};

fn run_with(args: &[&str]) -> Result<String, DemoError> {
    let cli = Cli::try_parse_from(std::iter::once("tricheck-demo").chain(args.iter().copied()))
        .expect("valid args");
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn custom_group_click_sequence() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
parent_label = "Toppings"

[[children]]
label = "Cheese"
checked = true

[[children]]
label = "Olives"

[[children]]
label = "Basil"
"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let out = run_with(&["--config", path, "click", "1", "2", "p"]).unwrap();
    let frames: Vec<&str> = out.split("> click ").collect();
    assert_eq!(frames.len(), 4);
    assert!(frames[0].starts_with("[-] Toppings"));
    assert!(frames[2].contains("[x] Toppings"));
    // Parent was checked, so the last click clears everything.
    assert!(frames[3].starts_with("parent\n[ ] Toppings"));
}

#[test]
fn invalid_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "parent_label = \"Empty\"").unwrap();
    let path = file.path().to_str().unwrap();

    let err = run_with(&["--config", path, "show"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("at least one child"));
}

#[test]
fn out_of_range_click_fails_with_group_error() {
    let err = run_with(&["click", "7"]).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}
