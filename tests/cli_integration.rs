use std::path::Path;
use std::process::{Command, Output};

fn slcgen(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slcgen"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run slcgen")
}

#[test]
fn test_list_prints_the_glyph_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &["--list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 814);
    assert_eq!(lines[0], "U+0020 space");
    assert!(lines.contains(&"U+2500 SF100000"));
    assert!(!dir.path().join("out.sfd").exists());
}

#[test]
fn test_writes_default_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let text = std::fs::read_to_string(dir.path().join("out.sfd")).unwrap();
    assert!(text.starts_with("SplineFontDB: 3.0\n"));
    assert!(text.contains("\nBeginChars: 1114112 814\n"));
    assert!(text.ends_with("EndChars\nEndSplineFont\n"));
}

#[test]
fn test_metrics_and_output_flags() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &["-a", "900", "-d", "300", "-w", "600", "-o", "tall.sfd", "--verify"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Verified 814 glyphs"));
    let text = std::fs::read_to_string(dir.path().join("tall.sfd")).unwrap();
    assert!(text.contains("\nAscent: 900\nDescent: 300\n"));
    assert!(text.contains("\nWidth: 600\n"));
}

#[test]
fn test_stdout_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &["-o", "-"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.starts_with("SplineFontDB: 3.0\n"));
    assert!(text.ends_with("EndSplineFont\n"));
    assert!(!dir.path().join("-").exists());
}

#[test]
fn test_bad_arguments_exit_with_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    for args in [&["--ascent", "-1"][..], &["--line-ends", "round"], &["--bogus"]] {
        let out = slcgen(dir.path(), args);
        assert_eq!(out.status.code(), Some(2), "{args:?}");
    }
    assert!(!dir.path().join("out.sfd").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &["-o", "missing/dir/out.sfd"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error:"));
}

#[test]
fn test_settings_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("slc.json");
    std::fs::write(&settings, r#"{ "metrics": { "width": 500 }, "output": "from-settings.sfd" }"#).unwrap();
    let out = slcgen(dir.path(), &["--config", settings.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let text = std::fs::read_to_string(dir.path().join("from-settings.sfd")).unwrap();
    assert!(text.contains("\nWidth: 500\n"));
}

#[test]
fn test_broken_explicit_settings_fail() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("slc.json");
    std::fs::write(&settings, "{ not json").unwrap();
    let out = slcgen(dir.path(), &["--config", settings.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
}

// dirs only honors XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_new_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let out = slcgen(dir.path(), &["--new-config"]);
    assert!(out.status.success());
    let settings = dir.path().join(".config").join("slcgen").join("settings.json");
    let text = std::fs::read_to_string(settings).unwrap();
    assert!(text.contains("\"metrics\""));
    assert!(text.contains("\"arc_style\": \"polygon\""));
}
