use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn plain_respects_indent_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.hm");
    fs::write(&input_path, "#A\nBody\n").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[render.plain]
indent_string = "  "
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("hashmark");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("plain")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert().success().stdout("\n#A\n  Body\n  ");
}

#[test]
fn extra_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.hm");
    fs::write(&input_path, "#A\nBody\n").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[render.plain]\nindent_string = \"  \"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hashmark");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("plain")
        .arg("--config")
        .arg(config_path.as_os_str())
        .arg("--extra-indent-string")
        .arg("..");

    cmd.assert().success().stdout("\n#A\n..Body\n..");
}

#[test]
fn default_format_comes_from_local_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.hm");
    fs::write(&input_path, "**b**").unwrap();
    fs::write(
        dir.path().join("hashmark.toml"),
        "[convert]\ndefault_format = \"wiki\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("hashmark");
    cmd.current_dir(dir.path()).arg(input_path.as_os_str());

    cmd.assert().success().stdout("'''b'''");
}

#[test]
fn html_standalone_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.hm");
    fs::write(&input_path, "x").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[render.html]\nstandalone = true\ntitle = \"Configured\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("hashmark");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("<title>Configured</title>"));
    assert!(stdout.contains("<body>\n<p>x</p>\n</body>"));
}

#[test]
fn broken_config_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[render.plain\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hashmark");
    cmd.arg("-")
        .arg("--to")
        .arg("plain")
        .arg("--config")
        .arg(config_path.as_os_str())
        .write_stdin("x");

    cmd.assert().failure();
}
