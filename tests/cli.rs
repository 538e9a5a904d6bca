use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

const SCENE: &str = r#"
float       z_near   = 3.0f;
float       z_far    = z_near + 10.0f;
glm::vec3   move_cam = { 0.0f, 0.0f, -2.0f };
std::string title    = "demo";
bool        enabled  = true;
"#;

fn hotprops(file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hotprops")).arg(file)
                                                .args(args)
                                                .env_remove("RUST_LOG")
                                                .output()
                                                .expect("Failed to run hotprops")
}

fn scene() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("runtime.properties");
    fs::write(&path, SCENE).expect("Failed to write properties file");
    (dir, path)
}

#[test]
fn prints_all_properties_sorted() {
    let (_dir, path) = scene();
    let output = hotprops(&path, &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "bool enabled = true\n\
                glm::vec3 move_cam = 0, 0, -2\n\
                std::string title = demo\n\
                float z_far = 13\n\
                float z_near = 3\n");
}

#[test]
fn prints_requested_properties_in_order() {
    let (_dir, path) = scene();
    let output = hotprops(&path, &["--get", "z_near", "-g", "title"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "float z_near = 3\nstd::string title = demo\n");
}

#[test]
fn unknown_property_fails() {
    let (_dir, path) = scene();
    let output = hotprops(&path, &["--get", "move_cma"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("best match is [move_cam]"), "{stderr}");
}

#[test]
fn broken_file_fails() {
    let (_dir, path) = scene();
    fs::write(&path, "float z_near = 3.0f").unwrap();
    let output = hotprops(&path, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't load properties file"), "{stderr}");
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = hotprops(&dir.path().join("missing.properties"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.properties"));
}
