use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn pdfjpeg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdfjpeg"))
}

#[test]
fn test_console_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out");

    let mut data = vec![0xFF, 0xD8];
    data.extend(std::iter::repeat_n(0x00, 10_001));
    data.extend_from_slice(&[0xFF, 0xD9, 0xFF, 0xD8, 0xFF, 0xD9]);
    fs::write(&input, &data).unwrap();

    let result = pdfjpeg().arg(&input).arg("-o").arg(&output).output().unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Extracting images from {}...", input.display()),
            format!(
                "Extracted: {} (10005 bytes)",
                output.join("image_001.jpg").display()
            ),
            "Total extracted images: 1".to_string(),
        ]
    );
}

#[test]
fn test_missing_input_reports_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.pdf");

    let result = pdfjpeg()
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.lines().any(|l| l.starts_with("Error: cannot read input")));
    assert!(!stdout.contains("Total extracted images"));
}

#[test]
fn test_manifest_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let manifest = dir.path().join("manifest.json");

    let mut data = vec![0xFF, 0xD8];
    data.extend(std::iter::repeat_n(0x7F, 600));
    data.extend_from_slice(&[0xFF, 0xD9]);
    fs::write(&input, &data).unwrap();

    let result = pdfjpeg()
        .arg(&input)
        .args(["--min-bytes", "100", "--manifest"])
        .arg(&manifest)
        .arg("-o")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();
    assert!(result.status.success());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(json["threshold"], 100);
    assert_eq!(json["images"][0]["file_size"], 604);
    assert_eq!(json["images"][0]["source_offset"], "0x0000000000000000");
}

#[test]
fn test_total_printed_when_manifest_write_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out");
    let manifest = dir.path().join("manifest.json");
    fs::create_dir_all(&manifest).unwrap();

    let mut data = vec![0xFF, 0xD8];
    data.extend(std::iter::repeat_n(0x00, 12_000));
    data.extend_from_slice(&[0xFF, 0xD9]);
    fs::write(&input, &data).unwrap();

    let result = pdfjpeg()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--manifest")
        .arg(&manifest)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8(result.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Extracted: "));
    assert_eq!(lines[2], "Total extracted images: 1");
    assert!(lines[3].starts_with("Error: cannot write manifest"));
    assert!(output.join("image_001.jpg").is_file());
}
