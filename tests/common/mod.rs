#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const SPAYD: &str =
    "SPD*1.0*ACC:CZ7603000000000076327632*AM:200.00*CC:CZK*X-VS:1234567890*MSG:CLOVEK V TISNI";

pub const SPAYD_MIME: &str = "application/x-shortpaymentdescriptor";

/// Writes an app registry with the given `(id, handled MIME type)` entries.
pub fn write_registry(apps: &[(&str, &str)]) -> NamedTempFile {
    let entries: Vec<serde_json::Value> = apps
        .iter()
        .map(|(id, mime)| serde_json::json!({ "id": id, "handles": [mime] }))
        .collect();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::Value::Array(entries)).unwrap();
    file
}

pub fn read_json_lines(bytes: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| serde_json::from_str(line).expect("launch request is JSON"))
        .collect()
}

pub fn qr_path(cache_dir: &Path) -> std::path::PathBuf {
    cache_dir.join("qr").join("transfer-payment-qr.png")
}
