use std::path::Path;
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                None
            }
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=STROKEPAD_GIT_HASH={hash}");

    for candidate in [".git/HEAD", ".git/refs", ".git/packed-refs"] {
        if Path::new(candidate).exists() {
            println!("cargo:rerun-if-changed={candidate}");
        }
    }
}
