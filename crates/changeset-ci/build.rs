use std::process::Command;

use chrono::Utc;

const TAG_PREFIX: &str = "changeset-ci@v";

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");

    let version_string = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) if !is_tagged_release(version) => {
            let build_date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            format!("{version}+{hash}.{build_date}")
        }
        Some(_) => version.to_owned(),
        None => format!("{version}+unknown"),
    };

    println!("cargo:rustc-env=CHANGESET_CI_VERSION={version_string}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8(output.stdout).ok()?.trim().to_owned())
}

fn is_tagged_release(version: &str) -> bool {
    let expected = format!("{TAG_PREFIX}{version}");
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|tag| tag.trim() == expected))
}
