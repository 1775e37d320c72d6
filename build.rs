use std::process::Command;

/// Run a git subcommand, returning trimmed stdout when it succeeds.
fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let pkg = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let on_release_tag = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    // Tagged builds report the plain package version, anything else is a dev build
    let version = match git(&["rev-parse", "--short", "HEAD"]) {
        _ if on_release_tag => pkg,
        Some(hash) if !hash.is_empty() => format!("{pkg}-dev+{hash}"),
        _ => format!("{pkg}-dev"),
    };
    println!("cargo:rustc-env=DRAWING_THUMBS_VERSION={version}");
}
