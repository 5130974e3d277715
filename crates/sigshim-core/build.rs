use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Cargo hands build scripts the compiler it is using.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    if version.is_empty() {
        println!("cargo:warning=could not determine rustc version; reporting \"unknown\"");
    } else {
        println!("cargo:rustc-env=SIGSHIM_RUSTC_VERSION={version}");
    }
}
