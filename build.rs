// Build script to extract version from Cargo.toml
// and optionally override patch version from CI/CD pipeline

use std::env;

fn main() {
    // Get version from Cargo.toml
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");

    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        panic!("Invalid version format in Cargo.toml: {}", version);
    }

    let (major, minor, patch) = (parts[0], parts[1], parts[2]);

    // Release builds stamp the patch segment with the pipeline run number
    let final_patch = env::var("CONTRACTS_PATCH_VERSION").unwrap_or_else(|_| patch.to_string());

    // Embedded into the binary and sent as the HTTP User-Agent
    println!(
        "cargo:rustc-env=CONTRACTS_VERSION={}.{}.{}",
        major, minor, final_patch
    );

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=CONTRACTS_PATCH_VERSION");
}
