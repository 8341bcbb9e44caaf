// Build script for sysprobe - embeds version at compile time

fn main() {
    // Release builds may stamp their own version; otherwise use Cargo.toml
    let version =
        std::env::var("SYSPROBE_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=SYSPROBE_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=SYSPROBE_VERSION");
}
