fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let env = std::env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    if os != "linux" || env != "gnu" {
        return;
    }

    // Applies to this package's own link targets (the unit-test harness);
    // final binaries get the same flags from their own build wiring. The
    // tests-only variant of this instruction requires a [[test]] target and
    // is rejected for a crate whose tests all live in #[cfg(test)] modules.
    if std::env::var_os("CARGO_FEATURE_PORTABLE").is_some() {
        println!("cargo:rustc-link-arg=-Wl,--wrap=fcntl");
        println!("cargo:rustc-link-arg=-Wl,--wrap=fcntl64");
    }
}
