fn main() {
    // Stamp the binary with the build time, surfaced in the SYSTEM.STATUS panel
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
