// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for headless rendering.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
