use chrono::{Datelike, Utc};

fn main() {
    let now = Utc::now();

    // stamped into the page footer
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/content.rs");
}
