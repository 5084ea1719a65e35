#![deny(warnings)]

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-check-cfg=cfg(build_hasher_hash_one)");
    if let Some(true) = version_check::is_min_version("1.71.0") {
        println!("cargo:rustc-cfg=build_hasher_hash_one");
    }
}
