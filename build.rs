fn main() {
    // Stamp the binary with the date it was built, shown in the site footer
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
