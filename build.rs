fn main() {
    // CI sets GIRUS_BUILD_NUMBER; local builds read the checked-in file.
    let build_number = std::env::var("GIRUS_BUILD_NUMBER")
        .or_else(|_| std::fs::read_to_string("BUILD_NUMBER"))
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "0".to_string());

    println!("cargo:rustc-env=BUILD_NUMBER={build_number}");
    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=GIRUS_BUILD_NUMBER");
}
