use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=fixtures");

    // 获取项目根目录
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let fixtures_path = Path::new(&manifest_dir).join("fixtures");

    if !fixtures_path.exists() {
        eprintln!("Warning: fixtures directory not found!");
        eprintln!("The server will start with empty collections.");

        create_fallback_fixtures(&fixtures_path);
    }
}

fn create_fallback_fixtures(fixtures_path: &Path) {
    fs::create_dir_all(fixtures_path).expect("Failed to create fixtures directory");

    // 空集合，rust-embed 至少需要一个存在的目录
    for name in ["classes", "students", "assignments", "notifications"] {
        fs::write(fixtures_path.join(format!("{name}.json")), "[]")
            .expect("Failed to write fallback fixture");
    }
}
