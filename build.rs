use glob::glob;
use std::env;
use std::fs;
use std::path::Path;

// Copies the steam_api redistributable that steamworks-sys unpacks into its
// build dir next to the produced binary, so the demo can be launched
// directly from target/. Skipped when the artifact is not there yet (first
// clean build pass).
fn main() {
    let Ok(entries) = glob("./target/**/build/steamworks-sys-*/out/*") else {
        return;
    };

    let Some(src_path) = entries.filter_map(Result::ok).next() else {
        println!("cargo:warning=steam_api redistributable not found yet; rebuild to place it next to the binary");
        return;
    };

    let Ok(out_dir) = env::var("OUT_DIR") else {
        return;
    };

    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent());

    if let (Some(target_dir), Some(file_name)) = (target_dir, src_path.file_name()) {
        let _ = fs::copy(&src_path, target_dir.join(file_name));
    }
}
