// Build script that copies the static site (page, styles, frame assets) to
// `dist/`. The wasm bundle itself is produced by `wasm-pack` into
// `static/pkg`, see `src/main.rs`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {e}");
        return;
    }
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
