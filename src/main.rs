//! Host-side helper for the hero page.
//!
//! `hero-frames build` compiles the wasm bundle into `static/pkg`,
//! `hero-frames check-frames [dir]` verifies the frame assets match the
//! configured path convention, and `hero-frames serve [port]` (the default)
//! does both and serves `static/` locally.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

use hero_frames::HeroConfig;

const STATIC_DIR: &str = "static";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("serve");

    let result = match command {
        "build" => build_wasm(),
        "check-frames" => {
            let root = args.get(1).map_or_else(|| PathBuf::from(STATIC_DIR), PathBuf::from);
            check_frames(&root, &HeroConfig::default())
        }
        "serve" => {
            let port = args.get(1).map(String::as_str).unwrap_or("8000");
            serve(port)
        }
        other => Err(format!(
            "unknown command `{other}` (expected build, check-frames or serve)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn build_wasm() -> Result<(), String> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => Ok(()),
        Ok(_) => Err("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).".into()),
        Err(_) => Err("wasm-pack not found in PATH.".into()),
    }
}

/// The page expects exactly `frame_count` files named by the frame path
/// convention; anything missing would render as a skipped frame.
fn check_frames(root: &Path, config: &HeroConfig) -> Result<(), String> {
    let missing: Vec<PathBuf> = (0..config.frame_count)
        .map(|i| config.frame_path.local_path(root, i))
        .filter(|p| !p.is_file())
        .collect();

    if missing.is_empty() {
        println!(
            "{} frames present under {}",
            config.frame_count,
            root.display()
        );
        return Ok(());
    }
    for path in &missing {
        eprintln!("missing frame: {}", path.display());
    }
    Err(format!(
        "{} of {} frames missing",
        missing.len(),
        config.frame_count
    ))
}

fn serve(port: &str) -> Result<(), String> {
    if let Err(msg) = build_wasm() {
        eprintln!("{msg} Serving possibly stale artifacts.");
    }
    if let Err(msg) = check_frames(Path::new(STATIC_DIR), &HeroConfig::default()) {
        eprintln!("warning: {msg}");
    }

    println!("Launching local server at http://127.0.0.1:{port} …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", port, "--directory", STATIC_DIR])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to start http server: {e}"))?;

    // Keep process alive while the server runs
    loop {
        match server.try_wait() {
            Ok(Some(status)) => return Err(format!("http server exited: {status}")),
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(e) => return Err(format!("http server: {e}")),
        }
    }
}
