//! Build automation tasks for Quadcade
//!
//! Usage:
//!   cargo xtask build-web     # Build all four games for the web
//!   cargo xtask package-web   # Create a zip of the web build

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Binary name and page title for each game.
const GAMES: [(&str, &str); 4] = [
    ("dodge", "Lane Dodge"),
    ("platformer", "Coin Hop"),
    ("sandbox", "Block Yard"),
    ("rush", "Ring Rush"),
];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Quadcade")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for all games and stage them under dist/web
    BuildWeb {
        /// Mark as dev build (adds a DEV tag to page titles)
        #[arg(long)]
        dev: bool,
    },
    /// Create a zip file of the staged web build
    PackageWeb,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageWeb => package_web(),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// One game page: a canvas plus the macroquad JS loader.
fn game_page(name: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        html, body, canvas {{
            margin: 0;
            padding: 0;
            width: 100%;
            height: 100%;
            overflow: hidden;
            position: absolute;
            background: black;
            z-index: 0;
        }}
    </style>
</head>
<body>
    <canvas id="glcanvas" tabindex="1"></canvas>
    <script src="../mq_js_bundle.js"></script>
    <script>load("{name}.wasm");</script>
</body>
</html>
"#
    )
}

/// Landing page linking to every game.
fn landing_page() -> String {
    let mut links = String::new();
    for (name, title) in GAMES {
        links.push_str(&format!("        <li><a href=\"{name}/\">{title}</a></li>\n"));
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Quadcade</title>
</head>
<body>
    <h1>Quadcade</h1>
    <ul>
{links}    </ul>
</body>
</html>
"#
    )
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root();
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    // Download macroquad JS bundle, shared by all game pages
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    // Stage each game under its own directory
    for (name, title) in GAMES {
        println!("Staging {}...", name);
        let game_dir = dist.join(name);
        std::fs::create_dir_all(&game_dir)?;
        std::fs::copy(
            root.join(format!("target/wasm32-unknown-unknown/release/{}.wasm", name)),
            game_dir.join(format!("{}.wasm", name)),
        )?;

        let title = if dev {
            format!("[DEV] {}", title)
        } else {
            title.to_string()
        };
        std::fs::write(game_dir.join("index.html"), game_page(name, &title))?;
    }

    std::fs::write(dist.join("index.html"), landing_page())?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create a zip of the web build
fn package_web() -> Result<()> {
    // First build web
    build_web(false)?;

    let root = project_root();
    let dist = root.join("dist");
    let zip_path = dist.join("quadcade-web.zip");

    // Remove old zip if exists
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating web zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", "../quadcade-web.zip", "."]),
    )?;

    println!("Web package ready: dist/quadcade-web.zip");
    Ok(())
}
