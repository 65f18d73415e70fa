// src/walk/files.rs
// =============================================================================
// This module walks the site directory and lists the files to process.
//
// How it works:
// 1. Start with the root directory in a queue
// 2. Read the directory's entries
// 3. Queue sub-directories (unless they are hidden, like .git)
// 4. Keep files whose names end in ".html"
// 5. Repeat until the queue is empty, then sort the result
//
// Rust concepts:
// - VecDeque: Double-ended queue for breadth-first walking
// - fs::read_dir: Iterator over the entries of one directory
// - anyhow::Context: Attach the failing path to an io::Error
// =============================================================================

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

// Lists every .html file under `root`, skipping hidden directories
//
// Parameters:
//   root: the site root directory
//
// Returns: sorted Vec of file paths (each one starts with `root`)
//
// Example:
//   root/index.html, root/games/snake/index.html, root/.git/x.html
//   -> [root/games/snake/index.html, root/index.html]
pub fn collect_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    // The root itself has to be readable, otherwise there is nothing to check
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());

    let mut html_files = Vec::new();
    let mut is_root = true;

    while let Some(dir) = queue.pop_front() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if is_root => {
                return Err(e).with_context(|| format!("cannot read site root {}", dir.display()));
            }
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };
        is_root = false;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            // file_type() does not follow symlinks, so linked directories
            // are never descended into
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), error = %e, "cannot stat entry");
                    continue;
                }
            };

            let name = entry.file_name();
            if file_type.is_dir() {
                if !is_hidden(&name) {
                    queue.push_back(entry.path());
                }
            } else if name.to_string_lossy().ends_with(".html") {
                html_files.push(entry.path());
            }
        }
    }

    html_files.sort();
    Ok(html_files)
}

// Lists root/games/<name>/index.html for every non-hidden <name>
//
// This matches the shell glob `games/*/index.html`:
// - `*` never matches names that start with a dot
// - only existing regular index.html files are returned
//
// A site without a games/ directory just has no pages to migrate.
pub fn collect_game_pages(root: &Path) -> Result<Vec<PathBuf>> {
    let games_dir = root.join("games");
    if !games_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&games_dir)
        .with_context(|| format!("cannot read {}", games_dir.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("cannot read {}", games_dir.display()))?;
        if is_hidden(&entry.file_name()) {
            continue;
        }

        let page = entry.path().join("index.html");
        if page.is_file() {
            pages.push(page);
        }
    }

    pages.sort();
    Ok(pages)
}

// Hidden entries start with a dot (.git, .cache, ...)
fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a queue instead of recursion?
//    - Deep trees can't overflow the stack this way
//    - The same VecDeque pattern works for crawling web pages too
//
// 2. Why sort at the end?
//    - read_dir returns entries in whatever order the filesystem likes
//    - Sorting makes the report stable between machines and runs
//
// 3. What does `Err(e) if is_root =>` mean?
//    - It's a match guard: the arm only matches when the condition is true
//    - Errors on the root are fatal, errors deeper down are just logged
// -----------------------------------------------------------------------------
