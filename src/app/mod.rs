mod format;
mod tui;


use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{Catalog, LoadReport, Status};
use crate::cli::{Cli, Command};
use crate::paths::default_data_file_path;

use self::format::{format_listing, format_sorted_table};

pub fn run(cli: Cli) -> Result<()> {
    let data_file = match cli.data_file {
        Some(path) => path,
        None => default_data_file_path()?,
    };
    let (mut catalog, load_warning) = open_catalog(&data_file)?;

    if let Some(warning) = &load_warning {
        eprintln!("Warning: {warning}");
    }

    match cli.command {
        Some(Command::Add { name }) => run_add(&mut catalog, &data_file, &name)?,
        Some(Command::Move { name, status }) => {
            run_move(&mut catalog, &data_file, &name, status.into())?
        }
        Some(Command::Search { name }) => run_search(&catalog, &name),
        Some(Command::List { sorted }) => run_list(&catalog, sorted),
        Some(Command::Tui) | None => tui::run_tui(&mut catalog, &data_file, load_warning)?,
    }

    Ok(())
}

fn run_add(catalog: &mut Catalog, data_file: &Path, name: &str) -> Result<()> {
    match catalog.add(name.trim()) {
        Ok(entry) => {
            save_catalog(catalog, data_file)?;
            println!("Added '{}' to {}.", entry.name, entry.status.label());
        }
        Err(err) => println!("Could not add title: {err}"),
    }
    Ok(())
}

fn run_move(catalog: &mut Catalog, data_file: &Path, name: &str, status: Status) -> Result<()> {
    match catalog.move_title(name.trim(), status) {
        Ok(entry) => {
            save_catalog(catalog, data_file)?;
            println!("Moved '{}' to {}.", entry.name, entry.status.label());
        }
        Err(err) => println!("Could not move title: {err}"),
    }
    Ok(())
}

fn run_search(catalog: &Catalog, name: &str) {
    match catalog.search(name.trim()) {
        Ok(entry) => println!("Found: {}, status: {}", entry.name, entry.status.label()),
        Err(err) => println!("{err}"),
    }
}

fn run_list(catalog: &Catalog, sorted: bool) {
    if catalog.is_empty() {
        println!("No titles yet. Run `watchlist add <NAME>` first.");
        return;
    }
    if sorted {
        print!("{}", format_sorted_table(&catalog.sorted()));
    } else {
        print!("{}", format_listing(&catalog.list_all()));
    }
}

fn open_catalog(path: &Path) -> Result<(Catalog, Option<String>)> {
    let (catalog, report) = Catalog::open(path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))?;
    Ok((catalog, load_warning(&report, path)))
}

fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    catalog
        .save_to_file(path)
        .with_context(|| format!("failed to save catalog to {}", path.display()))
}

pub(crate) fn load_warning(report: &LoadReport, path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    if report.malformed > 0 {
        parts.push(format!("{} malformed line(s)", report.malformed));
    }
    if report.duplicates > 0 {
        parts.push(format!("{} duplicate title(s)", report.duplicates));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("ignored {} in {}", parts.join(" and "), path.display()))
}
