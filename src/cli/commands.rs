//! CLI command implementations.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path as FsPath;

use crate::cli::script::ScriptDriver;
use crate::config::DriverConfig;
use crate::dataset::{load_hero_graph, CampusMap};
use crate::search::bfs;
use crate::types::GraphResult;

/// Run the script protocol on a file, or interactively on stdin.
pub fn cmd_script(file: Option<&FsPath>, config: &DriverConfig) -> GraphResult<()> {
    let stdout = io::stdout();
    match file {
        Some(path) => {
            if config.banner {
                println!("Reading from the provided file.");
                println!("Writing the output from running those tests to standard out.");
            }
            let input = BufReader::new(File::open(path)?);
            ScriptDriver::from_config(input, stdout.lock(), config).run()
        }
        None => {
            if config.banner {
                println!("Running in interactive mode.");
                println!("Type a line in the script testing language to see the output.");
            }
            let stdin = io::stdin();
            ScriptDriver::from_config(stdin.lock(), stdout.lock(), config).run()
        }
    }
}

/// Fewest-hops path between two heroes of a hero/book dataset.
pub fn cmd_heroes(file: &FsPath, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let graph = load_hero_graph(file)?;
    let (from, to) = (from.to_string(), to.to_string());
    let path = bfs(&graph, &from, &to)?;

    if json {
        let value = serde_json::json!({
            "from": from,
            "to": to,
            "found": path.is_some(),
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return Ok(());
    }

    println!("path from {} to {}:", from, to);
    match path {
        None => println!("no path found"),
        Some(path) => {
            for hop in &path {
                println!("{} to {} via {}", hop.start(), hop.end(), hop.edge());
            }
        }
    }
    Ok(())
}

/// Shortest walking route between two campus buildings.
pub fn cmd_campus_route(
    buildings: &FsPath,
    paths: &FsPath,
    from: &str,
    to: &str,
    json: bool,
) -> GraphResult<()> {
    let map = CampusMap::load(buildings, paths)?;
    let route = map.find_route(from, to)?;

    if json {
        let value = serde_json::json!({
            "from": from,
            "to": to,
            "found": route.is_some(),
            "path": route,
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return Ok(());
    }

    let long = |short: &str| map.long_name_for_short(short).unwrap_or(short).to_string();
    println!("Path from {} to {}:", long(from), long(to));
    let Some(path) = route else {
        println!("no path found");
        return Ok(());
    };
    for hop in &path {
        println!("  {} -> {} ({:.3})", hop.start(), hop.end(), hop.cost());
    }
    println!("Total distance: {:.3}", path.cost());
    Ok(())
}

/// List every campus building by short and long name.
pub fn cmd_campus_buildings(buildings: &FsPath, paths: &FsPath, json: bool) -> GraphResult<()> {
    let map = CampusMap::load(buildings, paths)?;
    let names = map.building_names();
    if json {
        println!("{}", serde_json::to_string_pretty(&names).unwrap_or_default());
    } else {
        for (short, long) in names {
            println!("{}: {}", short, long);
        }
    }
    Ok(())
}
