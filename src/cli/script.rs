//! Line-oriented script driver for exercising graphs from text files.
//!
//! Each non-blank, non-comment line is a command followed by
//! whitespace-separated arguments. Every command writes a deterministic
//! result; failures are reported as an `Exception:` line and the script
//! keeps running.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{DriverConfig, ScriptMode};
use crate::dataset::load_hero_graph;
use crate::graph::Graph;
use crate::search::{bfs, dijkstra_checked};
use crate::types::{GraphError, GraphResult, Label, Weight};

/// Named graphs of the flavor selected by the script mode.
enum GraphSet {
    Labeled(HashMap<String, Graph<String, String>>),
    Weighted(HashMap<String, Graph<String, Weight>>),
}

/// Reads script commands from `input` and writes results to `output`.
pub struct ScriptDriver<R, W> {
    input: R,
    output: W,
    graphs: GraphSet,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> ScriptDriver<R, W> {
    pub fn new(input: R, output: W, mode: ScriptMode) -> Self {
        let graphs = match mode {
            ScriptMode::Labeled => GraphSet::Labeled(HashMap::new()),
            ScriptMode::Weighted => GraphSet::Weighted(HashMap::new()),
        };
        Self {
            input,
            output,
            graphs,
            data_dir: DriverConfig::default().data_dir,
        }
    }

    /// Driver configured from a loaded `DriverConfig`.
    pub fn from_config(input: R, output: W, config: &DriverConfig) -> Self {
        Self::new(input, output, config.mode).with_data_dir(config.data_dir.clone())
    }

    /// Directory `LoadGraph` resolves file names against.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Run every line of the input. Only failures to read or write the
    /// streams themselves are returned as errors.
    pub fn run(&mut self) -> GraphResult<()> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);

            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(self.output, "{}", line)?;
            } else {
                let mut tokens = line.split_whitespace();
                if let Some(command) = tokens.next() {
                    let arguments: Vec<String> = tokens.map(str::to_string).collect();
                    let lines = match self.execute(command, &arguments) {
                        Ok(lines) => lines,
                        Err(e) => {
                            log::debug!("command {} failed: {}", command, e);
                            vec![format!("Exception: {}", e)]
                        }
                    };
                    for out in lines {
                        writeln!(self.output, "{}", out)?;
                    }
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Consume the driver and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn execute(&mut self, command: &str, arguments: &[String]) -> GraphResult<Vec<String>> {
        match command {
            "CreateGraph" => self.create_graph(arguments),
            "AddNode" => self.add_node(arguments),
            "AddEdge" => self.add_edge(arguments),
            "ListNodes" => self.list_nodes(arguments),
            "ListChildren" => self.list_children(arguments),
            "LoadGraph" if matches!(self.graphs, GraphSet::Labeled(_)) => {
                self.load_graph(arguments)
            }
            "FindPath" => self.find_path(arguments),
            _ => Ok(vec![format!("Unrecognized command: {}", command)]),
        }
    }

    fn create_graph(&mut self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("CreateGraph", arguments, 1)?;
        let name = &arguments[0];
        match &mut self.graphs {
            GraphSet::Labeled(graphs) => {
                graphs.insert(name.clone(), Graph::new());
            }
            GraphSet::Weighted(graphs) => {
                graphs.insert(name.clone(), Graph::new());
            }
        }
        Ok(vec![format!("created graph {}", name)])
    }

    fn add_node(&mut self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("AddNode", arguments, 2)?;
        let (name, node) = (&arguments[0], &arguments[1]);
        match &mut self.graphs {
            GraphSet::Labeled(graphs) => lookup_mut(graphs, name)?.add_node(node.clone())?,
            GraphSet::Weighted(graphs) => lookup_mut(graphs, name)?.add_node(node.clone())?,
        }
        Ok(vec![format!("added node {} to {}", node, name)])
    }

    fn add_edge(&mut self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("AddEdge", arguments, 4)?;
        let (name, parent, child, label) =
            (&arguments[0], &arguments[1], &arguments[2], &arguments[3]);
        let rendered = match &mut self.graphs {
            GraphSet::Labeled(graphs) => {
                lookup_mut(graphs, name)?.add_edge(parent.clone(), child.clone(), label.clone())?;
                label.clone()
            }
            GraphSet::Weighted(graphs) => {
                let graph = lookup_mut(graphs, name)?;
                let weight: Weight = label.parse()?;
                graph.add_unique_bidirectional_edge(parent.clone(), child.clone(), weight)?;
                weight.to_string()
            }
        };
        Ok(vec![format!(
            "added edge {} from {} to {} in {}",
            rendered, parent, child, name
        )])
    }

    fn list_nodes(&self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("ListNodes", arguments, 1)?;
        let name = &arguments[0];
        let nodes = match &self.graphs {
            GraphSet::Labeled(graphs) => lookup(graphs, name)?.list_node_labels(),
            GraphSet::Weighted(graphs) => lookup(graphs, name)?.list_node_labels(),
        };
        Ok(vec![format!("{} contains:{}", name, spaced(&nodes))])
    }

    fn list_children(&self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("ListChildren", arguments, 2)?;
        let (name, parent) = (&arguments[0], &arguments[1]);
        let children = match &self.graphs {
            GraphSet::Labeled(graphs) => lookup(graphs, name)?.list_children(parent),
            GraphSet::Weighted(graphs) => lookup(graphs, name)?.list_children(parent),
        };
        Ok(vec![format!(
            "the children of {} in {} are:{}",
            parent,
            name,
            spaced(&children)
        )])
    }

    fn load_graph(&mut self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("graphFromData", arguments, 2)?;
        let (name, file) = (&arguments[0], &arguments[1]);
        let graph = load_hero_graph(&self.data_dir.join(file))?;
        if let GraphSet::Labeled(graphs) = &mut self.graphs {
            graphs.insert(name.clone(), graph);
        }
        Ok(vec![format!("loaded graph {}", name)])
    }

    fn find_path(&self, arguments: &[String]) -> GraphResult<Vec<String>> {
        expect_args("FindPath", arguments, 3)?;
        let name = &arguments[0];
        let start = arguments[1].replace('_', " ");
        let end = arguments[2].replace('_', " ");
        match &self.graphs {
            GraphSet::Labeled(graphs) => find_labeled_path(lookup(graphs, name)?, &start, &end),
            GraphSet::Weighted(graphs) => find_weighted_path(lookup(graphs, name)?, &start, &end),
        }
    }
}

/// Lines reporting endpoints missing from the graph, if any.
fn unknown_endpoints<E: Label>(
    graph: &Graph<String, E>,
    start: &String,
    end: &String,
) -> GraphResult<Vec<String>> {
    let mut lines = Vec::new();
    for label in [start, end] {
        if !graph.contains(label)? {
            lines.push(format!("unknown character {}", label));
        }
    }
    Ok(lines)
}

fn find_labeled_path(
    graph: &Graph<String, String>,
    start: &String,
    end: &String,
) -> GraphResult<Vec<String>> {
    let unknown = unknown_endpoints(graph, start, end)?;
    if !unknown.is_empty() {
        return Ok(unknown);
    }

    let mut lines = vec![format!("path from {} to {}:", start, end)];
    if start != end {
        match bfs(graph, start, end)? {
            None => lines.push("no path found".to_string()),
            Some(path) => {
                for hop in &path {
                    lines.push(format!("{} to {} via {}", hop.start(), hop.end(), hop.edge()));
                }
            }
        }
    }
    Ok(lines)
}

fn find_weighted_path(
    graph: &Graph<String, Weight>,
    start: &String,
    end: &String,
) -> GraphResult<Vec<String>> {
    let unknown = unknown_endpoints(graph, start, end)?;
    if !unknown.is_empty() {
        return Ok(unknown);
    }

    let mut lines = vec![format!("path from {} to {}:", start, end)];
    match dijkstra_checked(graph, start, end)? {
        None => lines.push("no path found".to_string()),
        Some(path) => {
            for hop in &path {
                lines.push(format!(
                    "{} to {} with weight {:.3}",
                    hop.start(),
                    hop.end(),
                    hop.cost()
                ));
            }
            lines.push(format!("total cost: {:.3}", path.cost()));
        }
    }
    Ok(lines)
}

fn expect_args(command: &str, arguments: &[String], count: usize) -> GraphResult<()> {
    if arguments.len() != count {
        return Err(GraphError::BadArguments {
            command: command.to_string(),
            arguments: arguments.to_vec(),
        });
    }
    Ok(())
}

fn lookup<'a, E>(
    graphs: &'a HashMap<String, Graph<String, E>>,
    name: &str,
) -> GraphResult<&'a Graph<String, E>> {
    graphs
        .get(name)
        .ok_or_else(|| GraphError::UnknownGraph(name.to_string()))
}

fn lookup_mut<'a, E>(
    graphs: &'a mut HashMap<String, Graph<String, E>>,
    name: &str,
) -> GraphResult<&'a mut Graph<String, E>> {
    graphs
        .get_mut(name)
        .ok_or_else(|| GraphError::UnknownGraph(name.to_string()))
}

/// Each item preceded by a single space; empty for no items.
fn spaced<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| format!(" {}", item)).collect()
}

/// Run a whole script held in memory and return everything it printed.
pub fn run_script(script: &str, mode: ScriptMode) -> GraphResult<String> {
    let mut driver = ScriptDriver::new(script.as_bytes(), Vec::new(), mode);
    driver.run()?;
    Ok(String::from_utf8_lossy(&driver.into_output()).into_owned())
}
