//! Plain-text edge lists.
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! # comment
//! a b 7      edge a-b with weight 7
//! a c        edge a-c with weight 0
//! z          isolated node z
//! ```

use crate::error::LoadError;
use crate::graph::Graph;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph<String>, LoadError> {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let record = line.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = record.split_whitespace().collect();
        match parts.as_slice() {
            [id] => {
                graph.add_node(id.to_string());
            }
            [from, to] => graph.add_edge(from.to_string(), to.to_string(), 0.0),
            [from, to, weight] => {
                let weight = parse_weight(weight, number)?;
                graph.add_edge(from.to_string(), to.to_string(), weight);
            }
            _ => {
                return Err(LoadError::MalformedLine {
                    line: number,
                    content: record.to_string(),
                });
            }
        }
    }

    debug!(
        "Loaded edge list: {} nodes, {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

pub fn parse_edge_list(text: &str) -> Result<Graph<String>, LoadError> {
    read_edge_list(text.as_bytes())
}

fn parse_weight(raw: &str, line: usize) -> Result<f64, LoadError> {
    match raw.parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        _ => Err(LoadError::InvalidWeight {
            line,
            weight: raw.to_string(),
        }),
    }
}

impl Graph<String> {
    pub fn from_file(path: &Path) -> Result<Graph<String>, LoadError> {
        let file = File::open(path)?;
        read_edge_list(BufReader::new(file))
    }
}
