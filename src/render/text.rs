// SPDX-License-Identifier: MIT

//! Plain text output for a [`View`], used by the terminal commands

use super::{Node, View};

pub fn render_text(view: &View) -> String {
    let blocks: Vec<String> = view.nodes.iter().map(node_text).collect();
    blocks.join("\n")
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Heading { text } | Node::Paragraph { text } => text.clone(),
        Node::List { items } => items
            .iter()
            .map(|item| format!("  - {}", item))
            .collect::<Vec<_>>()
            .join("\n"),
        Node::Table { header, rows } => table_text(header, rows),
    }
}

fn table_text(header: &[String], rows: &[Vec<String>]) -> String {
    // Rows may be longer than the header; size every column that appears
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0; columns];
    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_line = |line: &[String]| {
        line.iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_line(header), separator];
    lines.extend(rows.iter().map(|row| format_line(row.as_slice())));
    lines.join("\n")
}
