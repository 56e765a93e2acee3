// SPDX-License-Identifier: MIT

//! HTML output for a [`View`]

use super::{Node, View};

/// Element id of the result region on the page
pub const RESULT_ID: &str = "result";

/// Escape text for use inside element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the nodes only, without the surrounding region
pub fn render_nodes(view: &View) -> String {
    let mut out = String::new();
    if view.is_error {
        // Error text replaces the region's content as plain text
        for node in &view.nodes {
            if let Node::Paragraph { text } = node {
                out.push_str(&escape(text));
            }
        }
        return out;
    }

    for node in &view.nodes {
        write_node(&mut out, node);
    }
    out
}

/// The whole result region, carrying the `error` class when failing
pub fn render_region(view: &View) -> String {
    let class = if view.is_error { r#" class="error""# } else { "" };
    format!(
        r#"<div id="{}"{}>{}</div>"#,
        RESULT_ID,
        class,
        render_nodes(view)
    )
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Heading { text } => out.push_str(&format!("<h3>{}</h3>", escape(text))),
        Node::Paragraph { text } => out.push_str(&format!("<p>{}</p>", escape(text))),
        Node::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str(&format!("<li>{}</li>", escape(item)));
            }
            out.push_str("</ul>");
        }
        Node::Table { header, rows } => {
            out.push_str("<table><thead><tr>");
            for column in header {
                out.push_str(&format!("<th>{}</th>", escape(column)));
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_escaped() {
        let view = View {
            nodes: vec![Node::Heading {
                text: "Expression: A < B & C".to_string(),
            }],
            is_error: false,
        };
        assert_eq!(
            render_nodes(&view),
            "<h3>Expression: A &lt; B &amp; C</h3>"
        );
    }

    #[test]
    fn test_table_markup() {
        let view = View {
            nodes: vec![Node::Table {
                header: vec!["A".into(), "Result".into()],
                rows: vec![vec!["0".into(), "1".into()]],
            }],
            is_error: false,
        };
        assert_eq!(
            render_nodes(&view),
            "<table><thead><tr><th>A</th><th>Result</th></tr></thead>\
             <tbody><tr><td>0</td><td>1</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_list_markup() {
        let view = View {
            nodes: vec![Node::List {
                items: vec!["a: 1".into(), "b: 0".into()],
            }],
            is_error: false,
        };
        assert_eq!(render_nodes(&view), "<ul><li>a: 1</li><li>b: 0</li></ul>");
    }

    #[test]
    fn test_error_region() {
        let view = View::error("bad <expression>");
        assert_eq!(
            render_region(&view),
            r#"<div id="result" class="error">bad &lt;expression&gt;</div>"#
        );
    }

    #[test]
    fn test_empty_region() {
        assert_eq!(render_region(&View::default()), r#"<div id="result"></div>"#);
    }
}
