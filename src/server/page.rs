// SPDX-License-Identifier: MIT

//! The input page served at `/`

use crate::render::{html, View};

/// Values echoed back into the form fields after a submission
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub expression: String,
    pub expression1: String,
    pub expression2: String,
    pub where_expression: String,
    pub conditions: String,
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }
form { margin-bottom: 1.5rem; }
input[type=text] { width: 20rem; }
table { border-collapse: collapse; margin: 0.5rem 0; }
th, td { border: 1px solid #999; padding: 0.25rem 0.75rem; text-align: center; }
#result.error { color: #b00020; }
";

fn text_input(id: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{id}">{label}</label> <input type="text" id="{id}" name="{id}" value="{value}">"#,
        id = id,
        label = label,
        value = html::escape(value)
    )
}

/// Render the full page with `view` in the result region
pub fn render_page(values: &FormValues, view: &View) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Logic Expression Evaluator</title>
<style>{style}</style>
</head>
<body>
<h1>Logic Expression Evaluator</h1>
<form method="post" action="/ui/evaluate">
<h2>Evaluate</h2>
{evaluate}
<button type="submit">Evaluate</button>
</form>
<form method="post" action="/ui/compare">
<h2>Compare</h2>
{compare1}
{compare2}
<button type="submit">Compare</button>
</form>
<form method="post" action="/ui/where">
<h2>Where</h2>
{where_expression}
{conditions}
<button type="submit">Apply</button>
</form>
{result}
</body>
</html>
"#,
        style = STYLE,
        evaluate = text_input("expression", "Expression", &values.expression),
        compare1 = text_input("expression1", "First expression", &values.expression1),
        compare2 = text_input("expression2", "Second expression", &values.expression2),
        where_expression = text_input("whereExpression", "Expression", &values.where_expression),
        conditions = text_input("conditions", "Conditions (a:1, b:0)", &values.conditions),
        result = html::render_region(view),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_forms_and_region() {
        let page = render_page(&FormValues::default(), &View::default());
        assert!(page.contains(r#"action="/ui/evaluate""#));
        assert!(page.contains(r#"action="/ui/compare""#));
        assert!(page.contains(r#"action="/ui/where""#));
        assert!(page.contains(r#"<div id="result"></div>"#));
    }

    #[test]
    fn test_values_are_echoed_escaped() {
        let values = FormValues {
            expression: r#"A "AND" B"#.to_string(),
            ..Default::default()
        };
        let page = render_page(&values, &View::default());
        assert!(page.contains(r#"value="A &quot;AND&quot; B""#));
    }
}
