//! Self-contained HTML page wrapping one chart.

use serde::Serialize;

use crate::format::escape_xml;

/// HTML document with the SVG inline and the chart's numbers embedded as
/// JSON, so the file is usable without the library that produced it.
pub fn html_page<T: Serialize>(title: &str, svg: &str, data: &T) -> String {
    // A serialization failure only drops the data block; the chart stands alone.
    let json = serde_json::to_string(data)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "chart data not embedded");
            "null".to_string()
        })
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{svg}<script type="application/json" id="chart-data">{json}</script>
</body>
</html>
"#,
        title = escape_xml(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_terminator_escaped() {
        let page = html_page("t", "<svg></svg>\n", &vec!["</script>"]);
        assert_eq!(page.matches("</script>").count(), 1);
        assert!(page.contains(r#"["<\/script>"]"#));
    }
}
