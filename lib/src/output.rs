//! Output sinks
//!
//! Both sinks take a finished [`AsciiGrid`]; documents are built fully in
//! memory before anything touches the filesystem.

use crate::ascii::AsciiGrid;
use crate::error::{AsciiError, Result};
use std::path::Path;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>ASCII Art</title>
    <style>
        body {
            background-color: #000;
            color: #fff;
            font-family: monospace;
            font-size: 12px;
            line-height: 12px;
            margin: 0;
            padding: 20px;
        }
        pre {
            margin: 0;
            letter-spacing: 2px;
            white-space: pre;
        }
    </style>
</head>
<body>
    <pre>
"#;

const HTML_FOOTER: &str = "    </pre>\n</body>\n</html>";

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap the grid in a static monospace HTML document, one escaped row per line
pub fn render_html(grid: &AsciiGrid) -> String {
    let body_len: usize = grid.rows().iter().map(|row| row.len() + 1).sum();
    let mut html = String::with_capacity(HTML_HEADER.len() + body_len + HTML_FOOTER.len());

    html.push_str(HTML_HEADER);
    for row in grid.rows() {
        html.push_str(&escape_html(row));
        html.push('\n');
    }
    html.push_str(HTML_FOOTER);
    html
}

/// Write the HTML document for `grid` to `path`
pub fn write_html(path: &Path, grid: &AsciiGrid) -> Result<()> {
    write_file(path, &render_html(grid))?;
    log::info!("wrote HTML art to {}", path.display());
    Ok(())
}

/// Write the plain-text form of `grid` to `path`
pub fn write_text(path: &Path, grid: &AsciiGrid) -> Result<()> {
    write_file(path, &grid.to_text())?;
    log::info!("wrote text art to {}", path.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| AsciiError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape_html(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    fn tricky_grid() -> AsciiGrid {
        AsciiGrid::from_rows(
            4,
            vec!["<a&>".into(), "\"'  ".into(), "&amp".into(), "$@B%".into()],
        )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#x27;");
        assert_eq!(escape_html(" .:-=+*#%@"), " .:-=+*#%@");
    }

    #[test]
    fn test_html_structure() {
        let grid = AsciiGrid::from_rows(2, vec!["ab".into(), "cd".into()]);
        let html = render_html(&grid);

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n    <title>ASCII Art</title>"));
        assert!(html.contains("font-family: monospace;"));
        assert!(html.contains("letter-spacing: 2px;"));
        assert!(html.ends_with("<body>\n    <pre>\nab\ncd\n    </pre>\n</body>\n</html>"));
    }

    #[test]
    fn test_html_roundtrips_rows() {
        let grid = tricky_grid();
        let html = render_html(&grid);

        let start = html.find("<pre>\n").unwrap() + "<pre>\n".len();
        let end = html.rfind("    </pre>").unwrap();
        let rows: Vec<String> = html[start..end].lines().map(unescape_html).collect();

        assert_eq!(rows, grid.rows());
    }

    #[test]
    fn test_write_html_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let grid = tricky_grid();

        let html_path = dir.path().join("art.html");
        write_html(&html_path, &grid).unwrap();
        assert_eq!(std::fs::read_to_string(&html_path).unwrap(), render_html(&grid));

        let text_path = dir.path().join("art.txt");
        write_text(&text_path, &grid).unwrap();
        assert_eq!(std::fs::read_to_string(&text_path).unwrap(), grid.to_text());
    }

    #[test]
    fn test_write_to_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let grid = tricky_grid();

        let err = write_html(dir.path(), &grid).unwrap_err();
        assert!(matches!(err, AsciiError::Write { .. }));
    }
}
