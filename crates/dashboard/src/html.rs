//! Minimal HTML building blocks: page chrome, tables, alerts and escaping.

use std::fmt::Write;

const STYLE: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #f8f9fa; color: #212529; }
.layout { display: flex; min-height: 100vh; }
nav { width: 220px; padding: 24px 16px; background: #2e7bcf; color: #fff; }
nav a { display: block; padding: 8px 0; color: #fff; text-decoration: none; }
nav a.active { font-weight: 700; }
main { flex: 1; padding: 24px 40px; }
h1 { color: #1e3d59; font-weight: 700; }
.metrics { display: flex; gap: 16px; }
.metric { flex: 1; background: #fff; padding: 15px; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); }
.metric .label { font-size: 0.9em; color: #6c757d; }
.metric .value { font-size: 1.6em; font-weight: 600; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { padding: 8px 12px; border-bottom: 1px solid #dee2e6; text-align: left; }
button { width: 100%; border: 0; border-radius: 5px; height: 3em; background: #007bff; color: #fff; }
.alert { padding: 12px 16px; border-radius: 5px; margin: 12px 0; }
.alert.info { background: #d1ecf1; }
.alert.success { background: #d4edda; }
.alert.warning { background: #fff3cd; }
.alert.error { background: #f8d7da; }
";

/// Sidebar entries: `(path, label)`.
const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/customers", "Customers"),
    ("/payments/new", "New Payment"),
    ("/history", "History"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Info,
    Success,
    Warning,
    Error,
}

impl Alert {
    fn class(self) -> &'static str {
        match self {
            Alert::Info => "info",
            Alert::Success => "success",
            Alert::Warning => "warning",
            Alert::Error => "error",
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
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

/// Wrap a view body in the shared page chrome. `active` is the nav label
/// to highlight.
pub fn page(active: &str, body: &str) -> String {
    let mut nav = String::new();
    for (path, label) in NAV {
        let class = if *label == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{path}\"{class}>{label}</a>");
    }

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>LoanPay Dashboard</title><style>{STYLE}</style></head>\
         <body><div class=\"layout\">\
         <nav><h2>Navigation</h2>{nav}</nav>\
         <main><h1>LoanPay Management</h1>{body}</main>\
         </div></body></html>"
    )
}

/// Render a table. Cells are escaped.
pub fn table<R>(headers: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::from("<table><thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(&cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// A message banner. The message is escaped.
pub fn alert(kind: Alert, message: &str) -> String {
    format!(
        "<div class=\"alert {}\">{}</div>",
        kind.class(),
        escape(message)
    )
}
