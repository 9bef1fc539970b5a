//! Server-side rendering of the ID generator page.
//!
//! The page is plain HTML: one form posting back to the server and a
//! status panel. No client-side script is involved.

use std::fmt::{self, Write as _};

use crate::domain::FormSnapshot;

/// Stylesheet path served under `/static`.
const STYLESHEET: &str = "/static/style.css";

/// Escape text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
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

/// Render the full page for `snapshot` and the generated `ids`.
///
/// # Errors
///
/// Returns an error if formatting into the page buffer fails.
pub fn render_page(
    snapshot: &FormSnapshot,
    ids: &[String],
    stylesheet: bool,
) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(4096 + ids.len() * 48);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Employee ID Generator</title>\n");
    if stylesheet {
        writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">")?;
    }
    html.push_str("</head>\n<body>\n<main class=\"card\">\n");
    html.push_str("<h1>Employee ID Generator</h1>\n");

    // One form carries every field, so each button submits pending edits too.
    html.push_str("<form method=\"post\" action=\"/form/action\">\n");
    render_config_section(&mut html, snapshot)?;
    render_generate_section(&mut html, snapshot)?;
    html.push_str("</form>\n");

    render_log_section(&mut html, ids)?;
    render_status_section(&mut html, snapshot)?;

    html.push_str("</main>\n</body>\n</html>\n");
    Ok(html)
}

fn render_config_section(html: &mut String, snapshot: &FormSnapshot) -> fmt::Result {
    html.push_str("<section class=\"config\">\n<h2>Configuration</h2>\n");
    html.push_str("<div class=\"grid\">\n");

    writeln!(
        html,
        "<label>Prefix<input type=\"text\" name=\"prefix\" value=\"{}\"></label>",
        escape_html(&snapshot.prefix)
    )?;
    number_field(html, "Number of Digits", "digit_width", snapshot.digit_width)?;
    number_field(html, "Start Number", "start_number", snapshot.start_number)?;
    number_field(html, "Batch Size", "batch_size", snapshot.batch_size)?;

    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"apply\" class=\"apply\">Apply</button>\n",
    );
    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn number_field(
    html: &mut String,
    label: &str,
    name: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    writeln!(
        html,
        "<label>{label}<input type=\"number\" name=\"{name}\" value=\"{value}\" min=\"1\"></label>"
    )
}

fn render_generate_section(html: &mut String, snapshot: &FormSnapshot) -> fmt::Result {
    html.push_str("<section class=\"generate\">\n<h2>Generate IDs</h2>\n");
    html.push_str("<div class=\"actions\">\n");
    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"single\" class=\"single\">Generate Single ID</button>\n",
    );
    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"batch\" class=\"batch\">Generate Batch</button>\n",
    );
    writeln!(
        html,
        "<input type=\"text\" inputmode=\"numeric\" name=\"specific_number\" value=\"{}\" placeholder=\"Enter a number\">",
        escape_html(&snapshot.specific_input)
    )?;
    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"specific\" class=\"specific\">Generate Specific ID</button>\n",
    );
    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"reset\" class=\"reset\">Reset Counter</button>\n",
    );
    html.push_str(
        "<button type=\"submit\" name=\"action\" value=\"clear\" class=\"clear\">Clear IDs</button>\n",
    );
    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn render_log_section(html: &mut String, ids: &[String]) -> fmt::Result {
    html.push_str("<section class=\"log\">\n<h2>Generated IDs</h2>\n");
    html.push_str("<div class=\"scroll\">\n");

    if ids.is_empty() {
        html.push_str("<p class=\"empty\">No IDs generated yet</p>\n");
    } else {
        html.push_str("<ul class=\"ids\">\n");
        for id in ids {
            writeln!(html, "<li>{}</li>", escape_html(id))?;
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn render_status_section(html: &mut String, snapshot: &FormSnapshot) -> fmt::Result {
    html.push_str("<section class=\"status\">\n<h3>Current Status</h3>\n");
    writeln!(
        html,
        "<p>Next ID will be: <span class=\"next-id\">{}</span></p>",
        escape_html(&snapshot.next_id)
    )?;
    writeln!(
        html,
        "<p>Total IDs generated: <span class=\"total\">{}</span></p>",
        snapshot.total_generated
    )?;
    html.push_str("</section>\n");
    Ok(())
}
