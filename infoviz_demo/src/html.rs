// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-file HTML gallery of rendered visuals.

use crate::svg::escape_xml;

/// One gallery entry.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) svg: String,
}

/// Renders a self-contained page with the headline and one figure per section.
pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(
        "<style>\
body{font-family:Georgia,serif;margin:2rem auto;max-width:960px;color:#0f172a}\
h1{font-size:3rem;letter-spacing:-.02em;border-bottom:4px solid #0f172a}\
figure{margin:2rem 0}\
figcaption{font:600 .7rem/1.4 system-ui,sans-serif;letter-spacing:.2em;text-transform:uppercase;color:#94a3b8}\
</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        out.push_str("<figure>\n");
        out.push_str(&format!(
            "<figcaption>{}</figcaption>\n<p>{}</p>\n",
            escape_xml(&section.title),
            escape_xml(&section.description)
        ));
        out.push_str(&section.svg);
        out.push_str("</figure>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
