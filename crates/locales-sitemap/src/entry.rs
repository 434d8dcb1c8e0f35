use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: f32,
}

impl fmt::Display for SitemapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<url>")?;
        writeln!(f, "    <loc>{}</loc>", escape_xml(&self.loc))?;
        writeln!(f, "    <lastmod>{}</lastmod>", self.lastmod.format("%Y-%m-%d"))?;
        writeln!(f, "    <priority>{:.1}</priority>", self.priority)?;
        write!(f, "  </url>")
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
