//! RSS 2.0 output driver.

use std::io::{self, Write};

use super::{AlertDriver, AlertItem, FeedMeta};

/// Renders alerts as an RSS 2.0 feed.
///
/// All user-supplied text is XML-escaped before embedding; the alert body
/// goes into a `<pre>` block inside `<description>` so line breaks survive
/// feed readers. `effect` is accepted but not rendered.
pub struct RssDriver {
    meta: FeedMeta,
}

impl RssDriver {
    pub fn new(meta: FeedMeta) -> Self {
        Self { meta }
    }
}

/// Escapes the XML/HTML special characters `&`, `<`, `>`, `"` and `'`.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl AlertDriver for RssDriver {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
        writeln!(
            out,
            "<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">"
        )?;
        writeln!(out, "<channel>")?;
        writeln!(out, "<title>{}</title>", self.meta.title)?;
        writeln!(out, "<description>{}</description>", self.meta.description)?;
        writeln!(out, "<language>{}</language>", self.meta.language)?;
        writeln!(out, "<link>{}</link>", self.meta.url)?;
        Ok(())
    }

    fn item(&self, out: &mut dyn Write, item: &AlertItem) -> io::Result<()> {
        let content = format!(
            "<pre>{}\n\n{}</pre>",
            escape_xml(&item.long_header),
            escape_xml(&item.description)
        );

        writeln!(out, "<item>")?;
        writeln!(out, "<title>{}</title>", escape_xml(&item.header))?;
        writeln!(out, "<description>{content}</description>")?;
        writeln!(out, "<pubDate>{}</pubDate>", item.date)?;
        writeln!(out, "<guid>{}</guid>", item.guid)?;
        for category in &item.categories {
            writeln!(out, "<category>{}</category>", escape_xml(category))?;
        }
        writeln!(out, "</item>")?;
        Ok(())
    }

    fn end(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "</channel>")?;
        writeln!(out, "</rss>")?;
        Ok(())
    }
}
