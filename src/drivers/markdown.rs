//! Markdown output driver.

use std::io::{self, Write};

use super::{AlertDriver, AlertItem, FeedMeta};

/// Renders alerts as basic Markdown.
///
/// Input text is embedded raw, without escaping. Single line breaks inside
/// the description are expanded to blank lines so each line becomes its own
/// paragraph. `effect` and `categories` are accepted but not rendered; a
/// known limitation of this format.
pub struct MarkdownDriver {
    meta: FeedMeta,
}

impl MarkdownDriver {
    pub fn new(meta: FeedMeta) -> Self {
        Self { meta }
    }
}

impl AlertDriver for MarkdownDriver {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "# {}", self.meta.title)?;
        writeln!(out, "{}", self.meta.description)?;
        Ok(())
    }

    fn item(&self, out: &mut dyn Write, item: &AlertItem) -> io::Result<()> {
        writeln!(out, "## {} (added {})", item.header, item.date)?;
        writeln!(
            out,
            "{}\n\n{}\n\n",
            item.long_header,
            item.description.replace('\n', "\n\n")
        )?;
        Ok(())
    }

    fn end(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
