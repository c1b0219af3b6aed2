use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use super::{Feed, Item};

/// Renders a [`Feed`] as an RSS 2.0 document.
///
/// The channel carries `<title>`, `<link>`, `<description>`, and
/// `<managingEditor>` (formatted `email (name)`), plus `<pubDate>` only when
/// `created` is set. Each item follows in insertion order with the same rule:
/// `<link>` only if present, `<description>` always (possibly empty),
/// `<pubDate>` only if that item's `created` is set. Timestamps use the
/// RFC 2822 format RSS clients expect.
///
/// Rendering into an in-memory buffer cannot fail on a well-formed feed, so
/// an error here means an implementation-internal invariant was violated.
/// The request dispatcher maps it to a per-request 500 rather than letting
/// one bad document take down the process.
pub fn render_rss(feed: &Feed) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("Failed to write XML declaration")?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer
        .write_event(Event::Start(rss))
        .context("Failed to write rss element")?;

    writer
        .write_event(Event::Start(BytesStart::new("channel")))
        .context("Failed to write channel element")?;

    write_text_element(&mut writer, "title", &feed.title)?;
    write_text_element(&mut writer, "link", &feed.link)?;
    write_text_element(&mut writer, "description", &feed.description)?;
    write_text_element(&mut writer, "managingEditor", &feed.author.as_editor())?;
    if let Some(created) = feed.created {
        write_text_element(&mut writer, "pubDate", &created.to_rfc2822())?;
    }

    for item in &feed.items {
        write_item(&mut writer, item)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .context("Failed to write channel end")?;
    writer
        .write_event(Event::End(BytesEnd::new("rss")))
        .context("Failed to write rss end")?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("Rendered RSS contains invalid UTF-8")
}

fn write_item(writer: &mut Writer<Cursor<Vec<u8>>>, item: &Item) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("item")))
        .context("Failed to write item element")?;

    write_text_element(writer, "title", &item.title)?;
    if let Some(link) = &item.link {
        write_text_element(writer, "link", link)?;
    }
    write_text_element(writer, "description", &item.description)?;
    write_text_element(writer, "managingEditor", &item.author.as_editor())?;
    if let Some(created) = item.created {
        write_text_element(writer, "pubDate", &created.to_rfc2822())?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("item")))
        .context("Failed to write item end")?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .with_context(|| format!("Failed to write {} element", name))?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .with_context(|| format!("Failed to write {} text", name))?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .with_context(|| format!("Failed to write {} end", name))?;
    Ok(())
}
