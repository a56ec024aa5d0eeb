//! SVG label sheet output.
//!
//! Every name is drawn twice at the same anchor: a black outline pass painted
//! stroke-first, then the colored fill on top. The document is written on a
//! single line without an XML declaration.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use pledge_model::{LabelLayout, LayoutParams, PositionedName};

use crate::common::{SVG_NS, ensure_output_dir, escape_xml};

const OUTLINE_COLOR: &str = "#000";
const OUTLINE_WIDTH: &str = "2";

/// Writes the label sheet for `layout` to `output_path`.
pub fn write_svg(output_path: &Path, layout: &LabelLayout, params: &LayoutParams) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        ensure_output_dir(parent)?;
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_svg_to(&mut writer, layout, params)
        .with_context(|| format!("write {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(())
}

/// Renders the label sheet into a string.
pub fn render_svg(layout: &LabelLayout, params: &LayoutParams) -> Result<String> {
    let mut buffer = Vec::new();
    write_svg_to(&mut buffer, layout, params)?;
    String::from_utf8(buffer).context("svg output is not valid UTF-8")
}

/// Streams the label sheet to any writer.
pub fn write_svg_to<W: Write>(out: W, layout: &LabelLayout, params: &LayoutParams) -> Result<()> {
    let mut xml = Writer::new(out);
    let width = layout.width.to_string();
    let height = layout.height.to_string();

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    xml.write_event(Event::Start(root))?;

    let mut background = BytesStart::new("rect");
    background.push_attribute(("width", "100%"));
    background.push_attribute(("height", "100%"));
    background.push_attribute(("fill", "none"));
    xml.write_event(Event::Empty(background))?;

    let font_size = params.font_size.to_string();
    for placed in &layout.names {
        let outline = text_start(placed, &params.font_family, &font_size, |text| {
            text.push_attribute(("fill", "none"));
            text.push_attribute(("stroke", OUTLINE_COLOR));
            text.push_attribute(("stroke-width", OUTLINE_WIDTH));
            text.push_attribute(("paint-order", "stroke"));
        });
        write_text(&mut xml, outline, &placed.name)?;

        let fill = text_start(placed, &params.font_family, &font_size, |text| {
            text.push_attribute(("fill", placed.color.as_str()));
            text.push_attribute(("stroke", "none"));
        });
        write_text(&mut xml, fill, &placed.name)?;
    }

    xml.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(())
}

fn text_start<'a>(
    placed: &PositionedName,
    font_family: &'a str,
    font_size: &'a str,
    paint: impl FnOnce(&mut BytesStart<'a>),
) -> BytesStart<'a> {
    let mut text = BytesStart::new("text");
    text.push_attribute(("x", placed.x.to_string().as_str()));
    text.push_attribute(("y", placed.y.to_string().as_str()));
    text.push_attribute(("font-family", font_family));
    text.push_attribute(("font-size", font_size));
    paint(&mut text);
    text.push_attribute(("text-anchor", "middle"));
    text
}

fn write_text<W: Write>(xml: &mut Writer<W>, start: BytesStart<'_>, name: &str) -> Result<()> {
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::from_escaped(escape_xml(name))))?;
    xml.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}
