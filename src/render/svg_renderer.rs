use std::fmt::Write as _;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renders frames into a standalone SVG document.
///
/// The latest document is kept in memory; hosts embed it as markup or write
/// it to disk.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful `render`, empty before that.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = write_document(frame)
            .map_err(|e| ChartError::InvalidData(format!("failed to write svg document: {e}")))?;
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let (width, height) = (frame.viewport.width, frame.viewport.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    for polygon in &frame.polygons {
        writeln!(
            out,
            r#"  <polygon points="{}" {} {} stroke-width="{}"/>"#,
            points_attribute(&polygon.points),
            paint("fill", polygon.fill_color),
            paint("stroke", polygon.stroke_color),
            number(polygon.stroke_width),
        )?;
    }

    for line in &frame.lines {
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"/>"#,
            number(line.x1),
            number(line.y1),
            number(line.x2),
            number(line.y2),
            paint("stroke", line.color),
            number(line.stroke_width),
        )?;
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="middle" {}>{}</text>"#,
            number(text.x),
            number(text.y),
            number(text.font_size_px),
            paint("fill", text.color),
            escape_text(&text.text),
        )?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// `x1,y1 x2,y2 ...` as expected by `<polygon points>`.
fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", number(point.x), number(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(attribute: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#"{attribute}="{}""#, color.to_hex_rgb())
    } else {
        format!(
            r#"{attribute}="{}" {attribute}-opacity="{}""#,
            color.to_hex_rgb(),
            number(color.alpha)
        )
    }
}

/// Fixed 2-decimal precision with trailing zeros trimmed.
fn number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
