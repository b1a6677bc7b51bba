use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::error::{ViewError, ViewResult};
use crate::render::{Color, RenderFrame, Renderer, SurfaceKind, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes each surface frame into a standalone SVG document.
///
/// The latest document per surface is kept until the next frame for that
/// surface replaces it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    documents: IndexMap<SurfaceKind, String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self, surface: SurfaceKind) -> Option<&str> {
        self.documents.get(&surface).map(String::as_str)
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewResult<()> {
        frame.validate()?;
        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        write_svg(&mut out, frame, &mut stats)
            .map_err(|err| ViewError::InvalidData(format!("failed to write svg: {err}")))?;
        self.documents.insert(frame.surface, out);
        self.last_stats = stats;
        Ok(())
    }
}

fn write_svg(
    out: &mut String,
    frame: &RenderFrame,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        writeln!(out, r#"<g class="layer-{:?}">"#, layer.kind)?;

        for rect in &layer.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height)
            )?;
            write_class(out, rect.class)?;
            write_paint(out, "fill", rect.fill_color)?;
            if rect.border_width > 0.0 {
                write_paint(out, "stroke", rect.border_color)?;
                write!(out, r#" stroke-width="{}""#, num(rect.border_width))?;
            }
            out.push_str("/>\n");
            stats.rects_drawn += 1;
        }

        for circle in &layer.circles {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                num(circle.cx),
                num(circle.cy),
                num(circle.radius)
            )?;
            write_class(out, circle.class)?;
            write_paint(out, "fill", circle.fill_color)?;
            out.push_str("/>\n");
            stats.circles_drawn += 1;
        }

        for line in &layer.lines {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                num(line.stroke_width)
            )?;
            write_paint(out, "stroke", line.color)?;
            out.push_str("/>\n");
            stats.lines_drawn += 1;
        }

        for text in &layer.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let baseline = match text.v_align {
                TextVAlign::Top => "hanging",
                TextVAlign::Middle => "middle",
                TextVAlign::Baseline => "alphabetic",
            };
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
                num(text.x),
                num(text.y),
                num(text.font_size_px)
            )?;
            if text.rotation_deg != 0.0 {
                write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    num(text.rotation_deg),
                    num(text.x),
                    num(text.y)
                )?;
            }
            write_paint(out, "fill", text.color)?;
            writeln!(out, ">{}</text>", escape_xml(&text.text))?;
            stats.texts_drawn += 1;
        }

        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn write_class(out: &mut String, class: Option<&str>) -> std::fmt::Result {
    match class {
        Some(class) => write!(out, r#" class="{}""#, escape_xml(class)),
        None => Ok(()),
    }
}

fn write_paint(out: &mut String, attr: &str, color: Color) -> std::fmt::Result {
    write!(out, r#" {attr}="{}""#, color.to_hex())?;
    if color.alpha < 1.0 {
        write!(out, r#" {attr}-opacity="{}""#, num(color.alpha))?;
    }
    Ok(())
}

/// Fixed three-decimal output with trailing zeros removed.
fn num(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
