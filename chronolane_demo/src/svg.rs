// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `chronolane_demo`.

use chronolane_layout::{EventShape, PlacedEvent, PlacedMarker, RegionLayout, TimelineLayout};
use kurbo::Rect;
use peniko::Color;

const RULER_HEIGHT: f64 = 40.0;
const LANE_TITLE_WIDTH: f64 = 160.0;
const FONT_SIZE: f64 = 11.0;
const CHAR_WIDTH: f64 = 5.0;

const LANE_FILLS: [Color; 2] = [
    Color::from_rgba8(0xf7, 0xf7, 0xf4, 0xff),
    Color::from_rgba8(0xee, 0xee, 0xe8, 0xff),
];
const INK: Color = Color::from_rgba8(0x33, 0x33, 0x33, 0xff);
const TICK: Color = Color::from_rgba8(0x99, 0x99, 0x99, 0xff);

#[derive(Debug, Default)]
pub(crate) struct SvgDoc {
    out: String,
}

impl SvgDoc {
    fn rect(&mut self, r: Rect, fill: Color) {
        self.out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ));
        write_paint_attr(&mut self.out, "fill", fill);
        self.out.push_str("/>\n");
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke: Color) {
        self.out.push_str(&format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}""#
        ));
        write_paint_attr(&mut self.out, "stroke", stroke);
        self.out.push_str("/>\n");
    }

    fn text(&mut self, x: f64, y: f64, text: &str, fill: Color, bold: bool) {
        self.out.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{FONT_SIZE}" dominant-baseline="middle""#
        ));
        if bold {
            self.out.push_str(r#" font-weight="bold""#);
        }
        write_paint_attr(&mut self.out, "fill", fill);
        self.out.push('>');
        self.out.push_str(&escape_xml(text));
        self.out.push_str("</text>\n");
    }

    fn ruler(&mut self, markers: &[PlacedMarker], height: f64) {
        for m in markers {
            let x = LANE_TITLE_WIDTH + m.x;
            self.line(x, RULER_HEIGHT - 8.0, x, height, TICK);
            self.text(x + 2.0, RULER_HEIGHT / 2.0, &m.label, INK, m.major);
        }
    }

    fn lane(&mut self, index: usize, lane: &RegionLayout<'_>, top: f64, width: f64) {
        self.rect(
            Rect::new(0.0, top, LANE_TITLE_WIDTH + width, top + lane.height),
            LANE_FILLS[index % LANE_FILLS.len()],
        );
        self.text(8.0, top + 16.0, lane.region.name(), INK, true);
        for placed in &lane.events {
            self.event(placed, top);
        }
    }

    fn event(&mut self, placed: &PlacedEvent<'_>, top: f64) {
        let rect = placed.rect + kurbo::Vec2::new(LANE_TITLE_WIDTH, top);
        let color = placed.event.effective_category().color();
        let mid_y = rect.center().y;
        match placed.shape {
            EventShape::Point => {
                self.line(rect.x0, rect.y0, rect.x0, rect.y1, color);
                self.rect(Rect::new(rect.x0, rect.y0, rect.x0 + 8.0, rect.y0 + 6.0), color);
            }
            EventShape::NarrowInterval | EventShape::WideInterval => self.rect(rect, color),
        }
        if placed.label_hidden {
            return;
        }
        let title = &placed.event.title;
        match placed.shape {
            EventShape::WideInterval => {
                let room = ((rect.width() - 8.0) / CHAR_WIDTH).max(0.0);
                self.text(rect.x0 + 4.0, mid_y, &truncate(title, room), INK, false);
            }
            EventShape::Point | EventShape::NarrowInterval => {
                let label_x = rect.x1 + 4.0;
                let text = match placed.label_max_width {
                    Some(w) => truncate(title, w / CHAR_WIDTH),
                    None => title.clone(),
                };
                self.text(label_x, mid_y, &text, INK, false);
            }
        }
    }
}

/// Renders a computed layout as a standalone SVG document.
pub(crate) fn render(layout: &TimelineLayout<'_>) -> String {
    let lanes_height: f64 = layout.regions.iter().map(|r| r.height).sum();
    let width = LANE_TITLE_WIDTH + layout.width;
    let height = RULER_HEIGHT + lanes_height;

    let mut doc = SvgDoc::default();
    doc.out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif">"#
    ));
    doc.out.push('\n');

    let mut top = RULER_HEIGHT;
    for (i, lane) in layout.regions.iter().enumerate() {
        doc.lane(i, lane, top, layout.width);
        top += lane.height;
    }
    doc.ruler(&layout.markers, height);

    doc.out.push_str("</svg>\n");
    doc.out
}

/// Shortens `text` to at most `max_chars` characters, ending with an ellipsis when cut.
fn truncate(text: &str, max_chars: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "non-negative character budget"
    )]
    let max_chars = max_chars.max(0.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Appends ` {name}="#rrggbb"`, plus ` {name}-opacity` for translucent colors.
fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != u8::MAX {
        let opacity = f64::from(rgba.a) / 255.0;
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_adds_an_ellipsis() {
        assert_eq!(truncate("Renaissance", 20.0), "Renaissance");
        assert_eq!(truncate("Renaissance", 5.0), "Rena…");
        assert_eq!(truncate("Renaissance", -3.0), "…");
    }

    #[test]
    fn paint_attrs_only_carry_opacity_when_translucent() {
        let mut out = String::new();
        write_paint_attr(&mut out, "fill", Color::from_rgba8(0x12, 0xab, 0xff, 0xff));
        assert_eq!(out, r##" fill="#12abff""##);

        out.clear();
        write_paint_attr(&mut out, "stroke", Color::from_rgba8(0, 0, 0, 0x33));
        assert_eq!(out, r##" stroke="#000000" stroke-opacity="0.2""##);
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("Rice paddies & <canals>"), "Rice paddies &amp; &lt;canals&gt;");
    }
}
