use std::borrow::Cow;
use std::fmt::Write;

use crate::error::RenderError;
use crate::geometry::Line;

const XML_SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes XML markup characters; borrows when there is nothing to escape.
pub(super) fn xml_escape(input: &str) -> Cow<'_, str> {
    if !input.contains(XML_SPECIAL) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&apos;",
            _ => {
                out.push(ch);
                continue;
            }
        };
        out.push_str(entity);
    }
    Cow::Owned(out)
}

/// Turns a display name into an XML id token, e.g. `frame-cinelli-zydeco`.
pub(super) fn slug(name: &str) -> String {
    let mut out = String::from("frame");
    let mut pending_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Builds the `d` attribute for a single straight segment.
pub(super) fn path_data(line: &Line) -> String {
    let (start, end) = (line.start(), line.end());
    format!("M{:.2} {:.2}L{:.2} {:.2}", start.x, start.y, end.x, end.y)
}

pub(super) fn write_preamble(out: &mut String, width: f64, height: f64) -> Result<(), RenderError> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    )?;
    Ok(())
}

pub(super) struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
    pub opacity: f64,
}

pub(super) fn write_segment(
    out: &mut String,
    class: &str,
    line: &Line,
    stroke: &Stroke<'_>,
) -> Result<(), RenderError> {
    writeln!(
        out,
        r#"    <path class="{class}" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-opacity="{}"/>"#,
        path_data(line),
        xml_escape(stroke.color),
        stroke.width,
        stroke.opacity,
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            xml_escape(r#"Fish & "Chips" <'n'>"#),
            "Fish &amp; &quot;Chips&quot; &lt;&apos;n&apos;&gt;"
        );
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(xml_escape("Cinelli Zydeco"), Cow::Borrowed(_)));
    }

    #[test]
    fn slug_has_no_whitespace() {
        assert_eq!(slug("Jamis Renegade Exploit"), "frame-jamis-renegade-exploit");
        assert_eq!(slug("Raleigh Tamland 2"), "frame-raleigh-tamland-2");
        assert_eq!(slug("  Salsa <Warbird>  "), "frame-salsa-warbird");
        assert_eq!(slug("???"), "frame");
    }

    #[test]
    fn path_data_uses_move_and_line() {
        let line = Line::new(Point2::new(30.0, 580.0), Point2::new(453.929, 652.0));
        assert_eq!(path_data(&line), "M30.00 580.00L453.93 652.00");
    }

    #[test]
    fn segment_carries_stroke_style() {
        let mut out = String::new();
        let line = Line::new(Point2::origin(), Point2::new(1.0, 1.0));
        let stroke = Stroke {
            color: "gray",
            width: 5.0,
            opacity: 0.5,
        };
        write_segment(&mut out, "fork", &line, &stroke).unwrap();
        assert!(out.contains(r#"class="fork""#));
        assert!(out.contains(r#"stroke="gray""#));
        assert!(out.contains(r#"stroke-width="5""#));
        assert!(out.contains(r#"stroke-linecap="round""#));
        assert!(out.contains(r#"stroke-opacity="0.5""#));
    }
}
