use crate::export::tikz::HEX_MARKER;
use crate::hex::{Hexagon, Point};
use anyhow::{Context, Result, anyhow, bail};

/// Extracts the hexagons stored in a saved document.
///
/// Every line equal to `%hex` must be followed by an outline whose first
/// coordinate pair is vertex 0. Each hexagon is rebuilt from that vertex
/// alone; everything else in the document is ignored.
pub fn parse_document(contents: &str) -> Result<Vec<Hexagon>> {
    let mut hexagons = Vec::new();
    let mut lines = contents.lines().enumerate();

    while let Some((_, line)) = lines.next() {
        if line.trim() != HEX_MARKER {
            continue;
        }

        let (index, outline) = lines
            .next()
            .ok_or_else(|| anyhow!("{} marker at end of document", HEX_MARKER))?;
        let line_number = index + 1;
        let anchor = first_coordinate(outline)
            .with_context(|| format!("invalid hexagon outline on line {}", line_number))?;
        hexagons.push(Hexagon::new(anchor, 0));
    }

    Ok(hexagons)
}

/// Parses the first `(x, y)` pair in `line`.
fn first_coordinate(line: &str) -> Result<Point> {
    let open = line
        .find('(')
        .ok_or_else(|| anyhow!("no coordinate in '{}'", line.trim()))?;
    let rest = &line[open + 1..];
    let close = rest
        .find(')')
        .ok_or_else(|| anyhow!("unterminated coordinate in '{}'", line.trim()))?;

    let mut parts = rest[..close].split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two components in '({})'", &rest[..close]);
    };

    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x component '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y component '{}'", y.trim()))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("non-finite coordinate ({}, {})", x, y);
    }

    Ok(Point::new(x, y))
}
