//! TikZ document generation.
//!
//! Each hexagon is written as a `%hex` marker line followed by its outline;
//! the session loader relies on that pair, so the outline must stay on the
//! line right after the marker and start with vertex 0.

use super::types::{DocumentStyle, ExportRequest};
use crate::hex::{Hexagon, Point, SIDES};
use crate::util::format_coord;

/// Marker line preceding every hexagon outline.
pub const HEX_MARKER: &str = "%hex";

const PREAMBLE: &str = r"\documentclass[tikz]{standalone}
\begin{document}

% The scale sets the side length of the hexagons in cm.";

const POSTAMBLE: &str = r"\end{tikzpicture}
\end{document}
";

/// Renders a point as a TikZ coordinate pair.
pub fn coord(point: &Point) -> String {
    format!("({}, {})", format_coord(point.x), format_coord(point.y))
}

/// Closed outline of a hexagon, starting at vertex 0.
pub fn outline_line(hexagon: &Hexagon, line_width: &str) -> String {
    let path = hexagon
        .vertices()
        .iter()
        .map(coord)
        .collect::<Vec<_>>()
        .join(" -- ");
    format!(r"\draw [line width={line_width}] {path} -- cycle;")
}

/// Emphasised strokes for the boundary edges of a hexagon.
pub fn boundary_lines(hexagon: &Hexagon, flags: &[bool; SIDES], line_width: &str) -> Vec<String> {
    (0..SIDES)
        .filter(|&k| flags[k])
        .map(|k| {
            let (a, b) = hexagon.edge(k);
            format!(
                r"\draw [line width={line_width}] {} -- {};",
                coord(&a),
                coord(&b)
            )
        })
        .collect()
}

/// Framed index label at the center of a hexagon.
pub fn index_node(hexagon: &Hexagon, index: usize) -> String {
    format!(r"\node[draw] at {} {{{}}};", coord(&hexagon.center()), index)
}

/// Edge number labels at the edge midpoints of a hexagon.
pub fn edge_nodes(hexagon: &Hexagon) -> Vec<String> {
    hexagon
        .edge_midpoints()
        .iter()
        .enumerate()
        .map(|(k, midpoint)| format!(r"\node at {} {{{}}};", coord(midpoint), k))
        .collect()
}

/// Builds the complete document.
///
/// `edge_flags` must be parallel to `hexagons`. A `highlight_edges_of` index
/// outside the collection is ignored.
pub fn render_document(
    hexagons: &[Hexagon],
    edge_flags: &[[bool; SIDES]],
    style: &DocumentStyle,
    request: &ExportRequest,
) -> String {
    let mut lines = vec![
        PREAMBLE.to_string(),
        format!(r"\begin{{tikzpicture}}[scale={}]", format_coord(style.scale)),
    ];

    for (index, hexagon) in hexagons.iter().enumerate() {
        lines.push(HEX_MARKER.to_string());
        lines.push(outline_line(hexagon, &style.interior_line_width));
        if let Some(flags) = edge_flags.get(index) {
            lines.extend(boundary_lines(hexagon, flags, &style.boundary_line_width));
        }
        if request.show_indices {
            lines.push(index_node(hexagon, index));
        }
    }

    if let Some(index) = request.highlight_edges_of {
        match hexagons.get(index) {
            Some(hexagon) => lines.extend(edge_nodes(hexagon)),
            None => log::warn!(
                "Cannot label edges of hexagon {}: only {} hexagons",
                index,
                hexagons.len()
            ),
        }
    }

    lines.push(POSTAMBLE.to_string());
    lines.join("\n")
}
