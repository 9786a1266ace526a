//! QR matrix for the download slide.
//!
//! Encoding is pure and offline: the same payload always yields the same
//! module grid. Rendering (canvas or SVG) lives in `components::qr_code`.

use std::fmt::Write as _;

use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Quiet zone, in modules, around the symbol.
pub const QR_MARGIN: usize = 1;
pub const QR_DARK: &str = "#000000";
pub const QR_LIGHT: &str = "#FFFFFF";

/// Square module grid including the margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    side: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(payload: &str) -> Result<Self, QrError> {
        let code = QrCode::new(payload.as_bytes())?;
        let width = code.width();
        let side = width + 2 * QR_MARGIN;
        let mut dark = vec![false; side * side];
        for (i, color) in code.to_colors().into_iter().enumerate() {
            if color == Color::Dark {
                let (x, y) = (i % width + QR_MARGIN, i / width + QR_MARGIN);
                dark[y * side + x] = true;
            }
        }
        Ok(Self { side, dark })
    }

    /// Modules per side, margin included.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.dark[y * self.side + x]
    }

    /// Pixel edge of one module when drawn at `size` pixels.
    pub fn module_px(&self, size: u32) -> f64 {
        f64::from(size) / self.side as f64
    }

    /// Canvas rectangle `(x, y, w, h)` of module `(x, y)` at `size` pixels.
    ///
    /// Edges are snapped to whole pixels so neighbouring modules share an
    /// edge exactly and the last module ends on `size`.
    pub fn module_rect(&self, x: usize, y: usize, size: u32) -> (f64, f64, f64, f64) {
        let px = self.module_px(size);
        let edge = |i: usize| (i as f64 * px).round();
        let (left, top) = (edge(x), edge(y));
        (left, top, edge(x + 1) - left, edge(y + 1) - top)
    }

    /// Coordinates of every dark module, row-major.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dark
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(|(i, _)| (i % self.side, i / self.side))
    }

    /// Standalone SVG of exactly `size` x `size` pixels.
    pub fn to_svg(&self, size: u32) -> String {
        let side = self.side;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#
        );
        let _ = write!(svg, r#"<rect width="{side}" height="{side}" fill="{QR_LIGHT}"/>"#);
        let _ = write!(svg, r#"<path fill="{QR_DARK}" d=""#);
        for (x, y) in self.dark_modules() {
            let _ = write!(svg, "M{x} {y}h1v1h-1z");
        }
        svg.push_str(r#""/></svg>"#);
        svg
    }
}

/// Blank square shown when a payload cannot be encoded.
pub fn blank_svg(size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><rect width="100%" height="100%" fill="{QR_LIGHT}"/></svg>"#
    )
}
