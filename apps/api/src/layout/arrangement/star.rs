//! Star: real groups arranged around a content-free centre cell.
//!
//! The centre is a virtual group whose area is a quarter of the mean real group area.
//! Each count from 1 to 10 maps to a fixed topology of rows; a row cell holds either one
//! group or a vertical sub-column of groups. Labels are 1-based group numbers and the
//! label `n + 1` is the virtual group.

use crate::layout::arrangement::{
    area_equation, check_table_count, fit_heights, share_widths, MacroArranger, MacroLayout, TITLE_SCALE,
};
use crate::layout::column::{content_height, group_coefficient, group_margin_height};
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::models::Document;

/// Virtual group area relative to the mean real group area.
const VIRTUAL_AREA_SHARE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Group(usize),
    Column(&'static [usize]),
}

use Cell::{Column as C, Group as G};

type Row = &'static [Cell];

fn topology(n: usize) -> Option<&'static [Row]> {
    let rows: &'static [Row] = match n {
        1 => &[&[G(2), G(1)]],
        2 => &[&[G(3), G(1)], &[G(2)]],
        3 => &[&[G(1), G(4), G(2)], &[G(3)]],
        4 => &[&[G(1)], &[G(2), G(5), G(3)], &[G(4)]],
        5 => &[&[G(1), G(2)], &[G(3), G(6), G(4)], &[G(5)]],
        6 => &[&[G(1), G(2)], &[G(3), G(7), G(4)], &[G(5), G(6)]],
        7 => &[&[G(1), G(2), G(3)], &[G(4), G(8), G(5)], &[G(6), G(7)]],
        8 => &[
            &[G(1), G(2)],
            &[C(&[3, 4]), G(9), C(&[5, 6])],
            &[G(7), G(8)],
        ],
        9 => &[
            &[G(1), G(2), G(3)],
            &[C(&[4, 5]), G(10), C(&[6, 7])],
            &[G(8), G(9)],
        ],
        10 => &[
            &[G(1), G(2), G(3)],
            &[C(&[4, 5]), G(11), C(&[6, 7])],
            &[G(8), G(9), G(10)],
        ],
        _ => return None,
    };
    Some(rows)
}

/// Sub-columns stack subtitles, so a topology with any adds one subtitle band.
fn subtitle_bands(rows: &[Row]) -> usize {
    let stacked = rows
        .iter()
        .any(|row| row.iter().any(|cell| matches!(cell, Cell::Column(_))));
    rows.len() + usize::from(stacked)
}

/// Per-label measurements for one document.
struct Labels<'a> {
    doc: &'a Document,
    coefficients: Vec<f64>,
    virtual_coefficient: f64,
}

impl<'a> Labels<'a> {
    fn new(doc: &'a Document) -> Self {
        let coefficients: Vec<f64> = doc.groups.iter().map(group_coefficient).collect();
        let mean = if coefficients.is_empty() {
            0.0
        } else {
            coefficients.iter().sum::<f64>() / coefficients.len() as f64
        };
        Self {
            doc,
            coefficients,
            virtual_coefficient: VIRTUAL_AREA_SHARE * mean,
        }
    }

    fn is_virtual(&self, label: usize) -> bool {
        label > self.doc.groups.len()
    }

    fn coefficient(&self, label: usize) -> f64 {
        if self.is_virtual(label) {
            self.virtual_coefficient
        } else {
            self.coefficients[label - 1]
        }
    }

    fn height(&self, label: usize, x: f64, width: f64, opts: &LayoutOptions) -> f64 {
        if self.is_virtual(label) {
            0.0
        } else {
            content_height(&self.doc.groups[label - 1], x, width, opts)
        }
    }

    fn cell_coefficient(&self, cell: &Cell) -> f64 {
        match cell {
            Cell::Group(label) => self.coefficient(*label),
            Cell::Column(labels) => labels.iter().map(|&l| self.coefficient(l)).sum(),
        }
    }

    fn cell_height(&self, cell: &Cell, x: f64, width: f64, opts: &LayoutOptions) -> f64 {
        match cell {
            Cell::Group(label) => self.height(*label, x, width, opts),
            Cell::Column(labels) => labels
                .iter()
                .map(|&l| self.height(l, x, width, opts))
                .sum(),
        }
    }
}

pub struct Star;

impl Star {
    fn rows(doc: &Document) -> Result<&'static [Row], LayoutError> {
        let n = doc.groups.len();
        check_table_count("star", n)?;
        topology(n).ok_or(LayoutError::UnsupportedGroupCount {
            arrangement: "star",
            count: n,
        })
    }
}

impl MacroArranger for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError> {
        let rows = Self::rows(doc)?;
        let labels = Labels::new(doc);
        let b = labels.coefficients.iter().sum::<f64>() + labels.virtual_coefficient;
        let margins = doc
            .groups
            .iter()
            .map(|g| group_margin_height(g.items.len(), opts))
            .sum();
        Ok(area_equation(canvas, subtitle_bands(rows), b, margins))
    }

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError> {
        let rows = Self::rows(doc)?;
        let labels = Labels::new(doc);
        let mut frames = vec![Rect::new(0.0, 0.0, 0.0, 0.0); doc.groups.len()];
        let mut virtual_cell = None;

        let widths: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| {
                let shares: Vec<f64> = row.iter().map(|c| labels.cell_coefficient(c)).collect();
                share_widths(&shares, canvas.width)
            })
            .collect();
        let natural: Vec<f64> = rows
            .iter()
            .zip(&widths)
            .map(|(row, row_widths)| {
                row.iter()
                    .zip(row_widths)
                    .map(|(c, &w)| labels.cell_height(c, x, w, opts))
                    .fold(0.0, f64::max)
            })
            .collect();

        let top = TITLE_SCALE * x;
        let mut heights = natural.clone();
        fit_heights(&mut heights, canvas.height - top);

        let mut y = top;
        for (((row, row_widths), height), full) in rows.iter().zip(&widths).zip(heights).zip(natural) {
            // Stacked members shrink with their row.
            let fit = if full > 0.0 { height / full } else { 1.0 };
            let mut x0 = 0.0;
            for (cell, &w) in row.iter().zip(row_widths) {
                match cell {
                    Cell::Group(label) => {
                        let frame = Rect::new(x0, y, x0 + w, y + height);
                        if labels.is_virtual(*label) {
                            virtual_cell = Some(frame);
                        } else {
                            frames[label - 1] = frame;
                        }
                    }
                    Cell::Column(stack) => {
                        let mut y_stack = y;
                        for &label in stack.iter() {
                            let h = labels.height(label, x, w, opts) * fit;
                            frames[label - 1] = Rect::new(x0, y_stack, x0 + w, y_stack + h);
                            y_stack += h;
                        }
                    }
                }
                x0 += w;
            }
            y += height;
        }

        Ok(MacroLayout {
            frames,
            virtual_cell,
        })
    }
}
