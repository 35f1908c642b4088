//! Pie chart widget painted directly into the buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::view::PieSlice;

/// Wedge colors in group order, shared by the pie, its legend, and the
/// stacked wealth chart.
pub const GROUP_COLORS: [Color; 4] = [
    Color::Red,
    Color::LightMagenta,
    Color::Magenta,
    Color::Blue,
];

/// A filled disc whose wedges are proportional to the slice values.
/// Wedges start at 12 o'clock and run clockwise in slice order.
pub struct PieChart<'a> {
    slices: &'a [PieSlice],
    colors: &'a [Color],
}

impl<'a> PieChart<'a> {
    pub fn new(slices: &'a [PieSlice]) -> Self {
        Self {
            slices,
            colors: &GROUP_COLORS,
        }
    }

    pub fn colors(mut self, colors: &'a [Color]) -> Self {
        self.colors = colors;
        self
    }
}

/// The slice covering angular position `turn`, measured as a fraction
/// of a full clockwise revolution from 12 o'clock. `None` when the
/// slices sum to nothing.
pub fn slice_at(slices: &[PieSlice], turn: f64) -> Option<usize> {
    let total: f64 = slices.iter().map(|slice| slice.value.max(0.0)).sum();
    if total <= 0.0 {
        return None;
    }
    let turn = turn.rem_euclid(1.0);
    let mut cumulative = 0.0;
    for (idx, slice) in slices.iter().enumerate() {
        cumulative += slice.value.max(0.0) / total;
        if turn < cumulative {
            return Some(idx);
        }
    }
    // Floating-point slack at the end of the last wedge.
    Some(slices.len() - 1)
}

impl<'a> Widget for PieChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 || self.slices.is_empty() {
            return;
        }

        // Terminal cells are about twice as tall as wide, so the disc
        // spans twice as many columns as rows.
        let radius_y = f64::from(area.height.min(area.width / 2)) / 2.0;
        let radius_x = radius_y * 2.0;
        if radius_y < 1.0 {
            return;
        }
        let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
        let center_y = f64::from(area.y) + f64::from(area.height) / 2.0;

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let nx = (f64::from(x) + 0.5 - center_x) / radius_x;
                let ny = (f64::from(y) + 0.5 - center_y) / radius_y;
                if nx * nx + ny * ny > 1.0 {
                    continue;
                }
                let angle = nx.atan2(-ny);
                let turn = angle.rem_euclid(std::f64::consts::TAU) / std::f64::consts::TAU;
                if let Some(idx) = slice_at(self.slices, turn) {
                    let color = self.colors.get(idx).copied().unwrap_or(Color::White);
                    buf.get_mut(x, y)
                        .set_char('█')
                        .set_style(Style::default().fg(color));
                }
            }
        }
    }
}
