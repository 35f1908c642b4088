//! Year slider: a single-thumb bounded numeric control.
//!
//! State and arithmetic live in [`Slider`]; [`SliderTrack`] paints it.
//! Change callbacks receive the new value wrapped in a one-element
//! slice, the shape emitted by single-thumb range controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

#[derive(Debug, Clone)]
pub struct Slider {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl Slider {
    pub fn new(value: i32, min: i32, max: i32, step: i32) -> Self {
        Self {
            value,
            min,
            max,
            step: step.max(1),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Programmatic write. The value is stored verbatim (callers own
    /// range checks) and the callback fires with the new value unless
    /// nothing changed.
    pub fn set_value(&mut self, value: i32, mut on_change: impl FnMut(&[i32])) {
        if value == self.value {
            return;
        }
        self.value = value;
        on_change(&[value]);
    }

    /// Keyboard path: move by whole steps, saturating at the bounds.
    pub fn nudge(&mut self, delta_steps: i32, on_change: impl FnMut(&[i32])) {
        let target = self
            .value
            .saturating_add(delta_steps.saturating_mul(self.step))
            .clamp(self.min, self.max);
        self.set_value(target, on_change);
    }

    /// The row of cells between the min and max labels where the track
    /// is painted. Mouse handling maps columns through the same rect.
    pub fn track_rect(&self, area: Rect) -> Rect {
        let left = self.min.to_string().len() as u16 + 1;
        let right = self.max.to_string().len() as u16 + 1;
        let width = area.width.saturating_sub(left + right);
        Rect {
            x: area.x.saturating_add(left),
            y: area.y.saturating_add(area.height.saturating_sub(1)),
            width,
            height: 1,
        }
    }

    /// Mouse path: the step-aligned value under a track column, clamped
    /// into the control's range like a native drag.
    pub fn value_at_column(&self, track: Rect, column: u16) -> i32 {
        if track.width <= 1 || self.max <= self.min {
            return self.min;
        }
        let offset = column.saturating_sub(track.x).min(track.width - 1);
        let fraction = f64::from(offset) / f64::from(track.width - 1);
        let raw = f64::from(self.min) + fraction * f64::from(self.max - self.min);
        let steps = ((raw - f64::from(self.min)) / f64::from(self.step)).round() as i32;
        self.min
            .saturating_add(steps.saturating_mul(self.step))
            .clamp(self.min, self.max)
    }

    fn handle_column(&self, track: Rect) -> u16 {
        if track.width <= 1 || self.max <= self.min {
            return track.x;
        }
        let fraction =
            (f64::from(self.value - self.min) / f64::from(self.max - self.min)).clamp(0.0, 1.0);
        track.x + (fraction * f64::from(track.width - 1)).round() as u16
    }
}

/// Renders a [`Slider`]: min/max labels flanking the track, the handle
/// at the current value, and the value printed above the handle when
/// there is a spare row.
pub struct SliderTrack<'a> {
    slider: &'a Slider,
    track_style: Style,
    filled_style: Style,
    handle_style: Style,
    label_style: Style,
}

impl<'a> SliderTrack<'a> {
    pub fn new(slider: &'a Slider) -> Self {
        Self {
            slider,
            track_style: Style::default().fg(Color::DarkGray),
            filled_style: Style::default().fg(Color::Cyan),
            handle_style: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl<'a> Widget for SliderTrack<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let slider = self.slider;
        let track = slider.track_rect(area);
        if track.width == 0 {
            return;
        }
        let row = track.y;

        buf.set_string(area.x, row, slider.min.to_string(), self.label_style);
        let max_label = slider.max.to_string();
        let max_x = area
            .x
            .saturating_add(area.width.saturating_sub(max_label.len() as u16));
        buf.set_string(max_x, row, max_label, self.label_style);

        let handle_x = slider.handle_column(track);
        for x in track.x..track.x + track.width {
            let style = if x < handle_x {
                self.filled_style
            } else {
                self.track_style
            };
            buf.get_mut(x, row).set_char('─').set_style(style);
        }
        buf.get_mut(handle_x, row)
            .set_char('●')
            .set_style(self.handle_style);

        // Value caption above the handle, kept inside the area.
        if area.height >= 2 {
            let caption = slider.value.to_string();
            let half = (caption.len() / 2) as u16;
            let start = handle_x
                .saturating_sub(half)
                .min(area.x + area.width.saturating_sub(caption.len() as u16))
                .max(area.x);
            buf.set_string(start, row - 1, caption, self.handle_style);
        }
    }
}
