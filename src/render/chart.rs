//! Chart orchestration: layout, day headers, glyph plotting, final emit

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Local};

use crate::render::canvas::{BOLD, Canvas};
use crate::render::heat::{color_for_temp, HeatColor};
use crate::render::layout::{bin_hours, ChartLayout, HOUR_WIDTH};
use crate::types::{HourSample, Result};

/// Width of the temperature label gutter ("-12°C ")
pub const SIDEBAR_WIDTH: usize = 6;

/// Plotted when the rounded actual temperature exceeds rounded feels-like
const GLYPH_FEELS_COLDER: char = '\u{2533}'; // ┳
/// Plotted when rounded feels-like exceeds the rounded actual temperature
const GLYPH_FEELS_WARMER: char = '\u{253B}'; // ┻
/// Plotted when both round to the same degree
const GLYPH_STEADY: char = '\u{2501}'; // ━
/// Day-boundary separator, drawn non-destructively
const SEPARATOR: char = '\u{2502}'; // │

/// Renders a sample run as a bordered, labeled ANSI chart block.
///
/// One render call is a single pass: layout, headers, plot, emit. Nothing is
/// retained between calls and no output is produced on failure.
pub struct ChartRenderer<'a> {
    heat_map: &'a [HeatColor],
    temp_unit: &'a str,
    term_cols: usize,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(heat_map: &'a [HeatColor], temp_unit: &'a str, term_cols: usize) -> Self {
        Self {
            heat_map,
            temp_unit,
            term_cols,
        }
    }

    /// Render the forecast to a multi-line text block ready to print.
    pub fn render(&self, samples: &[HourSample]) -> Result<String> {
        let chart_cols = self.term_cols.saturating_sub(SIDEBAR_WIDTH);
        let layout = bin_hours(samples, chart_cols)?;
        let mut canvas = Canvas::new(layout.scale.rows(), layout.hour_count() * HOUR_WIDTH)?;
        self.plot(&layout, &mut canvas)?;

        let mut out = String::new();
        push_header(&layout, &mut out);
        self.push_rows(&layout, &canvas, &mut out)?;
        push_footer(&layout, &mut out);
        Ok(out)
    }

    /// Plot one colored glyph per hour and the day-boundary separators.
    fn plot(&self, layout: &ChartLayout, canvas: &mut Canvas) -> Result<()> {
        let mut hour_idx = 0;
        for day in &layout.days {
            for hour in &day.hours {
                let row = (hour.temperature - f64::from(layout.scale.min)).round() as usize;
                let col = hour_idx * HOUR_WIDTH + HOUR_WIDTH / 2;

                canvas.set_color(row, col, color_for_temp(hour.temperature, self.heat_map))?;
                canvas.apply_style(row, col, BOLD)?;

                let actual = hour.temperature.round() as i64;
                let feels = hour.feels_like.round() as i64;
                let glyph = match actual.cmp(&feels) {
                    Ordering::Greater => GLYPH_FEELS_COLDER,
                    Ordering::Less => GLYPH_FEELS_WARMER,
                    Ordering::Equal => GLYPH_STEADY,
                };
                canvas.set(row, col, glyph)?;

                if hour.local_hour() == 0 || hour_idx == 0 {
                    canvas.set_vertical_bar(hour_idx * HOUR_WIDTH, SEPARATOR)?;
                }

                hour_idx += 1;
            }
        }
        Ok(())
    }

    /// Emit the plotted rows top-down, each behind its temperature label.
    fn push_rows(&self, layout: &ChartLayout, canvas: &Canvas, out: &mut String) -> Result<()> {
        for deg in (layout.scale.min..=layout.scale.max).rev() {
            let row = (deg - layout.scale.min) as usize;
            out.push_str(&format!(
                "{:>3}°{} {}\n",
                deg,
                self.temp_unit,
                canvas.render_row(row)?
            ));
        }
        Ok(())
    }
}

/// Pick the longest day-name rendering that fits `width` characters.
fn day_label(date: DateTime<Local>, width: usize) -> String {
    let weekday = date.format("%A").to_string();
    let candidates = [
        format!("{}, {} {}", weekday, date.format("%B"), date.day()),
        weekday.clone(),
        weekday.chars().take(3).collect(),
        weekday.chars().take(HOUR_WIDTH - 2).collect(),
    ];
    candidates
        .into_iter()
        .find(|candidate| candidate.chars().count() <= width)
        .unwrap_or_default()
}

/// Box-drawn day labels, one box per group, concatenated left to right.
fn push_header(layout: &ChartLayout, out: &mut String) {
    let pad = " ".repeat(SIDEBAR_WIDTH);
    let mut top = pad.clone();
    let mut middle = pad.clone();
    let mut bottom = pad;

    for day in &layout.days {
        let inner = day.span() - 2;
        let label = day_label(day.date, inner);
        let fill = "\u{2500}".repeat(inner);

        top.push('\u{250C}');
        top.push_str(&fill);
        top.push('\u{2510}');

        middle.push('\u{2502}');
        middle.push_str(&label);
        middle.push_str(&" ".repeat(inner - label.chars().count()));
        middle.push('\u{2502}');

        bottom.push('\u{2514}');
        bottom.push_str(&fill);
        bottom.push('\u{2518}');
    }

    for line in [top, middle, bottom] {
        out.push_str(&line);
        out.push('\n');
    }
}

/// Horizontal tick rule plus the two-digit hour labels under each column.
fn push_footer(layout: &ChartLayout, out: &mut String) {
    let pad = " ".repeat(SIDEBAR_WIDTH);
    let dashes = "\u{2500}".repeat(HOUR_WIDTH - 1);

    let mut rule = pad.clone();
    rule.push('\u{2514}');
    for _ in 0..layout.hour_count() - 1 {
        rule.push_str(&dashes);
        rule.push('\u{2534}');
    }
    rule.push_str(&dashes);
    rule.push('\u{2518}');
    out.push_str(&rule);
    out.push('\n');

    let mut labels = pad;
    for day in &layout.days {
        for hour in &day.hours {
            labels.push_str(&format!(
                "{:02}{}",
                hour.local_hour(),
                " ".repeat(HOUR_WIDTH - 2)
            ));
        }
    }
    out.push_str(&labels);
    out.push('\n');
}
