//! Text rendering of the loaded bar.
//!
//! Plates are drawn as columns, one row per 10 px of catalog height, centered
//! on the sleeve like plates on a real bar.

use itertools::Itertools;

use crate::{
    controller::Controller,
    theme::Theme,
    unit::Unit,
    widget::Widget,
};

const PIXELS_PER_ROW: u32 = 10;
const COLLAR_HEIGHT: u32 = 70;
const SLEEVE_LENGTH: usize = 4;

struct Palette {
    plate: char,
    collar: char,
    sleeve: char,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                plate: '█',
                collar: '▌',
                sleeve: '=',
            },
            Theme::Dark => Palette {
                plate: '▓',
                collar: '▒',
                sleeve: '-',
            },
        }
    }
}

#[must_use]
pub fn render(widget: &Widget) -> String {
    render_controller(widget.controller(), widget.theme())
}

#[must_use]
pub fn render_controller(controller: &Controller, theme: Theme) -> String {
    let configuration = controller.configuration();
    let mut lines = vec![format!(
        "{} | collars {} | {}",
        configuration.bar,
        if configuration.use_collars { "on" } else { "off" },
        controller.unit()
    )];

    lines.extend(draw_bar(controller, &Palette::for_theme(theme)));

    let mut legend = controller
        .loaded_plates()
        .iter()
        .enumerate()
        .map(|(index, weight)| format!("[{index}] {weight}"))
        .collect::<Vec<_>>();
    if configuration.use_collars {
        legend.push(format!("collars {}", controller.unit().collar_weight()));
    }
    if !legend.is_empty() {
        lines.push(legend.join("  "));
    }

    let text = controller.target_weight_text();
    if !text.is_empty() {
        let total = controller.total_weight();
        let note = if controller.target_weight() == Some(total) {
            String::new()
        } else {
            format!(" (target {})", text.trim())
        };
        lines.push(format!("{total} {}{note}", controller.unit()));
    }

    lines.join("\n")
}

/// The plate buttons for `unit`, heaviest first.
#[must_use]
pub fn catalog_line(unit: Unit) -> String {
    format!(
        "plates ({unit}): {}",
        unit.catalog().iter().map(|plate| plate.weight()).join(" ")
    )
}

fn rows(height: u32) -> u32 {
    height.div_ceil(PIXELS_PER_ROW).max(1)
}

fn draw_bar(controller: &Controller, palette: &Palette) -> Vec<String> {
    let unit = controller.unit();
    let mut columns = controller
        .loaded_plates()
        .iter()
        .map(|weight| {
            let height = unit.plate(*weight).map_or(PIXELS_PER_ROW, |plate| plate.height());
            (rows(height), palette.plate)
        })
        .collect::<Vec<_>>();
    if controller.configuration().use_collars {
        columns.push((rows(COLLAR_HEIGHT), palette.collar));
    }

    let tallest = columns.iter().map(|(height, _)| *height).max().unwrap_or(1);
    let middle = tallest / 2;

    (0..tallest)
        .map(|row| {
            let sleeve = if row == middle {
                palette.sleeve.to_string().repeat(SLEEVE_LENGTH)
            } else {
                " ".repeat(SLEEVE_LENGTH)
            };
            let cells = columns
                .iter()
                .map(|(height, glyph)| {
                    let top = (tallest - height) / 2;
                    if (top..top + height).contains(&row) {
                        *glyph
                    } else {
                        ' '
                    }
                })
                .join(" ");
            format!("{sleeve} {cells}").trim_end().to_string()
        })
        .collect()
}
