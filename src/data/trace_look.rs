//! TraceLook: visual styling for the plotted channels and the threshold line.

use eframe::egui;
use egui_plot::LineStyle;

/// The visual presentation of a curve (color, visibility, width, line style).
#[derive(Debug, Clone)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl TraceLook {
    /// Create a new TraceLook with a color allocated based on the channel index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// A thin solid line in a fixed color.
    pub fn solid(color: egui::Color32, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
