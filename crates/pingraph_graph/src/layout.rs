// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node layout: pixel rectangles for the node body, its pins and pin labels.
//!
//! Layout is a pure function of the node position and its pin list. Text
//! width is estimated from the character count, so the result does not
//! depend on any font or renderer.

use crate::pin::{Pin, PinDirection};
use egui::{pos2, vec2, Pos2, Rect};

/// Width of a node with no pin names
pub const BASE_WIDTH: f32 = 60.0;
/// Height of the title strip at the top of a node
pub const HEADER_HEIGHT: f32 = 16.0;
/// Space kept below the last pin row
pub const FOOTER_PADDING: f32 = 16.0;
/// Edge length of a (square) pin
pub const PIN_SIZE: f32 = 10.0;
/// Vertical gap between two pins of the same direction
pub const PIN_SPACING: f32 = 10.0;
/// Estimated width of one character of label text
pub const CHAR_WIDTH: f32 = 8.0;
/// Estimated height of a line of label text
pub const LABEL_HEIGHT: f32 = 16.0;

const PIN_STEP: f32 = PIN_SIZE + PIN_SPACING;

/// Cached geometry of a node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGeometry {
    /// Node body
    pub rect: Rect,
    /// One rectangle per pin, indexed like the pin list
    pub pin_rects: Vec<Rect>,
    /// One label rectangle per pin, indexed like the pin list
    pub label_rects: Vec<Rect>,
}

impl NodeGeometry {
    /// Compute the geometry for a node at `position` with the given pins
    pub fn compute(position: [f32; 2], pins: &[Pin]) -> Self {
        let origin = pos2(position[0], position[1]);
        let width = BASE_WIDTH
            + longest_name_width(pins, PinDirection::Input)
            + longest_name_width(pins, PinDirection::Output);
        let rows = count(pins, PinDirection::Input).max(count(pins, PinDirection::Output));
        let height = HEADER_HEIGHT + PIN_STEP * rows as f32 + FOOTER_PADDING;
        let rect = Rect::from_min_size(origin, vec2(width, height));

        let mut inputs = 0usize;
        let mut outputs = 0usize;
        let mut pin_rects = Vec::with_capacity(pins.len());
        let mut label_rects = Vec::with_capacity(pins.len());

        for pin in pins {
            let rank = match pin.direction() {
                PinDirection::Input => {
                    inputs += 1;
                    inputs
                }
                PinDirection::Output => {
                    outputs += 1;
                    outputs
                }
            };
            let pin_rect = pin_rect(origin, width, rank, pin.direction());
            label_rects.push(label_rect(pin_rect, &pin.name, pin.direction()));
            pin_rects.push(pin_rect);
        }

        Self {
            rect,
            pin_rects,
            label_rects,
        }
    }

    /// Title strip of the node
    pub fn header_rect(&self) -> Rect {
        Rect::from_min_size(self.rect.min, vec2(self.rect.width(), HEADER_HEIGHT))
    }
}

/// Estimated on-screen width of a label
pub fn estimate_text_width(text: &str) -> f32 {
    text.chars().count() as f32 * CHAR_WIDTH
}

fn longest_name_width(pins: &[Pin], direction: PinDirection) -> f32 {
    pins.iter()
        .filter(|p| p.direction() == direction)
        .map(|p| estimate_text_width(&p.name))
        .fold(0.0, f32::max)
}

fn count(pins: &[Pin], direction: PinDirection) -> usize {
    pins.iter().filter(|p| p.direction() == direction).count()
}

/// `rank` is 1-based among pins sharing `direction`
fn pin_rect(origin: Pos2, node_width: f32, rank: usize, direction: PinDirection) -> Rect {
    let y = origin.y + HEADER_HEIGHT + rank as f32 * PIN_STEP;
    let x = match direction {
        PinDirection::Input => origin.x + PIN_SIZE,
        // Mirror of the input side: the pin's right edge sits PIN_SIZE from the border
        PinDirection::Output => origin.x + node_width - 2.0 * PIN_SIZE,
    };
    Rect::from_min_size(pos2(x, y), vec2(PIN_SIZE, PIN_SIZE))
}

/// Input labels start at the pin's right edge; output labels end there
fn label_rect(pin_rect: Rect, name: &str, direction: PinDirection) -> Rect {
    let width = (name.chars().count() + 1) as f32 * CHAR_WIDTH;
    let x = match direction {
        PinDirection::Input => pin_rect.max.x,
        PinDirection::Output => pin_rect.max.x - width,
    };
    Rect::from_min_size(pos2(x, pin_rect.min.y), vec2(width, LABEL_HEIGHT))
}
