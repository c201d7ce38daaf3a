use crate::renderer::fonts::FontConfig;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut,
};
use imageproc::rect::Rect;

pub fn fill(image: &mut RgbaImage, colour: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        *pixel = colour;
    }
}

pub fn horizontal_line(image: &mut RgbaImage, x1: u32, x2: u32, y: u32, colour: Rgba<u8>) {
    draw_line_segment_mut(
        image,
        (x1 as f32, y as f32),
        (x2 as f32, y as f32),
        colour,
    );
}

pub fn vertical_line(image: &mut RgbaImage, x: u32, y1: u32, y2: u32, colour: Rgba<u8>) {
    draw_line_segment_mut(
        image,
        (x as f32, y1 as f32),
        (x as f32, y2 as f32),
        colour,
    );
}

pub fn segment(image: &mut RgbaImage, from: (f32, f32), to: (f32, f32), colour: Rgba<u8>) {
    draw_line_segment_mut(image, from, to, colour);
}

pub fn marker(image: &mut RgbaImage, centre: (f32, f32), radius: i32, colour: Rgba<u8>) {
    draw_filled_circle_mut(
        image,
        (centre.0.round() as i32, centre.1.round() as i32),
        radius,
        colour,
    );
}

pub fn frame(image: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, colour: Rgba<u8>) {
    draw_hollow_rect_mut(image, Rect::at(x, y).of_size(width, height), colour);
}

pub fn text(
    image: &mut RgbaImage,
    colour: Rgba<u8>,
    x: i32,
    y: i32,
    font_config: &FontConfig,
    text: &str,
) {
    draw_text_mut(
        image,
        colour,
        x,
        y,
        font_config.scale,
        &font_config.font,
        text,
    );
}

/// Draws `text` horizontally centred on `centre_x`.
pub fn centred_text(
    image: &mut RgbaImage,
    colour: Rgba<u8>,
    centre_x: i32,
    y: i32,
    font_config: &FontConfig,
    label: &str,
) {
    let half = (font_config.text_width(label) / 2.0).round() as i32;
    text(image, colour, centre_x - half, y, font_config, label);
}

/// Draws `text` so that it ends at `right_x`.
pub fn right_aligned_text(
    image: &mut RgbaImage,
    colour: Rgba<u8>,
    right_x: i32,
    y: i32,
    font_config: &FontConfig,
    label: &str,
) {
    let width = font_config.text_width(label).round() as i32;
    text(image, colour, right_x - width, y, font_config, label);
}
