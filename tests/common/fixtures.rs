//! Test fixtures and constants.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Colors used by the striped fixture images
pub mod colors {
    pub const RED: [u8; 3] = [220, 38, 38];
    pub const BLUE: [u8; 3] = [37, 99, 235];
    pub const YELLOW: [u8; 3] = [250, 204, 21];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// A trimmed copy of Tailwind's `colors.js`
pub const COLORS_JS: &str = r#"import log from '../util/log'

function warn({ version, from, to }) {
  log.warn(`deprecated-${from}`, [
    `As of Tailwind CSS ${version}, \`${from}\` has been renamed to \`${to}\`.`,
    'Update your configuration file to silence this warning.',
  ])
}

export default {
  inherit: 'inherit',
  current: 'currentColor',
  transparent: 'transparent',
  black: '#000',
  white: '#fff',
  red: {
    50: '#fef2f2',
    500: '#ef4444',
    900: '#7f1d1d',
  },
  blue: {
    50: '#eff6ff',
    500: '#3b82f6',
    900: '#1e3a8a',
  },
  yellow: {
    300: '#fde047',
    400: '#facc15',
  },
  get lightBlue() {
    warn({ version: 'v2.2', from: 'lightBlue', to: 'sky' })
    return this.sky
  },
}
"#;

/// Encode an image into the given format
pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}

/// Vertical stripes: each `(color, columns)` pair fills that many columns
pub fn striped_image(stripes: &[([u8; 3], u32)], height: u32) -> RgbImage {
    let width: u32 = stripes.iter().map(|(_, n)| n).sum();
    RgbImage::from_fn(width, height, |x, _| {
        let mut start = 0;
        for (color, columns) in stripes {
            if x < start + columns {
                return Rgb(*color);
            }
            start += columns;
        }
        Rgb(stripes[stripes.len() - 1].0)
    })
}

/// 10x10 PNG: 50% blue, 30% yellow, 20% red
pub fn three_color_png() -> Vec<u8> {
    encode(
        &striped_image(
            &[(colors::BLUE, 5), (colors::YELLOW, 3), (colors::RED, 2)],
            10,
        ),
        ImageFormat::Png,
    )
}

/// 4x4 PNG of a single color
pub fn solid_png(color: [u8; 3]) -> Vec<u8> {
    encode(&RgbImage::from_pixel(4, 4, Rgb(color)), ImageFormat::Png)
}
