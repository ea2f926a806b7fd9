use crate::canvas::Canvas;
use crate::data_reader::DataReader;
use crate::error::Result;
use crate::pixel::Pixel;
use crate::sprite::Sprite;

const GLYPH_CELL_WIDTH: usize = 12;
const GLYPH_CELL_HEIGHT: usize = 12;
const GLYPH_COLUMNS: usize = 16;
const GLYPH_COUNT: usize = 256;

/// A decoded `.pic` picture bank: a background canvas plus a 256-entry
/// font built from it.
#[derive(Debug, Clone)]
pub struct PictureBank {
    pub background: Canvas,
    pub font: Vec<Sprite>,
}

/// Decodes a `.pic` buffer: u32 signature, u32 picture count, then per
/// picture a u16 width/height pair followed by `width*height` raw RGBA
/// pixels. The first picture is the font sheet; subsequent pictures are
/// backgrounds and are not needed by this engine's core.
pub fn parse_picture_file(bytes: &[u8]) -> Result<PictureBank> {
    let mut reader = DataReader::new(bytes);
    let _signature = reader.read_u32()?;
    let picture_count = reader.read_u32()?;

    let mut first_canvas = None;
    for _ in 0..picture_count {
        if reader.remaining() == 0 {
            break;
        }
        let width = reader.read_u16()? as usize;
        let height = reader.read_u16()? as usize;
        let mut pixels = Vec::with_capacity(width * height);
        for _ in 0..(width * height) {
            let raw = reader.read_bytes(4)?;
            pixels.push(Pixel::from_bytes(raw.try_into().unwrap()));
        }
        if first_canvas.is_none() {
            first_canvas = Some(Canvas::from_pixels(width, height, pixels));
        }
    }

    let background = first_canvas.unwrap_or_else(|| Canvas::new(0, 0));
    let font = build_font(&background);

    Ok(PictureBank { background, font })
}

/// Walks the glyph grid and extracts each of the 256 characters as a
/// tightly-bounded RLE sprite (§4.7: two-pass canvas extraction per
/// glyph cell).
fn build_font(canvas: &Canvas) -> Vec<Sprite> {
    let mut font = Vec::with_capacity(GLYPH_COUNT);

    for index in 0..GLYPH_COUNT {
        let col = index % GLYPH_COLUMNS;
        let row = index / GLYPH_COLUMNS;
        let x = col * GLYPH_CELL_WIDTH;
        let y = row * GLYPH_CELL_HEIGHT;

        if x + GLYPH_CELL_WIDTH > canvas.width() || y + GLYPH_CELL_HEIGHT > canvas.height() {
            font.push(Sprite::new(0, 0, Vec::new()));
            continue;
        }

        let (sprite, _render_w, _render_h) =
            canvas.extract_sprite(x, y, GLYPH_CELL_WIDTH, GLYPH_CELL_HEIGHT);
        font.push(sprite);
    }

    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_picture_bank_yields_a_full_but_blank_font() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let bank = parse_picture_file(&bytes).unwrap();
        assert_eq!(bank.font.len(), GLYPH_COUNT);
    }

    #[test]
    fn decodes_a_single_pixel_picture() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&[255, 0, 0, 255]);

        let bank = parse_picture_file(&bytes).unwrap();
        assert_eq!(bank.background.width(), 1);
        assert_eq!(bank.background.get(0, 0), Pixel::from_bytes([255, 0, 0, 255]));
    }
}
