use algo::export;
use algo::universe::Universe;
use image::{GrayImage, ImageBuffer, Luma};
use std::path::Path;

pub use image::{ImageError, ImageResult};

const DEAD: Luma<u8> = Luma([0]);
const ALIVE: Luma<u8> = Luma([255]);

/// Renders the current generation, each cell as a `scale` x `scale` square.
/// Live cells are white.
pub fn to_image(uni: &Universe, scale: u32) -> GrayImage {
  let scale = scale.max(1);
  let size = uni.side() as u32 * scale;
  let mut buffer = ImageBuffer::from_pixel(size, size, DEAD);

  export::write_cells(uni, |row, col| {
    let x0 = col as u32 * scale;
    let y0 = row as u32 * scale;
    for y in y0..y0 + scale {
      for x in x0..x0 + scale {
        buffer.put_pixel(x, y, ALIVE);
      }
    }
  });

  buffer
}

/// Saves the current generation; the format follows the file extension.
pub fn save_image(uni: &Universe, scale: u32, path: impl AsRef<Path>) -> ImageResult<()> {
  to_image(uni, scale).save(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_to_image() {
    let uni = Universe::new(vec![1, 3].into_iter().collect(), 2).unwrap();
    let img = to_image(&uni, 2);
    assert_eq!(img.dimensions(), (4, 4));

    let pixels: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
    assert_eq!(pixels, vec![
      0, 0, 255, 255,
      0, 0, 255, 255,
      0, 0, 255, 255,
      0, 0, 255, 255,
    ]);
  }

  #[test]
  fn test_zero_scale_is_one_pixel_per_cell() {
    let uni = Universe::new(vec![0].into_iter().collect(), 3).unwrap();
    let img = to_image(&uni, 0);
    assert_eq!(img.dimensions(), (3, 3));
    assert_eq!(img.get_pixel(0, 0), &ALIVE);
    assert_eq!(img.get_pixel(1, 0), &DEAD);
  }
}
