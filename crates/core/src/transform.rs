//! Destructive pixel-buffer transforms.
//!
//! Both transforms are pure: they borrow the input buffer, return a fresh
//! one, and never write into the original. That keeps history snapshots
//! valid no matter what happens to the buffer they were taken from.
//!
//! A degenerate region selects no pixels and both transforms return the
//! input unchanged; callers that want to report the condition check
//! [`Region::is_degenerate`] before invoking.

use crate::geometry::Region;
use image::{imageops, RgbaImage};

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// Block-pixelates the region, leaving every pixel outside it untouched.
///
/// The region is partitioned into `block_size` x `block_size` blocks
/// starting at its top-left corner; blocks on the right and bottom edges
/// are clipped to the region. Each block is filled with the average of its
/// own red, green and blue values (integer floor division over the clipped
/// extent). Alpha is never altered.
pub fn mosaic(buffer: &RgbaImage, region: Region, block_size: u32) -> RgbaImage {
    if region.is_degenerate() {
        return buffer.clone();
    }
    let bs = block_size.max(1);

    let stride = buffer.width() as usize * CHANNELS;
    let src: &[u8] = buffer.as_raw();
    let mut out = buffer.clone();
    let dst: &mut [u8] = &mut out;

    let mut block_top = region.top;
    while block_top < region.bottom() {
        let block_h = bs.min(region.bottom() - block_top);
        let mut block_left = region.left;
        while block_left < region.right() {
            let block_w = bs.min(region.right() - block_left);

            // Accumulate over the clipped block extent. Order-independent:
            // a plain sum, then one floor division per channel.
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for y in block_top..block_top + block_h {
                let row = y as usize * stride;
                for x in block_left..block_left + block_w {
                    let i = row + x as usize * CHANNELS;
                    r += src[i] as u64;
                    g += src[i + 1] as u64;
                    b += src[i + 2] as u64;
                }
            }
            let count = block_w as u64 * block_h as u64;
            let avg = [(r / count) as u8, (g / count) as u8, (b / count) as u8];

            for y in block_top..block_top + block_h {
                let row = y as usize * stride;
                for x in block_left..block_left + block_w {
                    let i = row + x as usize * CHANNELS;
                    dst[i..i + 3].copy_from_slice(&avg);
                }
            }

            block_left += bs;
        }
        block_top += bs;
    }

    out
}

/// Extracts the region into a new buffer of exactly the region's
/// dimensions. All four channels are copied verbatim.
///
/// The result has different dimensions than the input; any pending
/// selection against the old dimensions is invalid afterwards and must be
/// cleared by the caller.
pub fn crop(buffer: &RgbaImage, region: Region) -> RgbaImage {
    if region.is_degenerate() {
        return buffer.clone();
    }
    imageops::crop_imm(buffer, region.left, region.top, region.width, region.height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 1-pixel checkerboard: black where (x + y) is even, white otherwise.
    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    /// Per-pixel gradient so every coordinate has a distinct color.
    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        })
    }

    fn region(left: u32, top: u32, width: u32, height: u32) -> Region {
        Region {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn mosaic_checkerboard_block_averages_to_gray() {
        let input = checkerboard(20, 20);
        let out = mosaic(&input, region(0, 0, 10, 10), 10);

        // 50 black + 50 white pixels: floor(50 * 255 / 100) = 127.
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(out.get_pixel(x, y), &Rgba([127, 127, 127, 255]));
            }
        }
        // The other three quadrants are byte-identical to the input.
        for y in 0..20 {
            for x in 0..20 {
                if x >= 10 || y >= 10 {
                    assert_eq!(out.get_pixel(x, y), input.get_pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn mosaic_does_not_touch_pixels_outside_region() {
        let input = gradient(32, 24);
        let out = mosaic(&input, region(5, 7, 11, 9), 4);

        for y in 0..24 {
            for x in 0..32 {
                let inside = (5..16).contains(&x) && (7..16).contains(&y);
                if !inside {
                    assert_eq!(out.get_pixel(x, y), input.get_pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn mosaic_full_blocks_are_uniform_with_floor_average() {
        let input = gradient(16, 16);
        let bs = 4u32;
        let reg = region(0, 0, 16, 16);
        let out = mosaic(&input, reg, bs);

        for block_top in (0..16).step_by(bs as usize) {
            for block_left in (0..16).step_by(bs as usize) {
                let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
                for y in block_top..block_top + bs {
                    for x in block_left..block_left + bs {
                        let p = input.get_pixel(x, y);
                        r += p[0] as u64;
                        g += p[1] as u64;
                        b += p[2] as u64;
                    }
                }
                let count = (bs * bs) as u64;
                let expected = Rgba([(r / count) as u8, (g / count) as u8, (b / count) as u8, 255]);
                for y in block_top..block_top + bs {
                    for x in block_left..block_left + bs {
                        assert_eq!(out.get_pixel(x, y), &expected);
                    }
                }
            }
        }
    }

    #[test]
    fn mosaic_clips_partial_blocks_to_region_edge() {
        // 7x5 region with block size 4: right column blocks are 3 wide,
        // bottom row blocks are 1 tall. Averages cover only the clipped
        // extent, so each partial block is still uniform.
        let input = gradient(12, 12);
        let reg = region(2, 3, 7, 5);
        let out = mosaic(&input, reg, 4);

        let corner = out.get_pixel(6, 7).0;
        for y in 7..8 {
            for x in 6..9 {
                assert_eq!(out.get_pixel(x, y).0, corner);
            }
        }
    }

    #[test]
    fn mosaic_preserves_alpha_per_pixel() {
        let mut input = gradient(8, 8);
        input.get_pixel_mut(3, 3).0[3] = 42;
        let out = mosaic(&input, region(0, 0, 8, 8), 8);

        assert_eq!(out.get_pixel(3, 3).0[3], 42);
        assert_eq!(out.get_pixel(0, 0).0[3], 255);
        // Color still averaged across the single block.
        assert_eq!(out.get_pixel(0, 0).0[..3], out.get_pixel(7, 7).0[..3]);
    }

    #[test]
    fn mosaic_degenerate_region_is_identity() {
        let input = gradient(10, 10);
        let out = mosaic(&input, region(4, 4, 0, 5), 10);
        assert_eq!(out.as_raw(), input.as_raw());
    }

    #[test]
    fn crop_returns_region_dimensions_and_pixels() {
        let input = gradient(30, 20);
        let reg = region(6, 3, 12, 9);
        let out = crop(&input, reg);

        assert_eq!(out.width(), 12);
        assert_eq!(out.height(), 9);
        for j in 0..9 {
            for i in 0..12 {
                assert_eq!(out.get_pixel(i, j), input.get_pixel(6 + i, 3 + j));
            }
        }
    }

    #[test]
    fn crop_degenerate_region_is_identity() {
        let input = gradient(10, 10);
        let out = crop(&input, region(0, 0, 10, 0));
        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(out.as_raw(), input.as_raw());
    }
}
