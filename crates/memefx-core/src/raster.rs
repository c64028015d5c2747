//! The RGB raster buffer every effect reads and writes.

/// An RGB image held as a dense, row-major pixel grid.
///
/// Row index grows downward, column index grows rightward. The buffer
/// holds exactly `width * height * 3` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new Raster with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&rgb);
        }
        Self::new(width, height, pixels)
    }

    /// Create a Raster from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert into an image::RgbImage, consuming the buffer.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Check that the buffer length agrees with the dimensions.
    pub fn is_consistent(&self) -> bool {
        self.pixels.len() == self.pixel_count() * 3
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        (row * self.width as usize + col) * 3
    }

    /// Read the pixel at `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let idx = self.index(row, col);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Overwrite the pixel at `(row, col)`.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let idx = self.index(row, col);
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Borrow one row as a byte slice of length `width * 3`.
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width as usize * 3;
        &self.pixels[row * stride..(row + 1) * stride]
    }

    /// Return a copy with rows and columns swapped.
    ///
    /// Lets the vertical-seam machinery carve horizontal seams.
    pub fn transpose(&self) -> Raster {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut pixels = vec![0u8; self.pixels.len()];
        for row in 0..h {
            for col in 0..w {
                let src = (row * w + col) * 3;
                let dst = (col * h + row) * 3;
                pixels[dst..dst + 3].copy_from_slice(&self.pixels[src..src + 3]);
            }
        }
        Raster {
            width: self.height,
            height: self.width,
            pixels,
        }
    }
}
