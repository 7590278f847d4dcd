use crate::AssetError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Channel layout chosen for upload, decided by the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }

    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// One level of a mipmap chain, always RGBA8.
#[derive(Debug, Clone)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// A decoded image with its rows stored bottom-to-top.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Decode the image file at `path` and flip it vertically.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let texture = Self::from_image(path, image)?;
        tracing::debug!(
            path = %path.display(),
            width = texture.width,
            height = texture.height,
            format = ?texture.format,
            "decoded texture image"
        );
        Ok(texture)
    }

    /// Accept an already decoded image. Only 3- and 4-channel images are
    /// supported; 16-bit images are narrowed to 8 bits per channel.
    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Result<Self, AssetError> {
        let path = path.into();
        let channels = image.color().channel_count();
        let format = PixelFormat::from_channels(channels)
            .ok_or_else(|| AssetError::UnsupportedChannels {
                path: path.clone(),
                channels,
            })?;
        let (width, height, pixels) = match format {
            PixelFormat::Rgb => {
                let mut buf = image.into_rgb8();
                imageops::flip_vertical_in_place(&mut buf);
                (buf.width(), buf.height(), buf.into_raw())
            }
            PixelFormat::Rgba => {
                let mut buf = image.into_rgba8();
                imageops::flip_vertical_in_place(&mut buf);
                (buf.width(), buf.height(), buf.into_raw())
            }
        };
        Ok(Self {
            path,
            width,
            height,
            format,
            pixels,
        })
    }

    /// Pixels widened to RGBA8. RGB images get an opaque alpha channel.
    pub fn rgba_pixels(&self) -> Cow<'_, [u8]> {
        match self.format {
            PixelFormat::Rgba => Cow::Borrowed(&self.pixels),
            PixelFormat::Rgb => Cow::Owned(
                self.pixels
                    .chunks_exact(3)
                    .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
                    .collect(),
            ),
        }
    }

    /// Full mipmap chain down to 1x1, level 0 first.
    pub fn mip_chain(&self) -> Vec<MipLevel> {
        let count = mip_level_count(self.width, self.height) as usize;
        let mut levels = Vec::with_capacity(count);
        let Some(mut current) =
            RgbaImage::from_raw(self.width, self.height, self.rgba_pixels().into_owned())
        else {
            return levels;
        };
        loop {
            let (width, height) = current.dimensions();
            let next = (width > 1 || height > 1).then(|| {
                imageops::resize(&current, (width / 2).max(1), (height / 2).max(1), FilterType::Triangle)
            });
            levels.push(MipLevel {
                width,
                height,
                pixels: current.into_raw(),
            });
            match next {
                Some(next) => current = next,
                None => break,
            }
        }
        levels
    }
}

/// Number of levels in a full chain: floor(log2(max(width, height))) + 1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba};

    const RED: [u8; 3] = [255, 0, 0];
    const BLUE: [u8; 3] = [0, 0, 255];

    fn two_row_rgb() -> RgbImage {
        // Top row red, bottom row blue.
        RgbImage::from_fn(2, 2, |_, y| if y == 0 { Rgb(RED) } else { Rgb(BLUE) })
    }

    #[test]
    fn rgb_file_loads_as_rgb_and_flips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        two_row_rgb().save(&path).unwrap();

        let texture = TextureImage::load(&path).unwrap();
        assert_eq!(texture.format, PixelFormat::Rgb);
        assert_eq!((texture.width, texture.height), (2, 2));
        assert_eq!(texture.pixels.len(), 2 * 2 * 3);
        // First stored row is the bottom row of the file.
        assert_eq!(&texture.pixels[0..3], &BLUE);
        assert_eq!(&texture.pixels[6..9], &RED);
    }

    #[test]
    fn rgba_file_loads_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        image::RgbaImage::from_pixel(4, 2, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let texture = TextureImage::load(&path).unwrap();
        assert_eq!(texture.format, PixelFormat::Rgba);
        assert_eq!(texture.pixels.len(), 4 * 2 * 4);
        assert_eq!(&texture.pixels[0..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn two_channel_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray_alpha.png");
        GrayAlphaImage::from_pixel(2, 2, LumaA([10, 255])).save(&path).unwrap();

        let err = TextureImage::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedChannels { channels: 2, .. }));
    }

    #[test]
    fn missing_file_is_decode_error_naming_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mars.jpg");
        let err = TextureImage::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("mars.jpg"));
    }

    #[test]
    fn rgb_widens_with_opaque_alpha() {
        let texture = TextureImage::from_image("mem", DynamicImage::ImageRgb8(two_row_rgb())).unwrap();
        let rgba = texture.rgba_pixels();
        assert_eq!(rgba.len(), 2 * 2 * 4);
        assert_eq!(&rgba[0..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn mip_chain_halves_down_to_one_pixel() {
        let image = RgbImage::from_pixel(8, 4, Rgb([9, 9, 9]));
        let texture = TextureImage::from_image("mem", DynamicImage::ImageRgb8(image)).unwrap();
        let chain = texture.mip_chain();
        let sizes: Vec<(u32, u32)> = chain.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(sizes, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
        assert!(chain.iter().all(|l| l.pixels.len() == (l.width * l.height * 4) as usize));
    }

    #[test]
    fn level_count_matches_largest_side() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(800, 600), 10);
        assert_eq!(mip_level_count(1024, 16), 11);
    }
}
