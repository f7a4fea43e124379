use anyhow::Context;
use image::ImageFormat;
use image::RgbaImage;
use rps_hands::Sign;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Decoded RGBA image of one sign, alpha channel included, ready for the
/// compositor.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    sign: Sign,
    image: Rc<RgbaImage>,
}

impl Sprite {
    pub fn sign(&self) -> Sign {
        self.sign
    }
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Image lookup by sign name.
pub trait Assets {
    fn load(&mut self, sign: Sign) -> anyhow::Result<Sprite>;
}

/// PNG files named after each sign (`Rock.png`, ...) in one directory.
/// Successful loads are cached; failures are retried on the next request.
#[derive(Debug)]
pub struct Directory {
    root: PathBuf,
    cache: HashMap<Sign, Sprite>,
}

impl Directory {
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }
    pub fn path(&self, sign: Sign) -> PathBuf {
        self.root.join(format!("{}.png", sign))
    }
    fn read(&self, sign: Sign) -> anyhow::Result<Sprite> {
        let path = self.path(sign);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("image {} could not be loaded", path.display()))?;
        let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .with_context(|| format!("image {} could not be decoded", path.display()))?
            .to_rgba8();
        log::debug!(
            "[assets] loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Sprite {
            sign,
            image: Rc::new(image),
        })
    }
}

impl Assets for Directory {
    fn load(&mut self, sign: Sign) -> anyhow::Result<Sprite> {
        if let Some(sprite) = self.cache.get(&sign) {
            return Ok(sprite.clone());
        }
        let sprite = self.read(sign)?;
        self.cache.insert(sign, sprite.clone());
        Ok(sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rps-assets-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut assets = Directory::new(scratch("missing"));
        let error = assets.load(Sign::Rock).unwrap_err();
        assert!(format!("{:#}", error).contains("Rock.png could not be loaded"));
    }

    #[test]
    fn rejects_non_png() {
        let dir = scratch("text");
        std::fs::write(dir.join("Paper.png"), b"not an image").unwrap();
        let mut assets = Directory::new(dir);
        assert!(assets.load(Sign::Paper).is_err());
    }

    #[test]
    fn rejects_corrupt_body_behind_png_signature() {
        let dir = scratch("corrupt");
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(b"this is not an image");
        std::fs::write(dir.join("Rock.png"), bytes).unwrap();
        let mut assets = Directory::new(dir);
        let error = assets.load(Sign::Rock).unwrap_err();
        assert!(format!("{:#}", error).contains("Rock.png could not be decoded"));
    }

    #[test]
    fn decodes_rgba_and_caches() {
        let dir = scratch("cache");
        let pixel = Rgba([200, 10, 10, 128]);
        RgbaImage::from_pixel(2, 1, pixel)
            .save(dir.join("Scissors.png"))
            .unwrap();
        let mut assets = Directory::new(dir.clone());
        let sprite = assets.load(Sign::Scissors).unwrap();
        assert!(sprite.sign() == Sign::Scissors);
        assert!(sprite.image().dimensions() == (2, 1));
        assert!(*sprite.image().get_pixel(1, 0) == pixel);
        std::fs::remove_file(dir.join("Scissors.png")).unwrap();
        assert!(assets.load(Sign::Scissors).unwrap() == sprite);
    }
}
