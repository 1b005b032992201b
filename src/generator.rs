/// The asset generator: one decoded source image in, four files out
///
/// Execution is a single linear sequence: decode and normalize the source,
/// write the three padded PNG targets in table order, then write the
/// multi-resolution ICO container. Every written file's absolute path is
/// recorded so the caller can print a summary listing after the run.
use anyhow::{Context, Result};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::constants::{ICO_FILE, ICO_FRAME_SIZES, PNG_TARGETS};
use crate::thumbnail;

pub struct AssetGenerator {
    /// Normalized RGBA source, read-only after decode
    source: RgbaImage,
    /// Directory all outputs are written to
    out_dir: PathBuf,
    /// Absolute paths of every file written so far, in write order
    generated: Vec<PathBuf>,
}

impl AssetGenerator {
    /// Decode the source image and normalize it to RGBA8
    ///
    /// Any decodable format works; opaque layouts gain a fully opaque alpha
    /// channel. Decode failures propagate as fatal errors.
    pub fn open(source_path: &Path, out_dir: &Path) -> Result<Self> {
        let source = image::open(source_path)
            .with_context(|| format!("Failed to decode {}", source_path.display()))?
            .to_rgba8();

        Ok(AssetGenerator {
            source,
            out_dir: out_dir.to_path_buf(),
            generated: Vec::new(),
        })
    }

    /// Produce the full fixed asset set: three PNGs, then the ICO container
    pub fn generate_all(&mut self) -> Result<()> {
        self.write_png_targets()?;
        self.write_icon_container()?;
        Ok(())
    }

    /// Write each padded PNG target, printing one confirmation line per file
    pub fn write_png_targets(&mut self) -> Result<()> {
        for target in PNG_TARGETS {
            let canvas = thumbnail::padded_thumbnail(&self.source, target.width, target.height);
            let path = self.out_dir.join(target.name);
            canvas
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            self.record(&path)?;
            println!("Saved {}", target.name);
        }
        Ok(())
    }

    /// Write the ICO container holding one down-scaled frame per entry in
    /// the frame-size table
    pub fn write_icon_container(&mut self) -> Result<()> {
        let mut dir = ico::IconDir::new(ico::ResourceType::Icon);

        for &size in ICO_FRAME_SIZES {
            let frame = thumbnail::scaled_copy(&self.source, size, size);
            let (w, h) = frame.dimensions();
            let icon = ico::IconImage::from_rgba_data(w, h, frame.into_raw());
            dir.add_entry(
                ico::IconDirEntry::encode(&icon)
                    .with_context(|| format!("Failed to encode {size}x{size} ICO frame"))?,
            );
        }

        let path = self.out_dir.join(ICO_FILE);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        dir.write(BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        self.record(&path)?;
        println!("Saved {ICO_FILE}");
        Ok(())
    }

    /// Absolute paths of every file written, in write order
    pub fn generated_paths(&self) -> &[PathBuf] {
        &self.generated
    }

    fn record(&mut self, path: &Path) -> Result<()> {
        let absolute = std::path::absolute(path)
            .with_context(|| format!("Failed to resolve {}", path.display()))?;
        self.generated.push(absolute);
        Ok(())
    }
}
