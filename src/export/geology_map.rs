//! Soil preview map export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgb};

use crate::resources::ResourceType;
use crate::tiles::TileGrid;

use super::png::ExportError;

/// Options for geology map export.
#[derive(Debug, Clone)]
pub struct GeologyMapOptions {
    pub compression: CompressionType,
    pub filter: FilterType,
    /// Color for tiles carrying a river; `None` leaves them soil-colored.
    pub river_color: Option<[u8; 3]>,
    /// Darken low ground and lighten high ground.
    pub shade_by_elevation: bool,
}

impl Default for GeologyMapOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
            river_color: Some([40, 90, 200]),
            shade_by_elevation: true,
        }
    }
}

fn shade(color: [u8; 3], factor: f32) -> [u8; 3] {
    color.map(|c| (c as f32 * factor).round().clamp(0.0, 255.0) as u8)
}

/// Writes the tile grid as an RGB PNG colored by soil type.
pub fn export_geology_map_png(
    grid: &TileGrid,
    path: &Path,
    options: &GeologyMapOptions,
) -> Result<(), ExportError> {
    let size = grid.size() as u32;
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(size, size, |x, y| {
        let tile = grid.get(x as usize, y as usize);
        if let Some(river) = options.river_color {
            if tile.has_resource(ResourceType::River) {
                return Rgb(river);
            }
        }
        let mut c = tile.geology.soil_type.preview_rgb();
        if options.shade_by_elevation {
            // 0.7 at elevation 0 up to 1.3 at 150
            let t = (tile.geology.elevation as f32 / 150.0).clamp(0.0, 1.0);
            c = shade(c, 0.7 + 0.6 * t);
        }
        Rgb(c)
    });

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), size, size, image::ExtendedColorType::Rgb8)?;

    tracing::debug!(path = %path.display(), size, "geology map exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::geology::SoilType;
    use crate::resources::Resource;
    use crate::terrain::Heightfield;
    use crate::tiles::derive_tiles;
    use tempfile::tempdir;

    #[test]
    fn test_export_geology_map() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("geology.png");
        let field = Heightfield::from_values(10, vec![20.0; 100]).unwrap();
        let mut grid = derive_tiles(&field, &SimConfig::default());
        grid.get_mut(4, 4).resources.push(Resource::new(ResourceType::River, 0.9, false, 0.95));

        let options = GeologyMapOptions {
            shade_by_elevation: false,
            ..Default::default()
        };
        export_geology_map_png(&grid, &path, &options).unwrap();

        let img = image::open(&path).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(img.get_pixel(4, 4).0, [40, 90, 200]);
        let soil = grid.get(1, 1).geology.soil_type;
        assert_ne!(soil, SoilType::Rock);
        assert_eq!(img.get_pixel(1, 1).0, soil.preview_rgb());
    }

    #[test]
    fn test_shade_clamps() {
        assert_eq!(shade([200, 100, 0], 1.5), [255, 150, 0]);
        assert_eq!(shade([200, 100, 0], 0.5), [100, 50, 0]);
    }
}
