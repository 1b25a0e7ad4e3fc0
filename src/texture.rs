//! Texture loading: decode sprite images (or use the built-in masks) and
//! recolour every visible pixel to the configured colour.
//!
//! Loading is synchronous. The host loads all four textures before it
//! constructs a [`Game`](crate::engine::Game), so the engine never sees a
//! partially loaded set.

use crate::config::{TextureSource, TextureSpec, TexturesConfig};
use crate::engine::{Bitmap, GameTextures, Rgb};
use crate::error::AssetError;
use image::ImageReader;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const DINO_MASK: [&str; 16] = [
    ".........#######",
    "........##.#####",
    "........########",
    "........########",
    "........#####...",
    "........#######.",
    "#......#####....",
    "#.....######....",
    "##...########...",
    "###.#########...",
    ".###########....",
    "..#########.....",
    "...#######......",
    "....##..##......",
    "....#....#......",
    "....##...##.....",
];

const CACTUS_MASK: [&str; 16] = [
    "...##...",
    "..####..",
    "..####..",
    "#.####..",
    "#.####.#",
    "#.####.#",
    "######.#",
    ".#######",
    "..####..",
    "..####..",
    "..####..",
    "..####..",
    "..####..",
    "..####..",
    "..####..",
    "..####..",
];

const PTERODACTYL_MASK: [&str; 8] = [
    "....#...........",
    "...##...........",
    "..###.......##..",
    ".##########.###.",
    "###########.....",
    "......######....",
    ".......####.....",
    "........##......",
];

const COIN_MASK: [&str; 8] = [
    "..####..",
    ".######.",
    "###..###",
    "##.##.##",
    "##.##.##",
    "###..###",
    ".######.",
    "..####..",
];

/// Names accepted by `{"builtin": ...}` texture sources.
pub const BUILTIN_SPRITES: [&str; 4] = ["dino", "cactus", "pterodactyl", "coin"];

/// White-on-transparent bitmap for a built-in sprite.
pub fn builtin_sprite(name: &str) -> Result<Bitmap, AssetError> {
    let rows: &[&str] = match name {
        "dino" => &DINO_MASK,
        "cactus" => &CACTUS_MASK,
        "pterodactyl" => &PTERODACTYL_MASK,
        "coin" => &COIN_MASK,
        _ => return Err(AssetError::UnknownSprite(name.to_string())),
    };
    Bitmap::from_mask(rows).ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
}

/// Decode an image file into an RGBA bitmap.
pub fn decode_file(path: &Path) -> Result<Bitmap, AssetError> {
    let reader = ImageReader::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = reader
        .decode()
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Bitmap::from_rgba(width, height, image.as_raw()).ok_or_else(|| AssetError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "empty image"),
    })
}

/// Load one texture and recolour it. Relative file paths are resolved
/// against `base_dir`.
pub fn load_texture(spec: &TextureSpec, base_dir: &Path) -> Result<Arc<Bitmap>, AssetError> {
    let color: Rgb = spec.color.parse()?;
    let bitmap = match &spec.source {
        TextureSource::Builtin(name) => builtin_sprite(name)?,
        TextureSource::Path(path) => decode_file(&base_dir.join(path))?,
    };
    debug!(
        source = ?spec.source,
        width = bitmap.width(),
        height = bitmap.height(),
        "Loaded texture"
    );
    Ok(Arc::new(bitmap.recolored(color)))
}

/// Load the full texture set. Fails on the first texture that cannot be
/// read, decoded or recoloured.
pub fn load_textures(config: &TexturesConfig, base_dir: &Path) -> Result<GameTextures, AssetError> {
    Ok(GameTextures {
        dino: load_texture(&config.dino, base_dir)?,
        cactus: load_texture(&config.cactus, base_dir)?,
        pterodactyl: load_texture(&config.pterodactyl, base_dir)?,
        coin: load_texture(&config.coin, base_dir)?,
    })
}
