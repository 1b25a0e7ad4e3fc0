//! Game configuration: texture sources, recolour targets and terrain colours.
//!
//! Supplied once at startup and immutable afterwards. Stored as JSON:
//!
//! ```json
//! {
//!   "textures": {
//!     "dino":        { "path": "dino.png", "color": "#a5f3fc" },
//!     "cactus":      { "builtin": "cactus", "color": "#bbf7d0" },
//!     "pterodactyl": { "builtin": "pterodactyl", "color": "#fecaca" },
//!     "coin":        { "builtin": "coin", "color": "#fef08a" }
//!   },
//!   "colors": { "ground": "#fef08a", "platform": "#e9d5ff" }
//! }
//! ```

use crate::engine::{Rgb, TerrainColors};
use crate::error::AssetError;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Where a texture's pixels come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSource {
    /// An image file. Relative paths resolve against the config directory.
    Path(PathBuf),
    /// One of the sprite masks compiled into the binary.
    Builtin(String),
}

/// One texture: its source and the colour every visible pixel is painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSpec {
    #[serde(flatten)]
    pub source: TextureSource,
    pub color: String,
}

impl TextureSpec {
    pub fn builtin(name: &str, color: &str) -> Self {
        Self {
            source: TextureSource::Builtin(name.to_string()),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexturesConfig {
    pub dino: TextureSpec,
    pub cactus: TextureSpec,
    pub pterodactyl: TextureSpec,
    pub coin: TextureSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsConfig {
    pub ground: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub textures: TexturesConfig,
    pub colors: ColorsConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            textures: TexturesConfig {
                dino: TextureSpec::builtin("dino", "#a5f3fc"),
                cactus: TextureSpec::builtin("cactus", "#bbf7d0"),
                pterodactyl: TextureSpec::builtin("pterodactyl", "#fecaca"),
                coin: TextureSpec::builtin("coin", "#fef08a"),
            },
            colors: ColorsConfig {
                ground: "#fef08a".to_string(),
                platform: "#e9d5ff".to_string(),
            },
        }
    }
}

impl GameConfig {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read `config.json` from the platform config directory, or fall back
    /// to the built-in defaults when there is none.
    pub fn load_or_default() -> Result<(Self, PathBuf), AssetError> {
        let dir = persistence::config_dir().map_err(|source| AssetError::Io {
            path: PathBuf::from(CONFIG_FILE),
            source,
        })?;
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok((Self::default(), dir));
        }
        Ok((Self::load(&path)?, dir))
    }

    /// Parsed ground and platform colours.
    pub fn terrain_colors(&self) -> Result<TerrainColors, AssetError> {
        Ok(TerrainColors {
            ground: self.colors.ground.parse::<Rgb>()?,
            platform: self.colors.platform.parse::<Rgb>()?,
        })
    }
}
