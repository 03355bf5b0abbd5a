//! Rendered output.

use std::path::{Path, PathBuf};

use super::RenderError;
use crate::png::{self, PngConfig};
use crate::surface::{Channel, ChannelSet, Surface};

/// The seven maps of one render, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSet {
    channels: ChannelSet,
}

/// One map written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapResult {
    pub channel: Channel,
    pub path: PathBuf,
    /// BLAKE3 hex digest of the encoded file.
    pub hash: String,
}

impl TextureSet {
    pub(crate) fn new(channels: ChannelSet) -> Self {
        Self { channels }
    }

    pub fn size(&self) -> u32 {
        self.channels.size()
    }

    pub fn get(&self, channel: Channel) -> &Surface {
        self.channels.get(channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Surface)> {
        self.channels.iter()
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    /// BLAKE3 over every channel's raw bytes in [`Channel::ALL`] order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.size().to_le_bytes());
        for (_, surface) in self.iter() {
            hasher.update(surface.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Write `<stem>_<channel>.png` for every channel into `dir`, creating
    /// it if needed.
    pub fn save_pngs(&self, dir: &Path, stem: &str) -> Result<Vec<MapResult>, RenderError> {
        std::fs::create_dir_all(dir)?;
        let config = PngConfig::default();
        let mut results = Vec::with_capacity(Channel::COUNT);
        for (channel, surface) in self.iter() {
            let path = dir.join(format!("{}_{}.png", stem, channel.as_str()));
            let (data, hash) = png::write_surface_to_vec_with_hash(surface, &config)?;
            std::fs::write(&path, data)?;
            tracing::debug!(channel = %channel, path = %path.display(), "map written");
            results.push(MapResult {
                channel,
                path,
                hash,
            });
        }
        Ok(results)
    }
}
