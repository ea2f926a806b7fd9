//! The version/asset model: decodes the three static archives that
//! define a recording's graphics and metadata, and derives the
//! version-keyed feature matrix the protocol interpreter consults.

pub mod flags;
pub mod object_file;
pub mod picture_file;
pub mod sprite_file;

pub use flags::{FeatureMatrix, ObjectTypeFlags, VersionTriple};
pub use object_file::{ObjectCatalogue, ObjectType};
pub use picture_file::PictureBank;
pub use sprite_file::SpriteCatalogue;

use log::debug;

use crate::error::Result;

/// The frozen, read-only catalogue produced once per session from the
/// three asset files plus the recording's declared version triple.
///
/// Cheaply shareable: nothing in here is ever mutated after
/// construction, so a single catalogue may back any number of
/// concurrent playback sessions of recordings at the same version.
pub struct VersionCatalogue {
    pub version: VersionTriple,
    pub features: FeatureMatrix,
    pub objects: ObjectCatalogue,
    pub sprites: SpriteCatalogue,
    pub pictures: PictureBank,
}

impl VersionCatalogue {
    pub fn load(
        version: VersionTriple,
        dat_bytes: &[u8],
        spr_bytes: &[u8],
        pic_bytes: &[u8],
    ) -> Result<Self> {
        let features = FeatureMatrix::for_version(version);
        let objects = object_file::parse_object_file(dat_bytes, version)?;
        let sprites = sprite_file::parse_sprite_file(spr_bytes, features.wide_sprite_ids)?;
        let pictures = picture_file::parse_picture_file(pic_bytes)?;

        debug!(
            "loaded version catalogue for {version:?}: {} items, {} sprites",
            objects.items.len(),
            sprites.len()
        );

        Ok(VersionCatalogue {
            version,
            features,
            objects,
            sprites,
            pictures,
        })
    }
}
