// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use telegrip_tl_types as tl;

use crate::utils;

/// A photo, be it a profile picture, the photo of a chat or one sent in a message.
///
/// Two photos are the same if they share their [`Photo::id`], even when the rest of the
/// fields (such as the file reference) differ.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub raw: tl::types::Photo,
}

/// One of the sizes a [`Photo`] is available in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoSize {
    /// Single-letter type of the size, such as `"s"`, `"m"` or `"x"`.
    pub photo_type: String,
    pub width: i32,
    pub height: i32,
    /// Size in bytes of the file.
    pub size: i32,
}

impl Photo {
    /// Wrap a raw photo. Returns `None` for the empty constructor, which has nothing to show.
    pub fn from_raw(photo: tl::enums::Photo) -> Option<Self> {
        match photo {
            tl::enums::Photo::Empty(_) => None,
            tl::enums::Photo::Photo(photo) => Some(Self { raw: photo }),
        }
    }

    /// Unique identifier of the photo.
    pub fn id(&self) -> i64 {
        self.raw.id
    }

    /// Date when the photo was uploaded.
    pub fn date(&self) -> DateTime<Utc> {
        utils::date(self.raw.date)
    }

    pub fn access_hash(&self) -> i64 {
        self.raw.access_hash
    }

    /// Reference needed to download the photo. It expires, and can be refreshed by fetching the
    /// photo again.
    pub fn file_reference(&self) -> &[u8] {
        &self.raw.file_reference
    }

    /// Were stickers attached to the photo?
    pub fn has_stickers(&self) -> bool {
        self.raw.has_stickers
    }

    /// Datacenter where the photo is stored.
    pub fn dc_id(&self) -> i32 {
        self.raw.dc_id
    }

    /// Sizes the photo can be downloaded in, smallest first as sent by Telegram.
    ///
    /// Progressive sizes are reported with their final (complete) size.
    pub fn sizes(&self) -> Vec<PhotoSize> {
        self.raw
            .sizes
            .iter()
            .filter_map(|size| match size {
                tl::enums::PhotoSize::Empty(_) => None,
                tl::enums::PhotoSize::Size(size) => Some(PhotoSize {
                    photo_type: size.r#type.clone(),
                    width: size.w,
                    height: size.h,
                    size: size.size,
                }),
                tl::enums::PhotoSize::Progressive(size) => Some(PhotoSize {
                    photo_type: size.r#type.clone(),
                    width: size.w,
                    height: size.h,
                    size: size.sizes.last().copied().unwrap_or_default(),
                }),
            })
            .collect()
    }

    /// The size with the most pixels, if any.
    pub fn largest(&self) -> Option<PhotoSize> {
        self.sizes()
            .into_iter()
            .max_by_key(|size| i64::from(size.width) * i64::from(size.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> tl::types::Photo {
        tl::types::Photo {
            has_stickers: false,
            id: 42,
            access_hash: 7,
            file_reference: vec![1, 2, 3],
            date: 1_000,
            sizes: vec![
                tl::types::PhotoSizeEmpty { r#type: "s".into() }.into(),
                tl::types::PhotoSize {
                    r#type: "m".into(),
                    w: 320,
                    h: 320,
                    size: 4_000,
                }
                .into(),
                tl::types::PhotoSizeProgressive {
                    r#type: "y".into(),
                    w: 1280,
                    h: 1280,
                    sizes: vec![10_000, 40_000, 90_000],
                }
                .into(),
            ],
            dc_id: 2,
        }
    }

    #[test]
    fn empty_photos_are_discarded() {
        assert_eq!(
            Photo::from_raw(tl::types::PhotoEmpty { id: 42 }.into()),
            None
        );
        assert_eq!(Photo::from_raw(photo().into()).map(|p| p.id()), Some(42));
    }

    #[test]
    fn sizes_skip_empty_and_flatten_progressive() {
        let photo = Photo { raw: photo() };
        let sizes = photo.sizes();

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[0].photo_type, "m");
        assert_eq!(sizes[1].size, 90_000);
        assert_eq!(photo.largest().map(|s| s.photo_type), Some("y".to_string()));
        assert_eq!(photo.date().timestamp(), 1_000);
    }
}
