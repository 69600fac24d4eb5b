//! Encoding and decoding of image metadata on item stacks.
//!
//! An item is an image item iff the `resource_name` tag is present. A
//! present `resource_name` with a missing or malformed dimension is a
//! corrupted tag, reported as an error and never silently defaulted.

use thiserror::Error;

use mural_core::tag::TagValue;

use crate::item_stack::ItemStack;

pub const TAG_RESOURCE_NAME: &str = "resource_name";
pub const TAG_WIDTH: &str = "width";
pub const TAG_HEIGHT: &str = "height";

/// Lore line marking items produced by this plugin.
pub const IMAGE_ITEM_LORE: &str = "Mural image";

/// Decoded image metadata of a tagged item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    pub resource_name: String,
    /// Placement width in blocks.
    pub width: u32,
    /// Placement height in blocks.
    pub height: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("image item is missing its \"{0}\" tag")]
    MissingTag(&'static str),
    #[error("image item has a malformed \"{0}\" tag")]
    MalformedTag(&'static str),
}

/// Build an image item: `base_identifier` as the visual carrier, a
/// `"<name> (<w>x<h>)"` display name, the marker lore line, and the three
/// metadata tags.
pub fn image_item(
    base_identifier: &str,
    resource_name: &str,
    amount: u16,
    width: u32,
    height: u32,
) -> ItemStack {
    let mut item = ItemStack::new(base_identifier, amount);
    item.display_name = Some(format!("{resource_name} ({width}x{height})"));
    item.lore = vec![IMAGE_ITEM_LORE.to_string()];
    item.tags
        .insert(TAG_RESOURCE_NAME.into(), TagValue::from(resource_name));
    item.tags.insert(TAG_WIDTH.into(), TagValue::Int(width as i32));
    item.tags
        .insert(TAG_HEIGHT.into(), TagValue::Int(height as i32));
    item
}

/// Whether `item` carries the image tag at all, malformed or not.
pub fn is_image_item(item: &ItemStack) -> bool {
    item.tags.contains_key(TAG_RESOURCE_NAME)
}

/// Read the image metadata of `item`.
///
/// Returns `Ok(None)` for untagged items. Returns an error when the
/// `resource_name` tag is present but has the wrong type, or a dimension tag
/// is missing, has the wrong type, or is not positive.
pub fn decode_image_tag(item: &ItemStack) -> Result<Option<ImageTag>, TagError> {
    let Some(resource) = item.tags.get(TAG_RESOURCE_NAME) else {
        return Ok(None);
    };
    let resource_name = resource
        .as_str()
        .ok_or(TagError::MalformedTag(TAG_RESOURCE_NAME))?;

    Ok(Some(ImageTag {
        resource_name: resource_name.to_string(),
        width: decode_dimension(item, TAG_WIDTH)?,
        height: decode_dimension(item, TAG_HEIGHT)?,
    }))
}

fn decode_dimension(item: &ItemStack, key: &'static str) -> Result<u32, TagError> {
    let value = item
        .tags
        .get(key)
        .ok_or(TagError::MissingTag(key))?
        .as_int()
        .ok_or(TagError::MalformedTag(key))?;
    if value < 1 {
        return Err(TagError::MalformedTag(key));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "minecraft:glow_item_frame";

    #[test]
    fn encode_then_decode() {
        let item = image_item(BASE, "sunset.png", 3, 4, 2);
        assert_eq!(item.identifier, BASE);
        assert_eq!(item.count, 3);
        assert_eq!(item.display_name.as_deref(), Some("sunset.png (4x2)"));
        assert_eq!(item.lore, vec![IMAGE_ITEM_LORE.to_string()]);

        let tag = decode_image_tag(&item).unwrap().unwrap();
        assert_eq!(
            tag,
            ImageTag {
                resource_name: "sunset.png".into(),
                width: 4,
                height: 2,
            }
        );
    }

    #[test]
    fn untagged_item_decodes_as_none() {
        let item = ItemStack::new(BASE, 1);
        assert_eq!(decode_image_tag(&item), Ok(None));
        assert!(!is_image_item(&item));
    }

    #[test]
    fn missing_width_is_corrupted_not_absent() {
        let mut item = image_item(BASE, "sunset.png", 1, 4, 2);
        item.tags.remove(TAG_WIDTH);
        assert_eq!(decode_image_tag(&item), Err(TagError::MissingTag(TAG_WIDTH)));
        // Still recognized as an image item for crafting purposes.
        assert!(is_image_item(&item));
    }

    #[test]
    fn missing_height_is_corrupted() {
        let mut item = image_item(BASE, "sunset.png", 1, 4, 2);
        item.tags.remove(TAG_HEIGHT);
        assert_eq!(
            decode_image_tag(&item),
            Err(TagError::MissingTag(TAG_HEIGHT))
        );
    }

    #[test]
    fn wrong_tag_types_are_malformed() {
        let mut item = image_item(BASE, "sunset.png", 1, 4, 2);
        item.tags
            .insert(TAG_WIDTH.into(), TagValue::from("not a number"));
        assert_eq!(
            decode_image_tag(&item),
            Err(TagError::MalformedTag(TAG_WIDTH))
        );

        let mut item = image_item(BASE, "sunset.png", 1, 4, 2);
        item.tags.insert(TAG_RESOURCE_NAME.into(), TagValue::Int(1));
        assert_eq!(
            decode_image_tag(&item),
            Err(TagError::MalformedTag(TAG_RESOURCE_NAME))
        );
    }

    #[test]
    fn non_positive_dimension_is_malformed() {
        let mut item = image_item(BASE, "sunset.png", 1, 4, 2);
        item.tags.insert(TAG_HEIGHT.into(), TagValue::Int(0));
        assert_eq!(
            decode_image_tag(&item),
            Err(TagError::MalformedTag(TAG_HEIGHT))
        );
    }
}
