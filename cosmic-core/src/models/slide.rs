//! Homepage and gallery carousel slides

use serde::Deserialize;

use crate::validation::{non_blank, required, ValidationError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroSlideDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroSlide {
    pub title: String,
    pub description: Option<String>,
    /// Path of the image under the static root, never the bytes
    pub image: String,
    pub display_order: i64,
    pub is_active: bool,
}

impl HeroSlideDraft {
    pub fn normalize(self) -> Result<NewHeroSlide, ValidationError> {
        Ok(NewHeroSlide {
            title: required(self.title, "title")?,
            description: non_blank(self.description),
            image: required(self.image, "image")?,
            display_order: self.display_order.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GallerySlideDraft {
    pub title: Option<String>,
    pub image: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGallerySlide {
    pub title: String,
    pub image: String,
    pub display_order: i64,
    pub is_active: bool,
}

impl GallerySlideDraft {
    pub fn normalize(self) -> Result<NewGallerySlide, ValidationError> {
        Ok(NewGallerySlide {
            title: required(self.title, "title")?,
            image: required(self.image, "image")?,
            display_order: self.display_order.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_defaults() {
        let slide = HeroSlideDraft {
            title: Some("Know your stars".into()),
            image: Some("assets/images/hero-1.webp".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap();

        assert_eq!(slide.display_order, 0);
        assert!(slide.is_active);
        assert_eq!(slide.description, None);
    }

    #[test]
    fn hero_requires_image() {
        let err = HeroSlideDraft {
            title: Some("No picture".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "image" });
    }

    #[test]
    fn gallery_keeps_explicit_values() {
        let slide = GallerySlideDraft {
            title: Some("Office".into()),
            image: Some("assets/images/office.jpg".into()),
            display_order: Some(3),
            is_active: Some(false),
        }
        .normalize()
        .unwrap();

        assert_eq!(slide.display_order, 3);
        assert!(!slide.is_active);
    }
}
