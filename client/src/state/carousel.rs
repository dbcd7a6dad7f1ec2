//! Homepage carousel slides.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::net::types::{Carousel, CarouselPayload};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselForm {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    pub order: String,
    pub is_active: bool,
}

impl Default for CarouselForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            image: String::new(),
            link: String::new(),
            order: "0".to_owned(),
            is_active: true,
        }
    }
}

impl CarouselForm {
    pub fn from_slide(slide: &Carousel) -> Self {
        Self {
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone().unwrap_or_default(),
            image: slide.image.clone(),
            link: slide.link.clone().unwrap_or_default(),
            order: slide.order.to_string(),
            is_active: slide.is_active,
        }
    }

    pub fn validate(&self) -> Result<CarouselPayload, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Judul wajib diisi".to_owned());
        }
        let image = self.image.trim();
        if image.is_empty() {
            return Err("Gambar wajib diisi".to_owned());
        }
        let order_raw = self.order.trim();
        let order = if order_raw.is_empty() {
            0
        } else {
            order_raw.parse::<i64>().map_err(|_| "Urutan harus berupa angka".to_owned())?
        };
        Ok(CarouselPayload {
            title: title.to_owned(),
            subtitle: non_blank(&self.subtitle),
            image: image.to_owned(),
            link: non_blank(&self.link),
            order,
            is_active: self.is_active,
        })
    }
}

/// Payload that flips `is_active` and keeps everything else.
pub fn toggled(slide: &Carousel) -> CarouselPayload {
    CarouselPayload {
        title: slide.title.clone(),
        subtitle: slide.subtitle.clone(),
        image: slide.image.clone(),
        link: slide.link.clone(),
        order: slide.order,
        is_active: !slide.is_active,
    }
}

/// Slides sorted by `order`, ties kept in response order.
pub fn sorted_slides(slides: &[Carousel]) -> Vec<Carousel> {
    let mut out = slides.to_vec();
    out.sort_by_key(|s| s.order);
    out
}

/// Active slides for the homepage.
pub fn visible_slides(slides: &[Carousel]) -> Vec<Carousel> {
    sorted_slides(slides).into_iter().filter(|s| s.is_active).collect()
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
