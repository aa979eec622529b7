//! Promotional Banner Slider

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    /// Call-to-action button label.
    pub cta: String,
}

impl Banner {
    fn new(title: &str, subtitle: &str, image: &str, cta: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: image.to_string(),
            cta: cta.to_string(),
        }
    }
}

pub fn default_banners() -> Vec<Banner> {
    vec![
        Banner::new(
            "Welcome to BazarBD",
            "Your trusted online marketplace in Bangladesh",
            "image/banner1.jpg",
            "Shop Now",
        ),
        Banner::new(
            "Electronics Sale",
            "Up to 50% off on latest gadgets",
            "image/banner2.jpg",
            "View Electronics",
        ),
        Banner::new(
            "Fashion Week",
            "Trending styles at best prices",
            "image/banner3.jpg",
            "Explore Fashion",
        ),
    ]
}

/// Index cycling over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    current: usize,
    len: usize,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping around.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Jump to a 1-based slide number, as used by the dot controls.
    /// Out-of-range numbers are ignored.
    pub fn go_to(&mut self, slide: usize) -> bool {
        if slide == 0 || slide > self.len {
            return false;
        }
        self.current = slide - 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut slider = Slider::new(3);
        assert_eq!(slider.advance(), 1);
        assert_eq!(slider.advance(), 2);
        assert_eq!(slider.advance(), 0);
    }

    #[test]
    fn test_go_to_is_one_based() {
        let mut slider = Slider::new(3);
        assert!(slider.go_to(3));
        assert_eq!(slider.current(), 2);
        assert_eq!(slider.advance(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut slider = Slider::new(3);
        slider.go_to(2);
        assert!(!slider.go_to(0));
        assert!(!slider.go_to(4));
        assert_eq!(slider.current(), 1);
    }

    #[test]
    fn test_empty_slider_stays_put() {
        let mut slider = Slider::new(0);
        assert_eq!(slider.advance(), 0);
        assert!(!slider.go_to(1));
    }
}
