//! Gallery sectioning by mentor-assigned tier.

use serde::Serialize;

use crate::status::Tier;

/// Anything that can be placed into a tier section.
pub trait Tiered {
    fn tier(&self) -> Option<Tier>;
}

/// Projects split into display sections, best tier first.
///
/// Each section keeps the relative order of the input.
#[derive(Debug, Clone, Serialize)]
pub struct TieredGallery<T> {
    pub featured: Vec<T>,
    pub highlighted: Vec<T>,
    pub showcased: Vec<T>,
    pub unranked: Vec<T>,
}

impl<T> Default for TieredGallery<T> {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            highlighted: Vec::new(),
            showcased: Vec::new(),
            unranked: Vec::new(),
        }
    }
}

impl<T: Tiered> TieredGallery<T> {
    pub fn group(items: impl IntoIterator<Item = T>) -> Self {
        let mut gallery = Self::default();
        for item in items {
            let section = match item.tier() {
                Some(Tier::Featured) => &mut gallery.featured,
                Some(Tier::Highlighted) => &mut gallery.highlighted,
                Some(Tier::Showcased) => &mut gallery.showcased,
                None => &mut gallery.unranked,
            };
            section.push(item);
        }
        gallery
    }
}

impl<T> TieredGallery<T> {
    pub fn len(&self) -> usize {
        self.featured.len() + self.highlighted.len() + self.showcased.len() + self.unranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
