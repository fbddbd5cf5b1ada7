// src/domain/gallery.rs

/// Display height of a tile in the masonry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileHeight {
    Short,
    Medium,
    Tall,
}

impl TileHeight {
    pub fn class(self) -> &'static str {
        match self {
            TileHeight::Short => "tile-short",
            TileHeight::Medium => "tile-medium",
            TileHeight::Tall => "tile-tall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: &'static str,
    /// Asset key, resolved the same way as a property's `image`.
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub height: TileHeight,
}

pub static GALLERY: [GalleryImage; 9] = [
    GalleryImage { id: "1", image: "property-1", alt: "Luxury apartment interior", title: "Luxury Bunga Apartment", location: "Bunga, Soya", height: TileHeight::Tall },
    GalleryImage { id: "2", image: "property-2", alt: "Modern hostel room", title: "Central Entebbe Hostel", location: "Seguku, Entebbe", height: TileHeight::Short },
    GalleryImage { id: "3", image: "property-3", alt: "Lakeside villa", title: "Lake Victoria View Villa", location: "Munyonyo", height: TileHeight::Medium },
    GalleryImage { id: "4", image: "property-4", alt: "Cozy studio", title: "Kololo Studio Apartment", location: "Kololo", height: TileHeight::Short },
    GalleryImage { id: "5", image: "property-5", alt: "Girls hostel", title: "Girls Hostel Nakasero", location: "Nakasero", height: TileHeight::Medium },
    GalleryImage { id: "6", image: "property-6", alt: "Treehouse", title: "Bwindi Treehouse", location: "Bwindi National Park", height: TileHeight::Tall },
    GalleryImage { id: "7", image: "property-7", alt: "Penthouse view", title: "Kampala Skyline Penthouse", location: "Kampala City", height: TileHeight::Medium },
    GalleryImage { id: "8", image: "property-8", alt: "Commercial space", title: "Modern Co-Working Space", location: "Industrial Area", height: TileHeight::Short },
    GalleryImage { id: "9", image: "hero-bg", alt: "Resort exterior", title: "Luxury Resort", location: "Kampala", height: TileHeight::Tall },
];

/// An image in the lightbox with its neighbours. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxView {
    pub index: usize,
    pub current: &'static GalleryImage,
    pub prev: &'static GalleryImage,
    pub next: &'static GalleryImage,
}

pub fn lightbox(id: &str) -> Option<LightboxView> {
    let index = GALLERY.iter().position(|img| img.id == id)?;
    let len = GALLERY.len();

    Some(LightboxView {
        index,
        current: &GALLERY[index],
        prev: &GALLERY[(index + len - 1) % len],
        next: &GALLERY[(index + 1) % len],
    })
}
