//! Real Nairobi locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Grouped roughly by area so tests
//! can pick stops that are genuinely near or far from each other.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Central Business District (good depot / driver start positions)
// ============================================================================

pub const CBD: &[Location] = &[
    Location::new("Kencom House", -1.2853, 36.8243),
    Location::new("Hilton Nairobi", -1.2847, 36.8235),
    Location::new("Kimathi Street", -1.2849, 36.8238),
    Location::new("City Market", -1.2833, 36.8219),
    Location::new("GPO Kenyatta Avenue", -1.2864, 36.8172),
    Location::new("Nation Centre", -1.2832, 36.8262),
    Location::new("Railways Bus Station", -1.2906, 36.8284),
];

// ============================================================================
// Westlands (close-in cluster ~3-4 km from the CBD)
// ============================================================================

pub const WESTLANDS: &[Location] = &[
    Location::new("Sarit Centre", -1.2615, 36.8023),
    Location::new("Westgate Mall", -1.2567, 36.8035),
    Location::new("The Oval", -1.2650, 36.8015),
    Location::new("Mpaka Road", -1.2620, 36.8060),
];

// ============================================================================
// Industrial Area / airport corridor
// ============================================================================

pub const INDUSTRIAL_AREA: &[Location] = &[
    Location::new("Enterprise Road", -1.3080, 36.8430),
    Location::new("Likoni Road Godowns", -1.3110, 36.8510),
    Location::new("ICD Embakasi", -1.3230, 36.8940),
    Location::new("JKIA Cargo Terminal", -1.3192, 36.9278),
];

// ============================================================================
// Upper Hill
// ============================================================================

pub const UPPER_HILL: &[Location] = &[
    Location::new("Kenyatta National Hospital", -1.3013, 36.8073),
    Location::new("Britam Tower", -1.2955, 36.8114),
];

// ============================================================================
// Out of town (past the 50 km assignment radius from the CBD)
// ============================================================================

pub const OUT_OF_TOWN: &[Location] = &[
    Location::new("Naivasha Town", -0.7172, 36.4310),
    Location::new("Nakuru CBD", -0.3031, 36.0800),
];
