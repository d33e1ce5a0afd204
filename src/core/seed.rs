//! Default datasets written to an empty store
//!
//! Inquiries and pre-orders start empty.

use crate::entities::{
    Availability, HeroMedia, MediaKind, Testimonial, Vehicle, VehicleCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four launch listings
pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".to_string(),
            brand: "Rolls Royce".to_string(),
            model: "Phantom Series II".to_string(),
            year: 2024,
            price: 450000.0,
            image: "https://images.unsplash.com/photo-1631214503951-37510075f7e8?auto=format&fit=crop&q=80&w=1200".to_string(),
            mileage: 0,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            description: "The pinnacle of luxury. Unmatched comfort and presence.".to_string(),
            category: VehicleCategory::Individual,
            availability: Availability::InStock,
            features: strings(&["Starlight Headliner", "Suicide Doors", "Whisper Quiet Cabin"]),
        },
        Vehicle {
            id: "2".to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "G-Wagon G63 AMG".to_string(),
            year: 2023,
            price: 180000.0,
            image: "https://images.unsplash.com/photo-1520031441872-265e4ff70366?auto=format&fit=crop&q=80&w=1200".to_string(),
            mileage: 1200,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            description: "Iconic design meets high-performance off-roading capability.".to_string(),
            category: VehicleCategory::Corporate,
            availability: Availability::InStock,
            features: strings(&["V8 Biturbo", "4MATIC", "Luxury Leather Interior"]),
        },
        Vehicle {
            id: "3".to_string(),
            brand: "Range Rover".to_string(),
            model: "Autobiography LWB".to_string(),
            year: 2024,
            price: 210000.0,
            image: "https://images.unsplash.com/photo-1606148632349-54337270bad1?auto=format&fit=crop&q=80&w=1200".to_string(),
            mileage: 0,
            fuel_type: "Hybrid".to_string(),
            transmission: "Automatic".to_string(),
            description: "Sophistication and capability in one stunning package.".to_string(),
            category: VehicleCategory::Corporate,
            availability: Availability::PreOrder,
            features: strings(&["Executive Rear Seating", "PHEV Technology", "Air Suspension"]),
        },
        Vehicle {
            id: "4".to_string(),
            brand: "Lamborghini".to_string(),
            model: "Urus Performante".to_string(),
            year: 2024,
            price: 260000.0,
            image: "https://images.unsplash.com/photo-1544636331-e268592033c2?auto=format&fit=crop&q=80&w=1200".to_string(),
            mileage: 0,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            description: "The super SUV that redefines the segment.".to_string(),
            category: VehicleCategory::Individual,
            availability: Availability::InStock,
            features: strings(&["Carbon Fiber Parts", "Sport Exhaust", "Alcantara Interior"]),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Aliko Dangote".to_string(),
            role: "CEO, Dangote Group".to_string(),
            content: "Empathon provides a level of service that matches the luxury of the vehicles they sell. Their corporate fleet management is world-class.".to_string(),
            rating: 5,
            avatar: "https://picsum.photos/100/100?random=1".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            name: "Sarah Jenkins".to_string(),
            role: "Tech Entrepreneur".to_string(),
            content: "Reserved my G-Wagon through their pre-order system. The process was transparent and the delivery was ahead of schedule.".to_string(),
            rating: 5,
            avatar: "https://picsum.photos/100/100?random=2".to_string(),
        },
    ]
}

pub fn hero_media() -> Vec<HeroMedia> {
    vec![
        HeroMedia {
            id: "1".to_string(),
            kind: MediaKind::Image,
            url: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&q=80&w=2000".to_string(),
            title: "Experience Pure Opulence".to_string(),
            subtitle: "Where performance meets prestige.".to_string(),
            active: true,
        },
        HeroMedia {
            id: "2".to_string(),
            kind: MediaKind::Image,
            url: "https://images.unsplash.com/photo-1555215695-3004980ad54e?auto=format&fit=crop&q=80&w=2000".to_string(),
            title: "Executive Fleet Solutions".to_string(),
            subtitle: "Bespoke corporate packages for discerning organizations.".to_string(),
            active: true,
        },
    ]
}
