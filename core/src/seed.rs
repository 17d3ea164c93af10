//! Startup seed dataset.
//!
//! The store is initialized once from this data at process start and lives
//! for the process lifetime. Registrations start empty.

use crate::types::{Area, Event, EventType};
use chrono::{DateTime, NaiveDate, Utc};

/// Image used when an area is created without one.
pub const DEFAULT_AREA_IMAGE_URL: &str =
    "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=800";

/// The fixed event-type catalog.
#[must_use]
pub fn event_types() -> Vec<EventType> {
    [
        ("milonga", "Milonga", "bg-red-600", "\u{1f483}"),
        ("workshop", "Workshop", "bg-blue-600", "\u{1f393}"),
        ("masterclass", "Masterclass", "bg-purple-600", "\u{2b50}"),
        ("social", "Social Dance", "bg-green-600", "\u{1f389}"),
        ("performance", "Performance", "bg-orange-600", "\u{1f3ad}"),
        ("festival", "Festival", "bg-pink-600", "\u{1f3aa}"),
    ]
    .into_iter()
    .map(|(id, name, color, icon)| EventType {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// The seeded areas.
#[must_use]
pub fn areas() -> Vec<Area> {
    [
        (
            "downtown",
            "Downtown District",
            "Historic venues in the heart of the city with classic ballrooms and intimate studios.",
            "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        (
            "riverside",
            "Riverside Quarter",
            "Scenic waterfront locations with stunning views and modern dance facilities.",
            "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        (
            "arts-district",
            "Arts District",
            "Creative spaces in galleries and cultural centers with unique atmospheres.",
            "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        (
            "uptown",
            "Uptown Village",
            "Cozy neighborhood venues perfect for social dancing and community events.",
            "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        (
            "suburbs",
            "Suburban Studios",
            "Spacious dance studios and community centers in peaceful suburban settings.",
            "https://images.pexels.com/photos/1153213/pexels-photo-1153213.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        (
            "historic",
            "Historic Quarter",
            "Elegant heritage venues with traditional architecture and timeless charm.",
            "https://images.pexels.com/photos/1190299/pexels-photo-1190299.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, image_url)| Area {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    })
    .collect()
}

/// The seeded January 2025 events, with type snapshots drawn from `types`.
#[must_use]
pub fn events(types: &[EventType]) -> Vec<Event> {
    struct Row {
        id: &'static str,
        title: &'static str,
        day: u32,
        time: &'static str,
        venue: &'static str,
        area_id: &'static str,
        description: &'static str,
        price: Option<&'static str>,
        type_id: &'static str,
    }

    let rows = [
        Row {
            id: "1",
            title: "Argentine Tango Masterclass",
            day: 15,
            time: "7:00 PM",
            venue: "Grand Ballroom",
            area_id: "downtown",
            description: "An intensive session with renowned maestros covering sacadas, boleos, and intricate footwork patterns.",
            price: Some("$25"),
            type_id: "masterclass",
        },
        Row {
            id: "2",
            title: "Milonga La Noche",
            day: 18,
            time: "8:30 PM",
            venue: "Crystal Dance Hall",
            area_id: "downtown",
            description: "Weekly milonga with live orquesta tipica, sprung wooden floors, and intimate lighting.",
            price: Some("$15"),
            type_id: "milonga",
        },
        Row {
            id: "3",
            title: "Beginner Tango Workshop",
            day: 22,
            time: "6:00 PM",
            venue: "Studio Central",
            area_id: "downtown",
            description: "Fundamentals of posture, embrace, walking, and simple figures. No partner or experience necessary.",
            price: Some("$20"),
            type_id: "workshop",
        },
        Row {
            id: "4",
            title: "Sunset Tango by the River",
            day: 16,
            time: "6:30 PM",
            venue: "Riverside Pavilion",
            area_id: "riverside",
            description: "Outdoor milonga under the open sky as the sun sets over the river. Indoor backup venue available.",
            price: Some("$18"),
            type_id: "social",
        },
        Row {
            id: "5",
            title: "Outdoor Milonga",
            day: 25,
            time: "7:00 PM",
            venue: "Waterfront Gardens",
            area_id: "riverside",
            description: "Free community milonga under the stars, all levels welcome, complimentary refreshments.",
            price: Some("Free"),
            type_id: "milonga",
        },
        Row {
            id: "6",
            title: "Tango & Wine Evening",
            day: 14,
            time: "7:30 PM",
            venue: "Gallery Moderne",
            area_id: "arts-district",
            description: "Guided exhibition tour, Argentine wine tasting, and social dancing in one evening.",
            price: Some("$30"),
            type_id: "social",
        },
        Row {
            id: "7",
            title: "Contemporary Tango Fusion",
            day: 21,
            time: "8:00 PM",
            venue: "Creative Space Studio",
            area_id: "arts-district",
            description: "Tango Nuevo presents contemporary choreography honoring traditional roots.",
            price: Some("$22"),
            type_id: "performance",
        },
        Row {
            id: "8",
            title: "Cultural Center Milonga",
            day: 28,
            time: "7:45 PM",
            venue: "Arts Cultural Center",
            area_id: "arts-district",
            description: "Monthly community milonga with excellent acoustics and a welcoming atmosphere.",
            price: Some("$12"),
            type_id: "milonga",
        },
        Row {
            id: "9",
            title: "Neighborhood Social Dance",
            day: 17,
            time: "7:00 PM",
            venue: "Village Community Hall",
            area_id: "uptown",
            description: "Friendly neighborhood gathering for practicing in a relaxed, supportive environment.",
            price: Some("$10"),
            type_id: "social",
        },
        Row {
            id: "10",
            title: "Tango Technique Class",
            day: 24,
            time: "6:30 PM",
            venue: "Uptown Dance Studio",
            area_id: "uptown",
            description: "Focused class on posture, balance, and connection for intermediate dancers.",
            price: Some("$18"),
            type_id: "workshop",
        },
        Row {
            id: "11",
            title: "Family Tango Workshop",
            day: 19,
            time: "4:00 PM",
            venue: "Suburban Dance Center",
            area_id: "suburbs",
            description: "Age-appropriate instruction so parents, children, and grandparents can learn together.",
            price: Some("$15"),
            type_id: "workshop",
        },
        Row {
            id: "12",
            title: "Weekend Intensive",
            day: 26,
            time: "10:00 AM",
            venue: "Peaceful Studios",
            area_id: "suburbs",
            description: "Six hours of technique, musicality, and social dancing, with lunch and a mini-milonga.",
            price: Some("$45"),
            type_id: "festival",
        },
        Row {
            id: "13",
            title: "Vintage Tango Ball",
            day: 20,
            time: "8:00 PM",
            venue: "Heritage Mansion",
            area_id: "historic",
            description: "Annual ball with live orchestra and champagne reception; period costumes encouraged.",
            price: Some("$35"),
            type_id: "festival",
        },
        Row {
            id: "14",
            title: "Traditional Milonga",
            day: 27,
            time: "7:30 PM",
            venue: "Historic Opera House",
            area_id: "historic",
            description: "Tango in its most traditional form with authentic music and traditional codes.",
            price: Some("$20"),
            type_id: "milonga",
        },
    ];

    rows.into_iter()
        .filter_map(|row| {
            let event_type = types.iter().find(|t| t.id == row.type_id)?.clone();
            Some(Event {
                id: row.id.to_string(),
                title: row.title.to_string(),
                date: january_2025(row.day),
                time: row.time.to_string(),
                venue: row.venue.to_string(),
                area_id: row.area_id.to_string(),
                description: row.description.to_string(),
                price: row.price.map(str::to_string),
                event_type,
            })
        })
        .collect()
}

#[allow(clippy::expect_used)]
fn january_2025(day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("hardcoded seed date should always be valid")
        .and_utc()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_types() {
        let types = event_types();
        let ids: Vec<&str> = types.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "milonga",
                "workshop",
                "masterclass",
                "social",
                "performance",
                "festival"
            ]
        );
    }

    #[test]
    fn test_every_seed_event_references_a_seed_area() {
        let types = event_types();
        let areas = areas();
        for event in events(&types) {
            assert!(
                areas.iter().any(|area| area.id == event.area_id),
                "event {} references unknown area {}",
                event.id,
                event.area_id
            );
        }
    }

    #[test]
    fn test_seed_events_have_unique_numeric_ids() {
        let types = event_types();
        let seeded = events(&types);
        assert_eq!(seeded.len(), 14);
        let mut ids: Vec<u64> = seeded.iter().map(|e| e.id.parse().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_seed_type_snapshots_match_catalog() {
        let types = event_types();
        for event in events(&types) {
            let catalog = types.iter().find(|t| t.id == event.event_type.id).unwrap();
            assert_eq!(&event.event_type, catalog);
        }
    }
}
