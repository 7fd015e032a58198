use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Mixed];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Mixed => "Mixed",
        };
        f.write_str(label)
    }
}

/// The authored part of a hostel: everything except the occupancy aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub gender: Gender,
    pub price: u64,
    pub room_types: Vec<u32>,
    #[serde(default)]
    pub price_list: BTreeMap<u32, u64>,
    /// Rooms of this hostel are generated without occupants.
    #[serde(default)]
    pub always_vacant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub gender: Gender,
    pub price: u64,
    pub room_types: Vec<u32>,
    pub price_list: BTreeMap<u32, u64>,
    pub always_vacant: bool,
    pub capacity: u32,
    pub available_rooms: u32,
}

impl Hostel {
    /// Builds a hostel with zeroed aggregates.
    #[must_use]
    pub fn from_template(template: HostelTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            image: template.image,
            description: template.description,
            gender: template.gender,
            price: template.price,
            room_types: template.room_types,
            price_list: template.price_list,
            always_vacant: template.always_vacant,
            capacity: 0,
            available_rooms: 0,
        }
    }

    /// Session price for a room of the given capacity, falling back to the base price.
    #[must_use]
    pub fn price_for(&self, capacity: u32) -> u64 {
        self.price_list.get(&capacity).copied().unwrap_or(self.price)
    }

    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.capacity.saturating_sub(self.available_rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template() -> HostelTemplate {
        HostelTemplate {
            id: "peace".to_string(),
            name: "Peace Hall".to_string(),
            image: String::new(),
            description: String::new(),
            gender: Gender::Male,
            price: 150_000,
            room_types: vec![4, 6],
            price_list: BTreeMap::from([(4, 250_000)]),
            always_vacant: false,
        }
    }

    #[test]
    fn price_falls_back_to_base_price() {
        let hostel = Hostel::from_template(template());
        assert_eq!(hostel.price_for(4), 250_000);
        assert_eq!(hostel.price_for(6), 150_000);
    }

    #[test]
    fn template_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "annex",
            "name": "Annex",
            "gender": "Mixed",
            "price": 90000,
            "roomTypes": [2, 3],
            "priceList": { "2": 120000 }
        }"#;
        let parsed: HostelTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.room_types, vec![2, 3]);
        assert_eq!(parsed.price_list.get(&2), Some(&120_000));
        assert!(!parsed.always_vacant);
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn occupied_beds_never_underflow() {
        let mut hostel = Hostel::from_template(template());
        hostel.capacity = 50;
        hostel.available_rooms = 12;
        assert_eq!(hostel.occupied(), 38);

        hostel.available_rooms = 60;
        assert_eq!(hostel.occupied(), 0);
    }
}
