use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Species covered by the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

/// A pet listed for adoption.
///
/// Wire and storage field names are camelCase so they line up with the
/// query schema's predicate names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_adopted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GeoJSON point, longitude first, as MongoDB's 2dsphere index expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonPoint {
    /// Always the literal "Point"
    #[serde(rename = "type")]
    pub kind: String,
    /// [longitude, latitude]
    pub coordinates: [f64; 2],
}

impl GeoJsonPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A veterinary clinic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the clinic is currently open; kept fresh by the storage
    /// side, the API treats it as an opaque stored flag
    pub is_open_now: bool,
    pub is_emergency: bool,
    pub location: GeoJsonPoint,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A pet-care article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub pet_type: Species,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_wire_names_match_query_schema_fields() {
        let pet = Pet {
            id: Uuid::nil(),
            name: "Rex".into(),
            species: Species::Dog,
            breed: None,
            age: Some(3),
            gender: None,
            city: "Nablus".into(),
            description: None,
            is_adopted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["type"], "dog");
        assert_eq!(json["isAdopted"], false);
        assert_eq!(json["city"], "Nablus");
        assert!(json.get("breed").is_none());
    }

    #[test]
    fn geojson_point_is_longitude_first() {
        let point = GeoJsonPoint::new(35.2, 31.9);
        assert_eq!(point.longitude(), 35.2);
        assert_eq!(point.latitude(), 31.9);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], 35.2);
    }

    #[test]
    fn species_round_trips_through_its_lowercase_form() {
        assert_eq!(Species::Cat.to_string(), "cat");
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert!("bird".parse::<Species>().is_err());
    }
}
