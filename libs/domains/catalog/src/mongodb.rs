//! MongoDB implementation of CatalogRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
    options::FindOptions,
};
use query_engine::{FilterSpec, GeoClause, ParamValue};
use serde::de::DeserializeOwned;
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Article, Clinic, Pet};
use crate::repository::{CatalogRepository, Page};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// MongoDB implementation of the CatalogRepository
pub struct MongoCatalogRepository {
    pets: Collection<Pet>,
    clinics: Collection<Clinic>,
    articles: Collection<Article>,
}

impl MongoCatalogRepository {
    pub fn new(db: Database) -> Self {
        Self {
            pets: db.collection::<Pet>("pets"),
            clinics: db.collection::<Clinic>("clinics"),
            articles: db.collection::<Article>("articles"),
        }
    }

    /// Ensure the indexes the query paths rely on; proximity search needs a
    /// 2dsphere index on the clinic location.
    pub async fn create_indexes(&self) -> CatalogResult<()> {
        let geo_index = IndexModel::builder()
            .keys(doc! { "location": "2dsphere" })
            .build();
        self.clinics.create_index(geo_index).await?;

        tracing::info!("catalog indexes ensured");
        Ok(())
    }

    /// Build the filter document shared by find and count: equality
    /// predicates plus the keyword clause.
    fn base_filter(spec: &FilterSpec) -> Document {
        let mut filter = doc! {};

        for predicate in &spec.predicates {
            filter.insert(predicate.field, param_to_bson(&predicate.value));
        }

        if let Some(ref keyword) = spec.keyword {
            let pattern = escape_regex(&keyword.needle);
            filter.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": &pattern, "$options": "i" } },
                    doc! { "summary": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }

        filter
    }

    /// Filter for the find path. `$nearSphere` both bounds the region and
    /// orders results nearest-first.
    fn find_filter(spec: &FilterSpec) -> Document {
        let mut filter = Self::base_filter(spec);

        if let Some(ref geo) = spec.geo {
            filter.insert(
                "location",
                doc! {
                    "$nearSphere": {
                        "$geometry": {
                            "type": "Point",
                            "coordinates": [geo.center.longitude, geo.center.latitude],
                        },
                        "$maxDistance": geo.radius_km * 1000.0,
                    }
                },
            );
        }

        filter
    }

    /// Filter for the count path. `count_documents` rejects `$nearSphere`,
    /// so the same region is expressed as `$geoWithin` with the radius in
    /// radians.
    fn count_filter(spec: &FilterSpec) -> Document {
        let mut filter = Self::base_filter(spec);

        if let Some(ref geo) = spec.geo {
            filter.insert("location", geo_within(geo));
        }

        filter
    }

    async fn find_page<T>(collection: &Collection<T>, spec: &FilterSpec) -> CatalogResult<Page<T>>
    where
        T: DeserializeOwned + Send + Sync + Unpin,
    {
        let total = collection
            .count_documents(Self::count_filter(spec))
            .await?;

        let mut options = FindOptions::builder()
            .skip(spec.pagination.skip())
            .limit(i64::from(spec.pagination.limit))
            .build();
        // $nearSphere already orders by distance; an explicit sort would
        // override it
        if spec.geo.is_none() {
            options.sort = Some(doc! { "createdAt": -1 });
        }

        let cursor = collection
            .find(Self::find_filter(spec))
            .with_options(options)
            .await?;
        let records: Vec<T> = cursor.try_collect().await?;

        Ok(Page { records, total })
    }

    async fn find_by_id<T>(collection: &Collection<T>, id: Uuid) -> CatalogResult<Option<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        Ok(collection.find_one(filter).await?)
    }
}

fn geo_within(geo: &GeoClause) -> Document {
    doc! {
        "$geoWithin": {
            "$centerSphere": [
                [geo.center.longitude, geo.center.latitude],
                geo.radius_km / EARTH_RADIUS_KM,
            ]
        }
    }
}

fn param_to_bson(value: &ParamValue) -> Bson {
    match value {
        ParamValue::Text(s) => Bson::String(s.clone()),
        ParamValue::Integer(i) => Bson::Int64(*i),
        ParamValue::Float(f) => Bson::Double(*f),
        ParamValue::Boolean(b) => Bson::Boolean(*b),
    }
}

/// Keyword input is free text, not a pattern; escape it so regex
/// metacharacters match literally.
fn escape_regex(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self, spec))]
    async fn find_pets(&self, spec: &FilterSpec) -> CatalogResult<Page<Pet>> {
        Self::find_page(&self.pets, spec).await
    }

    #[instrument(skip(self))]
    async fn pet_by_id(&self, id: Uuid) -> CatalogResult<Option<Pet>> {
        Self::find_by_id(&self.pets, id).await
    }

    #[instrument(skip(self, spec))]
    async fn find_clinics(&self, spec: &FilterSpec) -> CatalogResult<Page<Clinic>> {
        Self::find_page(&self.clinics, spec).await
    }

    #[instrument(skip(self))]
    async fn clinic_by_id(&self, id: Uuid) -> CatalogResult<Option<Clinic>> {
        Self::find_by_id(&self.clinics, id).await
    }

    #[instrument(skip(self, spec))]
    async fn find_articles(&self, spec: &FilterSpec) -> CatalogResult<Page<Article>> {
        Self::find_page(&self.articles, spec).await
    }

    #[instrument(skip(self))]
    async fn article_by_id(&self, id: Uuid) -> CatalogResult<Option<Article>> {
        Self::find_by_id(&self.articles, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine::{EntityKind, resolve};
    use std::collections::HashMap;

    fn spec_for(kind: EntityKind, pairs: &[(&str, &str)]) -> FilterSpec {
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(kind, &raw).unwrap()
    }

    #[test]
    fn pet_filter_carries_predicates_and_default() {
        let spec = spec_for(EntityKind::Pet, &[("city", "Nablus"), ("type", "dog")]);
        let filter = MongoCatalogRepository::base_filter(&spec);

        assert_eq!(filter.get_str("city").unwrap(), "Nablus");
        assert_eq!(filter.get_str("type").unwrap(), "dog");
        assert_eq!(filter.get_bool("isAdopted").unwrap(), false);
    }

    #[test]
    fn keyword_becomes_case_insensitive_or_regex() {
        let spec = spec_for(
            EntityKind::Article,
            &[("petType", "cat"), ("keyword", "grooming")],
        );
        let filter = MongoCatalogRepository::base_filter(&spec);

        let branches = filter.get_array("$or").unwrap();
        assert_eq!(branches.len(), 2);
        let title = branches[0].as_document().unwrap();
        let clause = title.get_document("title").unwrap();
        assert_eq!(clause.get_str("$regex").unwrap(), "grooming");
        assert_eq!(clause.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn keyword_regex_metacharacters_are_escaped() {
        assert_eq!(escape_regex("c++ (vet)"), "c\\+\\+ \\(vet\\)");
        assert_eq!(escape_regex("plain"), "plain");
    }

    #[test]
    fn geo_find_uses_near_sphere_with_meters() {
        let spec = spec_for(
            EntityKind::Clinic,
            &[("lat", "31.9"), ("lng", "35.2"), ("radius", "5")],
        );
        let filter = MongoCatalogRepository::find_filter(&spec);

        let near = filter
            .get_document("location")
            .unwrap()
            .get_document("$nearSphere")
            .unwrap();
        assert_eq!(near.get_f64("$maxDistance").unwrap(), 5000.0);
        let coords = near.get_document("$geometry").unwrap();
        assert_eq!(coords.get_array("coordinates").unwrap()[0], Bson::Double(35.2));
    }

    #[test]
    fn geo_count_uses_geo_within_radians() {
        let spec = spec_for(
            EntityKind::Clinic,
            &[("lat", "31.9"), ("lng", "35.2"), ("radius", "5")],
        );
        let filter = MongoCatalogRepository::count_filter(&spec);

        let within = filter
            .get_document("location")
            .unwrap()
            .get_document("$geoWithin")
            .unwrap();
        let sphere = within.get_array("$centerSphere").unwrap();
        assert_eq!(sphere[1], Bson::Double(5.0 / EARTH_RADIUS_KM));
    }

    #[test]
    fn geo_query_drops_the_city_equality() {
        let spec = spec_for(
            EntityKind::Clinic,
            &[("city", "Ramallah"), ("lat", "31.9"), ("lng", "35.2")],
        );
        let filter = MongoCatalogRepository::find_filter(&spec);

        assert!(!filter.contains_key("city"));
        assert!(filter.contains_key("location"));
    }
}
