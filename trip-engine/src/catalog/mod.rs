//! The place catalog and its content-pack file format.
//!
//! A `Catalog` is a validated, id-indexed collection of places: the
//! read-only pool the plan engine draws from and routes resolve
//! against. Catalogs arrive as JSON content packs; loading validates
//! every record up front, so code holding a `Catalog` never meets a
//! duplicate id, an inverted range, or an itinerary pointing at a
//! place that does not exist. Unknown interest tags are the one
//! lenient case: packs authored against a newer taxonomy load with
//! those tags dropped.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    CandidatePlace, CostRange, DurationRange, GeoPoint, Interest, PlaceId,
};

/// Errors raised while building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate place id: {0}")]
    DuplicatePlace(PlaceId),

    /// A lookup or itinerary referenced an id the catalog lacks.
    #[error("unknown place id: {0}")]
    UnknownPlace(PlaceId),

    /// A record was structurally well-formed JSON but invalid data.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The pack was not valid JSON of the expected shape.
    #[error("malformed pack: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The pack file could not be read.
    #[error("failed to read pack: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated, id-indexed collection of places.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<CandidatePlace>,
    index: HashMap<PlaceId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids. Order is preserved.
    pub fn new(places: Vec<CandidatePlace>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(places.len());
        for (position, place) in places.iter().enumerate() {
            if index.insert(place.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicatePlace(place.id.clone()));
            }
        }
        Ok(Self { places, index })
    }

    /// Look up a place by id.
    pub fn get(&self, id: &PlaceId) -> Option<&CandidatePlace> {
        self.index.get(id).map(|&position| &self.places[position])
    }

    /// All places, in pack order.
    pub fn places(&self) -> &[CandidatePlace] {
        &self.places
    }

    /// Number of places held.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True when the catalog holds nothing.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Clone out the places sharing at least one tag with
    /// `interests`, ready to hand to the plan engine.
    pub fn matching_interests(&self, interests: &BTreeSet<Interest>) -> Vec<CandidatePlace> {
        self.places
            .iter()
            .filter(|place| place.interest_overlap(interests) > 0)
            .cloned()
            .collect()
    }

    /// Resolve ids into places, in the order given. Any miss fails
    /// the whole resolution.
    pub fn resolve(&self, ids: &[PlaceId]) -> Result<Vec<CandidatePlace>, CatalogError> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownPlace(id.clone()))
            })
            .collect()
    }
}

/// A pre-authored ordered walk through catalog places.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Identifier, unique within its pack.
    pub id: String,

    /// Human-readable title.
    pub title: String,

    /// The places to visit, in order. May be empty; starting a route
    /// over an empty itinerary simply yields no progress.
    pub place_ids: Vec<PlaceId>,
}

/// A loaded content pack: a catalog plus its curated itineraries.
///
/// Every itinerary reference is checked at load time, so resolving
/// one later cannot fail.
#[derive(Debug, Clone)]
pub struct ContentPack {
    id: String,
    name: String,
    version: u32,
    catalog: Catalog,
    itineraries: Vec<Itinerary>,
}

impl ContentPack {
    /// Parse and validate a pack from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let record: PackRecord = serde_json::from_str(json)?;
        let pack = build_pack(record)?;
        debug!(
            pack = %pack.id,
            version = pack.version,
            places = pack.catalog.len(),
            itineraries = pack.itineraries.len(),
            "content pack loaded"
        );
        Ok(pack)
    }

    /// Read and validate a pack from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pack identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable pack name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monotonic content version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The pack's place catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The pack's itineraries, in pack order.
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// Look up an itinerary by id.
    pub fn itinerary(&self, id: &str) -> Option<&Itinerary> {
        self.itineraries.iter().find(|itinerary| itinerary.id == id)
    }

    /// Resolve an itinerary's places in visit order, or `None` when
    /// no itinerary has that id.
    pub fn resolve_itinerary(&self, id: &str) -> Option<Vec<CandidatePlace>> {
        let itinerary = self.itinerary(id)?;
        // references were validated at load time
        self.catalog.resolve(&itinerary.place_ids).ok()
    }
}

#[derive(Debug, Deserialize)]
struct PackRecord {
    id: String,
    name: String,
    version: u32,
    places: Vec<PlaceRecord>,
    #[serde(default)]
    itineraries: Vec<ItineraryRecord>,
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    visit_minutes: RangeRecord<i64>,
    cost: RangeRecord<u32>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    hint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RangeRecord<T> {
    min: T,
    max: T,
}

#[derive(Debug, Deserialize)]
struct ItineraryRecord {
    id: String,
    title: String,
    place_ids: Vec<String>,
}

fn build_pack(record: PackRecord) -> Result<ContentPack, CatalogError> {
    let places = record
        .places
        .into_iter()
        .map(build_place)
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Catalog::new(places)?;

    let mut itineraries = Vec::with_capacity(record.itineraries.len());
    for entry in record.itineraries {
        if itineraries.iter().any(|existing: &Itinerary| existing.id == entry.id) {
            return Err(CatalogError::InvalidRecord(format!(
                "duplicate itinerary id: {}",
                entry.id
            )));
        }
        let place_ids = entry
            .place_ids
            .iter()
            .map(|raw| {
                PlaceId::parse(raw).map_err(|err| {
                    CatalogError::InvalidRecord(format!("itinerary {}: {err}", entry.id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for id in &place_ids {
            if catalog.get(id).is_none() {
                return Err(CatalogError::UnknownPlace(id.clone()));
            }
        }
        itineraries.push(Itinerary {
            id: entry.id,
            title: entry.title,
            place_ids,
        });
    }

    Ok(ContentPack {
        id: record.id,
        name: record.name,
        version: record.version,
        catalog,
        itineraries,
    })
}

/// Build one domain place from its pack record.
///
/// Structural problems (bad id, inverted range, off-planet
/// coordinates) fail the load; unrecognised tags are dropped with a
/// warning so newer packs still open.
fn build_place(record: PlaceRecord) -> Result<CandidatePlace, CatalogError> {
    let id = PlaceId::parse(&record.id).map_err(|err| {
        CatalogError::InvalidRecord(format!("place {:?}: {err}", record.id))
    })?;

    if !(-90.0..=90.0).contains(&record.latitude)
        || !(-180.0..=180.0).contains(&record.longitude)
    {
        return Err(CatalogError::InvalidRecord(format!(
            "place {id}: coordinates out of range ({}, {})",
            record.latitude, record.longitude
        )));
    }

    let visit = DurationRange::new(record.visit_minutes.min, record.visit_minutes.max)
        .map_err(|err| CatalogError::InvalidRecord(format!("place {id}: {err}")))?;
    let cost = CostRange::new(record.cost.min, record.cost.max)
        .map_err(|err| CatalogError::InvalidRecord(format!("place {id}: {err}")))?;

    let tags = record
        .tags
        .iter()
        .filter_map(|raw| match raw.parse::<Interest>() {
            Ok(tag) => Some(tag),
            Err(err) => {
                warn!(place = %id, tag = %err.tag, "dropping unknown interest tag");
                None
            }
        })
        .collect();

    Ok(CandidatePlace {
        id,
        name: record.name,
        position: GeoPoint::new(record.latitude, record.longitude),
        visit,
        cost,
        tags,
        hint: record.hint,
    })
}
