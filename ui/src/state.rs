use payloads::{PropertyId, responses};
use std::collections::HashMap;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Listings (managed by use_properties) ===
    pub properties: FetchState<Vec<responses::PropertySummary>>,

    // === Full listings (managed by use_property) ===
    pub individual_properties: HashMap<PropertyId, responses::Property>,
}

impl State {
    pub fn has_properties_loaded(&self) -> bool {
        self.properties.is_fetched()
    }

    pub fn set_properties(
        &mut self,
        properties: Vec<responses::PropertySummary>,
    ) {
        self.properties = FetchState::Fetched(properties);
    }

    /// Forget the listing index so the next visit to the home page refetches
    /// it, e.g. after a new upload.
    pub fn clear_properties(&mut self) {
        self.properties = FetchState::NotFetched;
    }

    pub fn has_property_loaded(&self, property_id: PropertyId) -> bool {
        self.individual_properties.contains_key(&property_id)
    }

    pub fn get_property(
        &self,
        property_id: PropertyId,
    ) -> Option<&responses::Property> {
        self.individual_properties.get(&property_id)
    }

    pub fn set_property(&mut self, property: responses::Property) {
        self.individual_properties.insert(property.id, property);
    }
}
