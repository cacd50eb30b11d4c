use payloads::{PropertyId, responses::Property};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, use_fetch_with_cache};
use crate::{State, get_api_client};

#[hook]
pub fn use_property(property_id: PropertyId) -> FetchHookReturn<Property> {
    let (state, dispatch) = use_store::<State>();

    let get_cached = {
        let state = state.clone();
        move || state.get_property(property_id).cloned()
    };

    let should_fetch = {
        let state = state.clone();
        move || !state.has_property_loaded(property_id)
    };

    let fetch_and_cache = move || {
        let dispatch = dispatch.clone();
        async move {
            let property = get_api_client()
                .get_property(&property_id)
                .await
                .map_err(|e| e.to_string())?;
            dispatch.reduce_mut(|s| s.set_property(property.clone()));
            Ok(property)
        }
    };

    use_fetch_with_cache(
        property_id,
        get_cached,
        should_fetch,
        fetch_and_cache,
    )
}
