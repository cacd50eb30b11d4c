use payloads::responses::PropertySummary;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, use_fetch_with_cache};
use crate::{State, get_api_client};

/// Every listing, newest first, cached in global state.
#[hook]
pub fn use_properties() -> FetchHookReturn<Vec<PropertySummary>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached = {
        let state = state.clone();
        move || state.properties.as_ref().cloned()
    };

    let should_fetch = {
        let state = state.clone();
        move || !state.has_properties_loaded()
    };

    let fetch_and_cache = move || {
        let dispatch = dispatch.clone();
        async move {
            let properties = get_api_client()
                .list_properties()
                .await
                .map_err(|e| e.to_string())?;
            dispatch.reduce_mut(|s| s.set_properties(properties.clone()));
            Ok(properties)
        }
    };

    use_fetch_with_cache((), get_cached, should_fetch, fetch_and_cache)
}
