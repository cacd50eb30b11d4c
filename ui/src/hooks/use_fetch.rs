use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// What the fetch hooks hand back to components.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading, error)`, where `is_loading`
    ///   and `error` describe a refetch while the previous data is shown.
    ///
    /// ```ignore
    /// property_hook.render("property", |property, _, _| html! {
    ///     <PropertyOverview property={property.clone()} />
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None if self.is_loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
            None => match &self.error {
                Some(error) => html! {
                    <div class="p-4 rounded-md bg-red-50 \
                               dark:bg-red-900/20 border \
                               border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 \
                                  dark:text-red-400">
                            {format!("Error loading {context}: {error}")}
                        </p>
                    </div>
                },
                None => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {format!("No {context} found")}
                        </p>
                    </div>
                },
            },
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Fetch hook backed by the Yewdux store.
///
/// 1. `get_cached` reads the data from global state,
/// 2. `should_fetch` says whether the cache is missing it,
/// 3. `fetch_and_cache` calls the api and writes the result to the store.
///
/// Fetches on mount (and when `deps` change) only if `should_fetch` holds.
///
/// ```ignore
/// #[hook]
/// pub fn use_property(id: PropertyId) -> FetchHookReturn<Property> {
///     let (state, dispatch) = use_store::<State>();
///     use_fetch_with_cache(
///         id,
///         move || state.get_property(id).cloned(),
///         move || !state.has_property_loaded(id),
///         move || async move {
///             let property = get_api_client().get_property(&id).await
///                 .map_err(|e| e.to_string())?;
///             dispatch.reduce_mut(|s| s.set_property(property.clone()));
///             Ok(property)
///         },
///     )
/// }
/// ```
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                if let Err(e) = fetch_and_cache().await {
                    tracing::warn!("Fetch failed: {e}");
                    error.set(Some(e));
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let is_loading = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps, move |_| {
            if should_fetch() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // Nothing cached and no error yet means the first fetch is pending
    let effective_is_loading =
        *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading: effective_is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
