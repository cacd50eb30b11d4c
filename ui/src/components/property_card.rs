use payloads::responses::PropertySummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route, get_api_client,
    utils::{format_price, format_rooms},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property: PropertySummary,
}

/// A listing tile for the home page grid.
#[function_component]
pub fn PropertyCard(props: &Props) -> Html {
    let property = &props.property;
    let cover_url = property
        .cover_image_id
        .map(|id| get_api_client().image_url(&id));

    html! {
        <Link<Route>
            to={Route::PropertyDetail { id: property.id }}
            classes="block rounded-lg overflow-hidden border border-neutral-200 dark:border-neutral-700 hover:shadow-lg transition-shadow bg-white dark:bg-neutral-800"
        >
            <div class="aspect-video bg-neutral-100 dark:bg-neutral-700">
                {if let Some(url) = cover_url {
                    html! {
                        <img
                            src={url}
                            alt={property.title.clone()}
                            class="w-full h-full object-cover"
                        />
                    }
                } else {
                    html! {}
                }}
            </div>
            <div class="p-4 space-y-1">
                <div class="flex justify-between items-baseline">
                    <h3 class="font-semibold text-neutral-900 dark:text-neutral-100 truncate">
                        {&property.title}
                    </h3>
                    <span class="text-xs uppercase tracking-wide text-neutral-500">
                        {if property.is_for_sale { "For sale" } else { "For rent" }}
                    </span>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&property.location}
                </p>
                <p class="text-lg font-bold text-neutral-900 dark:text-white">
                    {format_price(property.price)}
                </p>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!(
                        "{} bd · {} ba · {} sqft · {}",
                        property.bedrooms,
                        format_rooms(property.bathrooms),
                        property.sqft,
                        property.property_type.label(),
                    )}
                </p>
            </div>
        </Link<Route>>
    }
}
