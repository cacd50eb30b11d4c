use payloads::PropertyType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::PropertyCard,
    hooks::{use_properties, use_title},
};

const HERO_IMAGE: &str = "/assets/images/prop3.webp";

#[function_component]
pub fn HomePage() -> Html {
    use_title("Find your next home");
    let properties_hook = use_properties();
    let query = use_state(String::new);
    let property_type = use_state(|| None::<PropertyType>);

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    // The empty option means any type
    let on_type = {
        let property_type = property_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            property_type.set(select.value().parse().ok());
        })
    };

    let on_retry = properties_hook.refetch.clone();

    html! {
        <div>
            <section
                class="relative bg-cover bg-center"
                style={format!("background-image: url('{HERO_IMAGE}')")}
            >
                <div class="bg-black/50">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center text-white space-y-6">
                        <h1 class="text-4xl sm:text-5xl font-bold">
                            {"Find your next home"}
                        </h1>
                        <p class="text-lg text-neutral-200">
                            {"Apartments, villas, condos and bungalows, listed by their owners."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-3 max-w-2xl mx-auto">
                            <select
                                onchange={on_type}
                                class="px-3 py-2 rounded-md text-neutral-900"
                            >
                                <option value="" selected={property_type.is_none()}>
                                    {"All types"}
                                </option>
                                {for PropertyType::ALL.into_iter().map(|t| html! {
                                    <option
                                        value={t.as_str()}
                                        selected={*property_type == Some(t)}
                                    >
                                        {t.label()}
                                    </option>
                                })}
                            </select>
                            <input
                                type="search"
                                placeholder="Search by title or location"
                                value={(*query).clone()}
                                oninput={on_query}
                                class="flex-1 px-3 py-2 rounded-md text-neutral-900"
                            />
                        </div>
                    </div>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-6">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Featured Listings"}
                </h2>
                {if properties_hook.error.is_some() && !properties_hook.data.is_fetched() {
                    html! {
                        <button
                            type="button"
                            onclick={move |_| on_retry.emit(())}
                            class="text-sm underline text-neutral-600 dark:text-neutral-400"
                        >
                            {"Try again"}
                        </button>
                    }
                } else {
                    html! {}
                }}
                {properties_hook.render("listings", |properties, _, _| {
                    let visible: Vec<_> = properties
                        .iter()
                        .filter(|p| p.matches(&query, *property_type))
                        .collect();
                    if visible.is_empty() {
                        return html! {
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No listings match your search."}
                            </p>
                        };
                    }
                    html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for visible.into_iter().map(|property| html! {
                                <PropertyCard
                                    key={property.id.to_string()}
                                    property={property.clone()}
                                />
                            })}
                        </div>
                    }
                })}
            </section>
        </div>
    }
}
