use payloads::{PropertyId, responses::Property};
use yew::prelude::*;

use crate::{
    components::{PropertySection, PropertyTabHeader},
    get_api_client,
    hooks::{use_property, use_title},
    utils::{format_price, format_rooms},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: PropertyId,
}

#[function_component]
pub fn PropertyDetailPage(props: &Props) -> Html {
    let property_hook = use_property(props.id);

    let title = property_hook
        .data
        .as_ref()
        .map(|p| p.details.title.clone())
        .unwrap_or_else(|| "Property".into());
    use_title(&title);

    property_hook.render("property", |property, _, _| {
        html! { <PropertyContent property={property.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    property: Property,
}

const SECTION_CLASSES: &str = "scroll-mt-16 space-y-4 py-8 border-b \
    border-neutral-200 dark:border-neutral-700";

const HEADING_CLASSES: &str =
    "text-xl font-semibold text-neutral-900 dark:text-neutral-100";

#[function_component]
fn PropertyContent(props: &ContentProps) -> Html {
    let active_section = use_state(|| PropertySection::Overview);
    let show_full_description = use_state(|| false);

    let property = &props.property;
    let details = &property.details;

    let on_select = {
        let active_section = active_section.clone();
        Callback::from(move |section: PropertySection| {
            active_section.set(section)
        })
    };

    let on_toggle_description = {
        let show_full_description = show_full_description.clone();
        Callback::from(move |_| {
            show_full_description.set(!*show_full_description)
        })
    };

    let preview = property.description_preview();
    let is_truncated = preview != details.description;
    let description = if *show_full_description {
        details.description.clone()
    } else {
        preview
    };

    let api_client = get_api_client();
    let overview_rows = [
        ("Price", format_price(details.price)),
        ("Location", details.location.clone()),
        ("Bedrooms", details.bedrooms.to_string()),
        ("Bathrooms", format_rooms(details.bathrooms)),
        ("Square Footage", format!("{} sqft", details.sqft)),
        ("Type", details.property_type.label().to_string()),
        (
            "Status",
            if details.is_for_sale { "For sale" } else { "For rent" }
                .to_string(),
        ),
    ];

    html! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <PropertyTabHeader
                property={property.clone()}
                active_section={*active_section}
                {on_select}
            />

            {if let Some(cover) = property.cover_image() {
                html! {
                    <figure class="mt-6">
                        <img
                            src={api_client.image_url(&cover.id)}
                            alt={cover.description.clone()}
                            class="w-full max-h-[32rem] object-cover rounded-lg"
                        />
                        if !cover.description.is_empty() {
                            <figcaption class="mt-2 text-sm text-neutral-500">
                                {&cover.description}
                            </figcaption>
                        }
                    </figure>
                }
            } else {
                html! {}
            }}

            <section id={PropertySection::Overview.anchor()} class={SECTION_CLASSES}>
                <h2 class={HEADING_CLASSES}>{PropertySection::Overview.label()}</h2>
                <dl class="grid grid-cols-2 sm:grid-cols-4 gap-4 p-6 rounded-lg bg-neutral-50 dark:bg-neutral-800">
                    {for overview_rows.into_iter().map(|(label, value)| html! {
                        <div>
                            <dt class="text-xs uppercase tracking-wide text-neutral-500">{label}</dt>
                            <dd class="font-medium text-neutral-900 dark:text-neutral-100">{value}</dd>
                        </div>
                    })}
                </dl>
                if property.images.len() > 1 {
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                        {for property.images.iter().skip(1).map(|image| html! {
                            <img
                                key={image.id.to_string()}
                                src={api_client.image_url(&image.id)}
                                alt={image.description.clone()}
                                title={image.description.clone()}
                                class="aspect-video w-full object-cover rounded"
                            />
                        })}
                    </div>
                }
            </section>

            <section id={PropertySection::Description.anchor()} class={SECTION_CLASSES}>
                <h2 class={HEADING_CLASSES}>{PropertySection::Description.label()}</h2>
                <p class="whitespace-pre-line text-neutral-700 dark:text-neutral-300">
                    {description}
                </p>
                if is_truncated {
                    <button
                        type="button"
                        onclick={on_toggle_description}
                        class="text-sm font-medium underline text-neutral-700 dark:text-neutral-300"
                    >
                        {if *show_full_description { "Show Less" } else { "Show More" }}
                    </button>
                }
            </section>

            <section id={PropertySection::Contact.anchor()} class={SECTION_CLASSES}>
                <h2 class={HEADING_CLASSES}>{PropertySection::Contact.label()}</h2>
                <p class="text-neutral-700 dark:text-neutral-300">
                    {format!(
                        "Interested in {}? Reach out and mention listing {}.",
                        details.title, property.id
                    )}
                </p>
            </section>

            <section id={PropertySection::Price.anchor()} class={SECTION_CLASSES}>
                <h2 class={HEADING_CLASSES}>{PropertySection::Price.label()}</h2>
                <p class="text-3xl font-bold text-neutral-900 dark:text-white">
                    {format_price(details.price)}
                    if !details.is_for_sale {
                        <span class="text-base font-normal text-neutral-500">{" / month"}</span>
                    }
                </p>
            </section>
        </div>
    }
}
