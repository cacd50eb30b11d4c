use payloads::responses::Property;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::utils::{format_price, time::format_listed_date};

/// Sections of the property page, in page order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertySection {
    Overview,
    Description,
    Contact,
    Price,
}

impl PropertySection {
    pub const ALL: [PropertySection; 4] = [
        PropertySection::Overview,
        PropertySection::Description,
        PropertySection::Contact,
        PropertySection::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Description => "Property Description",
            Self::Contact => "Contact Us",
            Self::Price => "Property Price",
        }
    }

    /// Element id the tab scrolls to.
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Description => "description",
            Self::Contact => "contact",
            Self::Price => "price",
        }
    }
}

fn scroll_to(section: PropertySection) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => tracing::warn!("No section with id {}", section.anchor()),
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property: Property,
    pub active_section: PropertySection,
    pub on_select: Callback<PropertySection>,
}

#[function_component]
pub fn PropertyTabHeader(props: &Props) -> Html {
    let details = &props.property.details;

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap justify-between items-end gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {&details.title}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                        {format!(
                            "{} · Listed {}",
                            details.location,
                            format_listed_date(props.property.created_at)
                        )}
                    </p>
                </div>
                <p class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {format_price(details.price)}
                </p>
            </div>

            <div class="sticky top-0 z-10 bg-white dark:bg-neutral-900 border-b border-neutral-200 dark:border-neutral-700">
                <nav class="-mb-px flex space-x-8">
                    {for PropertySection::ALL.into_iter().map(|section| {
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_| {
                            scroll_to(section);
                            on_select.emit(section);
                        });
                        let state_classes = if section == props.active_section {
                            "border-neutral-500 text-neutral-900 dark:text-neutral-100"
                        } else {
                            "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                        };
                        html! {
                            <button
                                type="button"
                                {onclick}
                                class={classes!("py-2", "px-1", "border-b-2", "font-medium", "text-sm", state_classes)}
                            >
                                {section.label()}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </div>
    }
}
