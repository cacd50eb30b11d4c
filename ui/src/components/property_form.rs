use payloads::{
    PropertyType,
    form::{PropertyForm, SUCCESS_MESSAGE, SubmitPhase, submit_with_progress},
    requests::PropertyDetails,
    responses::UploadedImages,
    validation::{FormField, ValidationErrors},
};
use wasm_bindgen::JsCast;
use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};
use yew::prelude::*;

use crate::{browser_image::BrowserImage, contexts::use_toast, get_api_client};

type FormHandle = UseStateHandle<PropertyForm<BrowserImage>>;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 \
    focus:ring-neutral-500 focus:border-neutral-500 disabled:opacity-50";

const LABEL_CLASSES: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

/// Value of whichever form control fired the event.
fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Callback applying a control's value to the form details.
fn on_detail<E: AsRef<Event> + 'static>(
    form: &FormHandle,
    apply: fn(&mut PropertyDetails, &str),
) -> Callback<E> {
    let form = form.clone();
    Callback::from(move |e: E| {
        let value = event_value(e.as_ref());
        let mut next = (*form).clone();
        next.update_details(|details| apply(details, &value));
        form.set(next);
    })
}

fn field_error(errors: &ValidationErrors, field: FormField) -> Html {
    match errors.message(field) {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message}</p>
        },
        None => html! {},
    }
}

fn submit_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "Add Property",
        SubmitPhase::Validating => "Checking...",
        SubmitPhase::Encoding => "Preparing images...",
        SubmitPhase::Submitting => "Uploading...",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called after the listing was stored.
    pub on_uploaded: Callback<UploadedImages>,
}

/// The property upload form: listing details, image picker with one
/// description per image, and submission.
#[function_component]
pub fn PropertyUploadForm(props: &Props) -> Html {
    let form = use_state(PropertyForm::<BrowserImage>::new);
    // Fed only by `submit_with_progress` on the copy being submitted
    let phase = use_state(|| form.phase());
    let file_input_ref = use_node_ref();
    let toast = use_toast();

    let busy = *phase != SubmitPhase::Idle;
    let errors = form.errors().clone();
    let details = form.details().clone();

    let on_title = on_detail::<InputEvent>(&form, |d, v| d.title = v.into());
    let on_description =
        on_detail::<InputEvent>(&form, |d, v| d.description = v.into());
    let on_location =
        on_detail::<InputEvent>(&form, |d, v| d.location = v.into());
    // Unparseable numbers become zero so validation reports them
    let on_price = on_detail::<InputEvent>(&form, |d, v| {
        d.price = v.trim().parse().unwrap_or_default()
    });
    let on_bedrooms = on_detail::<InputEvent>(&form, |d, v| {
        d.bedrooms = v.trim().parse().unwrap_or_default()
    });
    let on_bathrooms = on_detail::<InputEvent>(&form, |d, v| {
        d.bathrooms = v.trim().parse().unwrap_or_default()
    });
    let on_sqft = on_detail::<InputEvent>(&form, |d, v| {
        d.sqft = v.trim().parse().unwrap_or_default()
    });
    let on_property_type =
        on_detail::<Event>(&form, |d, v| match v.parse() {
            Ok(property_type) => d.property_type = property_type,
            Err(e) => tracing::warn!("{e}"),
        });

    let on_for_sale = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.update_details(|d| d.is_for_sale = input.checked());
            form.set(next);
        })
    };

    let on_files = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let images = input
                .files()
                .map(|files| BrowserImage::from_file_list(&files))
                .unwrap_or_default();
            tracing::debug!("Selected {} images", images.len());
            let mut next = (*form).clone();
            next.select_images(images);
            form.set(next);
        })
    };

    let on_image_description = |index: usize| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = event_value(e.as_ref());
            let mut next = (*form).clone();
            match next.set_description(index, value) {
                Ok(()) => form.set(next),
                Err(e) => tracing::warn!("{e}"),
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let toast = toast.clone();
        let file_input_ref = file_input_ref.clone();
        let on_uploaded = props.on_uploaded.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != SubmitPhase::Idle {
                return;
            }

            let form = form.clone();
            let phase = phase.clone();
            let toast = toast.clone();
            let file_input_ref = file_input_ref.clone();
            let on_uploaded = on_uploaded.clone();
            let mut working = (*form).clone();

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result =
                    submit_with_progress(&mut working, &api_client, |p| {
                        phase.set(p)
                    })
                    .await;
                form.set(working);

                match result {
                    Ok(uploaded) => {
                        if let Some(input) =
                            file_input_ref.cast::<HtmlInputElement>()
                        {
                            input.set_value("");
                        }
                        toast.success(SUCCESS_MESSAGE);
                        on_uploaded.emit(uploaded);
                    }
                    // Field errors are shown inline, everything else gets the
                    // generic failure toast
                    Err(e) => {
                        if let Some(alert) = e.alert() {
                            toast.error(alert);
                        }
                    }
                }
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6" novalidate=true>
            <div class="space-y-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 border-b border-neutral-200 dark:border-neutral-700 pb-2">
                    {"Property Details"}
                </h3>

                <div>
                    <label for="title" class={LABEL_CLASSES}>{"Title"}</label>
                    <input
                        id="title"
                        type="text"
                        value={details.title.clone()}
                        oninput={on_title}
                        disabled={busy}
                        class={INPUT_CLASSES}
                    />
                    {field_error(&errors, FormField::Title)}
                </div>

                <div>
                    <label for="description" class={LABEL_CLASSES}>{"Description"}</label>
                    <textarea
                        id="description"
                        rows="4"
                        value={details.description.clone()}
                        oninput={on_description}
                        disabled={busy}
                        class={INPUT_CLASSES}
                    />
                    {field_error(&errors, FormField::Description)}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label for="price" class={LABEL_CLASSES}>{"Price"}</label>
                        <input
                            id="price"
                            type="number"
                            min="0"
                            step="any"
                            value={details.price.to_string()}
                            oninput={on_price}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        />
                        {field_error(&errors, FormField::Price)}
                    </div>
                    <div>
                        <label for="location" class={LABEL_CLASSES}>{"Location"}</label>
                        <input
                            id="location"
                            type="text"
                            value={details.location.clone()}
                            oninput={on_location}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        />
                        {field_error(&errors, FormField::Location)}
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div>
                        <label for="bedrooms" class={LABEL_CLASSES}>{"Bedrooms"}</label>
                        <input
                            id="bedrooms"
                            type="number"
                            min="1"
                            value={details.bedrooms.to_string()}
                            oninput={on_bedrooms}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        />
                        {field_error(&errors, FormField::Bedrooms)}
                    </div>
                    <div>
                        <label for="bathrooms" class={LABEL_CLASSES}>{"Bathrooms"}</label>
                        <input
                            id="bathrooms"
                            type="number"
                            min="1"
                            step="0.5"
                            value={details.bathrooms.to_string()}
                            oninput={on_bathrooms}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        />
                        {field_error(&errors, FormField::Bathrooms)}
                    </div>
                    <div>
                        <label for="sqft" class={LABEL_CLASSES}>{"Square Footage"}</label>
                        <input
                            id="sqft"
                            type="number"
                            min="1"
                            value={details.sqft.to_string()}
                            oninput={on_sqft}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        />
                        {field_error(&errors, FormField::Sqft)}
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 items-end">
                    <div>
                        <label for="property-type" class={LABEL_CLASSES}>{"Property Type"}</label>
                        <select
                            id="property-type"
                            onchange={on_property_type}
                            disabled={busy}
                            class={INPUT_CLASSES}
                        >
                            {for PropertyType::ALL.into_iter().map(|t| html! {
                                <option
                                    value={t.as_str()}
                                    selected={t == details.property_type}
                                >
                                    {t.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <label class="flex items-center space-x-2 text-sm text-neutral-700 dark:text-neutral-300">
                        <input
                            type="checkbox"
                            checked={details.is_for_sale}
                            onchange={on_for_sale}
                            disabled={busy}
                            class="h-4 w-4"
                        />
                        <span>{"For sale"}</span>
                    </label>
                </div>
            </div>

            <div class="space-y-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 border-b border-neutral-200 dark:border-neutral-700 pb-2">
                    {"Images"}
                </h3>
                <input
                    ref={file_input_ref}
                    type="file"
                    accept="image/*"
                    multiple=true
                    onchange={on_files}
                    disabled={busy}
                    class="block w-full text-sm text-neutral-600 dark:text-neutral-400"
                />
                {field_error(&errors, FormField::Images)}
                {field_error(&errors, FormField::Descriptions)}

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {for form.images().iter().enumerate().map(|(index, entry)| html! {
                        <div key={index} class="space-y-2">
                            <div class="aspect-video rounded overflow-hidden bg-neutral-100 dark:bg-neutral-700">
                                {if let Some(url) = entry.file().preview_url() {
                                    html! {
                                        <img
                                            src={url.to_string()}
                                            alt={format!("Image {}", index + 1)}
                                            class="w-full h-full object-cover"
                                        />
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                            <input
                                type="text"
                                placeholder={format!("Image {} description", index + 1)}
                                value={entry.description().to_string()}
                                oninput={on_image_description(index)}
                                disabled={busy}
                                class={INPUT_CLASSES}
                            />
                        </div>
                    })}
                </div>
            </div>

            <button
                type="submit"
                disabled={busy}
                class="w-full px-4 py-2 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 rounded-md disabled:opacity-50"
            >
                {submit_label(*phase)}
            </button>
        </form>
    }
}
