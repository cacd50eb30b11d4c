use payloads::responses::UploadedImages;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State, components::PropertyUploadForm, hooks::use_title,
};

#[function_component]
pub fn UploadPropertyPage() -> Html {
    use_title("Add Property");
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<State>();

    let on_uploaded = Callback::from(move |uploaded: UploadedImages| {
        // The home page grid is stale now
        dispatch.reduce_mut(|s| s.clear_properties());
        if let Some(navigator) = &navigator {
            navigator.push(&Route::PropertyDetail {
                id: uploaded.property_id,
            });
        }
    });

    html! {
        <div class="max-w-2xl mx-auto py-8 px-4">
            <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Add Property"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Describe your property and add a few photos."}
                    </p>
                </div>
                <PropertyUploadForm {on_uploaded} />
            </div>
        </div>
    }
}
