use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let route = use_route::<Route>();
    let link_classes = |target: Route| {
        let active = route.as_ref() == Some(&target);
        classes!(
            "text-sm", "font-medium", "px-3", "py-2", "rounded-md",
            if active {
                "text-neutral-900 bg-neutral-100 dark:text-white dark:bg-neutral-800"
            } else {
                "text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-white"
            }
        )
    };

    html! {
        <header class="bg-white dark:bg-neutral-900 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <nav class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Homes"}
                    </Link<Route>>
                    <div class="flex items-center space-x-2">
                        <Link<Route> to={Route::Home} classes={link_classes(Route::Home)}>
                            {"Home"}
                        </Link<Route>>
                        <Link<Route> to={Route::Upload} classes={link_classes(Route::Upload)}>
                            {"Add Property"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
    }
}
