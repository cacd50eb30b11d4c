use yew::prelude::*;

use crate::components::{
    ToastContainer,
    layout::{Footer, Header},
};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <ToastContainer />
            <main class="flex-1">
                {for props.children.iter()}
            </main>
            <Footer />
        </div>
    }
}
