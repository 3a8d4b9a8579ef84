//! Site navigation

use leptos::*;

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-bold">
                        <span class="text-gray-900">"VERA"</span>
                        <span class="text-teal-400">"CITY"</span>
                        <span class="text-gray-900 ml-2">"CHECKER"</span>
                    </a>
                    <a href="#try-it" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition">
                        "Try It Now"
                    </a>
                </div>
            </div>
        </nav>
    }
}
