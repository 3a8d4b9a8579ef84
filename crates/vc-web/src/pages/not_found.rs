use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-24 text-gray-700">
            <h1 class="text-3xl font-bold mb-4">"Page not found"</h1>
            <a href="/" class="text-blue-600 hover:underline">"Back to the checker"</a>
        </div>
    }
}
