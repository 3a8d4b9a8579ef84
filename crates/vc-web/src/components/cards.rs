//! Card components for the landing page

use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-100 bg-opacity-80 shadow-md p-6 rounded-lg text-center flex flex-col items-center hover:scale-105 transition-transform duration-300">
            <div class="text-teal-400 text-3xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-800 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-100 bg-opacity-80 shadow-sm p-6 rounded-lg text-center flex flex-col items-center hover:shadow-lg transition-shadow duration-300">
            <h3 class="text-xl font-semibold text-gray-800 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
