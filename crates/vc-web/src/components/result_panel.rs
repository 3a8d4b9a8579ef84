//! Rendered verdict for a successful check

use leptos::*;
use vc_core::Verdict;

#[component]
pub fn ResultPanel(verdict: Verdict) -> impl IntoView {
    let copy = verdict.copy;
    let indicators = verdict.indicators;
    let message = verdict.result.message.clone();
    let tier = verdict.tier.name();

    view! {
        <div
            class="mt-6 p-6 rounded-lg border-l-8 bg-white transition-all hover:shadow-lg"
            style=format!("border-color: {}", copy.accent)
            data-tier=tier
        >
            <div class="text-center">
                <h3
                    class="text-2xl sm:text-3xl font-extralight mb-2"
                    style=format!("color: {}", copy.accent)
                >
                    {copy.headline}
                </h3>
                <p class="text-xl sm:text-2xl font-bold">{verdict.confidence_label()}</p>
                <p class="mt-4 text-gray-700">{copy.explanation}</p>
                {(!message.is_empty()).then(|| view! {
                    <p class="mt-2 text-sm text-gray-500 italic">{message}</p>
                })}
            </div>

            <div class="mt-8">
                <p class="text-lg font-semibold text-gray-800 mb-2">"What to do next"</p>
                <ol class="list-decimal list-inside space-y-1 text-gray-700">
                    {copy.suggestions.iter().map(|suggestion| view! {
                        <li>{*suggestion}</li>
                    }).collect_view()}
                </ol>
            </div>

            <div class="mt-8 bg-gray-100 rounded-md p-4 text-center">
                <p class="text-xl font-extralight mb-2" style=format!("color: {}", copy.accent)>
                    {indicators.title}
                </p>
                {indicators.items.iter().map(|item| view! {
                    <div class="text-gray-700">{*item}</div>
                }).collect_view()}
            </div>
        </div>
    }
}
