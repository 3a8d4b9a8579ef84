//! "Try It Now" form: owns the request state for one checker on the page

use leptos::*;
use vc_core::{submit_with, HttpDetectionClient, RequestState, Verdict};
use super::ResultPanel;

#[component]
pub fn Checker() -> impl IntoView {
    let client = expect_context::<HttpDetectionClient>();
    let (text, set_text) = create_signal(String::new());
    let (state, set_state) = create_signal(RequestState::Idle);
    let loading = move || state.with(RequestState::is_loading);
    let button_class = move || {
        if loading() {
            "px-6 py-2 rounded-lg text-white font-medium bg-gray-400 cursor-not-allowed"
        } else {
            "px-6 py-2 rounded-lg text-white font-medium bg-blue-600 hover:bg-blue-700"
        }
    };

    // The button is disabled while loading; nothing else stops a second submit.
    let analyze = move |_: ev::MouseEvent| {
        let client = client.clone();
        let input = text.get_untracked();
        spawn_local(async move {
            submit_with(&client, &input, move |next| set_state.set(next)).await;
        });
    };

    view! {
        <div class="bg-white rounded-lg shadow-lg p-6">
            <textarea
                class="w-full h-48 p-4 mb-4 border rounded-lg resize-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all hover:shadow-md"
                placeholder="Paste your text here to check for plagiarism..."
                on:input=move |ev| set_text.set(event_target_value(&ev))
                prop:value=text
            />

            <div class="flex justify-center">
                <button
                    class=button_class
                    on:click=analyze
                    disabled=loading
                >
                    {move || if loading() { "Analyzing..." } else { "Analyze" }}
                </button>
            </div>

            {move || state.with(|state| match state {
                RequestState::Failed(message) => view! {
                    <div class="mt-4 p-4 bg-red-100 text-red-700 rounded-lg">{message.clone()}</div>
                }.into_view(),
                RequestState::Succeeded(result) => view! {
                    <ResultPanel verdict=Verdict::new(result.clone())/>
                }.into_view(),
                RequestState::Idle | RequestState::Loading => ().into_view(),
            })}
        </div>
    }
}
