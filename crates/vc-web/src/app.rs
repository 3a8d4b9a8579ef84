//! Main application component

use leptos::*;
use leptos_router::*;
use vc_core::HttpDetectionClient;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App(client: HttpDetectionClient) -> impl IntoView {
    provide_context(client);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50">
                <SiteNav/>
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Shown instead of the app when the detection service is not configured
#[component]
pub fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="max-w-lg p-6 bg-red-100 text-red-700 rounded-lg">
                <h1 class="text-xl font-semibold mb-2">"Veracity Checker is not configured"</h1>
                <p>{message}</p>
            </div>
        </div>
    }
}
