//! Home page

use leptos::*;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-blue-400 text-white rounded-lg">
                <div class="container mx-auto py-16 text-center">
                    <h1 class="text-3xl md:text-4xl font-bold mb-2">
                        <span class="text-white">"VERA"</span>
                        <span class="text-teal-400">"CITY"</span>
                        <span class="text-white ml-2">"CHECKER"</span>
                    </h1>
                    <p class="text-lg my-8">"Ensuring Truth & Integrity in Academic Writing"</p>
                    <a href="#try-it" class="inline-block bg-blue-500 hover:bg-blue-600 text-white font-semibold py-2 px-6 rounded-md transition-colors duration-300 transform hover:scale-105">
                        "Detect Plagiarism"
                    </a>
                </div>
            </section>

            // Features
            <section class="grid grid-cols-1 md:grid-cols-3 gap-8 py-20 px-10 bg-white bg-opacity-90">
                <FeatureCard
                    icon="✓"
                    title="Accurate Detection"
                    description="Utilizing AI to detect similarities with high precision."
                />
                <FeatureCard
                    icon="💡"
                    title="Explainable AI"
                    description="Understand why text is flagged with transparent insights."
                />
                <FeatureCard
                    icon="⚡"
                    title="Fast Analysis"
                    description="Get results in seconds with our optimized system."
                />
            </section>

            // How It Works
            <section class="bg-white">
                <h2 class="text-3xl py-10 pt-16 text-center text-black">"How It Works"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 pb-20 px-10">
                    <StepCard
                        title="1. Paste Your Text"
                        description="Copy And Paste The Text You Want To Analyze"
                    />
                    <StepCard
                        title="2. AI Analyzes It"
                        description="Our model scans and compares the text with databases"
                    />
                    <StepCard
                        title="3. Get Transparent Results"
                        description="See flagged Content and explanations instantly"
                    />
                </div>
            </section>

            // Checker
            <section id="try-it" class="mx-4 text-black sm:mx-20 py-12">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8">"Try It Now"</h2>
                <Checker/>
            </section>
        </div>
    }
}
