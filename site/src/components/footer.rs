use leptos::prelude::*;

/// Static footer: brand, copyright year and a credit line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark text-white py-4 mt-5">
            <div class="container">
                <div class="row align-items-center">
                    <div class="col-md-6 text-center text-md-start">
                        <span class="fw-bold text-primary">"DEVPORTFOLIO"</span>
                        " © 2026"
                    </div>
                    <div class="col-md-6 text-center text-md-end mt-2 mt-md-0">
                        <small class="text-muted">"Built with Rust & Leptos"</small>
                    </div>
                </div>
            </div>
        </footer>
    }
}
