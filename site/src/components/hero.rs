//! Hero banner (`#home`).

use leptos::prelude::*;

/// Static headline, pitch and two call-to-action buttons.
///
/// The buttons are `type="button"` with no handler and no target.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div id="home" class="bg-white py-5 mb-5 border-bottom">
            <div class="container py-5 text-center">
                <div class="row justify-content-center">
                    <div class="col-lg-8">
                        <span class="badge bg-primary mb-3 px-3 py-2">"AVAILABLE FOR HIRE"</span>
                        <h1 class="display-4 fw-bold mb-3 text-dark">
                            "Creative Developer Building Scalable Apps"
                        </h1>
                        <p class="lead text-muted mb-4">
                            "Specializing in modern web frameworks and type-safe tooling to create seamless user experiences and robust backend integrations."
                        </p>
                        <div class="d-flex justify-content-center gap-3">
                            <button type="button" class="btn btn-primary btn-lg px-4 fw-bold">
                                "View Projects"
                            </button>
                            <button type="button" class="btn btn-outline-dark btn-lg px-4">
                                "Contact Me"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
