//! Project gallery (`#projects`).
//!
//! Renders [`project_data`] as a responsive grid of cards, one per record,
//! in declared order. Each card is tagged with `data-project-id`.

use leptos::prelude::*;

use crate::styles::CARD_IMAGE_STYLE;
use crate::types::{ids_are_unique, project_data, ProjectRecord};

/// Section heading plus one [`ProjectCard`] per fixed project.
#[component]
pub fn Projects() -> impl IntoView {
    let projects = project_data();
    debug_assert!(ids_are_unique(&projects), "project ids must be unique");

    view! {
        <div id="projects" class="container py-5">
            <div class="text-center mb-5">
                <h2 class="fw-bold fs-1">"My Recent Work"</h2>
                <p class="text-muted">"A showcase of technical skills and creative solutions."</p>
            </div>
            <div class="row">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// A single project card: cover image, tag badges, title, description
/// and a decorative "Learn More" link with no target.
#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let ProjectRecord {
        id,
        title,
        description,
        tech,
        image,
    } = project;
    let alt = title.clone();

    view! {
        <div class="col-lg-4 col-md-6 mb-4">
            <div class="card h-100 border-0 shadow-sm project-card" data-project-id=id.to_string()>
                <img class="card-img-top" src=image alt=alt style=CARD_IMAGE_STYLE />
                <div class="card-body d-flex flex-column p-4">
                    <div class="mb-3">
                        {tech.into_iter().map(|tag| view! { <TechBadge tag=tag /> }).collect::<Vec<_>>()}
                    </div>
                    <h5 class="card-title fw-bold fs-4">{title}</h5>
                    <p class="card-text text-muted small">{description}</p>
                    <button
                        type="button"
                        class="btn btn-link mt-auto p-0 text-decoration-none fw-bold text-primary"
                    >
                        "Learn More →"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Inline label for one technology tag.
#[component]
pub fn TechBadge(tag: String) -> impl IntoView {
    view! { <span class="badge bg-light text-dark me-1 border">{tag}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn card_renders_tags_in_order() {
        let project = ProjectRecord {
            id: 7,
            title: "Compiler".into(),
            description: "A small one.".into(),
            tech: vec!["Rust".into(), "LLVM".into()],
            image: "https://example.com/c.png".into(),
        };
        let html = view! { <ProjectCard project=project /> }.to_html();

        assert!(html.contains(r#"data-project-id="7""#));
        assert!(html.contains(r#"alt="Compiler""#));
        let rust = html.find(">Rust<").expect("Rust badge");
        let llvm = html.find(">LLVM<").expect("LLVM badge");
        assert!(rust < llvm);
    }

    #[test]
    fn learn_more_has_no_target() {
        let html = view! { <ProjectCard project=project_data().remove(0) /> }.to_html();
        assert!(html.contains("Learn More"));
        assert!(!html.contains("href="));
    }
}
