/// Application shell for the course review site.
/// Routes the public review list, the account view, and the edit page, and
/// owns the review data, the delete flow, and the notification area.
use chrono::NaiveDate;
use leptos::logging::log;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use uuid::Uuid;

use crate::components::review_display::ReviewDisplay;
use crate::models::review::{DeleteRequest, Review};

fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: Uuid::new_v4().to_string(),
            user: "Dana Whitfield".to_string(),
            anon: false,
            course_id: "CS112".to_string(),
            professor: "Kahn".to_string(),
            usefulness: 5,
            difficulty: 3,
            rating: 5,
            review: Some("Problem sets were hard but fair.".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap_or_default(),
        },
        Review {
            id: Uuid::new_v4().to_string(),
            user: "hidden".to_string(),
            anon: true,
            course_id: "CS210".to_string(),
            professor: "Li".to_string(),
            usefulness: 3,
            difficulty: 5,
            rating: 2,
            review: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 19).unwrap_or_default(),
        },
        Review {
            id: Uuid::new_v4().to_string(),
            user: "Marcus Reed".to_string(),
            anon: false,
            course_id: "MA242".to_string(),
            professor: "Olsen".to_string(),
            usefulness: 4,
            difficulty: 2,
            rating: 4,
            review: Some("Lectures follow the book closely.".to_string()),
            date: NaiveDate::from_ymd_opt(2023, 11, 30).unwrap_or_default(),
        },
    ]
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Stands in for the review API until it is wired up.
    let (reviews, set_reviews) = create_signal(sample_reviews());
    let (notices, set_notices) = create_signal(Vec::<String>::new());

    let notify = Callback::new(move |message: String| {
        log!("[NOTICE] {}", message);
        set_notices.update(|notices| notices.push(message));
    });

    // Confirmation dialog plus removal by id.
    let delete_review = Callback::new(move |request: DeleteRequest| {
        let confirmed = window()
            .confirm_with_message(&format!(
                "Delete your review of {} with Professor {}?",
                request.course_id, request.professor
            ))
            .unwrap_or(false);
        if confirmed {
            log!("[DELETE] Removing review {}", request.id);
            set_reviews.update(|reviews| reviews.retain(|review| review.id != request.id));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/course-reviews.css"/>
        <Title text="Course Reviews"/>
        <Router>
            <main>
                <div class="notices">
                    {move || notices.get().into_iter().map(|notice| view! {
                        <p class="notice error">{notice}</p>
                    }).collect::<Vec<_>>()}
                </div>
                <Routes>
                    <Route path="/" view=move || view! {
                        <ReviewDisplay
                            reviews=reviews
                            on_delete=delete_review
                            on_error=notify
                        />
                    }/>
                    <Route path="/account/reviews" view=move || view! {
                        <ReviewDisplay
                            reviews=reviews
                            view="account".to_string()
                            on_delete=delete_review
                            on_error=notify
                        />
                    }/>
                    <Route path="/account/reviews/edit-review/:id" view=EditReview/>
                </Routes>
            </main>
        </Router>
    }
}

/// Placeholder target for the edit links; the editor itself belongs to the
/// review API collaborator.
#[component]
fn EditReview() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").cloned().unwrap_or_default());

    view! {
        <div class="edit-review">
            <h2>{ "Edit Review" }</h2>
            <p>{move || format!("Editing review {}", id())}</p>
            <A href="/account/reviews">{ "Back to your reviews" }</A>
        </div>
    }
}
