/// Filterable, searchable list of course/professor reviews.
/// Owns the six range bounds, the search string, and the derived visible
/// list; everything below it is display only.
use leptos::logging::log;
use leptos::*;

use crate::components::review_card::ReviewCard;
use crate::components::review_filter::ReviewFilter;
use crate::models::filter::{self, FilterBounds, Metric, RangeBound};
use crate::models::review::{DeleteRequest, Review};

#[component]
pub fn ReviewDisplay(
    /// Source list, owned by the caller. Never mutated here.
    reviews: ReadSignal<Vec<Review>>,
    /// `"account"` hides the heading, enables edit links, and spreads the
    /// action row.
    #[prop(optional, into)]
    view: Option<String>,
    /// Hands a delete request to the external confirmation flow.
    on_delete: Callback<DeleteRequest>,
    /// Notification surface for rejected bound updates.
    on_error: Callback<String>,
) -> impl IntoView {
    let is_account = view.as_deref() == Some("account");

    let (bounds, set_bounds) = create_signal(FilterBounds::default());
    let (filtered_reviews, set_filtered_reviews) = create_signal(Vec::<Review>::new());
    let (search, set_search) = create_signal(String::new());

    // Recompute whenever the source list or any bound changes. An inverted
    // rating range (stale update) keeps the previous result on screen.
    create_effect(move |_| {
        let current = bounds.get();
        if current.rating_inverted() {
            log!("[FILTER] min rating cannot be greater than max rating");
            return;
        }
        set_filtered_reviews.set(filter::range_filtered(&reviews.get(), &current));
    });

    let set_min_bound = Callback::new(move |(metric, candidate): (Metric, RangeBound)| {
        let mut current = bounds.get_untracked();
        match current.set_min(metric, candidate) {
            Ok(()) => set_bounds.set(current),
            Err(err) => on_error.call(err.to_string()),
        }
    });

    let set_max_bound = Callback::new(move |(metric, candidate): (Metric, RangeBound)| {
        let mut current = bounds.get_untracked();
        match current.set_max(metric, candidate) {
            Ok(()) => set_bounds.set(current),
            Err(err) => on_error.call(err.to_string()),
        }
    });

    // Clearing the search shows the FULL list, not the range-filtered one;
    // the range bounds reapply on their next recompute. Kept as-is from the
    // original behavior.
    let handle_review_search = move |raw: String| {
        let term = raw.trim().to_lowercase();
        set_search.set(term.clone());
        if term.is_empty() {
            set_filtered_reviews.set(reviews.get_untracked());
        } else {
            set_filtered_reviews.set(filter::search_filtered(&reviews.get_untracked(), &term));
        }
    };

    view! {
        <div class="review-display">
            {(!is_account).then(|| view! { <h2 class="review-heading">{ "Reviews" }</h2> })}
            <ReviewFilter bounds=bounds on_set_min=set_min_bound on_set_max=set_max_bound />
            <div class="review-search">
                <input
                    type="text"
                    name="review"
                    placeholder="Search for review..."
                    prop:value=move || search.get()
                    on:input=move |e| handle_review_search(event_target_value(&e))
                />
            </div>
            <div class="review-list">
                {move || filtered_reviews.get().into_iter().map(|review| view! {
                    <ReviewCard review=review is_account=is_account on_delete=on_delete />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
