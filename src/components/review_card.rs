use leptos::*;

use crate::models::review::{DeleteRequest, Review};
use crate::utils::date::format_date;

/// One review rendered as a card: author (or "Anonymous"), date, professor,
/// course, the three scores out of 5, the optional comment, and the action
/// row. The edit link only exists in the account view.
#[component]
pub fn ReviewCard(
    review: Review,
    is_account: bool,
    on_delete: Callback<DeleteRequest>,
) -> impl IntoView {
    let delete_request = DeleteRequest::for_review(&review);
    let edit_href = format!("/account/reviews/edit-review/{}", review.id);
    let comment = review.review.clone().filter(|text| !text.is_empty());
    let author = review.display_name().to_string();

    view! {
        <div class="review-card">
            <div class="review-card-header">
                <p class="review-author">{author}</p>
                <p class="review-date">{format_date(review.date)}</p>
            </div>
            <div class="review-card-body">
                <div class="review-course">
                    <p>{ "Professor " }<span class="emphasis">{review.professor.clone()}</span></p>
                    <p><span class="emphasis">{review.course_id.clone()}</span></p>
                </div>
                <div class="review-scores">
                    <p>{ "Usefulness: " }<span class="score">{review.usefulness}</span>{ "/5" }</p>
                    <p>{ "Difficulty: " }<span class="score">{review.difficulty}</span>{ "/5" }</p>
                    <p>{ "Rating: " }<span class="score">{review.rating}</span>{ "/5" }</p>
                </div>
                {comment.map(|text| view! { <p class="review-comment">{text}</p> })}
                <div class=if is_account { "review-actions spread" } else { "review-actions centered" }>
                    {is_account.then(|| view! {
                        <a class="edit-review-link" href=edit_href.clone()>{ "Edit" }</a>
                    })}
                    <button
                        class="delete-review-button"
                        on:click=move |_| on_delete.call(delete_request.clone())
                    >
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
