#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use course_reviews::components::review_display::ReviewDisplay;
use course_reviews::models::review::{DeleteRequest, Review};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            user: "Dana Whitfield".to_string(),
            anon: false,
            course_id: "CS112".to_string(),
            professor: "Kahn".to_string(),
            usefulness: 5,
            difficulty: 3,
            rating: 5,
            review: Some("Problem sets were hard but fair.".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        },
        Review {
            id: "r2".to_string(),
            user: "hidden".to_string(),
            anon: true,
            course_id: "CS210".to_string(),
            professor: "Li".to_string(),
            usefulness: 3,
            difficulty: 5,
            rating: 2,
            review: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
        },
    ]
}

struct Mounted {
    container: web_sys::Element,
}

impl Mounted {
    fn query_all(&self, selector: &str) -> u32 {
        self.container
            .query_selector_all(selector)
            .map(|list| list.length())
            .unwrap_or(0)
    }

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        self.container.query_selector(selector).ok().flatten()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.container.remove();
    }
}

fn mount_display(
    view: Option<&str>,
    on_delete: Callback<DeleteRequest>,
    on_error: Callback<String>,
) -> (Mounted, WriteSignal<Vec<Review>>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let (reviews, set_reviews) = create_signal(sample_reviews());
    let view = view.map(str::to_string);

    let html_container = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    leptos::mount_to(html_container, move || {
        view! {
            <ReviewDisplay
                reviews=reviews
                view=view
                on_delete=on_delete
                on_error=on_error
            />
        }
    });

    (Mounted { container }, set_reviews)
}

fn noop_delete() -> Callback<DeleteRequest> {
    Callback::new(|_| {})
}

fn noop_error() -> Callback<String> {
    Callback::new(|_| {})
}

// Synthetic events must bubble for the delegated listeners to see them.
fn bubbling_event(name: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    web_sys::Event::new_with_event_init_dict(name, &init).unwrap()
}

fn set_search_text(mounted: &Mounted, text: &str) {
    let input = mounted
        .query("input[name='review']")
        .expect("search input should exist")
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(text);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

fn change_select(mounted: &Mounted, selector: &str, value: &str) {
    let select = mounted
        .query(selector)
        .expect("bound selector should exist")
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();
    select.set_value(value);
    select.dispatch_event(&bubbling_event("change")).unwrap();
}

#[wasm_bindgen_test]
fn public_view_shows_heading_and_no_edit_links() {
    let (mounted, _set_reviews) = mount_display(None, noop_delete(), noop_error());

    let heading = mounted.query("h2.review-heading").expect("heading missing");
    assert_eq!(heading.text_content().unwrap_or_default(), "Reviews");
    assert_eq!(mounted.query_all(".review-card"), 2);
    assert_eq!(mounted.query_all(".edit-review-link"), 0);
    assert_eq!(mounted.query_all(".delete-review-button"), 2);
}

#[wasm_bindgen_test]
fn account_view_hides_heading_and_adds_edit_links() {
    let (mounted, _set_reviews) = mount_display(Some("account"), noop_delete(), noop_error());

    assert!(mounted.query("h2.review-heading").is_none());
    assert_eq!(mounted.query_all(".edit-review-link"), 2);

    let link = mounted.query(".edit-review-link").unwrap();
    assert_eq!(
        link.get_attribute("href").unwrap_or_default(),
        "/account/reviews/edit-review/r1"
    );
}

#[wasm_bindgen_test]
fn anonymous_card_shows_anonymous_and_omits_missing_comment() {
    let (mounted, _set_reviews) = mount_display(None, noop_delete(), noop_error());

    let authors = mounted
        .container
        .query_selector_all(".review-author")
        .unwrap();
    assert_eq!(
        authors.item(1).unwrap().text_content().unwrap_or_default(),
        "Anonymous"
    );
    // Only the first sample review carries a comment.
    assert_eq!(mounted.query_all(".review-comment"), 1);

    let date = mounted.query(".review-date").unwrap();
    assert_eq!(date.text_content().unwrap_or_default(), "03/07/2024");
}

#[wasm_bindgen_test]
fn search_narrows_and_clearing_restores_the_full_list() {
    let (mounted, _set_reviews) = mount_display(None, noop_delete(), noop_error());

    set_search_text(&mounted, "anon");
    assert_eq!(mounted.query_all(".review-card"), 1);

    // Narrow with a range filter first, then clear the search: the full
    // list comes back, not the range-filtered one.
    change_select(&mounted, ".metric-range:nth-child(3) select.min-bound", "4");
    set_search_text(&mounted, "kahn");
    assert_eq!(mounted.query_all(".review-card"), 1);
    set_search_text(&mounted, "");
    assert_eq!(mounted.query_all(".review-card"), 2);
}

#[wasm_bindgen_test]
fn crossing_bound_is_rejected_with_one_notification() {
    let errors = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = errors.clone();
    let on_error = Callback::new(move |message: String| sink.borrow_mut().push(message));

    let (mounted, _set_reviews) = mount_display(None, noop_delete(), on_error);

    // rating is the third metric row; max 2 then min 4 must be rejected.
    change_select(&mounted, ".metric-range:nth-child(3) select.max-bound", "2");
    assert_eq!(mounted.query_all(".review-card"), 1);

    change_select(&mounted, ".metric-range:nth-child(3) select.min-bound", "4");
    assert_eq!(errors.borrow().len(), 1);
    assert_eq!(
        errors.borrow()[0],
        "Cannot set minimum rating greater than maximum rating"
    );
    // The rejected candidate left the filter output alone.
    assert_eq!(mounted.query_all(".review-card"), 1);
}

#[wasm_bindgen_test]
fn delete_button_hands_out_the_review_identity() {
    let captured = Rc::new(RefCell::new(None::<DeleteRequest>));
    let sink = captured.clone();
    let on_delete = Callback::new(move |request: DeleteRequest| {
        *sink.borrow_mut() = Some(request);
    });

    let (mounted, _set_reviews) = mount_display(None, on_delete, noop_error());

    let button = mounted
        .query(".delete-review-button")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    button.click();

    let request = captured.borrow().clone().expect("delete callback not hit");
    assert_eq!(request.id, "r1");
    assert_eq!(request.professor, "Kahn");
    assert_eq!(request.course_id, "CS112");
}
