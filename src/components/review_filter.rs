use leptos::*;

use crate::models::filter::{FilterBounds, Metric, RangeBound};

/// Min/max selectors for each score dimension. Candidates go back to the
/// owner through the callbacks; rejected candidates never reach the bounds
/// signal, so the committed selection is whatever the signal last held.
#[component]
pub fn ReviewFilter(
    bounds: ReadSignal<FilterBounds>,
    on_set_min: Callback<(Metric, RangeBound)>,
    on_set_max: Callback<(Metric, RangeBound)>,
) -> impl IntoView {
    let score_options = || {
        (1..=5u8)
            .map(|value| view! { <option value=value.to_string()>{value.to_string()}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="review-filter">
            {Metric::ALL.iter().map(|&metric| view! {
                <div class="metric-range">
                    <span class="metric-label">{metric.name()}</span>
                    <select
                        class="min-bound"
                        prop:value=move || bounds.get().min(metric).label.clone()
                        on:change=move |e| {
                            let value = event_target_value(&e).parse::<u8>().unwrap_or(1);
                            on_set_min.call((metric, RangeBound::new(value)));
                        }
                    >
                        {score_options()}
                    </select>
                    <span>{ " to " }</span>
                    <select
                        class="max-bound"
                        prop:value=move || bounds.get().max(metric).label.clone()
                        on:change=move |e| {
                            let value = event_target_value(&e).parse::<u8>().unwrap_or(5);
                            on_set_max.call((metric, RangeBound::new(value)));
                        }
                    >
                        {score_options()}
                    </select>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
