use super::{Card, CardContent, CardTitle, EMPTY_LIST_MESSAGE};
use jobmatch_data::Recommendation;
use leptos::*;

#[component]
pub fn ai_recommendation(recommendations: Vec<Recommendation>) -> impl IntoView {
    let empty = recommendations.is_empty().then(|| {
        view! { <p class="recommendation-empty" style="color: #999;">{EMPTY_LIST_MESSAGE}</p> }
    });
    let blocks = recommendations
        .into_iter()
        .map(|Recommendation { title, content }| {
            view! {
                <div class="recommendation-item" style="margin-bottom: 12px;">
                    <strong class="recommendation-item__title">{title}</strong>
                    <p class="recommendation-item__content" style="margin: 4px 0 0;">{content}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <Card class="recommendation-panel">
            <CardContent>
                <CardTitle title="AI 추천"/>
                <div class="recommendation-list">{blocks}</div>
                {empty}
            </CardContent>
        </Card>
    }
}
