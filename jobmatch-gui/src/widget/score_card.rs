use super::{Card, CardContent, CardTitle};
use jobmatch_data::SuitabilityInfo;
use leptos::*;

#[component]
pub fn matching_score_card(suitability: SuitabilityInfo) -> impl IntoView {
    let theme = suitability.theme();
    let headline = suitability.headline();
    let style = format!(
        "background: {}; color: {}; border-radius: 8px; padding: 24px; text-align: center;",
        theme.background(),
        theme.accent()
    );

    view! {
        <Card class=format!("score-card {}", theme.class_name())>
            <CardContent>
                <CardTitle title="AI 매칭 결과"/>
                <div class="score-card__body" style=style>
                    <div class="score-card__emoji" style="font-size: 72px; line-height: 1;">
                        {suitability.emoji}
                    </div>
                    <p class="score-card__message" style="font-size: 18px; font-weight: 700;">
                        {headline}
                    </p>
                </div>
            </CardContent>
        </Card>
    }
}
