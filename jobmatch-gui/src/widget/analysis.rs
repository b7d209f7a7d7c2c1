use super::{Card, CardContent, CardTitle, EMPTY_LIST_MESSAGE};
use jobmatch_data::{Strength, Weakness};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisKind {
    Strength,
    Weakness,
}

impl AnalysisKind {
    fn title(self) -> &'static str {
        match self {
            AnalysisKind::Strength => "강점 분석",
            AnalysisKind::Weakness => "보완점 분석",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            AnalysisKind::Strength => "analysis-panel analysis-panel--strength",
            AnalysisKind::Weakness => "analysis-panel analysis-panel--weakness",
        }
    }

    // (background, accent)
    fn colors(self) -> (&'static str, &'static str) {
        match self {
            AnalysisKind::Strength => ("#f0fdf4", "#16a34a"),
            AnalysisKind::Weakness => ("#fefce8", "#ca8a04"),
        }
    }
}

#[component]
pub fn strength_analysis(strengths: Vec<Strength>) -> impl IntoView {
    let items = strengths.into_iter().map(|strength| strength.text).collect();
    view! { <AnalysisPanel kind=AnalysisKind::Strength items/> }
}

#[component]
pub fn weakness_analysis(weaknesses: Vec<Weakness>) -> impl IntoView {
    let items = weaknesses.into_iter().map(|weakness| weakness.text).collect();
    view! { <AnalysisPanel kind=AnalysisKind::Weakness items/> }
}

#[component]
fn analysis_panel(kind: AnalysisKind, items: Vec<String>) -> impl IntoView {
    let (background, accent) = kind.colors();
    let empty = items.is_empty().then(|| {
        view! { <p class="analysis-empty" style="color: #999;">{EMPTY_LIST_MESSAGE}</p> }
    });
    let rows = items
        .into_iter()
        .map(|text| view! { <li class="analysis-item">{text}</li> })
        .collect_view();

    view! {
        <Card class=kind.class_name()>
            <CardContent>
                <CardTitle title=kind.title()/>
                <div style=format!("background: {background}; border-left: 4px solid {accent}; padding: 12px;")>
                    <ul class="analysis-list">{rows}</ul>
                    {empty}
                </div>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::render_html;

    fn strengths(texts: &[&str]) -> Vec<Strength> {
        texts
            .iter()
            .map(|text| Strength {
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn strengths_keep_order_and_count() {
        let strengths = strengths(&["Rust 실무 경험", "오픈소스 기여", "Rust 실무 경험"]);
        let html = render_html(move || view! { <StrengthAnalysis strengths/> });
        assert!(html.contains("analysis-panel--strength"));
        assert!(html.contains("강점 분석"));
        assert_eq!(html.matches("class=\"analysis-item\"").count(), 3);
        let first = html.find("Rust 실무 경험").unwrap();
        let second = html.find("오픈소스 기여").unwrap();
        assert!(first < second);
        assert!(html[second..].contains("Rust 실무 경험"));
        assert!(!html.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn weaknesses_use_their_own_theme() {
        let weaknesses = vec![
            Weakness {
                text: "클라우드 경험 부족".to_string(),
            },
            Weakness {
                text: "리더십 경험 부족".to_string(),
            },
        ];
        let html = render_html(move || view! { <WeaknessAnalysis weaknesses/> });
        assert!(html.contains("analysis-panel--weakness"));
        assert!(html.contains("보완점 분석"));
        assert_eq!(html.matches("class=\"analysis-item\"").count(), 2);
        assert!(html.find("클라우드").unwrap() < html.find("리더십").unwrap());
    }

    #[test]
    fn empty_list_keeps_panel_and_shows_message() {
        let html = render_html(|| view! { <StrengthAnalysis strengths=Vec::new()/> });
        assert!(html.contains("강점 분석"));
        assert!(html.contains("analysis-list"));
        assert_eq!(html.matches("class=\"analysis-item\"").count(), 0);
        assert!(html.contains(EMPTY_LIST_MESSAGE));
    }
}
