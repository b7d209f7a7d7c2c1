use crate::widget::*;
use jobmatch_data::*;
use leptos::*;

const HOME_MENU: &str = "home";

/// Owns the state the widgets only display: the selected menu entry and the
/// favorite flag of the preview card.
#[component]
pub fn dashboard() -> impl IntoView {
    let (active_menu, set_active_menu) = create_signal(HOME_MENU.to_string());
    let (is_favorite, set_is_favorite) = create_signal(false);

    let on_menu_click = Callback::new(move |id: String| set_active_menu.set(id));
    let on_logo_click = Callback::new(move |_: ()| set_active_menu.set(HOME_MENU.to_string()));
    let toggle_favorite = Callback::new(move |_: ()| {
        set_is_favorite.update(|favorite| *favorite = !*favorite);
        log::info!("Favorite toggled");
    });
    let open_job = Callback::new(|_: ()| log::info!("Job card opened"));

    let section_title = move || {
        active_menu.with(|active| find_menu(active).map(|item| item.label).unwrap_or_default())
    };
    let jobs = sample_jobs()
        .into_iter()
        .map(|job| view! { <JobCard job on_click=open_job/> })
        .collect_view();
    let preview = move || {
        let preview = JobImagePreview {
            image: Some("/pkg/preview.png".to_string()),
            is_favorite: is_favorite.get(),
        };
        view! { <JobImageCard preview on_click=toggle_favorite/> }
    };
    let favorite_label = move || {
        if is_favorite.get() {
            "즐겨찾기 해제"
        } else {
            "즐겨찾기"
        }
    };
    let MatchReport {
        suitability_info,
        strengths,
        weaknesses,
        recommendations,
    } = sample_report();

    view! {
        <div class="dashboard" style="display: flex; gap: 24px;">
            <NavSidebar active_menu on_menu_click on_logo_click/>
            <section class="dashboard__content" style="flex: 1;">
                <h1>{section_title}</h1>
                <div class="dashboard__jobs" style="display: flex; flex-wrap: wrap;">
                    {jobs}
                    {preview}
                </div>
                <Button button_type=ButtonType::Secondary on_click=toggle_favorite>
                    {favorite_label}
                </Button>
                <div class="dashboard__analysis" style="display: flex; flex-wrap: wrap;">
                    <MatchingScoreCard suitability=suitability_info/>
                    <StrengthAnalysis strengths/>
                    <WeaknessAnalysis weaknesses/>
                    <AiRecommendation recommendations/>
                </div>
            </section>
            <PromoSidebar/>
        </div>
    }
}

fn sample_jobs() -> Vec<JobSummary> {
    vec![
        JobSummary {
            title: Some("백엔드 개발자".to_string()),
            company: Some("ACME".to_string()),
            location: Some("서울".to_string()),
            salary: Some("4000만원".to_string()),
            image: None,
        },
        JobSummary {
            title: Some("데이터 엔지니어".to_string()),
            company: Some("Initech".to_string()),
            location: Some("판교".to_string()),
            salary: None,
            image: None,
        },
        JobSummary::default(),
    ]
}

fn sample_report() -> MatchReport {
    MatchReport {
        suitability_info: SuitabilityInfo {
            suitable: true,
            message: "적합".to_string(),
            emoji: "😊".to_string(),
        },
        strengths: vec![
            Strength {
                text: "Rust와 비동기 서버 개발 경험".to_string(),
            },
            Strength {
                text: "대규모 트래픽 운영 경험".to_string(),
            },
        ],
        weaknesses: vec![Weakness {
            text: "클라우드 인프라 경험 부족".to_string(),
        }],
        recommendations: vec![Recommendation {
            title: "포트폴리오 보강".to_string(),
            content: "운영 경험을 수치로 정리해 보세요.".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_starts_on_home() {
        let html = render_html(|| view! { <Dashboard/> });
        assert_eq!(html.matches("nav-item--active").count(), 1);
        let active = html.split("<li").find(|entry| entry.contains("nav-item--active"));
        assert!(active.is_some_and(|entry| entry.contains("홈")));
        assert!(!html.contains("favorite-badge"));
    }

    #[test]
    fn dashboard_lays_out_every_panel() {
        let html = render_html(|| view! { <Dashboard/> });
        for marker in [
            "nav-sidebar",
            "promo-sidebar",
            "job-card--text",
            "job-image-card",
            "score-card--favorable",
            "analysis-panel--strength",
            "analysis-panel--weakness",
            "recommendation-panel",
        ] {
            assert!(html.contains(marker), "missing {marker}");
        }
        assert!(html.contains("공고 제목"));
    }
}
