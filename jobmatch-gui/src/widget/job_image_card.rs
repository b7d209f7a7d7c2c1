use super::Card;
use jobmatch_data::JobImagePreview;
use leptos::*;

pub const IMAGE_PROMPT: &str = "이미지를 추가하세요";

/// Blurred preview of a posting image, with a star when the owner marked
/// it as favorite.
#[component]
pub fn job_image_card(
    preview: JobImagePreview,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let body = match preview.image_url() {
        Some(url) => view! {
            <img
                class="job-image-card__image job-image-card__image--blurred"
                src=url.to_string()
                alt="공고 미리보기"
                style="display: block; width: 100%; height: 180px; object-fit: cover; filter: blur(4px);"
            />
        }
        .into_view(),
        None => view! {
            <div
                class="job-image-card__placeholder"
                style="height: 180px; display: flex; align-items: center; justify-content: center; color: #999;"
            >
                {IMAGE_PROMPT}
            </div>
        }
        .into_view(),
    };
    let badge = preview.show_badge().then(|| {
        view! {
            <span
                class="favorite-badge"
                style="position: absolute; top: 8px; right: 8px; color: #facc15; font-size: 24px;"
            >
                "★"
            </span>
        }
    });
    view! {
        <Card class="job-image-card" on_click>
            {body}
            {badge}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::render_html;

    fn preview(image: Option<&str>, is_favorite: bool) -> JobImagePreview {
        JobImagePreview {
            image: image.map(str::to_string),
            is_favorite,
        }
    }

    #[test]
    fn image_is_blurred() {
        let preview = preview(Some("http://x/y.png"), false);
        let html = render_html(move || view! { <JobImageCard preview/> });
        assert!(html.contains("job-image-card__image--blurred"));
        assert!(html.contains("blur("));
        assert!(!html.contains(IMAGE_PROMPT));
    }

    #[test]
    fn missing_image_shows_prompt() {
        let preview = preview(None, false);
        let html = render_html(move || view! { <JobImageCard preview/> });
        assert!(html.contains(IMAGE_PROMPT));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn badge_depends_only_on_favorite() {
        for image in [None, Some("http://x/y.png")] {
            let favorite = preview(image, true);
            let html = render_html(move || view! { <JobImageCard preview=favorite/> });
            assert!(html.contains("favorite-badge"));

            let plain = preview(image, false);
            let html = render_html(move || view! { <JobImageCard preview=plain/> });
            assert!(!html.contains("favorite-badge"));
        }
    }
}
