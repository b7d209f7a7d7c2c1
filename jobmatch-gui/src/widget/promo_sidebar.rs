use super::Button;
use leptos::*;

#[component]
pub fn promo_sidebar() -> impl IntoView {
    let style = "
        width: 260px;
        padding: 24px;
        border-radius: 12px;
        background: linear-gradient(160deg, #eef2ff, #f5f3ff);
        text-align: center;
    ";

    view! {
        <aside class="promo-sidebar" style=style>
            <p class="promo-sidebar__emoji" style="font-size: 40px; margin: 0;">"🚀"</p>
            <h3 class="promo-sidebar__title">"AI가 찾아주는 나만의 공고"</h3>
            <p class="promo-sidebar__body">
                "이력서를 등록하면 AI가 나에게 꼭 맞는 공고를 분석해 드려요."
            </p>
            <Button>"이력서 등록하기"</Button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::render_html;

    #[test]
    fn renders_fixed_content_with_one_button() {
        let html = render_html(|| view! { <PromoSidebar/> });
        assert!(html.contains("AI가 찾아주는 나만의 공고"));
        assert!(html.contains("이력서 등록하기"));
        assert_eq!(html.matches("<button").count(), 1);
    }
}
