use super::emit_click;
use leptos::*;

#[component]
pub fn card(
    #[prop(into)] class: String,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = "
        position: relative;
        width: 300px;
        border: 1px solid #ddd;
        border-radius: 8px;
        overflow: hidden;
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
        margin: 16px;
    ";
    let cursor = on_click.map(|_| "cursor: pointer;").unwrap_or_default();

    view! {
        <div
            class=format!("card {class}")
            style=format!("{style}{cursor}")
            on:click=move |_| emit_click(on_click)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn card_content(children: Children) -> impl IntoView {
    let style = "
        padding: 16px;
        text-align: left;
    ";

    view! {
        <div class="card__content" style={style}>
            {children()}
        </div>
    }
}

#[component]
pub fn card_title(#[prop(into)] title: String) -> impl IntoView {
    let style = "
        font-size: 20px;
        text-align: left;
        margin-bottom: 8px;
    ";

    view! {
        <h2 class="card__title" style={style}>{title}</h2>
    }
}

#[component]
pub fn card_footer(children: Children) -> impl IntoView {
    let style = "
        padding: 12px 16px;
        border-top: 1px solid #eee;
        background: #fafafa;
    ";

    view! {
        <div class="card__footer" style={style}>
            {children()}
        </div>
    }
}
