use super::emit_click;
use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class_name(self) -> &'static str {
        match self {
            ButtonType::Primary => "button primary",
            ButtonType::Secondary => "button secondary",
        }
    }
}

/// Plain button. Without `on_click` it renders but does nothing.
#[component]
pub fn button(
    #[prop(optional)] button_type: Option<ButtonType>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = button_type.unwrap_or_default().class_name();
    view! {
        <button class=class on:click=move |_| emit_click(on_click)>
            {children()}
        </button>
    }
}
