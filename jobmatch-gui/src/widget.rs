use leptos::*;

mod analysis;
mod button;
mod card;
mod job_card;
mod job_image_card;
mod nav_sidebar;
mod promo_sidebar;
mod recommendation;
mod score_card;

pub use analysis::*;
pub use button::*;
pub use card::*;
pub use job_card::*;
pub use job_image_card::*;
pub use nav_sidebar::*;
pub use promo_sidebar::*;
pub use recommendation::*;
pub use score_card::*;

/// Shown by the list panels when there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "표시할 항목이 없습니다";

/// Forwards a click to the owner of the component, if it registered one.
pub fn emit_click(on_click: Option<Callback<()>>) {
    match on_click {
        Some(on_click) => on_click.call(()),
        None => log::debug!("Click ignored, no handler registered"),
    }
}

#[cfg(test)]
pub(crate) fn render_html<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}
