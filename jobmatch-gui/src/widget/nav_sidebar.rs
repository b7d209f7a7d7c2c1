use super::emit_click;
use jobmatch_data::{MenuItem, MENU_ITEMS};
use leptos::*;

/// Navigation panel. The selection is owned by the caller: clicking an
/// entry only reports its id through `on_menu_click`.
#[component]
pub fn nav_sidebar(
    #[prop(into)] active_menu: MaybeSignal<String>,
    on_menu_click: Callback<String>,
    #[prop(optional)] on_logo_click: Option<Callback<()>>,
) -> impl IntoView {
    let entries = MENU_ITEMS
        .iter()
        .map(|item| {
            let active_menu = active_menu.clone();
            let is_active = Signal::derive(move || active_menu.with(|active| item.is_active(active)));
            view! { <NavEntry item is_active on_menu_click/> }
        })
        .collect_view();
    let style = "
        width: 240px;
        min-height: 100vh;
        padding: 24px 16px;
        border-right: 1px solid #eee;
        background: #fff;
    ";

    view! {
        <nav class="nav-sidebar" style=style>
            <div
                class="nav-sidebar__logo"
                style="font-size: 22px; font-weight: 800; margin-bottom: 32px; cursor: pointer;"
                on:click=move |_| emit_click(on_logo_click)
            >
                "JobMatch"
            </div>
            <ul class="nav-sidebar__menu" style="list-style: none; padding: 0; margin: 0;">
                {entries}
            </ul>
        </nav>
    }
}

#[component]
fn nav_entry(
    item: &'static MenuItem,
    is_active: Signal<bool>,
    on_menu_click: Callback<String>,
) -> impl IntoView {
    let class = move || {
        if is_active.get() {
            "nav-item nav-item--active"
        } else {
            "nav-item"
        }
    };
    let style = move || {
        let base = "display: flex; align-items: center; gap: 12px; padding: 12px; border-radius: 8px; cursor: pointer;";
        if is_active.get() {
            format!("{base} background: #eef2ff; font-weight: 700;")
        } else {
            format!("{base} background: transparent; font-weight: 400;")
        }
    };
    let chevron = move || {
        if is_active.get() {
            "display: inline-block; margin-left: auto; transform: rotate(90deg);"
        } else {
            "display: inline-block; margin-left: auto;"
        }
    };

    view! {
        <li class=class style=style on:click=move |_| emit_menu_click(item, on_menu_click)>
            <span class="nav-item__icon">{item.icon}</span>
            <span class="nav-item__label">{item.label}</span>
            <span class="nav-item__chevron" style=chevron>"›"</span>
        </li>
    }
}

pub fn emit_menu_click(item: &MenuItem, on_menu_click: Callback<String>) {
    log::debug!("Menu selected: {}", item.id);
    on_menu_click.call(item.id.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::render_html;
    use jobmatch_data::find_menu_by_label;
    use std::{cell::RefCell, rc::Rc};

    fn render_with_active(active: &str) -> String {
        let active = active.to_string();
        render_html(move || {
            let on_menu_click = Callback::new(|_: String| {});
            view! { <NavSidebar active_menu=active on_menu_click/> }
        })
    }

    #[test]
    fn renders_every_menu_entry_in_order() {
        let html = render_with_active("home");
        let positions: Vec<_> = MENU_ITEMS
            .iter()
            .map(|item| html.find(item.label).expect("label rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn exactly_the_selected_entry_is_active() {
        for selected in MENU_ITEMS.iter() {
            let html = render_with_active(selected.id);
            let entries: Vec<_> = html.split("<li").skip(1).collect();
            assert_eq!(entries.len(), MENU_ITEMS.len());
            for (item, entry) in MENU_ITEMS.iter().zip(entries) {
                assert!(entry.contains(item.label));
                assert_eq!(
                    entry.contains("nav-item--active"),
                    item.id == selected.id,
                    "entry {} with {} selected",
                    item.id,
                    selected.id
                );
            }
        }
    }

    #[test]
    fn unknown_selection_highlights_nothing() {
        let html = render_with_active("settings");
        assert_eq!(html.matches("nav-item--active").count(), 0);
    }

    #[test]
    fn menu_click_reports_entry_id_once() {
        let runtime = create_runtime();
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let on_menu_click = {
            let clicked = clicked.clone();
            Callback::new(move |id: String| clicked.borrow_mut().push(id))
        };
        let item = find_menu_by_label("지원 내역").unwrap();
        emit_menu_click(item, on_menu_click);
        assert_eq!(*clicked.borrow(), vec!["application".to_string()]);
        runtime.dispose();
    }
}
