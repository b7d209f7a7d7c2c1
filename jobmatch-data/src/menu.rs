#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    pub fn is_active(&self, active_menu: &str) -> bool {
        self.id == active_menu
    }
}

/// Navigation entries in display order. Ids are unique.
pub static MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        id: "home",
        label: "홈",
        icon: "🏠",
    },
    MenuItem {
        id: "resume",
        label: "이력서",
        icon: "📄",
    },
    MenuItem {
        id: "application",
        label: "지원 내역",
        icon: "📋",
    },
    MenuItem {
        id: "offer",
        label: "받은 제안",
        icon: "📩",
    },
    MenuItem {
        id: "interview",
        label: "모의 면접",
        icon: "🎤",
    },
    MenuItem {
        id: "credit",
        label: "크레딧",
        icon: "💳",
    },
];

pub fn find_menu(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

pub fn find_menu_by_label(label: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.label == label)
}
