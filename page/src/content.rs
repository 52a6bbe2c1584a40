use crate::icon::IconName;

// static content
//
// the records shown on the page are compiled in.  nothing here is derived or fetched,
// so the accessors are total and there is no loading or error state

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioCategory {
    // rendering key only
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconName,
    pub count: u32,
    pub gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

macro_rules! category {
    ($id:literal, $title:literal, $icon:ident, $count:literal, $start:literal => $end:literal) => {
        PortfolioCategory {
            id: $id,
            title: $title,
            icon: IconName::$icon,
            count: $count,
            gradient: Gradient {
                start: $start,
                end: $end,
            },
        }
    };
}

const PORTFOLIO_CATEGORIES: [PortfolioCategory; 8] = [
    category!("logos", "Логотипы", Hexagon, 12, "purple-500" => "pink-500"),
    category!("avatars", "Аватарки", User, 8, "blue-500" => "cyan-500"),
    category!("layouts", "Полное оформление", Layout, 15, "orange-500" => "red-500"),
    category!("icons", "Иконки", Sparkles, 24, "green-500" => "emerald-500"),
    category!("mockups", "Макеты", Smartphone, 10, "violet-500" => "purple-500"),
    category!("buttons", "Кнопки для игр", Gamepad2, 18, "pink-500" => "rose-500"),
    category!("cards", "Карточки товаров", ShoppingBag, 14, "amber-500" => "orange-500"),
    category!("banners", "Баннеры", Image, 20, "indigo-500" => "blue-500"),
];

const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        icon: IconName::Palette,
        title: "Брендинг",
        description: "Создание фирменного стиля и логотипов",
    },
    ServiceOffering {
        icon: IconName::Layout,
        title: "UI/UX дизайн",
        description: "Разработка интерфейсов сайтов и приложений",
    },
    ServiceOffering {
        icon: IconName::Smartphone,
        title: "Моушн-дизайн",
        description: "Анимации и видеоролики",
    },
    ServiceOffering {
        icon: IconName::Package,
        title: "Упаковка",
        description: "Дизайн упаковки и этикеток",
    },
];

const TOOLS: [&str; 5] = [
    "Figma",
    "Adobe Illustrator",
    "Photoshop",
    "After Effects",
    "Blender",
];

pub fn portfolio_categories() -> &'static [PortfolioCategory] {
    &PORTFOLIO_CATEGORIES
}

pub fn services() -> &'static [ServiceOffering] {
    &SERVICES
}

pub fn tools() -> &'static [&'static str] {
    &TOOLS
}

// palette tokens used by the gradients, resolved to the hex values of the
// 500 shade so the front end can draw them without a utility-class framework
pub fn color_token(token: &str) -> Option<&'static str> {
    let hex = match token {
        "amber-500" => "#F59E0B",
        "blue-500" => "#3B82F6",
        "cyan-500" => "#06B6D4",
        "emerald-500" => "#10B981",
        "green-500" => "#22C55E",
        "indigo-500" => "#6366F1",
        "orange-500" => "#F97316",
        "pink-500" => "#EC4899",
        "purple-500" => "#A855F7",
        "red-500" => "#EF4444",
        "rose-500" => "#F43F5E",
        "violet-500" => "#8B5CF6",
        _ => return None,
    };
    Some(hex)
}

impl Gradient {
    // css background for the decorative fill, or None if a token is unknown
    pub fn to_css(self) -> Option<String> {
        let start = color_token(self.start)?;
        let end = color_token(self.end)?;
        Some(format!("linear-gradient(135deg, {start}, {end})"))
    }
}
