use std::fmt;

use serde::{Deserialize, Serialize};

// symbolic icon names
//
// the names match the ones the glyph set is published under, so that content
// records and configuration can refer to icons by their usual string name.  a name
// outside the table deserializes to Unknown, which renders as an empty glyph
macro_rules! icon_names {
    ($($variant:ident),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum IconName {
            $($variant,)+
            #[serde(other)]
            Unknown,
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[$(IconName::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(IconName::$variant => stringify!($variant),)+
                    IconName::Unknown => "Unknown",
                }
            }
        }
    };
}

icon_names! {
    ArrowRight,
    ExternalLink,
    Gamepad2,
    Hexagon,
    Image,
    Layout,
    Mail,
    MessageCircle,
    Moon,
    Package,
    Palette,
    Phone,
    Send,
    ShoppingBag,
    Smartphone,
    Sparkles,
    Sun,
    User,
}

impl IconName {
    // only names from the table resolve; Unknown is never returned here
    pub fn from_name(name: &str) -> Option<IconName> {
        IconName::ALL.iter().copied().find(|icon| icon.name() == name)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_name(icon.name()), Some(*icon));
        }
        assert_eq!(IconName::from_name("Gamepad2"), Some(IconName::Gamepad2));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(IconName::from_name("Unicorn"), None);
        assert_eq!(IconName::from_name("moon"), None);
        assert_eq!(IconName::from_name("Unknown"), None);
        assert!(!IconName::ALL.contains(&IconName::Unknown));
    }
}
