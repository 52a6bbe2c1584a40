use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// Section
//
// the named, anchorable regions of the page.  the set is closed, so every value
// has a rendered anchor whose element id is Section::id()
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    Services,
    About,
    Contact,
}

impl Section {
    // navigation order
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Portfolio,
        Section::Services,
        Section::About,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Portfolio => "Портфолио",
            Section::Services => "Услуги",
            Section::About => "О мне",
            Section::Contact => "Контакты",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section anchor: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert!("pricing".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn ids_and_labels_are_distinct() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        let labels: HashSet<_> = Section::ALL.iter().map(|s| s.label()).collect();

        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(labels.len(), Section::ALL.len());
    }

    #[test]
    fn services_label() {
        assert_eq!(Section::Services.label(), "Услуги");
        assert_eq!(Section::Services.to_string(), "services");
    }
}
