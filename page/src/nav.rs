use crate::section::Section;

// one entry in the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
    pub emphasized: bool,
}

impl NavLink {
    pub fn class(&self) -> &'static str {
        if self.emphasized {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

// the navigation bar lists every section in page order, emphasizing exactly one
pub fn nav_links(active: Section) -> Vec<NavLink> {
    Section::ALL
        .into_iter()
        .map(|section| NavLink {
            section,
            label: section.label(),
            emphasized: section == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_emphasized() {
        for active in Section::ALL {
            let links = nav_links(active);
            let emphasized: Vec<&NavLink> = links.iter().filter(|l| l.emphasized).collect();

            assert_eq!(links.len(), 5);
            assert_eq!(emphasized.len(), 1);
            assert_eq!(emphasized[0].section, active);
        }
    }

    #[test]
    fn link_order_and_classes() {
        let links = nav_links(Section::Services);
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();

        assert_eq!(labels, vec!["Главная", "Портфолио", "Услуги", "О мне", "Контакты"]);
        assert_eq!(links[2].class(), "nav-link active");
        assert_eq!(links[0].class(), "nav-link");
    }
}
