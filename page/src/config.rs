use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::icon::IconName;

// site configuration
//
// the copy around the static content: branding, hero text, stats, contact channels.
// every field has a default matching the shipped page, so a partial (or empty)
// document is valid
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,

    // tracing level name, e.g. "debug" or "INFO"
    pub log_level: String,

    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
    pub footer: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HeroConfig {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub stats: Vec<HeroStat>,
}

// stats are rendered in order, cycling through the primary/secondary/accent colors
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AboutConfig {
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub subtitle: String,
    pub channels: Vec<ContactChannel>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ContactChannel {
    pub icon: IconName,
    pub label: String,
    pub value: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand: String::from("Designer"),
            log_level: String::from("info"),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            contact: ContactConfig::default(),
            footer: String::from("© 2024 Designer Portfolio. Все права защищены."),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        let stat = |value: &str, label: &str| HeroStat {
            value: value.to_owned(),
            label: label.to_owned(),
        };

        HeroConfig {
            badge: String::from("Креативный дизайнер"),
            title: String::from("Создаю дизайн, который"),
            highlight: String::from("вдохновляет"),
            subtitle: String::from(
                "Профессиональный дизайн для вашего бренда: от логотипов до полного оформления проектов",
            ),
            stats: vec![
                stat("150+", "Проектов"),
                stat("5+", "Лет опыта"),
                stat("98%", "Довольных клиентов"),
            ],
        }
    }
}

impl Default for AboutConfig {
    fn default() -> Self {
        AboutConfig {
            paragraphs: vec![
                String::from(
                    "Привет! Я профессиональный дизайнер с более чем 5-летним опытом создания визуальных решений для различных брендов и проектов.",
                ),
                String::from(
                    "Моя специализация включает разработку логотипов, UI/UX дизайн, создание брендинга и иллюстраций. Я работаю с современными инструментами и следую актуальным трендам в дизайне.",
                ),
            ],
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        let channel = |icon: IconName, label: &str, value: &str| ContactChannel {
            icon,
            label: label.to_owned(),
            value: value.to_owned(),
        };

        ContactConfig {
            title: String::from("Давайте работать вместе"),
            subtitle: String::from("Готов обсудить ваш проект и воплотить ваши идеи в жизнь"),
            channels: vec![
                channel(IconName::Mail, "Email", "designer@example.com"),
                channel(IconName::Phone, "Телефон", "+7 (999) 123-45-67"),
                channel(IconName::MessageCircle, "Telegram", "@designer"),
            ],
        }
    }
}

impl SiteConfig {
    pub fn log_level(&self) -> anyhow::Result<Level> {
        Level::from_str(&self.log_level)
            .with_context(|| format!("invalid log level: {}", self.log_level))
    }
}

// the site table is nested under [site] so the file can grow other tables later
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlSiteFile {
    #[serde(default)]
    site: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_site_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlSiteFile = toml::from_str(doc).context("failed to parse site config")?;

    // reject a bad level here rather than when the logger is installed
    data.site.log_level()?;

    debug!("successfully parsed site config");
    Ok(data.site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_site_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override() {
        let doc = r#"
            [site]
            brand = "Studio"

            [site.hero]
            badge = "Иллюстратор"
        "#;

        let config = parse_site_config(doc).unwrap();

        assert_eq!(config.brand, "Studio");
        assert_eq!(config.hero.badge, "Иллюстратор");
        assert_eq!(config.hero.highlight, "вдохновляет");
        assert_eq!(config.hero.stats.len(), 3);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn contact_channels_use_icon_names() {
        let doc = r#"
            [[site.contact.channels]]
            icon = "Mail"
            label = "Email"
            value = "hello@example.com"
        "#;

        let config = parse_site_config(doc).unwrap();

        assert_eq!(config.contact.channels.len(), 1);
        assert_eq!(config.contact.channels[0].icon, IconName::Mail);
        assert_eq!(config.contact.title, "Давайте работать вместе");
    }

    #[test]
    fn unknown_icon_keeps_the_rest_of_the_config() {
        let doc = r#"
            [site]
            brand = "Studio"

            [[site.contact.channels]]
            icon = "Instagram"
            label = "Instagram"
            value = "@studio"

            [[site.contact.channels]]
            icon = "Mail"
            label = "Email"
            value = "hello@example.com"
        "#;

        let config = parse_site_config(doc).unwrap();
        let icons: Vec<IconName> = config.contact.channels.iter().map(|c| c.icon).collect();

        assert_eq!(config.brand, "Studio");
        assert_eq!(icons, vec![IconName::Unknown, IconName::Mail]);
        assert_eq!(config.contact.channels[0].value, "@studio");
    }

    #[test]
    fn bad_log_level_is_an_error() {
        assert!(parse_site_config("[site]\nlog_level = \"loud\"").is_err());
    }

    #[test]
    fn log_levels() {
        let mut config = SiteConfig::default();
        assert_eq!(config.log_level().unwrap(), Level::INFO);

        config.log_level = String::from("DEBUG");
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn default_copy() {
        let config = SiteConfig::default();
        let values: Vec<&str> = config.contact.channels.iter().map(|c| c.value.as_str()).collect();

        assert_eq!(config.brand, "Designer");
        assert_eq!(values, vec!["designer@example.com", "+7 (999) 123-45-67", "@designer"]);
        assert_eq!(config.about.paragraphs.len(), 2);
    }
}
