use page::{
    config::{SiteConfig, parse_site_config},
    icon::IconName,
};

// the file the web front end embeds
const SHIPPED: &str = include_str!("../../webapp/site.toml");

#[test]
fn shipped_config_parses() {
    let config = parse_site_config(SHIPPED).unwrap();
    let icons: Vec<IconName> = config.contact.channels.iter().map(|c| c.icon).collect();

    assert_eq!(config.brand, "Designer");
    assert_eq!(icons, vec![IconName::Mail, IconName::Phone, IconName::MessageCircle]);
}

#[test]
fn shipped_config_matches_defaults() {
    assert_eq!(parse_site_config(SHIPPED).unwrap(), SiteConfig::default());
}

#[test]
fn malformed_document_is_an_error() {
    assert!(parse_site_config("[site\nbrand = ").is_err());
    assert!(parse_site_config("[site]\nbrand = 7").is_err());
}
