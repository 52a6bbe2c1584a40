use page::{
    MemoryDocument, PageController, Section, Theme,
    content::portfolio_categories,
    document::ScrollBehavior,
    icon::IconName,
    theme::DARK_MARKER_CLASS,
};

fn fresh_page() -> PageController<MemoryDocument> {
    PageController::new(MemoryDocument::with_sections())
}

fn emphasized(page: &PageController<MemoryDocument>) -> Vec<&'static str> {
    page.snapshot()
        .nav_links()
        .into_iter()
        .filter(|link| link.emphasized)
        .map(|link| link.label)
        .collect()
}

#[test]
fn initial_state() {
    let page = fresh_page();

    assert_eq!(page.theme(), Theme::Light);
    assert_eq!(page.active_section(), Section::Home);
    assert!(!page.document().has_root_class(DARK_MARKER_CLASS));
    assert_eq!(emphasized(&page), vec!["Главная"]);
}

#[test]
fn toggle_once_goes_dark() {
    let mut page = fresh_page();
    assert_eq!(page.theme().toggle_icon(), IconName::Moon);

    page.toggle_theme();

    assert_eq!(page.theme(), Theme::Dark);
    assert!(page.document().has_root_class(DARK_MARKER_CLASS));
    assert_eq!(page.theme().toggle_icon(), IconName::Sun);
}

#[test]
fn navigate_to_services() {
    let mut page = fresh_page();

    page.navigate_to(Section::Services);

    let scroll = page.document().last_scroll().unwrap();
    assert_eq!(page.active_section(), Section::Services);
    assert_eq!(scroll.anchor, "services");
    assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
    assert_eq!(emphasized(&page), vec!["Услуги"]);
}

#[test]
fn portfolio_records() {
    let counts: Vec<u32> = portfolio_categories().iter().map(|c| c.count).collect();
    let mut ids: Vec<&str> = portfolio_categories().iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();

    assert_eq!(counts, vec![12, 8, 15, 24, 10, 18, 14, 20]);
    assert_eq!(ids.len(), 8);
}

#[test]
fn navigation_survives_theme_toggle() {
    let mut page = fresh_page();

    page.navigate_to(Section::Contact);
    page.toggle_theme();

    assert_eq!(page.active_section(), Section::Contact);
    assert_eq!(page.theme(), Theme::Dark);
}

#[test]
fn last_navigation_wins() {
    let mut page = fresh_page();
    let sequence = [
        Section::About,
        Section::Portfolio,
        Section::Portfolio,
        Section::Home,
        Section::Contact,
        Section::Services,
    ];

    for section in sequence {
        page.navigate_to(section);
        assert_eq!(page.active_section(), section);
        assert_eq!(emphasized(&page), vec![section.label()]);
    }
    assert_eq!(page.document().scrolls().len(), sequence.len());
}

#[test]
fn marker_matches_theme_after_mixed_sequence() {
    let mut page = fresh_page();

    for step in 0..10 {
        if step % 3 == 0 {
            page.navigate_to(Section::ALL[step % Section::ALL.len()]);
        } else {
            page.toggle_theme();
        }
        assert_eq!(
            page.document().has_root_class(DARK_MARKER_CLASS),
            page.theme() == Theme::Dark
        );
    }
}

#[test]
fn anchor_strings_parse_before_navigation() {
    let mut page = fresh_page();

    match "about".parse::<Section>() {
        Ok(section) => page.navigate_to(section),
        Err(err) => panic!("{err}"),
    }
    assert!("blog".parse::<Section>().is_err());

    assert_eq!(page.active_section(), Section::About);
}
