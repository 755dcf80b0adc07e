//! End-to-end behaviour of the landing page through the public API.

use landing_core::{
    back_to_top_visible, carousel_step, scroll_progress, Catalog, ChipSet, CounterRole,
    CounterState, LandingConfig, LeadForm, ListingDetails, ModalState, TagFilter,
};

const CATALOG: &str = r#"[
    {
        "id": "studio-cambui",
        "title": "Studio no Cambuí",
        "neighborhood": "Cambuí • Campinas",
        "price": "R$ 289.000",
        "features": "Piscina | 3 quartos | Suíte",
        "tags": "ouro, studio, lazer"
    },
    {
        "id": "apto-guanabara",
        "title": "Apto 2Q Guanabara",
        "price": "R$ 340.000",
        "features": "2 quartos | Vaga coberta",
        "tags": "2q",
        "url": "https://imobiliaria.example/apto-guanabara"
    },
    {
        "id": "loft-centro",
        "title": "Loft Centro",
        "tags": "OURO,studio"
    },
    {
        "id": "apto-taquaral",
        "tags": "1q, lazer"
    }
]"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

#[test]
fn hero_counters_are_derived_from_catalog() {
    let config = LandingConfig::default();
    let stats = catalog().stats(&config.featured_marker);

    assert_eq!(CounterRole::Total.raw_target(&stats), "4");
    assert_eq!(CounterRole::Featured.raw_target(&stats), "2");
}

#[test]
fn derived_counter_animates_to_catalog_size_once() {
    let config = LandingConfig::default();
    let stats = catalog().stats(&config.featured_marker);
    let mut counter = CounterState::new(CounterRole::Total.target(&stats));

    let anim = counter.begin(config.counter_duration_ms).unwrap();
    assert_eq!(anim.value_at(0.0), 0);
    assert_eq!(anim.value_at(config.counter_duration_ms), 4);
    assert!(counter.begin(config.counter_duration_ms).is_none());
}

#[test]
fn clicking_a_chip_activates_exactly_one() {
    let config = LandingConfig::default();
    let mut chips = ChipSet::from_config(&config.chips);

    for index in 0..chips.chips().len() {
        chips.activate(index);
        let active = (0..chips.chips().len()).filter(|&i| chips.is_active(i)).count();
        assert_eq!(active, 1);
        assert!(chips.is_active(index));
    }
}

#[test]
fn all_filter_shows_every_card() {
    assert_eq!(catalog().visibility(&TagFilter::All), vec![true; 4]);
}

#[test]
fn keyword_filter_shows_substring_matches_only() {
    let catalog = catalog();

    assert_eq!(
        catalog.visibility(&TagFilter::parse("Ouro")),
        vec![true, false, true, false]
    );
    assert_eq!(
        catalog.visibility(&TagFilter::parse("lazer")),
        vec![true, false, false, true]
    );
    assert_eq!(catalog.visibility(&TagFilter::parse("cobertura")), vec![false; 4]);
}

#[test]
fn carousel_falls_back_when_filter_hides_everything() {
    let config = LandingConfig::default();
    let visible = catalog().visibility(&TagFilter::parse("cobertura"));
    let first_visible_width = visible.iter().position(|v| *v).map(|_| 300.0);

    assert_eq!(
        carousel_step(first_visible_width, config.fallback_card_width, config.carousel_gap),
        294.0
    );
}

#[test]
fn short_name_is_rejected_and_form_kept() {
    let mut form = LeadForm {
        name: "A".into(),
        phone: "19 98161-1842".into(),
        kind: "studio".into(),
        priority: "preco".into(),
        must: "perto do metrô".into(),
    };
    let before = form.clone();

    let toast = form.submit();

    assert!(toast.is_error());
    assert_eq!(toast.message, "Preencha seu nome direitinho 🙂");
    assert_eq!(form, before);
}

#[test]
fn complete_lead_is_confirmed_and_cleared() {
    let mut form = LeadForm {
        name: "Ana".into(),
        phone: "19 98161-1842".into(),
        kind: "apartamento".into(),
        priority: "localizacao".into(),
        must: "baixo condomínio".into(),
    };

    let toast = form.submit();

    assert!(!toast.is_error());
    assert!(toast.message.starts_with("Perfeito!"));
    assert_eq!(form, LeadForm::default());
}

#[test]
fn modal_lists_features_in_order() {
    let config = LandingConfig::default();
    let catalog = catalog();
    let listing = catalog.get("studio-cambui").unwrap();

    let mut modal = ModalState::default();
    modal.open(ListingDetails::project(listing, &config));

    let details = modal.details().unwrap();
    assert_eq!(details.features, vec!["Piscina", "3 quartos", "Suíte"]);
    assert!(details.featured);
    assert!(!details.official.is_available());
    assert_eq!(details.official.aria_disabled(), "true");
}

#[test]
fn modal_links_official_page_when_declared() {
    let config = LandingConfig::default();
    let catalog = catalog();
    let details = ListingDetails::project(catalog.get("apto-guanabara").unwrap(), &config);

    assert!(details.official.is_available());
    assert_eq!(details.official.href(), "https://imobiliaria.example/apto-guanabara");
    assert_eq!(details.neighborhood, "Cambuí • Campinas");
    assert!(!details.featured);
}

#[test]
fn modal_falls_back_for_bare_listing() {
    let config = LandingConfig::default();
    let catalog = catalog();
    let details = ListingDetails::project(catalog.get("apto-taquaral").unwrap(), &config);

    assert_eq!(details.title, "Imóvel");
    assert_eq!(details.price, "R$ —");
    assert!(details.features.is_empty());
    assert!(details.whatsapp_link.contains("Im%C3%B3vel"));
}

#[test]
fn scroll_affordances_follow_position() {
    let config = LandingConfig::default();
    let (height, viewport) = (4000.0, 900.0);

    assert_eq!(scroll_progress(0.0, height, viewport), 0.0);
    assert_eq!(scroll_progress(height - viewport, height, viewport), 100.0);

    assert!(!back_to_top_visible(0.0, config.back_to_top_threshold));
    assert!(!back_to_top_visible(520.0, config.back_to_top_threshold));
    assert!(back_to_top_visible(521.0, config.back_to_top_threshold));
}
