//! Integration tests for named template lookup through the registry

use html_stamp::{MissingKeyMode, State, Template, TemplateRegistry, TemplateConfig};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"
    <html><body>
        <main>
            <h1>Component host page</h1>
        </main>
        <template data-tmpl="card">
            <article><h2 data-text="title"></h2><ul data-slot></ul></article>
        </template>
        <template data-tmpl="item">
            <li data-text="$ctx.label"></li>
        </template>
    </body></html>
"#;

#[test]
fn test_registry_lookup_matches_direct_construction() {
    let registry = TemplateRegistry::from_html(PAGE).unwrap();
    let card = registry.get("card").unwrap();

    let direct = Template::from_str(
        r#"<article><h2 data-text="title"></h2><ul data-slot></ul></article>"#,
    )
    .unwrap();

    let state = State::from_pairs([("title", "Same either way")]);
    assert_eq!(
        card.instantiate(&state).unwrap().html().trim().to_string(),
        direct.instantiate(&state).unwrap().html()
    );
}

#[test]
fn test_registry_drives_component_render() {
    let registry = TemplateRegistry::from_html(PAGE).unwrap();
    let card = registry.get("card").unwrap();
    let item = registry.get("item").unwrap();

    let fragment = card
        .instantiate_with(&State::from_pairs([("title", "Letters")]), |_, _| {
            ["alpha", "beta"]
                .iter()
                .map(|label| {
                    item.instantiate(&State::from_pairs([("label", *label)]))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
        .unwrap();

    assert_eq!(fragment.select("h2").text().to_string(), "Letters");
    let texts: Vec<String> = fragment
        .select("ul > li")
        .nodes()
        .iter()
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(texts, vec!["alpha", "beta"]);
}

#[test]
fn test_registry_propagates_config() {
    let config = TemplateConfig::new().with_missing_key_mode(MissingKeyMode::Empty);
    let registry = TemplateRegistry::from_html_with_config(PAGE, config).unwrap();

    let fragment = registry
        .get("card")
        .unwrap()
        .instantiate(&State::new())
        .unwrap();
    assert_eq!(fragment.select("h2").text().to_string(), "");
}

#[test]
fn test_registry_duplicate_name_is_error() {
    let html = r#"
        <template data-tmpl="card"><div>one</div></template>
        <template data-tmpl="card"><div>two</div></template>
    "#;
    let err = TemplateRegistry::from_html(html).unwrap_err();
    assert!(err.to_string().contains("duplicate template name: card"));
}

#[test]
fn test_registry_ignores_anonymous_templates() {
    let html = r#"
        <template><div>anonymous</div></template>
        <template data-tmpl="named"><div>named</div></template>
    "#;
    let registry = TemplateRegistry::from_html(html).unwrap();
    assert_eq!(registry.len(), 1);
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["named"]);
}
