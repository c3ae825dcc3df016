//! Integration tests for slot insertion and child providers
//!
//! The child provider is the engine's only extension point: it receives
//! the already-resolved clone and the state, and whatever it returns is
//! appended into the slot element. These tests cover the polymorphic
//! return forms, ordering, nested-template recursion, and the
//! missing-slot warning and failure paths.

use std::sync::Arc;

use html_stamp::{CaptureDiagnostics, ChildContent, Error, Fragment, State, Template, TemplateConfig};
use pretty_assertions::assert_eq;

const LIST_TEMPLATE: &str = r#"<div><h2 data-text="heading"></h2><ul data-slot></ul><template data-tmpl="item"><li data-text="$ctx.label"></li></template></div>"#;

#[test]
fn test_provider_single_fragment() {
    let template = Template::from_str(r#"<ul data-slot></ul>"#).unwrap();
    let child = Template::from_str(r#"<li data-text="label"></li>"#).unwrap();

    let fragment = template
        .instantiate_with(&State::new(), |_, _| {
            child
                .instantiate(&State::from_pairs([("label", "only")]))
                .unwrap()
        })
        .unwrap();

    assert_eq!(
        fragment.html(),
        r#"<ul data-slot=""><li data-text="label">only</li></ul>"#
    );
}

#[test]
fn test_provider_many_fragments_in_order() {
    let template = Template::from_str(LIST_TEMPLATE).unwrap();
    let state = State::from_pairs([("heading", "Letters")]);
    let labels = ["alpha", "beta", "gamma"];

    let fragment = template
        .instantiate_with(&state, |clone, _state| {
            let item = clone.template("item").unwrap();
            labels
                .iter()
                .map(|label| {
                    item.instantiate(&State::from_pairs([("label", *label)]))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
        .unwrap();

    assert_eq!(fragment.select("h2").text().to_string(), "Letters");

    let items = fragment.select("ul > li");
    assert_eq!(items.length(), labels.len());
    let texts: Vec<String> = items.nodes().iter().map(|n| n.text().to_string()).collect();
    assert_eq!(texts, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_appended_children_match_independent_instantiation() {
    let template = Template::from_str(LIST_TEMPLATE).unwrap();
    let state = State::from_pairs([("heading", "Letters")]);

    let fragment = template
        .instantiate_with(&state, |clone, _state| {
            let item = clone.template("item").unwrap();
            vec![item
                .instantiate(&State::from_pairs([("label", "alpha")]))
                .unwrap()]
        })
        .unwrap();

    let independent = Template::from_str(r#"<li data-text="$ctx.label"></li>"#)
        .unwrap()
        .instantiate(&State::from_pairs([("label", "alpha")]))
        .unwrap();

    let appended = fragment.select("ul > li").nodes().first().unwrap().html();
    assert_eq!(appended.to_string(), independent.html());
}

#[test]
fn test_nested_template_is_not_resolved_by_outer_pass() {
    let template = Template::from_str(LIST_TEMPLATE).unwrap();
    // outer state has a value for the nested template's key
    let state = State::from_pairs([("heading", "Letters"), ("label", "leaked")]);

    let fragment = template.instantiate(&state).unwrap();
    let nested = fragment.template("item").unwrap();
    assert!(!nested.content_html().contains("leaked"));
}

#[test]
fn test_provider_appends_after_existing_children() {
    let template =
        Template::from_str(r#"<ul data-slot><li>existing</li></ul>"#).unwrap();

    let fragment = template
        .instantiate_with(&State::new(), |_, _| "<li>added</li>")
        .unwrap();

    let texts: Vec<String> = fragment
        .select("ul > li")
        .nodes()
        .iter()
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(texts, vec!["existing", "added"]);
}

#[test]
fn test_provider_returning_nothing() {
    let template = Template::from_str(r#"<ul data-slot></ul>"#).unwrap();

    let fragment = template.instantiate_with(&State::new(), |_, _| ()).unwrap();
    assert_eq!(fragment.select("ul > li").length(), 0);

    let fragment = template
        .instantiate_with(&State::new(), |_, _| ChildContent::None)
        .unwrap();
    assert_eq!(fragment.select("ul > li").length(), 0);

    let fragment = template
        .instantiate_with(&State::new(), |_, _| Vec::<Fragment>::new())
        .unwrap();
    assert_eq!(fragment.select("ul > li").length(), 0);
}

#[test]
fn test_missing_slot_warns_but_render_proceeds() {
    let sink = Arc::new(CaptureDiagnostics::new());
    let config = TemplateConfig::new().with_diagnostics(sink.clone());
    let template = Template::from_str_with_config(
        r#"<template data-tmpl="bare"><div data-text="msg"></div></template>"#,
        config,
    )
    .unwrap();

    let fragment = template
        .instantiate_with(&State::from_pairs([("msg", "still rendered")]), |_, _| ())
        .unwrap();

    assert_eq!(fragment.select("div").text().to_string(), "still rendered");
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("bare"));
    assert!(messages[0].contains("no slot element"));
}

#[test]
fn test_missing_slot_with_content_is_hard_failure() {
    let sink = Arc::new(CaptureDiagnostics::new());
    let config = TemplateConfig::new().with_diagnostics(sink.clone());
    let template = Template::from_str_with_config("<div></div>", config).unwrap();

    let err = template
        .instantiate_with(&State::new(), |_, _| "<li>lost child</li>")
        .unwrap_err();

    assert!(matches!(err, Error::SlotError(_)));
    // the warning fired before the failure path
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn test_slot_present_emits_no_warning() {
    let sink = Arc::new(CaptureDiagnostics::new());
    let config = TemplateConfig::new().with_diagnostics(sink.clone());
    let template =
        Template::from_str_with_config(r#"<ul data-slot></ul>"#, config).unwrap();

    template
        .instantiate_with(&State::new(), |_, _| "<li>child</li>")
        .unwrap();
    assert!(sink.messages().is_empty());
}

#[test]
fn test_recursive_instantiation_through_providers() {
    // two nesting levels: outer list, inner list per item; the name span
    // sits beside the inner slot, not around it, since text resolution
    // replaces an element's entire subtree
    let outer = Template::from_str(
        r#"<section><ul data-slot></ul><template data-tmpl="group"><li><span data-text="$ctx.name"></span><ol data-slot></ol></li></template></section>"#,
    )
    .unwrap();

    let fragment = outer
        .instantiate_with(&State::new(), |clone, _| {
            let group = clone.template("group").unwrap();
            ["first", "second"]
                .iter()
                .map(|name| {
                    group
                        .instantiate_with(
                            &State::from_pairs([("name", *name)]),
                            |_, state| {
                                format!(
                                    "<li>member of {}</li>",
                                    state.get("name").unwrap_or_default()
                                )
                            },
                        )
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
        .unwrap();

    assert_eq!(fragment.select("section > ul > li").length(), 2);
    let inner: Vec<String> = fragment
        .select("ol > li")
        .nodes()
        .iter()
        .map(|n| n.text().to_string())
        .collect();
    assert_eq!(inner, vec!["member of first", "member of second"]);
}
