use choice_field::{
    dropdown_choices, grouped_choices, resolve_selection, selected_key, ChoiceDecoration,
    ChoiceOption, DerivedChoices, FormFactor, RenderState,
};
use pretty_assertions::assert_eq;

fn contact_options() -> Vec<ChoiceOption> {
    vec![ChoiceOption::new(1, "Email"), ChoiceOption::new(2, "Call")]
}

fn render_state(configuration: Option<&str>, masked: bool, form_factor: FormFactor) -> RenderState {
    let derived = DerivedChoices::derive(&contact_options(), configuration);
    RenderState::resolve(derived.error.as_ref(), masked, form_factor)
}

#[test]
fn malformed_configuration_renders_only_the_error_text() {
    for raw in ["{", "Mail", "{'1':'Mail'}", "{\"1\":\"Mail\",}"] {
        for masked in [false, true] {
            for form_factor in [FormFactor::Small, FormFactor::Large] {
                let state = render_state(Some(raw), masked, form_factor);
                assert_eq!(state.placeholder_text(), Some(format!("Invalid configuration: '{raw}'").as_str()));
            }
        }
    }
}

#[test]
fn masked_field_renders_only_the_mask() {
    for configuration in [None, Some(r#"{"1":"Mail"}"#)] {
        for form_factor in [FormFactor::Small, FormFactor::Large] {
            let state = render_state(configuration, true, form_factor);
            assert_eq!(state, RenderState::Masked);
            assert_eq!(state.placeholder_text(), Some("****"));
        }
    }
}

#[test]
fn masked_field_with_unmatchable_json_still_renders_the_mask() {
    for raw in [r#"{"abc":"Mail"}"#, r#"{"01":"Mail"}"#, "[]", "null"] {
        assert_eq!(render_state(Some(raw), true, FormFactor::Large), RenderState::Masked);

        let derived = DerivedChoices::derive(&contact_options(), Some(raw));
        assert_eq!(derived.error, None);
        assert!(derived.items.iter().all(|item| item.icon.is_none()));
    }
}

#[test]
fn icon_mapping_reaches_both_controls() {
    let derived = DerivedChoices::derive(&contact_options(), Some(r#"{"1":"Mail","2":"Phone"}"#));
    assert_eq!(derived.error, None);

    let cards = grouped_choices(&derived.items, &ChoiceDecoration::default());
    let card_view: Vec<(&str, Option<&str>)> = cards
        .iter()
        .map(|card| (card.text.as_str(), card.icon.as_deref()))
        .collect();
    assert_eq!(
        card_view,
        vec![("Email Barbie", Some("Mail")), ("Call Barbie", Some("Phone"))]
    );

    let rows = dropdown_choices(&derived.items);
    let row_view: Vec<(&str, Option<&str>)> = rows
        .iter()
        .map(|row| (row.text.as_str(), row.icon.as_deref()))
        .collect();
    assert_eq!(row_view, vec![("Email", Some("Mail")), ("Call", Some("Phone"))]);
}

#[test]
fn absent_configuration_yields_no_error_and_no_icons() {
    let derived = DerivedChoices::derive(&contact_options(), None);

    assert_eq!(derived.error, None);
    assert!(derived.items.iter().all(|item| item.icon.is_none()));
    assert_eq!(render_state(None, false, FormFactor::Large), RenderState::Large);
}

#[test]
fn selecting_an_option_reports_its_value_in_both_form_factors() {
    let derived = DerivedChoices::derive(&contact_options(), None);

    let cards = grouped_choices(&derived.items, &ChoiceDecoration::default());
    assert_eq!(resolve_selection(&derived.items, &cards[1].key), Some(2));

    let rows = dropdown_choices(&derived.items);
    assert_eq!(resolve_selection(&derived.items, &rows[0].key), Some(rows[0].value));
    assert_eq!(rows[0].value, 1);

    assert_eq!(resolve_selection(&derived.items, ""), None);
}

#[test]
fn selected_value_maps_to_item_key() {
    let derived = DerivedChoices::derive(&contact_options(), None);
    let key = selected_key(Some(2)).expect("selected");

    assert!(derived.items.iter().any(|item| item.key == key));
    assert_eq!(selected_key(None), None);
}
