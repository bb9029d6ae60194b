use cardform::{Field, FieldMap, Mask, can_submit, error_message, first_invalid, validate};

#[test]
fn masked_display_values_pass_the_reference_checks() {
    let card = Mask::card_number().apply("4111111111111111");
    assert_eq!(card, "4111 1111 1111 1111");
    assert!(validate::card_number(&card));

    let exp = Mask::exp_date().apply("1225");
    assert!(validate::exp_date(&exp));

    let code = Mask::card_code().apply("123");
    assert!(validate::card_code(&code));
}

#[test]
fn luhn_failures_survive_masking() {
    let card = Mask::card_number().apply("4111111111111112");
    assert_eq!(card, "4111 1111 1111 1112");
    assert!(!validate::card_number(&card));
}

#[test]
fn single_error_scenario_reports_card_number_first() {
    let validation = FieldMap {
        card_number: false,
        exp_date: true,
        card_code: false,
    };
    // Submission is blocked and only the first invalid field is surfaced;
    // the card code's invalidity stays suppressed.
    assert!(!can_submit(&validation));
    let shown = first_invalid(&validation);
    assert_eq!(shown, Some(Field::CardNumber));
    assert_eq!(error_message(Field::CardNumber), "Card number is not valid");
}
