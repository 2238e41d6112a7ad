use portfoliobase::contact::{validate, ContactForm, ContactSubmission, FormField};

fn fill_valid(form: &mut ContactForm) {
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@x.com");
    form.set_field(FormField::Phone, "1234567890");
    form.set_field(FormField::Message, "Hello there!");
}

#[test]
fn submit_on_empty_form_surfaces_all_four_errors() {
    let mut form = ContactForm::new();
    assert!(form.submit().is_none());
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn editing_a_field_clears_only_that_fields_error() {
    let mut form = ContactForm::new();
    assert!(form.submit().is_none());

    form.set_field(FormField::Email, "j");
    assert!(form.errors().get(FormField::Email).is_none());
    assert_eq!(form.errors().len(), 3);

    // The optimistic clear does not re-validate: "j" is not a usable email,
    // but no error shows until the next submit.
    assert!(form.submit().is_none());
    assert_eq!(
        form.errors().get(FormField::Email),
        Some("Please enter a valid email")
    );
}

#[test]
fn failed_submit_keeps_the_typed_input() {
    let mut form = ContactForm::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Message, "too short");
    assert!(form.submit().is_none());
    assert_eq!(form.input().name, "Jane");
    assert_eq!(form.input().message, "too short");
}

#[test]
fn successful_submit_returns_the_submission_and_resets() {
    let mut form = ContactForm::new();
    fill_valid(&mut form);

    let accepted = form.submit().expect("valid form should submit");
    assert_eq!(accepted.name, "Jane");
    assert_eq!(accepted.message, "Hello there!");

    assert_eq!(form.input(), &ContactSubmission::default());
    assert!(form.errors().is_empty());
}

#[test]
fn resubmitting_after_reset_requires_fresh_input() {
    let mut form = ContactForm::new();
    fill_valid(&mut form);
    assert!(form.submit().is_some());

    // The reset form is empty again, so an immediate second submit fails.
    assert!(form.submit().is_none());
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn validator_results_match_the_form_state_machine() {
    let mut form = ContactForm::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@x.com");
    form.set_field(FormField::Phone, "12345");
    form.set_field(FormField::Message, "A long enough message");

    let direct = validate(form.input());
    assert!(form.submit().is_none());
    assert_eq!(form.errors(), &direct);
}
