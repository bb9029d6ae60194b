use cardform::prelude::*;
use cardform::validate;

struct DemoController {
    values: FieldMap<String>,
    validation: FieldMap<bool>,
    focused: Option<Field>,
}

impl FormController for DemoController {
    fn values(&self) -> &FieldMap<String> {
        &self.values
    }

    fn validation(&self) -> &FieldMap<bool> {
        &self.validation
    }

    fn focused(&self) -> Option<Field> {
        self.focused
    }

    fn amount(&self) -> f64 {
        12.5
    }

    fn disclaimer(&self) -> Option<&str> {
        Some("Your card is charged when the order ships.")
    }

    fn handle_change(&mut self, field: Field, value: String) {
        let valid = match field {
            Field::CardNumber => validate::card_number(&value),
            Field::ExpDate => validate::exp_date(&value),
            Field::CardCode => validate::card_code(&value),
        };
        self.values.set(field, value);
        self.validation.set(field, valid);
    }

    fn handle_focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    fn handle_blur(&mut self) {
        self.focused = None;
    }

    fn handle_submit(&mut self) {}

    fn handle_cancel(&mut self) {}
}

fn main() -> anyhow::Result<()> {
    let mut controller = DemoController {
        values: FieldMap::default(),
        validation: FieldMap::splat(false),
        focused: Some(Field::CardNumber),
    };

    let outcome = CheckoutForm::new()
        .with_title("Coffee Club Checkout")
        .run(&mut controller)?;
    println!("{outcome:?}");
    Ok(())
}
