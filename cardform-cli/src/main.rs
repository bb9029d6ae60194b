use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Report, Result};

use cardform::{
    CheckoutForm, Field, FieldMap, FormConfig, FormController, Outcome, Theme, validate,
};

#[derive(Debug, Parser)]
#[command(
    name = "cardform",
    version,
    about = "Collect payment-card details in the terminal"
)]
struct Cli {
    /// Amount shown on the pay control
    #[arg(short = 'a', long = "amount", value_name = "AMOUNT", default_value_t = 49.99)]
    amount: f64,

    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Disclaimer text rendered under the form
    #[arg(long = "disclaimer", value_name = "TEXT")]
    disclaimer: Option<String>,

    /// Hide the cancel control
    #[arg(long = "no-cancel")]
    no_cancel: bool,

    /// Disable the card-number show/hide toggle
    #[arg(long = "no-reveal-toggle")]
    no_reveal_toggle: bool,

    /// Color palette
    #[arg(long = "theme", value_enum, default_value_t = Palette::Midnight)]
    theme: Palette,

    /// Print the accepted values as JSON instead of a summary
    #[arg(long = "json")]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Palette {
    Midnight,
    Paper,
}

impl Palette {
    fn theme(self) -> Theme {
        match self {
            Palette::Midnight => Theme::midnight(),
            Palette::Paper => Theme::paper(),
        }
    }
}

/// Reference controller: all fields start invalid and are revalidated on
/// every change and on blur, so the pay control enables exactly when the
/// entered data passes the standard card checks.
struct CheckoutController {
    values: FieldMap<String>,
    validation: FieldMap<bool>,
    focused: Option<Field>,
    amount: f64,
    disclaimer: Option<String>,
}

impl CheckoutController {
    fn new(amount: f64, disclaimer: Option<String>) -> Self {
        Self {
            values: FieldMap::default(),
            validation: FieldMap::splat(false),
            focused: Some(Field::CardNumber),
            amount,
            disclaimer,
        }
    }

    fn revalidate(&mut self, field: Field) {
        let value = self.values.get(field);
        let valid = match field {
            Field::CardNumber => validate::card_number(value),
            Field::ExpDate => validate::exp_date(value),
            Field::CardCode => validate::card_code(value),
        };
        self.validation.set(field, valid);
    }
}

impl FormController for CheckoutController {
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
        self.amount
    }

    fn disclaimer(&self) -> Option<&str> {
        self.disclaimer.as_deref()
    }

    fn handle_change(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.revalidate(field);
    }

    fn handle_focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    fn handle_blur(&mut self) {
        if let Some(field) = self.focused.take() {
            self.revalidate(field);
        }
    }

    fn handle_submit(&mut self) {}

    fn handle_cancel(&mut self) {}
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = FormConfig {
        title: cli.title.clone(),
        show_cancel: !cli.no_cancel,
        show_disclaimer: cli.disclaimer.is_some(),
        allow_visibility_toggle: !cli.no_reveal_toggle,
        theme: cli.theme.theme(),
        ..FormConfig::default()
    };

    let mut controller = CheckoutController::new(cli.amount, cli.disclaimer.clone());
    let outcome = CheckoutForm::new()
        .with_config(config)
        .run(&mut controller)
        .map_err(Report::msg)?;

    match outcome {
        Outcome::Submitted => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(controller.values())?);
            } else {
                let digits: String = controller
                    .values()
                    .card_number
                    .chars()
                    .filter(|ch| ch.is_ascii_digit())
                    .collect();
                let last4 = &digits[digits.len().saturating_sub(4)..];
                println!("Payment of ${} accepted for card ending {last4}", cli.amount);
            }
        }
        Outcome::Cancelled => println!("Payment entry cancelled."),
    }

    Ok(())
}
