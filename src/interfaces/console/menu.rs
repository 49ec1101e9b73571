use super::render::{ConsoleRenderer, NARROW_LINE, NARROW_RULE, WIDE_LINE, WIDE_RULE};
use crate::application::engine::TaxEngine;
use crate::error::Result;
use crate::interfaces::input::{parse_base_value, parse_category_number};
use std::io::{BufRead, Write};

const OPTION_CALCULATE: &str = "1";
const OPTION_CATEGORIES: &str = "2";
const OPTION_TAXES: &str = "3";
const OPTION_EXIT: &str = "4";

/// Interactive text menu over any line-oriented input and output.
///
/// Invalid input is reported and the menu is shown again; only I/O failures
/// end the loop with an error. End of input ends it cleanly.
pub struct Menu<'a, R: BufRead, W: Write> {
    engine: &'a TaxEngine,
    renderer: ConsoleRenderer,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: &'a TaxEngine, renderer: ConsoleRenderer, input: R, output: W) -> Self {
        Self {
            engine,
            renderer,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(option) = self.prompt(&format!(
                "Select an option ({OPTION_CALCULATE}-{OPTION_EXIT}): "
            ))?
            else {
                writeln!(self.output, "\n\nGoodbye!")?;
                break;
            };

            match option.as_str() {
                OPTION_CALCULATE => {
                    let result = self.calculate();
                    self.recover(result)?;
                }
                OPTION_CATEGORIES => self.show_categories()?,
                OPTION_TAXES => {
                    let result = self.show_taxes();
                    self.recover(result)?;
                }
                OPTION_EXIT => {
                    writeln!(self.output, "\nThank you for using the Sales Tax Calculator!")?;
                    break;
                }
                other => {
                    tracing::debug!(option = other, "rejected menu option");
                    writeln!(
                        self.output,
                        "\nYou entered option '{other}', which is not valid. Please select {OPTION_CALCULATE}-{OPTION_EXIT}."
                    )?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{WIDE_RULE}")?;
        writeln!(self.output, "    SALES TAX CALCULATOR")?;
        writeln!(self.output, "{WIDE_RULE}")?;
        writeln!(self.output, "{OPTION_CALCULATE}. Calculate taxes")?;
        writeln!(self.output, "{OPTION_CATEGORIES}. View available categories")?;
        writeln!(self.output, "{OPTION_TAXES}. View taxes by category")?;
        writeln!(self.output, "{OPTION_EXIT}. Exit")?;
        writeln!(self.output, "{WIDE_LINE}")?;
        Ok(())
    }

    fn show_categories(&mut self) -> Result<()> {
        writeln!(self.output, "\n{NARROW_RULE}")?;
        writeln!(self.output, "AVAILABLE CATEGORIES:")?;
        writeln!(self.output, "{NARROW_RULE}")?;
        let categories = self.engine.list_categories();
        self.renderer.write_numbered(&mut self.output, &categories)?;
        writeln!(self.output, "{NARROW_LINE}")?;
        Ok(())
    }

    fn calculate(&mut self) -> Result<()> {
        writeln!(self.output, "\n{NARROW_RULE}")?;
        writeln!(self.output, "CALCULATE TAXES")?;
        writeln!(self.output, "{NARROW_RULE}")?;
        self.show_categories()?;

        let Some(text) = self.prompt("Enter the product's base value: $")? else {
            return Ok(());
        };
        let base_value = parse_base_value(&text)?;

        let Some(text) = self.prompt("Enter the category number: ")? else {
            return Ok(());
        };
        let category = parse_category_number(&text)?;

        let breakdown = self.engine.compute(base_value, category)?;

        writeln!(self.output, "\n{WIDE_RULE}")?;
        writeln!(self.output, "CALCULATION RESULTS")?;
        writeln!(self.output, "{WIDE_RULE}")?;
        self.renderer.write_breakdown(&mut self.output, &breakdown)?;
        writeln!(self.output, "{WIDE_RULE}")?;
        Ok(())
    }

    fn show_taxes(&mut self) -> Result<()> {
        writeln!(self.output, "\n{WIDE_RULE}")?;
        writeln!(self.output, "TAXES BY CATEGORY")?;
        writeln!(self.output, "{WIDE_RULE}")?;
        self.show_categories()?;

        let Some(text) = self.prompt("Enter the category number: ")? else {
            return Ok(());
        };
        let category = parse_category_number(&text)?;
        let taxes = self.engine.list_taxes_for_category(category)?;

        writeln!(self.output, "\nTaxes applicable to '{category}':")?;
        writeln!(self.output, "{NARROW_LINE}")?;
        self.renderer.write_numbered(&mut self.output, &taxes)?;
        Ok(())
    }

    /// Reports invalid input to the user; anything else is propagated.
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if e.is_invalid_argument() => {
                writeln!(self.output, "\nError: {e}")?;
                Ok(())
            }
            other => other,
        }
    }

    /// Writes `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
