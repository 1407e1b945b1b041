//! Interactive text menu

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use rv_engine::{
    CharsetPattern, ColorFormat, GenerationRequest, RandomGenerator, TickOutcome, UniformSource,
    template_tokens,
};

use crate::parse::{parse_int_set, parse_items};

const RULE: &str = "==================================================";

/// Prompt loop over any line-oriented input and output
pub struct Menu<'a, S: UniformSource, R: BufRead, W: Write> {
    generator: &'a mut RandomGenerator<S>,
    input: R,
    output: W,
}

impl<'a, S: UniformSource, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(generator: &'a mut RandomGenerator<S>, input: R, output: W) -> Self {
        Self {
            generator,
            input,
            output,
        }
    }

    /// Run until the user picks 0 or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.read_line("\nSelect option: ")? else {
                break;
            };

            let result = match choice.as_str() {
                "0" => break,
                "1" => self.numbers(),
                "2" => self.floats(),
                "3" => self.colors(),
                "4" => self.strings(),
                "5" => self.custom(),
                "6" => self.list(),
                "7" => self.wheel(),
                _ => {
                    writeln!(self.output, "\nInvalid option!")?;
                    continue;
                }
            };

            if let Err(e) = result {
                log::debug!("Menu action failed: {e:#}");
                writeln!(self.output, "\nError: {e:#}")?;
            }
        }
        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "    RANDOM VALUE GENERATOR")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "\n1. Generate Numbers")?;
        writeln!(self.output, "2. Generate Floating Point Numbers")?;
        writeln!(self.output, "3. Generate Colors")?;
        writeln!(self.output, "4. Generate Strings")?;
        writeln!(self.output, "5. Generate Custom Pattern")?;
        writeln!(self.output, "6. Generate from Custom List")?;
        writeln!(self.output, "7. Spin the Wheel")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "\n{RULE}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with a default shown in brackets; blank input takes the default
    fn ask<T>(&mut self, label: &str, default: T) -> Result<T>
    where
        T: FromStr + Display,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.read_line(&format!("{label} [{default}]: "))?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(default);
        }
        raw.parse()
            .with_context(|| format!("invalid value '{raw}' for {label}"))
    }

    fn ask_text(&mut self, label: &str) -> Result<String> {
        Ok(self.read_line(&format!("{label}: "))?.unwrap_or_default())
    }

    fn render(&mut self, heading: &str, lines: &[String], inline: bool) -> Result<()> {
        if inline {
            writeln!(self.output, "\n{heading}: [{}]", lines.join(", "))?;
        } else {
            writeln!(self.output, "\n{heading}:")?;
            for line in lines {
                writeln!(self.output, "  {line}")?;
            }
        }
        Ok(())
    }

    fn run_request(&mut self, request: GenerationRequest, heading: &str, inline: bool) -> Result<()> {
        let lines = self.generator.generate(&request)?.lines();
        self.render(heading, &lines, inline)
    }

    fn numbers(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate Numbers ---")?;
        let min = self.ask("Minimum value", 1i64)?;
        let max = self.ask("Maximum value", 100i64)?;
        let count = self.ask("How many numbers", 1usize)?;
        let exclude = self.ask_text("Numbers to exclude (comma-separated, or leave empty)")?;
        let exclude = parse_int_set(&exclude)?;
        self.run_request(
            GenerationRequest::integers(min, max, exclude, count),
            "Generated numbers",
            true,
        )
    }

    fn floats(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate Floating Point Numbers ---")?;
        let min = self.ask("Minimum value", 0.0f64)?;
        let max = self.ask("Maximum value", 1.0f64)?;
        let decimals = self.ask("Decimal places", 2u32)?;
        let count = self.ask("How many numbers", 1usize)?;
        self.run_request(
            GenerationRequest::floats(min, max, decimals, count),
            "Generated floats",
            true,
        )
    }

    fn colors(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate Colors ---")?;
        writeln!(self.output, "Formats: hex, rgb, hsl")?;
        let format = self.ask("Color format", "hex".to_string())?;
        let count = self.ask("How many colors", 1usize)?;
        self.run_request(
            GenerationRequest::colors(ColorFormat::from_name(&format), count),
            "Generated colors",
            false,
        )
    }

    fn strings(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate Strings ---")?;
        let names: Vec<&str> = CharsetPattern::ALL.iter().map(|p| p.name()).collect();
        writeln!(self.output, "Patterns: {}", names.join(", "))?;
        let length = self.ask("String length", 10usize)?;
        let pattern = self.ask("Pattern", CharsetPattern::Alphanumeric)?;
        let exclude = self.ask_text("Characters to exclude")?;
        let count = self.ask("How many strings", 1usize)?;
        self.run_request(
            GenerationRequest::strings(length, pattern, exclude, count),
            "Generated strings",
            false,
        )
    }

    fn custom(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate Custom Pattern ---")?;
        writeln!(self.output, "Template syntax:")?;
        writeln!(self.output, "  {{d}} - digit, {{l}} - lowercase, {{u}} - uppercase")?;
        writeln!(self.output, "  {{a}} - any letter, {{x}} - hex, {{s}} - symbol, {{w}} - alphanumeric")?;
        writeln!(self.output, "Example: {{u}}{{u}}{{u}}-{{d}}{{d}}{{d}} -> ABC-123")?;
        let template = self.ask_text("Template")?;
        if template_tokens(&template).is_empty() {
            writeln!(self.output, "Note: template has no placeholders")?;
        }
        let count = self.ask("How many", 1usize)?;
        self.run_request(
            GenerationRequest::template(template, count),
            "Generated values",
            false,
        )
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Generate from Custom List ---")?;
        let items = parse_items(&self.ask_text("Enter items (comma-separated)")?);
        let count = self.ask("How many items", 1usize)?;
        let unique = self.ask("Unique items only? (y/n)", "n".to_string())?;
        self.run_request(
            GenerationRequest::list(items, count, unique.eq_ignore_ascii_case("y")),
            "Selected items",
            true,
        )
    }

    fn wheel(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Spin the Wheel ---")?;
        let items = parse_items(&self.ask_text("Enter 2-20 items (comma-separated)")?);
        let mut wheel = self.generator.new_wheel(items)?;
        self.generator.spin_wheel(&mut wheel)?;
        match wheel.run_to_completion(100_000)? {
            TickOutcome::Resolved { label, .. } => {
                writeln!(self.output, "\nThe wheel stopped on: {label}")?;
                Ok(())
            }
            TickOutcome::Spinning { .. } => bail!("wheel did not come to rest"),
        }
    }
}
