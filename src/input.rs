//! Interactive collection of trip parameters.
//!
//! Values come from the resolved config first; whatever is still missing is
//! asked for on the terminal. The result is always a validated
//! [`TripParameters`].

use log::debug;
use std::io::{BufRead, Write};

use crate::config::{CliOverrides, ResolvedConfig};
use crate::error::TripError;
use crate::models::TripParameters;
use crate::report::Language;

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    lang: Language,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input` and writing prompts
    /// to `output` in the given language.
    pub fn new(input: R, output: W, lang: Language) -> Self {
        Self {
            input,
            output,
            lang,
        }
    }

    /// Prints `prompt` and reads one trimmed line.
    ///
    /// Returns `MissingInput` at end of input.
    fn ask(&mut self, field: &'static str, prompt: &str) -> Result<String, TripError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TripError::MissingInput { field });
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a required number.
    pub fn ask_number(&mut self, field: &'static str, prompt: &str) -> Result<f64, TripError> {
        let text = self.ask(field, prompt)?;
        parse_number(field, &text)
    }

    /// Asks for an optional number; an empty answer keeps `default`.
    pub fn ask_number_or(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: f64,
    ) -> Result<f64, TripError> {
        let text = self.ask(field, prompt)?;
        if text.is_empty() {
            return Ok(default);
        }
        parse_number(field, &text)
    }

    /// Asks a yes/no question; anything but a localized "yes" is "no".
    pub fn ask_yes_no(&mut self, field: &'static str, prompt: &str) -> Result<bool, TripError> {
        let text = self.ask(field, prompt)?.to_uppercase();
        Ok(self
            .lang
            .messages()
            .yes_answers
            .iter()
            .any(|yes| *yes == text))
    }

    /// Writes a full line to the output.
    pub fn say(&mut self, line: &str) -> Result<(), TripError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

/// Parses a number typed by the user.
///
/// Accepts a decimal comma ("6,33") as well as a decimal point.
///
/// # Examples
///
/// ```
/// use trip_optimizer::input::parse_number;
///
/// assert_eq!(parse_number("gas_price_per_liter", "6,33").unwrap(), 6.33);
/// assert!(parse_number("speed_kmh", "fast").is_err());
/// ```
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, TripError> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| TripError::InvalidNumber {
            field,
            input: text.to_string(),
        })
}

/// Returns `true` if some required field must still be prompted for.
pub fn needs_prompt(resolved: &ResolvedConfig) -> bool {
    resolved.distance_one_way.is_none()
        || resolved.speed_kmh.is_none()
        || resolved.efficiency_km_per_liter.is_none()
        || resolved.max_hours_per_day.is_none()
}

/// Builds validated trip parameters, prompting for anything missing.
///
/// When every required field is already known nothing is read from the
/// prompter and the trip is one-way unless `--round-trip` was given. In an
/// interactive session, gas price, toll, and trip mode are also asked for
/// unless they were given as flags.
pub fn collect_parameters<R: BufRead, W: Write>(
    resolved: &ResolvedConfig,
    cli: &CliOverrides,
    prompter: &mut Prompter<R, W>,
) -> Result<TripParameters, TripError> {
    let interactive = needs_prompt(resolved);
    let m = resolved.language.messages();

    if interactive {
        prompter.say(m.banner)?;
    }

    let distance = match resolved.distance_one_way {
        Some(v) => v,
        None => prompter.ask_number("distance_one_way", m.prompt_distance)?,
    };
    let speed = match resolved.speed_kmh {
        Some(v) => v,
        None => prompter.ask_number("speed_kmh", m.prompt_speed)?,
    };
    let efficiency = match resolved.efficiency_km_per_liter {
        Some(v) => v,
        None => prompter.ask_number("efficiency_km_per_liter", m.prompt_efficiency)?,
    };
    let max_hours = match resolved.max_hours_per_day {
        Some(v) => v,
        None => prompter.ask_number("max_hours_per_day", m.prompt_max_hours)?,
    };

    let gas_price = if interactive && cli.gas_price_per_liter.is_none() {
        prompter.ask_number_or(
            "gas_price_per_liter",
            m.prompt_gas_price,
            resolved.gas_price_per_liter,
        )?
    } else {
        resolved.gas_price_per_liter
    };
    let toll = if interactive && cli.toll_one_way.is_none() {
        prompter.ask_number_or("toll_one_way", m.prompt_toll, resolved.toll_one_way)?
    } else {
        resolved.toll_one_way
    };
    let round_trip = match resolved.round_trip {
        Some(v) => v,
        None if interactive => prompter.ask_yes_no("is_round_trip", m.prompt_round_trip)?,
        None => false,
    };

    let params = TripParameters::new(distance, speed, efficiency, max_hours)
        .with_gas_price(gas_price)
        .with_toll(toll)
        .with_round_trip(round_trip);
    params.validate()?;
    debug!("Collected parameters: {:?}", params);
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, TripConfig};
    use crate::models::CalculatorSettings;
    use std::io::Cursor;

    fn empty_resolved(lang: Language) -> ResolvedConfig {
        ResolvedConfig {
            distance_one_way: None,
            speed_kmh: None,
            efficiency_km_per_liter: None,
            max_hours_per_day: None,
            gas_price_per_liter: 6.33,
            toll_one_way: 0.0,
            round_trip: None,
            language: lang,
            settings: CalculatorSettings::default(),
        }
    }

    fn run(
        resolved: &ResolvedConfig,
        cli: &CliOverrides,
        typed: &str,
    ) -> (Result<TripParameters, TripError>, String) {
        let mut out = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(typed.as_bytes()), &mut out, resolved.language);
            collect_parameters(resolved, cli, &mut prompter)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("x", " 80 ").unwrap(), 80.0);
        assert_eq!(parse_number("x", "6.5").unwrap(), 6.5);
        assert_eq!(parse_number("x", "6,5").unwrap(), 6.5);
        assert!(matches!(
            parse_number("x", ""),
            Err(TripError::InvalidNumber { field: "x", .. })
        ));
        assert!(parse_number("x", "12km").is_err());
    }

    #[test]
    fn test_full_interactive_session() {
        let resolved = empty_resolved(Language::Portuguese);
        let (result, shown) = run(
            &resolved,
            &CliOverrides::default(),
            "2402\n80\n10\n10\n6\n20\ns\n",
        );
        let p = result.unwrap();
        assert_eq!(p.distance_one_way(), 2402.0);
        assert_eq!(p.gas_price_per_liter(), 6.0);
        assert_eq!(p.toll_one_way(), 20.0);
        assert!(p.is_round_trip());
        assert!(shown.contains("CALCULADORA DE VIAGEM"));
        assert!(shown.contains("Velocidade Média (KM/H): "));
    }

    #[test]
    fn test_empty_optional_keeps_default() {
        let resolved = empty_resolved(Language::English);
        let (result, _) = run(&resolved, &CliOverrides::default(), "500\n100\n12\n8\n\n\nn\n");
        let p = result.unwrap();
        assert_eq!(p.gas_price_per_liter(), 6.33);
        assert_eq!(p.toll_one_way(), 0.0);
        assert!(!p.is_round_trip());
    }

    #[test]
    fn test_english_yes() {
        let resolved = empty_resolved(Language::English);
        let (result, _) = run(&resolved, &CliOverrides::default(), "500\n100\n12\n8\n\n\nyes\n");
        assert!(result.unwrap().is_round_trip());
    }

    #[test]
    fn test_non_numeric_aborts() {
        let resolved = empty_resolved(Language::Portuguese);
        let (result, shown) = run(&resolved, &CliOverrides::default(), "500\nrápido\n");
        assert!(matches!(
            result,
            Err(TripError::InvalidNumber {
                field: "speed_kmh",
                ..
            })
        ));
        // Aborted before asking for efficiency
        assert!(!shown.contains("Eficiência"));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let resolved = empty_resolved(Language::Portuguese);
        let (result, _) = run(&resolved, &CliOverrides::default(), "500\n0\n12\n8\n\n\nn\n");
        assert!(matches!(
            result,
            Err(TripError::OutOfRange {
                field: "speed_kmh",
                ..
            })
        ));
    }

    #[test]
    fn test_end_of_input() {
        let resolved = empty_resolved(Language::Portuguese);
        let (result, _) = run(&resolved, &CliOverrides::default(), "500\n");
        assert!(matches!(
            result,
            Err(TripError::MissingInput {
                field: "speed_kmh"
            })
        ));
    }

    #[test]
    fn test_no_prompt_when_all_flags_given() {
        let cli = CliOverrides {
            distance_one_way: Some(800.0),
            speed_kmh: Some(80.0),
            efficiency_km_per_liter: Some(10.0),
            max_hours_per_day: Some(10.0),
            ..Default::default()
        };
        let resolved = resolve(&TripConfig::default(), &cli).unwrap();
        assert!(!needs_prompt(&resolved));
        let (result, shown) = run(&resolved, &cli, "");
        let p = result.unwrap();
        assert!(!p.is_round_trip());
        assert!(shown.is_empty());
    }

    #[test]
    fn test_flags_skip_optional_prompts() {
        let cli = CliOverrides {
            gas_price_per_liter: Some(5.0),
            toll_one_way: Some(10.0),
            round_trip: Some(true),
            ..Default::default()
        };
        let resolved = resolve(&TripConfig::default(), &cli).unwrap();
        let (result, shown) = run(&resolved, &cli, "500\n100\n12\n8\n");
        let p = result.unwrap();
        assert_eq!(p.gas_price_per_liter(), 5.0);
        assert_eq!(p.toll_one_way(), 10.0);
        assert!(p.is_round_trip());
        assert!(!shown.contains("ida e volta"));
    }
}
