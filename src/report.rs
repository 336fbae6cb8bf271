//! Rendering of trip results and user-facing messages.
//!
//! Text output is localized; JSON output is language-neutral.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::TripError;
use crate::models::TripResult;

/// Language of prompts, labels, and error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[value(name = "pt")]
    #[serde(rename = "pt")]
    Portuguese,
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
}

/// Localized strings for one language.
#[derive(Debug)]
pub struct Messages {
    pub banner: &'static str,
    pub prompt_distance: &'static str,
    pub prompt_speed: &'static str,
    pub prompt_efficiency: &'static str,
    pub prompt_max_hours: &'static str,
    pub prompt_gas_price: &'static str,
    pub prompt_toll: &'static str,
    pub prompt_round_trip: &'static str,
    pub yes_answers: &'static [&'static str],
    pub result_header: &'static str,
    pub currency: &'static str,
    pub mode_label: &'static str,
    pub mode_one_way: &'static str,
    pub mode_round_trip: &'static str,
    pub distance_label: &'static str,
    pub fuel_label: &'static str,
    pub toll_label: &'static str,
    pub total_label: &'static str,
    pub time_label: &'static str,
    pub hours: &'static str,
    pub nights_label: &'static str,
    pub stops_label: &'static str,
    pub direct_trip: &'static str,
    pub return_note: &'static str,
    pub error_not_a_number: &'static str,
    pub error_speed_efficiency: &'static str,
    pub error_out_of_range: &'static str,
    pub error_missing_input: &'static str,
    pub error_unexpected: &'static str,
}

static PORTUGUESE: Messages = Messages {
    banner: "--- 🚗 CALCULADORA DE VIAGEM (OTIMIZADOR) ---",
    prompt_distance: "Distância (KM) - Apenas ida: ",
    prompt_speed: "Velocidade Média (KM/H): ",
    prompt_efficiency: "Eficiência do Carro (KM/L): ",
    prompt_max_hours: "Horas de pilotagem por dia: ",
    prompt_gas_price: "Preço do combustível (por litro) [Enter = padrão]: ",
    prompt_toll: "Pedágio (apenas ida) [Enter = 0]: ",
    prompt_round_trip: "É ida e volta? (S/N): ",
    yes_answers: &["S", "SIM"],
    result_header: "--- 📊 RESULTADO DA ANÁLISE ---",
    currency: "R$",
    mode_label: "Modo",
    mode_one_way: "➡️ Apenas ida",
    mode_round_trip: "🔄 Ida e volta",
    distance_label: "🛣️ Distância total percorrida",
    fuel_label: "⛽ Combustível",
    toll_label: "🧾 Pedágios",
    total_label: "💰 Custo total",
    time_label: "⏱️ Tempo total de viagem",
    hours: "horas",
    nights_label: "🏨 Pernoites necessários",
    stops_label: "🛑 Sugestão de paradas (KMs acumulados)",
    direct_trip: "✅ Viagem direta (sem necessidade de pernoite).",
    return_note: "↩️ Na volta, repita as mesmas paradas (KMs desde o destino)",
    error_not_a_number: "❌ ERRO: Por favor, digite apenas números.",
    error_speed_efficiency: "❌ Erro: Velocidade e Eficiência devem ser maiores que zero.",
    error_out_of_range: "❌ Erro: valor inválido",
    error_missing_input: "❌ Erro: entrada encerrada antes do fim",
    error_unexpected: "❌ ERRO INESPERADO",
};

static ENGLISH: Messages = Messages {
    banner: "--- 🚗 TRIP CALCULATOR (OPTIMIZER) ---",
    prompt_distance: "Distance (KM) - one way: ",
    prompt_speed: "Average speed (KM/H): ",
    prompt_efficiency: "Car efficiency (KM/L): ",
    prompt_max_hours: "Driving hours per day: ",
    prompt_gas_price: "Fuel price (per liter) [Enter = default]: ",
    prompt_toll: "Toll (one way) [Enter = 0]: ",
    prompt_round_trip: "Round trip? (Y/N): ",
    yes_answers: &["Y", "YES"],
    result_header: "--- 📊 TRIP ANALYSIS ---",
    currency: "$",
    mode_label: "Mode",
    mode_one_way: "➡️ One way",
    mode_round_trip: "🔄 Round trip",
    distance_label: "🛣️ Total distance driven",
    fuel_label: "⛽ Fuel",
    toll_label: "🧾 Tolls",
    total_label: "💰 Total cost",
    time_label: "⏱️ Total trip time",
    hours: "hours",
    nights_label: "🏨 Overnight stops",
    stops_label: "🛑 Suggested stops (cumulative KM)",
    direct_trip: "✅ Direct trip (no overnight stop needed).",
    return_note: "↩️ On the way back, use the same stops (KM from destination)",
    error_not_a_number: "❌ ERROR: Please enter numbers only.",
    error_speed_efficiency: "❌ Error: Speed and efficiency must be greater than zero.",
    error_out_of_range: "❌ Error: invalid value",
    error_missing_input: "❌ Error: input ended early",
    error_unexpected: "❌ UNEXPECTED ERROR",
};

impl Language {
    /// Returns the message table for this language.
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Portuguese => &PORTUGUESE,
            Language::English => &ENGLISH,
        }
    }
}

/// Renders a result as localized, human-readable text.
///
/// # Examples
///
/// ```
/// use trip_optimizer::models::TripParameters;
/// use trip_optimizer::planning::compute;
/// use trip_optimizer::report::{render_text, Language};
///
/// let result = compute(&TripParameters::new(800.0, 80.0, 10.0, 10.0).with_gas_price(6.0));
/// let text = render_text(&result, Language::English);
/// assert!(text.contains("$ 480.00"));
/// assert!(text.contains("10.0 hours"));
/// ```
pub fn render_text(result: &TripResult, lang: Language) -> String {
    let m = lang.messages();
    let mut out = String::new();

    let mode = if result.is_round_trip() {
        m.mode_round_trip
    } else {
        m.mode_one_way
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", m.result_header);
    let _ = writeln!(out, "{}: {}", m.mode_label, mode);
    let _ = writeln!(out, "{}: {:.1} km", m.distance_label, result.total_distance());
    let _ = writeln!(
        out,
        "{}: {}",
        m.fuel_label,
        format_currency(result.fuel_cost(), m.currency)
    );
    let _ = writeln!(
        out,
        "{}: {}",
        m.toll_label,
        format_currency(result.toll_cost(), m.currency)
    );
    let _ = writeln!(
        out,
        "{}: {}",
        m.total_label,
        format_currency(result.total_cost(), m.currency)
    );
    let _ = writeln!(
        out,
        "{}: {:.1} {}",
        m.time_label,
        result.total_time_hours(),
        m.hours
    );
    let _ = writeln!(out, "{}: {}", m.nights_label, result.total_nights());

    if result.is_direct() {
        let _ = writeln!(out, "{}", m.direct_trip);
    } else {
        let _ = writeln!(
            out,
            "{}: {}",
            m.stops_label,
            format_km_list(result.stops_one_way())
        );
        if result.is_round_trip() {
            let _ = writeln!(
                out,
                "{}: {}",
                m.return_note,
                format_km_list(&result.return_stops())
            );
        }
    }
    out
}

/// Renders a result as pretty-printed JSON.
pub fn render_json(result: &TripResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Returns the localized message for an error shown to the user.
pub fn error_message(err: &TripError, lang: Language) -> String {
    let m = lang.messages();
    match err {
        TripError::InvalidNumber { .. } => m.error_not_a_number.to_string(),
        TripError::OutOfRange {
            field: "speed_kmh" | "efficiency_km_per_liter",
            ..
        } => m.error_speed_efficiency.to_string(),
        TripError::OutOfRange { field, value, .. } => {
            format!("{} ({field} = {value})", m.error_out_of_range)
        }
        TripError::MissingInput { field } => format!("{} ({field})", m.error_missing_input),
        other => format!("{}: {other}", m.error_unexpected),
    }
}

fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{symbol} {amount:.2}")
}

fn format_km_list(marks: &[f64]) -> String {
    marks
        .iter()
        .map(|km| format!("{km:.1}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripParameters;
    use crate::planning::compute;

    #[test]
    fn test_render_direct_trip_pt() {
        let params = TripParameters::new(800.0, 80.0, 10.0, 10.0)
            .with_gas_price(6.0)
            .with_toll(20.0);
        let text = render_text(&compute(&params), Language::Portuguese);
        assert!(text.contains("R$ 480.00"));
        assert!(text.contains("R$ 20.00"));
        assert!(text.contains("R$ 500.00"));
        assert!(text.contains("10.0 horas"));
        assert!(text.contains("Pernoites necessários: 0"));
        assert!(text.contains("Viagem direta"));
        assert!(text.contains("Apenas ida"));
    }

    #[test]
    fn test_render_stops_round_trip_en() {
        let params = TripParameters::new(2402.0, 80.0, 10.0, 10.0).with_round_trip(true);
        let text = render_text(&compute(&params), Language::English);
        assert!(text.contains("Round trip"));
        assert!(text.contains("Overnight stops: 4"));
        assert!(text.contains("(cumulative KM): 800.0, 1600.0"));
        assert!(text.contains("(KM from destination): 802.0, 1602.0"));
        assert!(!text.contains("Direct trip"));
    }

    #[test]
    fn test_render_stops_one_way_has_no_return_note() {
        let params = TripParameters::new(2402.0, 80.0, 10.0, 10.0);
        let text = render_text(&compute(&params), Language::English);
        assert!(!text.contains("On the way back"));
    }

    #[test]
    fn test_render_json() {
        let params = TripParameters::new(800.0, 80.0, 10.0, 10.0).with_gas_price(6.0);
        let json = render_json(&compute(&params)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fuel_cost"], 480.0);
        assert_eq!(value["is_round_trip"], false);
        assert!(value["stops_one_way"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let nan = TripError::InvalidNumber {
            field: "distance_one_way",
            input: "abc".to_string(),
        };
        assert_eq!(
            error_message(&nan, Language::Portuguese),
            "❌ ERRO: Por favor, digite apenas números."
        );

        let speed = TripError::OutOfRange {
            field: "speed_kmh",
            value: 0.0,
            requirement: "greater than zero",
        };
        assert!(error_message(&speed, Language::English).contains("Speed and efficiency"));

        let hours = TripError::OutOfRange {
            field: "max_hours_per_day",
            value: -1.0,
            requirement: "greater than zero",
        };
        assert!(error_message(&hours, Language::English).contains("max_hours_per_day = -1"));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "R$"), "R$ 1234.50");
        assert_eq!(format_currency(0.004, "$"), "$ 0.00");
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(Language::default(), Language::Portuguese);
    }
}
