//! Look up additives in the reference catalog
//! Usage: cargo run --bin additive_info -- E330 en:e951 ...

use serde::Serialize;

use foodscore::catalog::{normalize_additive_code, parse_additive_tag, risk_level_for};
use foodscore::RiskLevel;

#[derive(Debug, Serialize)]
struct AdditiveInfo {
    code: String,
    name: Option<String>,
    risk_level: Option<RiskLevel>,
    catalogued: bool,
    penalty: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let codes: Vec<String> = std::env::args().skip(1).collect();
    if codes.is_empty() {
        eprintln!("Usage: additive_info CODE [CODE...]");
        std::process::exit(2);
    }

    for raw in &codes {
        let info = match parse_additive_tag(raw) {
            Some(additive) => AdditiveInfo {
                catalogued: risk_level_for(&additive.code).is_some(),
                penalty: Some(additive.penalty()),
                risk_level: Some(additive.risk_level),
                name: additive.name,
                code: additive.code,
            },
            None => AdditiveInfo {
                code: normalize_additive_code(raw),
                name: None,
                risk_level: None,
                catalogued: false,
                penalty: None,
            },
        };
        println!("{}", serde_json::to_string(&info)?);
    }

    Ok(())
}
