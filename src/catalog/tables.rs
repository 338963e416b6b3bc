//! Static E-number lookup tables

use crate::models::RiskLevel;

/// Risk assigned to E-numbers missing from the catalog
pub const UNCATALOGUED_RISK: RiskLevel = RiskLevel::Limited;

/// Reference risk level for an E-number (case-insensitive)
pub fn risk_level_for(code: &str) -> Option<RiskLevel> {
    let lower = code.trim().to_lowercase();

    let level = match lower.as_str() {
        // Colours
        "e102" | "e104" | "e122" | "e131" | "e132" | "e142" | "e150c" | "e151" => {
            RiskLevel::Moderate
        }
        "e110" | "e124" | "e129" | "e150d" | "e154" | "e171" => RiskLevel::Hazardous,
        "e120" | "e133" | "e150a" | "e160b" => RiskLevel::Limited,
        "e160a" => RiskLevel::None,

        // Preservatives
        "e211" | "e220" | "e250" | "e251" => RiskLevel::Hazardous,
        "e200" | "e202" | "e260" | "e270" | "e290" => RiskLevel::None,

        // Antioxidants and acidity regulators
        "e300" | "e306" | "e307" | "e330" | "e331" => RiskLevel::None,
        "e338" | "e339" | "e340" => RiskLevel::Moderate,
        "e341" => RiskLevel::Limited,

        // Thickeners, emulsifiers, stabilisers
        "e407" | "e450" | "e451" | "e452" => RiskLevel::Moderate,
        "e410" | "e412" | "e414" | "e415" | "e422" | "e440" | "e460" | "e466" | "e471"
        | "e472" => RiskLevel::None,
        "e420" => RiskLevel::Limited,

        // Raising agents and salts
        "e500" | "e503" | "e509" => RiskLevel::None,

        // Flavour enhancers
        "e621" => RiskLevel::Moderate,
        "e627" | "e631" => RiskLevel::Limited,

        // Sweeteners
        "e950" | "e954" | "e955" => RiskLevel::Moderate,
        "e951" | "e952" => RiskLevel::Hazardous,

        _ => return None,
    };

    Some(level)
}

/// Human-readable name for an E-number (case-insensitive)
pub fn display_name(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_uppercase();

    let name = match upper.as_str() {
        "E100" => "Curcumin",
        "E101" => "Riboflavin",
        "E102" => "Tartrazine",
        "E104" => "Quinoline Yellow",
        "E110" => "Sunset Yellow",
        "E120" => "Carmine",
        "E122" => "Azorubine",
        "E124" => "Ponceau 4R",
        "E129" => "Allura Red",
        "E131" => "Patent Blue V",
        "E150A" => "Caramel",
        "E150D" => "Sulfite Ammonia Caramel",
        "E160A" => "Beta-Carotene",
        "E171" => "Titanium Dioxide",
        "E200" => "Sorbic Acid",
        "E202" => "Potassium Sorbate",
        "E211" => "Sodium Benzoate",
        "E220" => "Sulfur Dioxide",
        "E250" => "Sodium Nitrite",
        "E251" => "Sodium Nitrate",
        "E260" => "Acetic Acid",
        "E270" => "Lactic Acid",
        "E290" => "Carbon Dioxide",
        "E300" => "Vitamin C",
        "E306" => "Vitamin E",
        "E330" => "Citric Acid",
        "E338" => "Phosphoric Acid",
        "E407" => "Carrageenan",
        "E412" => "Guar Gum",
        "E415" => "Xanthan Gum",
        "E420" => "Sorbitol",
        "E440" => "Pectin",
        "E450" => "Diphosphates",
        "E471" => "Mono/Diglycerides",
        "E500" => "Sodium Carbonates",
        "E621" => "MSG",
        "E951" => "Aspartame",
        "E952" => "Cyclamate",
        "E955" => "Sucralose",
        _ => return None,
    };

    Some(name)
}
