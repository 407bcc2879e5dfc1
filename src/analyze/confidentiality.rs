use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};

const HIGH_RISK: [&str; 6] = ["documento", "cedula", "dni", "pasaporte", "telefono", "celular"];
const MEDIUM_RISK: [&str; 6] = [
    "email",
    "correo",
    "cuenta_bancaria",
    "tarjeta",
    "salario",
    "sueldo",
];
const LOW_RISK: [&str; 6] = ["direccion", "domicilio", "password", "clave", "token", "ssn"];
const MAX_RISK: f64 = 3.0;

/// Risk weight of a column name; the highest matching tier wins.
pub fn column_risk(column: &str) -> u32 {
    let name = column.to_lowercase();
    let matches = |tier: &[&str]| tier.iter().any(|keyword| name.contains(keyword));
    if matches(&HIGH_RISK) {
        3
    } else if matches(&MEDIUM_RISK) {
        2
    } else if matches(&LOW_RISK) {
        1
    } else {
        0
    }
}

pub fn confidentiality_score(dataset: &Dataset) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let risks: Vec<u32> = dataset
        .columns()
        .iter()
        .map(|column| column_risk(column))
        .filter(|risk| *risk > 0)
        .collect();
    if risks.is_empty() {
        return MAX_SCORE;
    }

    let flagged = risks.len() as f64;
    let total_risk: f64 = risks.iter().map(|risk| f64::from(*risk)).sum();
    let flagged_share = flagged / dataset.column_count() as f64;
    let severity = total_risk / (flagged * MAX_RISK);
    (MAX_SCORE - flagged_share * severity * 10.0).clamp(0.0, MAX_SCORE)
}
