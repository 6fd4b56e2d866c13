//! Catálogo médico embutido — usado quando `data/kb.json` não existe.

use chrono::NaiveDate;

use super::disease::Disease;
use super::knowledge_base::KnowledgeBaseData;
use super::rule::Rule;
use super::symptom::{Symptom, SymptomId::*};

/// Dados do catálogo embutido (versão 1.2.0, atualizado em 2024-05-20).
pub fn medical_catalog() -> KnowledgeBaseData {
    KnowledgeBaseData {
        version: "1.2.0".to_string(),
        last_updated: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap_or_default(),
        symptoms: symptoms(),
        diseases: diseases(),
        rules: rules(),
    }
}

fn symptoms() -> Vec<Symptom> {
    vec![
        Symptom::new(Fever, "Fever", &["high temperature", "feverish", "chills", "pyrexia"]),
        Symptom::new(Cough, "Cough", &["coughing", "dry cough", "wet cough", "hacking"]),
        Symptom::new(Headache, "Headache", &["head pain", "migraine", "throbbing head"]),
        Symptom::new(RunnyNose, "Runny Nose", &["rhinorrhea", "nasal congestion", "stuffy nose"]),
        Symptom::new(
            SoreThroat,
            "Sore Throat",
            &["painful swallowing", "scratchy throat", "pharyngitis"],
        ),
        Symptom::new(Fatigue, "Fatigue", &["tiredness", "exhaustion", "lethargy", "weakness"]),
        Symptom::new(MuscleAche, "Muscle Ache", &["body aches", "myalgia", "sore muscles"]),
        Symptom::new(Sneezing, "Sneezing", &["sternutation", "constant sneezing"]),
        Symptom::new(ItchyEyes, "Itchy Eyes", &["watery eyes", "red eyes", "ocular itching"]),
        Symptom::new(Nausea, "Nausea", &["feeling sick", "queasiness", "vomiting"]),
        Symptom::new(
            LightSensitivity,
            "Light Sensitivity",
            &["photophobia", "hurts to look at light"],
        ),
        Symptom::new(StiffNeck, "Stiff Neck", &["neck pain", "limited neck movement"]),
        Symptom::new(ShortnessBreath, "Shortness of Breath", &["dyspnea", "difficulty breathing"]),
        Symptom::new(ChestPain, "Chest Pain", &["angina", "tightness in chest"]),
    ]
}

fn diseases() -> Vec<Disease> {
    vec![
        Disease::new(
            "flu",
            "Influenza (Flu)",
            "A common viral infection that can be deadly, especially in high-risk groups.",
        ),
        Disease::new("cold", "Common Cold", "A viral infection of your nose and throat."),
        Disease::new(
            "allergies",
            "Seasonal Allergies",
            "Immune system reaction to pollen, pets, or other substances.",
        ),
        Disease::new(
            "migraine",
            "Migraine",
            "A headache that can cause severe throbbing pain or a pulsing sensation.",
        ),
        Disease::new(
            "meningitis",
            "Meningitis (Urgent)",
            "Inflammation of the brain and spinal cord membranes, typically caused by an infection.",
        ),
        Disease::new("covid19", "COVID-19", "A disease caused by a new coronavirus called SARS-CoV-2."),
        Disease::new("pneumonia", "Pneumonia", "An infection that inflames one or both lungs."),
        Disease::new("bronchitis", "Bronchitis", "Inflammation of the bronchial tubes."),
        Disease::new("strep_throat", "Strep Throat", "Bacterial infection causing sore throat."),
        Disease::new("asthma", "Asthma", "Condition causing airway narrowing and swelling."),
        Disease::new("sinusitis", "Sinusitis", "Inflammation of sinus lining."),
        Disease::new(
            "tension_headache",
            "Tension Headache",
            "Mild pain felt as a tight band around the head.",
        ),
    ]
}

// Não existe R9 no catálogo; os ids não são renumerados.
fn rules() -> Vec<Rule> {
    vec![
        Rule::new("R1", "flu", &[Fever, Cough, MuscleAche, Fatigue], 10).described(
            "Classic flu presentation with systemic body aches and respiratory symptoms.",
        ),
        Rule::new("R2", "cold", &[RunnyNose, SoreThroat, Sneezing], 5)
            .excluding(&[Fever])
            .described("Typical upper respiratory infection without significant fever."),
        Rule::new("R3", "allergies", &[ItchyEyes, Sneezing, RunnyNose], 8)
            .excluding(&[Fever])
            .described("Histamine response characterized by ocular itching and sneezing."),
        Rule::new("R4", "migraine", &[Headache, Nausea, LightSensitivity], 7)
            .described("Neurological headache involving sensory sensitivity and nausea."),
        Rule::new("R5", "meningitis", &[Fever, Headache, StiffNeck], 20)
            .described("Urgent bacterial/viral indicator with meningeal irritation triad."),
        Rule::new("R6", "covid19", &[Fever, Cough, ShortnessBreath], 15)
            .described("Lower respiratory infection with fever and shortness of breath."),
        Rule::new("R7", "flu", &[Fever, Headache, Fatigue], 9)
            .described("Systemic viral prodrome with high fever and fatigue."),
        Rule::new("R8", "pneumonia", &[Fever, Cough, ShortnessBreath, ChestPain], 18)
            .described("Acute pulmonary consolidation indicators."),
        Rule::new("R10", "bronchitis", &[Cough, Fatigue, ShortnessBreath], 11)
            .described("Inflammation of bronchial pathways causing persistent cough."),
        Rule::new("R11", "strep_throat", &[SoreThroat, Fever, Headache], 14)
            .excluding(&[Cough])
            .described("Bacterial pharyngitis usually lacks a viral-style cough."),
        Rule::new("R12", "asthma", &[ShortnessBreath, Cough, ChestPain], 13)
            .excluding(&[Fever])
            .described("Reactive airway disease without infectious indicators."),
        Rule::new("R13", "sinusitis", &[Headache, RunnyNose, Cough], 9)
            .described("Cranial pressure from sinus blockage with post-nasal drip."),
        Rule::new("R14", "tension_headache", &[Headache, Fatigue], 6)
            .excluding(&[Nausea])
            .described("Stress-related headache lacking gastric involvement."),
    ]
}
