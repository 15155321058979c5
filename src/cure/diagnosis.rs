use crate::model::{DiseaseCatalog, DiseasePrototype};

use super::steps::{CureStep, number};

/// Coarse label for a disease's resistance to brute-force cures.
pub fn cure_resist_label(cure_resist: f32) -> &'static str {
    if cure_resist < 0.0 {
        "none"
    } else if cure_resist <= 0.05 {
        "low"
    } else if cure_resist <= 0.14 {
        "medium"
    } else {
        "high"
    }
}

/// Plain-text report of everything known to cure `disease`, stage by stage.
pub fn diagnosis_report(
    disease: &DiseasePrototype,
    catalog: &DiseaseCatalog,
    cycle_seconds: f32,
) -> Vec<String> {
    let mut lines = vec![
        format!("Disease: {}", disease.display_name()),
        format!("Cure resistance: {}", cure_resist_label(disease.cure_resist)),
    ];

    for stage in &disease.stages {
        lines.push(format!("Stage {}:", stage.stage));
        let steps = if stage.cure_steps.is_empty() {
            &disease.cure_steps
        } else {
            &stage.cure_steps
        };
        push_steps(&mut lines, steps, catalog, cycle_seconds, "  ");

        for symptom_id in &stage.symptoms {
            let Some(symptom) = catalog.symptom(symptom_id) else {
                continue;
            };
            if symptom.cure_steps.is_empty() || !(symptom.cure_duration > 0.0) {
                continue;
            }
            lines.push(format!(
                "  {} (relieved for about {} seconds):",
                symptom.display_name(),
                number(symptom.cure_duration)
            ));
            push_steps(&mut lines, &symptom.cure_steps, catalog, cycle_seconds, "    ");
        }
    }
    lines
}

fn push_steps(
    lines: &mut Vec<String>,
    steps: &[CureStep],
    catalog: &DiseaseCatalog,
    cycle_seconds: f32,
    indent: &str,
) {
    if steps.is_empty() {
        lines.push(format!("{indent}No known cures."));
        return;
    }
    for step in steps {
        lines.extend(
            step.describe(catalog, cycle_seconds)
                .into_iter()
                .map(|line| format!("{indent}{line}")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cure::steps::ReagentRequirement;
    use crate::model::{DiseaseSymptomPrototype, StageConfig};

    #[test]
    fn resist_buckets() {
        assert_eq!(cure_resist_label(-0.1), "none");
        assert_eq!(cure_resist_label(0.0), "low");
        assert_eq!(cure_resist_label(0.05), "low");
        assert_eq!(cure_resist_label(0.1), "medium");
        assert_eq!(cure_resist_label(0.14), "medium");
        assert_eq!(cure_resist_label(0.5), "high");
    }

    #[test]
    fn report_walks_stages_and_symptoms() {
        let mut disease = DiseasePrototype::new("flu")
            .with_stage(StageConfig::new(1).with_symptom("cough"))
            .with_stage(
                StageConfig::new(2)
                    .with_symptom("cough")
                    .with_cure_step(CureStep::bedrest(0.1, 3.0).lowering_stage()),
            )
            .with_cure_step(CureStep::reagent(vec![ReagentRequirement::new(
                "spaceacillin",
                5.0,
            )]));
        disease.name = "Space Flu".to_string();
        let cough = DiseaseSymptomPrototype::new("cough")
            .with_cure_duration(30.0)
            .with_cure_step(CureStep::wait(10, 1.0));
        let catalog = DiseaseCatalog::new()
            .with_symptom(cough)
            .with_reagent("spaceacillin", "Spaceacillin");

        let report = diagnosis_report(&disease, &catalog, 1.0);
        assert_eq!(report[0], "Disease: Space Flu");
        assert_eq!(report[1], "Cure resistance: low");
        assert_eq!(report[2], "Stage 1:");
        assert_eq!(report[3], "  Requires all of the following in the bloodstream:");
        assert_eq!(report[4], "    5u Spaceacillin");
        assert_eq!(report[5], "  cough (relieved for about 30 seconds):");
        assert!(report.contains(&"Stage 2:".to_string()));
        assert!(report.contains(&"  Only lowers the disease by one stage.".to_string()));
    }

    #[test]
    fn no_cures_is_reported() {
        let disease = DiseasePrototype::new("chronic").with_stage(StageConfig::new(1));
        let report = diagnosis_report(&disease, &DiseaseCatalog::new(), 1.0);
        assert_eq!(report.last().map(String::as_str), Some("  No known cures."));
    }
}
