use crate::types::report::QualityReport;
use crate::types::scoring::Category;

pub fn to_markdown(report: &QualityReport) -> String {
    let mut output = String::new();
    output.push_str("# Data Quality Report\n\n");
    output.push_str(&format!("Source: {}\n\n", report.source));
    output.push_str(&format!("Evaluated at: {}\n\n", report.evaluated_at));
    output.push_str(&format!(
        "Overall score: {:.2} ({:?})\n\n",
        report.result.overall_score(),
        report.category
    ));

    output.push_str("## Criteria\n\n");
    output.push_str("| criterion | score | category |\n");
    output.push_str("|---|---|---|\n");
    for (criterion, score) in report.result.scores().iter() {
        output.push_str(&format!(
            "| {} | {:.2} | {:?} |\n",
            criterion.key(),
            score,
            Category::of(score)
        ));
    }
    output.push('\n');

    let profile = &report.profile;
    output.push_str("## Dataset Profile\n\n");
    output.push_str(&format!(
        "- rows: {}\n- columns: {}\n- total cells: {}\n- missing cells: {} ({:.2}%)\n- sparse columns: {}\n- empty columns: {}\n",
        profile.rows,
        profile.columns,
        profile.total_cells,
        profile.missing_cells,
        profile.missing_percentage,
        profile.sparse_columns,
        profile.empty_columns
    ));

    output
}
