use super::completeness::count_missing;
use crate::types::dataset::Dataset;
use crate::types::report::DatasetProfile;

pub fn dataset_profile(dataset: &Dataset) -> DatasetProfile {
    let counts = count_missing(dataset);
    let missing_percentage = if counts.total_cells == 0 {
        0.0
    } else {
        counts.missing_cells as f64 / counts.total_cells as f64 * 100.0
    };
    DatasetProfile {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        total_cells: counts.total_cells,
        missing_cells: counts.missing_cells,
        missing_percentage,
        sparse_columns: counts.sparse_columns,
        empty_columns: counts.empty_columns,
    }
}
