use std::path::PathBuf;

pub const SOURCE_PATH: &str = "datasets/epl.csv";
pub const DEST_PATH: &str = "datasets/epl_cleaned.csv";
pub const TARGET_COLUMN: &str = "Qualification or relegation";

/// Inputs of one cleaning run. `Default` is the fixed production setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub column: String,
    /// Prepend an unnamed, zero-based row index column to the output.
    pub write_index: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            dest: PathBuf::from(DEST_PATH),
            column: TARGET_COLUMN.to_string(),
            write_index: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_epl_dataset() {
        let c = Config::default();
        assert_eq!(c.source, PathBuf::from("datasets/epl.csv"));
        assert_eq!(c.dest, PathBuf::from("datasets/epl_cleaned.csv"));
        assert_eq!(c.column, "Qualification or relegation");
        assert!(c.write_index);
    }
}
