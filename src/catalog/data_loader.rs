use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use super::ingredient::{Ingredient, IngredientCategory, Nutrients, Unit};
use super::Catalog;

// Expected column headers
const KEY_COL: &str = "key";
const NAME_COL: &str = "name";
const UNIT_COL: &str = "unit";
const CATEGORY_COL: &str = "category";
const COST_COL: &str = "cost_per_unit";
const CALORIES_COL: &str = "calories";
const PROTEIN_COL: &str = "protein";
const CARBS_COL: &str = "carbs";
const FATS_COL: &str = "fats";
const FIBER_COL: &str = "fiber";
const SUGAR_COL: &str = "sugar";
const SODIUM_COL: &str = "sodium";

fn parse_f64(raw: Option<&str>, column: &str, row_index: usize) -> Result<f64> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let value = raw
        .parse::<f64>()
        .with_context(|| format!("Invalid '{}' value '{}' at row {}", column, raw, row_index))?;
    if !value.is_finite() || value < 0.0 {
        return Err(anyhow::anyhow!(
            "Column '{}' must be a non-negative number at row {} (got {})",
            column,
            row_index,
            value
        ));
    }
    Ok(value)
}

/// Loads an ingredient catalog from CSV. Empty nutrient cells read as zero.
///
/// Quantities follow the same basis rules as the built-in catalog: metric
/// rows describe 100 g/ml, spoon rows describe a single spoon.
pub fn load_catalog_csv(csv_path: &Path) -> Result<Catalog> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Catalog CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open catalog CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", name))
    };

    let key_idx = column(KEY_COL)?;
    let name_idx = column(NAME_COL)?;
    let unit_idx = column(UNIT_COL)?;
    let category_idx = column(CATEGORY_COL)?;
    let cost_idx = column(COST_COL)?;
    let nutrient_idx = [
        column(CALORIES_COL)?,
        column(PROTEIN_COL)?,
        column(CARBS_COL)?,
        column(FATS_COL)?,
        column(FIBER_COL)?,
        column(SUGAR_COL)?,
        column(SODIUM_COL)?,
    ];

    let mut entries = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let key = record.get(key_idx).unwrap_or("").trim().to_string();
        if key.is_empty() {
            tracing::debug!(row_index, "skipping catalog row without a key");
            continue;
        }

        let name = match record.get(name_idx).map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => key.replace('_', " "),
        };
        let unit: Unit = record
            .get(unit_idx)
            .unwrap_or("")
            .parse()
            .map_err(|e| anyhow::anyhow!("{} at row {}", e, row_index))?;
        let category: IngredientCategory = record
            .get(category_idx)
            .unwrap_or("")
            .parse()
            .map_err(|e| anyhow::anyhow!("{} at row {}", e, row_index))?;
        let cost_per_unit = parse_f64(record.get(cost_idx), COST_COL, row_index)?;

        let mut values = [0.0_f64; 7];
        for (slot, (idx, col)) in values.iter_mut().zip(nutrient_idx.iter().zip(Nutrients::KEYS)) {
            *slot = parse_f64(record.get(*idx), col, row_index)?;
        }
        let [calories, protein, carbs, fats, fiber, sugar, sodium] = values;

        entries.push((
            key,
            Ingredient {
                name,
                quantity: unit.budget_reference_quantity(),
                unit,
                category,
                cost_per_unit,
                per_unit: Nutrients::new(calories, protein, carbs, fats, fiber, sugar, sodium),
            },
        ));
    }

    if entries.is_empty() {
        return Err(anyhow::anyhow!("No valid catalog entries loaded from {:?}", csv_path));
    }

    tracing::info!(entries = entries.len(), path = ?csv_path, "loaded ingredient catalog");
    Ok(Catalog::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "key,name,unit,category,cost_per_unit,calories,protein,carbs,fats,fiber,sugar,sodium";

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "millet,foxtail millet,g,grain,0.12,119,3.5,23.7,1,1.3,0.1,2")?;
        writeln!(file, "mustard_oil,,tbsp,oil,0.10,124,0,0,14,0,0,0")?;
        writeln!(file, ",ghost,g,grain,1,1,1,1,1,1,1,1")?; // No key
        writeln!(file, "paneer,paneer,g,protein,0.60,265,18,2.2,20,,2.2,18")?; // Empty fiber
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_catalog_csv_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let catalog = load_catalog_csv(file.path())?;

        assert_eq!(catalog.len(), 3);

        let millet = catalog.get("millet").unwrap();
        assert_eq!(millet.name, "foxtail millet");
        assert_eq!(millet.unit, Unit::G);
        assert_eq!(millet.quantity, 100.0);
        assert_eq!(millet.per_unit.calories, 119.0);

        let oil = catalog.get("mustard_oil").unwrap();
        assert_eq!(oil.name, "mustard oil"); // Derived from the key
        assert_eq!(oil.quantity, 1.0);
        assert_eq!(oil.category, IngredientCategory::Oil);

        let paneer = catalog.get("paneer").unwrap();
        assert_eq!(paneer.per_unit.fiber, 0.0);
        assert_eq!(paneer.per_unit.sodium, 18.0);
        Ok(())
    }

    #[test]
    fn test_load_catalog_csv_missing_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "key,name,unit,category,calories,protein,carbs,fats,fiber,sugar,sodium")?;
        writeln!(file, "rice,rice,g,grain,130,2.7,28,0.3,0.4,0.1,1")?;
        file.flush()?;

        let result = load_catalog_csv(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Column 'cost_per_unit' not found"));
        Ok(())
    }

    #[test]
    fn test_load_catalog_csv_rejects_unknown_unit() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "rice,rice,handful,grain,0.1,130,2.7,28,0.3,0.4,0.1,1")?;
        file.flush()?;

        let err = load_catalog_csv(file.path()).unwrap_err().to_string();
        assert!(err.contains("unknown unit 'handful'"));
        assert!(err.contains("row 0"));
        Ok(())
    }

    #[test]
    fn test_load_catalog_csv_rejects_negative_cost() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "rice,rice,g,grain,-0.1,130,2.7,28,0.3,0.4,0.1,1")?;
        file.flush()?;

        assert!(load_catalog_csv(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_load_catalog_csv_empty_file_with_headers() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        file.flush()?;

        let result = load_catalog_csv(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No valid catalog entries"));
        Ok(())
    }

    #[test]
    fn test_load_catalog_csv_file_not_found() {
        let path = Path::new("this_catalog_does_not_exist.csv");
        let result = load_catalog_csv(path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Catalog CSV file not found"));
    }
}
