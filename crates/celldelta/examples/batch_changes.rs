//! Example: record a batch of cell changes and resolve a label
//!
//! Run with: cargo run --example batch_changes

use celldelta::prelude::*;

fn main() -> Result<()> {
    // Anchor the tax rate absolutely so copies keep pointing at it
    let rate = CellRef::parse("$B$1")?;

    let mut labels = LabelDirectory::new();
    labels.define(LabelMapping::new(LabelName::new("TaxRate")?, rate))?;

    // One coherent batch of edits against spreadsheet 42
    let delta = Delta::builder(SpreadsheetId::new(42))
        .set(Cell::new(rate, "0.0725"))
        .set(Cell::new(CellRef::parse("A2")?, "100"))
        .set(Cell::new(CellRef::parse("C2")?, "A2*TaxRate"))
        .build();

    println!("{}", delta);
    for cell in delta.cells_sorted() {
        println!("  {} -> {}", cell.reference(), cell.formula());
    }

    let resolved = labels.resolve("TaxRate").expect("label was just defined");
    println!("TaxRate resolves to {}", resolved);

    Ok(())
}
