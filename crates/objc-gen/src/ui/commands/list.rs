use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  schema::{DataType, Schema},
  ui::{Colors, colors::IntoComfyColor, term_width},
};

pub async fn list_data_types(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let file_content = tokio::fs::read_to_string(input).await?;
  let schema = Schema::from_json(&file_content)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("NAMESPACE").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("TYPE").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("KIND").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("FIELDS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(row);

  for namespace in &schema.namespaces {
    for data_type in &namespace.data_types {
      let (kind, field_count) = match data_type {
        DataType::Struct(def) => ("struct", def.fields.len()),
        DataType::Union(def) => ("union", def.variants.len()),
      };

      let mut row = Row::new();
      row.add_cell(Cell::new(&namespace.name).fg(IntoComfyColor::into(colors.primary())));
      row.add_cell(
        Cell::new(data_type.name())
          .fg(IntoComfyColor::into(colors.value()))
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(Cell::new(kind).fg(IntoComfyColor::into(colors.accent())));
      row.add_cell(
        Cell::new(field_count)
          .fg(IntoComfyColor::into(colors.value()))
          .set_alignment(CellAlignment::Right),
      );
      table.add_row(row);
    }
  }

  println!("{table}");

  Ok(())
}
