//! The catalog: every component configured in each state worth looking at.

mod data_table;
mod input_field;

/// Render a table story, reporting access faults inline.
fn table_story<T: trellis::Record>(table: &trellis::table::DataTable<T>) -> Vec<String> {
    match table.view() {
        Ok(view) => crate::render::table_lines(&view),
        Err(e) => {
            log::error!("{}: {}", table.id(), e);
            vec![format!("error: {}", e)]
        }
    }
}
