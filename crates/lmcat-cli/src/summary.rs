use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lmcat_model::{Availability, Entity};
use lmcat_report::cutoff_text;

use lmcat_cli::types::{CatalogResult, ExtractResult};

pub fn print_extract_summary(result: &ExtractResult) {
    println!("Forest: {}", result.output_dir.display());
    println!(
        "Models: {}  Variants: {}",
        result.forest.records, result.forest.variants
    );
}

pub fn print_catalog_summary(result: &CatalogResult) {
    println!("Data: {}", result.data_dir.display());
    if let Some(site) = &result.site {
        for page in &site.pages {
            println!("Page: {}", page.display());
        }
        println!("Catalog: {}", site.catalog.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Model id"),
        header_cell("License"),
        header_cell("Released"),
        header_cell("Size"),
        header_cell("Weights"),
        header_cell("API"),
        header_cell("Chat"),
        header_cell("Cutoff"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Center);

    for entity in &result.entities {
        table.add_row(entity_row(entity));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.entities.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn entity_row(entity: &Entity) -> Vec<Cell> {
    vec![
        Cell::new(&entity.name).add_attribute(Attribute::Bold),
        text_cell(&entity.model_id),
        text_cell(&entity.license),
        text_cell(&entity.release_date),
        text_cell(&entity.size),
        availability_cell(&entity.weight_availability),
        availability_cell(&entity.public_api_availability),
        availability_cell(&entity.online_chat_availability),
        match &entity.knowledge_cutoff {
            Some(cutoff) => Cell::new(cutoff_text(cutoff)),
            None => dim_cell("-"),
        },
    ]
}

fn availability_cell(availability: &Availability) -> Cell {
    if availability.available_now {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else if availability.planned == Some(true) {
        Cell::new("…").fg(Color::Yellow)
    } else {
        dim_cell("-")
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
