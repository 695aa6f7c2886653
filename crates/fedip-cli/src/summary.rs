use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fedip_model::{Answers, FALLBACK_PROFESSIONAL_BODY, ParsedRole, Recommendation, ReferenceTables};
use fedip_standards::LoadSummary;

use crate::commands::FamilyOverview;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_result_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn categories_table(tables: &ReferenceTables) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Professional Body"),
    ]);
    apply_table_style(&mut table);
    for (category, body) in &tables.base_categories {
        table.add_row(vec![Cell::new(category), Cell::new(body)]);
    }
    table
}

pub fn families_table(families: &[FamilyOverview]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Shape"),
        header_cell("Sub-buckets"),
        header_cell("Roles"),
        header_cell("Family Body"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for family in families {
        table.add_row(vec![
            Cell::new(&family.name).add_attribute(Attribute::Bold),
            dim_cell(if family.nested { "nested" } else { "flat" }),
            Cell::new(family.sub_buckets),
            Cell::new(family.roles),
            family
                .body
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn family_table(buckets: &[(String, Vec<String>)], tables: &ReferenceTables) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sub-bucket"),
        header_cell("Role"),
        header_cell("FEDIP Level"),
    ]);
    apply_table_style(&mut table);
    for (bucket, roles) in buckets {
        for (index, role) in roles.iter().enumerate() {
            let bucket_cell = if index == 0 {
                Cell::new(bucket)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let level_cell = tables
                .fedip_level(role)
                .map_or_else(|| dim_cell("-"), Cell::new);
            table.add_row(vec![bucket_cell, Cell::new(role), level_cell]);
        }
    }
    table
}

pub fn parsed_table(parsed: &[(String, ParsedRole)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Level"),
        header_cell("Base"),
        header_cell("Rank"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (title, role) in parsed {
        let level = if role.level.is_base() {
            dim_cell("(base)")
        } else {
            Cell::new(role.level)
        };
        table.add_row(vec![
            Cell::new(title),
            level,
            Cell::new(&role.base),
            Cell::new(role.level.rank()),
        ]);
    }
    table
}

pub fn recommendation_table(answers: &Answers, result: &Recommendation) -> Table {
    let mut table = Table::new();
    apply_result_table_style(&mut table);
    for (step, answer) in answers.iter() {
        table.add_row(vec![dim_cell(step.label()), Cell::new(answer)]);
    }
    let bodies = result.professional_body.iter().map(String::as_str);
    for (index, body) in bodies.enumerate() {
        let label = if index == 0 {
            Cell::new("Professional Body")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        let value = if body == FALLBACK_PROFESSIONAL_BODY {
            Cell::new(body).fg(Color::Yellow)
        } else {
            Cell::new(body).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![label, value]);
    }
    table.add_row(vec![
        Cell::new("FEDIP Level")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(&result.fedip_level).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn load_summary_table(summary: &LoadSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Manifest files", summary.file_count),
        ("Checksums verified", summary.verified_count),
        ("Base categories", summary.category_count),
        ("Job families", summary.family_count),
        ("Pre-nested families", summary.nested_family_count),
        ("Role titles", summary.role_title_count),
        ("FEDIP level mappings", summary.fedip_level_count),
        ("Body overrides", summary.override_count),
        ("Dangling overrides", summary.dangling_overrides.len()),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use fedip_model::{Level, Step};

    use super::*;

    fn plain(table: &mut Table) -> String {
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn parsed_table_marks_base_tier() {
        let parsed = vec![
            (
                "Senior Data Analyst".to_string(),
                ParsedRole::new(Level::Senior, "Data Analyst"),
            ),
            (
                "Data Analyst".to_string(),
                ParsedRole::base_tier("Data Analyst"),
            ),
        ];
        let rendered = plain(&mut parsed_table(&parsed));
        assert!(rendered.contains("Senior"));
        assert!(rendered.contains("(base)"));
    }

    #[test]
    fn recommendation_lists_every_body() {
        let answers = Answers::new()
            .with(Step::Category, "Clinician")
            .with(Step::Role, "Chief Clinical Information Officer");
        let result = Recommendation {
            professional_body: ["BCS", "Faculty of Clinical Informatics"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            fedip_level: "Leading Practitioner".to_string(),
        };
        let rendered = plain(&mut recommendation_table(&answers, &result));
        assert!(rendered.contains("Faculty of Clinical Informatics"));
        assert!(rendered.contains("BCS"));
        assert!(rendered.contains("Leading Practitioner"));
        assert!(rendered.contains("category"));
    }
}
