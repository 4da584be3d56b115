//! Render one statement under every shipped personality.
//!
//! Run with:
//!   cargo run --example personalities -p sqlweave

use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use sqlweave::{
    Built, KeyedOptions, ListOptions, MySql, Personality, Positional, Postgres, SqlResult,
    Sqlite, Statement, Value, identifier, keyed_with, list_with, sql,
};

fn search_users(status: Option<&str>, team: Option<i64>, roles: &[&str]) -> Statement {
    let filters = keyed_with(
        [("status", status.map(Value::from)), ("team_id", team.map(Value::from))],
        KeyedOptions::new().join("AND").prefix("WHERE"),
    );
    let roles = list_with(
        roles.iter().copied(),
        ListOptions::new().prefix("AND role IN (").suffix(")"),
    );
    let columns = list_with(
        ["id", "name", "role"].map(identifier),
        ListOptions::default(),
    );
    sql!(
        "SELECT {columns} FROM {} {filters} {roles} LIMIT {}",
        identifier("public.users"),
        50_i64
    )
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn create_table(rows: &[(&str, Built)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Personality")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("SQL")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("Params")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
        ]);

    for (name, built) in rows {
        let params = serde_json::to_string(&built.params).unwrap_or_default();
        table.add_row(vec![
            Cell::new(name).fg(Color::Yellow),
            Cell::new(squash(&built.text)).fg(Color::White),
            Cell::new(params).fg(Color::Magenta),
        ]);
    }

    table
}

fn main() -> SqlResult<()> {
    println!("{}", "sqlweave personalities".bold().green());

    let stmt = search_users(Some("active"), None, &["admin", "owner"]);

    let personalities: [&dyn Personality; 5] = [
        &Positional,
        &Postgres::new(),
        &Postgres::new().qualified(true),
        &MySql::new().qualified(true),
        &Sqlite::new(),
    ];
    let mut rows = Vec::new();
    for personality in personalities {
        rows.push((personality.name(), stmt.build_with(personality)?));
    }

    println!("{}", create_table(&rows));
    Ok(())
}
