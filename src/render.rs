use anyhow::Result;
use clap::ValueEnum;
use csv_async::AsyncWriter;
use serde_json::{Value, json};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use std::fmt::Write as _;

use crate::models::Person;
use crate::table::{HEADERS, Table};

// Rows are buffered and written in chunks to limit the per-row write overhead
const CHUNK_SIZE: usize = 1000;

pub const SQL_TABLE: &str = "people";
const SQL_COLUMNS: &str = "code, name, phone, email, gender";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Csv,
    Json,
    Sql,
}

/// Escapes the characters that are significant inside HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn html_head() -> String {
    let mut head = String::from("<table><thead><tr>");
    for header in HEADERS {
        let _ = write!(head, "<th>{}</th>", escape_html(header));
    }
    head.push_str("</tr></thead><tbody>");
    head
}

fn push_html_row(buffer: &mut String, index: usize, person: &Person) {
    let class = if index % 2 == 0 { "even" } else { "odd" };
    let _ = write!(buffer, "<tr class=\"{}\">", class);
    for cell in person.cells() {
        let _ = write!(buffer, "<td>{}</td>", escape_html(&cell));
    }
    buffer.push_str("</tr>");
}

const HTML_TAIL: &str = "</tbody></table>";

/// Renders the table as a self-contained HTML fragment. Body rows alternate
/// between the `even` and `odd` classes.
pub fn to_html(table: &Table) -> String {
    let mut html = html_head();
    for (i, person) in table.rows.iter().enumerate() {
        push_html_row(&mut html, i, person);
    }
    html.push_str(HTML_TAIL);
    html
}

pub fn to_json(table: &Table) -> Value {
    json!({
        "headers": table.headers,
        "rows": table.rows,
    })
}

/// Single-quotes a SQL string literal, doubling embedded quotes.
pub fn quote_sql(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn push_sql_insert(buffer: &mut String, _index: usize, person: &Person) {
    let _ = writeln!(
        buffer,
        "INSERT INTO {} ({}) VALUES({}, {}, {}, {}, {});",
        SQL_TABLE,
        SQL_COLUMNS,
        person.code,
        quote_sql(&person.name),
        quote_sql(&person.phone),
        quote_sql(&person.email),
        quote_sql(person.gender.as_str()),
    );
}

/// One `INSERT` statement per row; `code` is the only unquoted value.
pub fn to_sql(table: &Table) -> String {
    let mut sql = String::new();
    for (i, person) in table.rows.iter().enumerate() {
        push_sql_insert(&mut sql, i, person);
    }
    sql
}

pub async fn write_table<W>(table: &Table, format: OutputFormat, writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match format {
        OutputFormat::Html => write_html(table, writer).await,
        OutputFormat::Csv => write_csv(table, writer).await,
        OutputFormat::Json => write_json(table, writer).await,
        OutputFormat::Sql => write_sql(table, writer).await,
    }
}

async fn write_rows<W, F>(writer: &mut W, rows: &[Person], mut push_row: F) -> Result<()>
where
    W: AsyncWrite + Unpin,
    F: FnMut(&mut String, usize, &Person),
{
    let mut buffer = String::with_capacity(CHUNK_SIZE * 120);
    for (i, person) in rows.iter().enumerate() {
        push_row(&mut buffer, i, person);

        if (i + 1) % CHUNK_SIZE == 0 {
            writer.write_all(buffer.as_bytes()).await?;
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        writer.write_all(buffer.as_bytes()).await?;
    }

    Ok(())
}

async fn write_html<W>(table: &Table, mut writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(html_head().as_bytes()).await?;
    write_rows(&mut writer, &table.rows, push_html_row).await?;
    writer.write_all(HTML_TAIL.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

async fn write_sql<W>(table: &Table, mut writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_rows(&mut writer, &table.rows, push_sql_insert).await?;
    writer.flush().await?;

    Ok(())
}

async fn write_csv<W>(table: &Table, writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = AsyncWriter::from_writer(writer);

    writer.write_record(&table.headers).await?;
    for person in &table.rows {
        writer.write_record(&person.cells()).await?;
    }

    writer.flush().await?;

    Ok(())
}

async fn write_json<W>(table: &Table, mut writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = serde_json::to_vec_pretty(&to_json(table))?;
    bytes.push(b'\n');

    writer.write_all(&bytes).await?;
    writer.flush().await?;

    Ok(())
}
