//! Mock person records (name, phone, email, gender) shaped into tables and
//! rendered as HTML, CSV, JSON or SQL inserts.

pub mod generator;
pub mod models;
pub mod render;
pub mod table;

pub use generator::{
    email_for, generate_email, generate_email_with, generate_gender, generate_gender_with,
    generate_name, generate_name_with, generate_person, generate_person_with, generate_phone,
};
pub use models::{Gender, Person};
pub use render::{OutputFormat, to_html, to_json, to_sql, write_table};
pub use table::{
    DEFAULT_ROW_COUNT, HEADERS, MAX_ROW_COUNT, RowCount, Table, render_table, render_table_with,
};
