use crate::error::Result;
use crate::mapper::map_type;
use crate::resolver::RefCache;
use crate::schema::parse_schema;

/// Synthetic primary-key column, always emitted first and never sorted.
const ID_COLUMN: &str = "id varchar primary key";

/// Compile the raw bytes of a JSON Schema document into a `create table`
/// statement for `table_name`.
///
/// A document with no top-level `properties` compiles to an empty string.
/// A top-level property literally named `id` is dropped in favor of the
/// synthetic primary-key column.
pub fn compile(data: &[u8], table_name: &str) -> Result<String> {
    let schema = parse_schema(data)?;
    let cache = RefCache::from_root(&schema);
    log::debug!(
        "Compiling schema into table {} ({} local definitions)",
        table_name,
        cache.len()
    );

    if schema.properties.is_empty() {
        return Ok(String::new());
    }

    let mut columns = Vec::with_capacity(schema.properties.len());
    for (name, prop) in &schema.properties {
        if name == "id" {
            continue;
        }
        let column_type = map_type(Some(prop), &cache)?;
        columns.push((name.as_str(), column_type));
    }
    columns.sort_by(|a, b| a.0.cmp(b.0));

    let mut lines = Vec::with_capacity(columns.len() + 1);
    lines.push(format!("\t{}", ID_COLUMN));
    for (name, column_type) in columns {
        lines.push(format!("\t, {} {}", name, column_type));
    }

    Ok(format!(
        "create table {} (\n{}\n);",
        table_name,
        lines.join("\n")
    ))
}
