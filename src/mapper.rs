use crate::error::{CompileError, Result};
use crate::resolver::RefCache;
use crate::schema::{Schema, SchemaType};

/// Upper bound on `$ref` hops along a single mapping path. Definitions that
/// reference each other in a loop trip this limit instead of recursing
/// without bound.
pub const MAX_REF_DEPTH: usize = 64;

/// Map a schema node to its SQL type expression.
///
/// `None` stands for an absent/under-specified schema and maps to `varchar`.
pub fn map_type(node: Option<&Schema>, cache: &RefCache) -> Result<String> {
    map_type_at(node, cache, 0)
}

fn map_type_at(node: Option<&Schema>, cache: &RefCache, depth: usize) -> Result<String> {
    let Some(node) = node else {
        return Ok("varchar".to_owned());
    };
    let (node, depth) = follow_refs(node, cache, depth)?;

    match &node.r#type {
        SchemaType::String => Ok(match node.format.as_str() {
            "date" => "date",
            "date-time" => "timestamp",
            "time" => "time",
            _ => "varchar",
        }
        .to_owned()),
        SchemaType::Integer => Ok("integer".to_owned()),
        SchemaType::Number => Ok("double".to_owned()),
        SchemaType::Boolean => Ok("boolean".to_owned()),
        SchemaType::Null => Ok("null".to_owned()),
        SchemaType::Array => match &node.items {
            Some(items) => {
                let item_type = map_type_at(Some(items), cache, depth)?;
                Ok(format!("array({})", item_type))
            }
            None => Ok("array(varchar)".to_owned()),
        },
        SchemaType::Object => {
            if node.properties.is_empty() {
                return Ok("row()".to_owned());
            }
            let mut fields = Vec::with_capacity(node.properties.len());
            for (name, prop) in &node.properties {
                fields.push((name.as_str(), map_type_at(Some(prop), cache, depth)?));
            }
            fields.sort_by(|a, b| a.0.cmp(b.0));
            let fields = fields
                .into_iter()
                .map(|(name, field_type)| format!("{} {}", name, field_type))
                .collect::<Vec<String>>();
            Ok(format!("row({})", fields.join(", ")))
        }
        SchemaType::Other(_) => Ok("varchar".to_owned()),
    }
}

/// Follow a chain of `$ref` pointers until a concrete node is reached,
/// accounting each hop against the depth bound.
fn follow_refs<'a>(
    node: &'a Schema,
    cache: &RefCache<'a>,
    mut depth: usize,
) -> Result<(&'a Schema, usize)> {
    let mut node = node;
    while !node.reference.is_empty() {
        if depth >= MAX_REF_DEPTH {
            return Err(CompileError::ReferenceDepthExceeded(node.reference.clone()));
        }
        node = cache.resolve(&node.reference)?;
        depth += 1;
    }
    Ok((node, depth))
}
