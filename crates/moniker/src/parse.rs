use crate::{Config, Mode, Plurality, QuerySpec};

use moniker_core::{schema::Name, Error, Result};

const BY: &str = "By";
const FROM: &str = "From";

/// Field phrase selecting the primary key fast path.
const ID: &str = "Id";

/// Parse an identifier such as `UsersByLastName` or `EmployerFromUser`.
///
/// The identifier must contain exactly one `By` or `From` token. Parsing is pure:
/// the same identifier and configuration always yield an equal [`QuerySpec`].
/// Callers normally go through [`Registry::resolve`](crate::Registry::resolve),
/// which memoizes the result.
pub fn parse(identifier: &str, config: &Config) -> Result<QuerySpec> {
    let name = Name::new(identifier);

    let keywords: Vec<(usize, &str)> = name
        .parts
        .iter()
        .enumerate()
        .filter(|(_, part)| *part == BY || *part == FROM)
        .map(|(index, part)| (index, part.as_str()))
        .collect();

    let (index, keyword) = match keywords[..] {
        [] => {
            return Err(Error::unresolvable_name(
                identifier,
                "expected a `By` or `From` keyword",
            ))
        }
        [keyword] => keyword,
        _ => {
            return Err(Error::unresolvable_name(
                identifier,
                "more than one `By`/`From` keyword",
            ))
        }
    };

    let (left, right) = name.split_at_keyword(index);

    if keyword == BY {
        parse_query(identifier, &left, &right, config)
    } else {
        parse_association(identifier, &left, &right, config)
    }
}

fn parse_query(identifier: &str, model: &Name, field: &Name, config: &Config) -> Result<QuerySpec> {
    if model.is_empty() {
        return Err(Error::unresolvable_name(
            identifier,
            "missing model before `By`",
        ));
    }

    let inflections = &config.inflections;
    let key_lookup = field.parts == [ID];

    let field = if field.is_empty() {
        None
    } else if key_lookup {
        Some(config.primary_key.clone())
    } else {
        Some(field.snake_case())
    };

    Ok(QuerySpec {
        identifier: identifier.to_string(),
        mode: Mode::Query,
        plurality: Plurality::of(inflections.is_plural(model)),
        subject_model: inflections.singularize(model),
        field,
        target_association: None,
        key_lookup,
    })
}

fn parse_association(
    identifier: &str,
    target: &Name,
    source: &Name,
    config: &Config,
) -> Result<QuerySpec> {
    if target.is_empty() {
        return Err(Error::unresolvable_name(
            identifier,
            "missing association before `From`",
        ));
    }

    if source.is_empty() {
        return Err(Error::unresolvable_name(
            identifier,
            "missing model after `From`",
        ));
    }

    let inflections = &config.inflections;

    Ok(QuerySpec {
        identifier: identifier.to_string(),
        mode: Mode::Association,
        plurality: Plurality::of(inflections.is_plural(target)),
        subject_model: inflections.singularize(source),
        field: None,
        target_association: Some(target.snake_case()),
        key_lookup: false,
    })
}
