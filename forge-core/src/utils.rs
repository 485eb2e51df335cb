//! Shared naming helpers for code generation.

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

/// Convert a string to PascalCase (e.g., "order-service" -> "OrderService")
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_separator)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "OrderService" -> "order_service")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if is_separator(c) {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// PascalCase with a capital after every digit run, matching how
/// protoc-gen-go names Go identifiers (`s3proxy` -> `S3Proxy`).
pub fn to_go_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut after_digit = false;
    for c in to_pascal_case(s).chars() {
        if after_digit {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        after_digit = c.is_ascii_digit();
    }
    result
}
