pub(crate) fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn is_file_safe_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::{is_c_identifier, is_file_safe_name};

    #[test]
    fn c_identifier_rules() {
        assert!(is_c_identifier("left_arrow"));
        assert!(is_c_identifier("_tmp2"));
        assert!(!is_c_identifier("2fast"));
        assert!(!is_c_identifier("left-arrow"));
        assert!(!is_c_identifier(""));
    }

    #[test]
    fn file_safe_name_rules() {
        assert!(is_file_safe_name("left_arrow"));
        assert!(is_file_safe_name("2190"));
        assert!(!is_file_safe_name("left arrow"));
        assert!(!is_file_safe_name(""));
    }
}
