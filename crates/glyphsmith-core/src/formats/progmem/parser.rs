use super::error::ProgmemError;
use super::layout;

/// Extract the ordered byte sequence from the lines of an embedded-literal
/// body. Line numbers in errors are 1-based over the input iterator.
pub fn parse_bytes<'a, I>(lines: I) -> Result<Vec<u8>, ProgmemError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut data = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with(layout::TOKEN_PREFIX) {
            continue;
        }
        for token in trimmed.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let byte = parse_token(token).ok_or_else(|| ProgmemError::MalformedToken {
                line: index + 1,
                token: token.to_string(),
            })?;
            data.push(byte);
        }
    }
    Ok(data)
}

fn parse_token(token: &str) -> Option<u8> {
    let digits = token.strip_prefix(layout::TOKEN_PREFIX)?;
    u8::from_str_radix(digits, 16).ok()
}
