//! Value parsers for command-line arguments.

use rigorient_core::ParseError;

/// Parse `"x,y,z"` (whitespace around components allowed) into three floats.
pub fn parse_triple(s: &str) -> Result<[f64; 3], ParseError> {
    let mut out = [0.0; 3];
    let mut parts = s.split(',');
    for slot in &mut out {
        *slot = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::new("triple", s))?;
    }
    if parts.next().is_some() {
        return Err(ParseError::new("triple", s));
    }
    Ok(out)
}
