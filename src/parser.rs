use crate::errors::FloorError;
use crate::floor::FloorPlan;
use crate::model::{Booth, BoothId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const PRE_BOOKED_FLAG: &str = "pre-booked";
const PRICE_ATTR: &str = "price=";

pub fn load_floor(path: &Path) -> Result<FloorPlan, FloorError> {
    if !path.exists() {
        return Err(FloorError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let floor = parse_floor(&content)?;
    debug!(path = %path.display(), booths = floor.len(), "loaded floor file");
    Ok(floor)
}

/// Parses the floor format: one booth per line as
/// `<id> [price=<raw>] [pre-booked]`. Blank lines and `#` comments are skipped.
pub fn parse_floor(content: &str) -> Result<FloorPlan, FloorError> {
    let mut booths = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = match raw_line.split_once('#') {
            Some((before, _)) => before,
            None => raw_line,
        };

        let mut tokens = line.split_whitespace();
        let Some(id) = tokens.next() else {
            continue;
        };

        let mut booth = Booth::new(id, None);
        for token in tokens {
            if token == PRE_BOOKED_FLAG {
                booth.pre_booked = true;
            } else if let Some(value) = token.strip_prefix(PRICE_ATTR) {
                if value.is_empty() {
                    return Err(FloorError::EmptyPrice { line: line_no });
                }
                booth.price_attr = Some(value.to_string());
            } else {
                return Err(FloorError::UnknownAttribute {
                    attr: token.to_string(),
                    line: line_no,
                });
            }
        }

        if !seen.insert(id.to_string()) {
            return Err(FloorError::DuplicateBooth {
                id: BoothId::from(id),
                line: line_no,
            });
        }
        booths.push(booth);
    }

    FloorPlan::new(booths)
}
